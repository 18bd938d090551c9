//! Ratchet wire types: message header and envelope.

use serde::{Deserialize, Serialize};

/// Plaintext header accompanying every ratchet message.
///
/// Identifies the sender's current epoch (its DH public key) and the message
/// position, letting the receiver detect epoch changes and derive skipped
/// keys. The header is never encrypted but is authenticated: its canonical
/// bytes prefix the AEAD associated data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    /// Sender's epoch public key (provider-defined length, raw bytes).
    #[serde(with = "serde_bytes")]
    pub public_key: Vec<u8>,

    /// How many messages the sender's previous sending chain carried, so the
    /// receiver knows how far to close out the retiring chain.
    pub number_of_messages_in_previous_sending_chain: u64,

    /// Sequence number of this message within the sender's current chain.
    pub message_number: u64,
}

impl Header {
    /// Canonical byte layout, used verbatim as AEAD associated data:
    ///
    /// `public_key ‖ previous chain length (8-byte BE) ‖ message number
    /// (8-byte BE)`
    ///
    /// Counters are always 8 bytes wide regardless of the in-memory integer
    /// width, keeping the encoding deterministic across platforms.
    pub fn bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.public_key.len() + 16);
        bytes.extend_from_slice(&self.public_key);
        bytes.extend_from_slice(&self.number_of_messages_in_previous_sending_chain.to_be_bytes());
        bytes.extend_from_slice(&self.message_number.to_be_bytes());
        bytes
    }
}

/// One encrypted ratchet message: header plus `nonce ‖ ciphertext-with-tag`.
///
/// Byte-level framing of the whole envelope is delegated to a codec (see
/// `protocol::wire` for the MessagePack one); only `Header::bytes` is fixed
/// by the protocol itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub header: Header,
    #[serde(with = "serde_bytes")]
    pub cipher: Vec<u8>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_bytes_are_canonical() {
        let header = Header {
            public_key: hex::decode(
                "0efd0d78c9ba26b39588848ddf69b02807fb85916c2b004d7af759f932544443",
            )
            .unwrap(),
            number_of_messages_in_previous_sending_chain: 123456789,
            message_number: 987654321,
        };

        let expected = hex::decode(
            "0efd0d78c9ba26b39588848ddf69b02807fb85916c2b004d7af759f93254444300000000075bcd15000000003ade68b1",
        )
        .unwrap();
        assert_eq!(header.bytes(), expected);
    }

    #[test]
    fn test_header_bytes_length_tracks_public_key() {
        let header = Header {
            public_key: vec![0xAA; 33],
            number_of_messages_in_previous_sending_chain: 0,
            message_number: 0,
        };
        assert_eq!(header.bytes().len(), 33 + 8 + 8);
    }

    #[test]
    fn test_counters_encode_big_endian() {
        let header = Header {
            public_key: Vec::new(),
            number_of_messages_in_previous_sending_chain: 1,
            message_number: 256,
        };
        assert_eq!(
            header.bytes(),
            vec![0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 1, 0]
        );
    }
}
