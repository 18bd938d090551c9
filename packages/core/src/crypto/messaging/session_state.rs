//! Serializable session snapshot.

use crate::crypto::messaging::message_chain::ChainKey;
use crate::crypto::messaging::root_chain::RootKey;
use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Complete snapshot of a Double Ratchet session.
///
/// Sufficient to reconstruct a session whose future `encrypt`/`decrypt`
/// behavior is indistinguishable from the original. Key material is stored
/// raw, so snapshots must be protected like any other secret; the struct
/// zeroizes itself on drop. The skipped-key cache is not part of the
/// snapshot — the cache is an injectable collaborator persisted separately.
///
/// Сериализация (MessagePack/JSON) — забота внешнего кодека, см.
/// `protocol::wire`.
#[derive(Clone, Serialize, Deserialize, Zeroize, ZeroizeOnDrop)]
pub struct SessionState {
    /// Current root key.
    pub root_key: RootKey,

    /// Local DH key pair of the current epoch.
    #[serde(with = "serde_bytes")]
    pub secret_key: Vec<u8>,
    #[serde(with = "serde_bytes")]
    pub public_key: Vec<u8>,

    /// Last known remote epoch public key, if any message was received or
    /// the session was constructed as an initiator.
    #[serde(with = "serde_bytes")]
    pub remote_public_key: Option<Vec<u8>>,

    /// Chain keys; absent until the corresponding direction is ratcheted.
    pub sending_chain_key: Option<ChainKey>,
    pub receiving_chain_key: Option<ChainKey>,

    /// Position counters within the current epoch.
    pub send_message_number: u64,
    pub received_message_number: u64,

    /// Length of the previous sending chain, communicated in every header.
    pub previous_sending_chain_length: u64,

    /// Domain-separation info string fed to the root KDF.
    pub info: String,

    /// Maximum permitted skip distance in a single decrypt.
    pub max_skip: u64,
}
