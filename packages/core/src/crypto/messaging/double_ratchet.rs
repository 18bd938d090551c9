//! Double Ratchet Protocol Implementation
//!
//! Реализация протокола Double Ratchet (Signal Protocol).
//!
//! ## Архитектура
//!
//! Double Ratchet состоит из двух ratchets:
//! 1. **DH Ratchet** (`RootChain`): ротация DH ключей для
//!    post-compromise security
//! 2. **Symmetric Ratchet** (`MessageChain`): ротация chain keys для каждого
//!    сообщения (forward secrecy)
//!
//! ## Key Responsibilities
//!
//! - DH Ratcheting: новая DH пара при каждом "turn" в диалоге
//! - Chain Key Ratcheting: вывод message keys из chain keys
//! - Skipped Message Keys: кеш ключей для out-of-order сообщений
//! - DoS Protection: `max_skip` ограничивает skip-ahead за один вызов
//!
//! ## Dataflow Example
//!
//! ```text
//! Alice (initiator)                        Bob (responder)
//! -----------------                        ---------------
//! new(None, Some(bob_pub), secret, ..)     new(Some(bob_pair), None, secret, ..)
//!   ↓ root ratchet (sending)                 chains start keyless
//! encrypt(msg0) →                      →   decrypt(msg0)
//!                                            ↓ new epoch key in header
//!                                            ↓ DH ratchet: receiving chain,
//!                                              fresh key pair, sending chain
//!                                      ←   encrypt(reply)
//! decrypt(reply)
//!   ↓ new epoch key in header → DH ratchet
//! ...
//! ```

use crate::config::Config;
use crate::crypto::messaging::key_cache::MessageKeyCache;
use crate::crypto::messaging::message_chain::{MessageChain, MessageKey};
use crate::crypto::messaging::root_chain::{RootChain, RootKey};
use crate::crypto::messaging::session_state::SessionState;
use crate::crypto::provider::{CryptoProvider, KeyPair, Side};
use crate::error::{CryptoError, DoubleRatchetError};
use crate::protocol::messages::{Header, Message};
use crate::utils::b64;
use tracing::{debug, trace};

/// A skipped message key staged during decrypt, flushed to the cache only
/// once the whole call succeeds.
struct SkippedKey {
    message_key: MessageKey,
    message_number: u64,
    public_key: Vec<u8>,
}

/// Double Ratchet session with one remote party.
///
/// ## State Components
///
/// - `root_chain`: root key + local DH pair + last known remote epoch key
/// - `sending_chain` / `receiving_chain`: per-direction symmetric ratchets
/// - counters: position within the current epoch, previous chain length
/// - `message_key_cache`: optional collaborator for out-of-order delivery
///
/// Sessions are single-threaded: callers serialize all `encrypt`/`decrypt`
/// calls. Every failing operation leaves the session state exactly as it was
/// before the call.
pub struct DoubleRatchet<P: CryptoProvider> {
    max_skip: u64,

    root_chain: RootChain<P>,
    sending_chain: MessageChain<P>,
    receiving_chain: MessageChain<P>,

    send_message_number: u64,
    received_message_number: u64,
    previous_sending_chain_length: u64,

    message_key_cache: Option<Box<dyn MessageKeyCache + Send>>,
}

impl<P: CryptoProvider> DoubleRatchet<P> {
    /// Creates a fresh session.
    ///
    /// - `own_key_pair`: local DH pair; generated via the provider if absent.
    /// - `remote_public_key`: supplying it makes this side the epoch
    ///   initiator — one sending root ratchet step happens immediately, so
    ///   the session can encrypt before receiving anything. Without it both
    ///   chains start keyless and the first DH step happens on the first
    ///   successful `decrypt`.
    /// - `shared_secret`: externally agreed 32-byte secret, used directly as
    ///   the initial root key.
    /// - `max_skip`: maximum skip distance permitted in a single operation.
    /// - `info`: domain-separation string for the root KDF.
    /// - `message_key_cache`: skipped-key store; pass `None` to disable
    ///   out-of-order recovery.
    pub fn new(
        own_key_pair: Option<KeyPair<P>>,
        remote_public_key: Option<P::PublicKey>,
        shared_secret: &[u8],
        max_skip: u64,
        info: String,
        message_key_cache: Option<Box<dyn MessageKeyCache + Send>>,
    ) -> Result<Self, DoubleRatchetError> {
        if shared_secret.len() != Config::global().shared_secret_length {
            return Err(DoubleRatchetError::Crypto(CryptoError::InvalidInputError(
                "Shared secret must be 32 bytes".to_string(),
            )));
        }
        let mut root_key = [0u8; 32];
        root_key.copy_from_slice(shared_secret);

        let key_pair = match own_key_pair {
            Some(key_pair) => key_pair,
            None => KeyPair::generate()?,
        };
        let is_initiator = remote_public_key.is_some();

        let mut session = Self {
            max_skip,
            root_chain: RootChain::new(
                key_pair,
                remote_public_key,
                RootKey::from(root_key),
                info,
            ),
            sending_chain: MessageChain::new(None),
            receiving_chain: MessageChain::new(None),
            send_message_number: 0,
            received_message_number: 0,
            previous_sending_chain_length: 0,
            message_key_cache,
        };

        // The initiator already knows the responder's epoch key, so its
        // sending chain can be keyed right away.
        if is_initiator {
            let chain_key = session.root_chain.ratchet_step(Side::Sending)?;
            session.sending_chain.set_chain_key(chain_key);
        }

        debug!(
            target: "crypto::double_ratchet",
            initiator = is_initiator,
            "Created session"
        );

        Ok(session)
    }

    /// Reconstructs a session from a snapshot.
    ///
    /// No fresh key material is generated: the restored session is a
    /// behaviorally equivalent continuation of the captured one.
    pub fn from_session_state(
        state: &SessionState,
        message_key_cache: Option<Box<dyn MessageKeyCache + Send>>,
    ) -> Result<Self, DoubleRatchetError> {
        let key_pair = KeyPair {
            secret_key: P::secret_key_from_bytes(&state.secret_key)?,
            public_key: P::public_key_from_bytes(&state.public_key)?,
        };
        let remote_public_key = state
            .remote_public_key
            .as_deref()
            .map(P::public_key_from_bytes)
            .transpose()?;

        Ok(Self {
            max_skip: state.max_skip,
            root_chain: RootChain::new(
                key_pair,
                remote_public_key,
                state.root_key.clone(),
                state.info.clone(),
            ),
            sending_chain: MessageChain::new(state.sending_chain_key.clone()),
            receiving_chain: MessageChain::new(state.receiving_chain_key.clone()),
            send_message_number: state.send_message_number,
            received_message_number: state.received_message_number,
            previous_sending_chain_length: state.previous_sending_chain_length,
            message_key_cache,
        })
    }

    /// Current local epoch public key, as sent in outgoing headers.
    pub fn public_key(&self) -> &P::PublicKey {
        &self.root_chain.key_pair.public_key
    }

    /// Exports a complete snapshot of the session.
    pub fn session_state(&self) -> SessionState {
        SessionState {
            root_key: self.root_chain.root_key().clone(),
            secret_key: self.root_chain.key_pair.secret_key.as_ref().to_vec(),
            public_key: self.root_chain.key_pair.public_key.as_ref().to_vec(),
            remote_public_key: self
                .root_chain
                .remote_public_key
                .as_ref()
                .map(|key| key.as_ref().to_vec()),
            sending_chain_key: self.sending_chain.chain_key().cloned(),
            receiving_chain_key: self.receiving_chain.chain_key().cloned(),
            send_message_number: self.send_message_number,
            received_message_number: self.received_message_number,
            previous_sending_chain_length: self.previous_sending_chain_length,
            info: self.root_chain.info().to_string(),
            max_skip: self.max_skip,
        }
    }

    /// Encrypts `plaintext` for the remote party.
    ///
    /// The header bytes concatenated with the caller's associated data are
    /// authenticated alongside the ciphertext.
    ///
    /// # Errors
    ///
    /// `ChainKeyMissing` if this side has never established a sending chain
    /// (a responder that has not decrypted anything yet). On any failure the
    /// session state is unchanged.
    pub fn encrypt(
        &mut self,
        plaintext: &[u8],
        associated_data: Option<&[u8]>,
    ) -> Result<Message, DoubleRatchetError> {
        trace!(
            target: "crypto::double_ratchet",
            plaintext_len = plaintext.len(),
            message_number = self.send_message_number,
            "Encrypting message"
        );

        // Stage the chain advance; commit only after the AEAD succeeded.
        let mut sending_chain = self.sending_chain.clone();
        let message_key = sending_chain.next_message_key()?;

        let header = Header {
            public_key: self.root_chain.key_pair.public_key.as_ref().to_vec(),
            number_of_messages_in_previous_sending_chain: self.previous_sending_chain_length,
            message_number: self.send_message_number,
        };

        let mut header_data = header.bytes();
        if let Some(associated_data) = associated_data {
            header_data.extend_from_slice(associated_data);
        }

        let nonce = P::generate_nonce(Config::global().xchacha_nonce_length)?;
        let ciphertext =
            P::aead_encrypt(message_key.as_bytes(), &nonce, plaintext, Some(&header_data))?;

        self.sending_chain = sending_chain;
        self.send_message_number += 1;

        let mut cipher = nonce;
        cipher.extend_from_slice(&ciphertext);
        Ok(Message { header, cipher })
    }

    /// Decrypts an incoming message.
    ///
    /// Handles the out-of-order fast path (cached skipped key), epoch
    /// changes (new remote public key in the header → DH ratchet step) and
    /// skip-ahead with key caching. All state mutation is staged and
    /// committed only after the AEAD tag verified; any failure leaves the
    /// session byte-identical to its pre-call state.
    pub fn decrypt(
        &mut self,
        message: &Message,
        associated_data: Option<&[u8]>,
    ) -> Result<Vec<u8>, DoubleRatchetError> {
        debug!(
            target: "crypto::double_ratchet",
            message_number = message.header.message_number,
            previous_chain_length = message.header.number_of_messages_in_previous_sending_chain,
            current_received = self.received_message_number,
            "Decrypting message"
        );

        // Out-of-order fast path: a cached skipped key decrypts the message
        // without touching any chain or counter. The lookup consumes the
        // entry either way.
        if let Some(cache) = self.message_key_cache.as_mut() {
            if let Some(message_key) =
                cache.get(message.header.message_number, &message.header.public_key)?
            {
                trace!(
                    target: "crypto::double_ratchet",
                    message_number = message.header.message_number,
                    "Found skipped message key"
                );
                return Self::decrypt_with_key(&message_key, message, associated_data);
            }
        }

        let header_public_key = P::public_key_from_bytes(&message.header.public_key)?;
        let is_current_epoch =
            self.root_chain.remote_public_key.as_ref() == Some(&header_public_key);

        // A current-epoch message we already passed and whose key is not
        // cached was consumed or evicted.
        if is_current_epoch && message.header.message_number < self.received_message_number {
            return Err(DoubleRatchetError::DiscardOldMessage);
        }

        // Stage every mutation against working copies; the session fields
        // are only reassigned after successful authentication.
        let mut root_chain = self.root_chain.clone();
        let mut sending_chain = self.sending_chain.clone();
        let mut receiving_chain = self.receiving_chain.clone();
        let mut send_message_number = self.send_message_number;
        let mut received_message_number = self.received_message_number;
        let mut previous_sending_chain_length = self.previous_sending_chain_length;
        let mut skipped_keys: Vec<SkippedKey> = Vec::new();

        if !is_current_epoch {
            // New epoch (or first-ever message). Close out the retiring
            // receiving chain first: its outstanding keys stay retrievable
            // under the previous epoch key.
            let retiring_epoch_key = root_chain
                .remote_public_key
                .as_ref()
                .map(|key| key.as_ref().to_vec())
                .unwrap_or_else(|| message.header.public_key.clone());
            Self::skip_received_messages(
                &mut receiving_chain,
                &mut received_message_number,
                message.header.number_of_messages_in_previous_sending_chain,
                &retiring_epoch_key,
                &mut skipped_keys,
                self.max_skip,
            )?;

            debug!(
                target: "crypto::double_ratchet",
                remote_public_key = %b64::encode(&message.header.public_key),
                "Performing DH ratchet step"
            );

            previous_sending_chain_length = send_message_number;
            send_message_number = 0;
            received_message_number = 0;

            root_chain.remote_public_key = Some(header_public_key.clone());
            let receiving_chain_key = root_chain.ratchet_step(Side::Receiving)?;
            receiving_chain.set_chain_key(receiving_chain_key);

            root_chain.rotate_key_pair(KeyPair::generate()?);
            let sending_chain_key = root_chain.ratchet_step(Side::Sending)?;
            sending_chain.set_chain_key(sending_chain_key);
        }

        Self::skip_received_messages(
            &mut receiving_chain,
            &mut received_message_number,
            message.header.message_number,
            &message.header.public_key,
            &mut skipped_keys,
            self.max_skip,
        )?;

        let message_key = receiving_chain.next_message_key()?;
        let plaintext = Self::decrypt_with_key(&message_key, message, associated_data)?;
        received_message_number += 1;

        // Commit. Cache inserts flush first so a failing collaborator cannot
        // leave the session half-ratcheted.
        if let Some(cache) = self.message_key_cache.as_mut() {
            for skipped in skipped_keys {
                cache.add(
                    skipped.message_key,
                    skipped.message_number,
                    &skipped.public_key,
                )?;
            }
        }
        self.root_chain = root_chain;
        self.sending_chain = sending_chain;
        self.receiving_chain = receiving_chain;
        self.send_message_number = send_message_number;
        self.received_message_number = received_message_number;
        self.previous_sending_chain_length = previous_sending_chain_length;

        Ok(plaintext)
    }

    /// Advances the receiving chain up to `next_message_number`, staging a
    /// skipped key for every derived position.
    fn skip_received_messages(
        receiving_chain: &mut MessageChain<P>,
        received_message_number: &mut u64,
        next_message_number: u64,
        epoch_public_key: &[u8],
        skipped_keys: &mut Vec<SkippedKey>,
        max_skip: u64,
    ) -> Result<(), DoubleRatchetError> {
        if next_message_number.saturating_sub(*received_message_number) > max_skip {
            return Err(DoubleRatchetError::ExceededMaxSkip);
        }

        while *received_message_number < next_message_number {
            let message_key = receiving_chain.next_message_key()?;
            skipped_keys.push(SkippedKey {
                message_key,
                message_number: *received_message_number,
                public_key: epoch_public_key.to_vec(),
            });
            *received_message_number += 1;
        }
        Ok(())
    }

    /// Decrypts with a concrete message key; no session state involved.
    fn decrypt_with_key(
        message_key: &MessageKey,
        message: &Message,
        associated_data: Option<&[u8]>,
    ) -> Result<Vec<u8>, DoubleRatchetError> {
        let nonce_length = Config::global().xchacha_nonce_length;
        if message.cipher.len() < nonce_length + Config::global().aead_tag_length {
            return Err(DoubleRatchetError::AuthenticationFailure);
        }
        let (nonce, ciphertext) = message.cipher.split_at(nonce_length);

        let mut header_data = message.header.bytes();
        if let Some(associated_data) = associated_data {
            header_data.extend_from_slice(associated_data);
        }

        P::aead_decrypt(message_key.as_bytes(), nonce, ciphertext, Some(&header_data))
            .map_err(|_| DoubleRatchetError::AuthenticationFailure)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::messaging::key_cache::InMemoryMessageKeyCache;
    use crate::crypto::suites::classic::ClassicSuiteProvider;

    type Session = DoubleRatchet<ClassicSuiteProvider>;

    const INFO: &str = "vesper-test-session";
    const SHARED_SECRET: [u8; 32] = [11u8; 32];

    fn cache(max_cache: usize) -> Option<Box<dyn MessageKeyCache + Send>> {
        Some(Box::new(InMemoryMessageKeyCache::new(max_cache)))
    }

    /// Bob is created first so Alice can be constructed against his public
    /// key; mirrors an externally authenticated key exchange.
    fn paired_sessions(max_skip: u64, max_cache: usize) -> (Session, Session) {
        let bob_key_pair: KeyPair<ClassicSuiteProvider> = KeyPair::generate().unwrap();
        let bob_public = bob_key_pair.public_key.clone();

        let alice = Session::new(
            None,
            Some(bob_public),
            &SHARED_SECRET,
            max_skip,
            INFO.to_string(),
            cache(max_cache),
        )
        .unwrap();
        let bob = Session::new(
            Some(bob_key_pair),
            None,
            &SHARED_SECRET,
            max_skip,
            INFO.to_string(),
            cache(max_cache),
        )
        .unwrap();
        (alice, bob)
    }

    #[test]
    fn test_round_trip() {
        let (mut alice, mut bob) = paired_sessions(20, 20);

        let message = alice.encrypt(b"hello bob", Some(b"metadata")).unwrap();
        let plaintext = bob.decrypt(&message, Some(b"metadata")).unwrap();
        assert_eq!(plaintext, b"hello bob");
    }

    #[test]
    fn test_round_trip_without_associated_data() {
        let (mut alice, mut bob) = paired_sessions(20, 20);

        let message = alice.encrypt(b"no ad", None).unwrap();
        assert_eq!(bob.decrypt(&message, None).unwrap(), b"no ad");
    }

    #[test]
    fn test_bidirectional_ratcheting_rotates_public_keys() {
        let (mut alice, mut bob) = paired_sessions(20, 20);
        let alice_start = alice.public_key().clone();
        let bob_start = bob.public_key().clone();

        let to_bob = alice.encrypt(b"ping", None).unwrap();
        bob.decrypt(&to_bob, None).unwrap();
        let to_alice = bob.encrypt(b"pong", None).unwrap();
        alice.decrypt(&to_alice, None).unwrap();

        assert_ne!(bob.public_key(), &bob_start);
        assert_ne!(alice.public_key(), &alice_start);
    }

    #[test]
    fn test_conversation_across_many_epochs() {
        let (mut alice, mut bob) = paired_sessions(20, 20);

        for round in 0..6u8 {
            let ping = alice.encrypt(&[round, 0], None).unwrap();
            assert_eq!(bob.decrypt(&ping, None).unwrap(), vec![round, 0]);
            let pong = bob.encrypt(&[round, 1], None).unwrap();
            assert_eq!(alice.decrypt(&pong, None).unwrap(), vec![round, 1]);
        }
    }

    #[test]
    fn test_out_of_order_delivery() {
        let (mut alice, mut bob) = paired_sessions(20, 20);

        let m0 = alice.encrypt(b"message 0", None).unwrap();
        let m1 = alice.encrypt(b"message 1", None).unwrap();
        let m2 = alice.encrypt(b"message 2", None).unwrap();

        assert_eq!(bob.decrypt(&m2, None).unwrap(), b"message 2");
        assert_eq!(bob.decrypt(&m1, None).unwrap(), b"message 1");
        assert_eq!(bob.decrypt(&m0, None).unwrap(), b"message 0");
    }

    #[test]
    fn test_skipped_key_is_consumed_once() {
        let (mut alice, mut bob) = paired_sessions(20, 20);

        let m0 = alice.encrypt(b"message 0", None).unwrap();
        let m1 = alice.encrypt(b"message 1", None).unwrap();

        bob.decrypt(&m1, None).unwrap();
        bob.decrypt(&m0, None).unwrap();

        // Replay of the skipped message: its key is gone.
        assert!(matches!(
            bob.decrypt(&m0, None),
            Err(DoubleRatchetError::DiscardOldMessage)
        ));
    }

    #[test]
    fn test_max_skip_enforcement() {
        let (mut alice, mut bob) = paired_sessions(1, 20);

        alice.encrypt(b"message 0", None).unwrap();
        alice.encrypt(b"message 1", None).unwrap();
        let m2 = alice.encrypt(b"message 2", None).unwrap();

        assert!(matches!(
            bob.decrypt(&m2, None),
            Err(DoubleRatchetError::ExceededMaxSkip)
        ));
    }

    #[test]
    fn test_failed_skip_leaves_session_usable() {
        let (mut alice, mut bob) = paired_sessions(1, 20);

        let m0 = alice.encrypt(b"message 0", None).unwrap();
        alice.encrypt(b"message 1", None).unwrap();
        let m2 = alice.encrypt(b"message 2", None).unwrap();

        assert!(bob.decrypt(&m2, None).is_err());
        // The rejected skip must not have advanced anything.
        assert_eq!(bob.decrypt(&m0, None).unwrap(), b"message 0");
    }

    #[test]
    fn test_cache_capacity_eviction() {
        let (mut alice, mut bob) = paired_sessions(20, 1);

        let m0 = alice.encrypt(b"message 0", None).unwrap();
        let m1 = alice.encrypt(b"message 1", None).unwrap();
        let m2 = alice.encrypt(b"message 2", None).unwrap();

        // Decrypting m2 caches keys 0 and 1; capacity 1 keeps only key 1.
        assert_eq!(bob.decrypt(&m2, None).unwrap(), b"message 2");
        assert_eq!(bob.decrypt(&m1, None).unwrap(), b"message 1");
        assert!(matches!(
            bob.decrypt(&m0, None),
            Err(DoubleRatchetError::DiscardOldMessage)
        ));
    }

    #[test]
    fn test_associated_data_binding() {
        let (mut alice, mut bob) = paired_sessions(20, 20);

        let message = alice.encrypt(b"bound", Some(b"right")).unwrap();
        assert!(matches!(
            bob.decrypt(&message, Some(b"wrong")),
            Err(DoubleRatchetError::AuthenticationFailure)
        ));
        // The failure must not have consumed the chain position.
        assert_eq!(bob.decrypt(&message, Some(b"right")).unwrap(), b"bound");
    }

    #[test]
    fn test_tampered_ciphertext_rejected_without_state_change() {
        let (mut alice, mut bob) = paired_sessions(20, 20);

        let mut message = alice.encrypt(b"intact", None).unwrap();
        let last = message.cipher.len() - 1;
        message.cipher[last] ^= 0x01;

        assert!(matches!(
            bob.decrypt(&message, None),
            Err(DoubleRatchetError::AuthenticationFailure)
        ));

        message.cipher[last] ^= 0x01;
        assert_eq!(bob.decrypt(&message, None).unwrap(), b"intact");
    }

    #[test]
    fn test_responder_cannot_encrypt_before_first_decrypt() {
        let key_pair: KeyPair<ClassicSuiteProvider> = KeyPair::generate().unwrap();
        let mut responder = Session::new(
            Some(key_pair),
            None,
            &SHARED_SECRET,
            20,
            INFO.to_string(),
            cache(20),
        )
        .unwrap();

        assert!(matches!(
            responder.encrypt(b"too early", None),
            Err(DoubleRatchetError::ChainKeyMissing)
        ));
    }

    #[test]
    fn test_rejects_short_shared_secret() {
        let result = Session::new(None, None, &[1u8; 16], 20, INFO.to_string(), None);
        assert!(result.is_err());
    }

    #[test]
    fn test_snapshot_restore_equivalence() {
        let (mut alice, mut bob) = paired_sessions(20, 20);

        let m0 = alice.encrypt(b"before snapshot", None).unwrap();
        bob.decrypt(&m0, None).unwrap();
        let reply = bob.encrypt(b"reply", None).unwrap();
        alice.decrypt(&reply, None).unwrap();

        let mut alice2 = Session::from_session_state(&alice.session_state(), cache(20)).unwrap();
        let mut bob2 = Session::from_session_state(&bob.session_state(), cache(20)).unwrap();

        let m1 = alice2.encrypt(b"after restore", None).unwrap();
        assert_eq!(bob2.decrypt(&m1, None).unwrap(), b"after restore");
        let m2 = bob2.encrypt(b"and back", None).unwrap();
        assert_eq!(alice2.decrypt(&m2, None).unwrap(), b"and back");
    }

    #[test]
    fn test_snapshot_restore_mixes_with_live_session() {
        let (mut alice, mut bob) = paired_sessions(20, 20);

        let m0 = alice.encrypt(b"one", None).unwrap();
        bob.decrypt(&m0, None).unwrap();

        // Restore only Alice; the live Bob keeps interoperating with her.
        let mut alice2 = Session::from_session_state(&alice.session_state(), cache(20)).unwrap();
        let m1 = alice2.encrypt(b"two", None).unwrap();
        assert_eq!(bob.decrypt(&m1, None).unwrap(), b"two");
    }

    #[test]
    fn test_session_without_cache_still_ratchets_in_order() {
        let bob_key_pair: KeyPair<ClassicSuiteProvider> = KeyPair::generate().unwrap();
        let bob_public = bob_key_pair.public_key.clone();

        let mut alice = Session::new(
            None,
            Some(bob_public),
            &SHARED_SECRET,
            20,
            INFO.to_string(),
            None,
        )
        .unwrap();
        let mut bob = Session::new(
            Some(bob_key_pair),
            None,
            &SHARED_SECRET,
            20,
            INFO.to_string(),
            None,
        )
        .unwrap();

        for i in 0..3u8 {
            let message = alice.encrypt(&[i], None).unwrap();
            assert_eq!(bob.decrypt(&message, None).unwrap(), vec![i]);
        }
    }
}
