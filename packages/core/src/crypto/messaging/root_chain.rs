//! DH ratchet: the root chain.
//!
//! Root key продвигается только на DH ratchet step: свежий DH session key
//! (role-dependent) вместе с текущим root key разворачивается через KDF в
//! новый root key и новый chain key.

use crate::crypto::messaging::message_chain::ChainKey;
use crate::crypto::provider::{CryptoProvider, KeyPair, Side};
use crate::error::DoubleRatchetError;
use serde::{Deserialize, Serialize};
use tracing::debug;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

/// KDF expansion width of one ratchet step: 32 bytes of new root key
/// followed by 32 bytes of fresh chain key.
const RATCHET_STEP_OUTPUT_LENGTH: usize = 64;

/// Root key of a session. 32 bytes, advanced only on DH ratchet steps.
#[derive(Clone, Serialize, Deserialize, Zeroize, ZeroizeOnDrop)]
pub struct RootKey(#[serde(with = "crate::utils::b64::key32")] [u8; 32]);

impl RootKey {
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Overwrites the key in place; the previous value is zeroized first and
    /// is not recoverable afterwards.
    fn advance(&mut self, new_key: [u8; 32]) {
        self.0.zeroize();
        self.0 = new_key;
    }
}

impl From<[u8; 32]> for RootKey {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

/// DH ratchet state: local key pair, last known remote public key, root key
/// and the domain-separation info string fed to the KDF.
pub struct RootChain<P: CryptoProvider> {
    pub key_pair: KeyPair<P>,
    pub remote_public_key: Option<P::PublicKey>,
    root_key: RootKey,
    info: String,
}

impl<P: CryptoProvider> RootChain<P> {
    pub fn new(
        key_pair: KeyPair<P>,
        remote_public_key: Option<P::PublicKey>,
        root_key: RootKey,
        info: String,
    ) -> Self {
        Self {
            key_pair,
            remote_public_key,
            root_key,
            info,
        }
    }

    pub fn root_key(&self) -> &RootKey {
        &self.root_key
    }

    pub fn info(&self) -> &str {
        &self.info
    }

    /// Performs one DH ratchet step for the given role.
    ///
    /// Expands `KDF(ikm = dh_session_key, salt = root_key, info)` into 64
    /// bytes, replaces the root key with the first half and returns the
    /// second half as the new chain key.
    ///
    /// # Errors
    ///
    /// `RemotePublicKeyMissing` if no remote public key is known yet.
    pub fn ratchet_step(&mut self, side: Side) -> Result<ChainKey, DoubleRatchetError> {
        let remote_public_key = self
            .remote_public_key
            .as_ref()
            .ok_or(DoubleRatchetError::RemotePublicKeyMissing)?;

        let session_key = Zeroizing::new(P::diffie_hellman(
            side,
            &self.key_pair,
            remote_public_key,
        )?);
        let okm = Zeroizing::new(P::derive_key(
            &session_key,
            self.root_key.as_bytes(),
            self.info.as_bytes(),
            RATCHET_STEP_OUTPUT_LENGTH,
        )?);
        if okm.len() != RATCHET_STEP_OUTPUT_LENGTH {
            return Err(DoubleRatchetError::Crypto(
                crate::error::CryptoError::KeyDerivationError(
                    "KDF returned unexpected output length".to_string(),
                ),
            ));
        }

        let mut new_root_key = [0u8; 32];
        new_root_key.copy_from_slice(&okm[..32]);
        let mut chain_key = [0u8; 32];
        chain_key.copy_from_slice(&okm[32..]);

        self.root_key.advance(new_root_key);

        debug!(
            target: "crypto::root_chain",
            side = ?side,
            "Root chain ratchet step"
        );

        Ok(ChainKey::from(chain_key))
    }

    /// Installs a fresh local key pair; the retiring secret key is zeroized.
    pub fn rotate_key_pair(&mut self, key_pair: KeyPair<P>) {
        let mut retired = std::mem::replace(&mut self.key_pair, key_pair);
        retired.secret_key.zeroize();
    }
}

impl<P: CryptoProvider> Clone for RootChain<P> {
    fn clone(&self) -> Self {
        Self {
            key_pair: self.key_pair.clone(),
            remote_public_key: self.remote_public_key.clone(),
            root_key: self.root_key.clone(),
            info: self.info.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::suites::classic::ClassicSuiteProvider;

    type Chain = RootChain<ClassicSuiteProvider>;

    fn paired_chains() -> (Chain, Chain) {
        let alice: KeyPair<ClassicSuiteProvider> = KeyPair::generate().unwrap();
        let bob: KeyPair<ClassicSuiteProvider> = KeyPair::generate().unwrap();
        let alice_public = alice.public_key.clone();
        let bob_public = bob.public_key.clone();

        let alice_chain = Chain::new(
            alice,
            Some(bob_public),
            RootKey::from([9u8; 32]),
            "test-session".to_string(),
        );
        let bob_chain = Chain::new(
            bob,
            Some(alice_public),
            RootKey::from([9u8; 32]),
            "test-session".to_string(),
        );
        (alice_chain, bob_chain)
    }

    #[test]
    fn test_ratchet_step_without_remote_key_fails() {
        let mut chain = Chain::new(
            KeyPair::generate().unwrap(),
            None,
            RootKey::from([9u8; 32]),
            "test-session".to_string(),
        );
        assert!(matches!(
            chain.ratchet_step(Side::Sending),
            Err(DoubleRatchetError::RemotePublicKeyMissing)
        ));
    }

    #[test]
    fn test_both_sides_derive_the_same_chain_key() {
        let (mut alice_chain, mut bob_chain) = paired_chains();

        let sending = alice_chain.ratchet_step(Side::Sending).unwrap();
        let receiving = bob_chain.ratchet_step(Side::Receiving).unwrap();

        assert_eq!(sending.as_bytes(), receiving.as_bytes());
        assert_eq!(
            alice_chain.root_key().as_bytes(),
            bob_chain.root_key().as_bytes()
        );
    }

    #[test]
    fn test_ratchet_step_replaces_root_key() {
        let (mut alice_chain, _) = paired_chains();
        alice_chain.ratchet_step(Side::Sending).unwrap();
        assert_ne!(alice_chain.root_key().as_bytes(), &[9u8; 32]);
    }

    #[test]
    fn test_rotate_key_pair_changes_public_key() {
        let (mut alice_chain, _) = paired_chains();
        let before = alice_chain.key_pair.public_key.clone();
        alice_chain
            .rotate_key_pair(KeyPair::generate().unwrap());
        assert_ne!(alice_chain.key_pair.public_key, before);
    }
}
