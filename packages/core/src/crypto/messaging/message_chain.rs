//! Symmetric ratchet: per-direction message chains.
//!
//! Каждое сообщение продвигает chain key на один шаг:
//! `message_key = MAC(ck, 0x01)`, `ck' = MAC(ck, 0x02)`.
//! Движение строго вперёд — старый ключ затирается и не восстановим.

use crate::crypto::provider::CryptoProvider;
use crate::error::DoubleRatchetError;
use serde::{Deserialize, Serialize};
use std::marker::PhantomData;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Single-byte domain-separation constants distinguishing the two MAC
/// derivations taken from the same chain key.
const MESSAGE_KEY_INPUT: [u8; 1] = [0x01];
const CHAIN_KEY_INPUT: [u8; 1] = [0x02];

/// Chain key of a message chain. 32 bytes, advanced one way per message.
#[derive(Clone, Serialize, Deserialize, Zeroize, ZeroizeOnDrop)]
pub struct ChainKey(#[serde(with = "crate::utils::b64::key32")] [u8; 32]);

impl ChainKey {
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl From<[u8; 32]> for ChainKey {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

/// One-time message key. Derived once from a chain key, used for exactly one
/// AEAD operation (except the temporary copy held by a skipped-key cache).
#[derive(Clone, Serialize, Deserialize, Zeroize, ZeroizeOnDrop)]
pub struct MessageKey(#[serde(with = "crate::utils::b64::key32")] [u8; 32]);

impl MessageKey {
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl From<[u8; 32]> for MessageKey {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

/// Per-direction symmetric ratchet.
///
/// The chain key is absent until the first DH ratchet step keys the chain;
/// every call site has to handle that case explicitly.
pub struct MessageChain<P: CryptoProvider> {
    chain_key: Option<ChainKey>,
    _provider: PhantomData<P>,
}

impl<P: CryptoProvider> MessageChain<P> {
    pub fn new(chain_key: Option<ChainKey>) -> Self {
        Self {
            chain_key,
            _provider: PhantomData,
        }
    }

    pub fn chain_key(&self) -> Option<&ChainKey> {
        self.chain_key.as_ref()
    }

    /// Replaces the chain key; the retiring key is zeroized on drop.
    pub fn set_chain_key(&mut self, chain_key: ChainKey) {
        self.chain_key = Some(chain_key);
    }

    /// Advances the chain one step and returns the emitted message key.
    ///
    /// # Errors
    ///
    /// - `ChainKeyMissing` if the chain has not been established yet
    /// - `MessageChainRatchetStepFailed` if the MAC primitive fails
    pub fn next_message_key(&mut self) -> Result<MessageKey, DoubleRatchetError> {
        let chain_key = self
            .chain_key
            .as_ref()
            .ok_or(DoubleRatchetError::ChainKeyMissing)?;

        let message_key = P::mac(chain_key.as_bytes(), &MESSAGE_KEY_INPUT)
            .map_err(|e| DoubleRatchetError::MessageChainRatchetStepFailed(e.to_string()))?;
        let next_chain_key = P::mac(chain_key.as_bytes(), &CHAIN_KEY_INPUT)
            .map_err(|e| DoubleRatchetError::MessageChainRatchetStepFailed(e.to_string()))?;

        self.chain_key = Some(ChainKey::from(next_chain_key));
        Ok(MessageKey::from(message_key))
    }
}

impl<P: CryptoProvider> Clone for MessageChain<P> {
    fn clone(&self) -> Self {
        Self {
            chain_key: self.chain_key.clone(),
            _provider: PhantomData,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::suites::classic::ClassicSuiteProvider;

    type Chain = MessageChain<ClassicSuiteProvider>;

    #[test]
    fn test_unkeyed_chain_fails() {
        let mut chain = Chain::new(None);
        assert!(matches!(
            chain.next_message_key(),
            Err(DoubleRatchetError::ChainKeyMissing)
        ));
    }

    #[test]
    fn test_chains_with_same_seed_emit_same_keys() {
        let mut left = Chain::new(Some(ChainKey::from([42u8; 32])));
        let mut right = Chain::new(Some(ChainKey::from([42u8; 32])));

        for _ in 0..5 {
            let a = left.next_message_key().unwrap();
            let b = right.next_message_key().unwrap();
            assert_eq!(a.as_bytes(), b.as_bytes());
        }
    }

    #[test]
    fn test_chain_advances_forward_only() {
        let mut chain = Chain::new(Some(ChainKey::from([42u8; 32])));

        let first = chain.next_message_key().unwrap();
        let second = chain.next_message_key().unwrap();

        assert_ne!(first.as_bytes(), second.as_bytes());
        // Chain key moved away from its seed value.
        assert_ne!(chain.chain_key().unwrap().as_bytes(), &[42u8; 32]);
    }

    #[test]
    fn test_message_key_differs_from_chain_key() {
        let mut chain = Chain::new(Some(ChainKey::from([42u8; 32])));
        let message_key = chain.next_message_key().unwrap();
        assert_ne!(message_key.as_bytes(), chain.chain_key().unwrap().as_bytes());
    }
}
