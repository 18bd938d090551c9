//! Skipped-message-key cache.
//!
//! Ключи для ещё не доставленных сообщений (out-of-order) сохраняются здесь
//! и потребляются ровно один раз при получении сообщения.
//!
//! Кеш — injectable collaborator: реализация может жить в памяти, на диске
//! или во внешнем хранилище, поэтому все операции fallible. Один кеш можно
//! разделять между несколькими сессиями — записи ключуются парой
//! (epoch public key, message number).

use crate::config::Config;
use crate::crypto::messaging::message_chain::MessageKey;
use crate::error::DoubleRatchetError;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, VecDeque};
use tracing::trace;

/// Lookup index of one cached key: the sender's epoch public key plus the
/// message sequence number within that epoch.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MessageIndex {
    #[serde(with = "serde_bytes")]
    pub public_key: Vec<u8>,
    pub message_number: u64,
}

/// Capability contract of a skipped-message-key store.
///
/// `get` consumes: a hit removes the entry, so a key can never decrypt two
/// messages. A miss does not distinguish "never cached" from "already
/// consumed" — that distinction belongs to the session's counters.
pub trait MessageKeyCache {
    fn add(
        &mut self,
        message_key: MessageKey,
        message_number: u64,
        public_key: &[u8],
    ) -> Result<(), DoubleRatchetError>;

    fn get(
        &mut self,
        message_number: u64,
        public_key: &[u8],
    ) -> Result<Option<MessageKey>, DoubleRatchetError>;

    fn remove(&mut self, public_key: &[u8], message_number: u64)
        -> Result<(), DoubleRatchetError>;
}

/// Reference in-memory implementation: bounded, insertion-ordered.
///
/// On overflow the oldest-inserted entry is evicted regardless of which
/// epoch or sequence number it belongs to (FIFO, not usage recency).
/// Serializable so a host can snapshot it alongside the session state.
#[derive(Clone, Serialize, Deserialize)]
pub struct InMemoryMessageKeyCache {
    max_cache: usize,
    skipped_message_keys: HashMap<MessageIndex, MessageKey>,
    insertion_order: VecDeque<MessageIndex>,
}

impl InMemoryMessageKeyCache {
    pub fn new(max_cache: usize) -> Self {
        Self {
            max_cache,
            skipped_message_keys: HashMap::new(),
            insertion_order: VecDeque::new(),
        }
    }

    pub fn max_cache(&self) -> usize {
        self.max_cache
    }

    pub fn len(&self) -> usize {
        self.skipped_message_keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skipped_message_keys.is_empty()
    }
}

impl Default for InMemoryMessageKeyCache {
    fn default() -> Self {
        Self::new(Config::global().default_max_cache)
    }
}

impl MessageKeyCache for InMemoryMessageKeyCache {
    fn add(
        &mut self,
        message_key: MessageKey,
        message_number: u64,
        public_key: &[u8],
    ) -> Result<(), DoubleRatchetError> {
        let message_index = MessageIndex {
            public_key: public_key.to_vec(),
            message_number,
        };

        self.skipped_message_keys
            .insert(message_index.clone(), message_key);
        self.insertion_order.push_back(message_index);

        while self.insertion_order.len() > self.max_cache {
            if let Some(evicted) = self.insertion_order.pop_front() {
                self.skipped_message_keys.remove(&evicted);
                trace!(
                    target: "crypto::key_cache",
                    message_number = evicted.message_number,
                    "Evicted oldest skipped message key"
                );
            }
        }

        Ok(())
    }

    fn get(
        &mut self,
        message_number: u64,
        public_key: &[u8],
    ) -> Result<Option<MessageKey>, DoubleRatchetError> {
        let message_index = MessageIndex {
            public_key: public_key.to_vec(),
            message_number,
        };

        let message_key = self.skipped_message_keys.remove(&message_index);
        if message_key.is_some() {
            self.insertion_order.retain(|index| *index != message_index);
            trace!(
                target: "crypto::key_cache",
                message_number,
                "Consumed skipped message key"
            );
        }
        Ok(message_key)
    }

    fn remove(
        &mut self,
        public_key: &[u8],
        message_number: u64,
    ) -> Result<(), DoubleRatchetError> {
        let message_index = MessageIndex {
            public_key: public_key.to_vec(),
            message_number,
        };
        self.skipped_message_keys.remove(&message_index);
        self.insertion_order.retain(|index| *index != message_index);
        Ok(())
    }
}
