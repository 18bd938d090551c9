//! Secure Messaging: Double Ratchet
//!
//! Цель: конфиденциальность, аутентичность и forward secrecy при
//! асинхронном обмене сообщениями между двумя сторонами.
//!
//! ## Security Properties
//!
//! ### Forward Secrecy
//! Компрометация текущих ключей НЕ раскрывает прошлые сообщения:
//! root и chain keys продвигаются строго вперёд и затираются.
//!
//! ### Break-in Recovery (Post-Compromise Security)
//! После компрометации следующий DH ratchet step восстанавливает
//! безопасность — атакующий не может расшифровать будущие сообщения.
//!
//! ### Out-of-Order Messages
//! Сообщения могут приходить в произвольном порядке: ключи пропущенных
//! сообщений кешируются (bounded, FIFO eviction) и потребляются один раз.
//!
//! ## Не отвечает за:
//! - Key agreement / handshake — shared secret и remote public key приходят
//!   снаружи уже аутентифицированными
//! - Отправку/получение через сеть (transport layer)
//! - Персистентное хранение снапшотов и кеша

pub mod double_ratchet;
pub mod key_cache;
pub mod message_chain;
pub mod root_chain;
pub mod session_state;

pub use double_ratchet::DoubleRatchet;
pub use key_cache::{InMemoryMessageKeyCache, MessageIndex, MessageKeyCache};
pub use message_chain::{ChainKey, MessageChain, MessageKey};
pub use root_chain::{RootChain, RootKey};
pub use session_state::SessionState;
