//! Криптографический модуль
//!
//! # Архитектура
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        Application                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │              DoubleRatchet (Session Orchestrator)           │
//! │  - encrypt / decrypt                                        │
//! │  - Epoch detection + DH ratchet transitions                 │
//! │  - Skip-ahead + snapshot export/restore                     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!          ┌───────────────────┼───────────────────┐
//!          ▼                   ▼                   ▼
//! ┌────────────────┐ ┌──────────────────┐ ┌──────────────────┐
//! │   RootChain    │ │   MessageChain   │ │ MessageKeyCache  │
//! │  DH ratchet,   │ │ symmetric ratchet│ │ skipped keys,    │
//! │  root key      │ │ per direction    │ │ FIFO eviction    │
//! └────────────────┘ └──────────────────┘ └──────────────────┘
//!          │                   │
//!          └─────────┬─────────┘
//!                    ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │              CryptoProvider (Crypto-Agility)                │
//! │  - DH (X25519, kx-style session keys)                       │
//! │  - AEAD (XChaCha20-Poly1305)                                │
//! │  - KDF (HKDF-SHA256) / MAC (HMAC-SHA256)                    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Модули
//!
//! ### Core Traits
//! - [`provider`]: CryptoProvider trait для crypto-agility
//! - [`messaging::key_cache`]: MessageKeyCache trait для injectable кеша
//!
//! ### Implementations
//! - [`suites`]: Реализации CryptoProvider (Classic)
//! - [`messaging`]: Double Ratchet протокол

// ============================================================================
// Core Traits
// ============================================================================

/// CryptoProvider trait для crypto-agility
pub mod provider;

/// Secure Messaging protocol (Double Ratchet)
pub mod messaging;

// ============================================================================
// Implementations
// ============================================================================

/// Криптографические наборы (Classic)
pub mod suites;

// ============================================================================
// Re-exports для удобства
// ============================================================================

pub use provider::CryptoProvider;
