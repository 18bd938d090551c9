//! Криптографические наборы (Crypto Suites)
//!
//! Этот модуль содержит различные реализации CryptoProvider trait.
//!
//! ## Доступные наборы
//!
//! ### Classic Suite (текущий)
//! - **DH**: X25519 (ECDH на Curve25519), kx-style session keys
//! - **AEAD**: XChaCha20-Poly1305
//! - **KDF**: HKDF-SHA256
//! - **MAC**: HMAC-SHA256
//!
//! ## Выбор suite
//!
//! ```rust,ignore
//! use vesper_core::crypto::suites::classic::ClassicSuiteProvider;
//!
//! type MySuite = ClassicSuiteProvider;
//! let (secret_key, public_key) = MySuite::generate_key_pair()?;
//! ```

pub mod classic;

// Будущее: pub mod hybrid;
