//! Defines the CryptoProvider trait for crypto-agility.

use crate::error::CryptoError;
use core::fmt::Debug;
use zeroize::Zeroize;

/// Which end of the Diffie-Hellman exchange a root chain ratchet step takes.
///
/// The two sides must be algebraic inverses of each other: the session key a
/// party derives for `Sending` equals the key its peer derives for
/// `Receiving` from the mirrored key material.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Sending,
    Receiving,
}

/// DH key pair owned by a root chain.
///
/// Replaced wholesale on every DH ratchet step; the retiring secret key is
/// zeroized, never reused.
pub struct KeyPair<P: CryptoProvider> {
    pub secret_key: P::SecretKey,
    pub public_key: P::PublicKey,
}

impl<P: CryptoProvider> KeyPair<P> {
    /// Generates a fresh key pair via the provider.
    pub fn generate() -> Result<Self, CryptoError> {
        let (secret_key, public_key) = P::generate_key_pair()?;
        Ok(Self {
            secret_key,
            public_key,
        })
    }
}

impl<P: CryptoProvider> Clone for KeyPair<P> {
    fn clone(&self) -> Self {
        Self {
            secret_key: self.secret_key.clone(),
            public_key: self.public_key.clone(),
        }
    }
}

impl<P: CryptoProvider> Debug for KeyPair<P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        // Secret key stays out of any Debug output.
        f.debug_struct("KeyPair")
            .field("public_key", &self.public_key)
            .field("secret_key", &"<redacted>")
            .finish()
    }
}

/// Trait that formalizes all cryptographic operations the ratchet needs.
/// This enables crypto-agility by allowing different implementations
/// (e.g. classic X25519/XChaCha20, future PQ-hybrid suites).
pub trait CryptoProvider: Sized + Send + Sync + 'static {
    // Associated types for key representation (provider-defined lengths)
    type PublicKey: AsRef<[u8]> + Debug + Clone + Eq + 'static;
    type SecretKey: AsRef<[u8]> + Clone + Zeroize + 'static;

    /// Generates a new DH key pair.
    fn generate_key_pair() -> Result<(Self::SecretKey, Self::PublicKey), CryptoError>;

    /// Creates a public key from raw bytes, validating the length.
    fn public_key_from_bytes(bytes: &[u8]) -> Result<Self::PublicKey, CryptoError>;

    /// Creates a secret key from raw bytes, validating the length.
    fn secret_key_from_bytes(bytes: &[u8]) -> Result<Self::SecretKey, CryptoError>;

    /// Computes the role-dependent DH session key.
    ///
    /// `side` distinguishes the two ends of the exchange. The implementation
    /// must guarantee that `diffie_hellman(Sending, a, b_pub)` equals
    /// `diffie_hellman(Receiving, b, a_pub)` for any key pairs `a`, `b`.
    fn diffie_hellman(
        side: Side,
        own_key_pair: &KeyPair<Self>,
        remote_public_key: &Self::PublicKey,
    ) -> Result<Vec<u8>, CryptoError>;

    /// Derives `len` bytes from input key material using HKDF expansion.
    fn derive_key(
        ikm: &[u8],
        salt: &[u8],
        info: &[u8],
        len: usize,
    ) -> Result<Vec<u8>, CryptoError>;

    /// Computes a fixed-length MAC over `message` with `key`.
    fn mac(key: &[u8], message: &[u8]) -> Result<[u8; 32], CryptoError>;

    /// Performs AEAD encryption.
    /// `key`: The symmetric encryption key.
    /// `nonce`: The unique nonce for this encryption.
    /// `plaintext`: The data to encrypt.
    /// `associated_data`: Optional associated data (authenticated but not encrypted).
    fn aead_encrypt(
        key: &[u8],
        nonce: &[u8],
        plaintext: &[u8],
        associated_data: Option<&[u8]>,
    ) -> Result<Vec<u8>, CryptoError>;

    /// Performs AEAD decryption.
    /// `key`: The symmetric encryption key.
    /// `nonce`: The unique nonce used for encryption.
    /// `ciphertext`: The encrypted data with its authentication tag.
    /// `associated_data`: Optional associated data.
    fn aead_decrypt(
        key: &[u8],
        nonce: &[u8],
        ciphertext: &[u8],
        associated_data: Option<&[u8]>,
    ) -> Result<Vec<u8>, CryptoError>;

    /// Generates a cryptographically secure random nonce of a specified length.
    fn generate_nonce(len: usize) -> Result<Vec<u8>, CryptoError>;
}
