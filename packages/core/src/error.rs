// Типы ошибок

use thiserror::Error;

/// Failures of the underlying cryptographic primitives.
#[derive(Error, Debug)]
pub enum CryptoError {
    #[error("Failed to generate keys: {0}")]
    KeyGenerationError(String),
    #[error("Key agreement failed: {0}")]
    KeyAgreementError(String),
    #[error("AEAD encryption failed: {0}")]
    AeadEncryptionError(String),
    #[error("AEAD decryption failed: {0}")]
    AeadDecryptionError(String),
    #[error("Key derivation failed: {0}")]
    KeyDerivationError(String),
    #[error("MAC computation failed: {0}")]
    MacError(String),
    #[error("Nonce generation failed: {0}")]
    NonceGenerationError(String),
    #[error("Invalid input: {0}")]
    InvalidInputError(String),
    #[error("Serialization error: {0}")]
    SerializationError(String),
    #[error("Deserialization error: {0}")]
    DeserializationError(String),
}

/// Protocol-level failures of the Double Ratchet session.
///
/// Every failure leaves the session state exactly as it was before the call;
/// partial ratchet progress is never observable.
#[derive(Error, Debug)]
pub enum DoubleRatchetError {
    /// A DH ratchet step was attempted without a known remote public key.
    #[error("Remote public key missing")]
    RemotePublicKeyMissing,

    /// A message key was requested from a chain that has not been established.
    #[error("Chain key missing")]
    ChainKeyMissing,

    /// The MAC primitive failed while advancing a message chain.
    #[error("Message chain ratchet step failed: {0}")]
    MessageChainRatchetStepFailed(String),

    /// The requested skip distance exceeds the configured `max_skip` bound.
    #[error("Exceeded maximum number of skipped messages")]
    ExceededMaxSkip,

    /// The message precedes the current receiving chain position and its key
    /// is not cached: it was already consumed or evicted.
    #[error("Discarding old message")]
    DiscardOldMessage,

    /// AEAD tag verification failed.
    #[error("Message authentication failed")]
    AuthenticationFailure,

    /// The injected message key cache collaborator failed.
    #[error("Message key cache failure: {0}")]
    MessageKeyCacheFailure(String),

    #[error(transparent)]
    Crypto(#[from] CryptoError),
}
