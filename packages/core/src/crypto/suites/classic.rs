use crate::config::Config;
use crate::crypto::provider::{CryptoProvider, KeyPair, Side};
use crate::error::CryptoError;
use chacha20poly1305::{
    aead::{Aead, Payload},
    Key as AeadKeyChacha, KeyInit, XChaCha20Poly1305, XNonce,
};
use hkdf::Hkdf;
use hmac::{Hmac, Mac};
use rand::rngs::OsRng;
use rand_core::RngCore;
use sha2::{Digest, Sha256, Sha512};
use x25519_dalek::{PublicKey as PublicKeyDalek, StaticSecret};

type HmacSha256 = Hmac<Sha256>;

/// Concrete implementation of `CryptoProvider` for the classic suite:
/// X25519 key agreement, XChaCha20-Poly1305 AEAD, HKDF-SHA256 derivation,
/// HMAC-SHA256 chain MAC.
pub struct ClassicSuiteProvider;

impl ClassicSuiteProvider {
    fn static_secret(secret_key: &[u8]) -> Result<StaticSecret, CryptoError> {
        let bytes: &[u8; 32] = secret_key.try_into().map_err(|_| {
            CryptoError::InvalidInputError("Invalid secret key length".to_string())
        })?;
        Ok(StaticSecret::from(*bytes))
    }

    fn dalek_public(public_key: &[u8]) -> Result<PublicKeyDalek, CryptoError> {
        let bytes: &[u8; 32] = public_key.try_into().map_err(|_| {
            CryptoError::InvalidInputError("Invalid public key length".to_string())
        })?;
        Ok(PublicKeyDalek::from(*bytes))
    }
}

impl CryptoProvider for ClassicSuiteProvider {
    type PublicKey = Vec<u8>;
    type SecretKey = Vec<u8>;

    fn generate_key_pair() -> Result<(Self::SecretKey, Self::PublicKey), CryptoError> {
        let secret_key = StaticSecret::random_from_rng(OsRng);
        let public_key = PublicKeyDalek::from(&secret_key);
        Ok((
            secret_key.to_bytes().to_vec(),
            public_key.to_bytes().to_vec(),
        ))
    }

    fn public_key_from_bytes(bytes: &[u8]) -> Result<Self::PublicKey, CryptoError> {
        if bytes.len() != Config::global().public_key_length {
            return Err(CryptoError::InvalidInputError(
                "Invalid public key length".to_string(),
            ));
        }
        Ok(bytes.to_vec())
    }

    fn secret_key_from_bytes(bytes: &[u8]) -> Result<Self::SecretKey, CryptoError> {
        if bytes.len() != Config::global().key_length {
            return Err(CryptoError::InvalidInputError(
                "Invalid secret key length".to_string(),
            ));
        }
        Ok(bytes.to_vec())
    }

    /// Session key derivation in the manner of libsodium `crypto_kx`:
    /// raw X25519 agreement followed by SHA-512 over
    /// `q ‖ client_pk ‖ server_pk`, where the sending side takes the server
    /// role. Both roles keep the first 32 bytes, so the sender's tx key is
    /// the receiver's rx key.
    fn diffie_hellman(
        side: Side,
        own_key_pair: &KeyPair<Self>,
        remote_public_key: &Self::PublicKey,
    ) -> Result<Vec<u8>, CryptoError> {
        let secret_key = Self::static_secret(own_key_pair.secret_key.as_ref())?;
        let remote = Self::dalek_public(remote_public_key.as_slice())?;

        let shared_secret = secret_key.diffie_hellman(&remote);

        let mut hash = Sha512::new();
        hash.update(shared_secret.as_bytes());
        match side {
            Side::Sending => {
                hash.update(remote_public_key);
                hash.update(&own_key_pair.public_key);
            }
            Side::Receiving => {
                hash.update(&own_key_pair.public_key);
                hash.update(remote_public_key);
            }
        }

        Ok(hash.finalize()[..32].to_vec())
    }

    fn derive_key(
        ikm: &[u8],
        salt: &[u8],
        info: &[u8],
        len: usize,
    ) -> Result<Vec<u8>, CryptoError> {
        let hkdf = Hkdf::<Sha256>::new(Some(salt), ikm);
        let mut okm = vec![0u8; len];
        hkdf.expand(info, &mut okm)
            .map_err(|e| CryptoError::KeyDerivationError(e.to_string()))?;
        Ok(okm)
    }

    fn mac(key: &[u8], message: &[u8]) -> Result<[u8; 32], CryptoError> {
        let mut mac = <HmacSha256 as Mac>::new_from_slice(key)
            .map_err(|e| CryptoError::MacError(e.to_string()))?;
        mac.update(message);
        Ok(mac.finalize().into_bytes().into())
    }

    fn aead_encrypt(
        key: &[u8],
        nonce: &[u8],
        plaintext: &[u8],
        associated_data: Option<&[u8]>,
    ) -> Result<Vec<u8>, CryptoError> {
        if key.len() != Config::global().key_length {
            return Err(CryptoError::InvalidInputError(
                "Invalid AEAD key length".to_string(),
            ));
        }
        if nonce.len() != Config::global().xchacha_nonce_length {
            return Err(CryptoError::InvalidInputError(
                "Invalid nonce length".to_string(),
            ));
        }

        let cipher = XChaCha20Poly1305::new(AeadKeyChacha::from_slice(key));
        let nonce_ref = XNonce::from_slice(nonce);

        let payload = Payload {
            msg: plaintext,
            aad: associated_data.unwrap_or(b""),
        };

        cipher
            .encrypt(nonce_ref, payload)
            .map_err(|e| CryptoError::AeadEncryptionError(e.to_string()))
    }

    fn aead_decrypt(
        key: &[u8],
        nonce: &[u8],
        ciphertext: &[u8],
        associated_data: Option<&[u8]>,
    ) -> Result<Vec<u8>, CryptoError> {
        if key.len() != Config::global().key_length {
            return Err(CryptoError::InvalidInputError(
                "Invalid AEAD key length".to_string(),
            ));
        }
        if nonce.len() != Config::global().xchacha_nonce_length {
            return Err(CryptoError::InvalidInputError(
                "Invalid nonce length".to_string(),
            ));
        }

        let cipher = XChaCha20Poly1305::new(AeadKeyChacha::from_slice(key));
        let nonce_ref = XNonce::from_slice(nonce);

        let payload = Payload {
            msg: ciphertext,
            aad: associated_data.unwrap_or(b""),
        };

        cipher
            .decrypt(nonce_ref, payload)
            .map_err(|e| CryptoError::AeadDecryptionError(e.to_string()))
    }

    fn generate_nonce(len: usize) -> Result<Vec<u8>, CryptoError> {
        let mut nonce_bytes = vec![0u8; len];
        OsRng.fill_bytes(&mut nonce_bytes);
        Ok(nonce_bytes)
    }
}
