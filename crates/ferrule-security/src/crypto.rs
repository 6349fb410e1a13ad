//! AES-GCM encryption of strings
//!
//! Ciphertext is `base64(nonce || sealed)` with a fresh random 96-bit nonce
//! per message, using the standard base64 alphabet with padding. The key
//! size picks the cipher: 16 bytes for AES-128-GCM, 32 bytes for AES-256-GCM.

use crate::{SecurityError, SecurityResult};
use aes_gcm::{
    aead::{Aead, KeyInit, OsRng},
    Aes128Gcm, Aes256Gcm, Nonce,
};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use ferrule_config::Config;
use rand::RngCore;
use std::fmt;

/// Config key holding the base64 encryption key
pub const APP_KEY: &str = "APP_KEY";

const NONCE_SIZE: usize = 12;
const GENERATED_KEY_SIZE: usize = 32;

#[derive(Clone)]
enum Cipher {
    Aes128(Aes128Gcm),
    Aes256(Aes256Gcm),
}

/// Encrypts and decrypts strings with a fixed key
#[derive(Clone)]
pub struct Crypto {
    cipher: Cipher,
}

impl fmt::Debug for Crypto {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let algorithm = match self.cipher {
            Cipher::Aes128(_) => "AES-128-GCM",
            Cipher::Aes256(_) => "AES-256-GCM",
        };
        f.debug_struct("Crypto")
            .field("algorithm", &algorithm)
            .field("key", &"<redacted>")
            .finish()
    }
}

impl Crypto {
    /// Create from a base64-encoded 16 or 32 byte key
    pub fn new(key: &str) -> SecurityResult<Self> {
        let key_bytes = BASE64.decode(key.as_bytes()).map_err(|err| {
            tracing::debug!(error = %err, "Encryption key is not valid base64");
            SecurityError::invalid_key("crypto key could not be decoded")
        })?;

        let cipher = match key_bytes.len() {
            16 => Aes128Gcm::new_from_slice(&key_bytes).map(Cipher::Aes128),
            32 => Aes256Gcm::new_from_slice(&key_bytes).map(Cipher::Aes256),
            len => {
                tracing::debug!(key_len = len, "Encryption key has an unsupported length");
                return Err(SecurityError::invalid_key(format!(
                    "expected 16 or 32 bytes, got {}",
                    len
                )));
            }
        }
        .map_err(|err| SecurityError::invalid_key(err.to_string()))?;

        Ok(Self { cipher })
    }

    /// Create from the `APP_KEY` configuration value
    pub fn from_config(config: &Config) -> SecurityResult<Self> {
        let key = config
            .require(APP_KEY)
            .map_err(|err| SecurityError::invalid_key(err.to_string()))?;
        Self::new(key)
    }

    /// Generate a random 32 byte key, base64-encoded
    pub fn generate_key() -> String {
        let mut key = [0u8; GENERATED_KEY_SIZE];
        OsRng.fill_bytes(&mut key);
        BASE64.encode(key)
    }

    /// Encrypt a string, returning `base64(nonce || ciphertext)`
    #[allow(deprecated)]
    pub fn encrypt(&self, plaintext: &str) -> SecurityResult<String> {
        let mut nonce_bytes = [0u8; NONCE_SIZE];
        OsRng.fill_bytes(&mut nonce_bytes);
        let nonce = Nonce::from_slice(&nonce_bytes);

        let sealed = match &self.cipher {
            Cipher::Aes128(cipher) => cipher.encrypt(nonce, plaintext.as_bytes()),
            Cipher::Aes256(cipher) => cipher.encrypt(nonce, plaintext.as_bytes()),
        }
        .map_err(|err| SecurityError::encryption_failed(err.to_string()))?;

        let mut combined = Vec::with_capacity(NONCE_SIZE + sealed.len());
        combined.extend_from_slice(&nonce_bytes);
        combined.extend_from_slice(&sealed);

        Ok(BASE64.encode(combined))
    }

    /// Decrypt a value produced by [`Crypto::encrypt`]
    #[allow(deprecated)]
    pub fn decrypt(&self, data: &str) -> SecurityResult<String> {
        let combined = BASE64
            .decode(data.as_bytes())
            .map_err(|err| SecurityError::invalid_data(err.to_string()))?;

        if combined.len() < NONCE_SIZE {
            return Err(SecurityError::invalid_data("data is too short"));
        }

        let (nonce_bytes, sealed) = combined.split_at(NONCE_SIZE);
        let nonce = Nonce::from_slice(nonce_bytes);

        let plaintext = match &self.cipher {
            Cipher::Aes128(cipher) => cipher.decrypt(nonce, sealed),
            Cipher::Aes256(cipher) => cipher.decrypt(nonce, sealed),
        }
        .map_err(|err| SecurityError::decryption_failed(err.to_string()))?;

        String::from_utf8(plaintext)
            .map_err(|_| SecurityError::decryption_failed("plaintext is not valid UTF-8"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_key() {
        let key = Crypto::generate_key();
        assert_eq!(BASE64.decode(&key).unwrap().len(), 32);
        assert_ne!(key, Crypto::generate_key());
        assert!(Crypto::new(&key).is_ok());
    }

    #[test]
    fn test_encrypt_decrypt_with_both_key_sizes() {
        for key in [BASE64.encode([7u8; 16]), BASE64.encode([7u8; 32])] {
            let crypto = Crypto::new(&key).unwrap();
            let encrypted = crypto.encrypt("sensitive_api_key_12345").unwrap();

            assert_ne!(encrypted, "sensitive_api_key_12345");
            assert_eq!(crypto.decrypt(&encrypted).unwrap(), "sensitive_api_key_12345");
        }
    }

    #[test]
    fn test_output_layout() {
        let crypto = Crypto::new(&Crypto::generate_key()).unwrap();
        let raw = BASE64.decode(crypto.encrypt("abc").unwrap()).unwrap();
        // nonce + 3 plaintext bytes + 16 byte tag
        assert_eq!(raw.len(), NONCE_SIZE + 3 + 16);
    }

    #[test]
    fn test_encrypt_produces_different_ciphertext() {
        let crypto = Crypto::new(&Crypto::generate_key()).unwrap();

        let first = crypto.encrypt("test_data").unwrap();
        let second = crypto.encrypt("test_data").unwrap();

        assert_ne!(first, second);
        assert_eq!(crypto.decrypt(&first).unwrap(), "test_data");
        assert_eq!(crypto.decrypt(&second).unwrap(), "test_data");
    }

    #[test]
    fn test_invalid_keys() {
        assert!(matches!(Crypto::new("not base64!"), Err(SecurityError::InvalidKey { .. })));
        assert!(matches!(
            Crypto::new(&BASE64.encode([1u8; 24])),
            Err(SecurityError::InvalidKey { .. })
        ));
    }

    #[test]
    fn test_decrypt_rejects_bad_input() {
        let crypto = Crypto::new(&Crypto::generate_key()).unwrap();

        assert!(matches!(crypto.decrypt("%%%"), Err(SecurityError::InvalidData { .. })));
        assert_eq!(
            crypto.decrypt(&BASE64.encode([0u8; 4])),
            Err(SecurityError::invalid_data("data is too short"))
        );
        assert!(matches!(
            crypto.decrypt(&BASE64.encode([0u8; 40])),
            Err(SecurityError::DecryptionFailed { .. })
        ));
    }

    #[test]
    fn test_debug_redacts_key() {
        let crypto = Crypto::new(&Crypto::generate_key()).unwrap();
        let debug = format!("{:?}", crypto);
        assert!(debug.contains("AES-256-GCM"));
        assert!(debug.contains("<redacted>"));
    }
}
