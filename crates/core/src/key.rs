//! HMAC signing key material.

use std::fmt;

use base64::{
    Engine as _,
    engine::general_purpose::{STANDARD, STANDARD_NO_PAD},
};
use rand::{RngCore, rngs::OsRng};
use zeroize::Zeroize;

use crate::errors::SigningKeyError;

/// Minimum accepted length of a signing secret, in bytes.
pub const MIN_SIGNING_KEY_BYTES: usize = 32;

/// Symmetric HMAC-SHA256 secret shared by the issuer and the verifier.
///
/// Loaded once at startup and never rotated at runtime. The bytes are wiped on drop and never
/// printed by `Debug`.
#[derive(Clone)]
pub struct SigningKey {
    bytes: Vec<u8>,
}

impl SigningKey {
    /// Wrap raw key bytes.
    ///
    /// # Errors
    ///
    /// Returns [`SigningKeyError::TooShort`] when fewer than [`MIN_SIGNING_KEY_BYTES`] bytes
    /// are given.
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, SigningKeyError> {
        if bytes.len() < MIN_SIGNING_KEY_BYTES {
            let len = bytes.len();
            let mut bytes = bytes;
            bytes.zeroize();

            return Err(SigningKeyError::TooShort(len));
        }

        Ok(Self { bytes })
    }

    /// Decode a base64 (standard alphabet) secret, with or without padding.
    ///
    /// # Errors
    ///
    /// Returns an error when the value is not base64 or decodes to too few bytes.
    pub fn from_base64(encoded: &str) -> Result<Self, SigningKeyError> {
        let unpadded = encoded.trim().trim_end_matches('=');

        let bytes = STANDARD_NO_PAD
            .decode(unpadded)
            .map_err(SigningKeyError::Encoding)?;

        Self::from_bytes(bytes)
    }

    /// Generate a fresh secret of `len` bytes from the operating system's CSPRNG.
    ///
    /// # Errors
    ///
    /// Returns [`SigningKeyError::TooShort`] when `len` is below [`MIN_SIGNING_KEY_BYTES`].
    pub fn generate(len: usize) -> Result<Self, SigningKeyError> {
        if len < MIN_SIGNING_KEY_BYTES {
            return Err(SigningKeyError::TooShort(len));
        }

        let mut bytes = vec![0_u8; len];

        OsRng.fill_bytes(&mut bytes);

        Self::from_bytes(bytes)
    }

    /// Encode the secret as padded standard base64, the form configuration expects.
    #[must_use]
    pub fn to_base64(&self) -> String {
        STANDARD.encode(&self.bytes)
    }

    /// Number of secret bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Always `false`; construction rejects short keys.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub(crate) fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl fmt::Debug for SigningKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SigningKey(**redacted**)")?;
        Ok(())
    }
}

impl Drop for SigningKey {
    fn drop(&mut self) {
        self.bytes.zeroize();
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn base64_round_trip_accepts_padded_and_unpadded() -> TestResult {
        let key = SigningKey::from_bytes(vec![0xA5; 34])?;
        let padded = key.to_base64();

        assert!(padded.ends_with('='), "34 bytes encode with padding");

        let reloaded = SigningKey::from_base64(&padded)?;
        let unpadded = SigningKey::from_base64(padded.trim_end_matches('='))?;

        assert_eq!(reloaded.as_bytes(), key.as_bytes());
        assert_eq!(unpadded.as_bytes(), key.as_bytes());

        Ok(())
    }

    #[test]
    fn surrounding_whitespace_is_ignored() -> TestResult {
        let key = SigningKey::from_bytes(vec![7; 32])?;
        let reloaded = SigningKey::from_base64(&format!("  {}\n", key.to_base64()))?;

        assert_eq!(reloaded.as_bytes(), key.as_bytes());

        Ok(())
    }

    #[test]
    fn short_secrets_are_rejected() {
        let result = SigningKey::from_base64(&STANDARD.encode([1_u8; 16]));

        assert!(
            matches!(result, Err(SigningKeyError::TooShort(16))),
            "expected TooShort(16), got {result:?}"
        );
    }

    #[test]
    fn invalid_base64_is_rejected() {
        let result = SigningKey::from_base64("not base64 at all!");

        assert!(
            matches!(result, Err(SigningKeyError::Encoding(_))),
            "expected Encoding error, got {result:?}"
        );
    }

    #[test]
    fn generated_keys_differ() -> TestResult {
        let first = SigningKey::generate(MIN_SIGNING_KEY_BYTES)?;
        let second = SigningKey::generate(MIN_SIGNING_KEY_BYTES)?;

        assert_eq!(first.len(), MIN_SIGNING_KEY_BYTES);
        assert_ne!(first.as_bytes(), second.as_bytes());

        Ok(())
    }

    #[test]
    fn generate_rejects_short_lengths() {
        assert!(
            matches!(SigningKey::generate(8), Err(SigningKeyError::TooShort(8))),
            "generate must refuse short keys"
        );
    }

    #[test]
    fn debug_output_is_redacted() -> TestResult {
        let key = SigningKey::from_bytes(vec![0x41; 32])?;

        assert_eq!(format!("{key:?}"), "SigningKey(**redacted**)");

        Ok(())
    }
}
