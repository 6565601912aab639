//! QR signing configuration.

use std::fmt;

use clap::Args;
use jiff::SignedDuration;
use turnstile::{QrSigner, SigningKey};

use crate::context::AppInitError;

/// QR token signing settings.
#[derive(Clone, Args)]
pub struct SigningConfig {
    /// Base64-encoded HMAC-SHA256 secret used to sign QR tokens (at least 32 bytes)
    #[arg(long, env = "QR_SIGNING_SECRET", hide_env_values = true)]
    pub signing_secret: String,

    /// Seconds a QR token stays valid after it is issued
    #[arg(long, env = "QR_TOKEN_VALIDITY_SECONDS", default_value_t = 15)]
    pub token_validity_seconds: i64,
}

impl SigningConfig {
    /// Decode the secret and build the signer.
    ///
    /// # Errors
    ///
    /// Returns an error when the secret is not valid base64, is too short, or the validity
    /// window is out of range.
    pub fn build_signer(&self) -> Result<QrSigner, AppInitError> {
        let key = SigningKey::from_base64(&self.signing_secret)?;

        let signer = QrSigner::with_validity_window(
            &key,
            SignedDuration::from_secs(self.token_validity_seconds),
        )?;

        Ok(signer)
    }
}

impl fmt::Debug for SigningConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SigningConfig")
            .field("signing_secret", &"**redacted**")
            .field("token_validity_seconds", &self.token_validity_seconds)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    const SECRET: &str = "c2lnbmluZy1zZWNyZXQtZm9yLXR1cm5zdGlsZS10ZXN0cw==";

    fn config(secret: &str, seconds: i64) -> SigningConfig {
        SigningConfig {
            signing_secret: secret.to_string(),
            token_validity_seconds: seconds,
        }
    }

    #[test]
    fn builds_signer_with_configured_window() -> TestResult {
        let signer = config(SECRET, 30).build_signer()?;

        assert_eq!(signer.validity_window(), SignedDuration::from_secs(30));

        Ok(())
    }

    #[test]
    fn short_secret_is_fatal() {
        let result = config("c2hvcnQ=", 15).build_signer();

        assert!(
            matches!(result, Err(AppInitError::SigningKey(_))),
            "expected signing key error, got {result:?}"
        );
    }

    #[test]
    fn empty_secret_is_fatal() {
        let result = config("", 15).build_signer();

        assert!(
            matches!(result, Err(AppInitError::SigningKey(_))),
            "expected signing key error, got {result:?}"
        );
    }

    #[test]
    fn zero_window_is_fatal() {
        let result = config(SECRET, 0).build_signer();

        assert!(
            matches!(result, Err(AppInitError::Signer(_))),
            "expected signer configuration error, got {result:?}"
        );
    }

    #[test]
    fn debug_redacts_secret() {
        let rendered = format!("{:?}", config(SECRET, 15));

        assert!(!rendered.contains(SECRET), "secret leaked: {rendered}");
    }
}
