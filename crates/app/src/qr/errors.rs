//! QR service errors.

use thiserror::Error;
use turnstile::TokenError;

#[derive(Debug, Error)]
pub enum QrServiceError {
    /// A presented token was malformed, forged or expired.
    #[error("qr token rejected")]
    Rejected(#[source] TokenError),

    /// A token could not be issued.
    #[error("failed to issue qr token")]
    Issue(#[source] TokenError),
}

impl QrServiceError {
    /// The underlying token error.
    #[must_use]
    pub const fn token_error(&self) -> &TokenError {
        match self {
            Self::Rejected(source) | Self::Issue(source) => source,
        }
    }
}
