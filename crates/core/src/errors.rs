//! Token, key and signer errors

use jiff::SignedDuration;
use thiserror::Error;

use crate::key::MIN_SIGNING_KEY_BYTES;

/// Errors raised while issuing or verifying a token.
///
/// `Malformed`, `InvalidSignature` and `Expired` are the per-request rejection kinds. They are
/// terminal for a verification attempt and should be presented to users as a single generic
/// failure, so a scanner cannot be used to learn which check failed.
#[derive(Debug, Error)]
pub enum TokenError {
    /// The token is not two non-empty base64url segments, or its payload does not parse.
    #[error("token is malformed")]
    Malformed,

    /// The token is well-formed but its signature does not match the payload.
    #[error("token signature is invalid")]
    InvalidSignature,

    /// The token is authentic but its validity window has elapsed.
    #[error("token has expired")]
    Expired,

    /// The subject identifier given to `issue` is empty.
    #[error("subject identifier must not be empty")]
    InvalidSubject,

    /// The validity window cannot be added to the issue time.
    #[error("token expiry is out of range")]
    Clock(#[source] jiff::Error),

    /// The payload could not be serialized.
    #[error("failed to serialize token payload")]
    Serialize(#[source] serde_json::Error),
}

impl TokenError {
    /// Stable, low-cardinality name of the error kind, for logs and metric labels.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Malformed => "malformed",
            Self::InvalidSignature => "invalid_signature",
            Self::Expired => "expired",
            Self::InvalidSubject => "invalid_subject",
            Self::Clock(_) => "clock",
            Self::Serialize(_) => "serialize",
        }
    }
}

/// Errors raised while loading signing key material.
#[derive(Debug, Error)]
pub enum SigningKeyError {
    /// The configured secret is not valid base64.
    #[error("signing secret is not valid base64")]
    Encoding(#[source] base64::DecodeError),

    /// The decoded secret is shorter than [`MIN_SIGNING_KEY_BYTES`].
    #[error("signing secret must be at least {MIN_SIGNING_KEY_BYTES} bytes, got {0}")]
    TooShort(usize),
}

/// Errors raised while constructing a [`QrSigner`](crate::signer::QrSigner).
#[derive(Debug, Error)]
pub enum SignerConfigError {
    /// The validity window is outside the accepted range.
    #[error("token validity window {0:#} is out of range")]
    ValidityWindow(SignedDuration),

    /// The HMAC implementation refused the key.
    #[error("signing key was rejected by HMAC-SHA256")]
    KeyRejected,
}
