//! Turnstile prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    errors::{SignerConfigError, SigningKeyError, TokenError},
    key::{MIN_SIGNING_KEY_BYTES, SigningKey},
    payload::{NONCE_BYTES, TokenPayload},
    signer::{
        DEFAULT_VALIDITY_WINDOW, IssuedToken, MAX_TOKEN_LEN, MAX_VALIDITY_WINDOW,
        MIN_VALIDITY_WINDOW, QrSigner,
    },
    subject::{MAX_SUBJECT_LEN, SubjectId},
};
