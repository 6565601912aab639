//! Turnstile
//!
//! Turnstile issues compact, signed, short-lived QR tokens that bind a gym member to a
//! check-in window, and verifies them again when a scanner presents them.
//!
//! A token has the wire form `<payload>.<signature>`: both segments are unpadded base64url,
//! the payload is a small JSON document and the signature is HMAC-SHA256 over the encoded
//! payload segment exactly as transmitted.

pub mod errors;
pub mod key;
pub mod payload;
pub mod prelude;
pub mod signer;
pub mod subject;

pub use errors::{SignerConfigError, SigningKeyError, TokenError};
pub use key::SigningKey;
pub use payload::TokenPayload;
pub use signer::{IssuedToken, QrSigner};
pub use subject::SubjectId;
