//! Token payload

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::subject::SubjectId;

/// Number of random nonce bytes bound into every payload.
pub const NONCE_BYTES: usize = 16;

/// The data bound into a token before signing.
///
/// Serialized as compact JSON in field order `sub`, `iat`, `exp`, `nonce`. Timestamps are
/// milliseconds since the Unix epoch and the nonce is unpadded base64url. Unknown fields are
/// rejected when parsing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TokenPayload {
    /// Member the token authenticates.
    #[serde(rename = "sub")]
    pub subject: SubjectId,

    /// Start of the validity window.
    #[serde(rename = "iat", with = "jiff::fmt::serde::timestamp::millisecond::required")]
    pub issued_at: Timestamp,

    /// End of the validity window, inclusive.
    #[serde(rename = "exp", with = "jiff::fmt::serde::timestamp::millisecond::required")]
    pub expires_at: Timestamp,

    /// Random bytes that keep same-instant payloads distinct.
    #[serde(with = "nonce")]
    pub nonce: [u8; NONCE_BYTES],
}

impl TokenPayload {
    /// Whether the window is well-formed, i.e. expiry strictly after issue.
    #[must_use]
    pub fn has_valid_window(&self) -> bool {
        self.expires_at > self.issued_at
    }

    /// Whether `now` falls after the end of the validity window.
    #[must_use]
    pub fn is_expired_at(&self, now: Timestamp) -> bool {
        now > self.expires_at
    }
}

mod nonce {
    use std::fmt::{Formatter, Result as FmtResult};

    use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
    use serde::{
        Deserializer, Serializer,
        de::{Error, Unexpected, Visitor},
    };

    use super::NONCE_BYTES;

    pub(super) fn serialize<S: Serializer>(
        nonce: &[u8; NONCE_BYTES],
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&URL_SAFE_NO_PAD.encode(nonce))
    }

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<[u8; NONCE_BYTES], D::Error> {
        struct NonceVisitor;

        impl Visitor<'_> for NonceVisitor {
            type Value = [u8; NONCE_BYTES];

            fn expecting(&self, formatter: &mut Formatter<'_>) -> FmtResult {
                write!(formatter, "{NONCE_BYTES} base64url encoded bytes")
            }

            fn visit_str<E: Error>(self, value: &str) -> Result<Self::Value, E> {
                URL_SAFE_NO_PAD
                    .decode(value)
                    .ok()
                    .and_then(|bytes| <[u8; NONCE_BYTES]>::try_from(bytes).ok())
                    .ok_or_else(|| Error::invalid_value(Unexpected::Str(value), &self))
            }
        }

        deserializer.deserialize_str(NonceVisitor)
    }
}
