//! QR token issuing and verification.

use std::fmt;

use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use hmac::{Hmac, Mac};
use jiff::{SignedDuration, Timestamp};
use rand::{RngCore, rngs::OsRng};
use sha2::Sha256;

use crate::{
    errors::{SignerConfigError, TokenError},
    key::SigningKey,
    payload::{NONCE_BYTES, TokenPayload},
    subject::SubjectId,
};

type HmacSha256 = Hmac<Sha256>;

/// Validity window used when none is configured.
pub const DEFAULT_VALIDITY_WINDOW: SignedDuration = SignedDuration::from_secs(15);

/// Shortest accepted validity window.
pub const MIN_VALIDITY_WINDOW: SignedDuration = SignedDuration::from_secs(1);

/// Longest accepted validity window.
pub const MAX_VALIDITY_WINDOW: SignedDuration = SignedDuration::from_secs(300);

/// Longest token string `verify` will look at.
pub const MAX_TOKEN_LEN: usize = 1024;

const SEGMENT_SEPARATOR: char = '.';

/// A freshly issued token together with the window it is valid for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedToken {
    /// Wire form, `<payload>.<signature>`.
    pub token: String,

    /// Member the token is bound to.
    pub subject: SubjectId,

    /// Start of the validity window.
    pub issued_at: Timestamp,

    /// End of the validity window, inclusive.
    pub expires_at: Timestamp,
}

/// Issues and verifies signed, time-limited QR tokens.
///
/// The signer is immutable once built, so a single instance can be shared across any number of
/// request handlers (for example behind an `Arc`) without locking. Both operations are pure
/// apart from reading the clock and, for `issue`, drawing a nonce from the OS CSPRNG.
#[derive(Clone)]
pub struct QrSigner {
    mac: HmacSha256,
    validity: SignedDuration,
}

impl QrSigner {
    /// Build a signer with [`DEFAULT_VALIDITY_WINDOW`].
    ///
    /// # Errors
    ///
    /// Returns an error if the key is refused by the HMAC implementation.
    pub fn new(key: &SigningKey) -> Result<Self, SignerConfigError> {
        Self::with_validity_window(key, DEFAULT_VALIDITY_WINDOW)
    }

    /// Build a signer with an explicit validity window.
    ///
    /// # Errors
    ///
    /// Returns an error when the window is outside
    /// [`MIN_VALIDITY_WINDOW`]..=[`MAX_VALIDITY_WINDOW`] or the key is refused.
    pub fn with_validity_window(
        key: &SigningKey,
        validity: SignedDuration,
    ) -> Result<Self, SignerConfigError> {
        if validity < MIN_VALIDITY_WINDOW || validity > MAX_VALIDITY_WINDOW {
            return Err(SignerConfigError::ValidityWindow(validity));
        }

        let mac = HmacSha256::new_from_slice(key.as_bytes())
            .map_err(|_invalid_length| SignerConfigError::KeyRejected)?;

        Ok(Self { mac, validity })
    }

    /// The configured validity window.
    #[must_use]
    pub const fn validity_window(&self) -> SignedDuration {
        self.validity
    }

    /// Issue a token for `subject`, valid from now for the configured window.
    ///
    /// # Errors
    ///
    /// See [`QrSigner::issue_at`].
    pub fn issue(&self, subject: &SubjectId) -> Result<IssuedToken, TokenError> {
        self.issue_at(subject, Timestamp::now())
    }

    /// Issue a token for `subject` whose window starts at `now`.
    ///
    /// `now` is truncated to millisecond precision, the resolution carried on the wire. The
    /// caller is responsible for having authenticated `subject`.
    ///
    /// # Errors
    ///
    /// Returns [`TokenError::Clock`] if the window end is not representable, or
    /// [`TokenError::InvalidSubject`] if the subject encodes to a token longer than
    /// [`MAX_TOKEN_LEN`], which `verify` would never accept.
    pub fn issue_at(&self, subject: &SubjectId, now: Timestamp) -> Result<IssuedToken, TokenError> {
        let issued_at = Timestamp::from_millisecond(now.as_millisecond()).map_err(TokenError::Clock)?;
        let expires_at = issued_at
            .checked_add(self.validity)
            .map_err(TokenError::Clock)?;

        let mut nonce = [0_u8; NONCE_BYTES];

        OsRng.fill_bytes(&mut nonce);

        let payload = TokenPayload {
            subject: subject.clone(),
            issued_at,
            expires_at,
            nonce,
        };

        let token = self.sign(&payload)?;

        if token.len() > MAX_TOKEN_LEN {
            return Err(TokenError::InvalidSubject);
        }

        Ok(IssuedToken {
            token,
            subject: payload.subject,
            issued_at,
            expires_at,
        })
    }

    /// Verify a presented token against the current time.
    ///
    /// # Errors
    ///
    /// See [`QrSigner::verify_at`].
    pub fn verify(&self, token: &str) -> Result<SubjectId, TokenError> {
        self.verify_at(token, Timestamp::now())
    }

    /// Verify a presented token as of `now` and return the member it is bound to.
    ///
    /// # Errors
    ///
    /// Returns [`TokenError::Malformed`], [`TokenError::InvalidSignature`] or
    /// [`TokenError::Expired`]; callers should report all three identically.
    pub fn verify_at(&self, token: &str, now: Timestamp) -> Result<SubjectId, TokenError> {
        self.decode_at(token, now).map(|payload| payload.subject)
    }

    /// Verify a presented token as of `now` and return its full payload.
    ///
    /// The signature is checked, in constant time, before any payload field is parsed.
    ///
    /// # Errors
    ///
    /// Same as [`QrSigner::verify_at`].
    pub fn decode_at(&self, token: &str, now: Timestamp) -> Result<TokenPayload, TokenError> {
        let (payload_segment, signature_segment) = split_segments(token)?;

        let payload_bytes = decode_segment(payload_segment)?;
        let signature = decode_segment(signature_segment)?;

        let mut mac = self.mac.clone();
        mac.update(payload_segment.as_bytes());
        mac.verify_slice(&signature)
            .map_err(|_mismatch| TokenError::InvalidSignature)?;

        let payload: TokenPayload =
            serde_json::from_slice(&payload_bytes).map_err(|_parse| TokenError::Malformed)?;

        if !payload.has_valid_window() {
            return Err(TokenError::Malformed);
        }

        if payload.is_expired_at(now) {
            return Err(TokenError::Expired);
        }

        Ok(payload)
    }

    fn sign(&self, payload: &TokenPayload) -> Result<String, TokenError> {
        let payload_bytes = serde_json::to_vec(payload).map_err(TokenError::Serialize)?;
        let payload_segment = URL_SAFE_NO_PAD.encode(payload_bytes);

        let mut mac = self.mac.clone();
        mac.update(payload_segment.as_bytes());

        let signature_segment = URL_SAFE_NO_PAD.encode(mac.finalize().into_bytes());

        Ok(format!(
            "{payload_segment}{SEGMENT_SEPARATOR}{signature_segment}"
        ))
    }
}

impl fmt::Debug for QrSigner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QrSigner")
            .field("validity", &self.validity)
            .finish_non_exhaustive()
    }
}

fn split_segments(token: &str) -> Result<(&str, &str), TokenError> {
    if token.len() > MAX_TOKEN_LEN {
        return Err(TokenError::Malformed);
    }

    let (payload, signature) = token
        .split_once(SEGMENT_SEPARATOR)
        .ok_or(TokenError::Malformed)?;

    if payload.is_empty() || signature.is_empty() || signature.contains(SEGMENT_SEPARATOR) {
        return Err(TokenError::Malformed);
    }

    Ok((payload, signature))
}

fn decode_segment(segment: &str) -> Result<Vec<u8>, TokenError> {
    URL_SAFE_NO_PAD
        .decode(segment)
        .map_err(|_decode| TokenError::Malformed)
}
