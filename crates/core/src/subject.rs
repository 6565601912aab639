//! Subject identifiers

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use serde::{Deserialize, Serialize};

use crate::errors::TokenError;

/// Longest subject identifier, in bytes, that can be bound into a token.
pub const MAX_SUBJECT_LEN: usize = 256;

/// Opaque identifier of the member a token authenticates.
///
/// The value is whatever the identity system uses for user ids; the only rules enforced here
/// are that it is not blank and fits in [`MAX_SUBJECT_LEN`] bytes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SubjectId(String);

impl SubjectId {
    /// Create a subject identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TokenError::InvalidSubject`] when the value is empty, only whitespace, or
    /// longer than [`MAX_SUBJECT_LEN`] bytes.
    pub fn new(value: impl Into<String>) -> Result<Self, TokenError> {
        let value = value.into();

        if value.trim().is_empty() || value.len() > MAX_SUBJECT_LEN {
            return Err(TokenError::InvalidSubject);
        }

        Ok(Self(value))
    }

    /// Borrow the identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Take the identifier as an owned string.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl Display for SubjectId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.0)
    }
}

impl FromStr for SubjectId {
    type Err = TokenError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::new(value)
    }
}

impl TryFrom<String> for SubjectId {
    type Error = TokenError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<SubjectId> for String {
    fn from(value: SubjectId) -> Self {
        value.0
    }
}

impl AsRef<str> for SubjectId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn accepts_opaque_identifiers() -> TestResult {
        let subject = SubjectId::new("665f1c2e9b1e8a3d4c7f0a12")?;

        assert_eq!(subject.as_str(), "665f1c2e9b1e8a3d4c7f0a12");
        assert_eq!(subject.to_string(), "665f1c2e9b1e8a3d4c7f0a12");

        Ok(())
    }

    #[test]
    fn rejects_blank_identifiers() {
        assert!(
            matches!(SubjectId::new(""), Err(TokenError::InvalidSubject)),
            "empty subject must be rejected"
        );
        assert!(
            matches!(SubjectId::new("  \t"), Err(TokenError::InvalidSubject)),
            "whitespace subject must be rejected"
        );
    }

    #[test]
    fn length_is_bounded() -> TestResult {
        let longest = SubjectId::new("m".repeat(MAX_SUBJECT_LEN))?;

        assert_eq!(longest.as_str().len(), MAX_SUBJECT_LEN);
        assert!(
            matches!(
                SubjectId::new("m".repeat(MAX_SUBJECT_LEN + 1)),
                Err(TokenError::InvalidSubject)
            ),
            "over-long subject must be rejected"
        );

        Ok(())
    }

    #[test]
    fn deserializing_blank_identifier_fails() {
        let result = serde_json::from_str::<SubjectId>("\"\"");

        assert!(result.is_err(), "blank subject must not deserialize");
    }
}
