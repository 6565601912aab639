//! QR token service.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use tracing::{debug, warn};
use turnstile::{IssuedToken, QrSigner, SubjectId};

use crate::qr::QrServiceError;

/// QR service backed by an in-process HMAC signer.
#[derive(Debug, Clone)]
pub struct SignerQrService {
    signer: Arc<QrSigner>,
}

impl SignerQrService {
    #[must_use]
    pub fn new(signer: QrSigner) -> Self {
        Self {
            signer: Arc::new(signer),
        }
    }
}

#[async_trait]
impl QrService for SignerQrService {
    async fn issue_token(&self, subject: &SubjectId) -> Result<IssuedToken, QrServiceError> {
        let issued = self.signer.issue(subject).map_err(QrServiceError::Issue)?;

        debug!(expires_at = %issued.expires_at, "issued qr token");

        Ok(issued)
    }

    async fn verify_token(&self, token: &str) -> Result<SubjectId, QrServiceError> {
        self.signer.verify(token).map_err(|source| {
            warn!(kind = source.kind(), "qr token rejected");

            QrServiceError::Rejected(source)
        })
    }
}

#[automock]
#[async_trait]
/// Issue and verify QR check-in tokens.
pub trait QrService: Send + Sync {
    /// Issue a token for an already-authenticated member.
    async fn issue_token(&self, subject: &SubjectId) -> Result<IssuedToken, QrServiceError>;

    /// Verify a scanned token and return the member it is bound to.
    async fn verify_token(&self, token: &str) -> Result<SubjectId, QrServiceError>;
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;
    use turnstile::{SigningKey, TokenError};

    use super::*;

    fn service(byte: u8) -> TestResult<SignerQrService> {
        let key = SigningKey::from_bytes(vec![byte; 32])?;

        Ok(SignerQrService::new(QrSigner::new(&key)?))
    }

    #[tokio::test]
    async fn issued_token_verifies_to_subject() -> TestResult {
        let service = service(1)?;
        let subject = SubjectId::new("member-1")?;

        let issued = service.issue_token(&subject).await?;

        assert_eq!(service.verify_token(&issued.token).await?, subject);

        Ok(())
    }

    #[tokio::test]
    async fn foreign_token_is_rejected() -> TestResult {
        let issuer = service(1)?;
        let verifier = service(2)?;

        let issued = issuer.issue_token(&SubjectId::new("member-1")?).await?;
        let result = verifier.verify_token(&issued.token).await;

        assert!(
            matches!(
                result,
                Err(QrServiceError::Rejected(TokenError::InvalidSignature))
            ),
            "expected signature rejection, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn garbage_is_rejected_as_malformed() -> TestResult {
        let result = service(3)?.verify_token("garbage").await;

        assert!(
            matches!(result, Err(QrServiceError::Rejected(TokenError::Malformed))),
            "expected malformed rejection, got {result:?}"
        );

        Ok(())
    }
}
