//! QR Token Errors

use salvo::http::StatusError;
use tracing::error;

use turnstile::TokenError;
use turnstile_app::qr::QrServiceError;

/// Shown for every rejected token, whatever check failed.
pub(crate) const REJECTED_TOKEN_BRIEF: &str =
    "invalid or expired code, please refresh and try again";

pub(crate) fn into_status_error(error: QrServiceError) -> StatusError {
    match error {
        QrServiceError::Rejected(_source) => {
            StatusError::unauthorized().brief(REJECTED_TOKEN_BRIEF)
        }
        QrServiceError::Issue(TokenError::InvalidSubject) => {
            StatusError::bad_request().brief("Invalid member identity")
        }
        QrServiceError::Issue(source) => {
            error!("failed to issue qr token: {source}");

            StatusError::internal_server_error()
        }
    }
}
