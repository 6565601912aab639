//! Issue QR Token Handler

use std::sync::Arc;

use salvo::{http::header::CACHE_CONTROL, oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use turnstile::IssuedToken;

use crate::{extensions::*, qr::errors::into_status_error, state::State};

/// Issued QR Token Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct IssuedTokenResponse {
    /// Token to render as a QR code
    pub token: String,

    /// Member the token is bound to
    pub subject_id: String,

    /// Start of the validity window (RFC 3339)
    pub issued_at: String,

    /// End of the validity window (RFC 3339); clients should refresh before this
    pub expires_at: String,
}

impl From<IssuedToken> for IssuedTokenResponse {
    fn from(issued: IssuedToken) -> Self {
        IssuedTokenResponse {
            token: issued.token,
            subject_id: issued.subject.into_string(),
            issued_at: issued.issued_at.to_string(),
            expires_at: issued.expires_at.to_string(),
        }
    }
}

/// Issue QR Token Handler
///
/// Issues a short-lived check-in token for the authenticated member.
#[endpoint(
    tags("qr"),
    summary = "Issue QR Token",
    security(("member_identity" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Token issued"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Missing member identity"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid member identity"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<IssuedTokenResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let subject = depot.subject_id_or_401()?;

    let issued = state
        .app
        .qr
        .issue_token(&subject)
        .await
        .map_err(into_status_error)?;

    res.add_header(CACHE_CONTROL, "no-store", true)
        .or_500("failed to set cache-control header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(issued.into()))
}
