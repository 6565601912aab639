//! Record Scan Handler

use std::sync::Arc;

use jiff::Timestamp;
use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use turnstile_app::domain::attendance::data::NewScan;

use crate::{
    attendance::{
        errors::into_status_error,
        models::{AttendanceDirection, AttendanceResponse},
    },
    extensions::*,
    observability::observe_qr_verification,
    qr::errors::into_status_error as qr_status_error,
    state::State,
};

/// Scan Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ScanRequest {
    /// Token read from the member's QR code
    pub token: String,

    /// Requested direction; toggles from the member's last scan when omitted
    #[serde(default)]
    pub direction: Option<AttendanceDirection>,
}

/// Record Scan Handler
///
/// Verifies a scanned QR token and records a check-in or check-out for the member it was
/// issued to. The token is the credential, so no member identity header is required.
#[endpoint(
    tags("attendance"),
    summary = "Record Scan",
    responses(
        (status_code = StatusCode::CREATED, description = "Attendance recorded"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Invalid or expired code"),
        (status_code = StatusCode::CONFLICT, description = "Scan contradicts the member's current state"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<ScanRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<AttendanceResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let ScanRequest { token, direction } = json.into_inner();

    let subject = match state.app.qr.verify_token(&token).await {
        Ok(subject) => {
            observe_qr_verification("accepted");

            subject
        }
        Err(error) => {
            observe_qr_verification(error.token_error().kind());

            return Err(qr_status_error(error));
        }
    };

    let record = state
        .app
        .attendance
        .record_scan(NewScan {
            subject,
            direction: direction.map(Into::into),
            at: Timestamp::now(),
        })
        .await
        .map_err(into_status_error)?;

    res.status_code(StatusCode::CREATED);

    Ok(Json(record.into()))
}
