//! Attendance Index Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use crate::{
    attendance::{errors::into_status_error, models::AttendanceResponse},
    extensions::*,
    state::State,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct AttendanceListResponse {
    /// The member's records, oldest first
    pub records: Vec<AttendanceResponse>,
}

/// Attendance Index Handler
///
/// Returns the authenticated member's own attendance history.
#[endpoint(
    tags("attendance"),
    summary = "List Attendance",
    security(("member_identity" = []))
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<AttendanceListResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let subject = depot.subject_id_or_401()?;

    let records = state
        .app
        .attendance
        .list_attendance(&subject)
        .await
        .map_err(into_status_error)?;

    Ok(Json(AttendanceListResponse {
        records: records.into_iter().map(Into::into).collect(),
    }))
}
