//! Attendance Errors

use salvo::http::StatusError;

use turnstile_app::domain::attendance::AttendanceServiceError;

pub(crate) fn into_status_error(error: AttendanceServiceError) -> StatusError {
    match error {
        AttendanceServiceError::AlreadyCheckedIn => {
            StatusError::conflict().brief("Member is already checked in")
        }
        AttendanceServiceError::NotCheckedIn => {
            StatusError::conflict().brief("Member is not checked in")
        }
    }
}
