//! Attendance service errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AttendanceServiceError {
    #[error("member is already checked in")]
    AlreadyCheckedIn,

    #[error("member is not checked in")]
    NotCheckedIn,
}
