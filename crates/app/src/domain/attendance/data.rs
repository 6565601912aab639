//! Attendance Data

use jiff::Timestamp;
use turnstile::SubjectId;

use crate::domain::attendance::{errors::AttendanceServiceError, records::Direction};

/// A verified scan waiting to be recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewScan {
    /// Member recovered from the scanned token.
    pub subject: SubjectId,

    /// Requested direction; toggles from the member's last record when absent.
    pub direction: Option<Direction>,

    /// Scan time.
    pub at: Timestamp,
}

impl NewScan {
    /// Decide the direction of this scan given the member's most recent direction.
    ///
    /// # Errors
    ///
    /// Returns an error when an explicit direction contradicts the member's current state.
    pub fn resolve_direction(
        &self,
        last: Option<Direction>,
    ) -> Result<Direction, AttendanceServiceError> {
        match (self.direction, last) {
            (None, Some(last)) => Ok(last.opposite()),
            (None, None) => Ok(Direction::CheckIn),
            (Some(Direction::CheckIn), Some(Direction::CheckIn)) => {
                Err(AttendanceServiceError::AlreadyCheckedIn)
            }
            (Some(Direction::CheckOut), None | Some(Direction::CheckOut)) => {
                Err(AttendanceServiceError::NotCheckedIn)
            }
            (Some(requested), _) => Ok(requested),
        }
    }
}
