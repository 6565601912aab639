//! Attendance Records

use std::fmt::{Display, Formatter, Result as FmtResult};

use jiff::Timestamp;
use turnstile::SubjectId;
use uuid::Uuid;

/// Attendance record UUID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AttendanceUuid(Uuid);

impl AttendanceUuid {
    /// Generate a new time-ordered identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    #[must_use]
    pub const fn into_uuid(self) -> Uuid {
        self.0
    }
}

impl Default for AttendanceUuid {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for AttendanceUuid {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Display::fmt(&self.0, f)
    }
}

impl From<AttendanceUuid> for Uuid {
    fn from(value: AttendanceUuid) -> Self {
        value.into_uuid()
    }
}

/// Whether a scan entered or left the gym.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    CheckIn,
    CheckOut,
}

impl Direction {
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::CheckIn => Self::CheckOut,
            Self::CheckOut => Self::CheckIn,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CheckIn => "check_in",
            Self::CheckOut => "check_out",
        }
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// Attendance Record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttendanceRecord {
    /// Unique record identifier.
    pub uuid: AttendanceUuid,

    /// Member whose verified token produced the record.
    pub subject: SubjectId,

    /// Check-in or check-out.
    pub direction: Direction,

    /// When the scan was recorded.
    pub recorded_at: Timestamp,
}
