//! Attendance Models

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use turnstile_app::domain::attendance::records::{AttendanceRecord, Direction};

/// Scan direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub(crate) enum AttendanceDirection {
    /// Entering the gym
    CheckIn,

    /// Leaving the gym
    CheckOut,
}

impl From<AttendanceDirection> for Direction {
    fn from(direction: AttendanceDirection) -> Self {
        match direction {
            AttendanceDirection::CheckIn => Direction::CheckIn,
            AttendanceDirection::CheckOut => Direction::CheckOut,
        }
    }
}

impl From<Direction> for AttendanceDirection {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::CheckIn => AttendanceDirection::CheckIn,
            Direction::CheckOut => AttendanceDirection::CheckOut,
        }
    }
}

/// Attendance Record Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct AttendanceResponse {
    /// Record UUID
    pub uuid: Uuid,

    /// Member the record belongs to
    pub subject_id: String,

    /// Check-in or check-out
    pub direction: AttendanceDirection,

    /// When the scan was recorded (RFC 3339)
    pub recorded_at: String,
}

impl From<AttendanceRecord> for AttendanceResponse {
    fn from(record: AttendanceRecord) -> Self {
        AttendanceResponse {
            uuid: record.uuid.into_uuid(),
            subject_id: record.subject.into_string(),
            direction: record.direction.into(),
            recorded_at: record.recorded_at.to_string(),
        }
    }
}
