//! Attendance service.

use async_trait::async_trait;
use mockall::automock;
use tracing::info;
use turnstile::SubjectId;

use crate::domain::attendance::{
    data::NewScan, errors::AttendanceServiceError, records::AttendanceRecord,
    repository::MemoryAttendanceRepository,
};

#[derive(Debug, Default)]
pub struct MemoryAttendanceService {
    repository: MemoryAttendanceRepository,
}

impl MemoryAttendanceService {
    #[must_use]
    pub fn new() -> Self {
        Self {
            repository: MemoryAttendanceRepository::new(),
        }
    }
}

#[async_trait]
impl AttendanceService for MemoryAttendanceService {
    async fn record_scan(&self, scan: NewScan) -> Result<AttendanceRecord, AttendanceServiceError> {
        let record = self.repository.record_scan(scan).await?;

        info!(
            uuid = %record.uuid,
            direction = %record.direction,
            "attendance recorded"
        );

        Ok(record)
    }

    async fn list_attendance(
        &self,
        subject: &SubjectId,
    ) -> Result<Vec<AttendanceRecord>, AttendanceServiceError> {
        Ok(self.repository.list_for_subject(subject).await)
    }
}

#[automock]
#[async_trait]
/// Check-in and check-out recording.
pub trait AttendanceService: Send + Sync {
    /// Records a verified scan.
    async fn record_scan(&self, scan: NewScan) -> Result<AttendanceRecord, AttendanceServiceError>;

    /// Lists a member's records in the order they were recorded.
    async fn list_attendance(
        &self,
        subject: &SubjectId,
    ) -> Result<Vec<AttendanceRecord>, AttendanceServiceError>;
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use jiff::Timestamp;
    use testresult::TestResult;

    use crate::domain::attendance::records::Direction;

    use super::*;

    fn scan(subject: &str, direction: Option<Direction>) -> TestResult<NewScan> {
        Ok(NewScan {
            subject: SubjectId::new(subject)?,
            direction,
            at: Timestamp::now(),
        })
    }

    #[tokio::test]
    async fn record_scan_toggles_between_check_in_and_out() -> TestResult {
        let svc = MemoryAttendanceService::new();

        let first = svc.record_scan(scan("member-1", None)?).await?;
        let second = svc.record_scan(scan("member-1", None)?).await?;
        let third = svc.record_scan(scan("member-1", None)?).await?;

        assert_eq!(first.direction, Direction::CheckIn);
        assert_eq!(second.direction, Direction::CheckOut);
        assert_eq!(third.direction, Direction::CheckIn);

        Ok(())
    }

    #[tokio::test]
    async fn members_are_tracked_independently() -> TestResult {
        let svc = MemoryAttendanceService::new();

        svc.record_scan(scan("member-1", None)?).await?;

        let other = svc.record_scan(scan("member-2", None)?).await?;

        assert_eq!(other.direction, Direction::CheckIn);
        assert_eq!(
            svc.list_attendance(&SubjectId::new("member-1")?).await?.len(),
            1
        );

        Ok(())
    }

    #[tokio::test]
    async fn rejected_scan_is_not_recorded() -> TestResult {
        let svc = MemoryAttendanceService::new();

        let result = svc
            .record_scan(scan("member-1", Some(Direction::CheckOut))?)
            .await;

        assert!(
            matches!(result, Err(AttendanceServiceError::NotCheckedIn)),
            "expected NotCheckedIn, got {result:?}"
        );
        assert!(
            svc.list_attendance(&SubjectId::new("member-1")?)
                .await?
                .is_empty(),
            "rejected scans must not be stored"
        );

        Ok(())
    }

    #[tokio::test]
    async fn list_returns_records_in_order() -> TestResult {
        let svc = MemoryAttendanceService::new();

        let check_in = svc
            .record_scan(scan("member-1", Some(Direction::CheckIn))?)
            .await?;
        let check_out = svc
            .record_scan(scan("member-1", Some(Direction::CheckOut))?)
            .await?;

        let records = svc.list_attendance(&SubjectId::new("member-1")?).await?;

        assert_eq!(records, vec![check_in, check_out]);

        Ok(())
    }

    #[tokio::test]
    async fn unknown_member_has_no_records() -> TestResult {
        let svc = MemoryAttendanceService::new();

        assert!(
            svc.list_attendance(&SubjectId::new("nobody")?)
                .await?
                .is_empty(),
            "unknown member should have no records"
        );

        Ok(())
    }

    #[tokio::test]
    async fn concurrent_scans_alternate_directions() -> TestResult {
        let svc = Arc::new(MemoryAttendanceService::new());
        let subject = SubjectId::new("member-1")?;

        let tasks: Vec<_> = (0..10)
            .map(|_| {
                let svc = Arc::clone(&svc);
                let scan = NewScan {
                    subject: subject.clone(),
                    direction: None,
                    at: Timestamp::now(),
                };

                tokio::spawn(async move { svc.record_scan(scan).await })
            })
            .collect();

        for task in tasks {
            task.await??;
        }

        let records = svc.list_attendance(&SubjectId::new("member-1")?).await?;
        let check_ins = records
            .iter()
            .filter(|record| record.direction == Direction::CheckIn)
            .count();

        assert_eq!(records.len(), 10);
        assert_eq!(check_ins, 5);
        assert!(
            records
                .windows(2)
                .all(|pair| matches!(pair, [a, b] if a.direction != b.direction)),
            "directions must alternate"
        );

        Ok(())
    }
}
