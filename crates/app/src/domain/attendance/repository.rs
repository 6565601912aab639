//! Attendance Repository

use rustc_hash::FxHashMap;
use tokio::sync::RwLock;
use turnstile::SubjectId;

use crate::domain::attendance::{
    data::NewScan,
    errors::AttendanceServiceError,
    records::{AttendanceRecord, AttendanceUuid},
};

/// In-process attendance log, keyed by member.
#[derive(Debug, Default)]
pub(crate) struct MemoryAttendanceRepository {
    records: RwLock<FxHashMap<SubjectId, Vec<AttendanceRecord>>>,
}

impl MemoryAttendanceRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Resolve the scan's direction against the member's last record and append it.
    ///
    /// The write lock is held across the read and the append, so concurrent scans for the same
    /// member are serialised.
    pub(crate) async fn record_scan(
        &self,
        scan: NewScan,
    ) -> Result<AttendanceRecord, AttendanceServiceError> {
        let mut records = self.records.write().await;
        let history = records.entry(scan.subject.clone()).or_default();

        let last = history.last().map(|record| record.direction);
        let direction = scan.resolve_direction(last)?;

        let record = AttendanceRecord {
            uuid: AttendanceUuid::new(),
            subject: scan.subject,
            direction,
            recorded_at: scan.at,
        };

        history.push(record.clone());

        Ok(record)
    }

    pub(crate) async fn list_for_subject(&self, subject: &SubjectId) -> Vec<AttendanceRecord> {
        self.records
            .read()
            .await
            .get(subject)
            .cloned()
            .unwrap_or_default()
    }
}
