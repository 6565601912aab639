//! Test helpers.

use std::sync::Arc;

use jiff::Timestamp;
use salvo::{affix_state::inject, http::HeaderName, prelude::*};
use turnstile::SubjectId;
use turnstile_app::{
    context::AppContext,
    domain::attendance::{
        MockAttendanceService,
        records::{AttendanceRecord, AttendanceUuid, Direction},
    },
    qr::MockQrService,
};

use crate::{extensions::*, state::State};

pub(crate) const IDENTITY_HEADER: &str = "x-forwarded-user";

pub(crate) const TEST_SUBJECT: &str = "member-1";

pub(crate) fn test_subject() -> SubjectId {
    TEST_SUBJECT
        .parse()
        .unwrap_or_else(|_error| unreachable!("test subject is not blank"))
}

#[salvo::handler]
pub(crate) async fn inject_subject(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    depot.insert_subject_id(test_subject());
    ctrl.call_next(req, depot, res).await;
}

pub(crate) fn strict_qr_mock() -> MockQrService {
    let mut qr = MockQrService::new();

    qr.expect_issue_token().never();
    qr.expect_verify_token().never();

    qr
}

pub(crate) fn strict_attendance_mock() -> MockAttendanceService {
    let mut attendance = MockAttendanceService::new();

    attendance.expect_record_scan().never();
    attendance.expect_list_attendance().never();

    attendance
}

pub(crate) fn make_state(qr: MockQrService, attendance: MockAttendanceService) -> Arc<State> {
    State::from_app_context(
        AppContext {
            qr: Arc::new(qr),
            attendance: Arc::new(attendance),
        },
        HeaderName::from_static(IDENTITY_HEADER),
    )
}

pub(crate) fn strict_state() -> Arc<State> {
    make_state(strict_qr_mock(), strict_attendance_mock())
}

pub(crate) fn make_record(direction: Direction, recorded_at: Timestamp) -> AttendanceRecord {
    AttendanceRecord {
        uuid: AttendanceUuid::new(),
        subject: test_subject(),
        direction,
        recorded_at,
    }
}

/// Service with mocked state and the test member already authenticated.
pub(crate) fn member_service(
    qr: MockQrService,
    attendance: MockAttendanceService,
    route: Router,
) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(make_state(qr, attendance)))
            .hoop(inject_subject)
            .push(route),
    )
}

/// Service with mocked state and no authenticated member.
pub(crate) fn anonymous_service(
    qr: MockQrService,
    attendance: MockAttendanceService,
    route: Router,
) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(make_state(qr, attendance)))
            .push(route),
    )
}
