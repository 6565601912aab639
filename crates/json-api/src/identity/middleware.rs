//! Identity middleware.
//!
//! The authenticating proxy in front of the server forwards the member id in a trusted
//! header. Requests without it never reach member-scoped handlers.

use std::sync::Arc;

use salvo::{http::HeaderName, prelude::*};
use turnstile::SubjectId;

use crate::{extensions::*, state::State};

const MISSING_IDENTITY: &str = "Missing or invalid member identity";

#[salvo::handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    let state = match depot.obtain::<Arc<State>>() {
        Ok(state) => Arc::clone(state),
        Err(_error) => {
            res.render(StatusError::internal_server_error());

            return;
        }
    };

    let subject = match extract_subject(req, &state.identity_header) {
        Ok(subject) => subject,
        Err(status) => {
            res.render(status);

            return;
        }
    };

    depot.insert_subject_id(subject);

    ctrl.call_next(req, depot, res).await;
}

fn extract_subject(req: &Request, header: &HeaderName) -> Result<SubjectId, StatusError> {
    let value = req
        .headers()
        .get(header)
        .ok_or_else(|| StatusError::unauthorized().brief(MISSING_IDENTITY))?
        .to_str()
        .or_401(MISSING_IDENTITY)?;

    SubjectId::new(value).or_401(MISSING_IDENTITY)
}

#[cfg(test)]
mod tests {
    use salvo::{
        affix_state::inject,
        test::{ResponseExt, TestClient},
    };
    use testresult::TestResult;
    use turnstile::prelude::MAX_SUBJECT_LEN;

    use crate::test_helpers::{IDENTITY_HEADER, strict_state};

    use super::*;

    #[salvo::handler]
    async fn echo_subject(depot: &mut Depot, res: &mut Response) {
        let subject = depot
            .subject_id_or_401()
            .ok()
            .map_or_else(|| "missing".to_string(), SubjectId::into_string);

        res.render(subject);
    }

    fn make_service() -> Service {
        let router = Router::new()
            .hoop(inject(strict_state()))
            .hoop(handler)
            .push(Router::new().get(echo_subject));

        Service::new(router)
    }

    #[tokio::test]
    async fn missing_identity_header_returns_401() -> TestResult {
        let res = TestClient::get("http://example.com")
            .send(&make_service())
            .await;

        assert_eq!(res.status_code, Some(StatusCode::UNAUTHORIZED));

        Ok(())
    }

    #[tokio::test]
    async fn blank_identity_header_returns_401() -> TestResult {
        let res = TestClient::get("http://example.com")
            .add_header(IDENTITY_HEADER, "   ", true)
            .send(&make_service())
            .await;

        assert_eq!(res.status_code, Some(StatusCode::UNAUTHORIZED));

        Ok(())
    }

    #[tokio::test]
    async fn oversized_identity_header_returns_401() -> TestResult {
        let res = TestClient::get("http://example.com")
            .add_header(IDENTITY_HEADER, "u".repeat(MAX_SUBJECT_LEN + 1), true)
            .send(&make_service())
            .await;

        assert_eq!(res.status_code, Some(StatusCode::UNAUTHORIZED));

        Ok(())
    }

    #[tokio::test]
    async fn identity_header_injects_subject() -> TestResult {
        let mut res = TestClient::get("http://example.com")
            .add_header(IDENTITY_HEADER, "member-42", true)
            .send(&make_service())
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(res.take_string().await?, "member-42");

        Ok(())
    }
}
