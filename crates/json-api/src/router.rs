//! App Router

use salvo::Router;

use crate::{attendance, identity, qr};

/// Routes that need the identity middleware are nested under it; scanning does not,
/// since the token itself is the credential.
pub(crate) fn app_router() -> Router {
    Router::new()
        .push(Router::with_path("attendance/scans").post(attendance::scan::handler))
        .push(
            Router::new()
                .hoop(identity::middleware::handler)
                .push(Router::with_path("qr/tokens").post(qr::issue::handler))
                .push(Router::with_path("attendance").get(attendance::index::handler)),
        )
}
