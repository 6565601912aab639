//! State

use std::sync::Arc;

use salvo::http::HeaderName;
use turnstile_app::context::AppContext;

#[derive(Clone)]
pub(crate) struct State {
    pub(crate) app: AppContext,
    pub(crate) identity_header: HeaderName,
}

impl State {
    #[must_use]
    pub(crate) fn new(app: AppContext, identity_header: HeaderName) -> Self {
        Self {
            app,
            identity_header,
        }
    }

    #[must_use]
    pub(crate) fn from_app_context(app: AppContext, identity_header: HeaderName) -> Arc<Self> {
        Arc::new(Self::new(app, identity_header))
    }
}
