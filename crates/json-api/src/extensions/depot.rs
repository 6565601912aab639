//! Depot helper extensions.

use std::any::Any;

use salvo::prelude::{Depot, StatusError};
use turnstile::SubjectId;

/// Helpers for reading request-scoped values out of the depot.
pub(crate) trait DepotExt {
    /// Obtain an injected value, or fail with a 500 when it is missing.
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError>;

    /// Record the authenticated member for downstream handlers.
    fn insert_subject_id(&mut self, subject: SubjectId);

    /// The authenticated member, or a 401 when the identity middleware did not run.
    fn subject_id_or_401(&self) -> Result<SubjectId, StatusError>;
}

impl DepotExt for Depot {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError> {
        self.obtain::<T>()
            .map_err(|_missing| StatusError::internal_server_error())
    }

    fn insert_subject_id(&mut self, subject: SubjectId) {
        self.inject(subject);
    }

    fn subject_id_or_401(&self) -> Result<SubjectId, StatusError> {
        self.obtain::<SubjectId>()
            .cloned()
            .map_err(|_missing| StatusError::unauthorized().brief("Missing member identity"))
    }
}
