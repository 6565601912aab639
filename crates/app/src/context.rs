//! App Context

use std::sync::Arc;

use thiserror::Error;
use turnstile::{QrSigner, SignerConfigError, SigningKeyError};

use crate::{
    domain::attendance::{AttendanceService, MemoryAttendanceService},
    qr::{QrService, SignerQrService, SigningConfig},
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("invalid QR signing secret: {0}")]
    SigningKey(#[from] SigningKeyError),

    #[error("invalid QR signer configuration: {0}")]
    Signer(#[from] SignerConfigError),
}

#[derive(Clone)]
pub struct AppContext {
    pub qr: Arc<dyn QrService>,
    pub attendance: Arc<dyn AttendanceService>,
}

impl AppContext {
    /// Build application context from signing configuration.
    ///
    /// # Errors
    ///
    /// Returns an error when the signing secret or validity window is invalid. Callers should
    /// treat this as fatal and refuse to serve traffic.
    pub fn from_signing_config(config: &SigningConfig) -> Result<Self, AppInitError> {
        Ok(Self::from_signer(config.build_signer()?))
    }

    /// Build application context around an already-constructed signer.
    #[must_use]
    pub fn from_signer(signer: QrSigner) -> Self {
        Self {
            qr: Arc::new(SignerQrService::new(signer)),
            attendance: Arc::new(MemoryAttendanceService::new()),
        }
    }
}
