//! QR check-in tokens

mod config;
mod errors;
mod service;

pub use config::SigningConfig;
pub use errors::QrServiceError;
pub use service::*;
