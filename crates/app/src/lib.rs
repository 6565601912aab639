//! Shared application domain and QR token services.

pub mod context;
pub mod domain;
pub mod qr;
