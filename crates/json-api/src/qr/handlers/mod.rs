//! QR Token Handlers

pub(crate) mod issue;
