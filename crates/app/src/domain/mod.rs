//! Turnstile Domain Concerns

pub mod attendance;
