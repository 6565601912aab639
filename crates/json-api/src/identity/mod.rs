//! Upstream identity

pub(crate) mod middleware;
