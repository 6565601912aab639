//! Identity Config

use clap::Args;
use salvo::http::HeaderName;

/// Upstream identity provider settings.
///
/// Sessions are authenticated by a proxy in front of this server, which forwards the
/// authenticated member id in a trusted request header.
#[derive(Debug, Args)]
pub struct IdentityConfig {
    /// Request header carrying the authenticated member id
    #[arg(
        long,
        env = "IDENTITY_HEADER",
        default_value = "x-forwarded-user",
        value_parser = parse_header_name
    )]
    pub identity_header: HeaderName,
}

fn parse_header_name(value: &str) -> Result<HeaderName, String> {
    HeaderName::from_bytes(value.trim().as_bytes())
        .map_err(|error| format!("invalid header name {value:?}: {error}"))
}
