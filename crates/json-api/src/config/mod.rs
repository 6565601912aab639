//! Server configuration module

use clap::Parser;
use turnstile_app::qr::SigningConfig;

use crate::config::{
    identity::IdentityConfig,
    observability::{LoggingConfig, ObservabilityConfig},
    server::ServerRuntimeConfig,
};

pub(crate) mod identity;
pub(crate) mod observability;
pub(crate) mod server;

/// Turnstile JSON API Server configuration
#[derive(Debug, Parser)]
#[command(name = "turnstile-json", about = "Turnstile JSON API Server", long_about = None)]
pub struct ServerConfig {
    /// Server network settings.
    #[command(flatten)]
    pub server: ServerRuntimeConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Request observability settings.
    #[command(flatten)]
    pub observability: ObservabilityConfig,

    /// QR token signing settings.
    #[command(flatten)]
    pub signing: SigningConfig,

    /// Upstream identity settings.
    #[command(flatten)]
    pub identity: IdentityConfig,
}

impl ServerConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    /// Get the socket address for binding
    #[must_use]
    pub fn socket_addr(&self) -> String {
        self.server.socket_addr()
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn command_definition_is_consistent() {
        ServerConfig::command().debug_assert();
    }

    #[test]
    fn arguments_populate_flattened_sections() -> TestResult {
        let config = ServerConfig::try_parse_from([
            "turnstile-json",
            "--signing-secret",
            "c2lnbmluZy1zZWNyZXQtZm9yLXR1cm5zdGlsZS10ZXN0cw==",
            "--token-validity-seconds",
            "15",
            "--identity-header",
            "X-Forwarded-User",
            "--port",
            "8698",
        ])?;

        assert_eq!(config.signing.token_validity_seconds, 15);
        assert_eq!(config.identity.identity_header.as_str(), "x-forwarded-user");
        assert_eq!(config.server.port, 8698);

        Ok(())
    }

    #[test]
    fn invalid_identity_header_is_rejected() {
        let result = ServerConfig::try_parse_from([
            "turnstile-json",
            "--signing-secret",
            "c2lnbmluZy1zZWNyZXQtZm9yLXR1cm5zdGlsZS10ZXN0cw==",
            "--identity-header",
            "not a header",
        ]);

        assert!(result.is_err(), "header names with spaces must be rejected");
    }
}
