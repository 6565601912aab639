//! Turnstile JSON API Server
//!
//! Issues short-lived signed QR tokens to authenticated members and records check-ins and
//! check-outs when those tokens are scanned at the door.

use std::process;

use salvo::{
    affix_state::inject,
    oapi::{
        OpenApi,
        security::{ApiKey, ApiKeyValue, SecurityScheme},
        swagger_ui::SwaggerUi,
    },
    prelude::*,
    trailing_slash::remove_slash,
};
use tracing::{error, info};

use turnstile_app::context::AppContext;

use crate::{
    config::ServerConfig,
    observability::{metrics_handler, request_logging},
    state::State,
};

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

mod attendance;
mod config;
mod extensions;
mod healthcheck;
mod identity;
mod observability;
mod qr;
mod router;
mod shutdown;
mod state;
#[cfg(test)]
mod test_helpers;

/// Turnstile JSON API Server entry point
#[tokio::main]
pub async fn main() {
    // Load configuration from .env and CLI arguments
    let config = ServerConfig::load().unwrap_or_else(|e| {
        #[expect(
            clippy::print_stderr,
            reason = "logging not initialized yet, must use eprintln for config errors"
        )]
        {
            eprintln!("Configuration error: {e}");
        }

        process::exit(1);
    });

    if let Err(init_error) = observability::init(&config) {
        #[expect(
            clippy::print_stderr,
            reason = "tracing subscriber failed to install, nothing else can report this"
        )]
        {
            eprintln!("{init_error}");
        }

        process::exit(1);
    }

    // A missing or invalid signing key must stop the server before it binds.
    let app = match AppContext::from_signing_config(&config.signing) {
        Ok(app) => app,
        Err(init_error) => {
            error!("failed to initialize app context: {init_error}");

            process::exit(1);
        }
    };

    let identity_header = config.identity.identity_header.clone();
    let addr = config.socket_addr();

    info!(
        %addr,
        identity_header = identity_header.as_str(),
        "Starting server"
    );

    let listener = TcpListener::new(addr).bind().await;

    let router = Router::new()
        .hoop(CatchPanic::new())
        .hoop(request_logging)
        .hoop(remove_slash())
        .hoop(inject(State::from_app_context(app, identity_header.clone())))
        .push(Router::with_path("healthcheck").get(healthcheck::handler))
        .push(Router::with_path("metrics").get(metrics_handler))
        .push(router::app_router());

    let doc = OpenApi::new("Turnstile API", env!("CARGO_PKG_VERSION"))
        .add_security_scheme(
            "member_identity",
            SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::new(identity_header.as_str()))),
        )
        .merge_router(&router);

    let router = router
        .push(doc.into_router("/api-doc/openapi.json"))
        .push(SwaggerUi::new("/api-doc/openapi.json").into_router("docs"));

    let server = Server::new(listener);

    let handle = server.handle();

    // Listen for shutdown signal
    tokio::spawn(async move {
        if let Err(error) = shutdown::listen(handle).await {
            error!("failed to listen for shutdown signal: {error}");
        }
    });

    // Start serving requests
    server.serve(router).await;

    info!("server stopped");
}
