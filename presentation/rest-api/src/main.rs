use dotenvy::dotenv;

mod api;
mod config;
mod setup;

use config::env::ProcessEnv;
use setup::{bootstrap, server::Server};

/// Chat Chain API Entry Point
///
/// Validates configuration, wires the chain and starts the HTTP server.
///
/// - config/: Environment-backed settings and their validation
/// - setup/: Startup sequence, dependency injection and server setup
/// - api/: Route handlers, DTOs and error mapping
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize tracing with RUST_LOG env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // 2. Load environment variables
    if let Err(e) = dotenv() {
        tracing::debug!("No .env file loaded: {}", e);
    }

    // 3. Validate configuration and wire dependencies; a missing key stops here
    let (config, container) = bootstrap::prepare(&ProcessEnv).inspect_err(|e| {
        tracing::error!("Startup aborted: {:#}", e);
    })?;

    // 4. Run server
    Server::run(config, container).await?;

    Ok(())
}
