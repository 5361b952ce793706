//! Envelope thermal evaluation service
//!
//! Thin HTTP wrapper around `envelope_core`:
//! - `POST /calculate` - evaluate one envelope assembly
//! - `GET /health` - liveness and version info
//!
//! The service is stateless; every request is an independent evaluation
//! against the process-wide immutable reference tables.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod error;
mod handlers;
mod router;
mod server;
mod state;

use error::{ServiceError, ServiceResult};
use server::Server;

/// Envelope evaluation service CLI
#[derive(Parser)]
#[command(name = "enveloped")]
#[command(about = "Envelope thermal evaluation HTTP service", long_about = None)]
#[command(version)]
struct Cli {
    /// Listen address
    #[arg(
        short,
        long,
        env = "ENVELOPE_LISTEN_ADDR",
        default_value = "127.0.0.1:3000"
    )]
    listen: String,

    /// Log level
    #[arg(long, env = "ENVELOPE_LOG_LEVEL", default_value = "info")]
    log_level: String,

    /// Enable JSON logging
    #[arg(long, env = "ENVELOPE_LOG_JSON")]
    json: bool,
}

#[tokio::main]
async fn main() -> ServiceResult<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| cli.log_level.clone().into());

    if cli.json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    let listen_addr = cli
        .listen
        .parse()
        .map_err(|e| ServiceError::Config(format!("invalid listen address '{}': {}", cli.listen, e)))?;

    Server::new(listen_addr).run().await
}
