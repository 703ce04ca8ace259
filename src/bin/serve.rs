//! Serve the projection form over HTTP
//!
//! Configuration comes from flags or the HOST, PORT and DEBUG environment
//! variables. RUST_LOG overrides the log level chosen by DEBUG.

use anyhow::Context;
use clap::Parser;
use portfolio_projection::config::ServerConfig;
use portfolio_projection::web::run_server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::parse();

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.default_log_filter()),
    )
    .init();

    log::info!("Starting projection server on http://{}", config.address());
    log::info!("Debug mode: {}", config.debug);

    run_server(&config)
        .await
        .with_context(|| format!("server on {} stopped", config.address()))
}
