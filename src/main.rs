//! Dog image-search relay.
//!
//! # Architecture Overview
//!
//! ```text
//!                      ┌──────────────────────────────────────────┐
//!                      │                 RELAY                    │
//!   GET /api/dogs      │  ┌────────┐   ┌─────────┐   ┌─────────┐  │
//!   ───────────────────┼─▶│  http  │──▶│  dogs   │──▶│upstream │──┼──▶ image-search API
//!                      │  │ server │   │ handler │   │ client  │  │    (x-api-key)
//!   JSON / {"error"}   │  └────────┘   └─────────┘   └─────────┘  │
//!   ◀──────────────────┼──────────────── translate ◀─────────────┼───
//!                      │                                          │
//!                      │  config · observability · lifecycle      │
//!                      └──────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use dog_relay::config::loader;
use dog_relay::http::HttpServer;
use dog_relay::lifecycle::{signals, Shutdown};
use dog_relay::observability::{logging, metrics};

#[derive(Parser)]
#[command(name = "dog-relay")]
#[command(about = "Relays dog image searches to TheDogAPI", long_about = None)]
struct Args {
    /// Optional TOML configuration file.
    #[arg(short, long, env = "RELAY_CONFIG")]
    config: Option<PathBuf>,

    /// Override the listener bind address.
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config = loader::resolve(args.config.as_deref())?;
    if let Some(bind) = args.bind {
        config.listener.bind_address = bind;
    }

    logging::init_logging(&config.observability)?;

    tracing::debug!(
        bind_address = %config.listener.bind_address,
        upstream = %config.upstream.base_url,
        timeout_secs = config.upstream.timeout_secs,
        api_key_set = config.upstream.api_key.is_some(),
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(e) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                error = %e,
                "Failed to parse metrics address"
            ),
        }
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let server = HttpServer::new(config)?;

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        signals::wait_for_shutdown().await;
        shutdown.trigger();
    });

    server.run(listener, server_shutdown).await?;
    Ok(())
}
