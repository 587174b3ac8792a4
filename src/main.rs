//! Employee Gateway
//!
//! A thin HTTP façade over a single upstream employee REST API, built
//! with Tokio and Axum.
//!
//! # Architecture Overview
//!
//! ```text
//!                     ┌──────────────────────────────────────────┐
//!                     │             EMPLOYEE GATEWAY             │
//!                     │                                          │
//!  Client Request     │  ┌────────┐   ┌───────────┐   ┌───────┐  │
//!  ───────────────────┼─▶│  http  │──▶│ directory │──▶│upstream│─┼──▶ Upstream
//!                     │  │ server │   │  service  │   │ client │ │     REST API
//!  Client Response    │  └────────┘   └───────────┘   └───────┘  │
//!  ◀──────────────────┼── error mapping (one IntoResponse seam)  │
//!                     │                                          │
//!                     │  cross-cutting: config, tracing, timeouts│
//!                     └──────────────────────────────────────────┘
//! ```

use std::sync::Arc;

use clap::Parser;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use employee_gateway::config::{load_config, GatewayConfig};
use employee_gateway::http::HttpServer;
use employee_gateway::upstream::UpstreamClient;

#[derive(Parser)]
#[command(name = "employee-gateway")]
#[command(about = "HTTP façade for the upstream employee REST API", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file. Defaults apply when omitted.
    #[arg(short, long)]
    config: Option<std::path::PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "employee_gateway=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("employee-gateway v{} starting", env!("CARGO_PKG_VERSION"));

    let cli = Cli::parse();
    let config = match cli.config {
        Some(path) => load_config(&path)?,
        None => GatewayConfig::default(),
    };

    tracing::info!(
        bind_address = %config.listener.bind_address,
        upstream_base_url = %config.upstream.base_url,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    let client = UpstreamClient::new(&config.upstream)?;

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        address = %local_addr,
        "Listening for connections"
    );

    let server = HttpServer::new(config, Arc::new(client));
    server.run(listener).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
