//! Binary entrypoint for the benchmark server.
//!
//! Reads configuration from environment variables:
//! - `WORKBENCH_PORT`: server listen port (default: "6004")
//! - `RUST_LOG`: log filter (default: "workbench_server=info,tower_http=info")

use tracing_subscriber::EnvFilter;

use workbench_server::config::ServerConfig;
use workbench_server::router::build_router;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("workbench_server=info,tower_http=info")),
        )
        .init();

    let config = ServerConfig::from_env()?;
    let app = build_router();

    let addr = config.bind_addr();
    tracing::info!(%addr, service = workbench_core::SERVICE_NAME, "workbench server starting");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
