//! Serve command implementation.

use anyhow::{Context, Result};
use std::net::{IpAddr, SocketAddr};
use tracing::info;
use twelvebar_mcp::ServerConfig;

use super::service_from_env;

/// Run the MCP server until Ctrl-C.
pub(crate) async fn serve(host: IpAddr, port: u16) -> Result<()> {
    let service = service_from_env()?;
    let config = ServerConfig::default().with_bind(SocketAddr::new(host, port));

    info!(version = env!("CARGO_PKG_VERSION"), "Starting twelvebar");

    twelvebar_mcp::serve(service, config)
        .await
        .context("Server failed")
}
