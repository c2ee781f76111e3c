//! MCP server over HTTP+SSE exposing the twelvebar `get_ohlc` tool.
//!
//! This crate is the adapter between the Model Context Protocol transport
//! and the request pipeline:
//!
//! - [`protocol`] - JSON-RPC 2.0 message types
//! - [`tool`] - The `get_ohlc` tool definition and argument decoding
//! - [`McpHandler`] - Method dispatch
//! - [`SessionRegistry`] - Open SSE sessions
//! - [`serve`] / [`router`] - The axum HTTP server, with liveness routes

#![doc(issue_tracker_base_url = "https://github.com/factordynamics/twelvebar/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod handler;
pub mod protocol;
mod server;
mod session;
pub mod tool;

#[cfg(test)]
mod test_support;

pub use handler::{McpHandler, PROTOCOL_VERSIONS, SERVER_NAME};
pub use server::{ServerConfig, ServerError, ServiceInfo, router, serve};
pub use session::SessionRegistry;
