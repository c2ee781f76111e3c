//! HTTP server: SSE transport, message endpoint and liveness routes.

use axum::Router;
use axum::body::Bytes;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::sse::{Event, KeepAlive, Sse};
use axum::response::{IntoResponse, Json, Response};
use axum::routing::{get, post};
use chrono::{DateTime, Utc};
use futures::stream::{self, Stream, StreamExt};
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use thiserror::Error;
use tower_http::trace::TraceLayer;
use tracing::{debug, info, warn};
use twelvebar_service::OhlcService;
use uuid::Uuid;

use crate::handler::{McpHandler, SERVER_NAME};
use crate::protocol::{JsonRpcResponse, parse_message};
use crate::session::{SessionGuard, SessionRegistry};

/// Configuration for the HTTP server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to listen on.
    pub bind: SocketAddr,
    /// Path of the SSE stream.
    pub sse_path: String,
    /// Path clients POST messages to.
    pub messages_path: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([0, 0, 0, 0], 3000)),
            sse_path: "/sse".to_string(),
            messages_path: "/messages".to_string(),
        }
    }
}

impl ServerConfig {
    /// Sets the listen address.
    #[must_use]
    pub const fn with_bind(mut self, bind: SocketAddr) -> Self {
        self.bind = bind;
        self
    }
}

/// Errors that can stop the server.
#[derive(Error, Debug)]
pub enum ServerError {
    /// Binding or serving failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Body of the info route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceInfo {
    /// Always `"service up"`.
    pub status: String,
    /// Server name.
    pub name: String,
    /// Server version.
    pub version: String,
    /// Path of the SSE stream.
    pub sse_path: String,
    /// Process start time.
    pub started_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
struct AppState {
    handler: Arc<McpHandler>,
    sessions: SessionRegistry,
    config: Arc<ServerConfig>,
    started_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
struct SessionQuery {
    #[serde(default, alias = "sessionId")]
    session_id: Option<Uuid>,
}

/// Builds the router: SSE stream, message endpoint, `/health` and `/`.
///
/// The SSE stream also answers with a trailing slash, which is where some
/// connectors expect it.
pub fn router(service: OhlcService, config: ServerConfig) -> Router {
    let state = AppState {
        handler: Arc::new(McpHandler::new(service)),
        sessions: SessionRegistry::new(),
        config: Arc::new(config.clone()),
        started_at: Utc::now(),
    };

    let mut app = Router::new()
        .route("/", get(info_handler))
        .route("/health", get(health_handler))
        .route(&config.sse_path, get(sse_handler))
        .route(&config.messages_path, post(message_handler));

    if !config.sse_path.ends_with('/') {
        app = app.route(&format!("{}/", config.sse_path), get(sse_handler));
    }

    app.layer(TraceLayer::new_for_http()).with_state(state)
}

/// Runs the server until Ctrl-C.
///
/// # Errors
///
/// Returns an error if the address cannot be bound or serving fails.
pub async fn serve(service: OhlcService, config: ServerConfig) -> Result<(), ServerError> {
    let addr = config.bind;

    info!("Registering routes:");
    info!("  GET  /");
    info!("  GET  /health");
    info!("  GET  {} (MCP SSE stream)", config.sse_path);
    info!("  POST {}?session_id=<id>", config.messages_path);

    let app = router(service, config);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}

async fn health_handler() -> &'static str {
    "ok"
}

async fn info_handler(State(state): State<AppState>) -> Json<ServiceInfo> {
    Json(ServiceInfo {
        status: "service up".to_string(),
        name: SERVER_NAME.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        sse_path: state.config.sse_path.clone(),
        started_at: state.started_at,
    })
}

/// Opens a session and streams its responses.
///
/// The first event tells the client where to POST messages.
async fn sse_handler(
    State(state): State<AppState>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let (session_id, rx) = state.sessions.open().await;
    info!(%session_id, "SSE session opened");

    let endpoint = format!("{}?session_id={}", state.config.messages_path, session_id);
    let guard = SessionGuard::new(session_id, state.sessions.clone());

    let first = stream::once(async move {
        Ok::<_, Infallible>(Event::default().event("endpoint").data(endpoint))
    });
    let messages = rx.map(move |response| {
        let _session = &guard;
        Ok::<_, Infallible>(message_event(&response))
    });

    Sse::new(first.chain(messages)).keep_alive(KeepAlive::default())
}

fn message_event(response: &JsonRpcResponse) -> Event {
    match serde_json::to_string(response) {
        Ok(json) => Event::default().event("message").data(json),
        Err(e) => {
            warn!(error = %e, "failed to serialize response");
            Event::default().comment("serialization error")
        }
    }
}

/// Accepts one JSON-RPC message for a session.
///
/// Requests are handled on their own task so a slow upstream call does not
/// hold up other messages; the response is delivered on the event stream.
async fn message_handler(
    State(state): State<AppState>,
    Query(query): Query<SessionQuery>,
    body: Bytes,
) -> Response {
    let Some(session_id) = query.session_id else {
        return (StatusCode::BAD_REQUEST, "session_id is required").into_response();
    };
    let Some(sender) = state.sessions.sender(session_id).await else {
        return (StatusCode::NOT_FOUND, "Could not find session").into_response();
    };

    let request = match parse_message(&body) {
        Ok(Some(request)) => request,
        Ok(None) => return StatusCode::ACCEPTED.into_response(),
        Err(error) => {
            debug!(%session_id, code = error.code, "rejected message");
            let body = JsonRpcResponse::failure(serde_json::Value::Null, error);
            return (StatusCode::BAD_REQUEST, Json(body)).into_response();
        }
    };

    let handler = Arc::clone(&state.handler);
    tokio::spawn(async move {
        if let Some(response) = handler.handle(request).await {
            if sender.unbounded_send(response).is_err() {
                debug!(%session_id, "session closed before response was delivered");
            }
        }
    });

    (StatusCode::ACCEPTED, "Accepted").into_response()
}
