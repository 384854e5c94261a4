//! HTTP shell for VyomNetra.
//!
//! Two routes: `POST /api/space-chat` hands the message to the
//! [`Dispatcher`] and `GET /health` reports liveness. The chat route
//! answers 200 for every request, including malformed bodies.

use axum::extract::DefaultBodyLimit;
use axum::{
    Router,
    body::Bytes,
    extract::{State, rejection::BytesRejection},
    response::Json,
    routing::{get, post},
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use vyomnetra_config::AppConfig;
use vyomnetra_core::ChatExchange;
use vyomnetra_dispatch::{Dispatcher, degraded_response};

type SharedDispatcher = Arc<Dispatcher>;

/// Build the Axum router around a dispatcher.
///
/// Layers applied:
/// - CORS (permissive unless disabled in config)
/// - Request body size limit (64 KB); oversized chat bodies still get a 200 apology
/// - HTTP trace logging
pub fn build_router(dispatcher: SharedDispatcher, permissive_cors: bool) -> Router {
    let cors = if permissive_cors {
        CorsLayer::permissive()
    } else {
        CorsLayer::new()
    };

    Router::new()
        .route("/health", get(health_handler))
        .route("/api/space-chat", post(chat_handler))
        .with_state(dispatcher)
        .layer(DefaultBodyLimit::max(64 * 1024))
        .layer(cors)
        .layer(tower_http::trace::TraceLayer::new_for_http())
}

/// Start the gateway HTTP server.
pub async fn start(config: AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let addr = format!("{}:{}", config.gateway.host, config.gateway.port);

    let dispatcher = Arc::new(Dispatcher::from_config(&config)?);
    let ai_enabled = dispatcher.ai_enabled();
    if !ai_enabled {
        warn!("No model credential configured; general questions use static facts");
    }

    let app = build_router(dispatcher, config.gateway.permissive_cors);

    info!(addr = %addr, ai_enabled, "Gateway starting");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

// --- Handlers ---

#[derive(Debug, Default, Deserialize)]
struct ChatRequest {
    #[serde(default)]
    message: String,
}

#[derive(Debug, Serialize)]
struct ChatResponse {
    response: String,
    timestamp: String,
}

impl From<ChatExchange> for ChatResponse {
    fn from(exchange: ChatExchange) -> Self {
        Self {
            timestamp: exchange.timestamp_iso(),
            response: exchange.response,
        }
    }
}

async fn chat_handler(
    State(dispatcher): State<SharedDispatcher>,
    body: Result<Bytes, BytesRejection>,
) -> Json<ChatResponse> {
    let request = body
        .map_err(|e| e.body_text())
        .and_then(|bytes| {
            serde_json::from_slice::<ChatRequest>(&bytes).map_err(|e| e.to_string())
        });

    match request {
        Ok(request) => Json(dispatcher.respond(&request.message).await.into()),
        Err(e) => {
            warn!(error = %e, "Unreadable chat request");
            Json(ChatResponse {
                response: degraded_response(&format!("invalid request body: {e}")),
                timestamp: Utc::now().to_rfc3339(),
            })
        }
    }
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
    ai_enabled: bool,
}

async fn health_handler(State(dispatcher): State<SharedDispatcher>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        ai_enabled: dispatcher.ai_enabled(),
    })
}
