//! HTTP Endpoints
//!
//! REST API for chat sessions.

use std::time::Duration;

use axum::{
    extract::{Json, Path, Query, State},
    http::{HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use construction_assistant_agent::ChatSession;
use construction_assistant_core::Message;
use construction_assistant_text_processing::{FormattedMessage, MessageFormatter};

use crate::metrics::{metrics_handler, record_reply, record_session_created, record_submission};
use crate::state::AppState;
use crate::ServerError;

/// Create the application router
pub fn create_router(state: AppState) -> Router {
    let config = state.config.read();
    let cors_layer = build_cors_layer(&config.server.cors_origins, config.server.cors_enabled);
    let timeout = Duration::from_secs(config.server.timeout_seconds);
    drop(config);

    Router::new()
        .route("/api/sessions", post(create_session).get(list_sessions))
        .route("/api/sessions/:id", get(get_session).delete(delete_session))
        .route("/api/sessions/:id/messages", post(post_message))
        .route("/health", get(health_check))
        .route("/metrics", get(metrics_handler))
        .route("/admin/reload-config", post(reload_config))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(timeout))
        .layer(cors_layer)
        .with_state(state)
}

/// Build CORS layer from configured origins
///
/// - Disabled: permissive layer (development only)
/// - No valid origins: localhost:3000
fn build_cors_layer(origins: &[String], enabled: bool) -> CorsLayer {
    if !enabled {
        tracing::warn!("CORS is disabled - allowing all origins (NOT FOR PRODUCTION)");
        return CorsLayer::permissive();
    }

    let mut parsed_origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| {
            origin.parse::<HeaderValue>().ok().or_else(|| {
                tracing::warn!("Invalid CORS origin: {}", origin);
                None
            })
        })
        .collect();

    if parsed_origins.is_empty() {
        tracing::info!("No valid CORS origins configured, defaulting to localhost:3000");
        parsed_origins.push(HeaderValue::from_static("http://localhost:3000"));
    }

    tracing::info!("CORS configured with {} origins", parsed_origins.len());
    CorsLayer::new()
        .allow_origin(parsed_origins)
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers(Any)
}

/// Transcript message with display segments
#[derive(Debug, Serialize)]
struct MessageView {
    #[serde(flatten)]
    message: Message,
    formatted: FormattedMessage,
}

impl MessageView {
    fn new(message: Message, formatter: &MessageFormatter) -> Self {
        let formatted = formatter.format(&message.content);
        Self { message, formatted }
    }
}

fn transcript_view(session: &ChatSession, formatter: &MessageFormatter) -> Vec<MessageView> {
    session
        .transcript()
        .into_iter()
        .map(|m| MessageView::new(m, formatter))
        .collect()
}

fn find_session(state: &AppState, id: &str) -> Result<ChatSession, ServerError> {
    state
        .sessions
        .get(id)
        .ok_or_else(|| ServerError::SessionNotFound(id.to_string()))
}

/// Create a session seeded with the welcome message
async fn create_session(State(state): State<AppState>) -> Result<impl IntoResponse, ServerError> {
    let session = state
        .sessions
        .create(state.analyzer.clone(), state.session_config())?;
    record_session_created();

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({
            "session_id": session.id(),
            "messages": transcript_view(&session, &state.formatter),
        })),
    ))
}

async fn list_sessions(State(state): State<AppState>) -> Json<serde_json::Value> {
    let sessions = state.sessions.list();
    Json(serde_json::json!({
        "sessions": sessions,
        "count": sessions.len(),
    }))
}

async fn get_session(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, ServerError> {
    let session = find_session(&state, &id)?;

    Ok(Json(serde_json::json!({
        "session_id": session.id(),
        "state": session.state(),
        "created_at": session.created_at(),
        "messages": transcript_view(&session, &state.formatter),
    })))
}

async fn delete_session(State(state): State<AppState>, Path(id): Path<String>) -> StatusCode {
    if state.sessions.remove(&id) {
        StatusCode::NO_CONTENT
    } else {
        StatusCode::NOT_FOUND
    }
}

#[derive(Debug, Deserialize)]
struct SubmitRequest {
    message: String,
}

#[derive(Debug, Default, Deserialize)]
struct SubmitParams {
    /// Block until the assistant reply is appended
    #[serde(default)]
    wait: bool,
}

/// Submit a visitor message
///
/// Returns 202 with the user message right away, or 200 with the reply when
/// `?wait=true`.
async fn post_message(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<SubmitParams>,
    Json(request): Json<SubmitRequest>,
) -> Result<Response, ServerError> {
    let session = find_session(&state, &id)?;
    let pending = session.submit(&request.message)?;
    record_submission();

    let user_message = MessageView::new(pending.user_message().clone(), &state.formatter);

    if !params.wait {
        tokio::spawn(async move {
            if let Some(reply) = pending.wait().await {
                record_reply(reply.rule);
            }
        });
        let body = serde_json::json!({
            "user_message": user_message,
            "state": session.state(),
        });
        return Ok((StatusCode::ACCEPTED, Json(body)).into_response());
    }

    let reply = pending
        .wait()
        .await
        .ok_or_else(|| ServerError::Internal("Reply was cancelled".to_string()))?;
    record_reply(reply.rule);

    let body = serde_json::json!({
        "user_message": user_message,
        "reply": MessageView::new(reply.message, &state.formatter),
        "rule": reply.rule,
    });
    Ok((StatusCode::OK, Json(body)).into_response())
}

async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<serde_json::Value>) {
    let kb = state.analyzer.knowledge_base();

    (
        StatusCode::OK,
        Json(serde_json::json!({
            "status": "healthy",
            "version": env!("CARGO_PKG_VERSION"),
            "checks": {
                "sessions": { "status": "ok", "count": state.sessions.count() },
                "knowledge_base": {
                    "status": "ok",
                    "packages": kb.packages.len(),
                    "configurations": kb.configurations.len(),
                    "plots": kb.plots.len(),
                },
            }
        })),
    )
}

/// Reload settings from disk
///
/// Session settings apply to sessions created afterwards.
async fn reload_config(State(state): State<AppState>) -> Result<impl IntoResponse, ServerError> {
    state.reload_config()?;
    Ok(Json(serde_json::json!({
        "status": "success",
        "message": "Configuration reloaded successfully"
    })))
}
