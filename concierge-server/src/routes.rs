/// HTTP routes for the concierge API
/// Accepts chat messages from the frontend, runs one agent turn per request
/// and returns the aggregated places and reply text.

use axum::{
    extract::{Json, State},
    http::{HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use concierge_core::AggregationResult;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;
use tower_http::cors::{Any, CorsLayer};

use crate::adk_client::{AdkClient, AdkError};
use crate::config::{CorsPolicy, ServerConfig};
use crate::mock_places;

const SERVICE_NAME: &str = "travel_concierge_api";
const DEFAULT_REPLY: &str = "I'm processing your request. Please try again.";

/// Shared by every handler; built once at startup
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    pub adk: AdkClient,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Result<Self, AdkError> {
        let adk = AdkClient::new(&config)?;
        Ok(Self {
            config: Arc::new(config),
            adk,
        })
    }
}

/// Chat request from frontend
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

/// Single-string reply
#[derive(Debug, Serialize)]
struct TextReply {
    response: String,
    status: &'static str,
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    service: &'static str,
    version: &'static str,
    environment: String,
    timestamp: String,
}

#[derive(Debug, Serialize)]
struct ApiInfo {
    message: &'static str,
    version: &'static str,
    health: &'static str,
    chat: &'static str,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Failed to process message: {0}")]
    Upstream(#[from] AdkError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: self.to_string(),
        };
        (StatusCode::BAD_GATEWAY, Json(body)).into_response()
    }
}

async fn root() -> Json<ApiInfo> {
    Json(ApiInfo {
        message: "Travel Concierge API",
        version: env!("CARGO_PKG_VERSION"),
        health: "/health",
        chat: "/chat",
    })
}

async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: SERVICE_NAME,
        version: env!("CARGO_PKG_VERSION"),
        environment: state.config.environment.clone(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

async fn chat(
    State(state): State<AppState>,
    Json(payload): Json<ChatRequest>,
) -> Result<Json<AggregationResult>, ApiError> {
    let result = agent_turn(&state, &payload.message).await?;
    Ok(Json(result))
}

async fn chat_text(
    State(state): State<AppState>,
    Json(payload): Json<ChatRequest>,
) -> Result<Json<TextReply>, ApiError> {
    let result = agent_turn(&state, &payload.message).await?;

    let mut response = result.joined_text();
    if response.trim().is_empty() {
        response = DEFAULT_REPLY.to_string();
    }

    Ok(Json(TextReply {
        response,
        status: "success",
    }))
}

/// Live agent turn, or the mock reply when the runtime is unreachable
async fn agent_turn(state: &AppState, message: &str) -> Result<AggregationResult, ApiError> {
    tracing::info!("[CHAT] Incoming request - Message length: {}", message.len());

    match state.adk.run_turn(message).await {
        Ok(result) => Ok(result),
        Err(e) if e.is_unreachable() && state.config.mock_fallback_enabled => {
            tracing::warn!("⚠ {}, serving mock reply", e);
            Ok(mock_places::fallback_reply(message))
        }
        Err(e) => {
            tracing::error!("✗ Agent turn failed: {}", e);
            Err(ApiError::Upstream(e))
        }
    }
}

fn cors_layer(policy: &CorsPolicy) -> CorsLayer {
    match policy {
        CorsPolicy::Permissive => CorsLayer::permissive(),
        CorsPolicy::Origins(origins) => {
            let origins: Vec<HeaderValue> = origins
                .iter()
                .filter_map(|origin| match HeaderValue::from_str(origin) {
                    Ok(value) => Some(value),
                    Err(_) => {
                        tracing::warn!("⚠ Ignoring invalid CORS origin '{}'", origin);
                        None
                    }
                })
                .collect();
            CorsLayer::new()
                .allow_origin(origins)
                .allow_methods(Any)
                .allow_headers(Any)
        }
    }
}

pub fn router(state: AppState) -> Router {
    let cors = cors_layer(&state.config.cors);

    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/chat", post(chat))
        .route("/chat/text", post(chat_text))
        .layer(cors)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{closed_port_url, spawn, StubRuntime};
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn app_for(url: &str, mock_fallback_enabled: bool) -> Router {
        let config = ServerConfig {
            adk_base_url: url.to_string(),
            mock_fallback_enabled,
            ..ServerConfig::default()
        };
        router(AppState::new(config).unwrap())
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn call(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_health_and_root() {
        let app = app_for("http://127.0.0.1:9", true);

        let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
        let (status, body) = call(app.clone(), request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["service"], SERVICE_NAME);
        assert_eq!(body["environment"], "production");

        let request = Request::builder().uri("/").body(Body::empty()).unwrap();
        let (status, body) = call(app, request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["chat"], "/chat");
    }

    #[tokio::test]
    async fn test_chat_aggregates_live_events() {
        let stub = StubRuntime::new(json!([
            {"actions": {"stateDelta": {"poi": {"places": [{"place_name": "Taj Mahal", "lat": "27.1751"}]}}}},
            {"content": {"parts": [{"text": "India offers..."}], "role": "model"}}
        ]));
        let url = spawn(stub.router()).await;

        let (status, body) = call(
            app_for(&url, true),
            post_json("/chat", json!({"message": "I want to visit India"})),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({"reply": [{"place_name": "Taj Mahal", "lat": "27.1751"}], "text": ["India offers..."]})
        );
        assert_eq!(stub.runs()[0]["newMessage"]["parts"][0]["text"], "I want to visit India");
    }

    #[tokio::test]
    async fn test_chat_with_empty_run_returns_empty_lists() {
        let url = spawn(StubRuntime::new(json!([])).router()).await;

        let (status, body) = call(app_for(&url, true), post_json("/chat", json!({"message": "hi"}))).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"reply": [], "text": []}));
    }

    #[tokio::test]
    async fn test_chat_falls_back_to_mock_when_unreachable() {
        let url = closed_port_url().await;

        let (status, body) = call(
            app_for(&url, true),
            post_json("/chat", json!({"message": "What's in Paris?"})),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["reply"][0]["place_name"], "Eiffel Tower");
        assert_eq!(body["text"].as_array().map(Vec::len), Some(1));
    }

    #[tokio::test]
    async fn test_chat_reports_bad_gateway_without_fallback() {
        let url = closed_port_url().await;

        let (status, body) = call(
            app_for(&url, false),
            post_json("/chat", json!({"message": "What's in Paris?"})),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_GATEWAY);
        let error = body["error"].as_str().unwrap();
        assert!(error.starts_with("Failed to process message"), "{}", error);
    }

    #[tokio::test]
    async fn test_upstream_status_error_is_not_masked_by_mock() {
        let stub = StubRuntime::new(json!([])).with_session_status(StatusCode::SERVICE_UNAVAILABLE);
        let url = spawn(stub.router()).await;

        let (status, _) = call(app_for(&url, true), post_json("/chat", json!({"message": "India"}))).await;

        assert_eq!(status, StatusCode::BAD_GATEWAY);
    }

    #[tokio::test]
    async fn test_chat_text_joins_fragments_or_uses_default() {
        let stub = StubRuntime::new(json!([
            {"content": {"parts": [{"text": "Hello, "}, {"text": "traveller."}]}}
        ]));
        let url = spawn(stub.router()).await;
        let (status, body) = call(app_for(&url, true), post_json("/chat/text", json!({"message": "hi"}))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"response": "Hello, traveller.", "status": "success"}));

        let url = spawn(StubRuntime::new(json!([{"content": {"parts": [{"functionCall": {"name": "poi_agent"}}]}}])).router()).await;
        let (_, body) = call(app_for(&url, true), post_json("/chat/text", json!({"message": "hi"}))).await;
        assert_eq!(body["response"], DEFAULT_REPLY);
    }

    #[tokio::test]
    async fn test_cors_allows_configured_origin() {
        let config = ServerConfig {
            cors: CorsPolicy::Origins(vec!["http://localhost:8080".to_string()]),
            ..ServerConfig::default()
        };
        let app = router(AppState::new(config).unwrap());

        let request = Request::builder()
            .uri("/health")
            .header("origin", "http://localhost:8080")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(
            response.headers().get("access-control-allow-origin").unwrap(),
            "http://localhost:8080"
        );
    }
}
