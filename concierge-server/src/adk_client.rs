/// Client for the external agent runtime (ADK)
///
/// One agent turn is two calls: create a fresh session, then post the user
/// message to `/run` and read back the full event list.

use concierge_core::{aggregate, AgentEvent, AggregateError, AggregationResult};
use reqwest::StatusCode;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use thiserror::Error;
use uuid::Uuid;

use crate::config::ServerConfig;

#[derive(Debug, Error)]
pub enum AdkError {
    /// Connection refused, DNS failure or timeout
    #[error("agent runtime unreachable at {url}: {source}")]
    Unreachable {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("agent runtime returned {status} while {stage}")]
    Status {
        stage: &'static str,
        status: StatusCode,
    },

    #[error("agent runtime request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("agent runtime returned an unusable event list: {0}")]
    InvalidEvents(#[from] AggregateError),
}

impl AdkError {
    /// Whether the runtime could not be reached at all (mock fallback applies)
    pub fn is_unreachable(&self) -> bool {
        matches!(self, AdkError::Unreachable { .. })
    }

    fn from_reqwest(error: reqwest::Error, url: &str) -> Self {
        if error.is_connect() || error.is_timeout() {
            AdkError::Unreachable {
                url: url.to_string(),
                source: error,
            }
        } else {
            AdkError::Transport(error)
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RunRequest<'a> {
    app_name: &'a str,
    user_id: &'a str,
    session_id: &'a str,
    new_message: NewMessage<'a>,
    streaming: bool,
}

#[derive(Debug, Serialize)]
struct NewMessage<'a> {
    parts: Vec<TextPart<'a>>,
    role: &'static str,
}

#[derive(Debug, Serialize)]
struct TextPart<'a> {
    text: &'a str,
}

/// Application-scoped handle; clones share the connection pool
#[derive(Clone)]
pub struct AdkClient {
    http: reqwest::Client,
    base_url: Arc<String>,
    app_name: Arc<String>,
    user_id: Arc<String>,
}

impl AdkClient {
    pub fn new(config: &ServerConfig) -> Result<Self, AdkError> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(AdkError::Transport)?;

        Ok(Self {
            http,
            base_url: Arc::new(config.adk_base_url.clone()),
            app_name: Arc::new(config.app_name.clone()),
            user_id: Arc::new(config.user_id.clone()),
        })
    }

    /// Run one agent turn and return the raw event list
    pub async fn run(&self, message: &str) -> Result<Value, AdkError> {
        let session_id = new_session_id();
        let session_url = self.session_url(&session_id);

        tracing::info!("→ Creating ADK session {}", session_id);
        let response = self
            .http
            .post(&session_url)
            .send()
            .await
            .map_err(|e| AdkError::from_reqwest(e, &session_url))?;

        if !response.status().is_success() {
            return Err(AdkError::Status {
                stage: "creating session",
                status: response.status(),
            });
        }

        let run_url = format!("{}/run", self.base_url);
        let payload = RunRequest {
            app_name: &self.app_name,
            user_id: &self.user_id,
            session_id: &session_id,
            new_message: NewMessage {
                parts: vec![TextPart { text: message }],
                role: "USER",
            },
            streaming: false,
        };

        tracing::info!(
            "→ Running agent turn - SessionID: {}, Message length: {}",
            session_id,
            message.len()
        );
        let response = self
            .http
            .post(&run_url)
            .json(&payload)
            .send()
            .await
            .map_err(|e| AdkError::from_reqwest(e, &run_url))?;

        if !response.status().is_success() {
            return Err(AdkError::Status {
                stage: "running agent",
                status: response.status(),
            });
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| AdkError::from_reqwest(e, &run_url))
    }

    /// Run one agent turn and aggregate its events
    pub async fn run_turn(&self, message: &str) -> Result<AggregationResult, AdkError> {
        let events = self.run(message).await?;

        if let Some(list) = events.as_array() {
            for raw in list {
                let event = AgentEvent::new(raw);
                for tool in event.function_call_names() {
                    tracing::debug!("  {} called {}", event.author().unwrap_or("agent"), tool);
                }
            }
        }

        let result = aggregate(&events)?;

        tracing::info!(
            "✓ Agent turn complete: {} places, {} text replies",
            result.places.len(),
            result.texts.len()
        );
        for place in &result.places {
            tracing::debug!("  place: {}", place.place_name().unwrap_or("N/A"));
        }

        Ok(result)
    }

    fn session_url(&self, session_id: &str) -> String {
        format!(
            "{}/apps/{}/users/{}/sessions/{}",
            self.base_url, self.app_name, self.user_id, session_id
        )
    }
}

/// Short session id: first eight characters of a v4 UUID
fn new_session_id() -> String {
    let mut id = Uuid::new_v4().to_string();
    id.truncate(8);
    id
}
