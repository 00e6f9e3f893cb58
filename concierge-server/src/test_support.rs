/// In-process stand-in for the agent runtime used by the server tests

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::post,
    Json, Router,
};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};

#[derive(Default)]
struct Recorded {
    sessions: Vec<(String, String, String)>,
    runs: Vec<Value>,
}

#[derive(Clone)]
pub struct StubRuntime {
    events: Arc<Value>,
    session_status: StatusCode,
    recorded: Arc<Mutex<Recorded>>,
}

impl StubRuntime {
    /// Stub whose `/run` answers with `events`
    pub fn new(events: Value) -> Self {
        Self {
            events: Arc::new(events),
            session_status: StatusCode::OK,
            recorded: Arc::new(Mutex::new(Recorded::default())),
        }
    }

    pub fn with_session_status(mut self, status: StatusCode) -> Self {
        self.session_status = status;
        self
    }

    pub fn router(&self) -> Router {
        Router::new()
            .route(
                "/apps/:app/users/:user/sessions/:session",
                post(create_session),
            )
            .route("/run", post(run))
            .with_state(self.clone())
    }

    pub fn sessions(&self) -> Vec<(String, String, String)> {
        self.recorded.lock().unwrap().sessions.clone()
    }

    pub fn runs(&self) -> Vec<Value> {
        self.recorded.lock().unwrap().runs.clone()
    }
}

async fn create_session(
    State(stub): State<StubRuntime>,
    Path((app, user, session)): Path<(String, String, String)>,
) -> (StatusCode, Json<Value>) {
    stub.recorded
        .lock()
        .unwrap()
        .sessions
        .push((app.clone(), user.clone(), session.clone()));
    (
        stub.session_status,
        Json(json!({"id": session, "appName": app, "userId": user, "state": {}, "events": []})),
    )
}

async fn run(State(stub): State<StubRuntime>, Json(body): Json<Value>) -> Json<Value> {
    stub.recorded.lock().unwrap().runs.push(body);
    Json(stub.events.as_ref().clone())
}

/// Serve `router` on an ephemeral local port and return its base URL
pub async fn spawn(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

/// Base URL of a local port with nothing listening on it
pub async fn closed_port_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}
