/// Travel concierge HTTP gateway
/// Forwards chat messages to the agent runtime and returns aggregated
/// places and reply text, with a mock fallback when the runtime is down.

pub mod adk_client;
pub mod config;
pub mod mock_places;
pub mod routes;

#[cfg(test)]
pub(crate) mod test_support;

pub use adk_client::{AdkClient, AdkError};
pub use config::{CorsPolicy, ServerConfig};
pub use routes::{router, AppState, ChatRequest};
