/// Server configuration loaded from the environment (after `.env`)

use anyhow::{anyhow, Result};
use std::time::Duration;

/// Which origins may call the API from a browser
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsPolicy {
    Permissive,
    Origins(Vec<String>),
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub adk_base_url: String,
    pub app_name: String,
    pub user_id: String,
    pub request_timeout: Duration,
    pub mock_fallback_enabled: bool,
    pub cors: CorsPolicy,
    pub environment: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8001,
            adk_base_url: "http://localhost:8000".to_string(),
            app_name: "travel_concierge".to_string(),
            user_id: "demo_user".to_string(),
            request_timeout: Duration::from_secs(30),
            mock_fallback_enabled: true,
            cors: CorsPolicy::Permissive,
            environment: "production".to_string(),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unset keys fall back to defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let port = match lookup("CONCIERGE_PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|e| anyhow!("CONCIERGE_PORT must be a port number, got '{}': {}", raw, e))?,
            None => defaults.port,
        };

        let request_timeout = match lookup("ADK_TIMEOUT_SECS") {
            Some(raw) => {
                let secs = raw
                    .trim()
                    .parse::<u64>()
                    .map_err(|e| anyhow!("ADK_TIMEOUT_SECS must be a number of seconds, got '{}': {}", raw, e))?;
                if secs == 0 {
                    return Err(anyhow!("ADK_TIMEOUT_SECS must be greater than zero"));
                }
                Duration::from_secs(secs)
            }
            None => defaults.request_timeout,
        };

        let adk_base_url = lookup("ADK_BASE_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or(defaults.adk_base_url);

        let mock_fallback_enabled = lookup("MOCK_FALLBACK_ENABLED")
            .map(|v| v.trim().to_lowercase() == "true")
            .unwrap_or(defaults.mock_fallback_enabled);

        let cors = lookup("CORS_ALLOW_ORIGINS")
            .map(|raw| parse_cors(&raw))
            .unwrap_or(defaults.cors);

        Ok(Self {
            port,
            adk_base_url,
            app_name: lookup("ADK_APP_NAME").unwrap_or(defaults.app_name),
            user_id: lookup("ADK_USER_ID").unwrap_or(defaults.user_id),
            request_timeout,
            mock_fallback_enabled,
            cors,
            environment: lookup("ENVIRONMENT").unwrap_or(defaults.environment),
        })
    }
}

fn parse_cors(raw: &str) -> CorsPolicy {
    let origins: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect();

    if origins.is_empty() || origins.iter().any(|origin| origin == "*") {
        CorsPolicy::Permissive
    } else {
        CorsPolicy::Origins(origins)
    }
}
