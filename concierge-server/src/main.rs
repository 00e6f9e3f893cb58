/// Travel concierge HTTP server
/// Exposes the agent runtime to the web frontend as a small REST API

use anyhow::Result;
use concierge_server::{router, AppState, CorsPolicy, ServerConfig};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    let _ = dotenv::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    println!("\n╔════════════════════════════════════════════════════════════╗");
    println!("║        Travel Concierge - HTTP API Gateway                 ║");
    println!("║     Forwards chat turns to the ADK agent runtime           ║");
    println!("╚════════════════════════════════════════════════════════════╝\n");

    let config = ServerConfig::from_env()?;

    println!("[INIT] Server configuration:");
    println!("  Port: {}", config.port);
    println!("  ADK runtime: {}", config.adk_base_url);
    println!("  App / user: {} / {}", config.app_name, config.user_id);
    println!("  Timeout: {}s", config.request_timeout.as_secs());
    println!(
        "  Mock fallback: {}",
        if config.mock_fallback_enabled { "enabled" } else { "disabled" }
    );
    match &config.cors {
        CorsPolicy::Permissive => println!("  CORS: any origin"),
        CorsPolicy::Origins(origins) => println!("  CORS: {}", origins.join(", ")),
    }

    let port = config.port;
    let state = AppState::new(config)?;
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;

    println!("[STARTUP] ✓ Concierge server running on http://0.0.0.0:{}", port);
    println!("  POST /chat        — Places and reply fragments for a message");
    println!("  POST /chat/text   — Single-string reply for a message");
    println!("  GET  /health      — Check server health\n");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Shutdown signal received"),
        Err(e) => {
            tracing::error!("Failed to listen for shutdown signal: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
