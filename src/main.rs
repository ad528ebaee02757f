use axum::http::{HeaderValue, Method};
use std::net::SocketAddr;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use canva_automation_server::{open_store, router, AppState, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "canva_automation_server=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting HLS Canva Automation Server...");

    // Load configuration
    let config = Config::from_env().map_err(|e| anyhow::anyhow!(e))?;

    tracing::info!(
        "Environment: {}, Server: {}",
        config.environment,
        config.server_address()
    );

    if !config.canva_configured() {
        tracing::warn!(
            "CANVA_CLIENT_ID / CANVA_CLIENT_SECRET not set, design pulls use placeholders"
        );
    }

    // Open collection files
    let store = open_store(&config.data_dir)?;

    let cors = CorsLayer::new()
        .allow_origin(allowed_origins(&config.allowed_origins))
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any);

    let log_requests = config.log_requests;
    let addr: SocketAddr = config.server_address().parse()?;

    let state = AppState::new(store, config);

    // Build router
    let mut app = router(state).layer(cors);
    if log_requests {
        app = app.layer(TraceLayer::new_for_http());
    }

    tracing::info!("Server listening on {}", addr);
    tracing::info!("Dashboard API: http://{}/api/dashboard", addr);
    tracing::info!("Designs API: http://{}/api/designs", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");

    Ok(())
}

/// Any origin when none are configured, otherwise the parseable configured ones
fn allowed_origins(origins: &[String]) -> AllowOrigin {
    if origins.is_empty() {
        return AllowOrigin::any();
    }

    let parsed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    AllowOrigin::list(parsed)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
