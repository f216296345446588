//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors, but application-level
//! errors should use `kernel::error::AppError`.

use api::config::ApiConfig;
use axum::{
    Json, Router,
    http::{Method, header},
    routing::get,
};
use seminar::{HttpSeminarRepository, seminar_router};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=info,seminar=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ApiConfig::from_env()?;

    tracing::info!(
        api_base_url = %config.seminar.api_base_url,
        public_detail_url = %config.seminar.public_detail_url,
        timeout_secs = config.seminar.http.timeout.map(|t| t.as_secs()),
        "Seminar service configured"
    );

    // One pooled client for the whole process
    let seminar_repo = HttpSeminarRepository::from_config(&config.seminar)?;

    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(config.frontend_origins)
        .allow_methods(AllowMethods::list([Method::GET, Method::OPTIONS]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
        ]))
        .allow_credentials(true);

    // Build router
    let app = Router::new()
        .route("/api/health", get(health))
        .nest("/api/seminars", seminar_router(seminar_repo, config.seminar))
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Start server
    let addr = config.bind_addr;
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    Ok(())
}

/// GET /api/health
async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}
