use axum::{http, routing::get, Json, Router};
use database::Database;
use dotenv::dotenv;
use serde_json::json;
use std::net::SocketAddr;

mod handlers;
mod services;
mod state;

use axum::extract::State;
use handlers::ServiceError;
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load Config
    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let cors_origin =
        std::env::var("CORS_ORIGIN").unwrap_or_else(|_| "http://localhost:3001".to_string());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8000);

    // Connect to the fact store
    let db = Database::connect(&database_url).await?;
    db.migrate().await?;

    let app_state = AppState { db };

    // Setup CORS for the dashboard origin
    let cors = tower_http::cors::CorsLayer::new()
        .allow_origin(cors_origin.parse::<http::HeaderValue>()?)
        .allow_methods([http::Method::GET, http::Method::POST])
        .allow_headers([http::header::CONTENT_TYPE, http::header::ACCEPT]);

    // Setup Router using handlers
    let app = Router::new()
        .route("/health", get(health_check))
        .merge(handlers::router())
        .layer(tower_http::trace::TraceLayer::new_for_http())
        .layer(cors)
        .with_state(app_state);

    // Start Server
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Risk API listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn health_check(
    State(state): State<AppState>,
) -> Result<Json<serde_json::Value>, ServiceError> {
    state.db.health_check().await.map_err(|e| {
        tracing::error!("Health check failed: {e}");
        ServiceError::DataAccess("fact store unreachable".to_string())
    })?;

    Ok(Json(json!({ "status": "ok" })))
}
