pub mod cafe;
pub mod models;

// Re-exports
pub use models::*;

use axum::{extract::State, routing::get, Json, Router};
use tower_http::trace::TraceLayer;

pub async fn health_handler(State(state): State<AppState>) -> impl axum::response::IntoResponse {
    Json(models::HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        total_cities: state.catalog.city_count(),
        total_cafes: state.catalog.cafe_count(),
    })
}

/// Full application router with state and request tracing applied
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .merge(cafe::routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
