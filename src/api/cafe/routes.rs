use crate::api::cafe::handlers::cafe_handler;
use crate::api::models::AppState;
use axum::{routing::get, Router};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/cafe", get(cafe_handler))
}
