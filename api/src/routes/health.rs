use crate::response::ApiResponse;
use axum::{Json, Router, http::StatusCode, response::IntoResponse, routing::get};
use common::state::AppState;

pub fn health_routes() -> Router<AppState> {
    Router::new().route("/", get(health))
}

/// GET /api/health
async fn health() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(ApiResponse::success((), "API is healthy")),
    )
}
