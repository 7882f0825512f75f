use api::routes::routes;
use axum::{Router, body::Body, http::Request, response::Response};
use common::state::AppState;
use std::convert::Infallible;
use tower::ServiceExt;
use tower::util::BoxCloneService;

/// Builds the full application router over a fresh in-memory database with
/// all migrations applied.
pub async fn make_test_app() -> (BoxCloneService<Request<Body>, Response, Infallible>, AppState) {
    let db = db::test_utils::setup_test_db().await;
    let app_state = AppState::new(db);

    let router: Router = Router::new().nest("/api", routes(app_state.clone()));

    (router.boxed_clone(), app_state)
}
