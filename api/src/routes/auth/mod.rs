//! Authentication routes: login, current claims, and the role redirect.

use crate::auth::guards::allow_authenticated;
use axum::{
    Router,
    middleware::from_fn,
    routing::{get, post},
};
use common::state::AppState;
use get::{me, redirect};
use post::login;

pub mod get;
pub mod post;

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/login", post(login))
        .route("/me", get(me).route_layer(from_fn(allow_authenticated)))
        .route(
            "/redirect",
            get(redirect).route_layer(from_fn(allow_authenticated)),
        )
}
