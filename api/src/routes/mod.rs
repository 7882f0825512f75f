//! HTTP route entry point for `/api/...`.
//!
//! Routes are organized by portal, each protected by the matching role
//! guard:
//! - `/health` → liveness check (public)
//! - `/auth` → login, current claims, role redirect
//! - `/admin` → event administration (admin role)
//! - `/judge` → scoring endpoints (judge role)
//! - `/team` → participation endpoints (team role with team linkage)

use crate::auth::guards::{allow_admin, allow_judge, allow_team};
use crate::routes::{
    admin::admin_routes, auth::auth_routes, health::health_routes, judge::judge_routes,
    team::team_routes,
};
use ::common::state::AppState;
use axum::{Router, middleware::from_fn};

pub mod admin;
pub mod auth;
pub mod common;
pub mod health;
pub mod judge;
pub mod team;

/// Builds the complete application router for all HTTP endpoints.
///
/// The guard layers run before any handler in their group, so an
/// unauthenticated or wrong-role request never reaches a handler body.
pub fn routes(app_state: AppState) -> Router {
    Router::new()
        .nest("/health", health_routes())
        .nest("/auth", auth_routes())
        .nest("/admin", admin_routes().route_layer(from_fn(allow_admin)))
        .nest("/judge", judge_routes().route_layer(from_fn(allow_judge)))
        .nest("/team", team_routes().route_layer(from_fn(allow_team)))
        .with_state(app_state)
}
