use axum::{Extension, Json, extract::Query, http::StatusCode, response::IntoResponse};
use serde::{Deserialize, Serialize};

use crate::auth::claims::AuthUser;
use crate::response::ApiResponse;
use db::models::user::Role;

#[derive(Debug, Serialize, Default)]
pub struct MeResponse {
    pub id: i64,
    pub role: String,
    pub team_id: Option<i64>,
}

/// GET /api/auth/me
///
/// Returns the claims of the presented token.
pub async fn me(Extension(user): Extension<AuthUser>) -> impl IntoResponse {
    let response = MeResponse {
        id: user.0.sub,
        role: user.0.role.to_string(),
        team_id: user.0.team_id,
    };

    (
        StatusCode::OK,
        Json(ApiResponse::success(response, "Authenticated")),
    )
}

#[derive(Debug, Deserialize)]
pub struct RedirectQuery {
    /// The path the client currently sits on.
    pub from: Option<String>,
}

#[derive(Debug, Serialize, Default)]
pub struct RedirectResponse {
    /// Portal path to navigate to, or `null` when the caller is already in
    /// the right place.
    pub redirect: Option<String>,
}

/// Path prefix of the portal matching a role.
fn portal_prefix(role: Role) -> &'static str {
    match role {
        Role::Admin => "/admin",
        Role::Judge => "/judge",
        Role::Team => "/team",
    }
}

/// GET /api/auth/redirect?from=/team/dashboard
///
/// Role redirect: maps the caller's role to its portal prefix. No redirect
/// is issued when `from` already lies within that prefix, or when the caller
/// sits on a login page carrying an error (so the error stays visible).
/// Stateless; re-evaluated on every call.
pub async fn redirect(
    Extension(user): Extension<AuthUser>,
    Query(query): Query<RedirectQuery>,
) -> impl IntoResponse {
    let prefix = portal_prefix(user.0.role);
    let from = query.from.unwrap_or_default();

    let stay = from.starts_with(prefix) || (from.starts_with("/login") && from.contains("error"));

    let response = RedirectResponse {
        redirect: (!stay).then(|| prefix.to_string()),
    };

    let message = if stay {
        "Already in the right portal"
    } else {
        "Redirect to role portal"
    };

    (StatusCode::OK, Json(ApiResponse::success(response, message)))
}
