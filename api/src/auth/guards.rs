//! Role-based access guards.
//!
//! Each guard wraps a route group via `axum::middleware::from_fn`, resolves
//! the caller's token, checks role membership, and either forwards the
//! request unchanged (with `AuthUser` inserted into the extensions) or
//! rejects it: 401 when unauthenticated, 403 when the role is outside the
//! permitted set.

use crate::auth::claims::AuthUser;
use crate::response::ApiResponse;
use axum::{
    Json,
    body::Body,
    extract::FromRequestParts,
    http::{Request, StatusCode},
    middleware::Next,
    response::Response,
};
use db::models::user::Role;

#[derive(serde::Serialize, Default)]
pub struct Empty;

/// Helper to extract, validate user from request extensions and insert them back into the request
async fn extract_and_insert_authuser(
    req: Request<Body>,
) -> Result<(Request<Body>, AuthUser), (StatusCode, Json<ApiResponse<Empty>>)> {
    let (mut parts, body) = req.into_parts();
    let user = AuthUser::from_request_parts(&mut parts, &())
        .await
        .map_err(|_| {
            (
                StatusCode::UNAUTHORIZED,
                Json(ApiResponse::error("Authentication required")),
            )
        })?;

    let mut req = Request::from_parts(parts, body);
    req.extensions_mut().insert(user.clone());
    Ok((req, user))
}

/// Base role-based access guard that the per-portal guards build upon.
///
/// An empty permitted set denies everything (fail-safe).
async fn allow_role_base(
    req: Request<Body>,
    next: Next,
    permitted: &[Role],
    failure_msg: &str,
) -> Result<Response, (StatusCode, Json<ApiResponse<Empty>>)> {
    let (req, user) = extract_and_insert_authuser(req).await?;

    if permitted.contains(&user.0.role) {
        Ok(next.run(req).await)
    } else {
        Err((StatusCode::FORBIDDEN, Json(ApiResponse::error(failure_msg))))
    }
}

/// Basic guard to ensure the request is authenticated.
pub async fn allow_authenticated(
    req: Request<Body>,
    next: Next,
) -> Result<Response, (StatusCode, Json<ApiResponse<Empty>>)> {
    let (req, _user) = extract_and_insert_authuser(req).await?;

    Ok(next.run(req).await)
}

/// Admin-portal guard.
pub async fn allow_admin(
    req: Request<Body>,
    next: Next,
) -> Result<Response, (StatusCode, Json<ApiResponse<Empty>>)> {
    allow_role_base(req, next, &[Role::Admin], "Admin access required").await
}

/// Judge-portal guard.
pub async fn allow_judge(
    req: Request<Body>,
    next: Next,
) -> Result<Response, (StatusCode, Json<ApiResponse<Empty>>)> {
    allow_role_base(req, next, &[Role::Judge], "Judge access required").await
}

/// Team-portal guard. Also rejects team tokens with no team linkage; every
/// handler in the group relies on `team_id` being present.
pub async fn allow_team(
    req: Request<Body>,
    next: Next,
) -> Result<Response, (StatusCode, Json<ApiResponse<Empty>>)> {
    let (req, user) = extract_and_insert_authuser(req).await?;

    if user.0.role != Role::Team {
        return Err((
            StatusCode::FORBIDDEN,
            Json(ApiResponse::error("Team access required")),
        ));
    }

    if user.0.team_id.is_none() {
        return Err((
            StatusCode::FORBIDDEN,
            Json(ApiResponse::error("No team linkage")),
        ));
    }

    Ok(next.run(req).await)
}
