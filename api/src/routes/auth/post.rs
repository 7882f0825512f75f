use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::{Deserialize, Serialize};

use crate::auth::generate_jwt;
use crate::response::ApiResponse;
use common::state::AppState;
use db::models::user::Model as UserModel;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize, Default)]
pub struct LoginResponse {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub role: String,
    pub team_id: Option<i64>,
    pub token: String,
    pub expires_at: String,
}

/// POST /api/auth/login
///
/// Authenticate an existing user and issue a JWT carrying role and team
/// linkage. Unknown users and wrong passwords are indistinguishable to the
/// caller.
///
/// ### Responses
/// - `200 OK` with the token and claims summary
/// - `401 Unauthorized` on bad credentials
/// - `500 Internal Server Error` on query failure
pub async fn login(
    State(app_state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> impl IntoResponse {
    let db = app_state.db();

    let user = match UserModel::find_by_username(db, &req.username).await {
        Ok(Some(user)) => user,
        Ok(None) => {
            return (
                StatusCode::UNAUTHORIZED,
                Json(ApiResponse::<LoginResponse>::error("Invalid credentials")),
            );
        }
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<LoginResponse>::error(format!(
                    "Database error: {}",
                    e
                ))),
            );
        }
    };

    if !user.verify_password(&req.password) {
        return (
            StatusCode::UNAUTHORIZED,
            Json(ApiResponse::<LoginResponse>::error("Invalid credentials")),
        );
    }

    let (token, expires_at) = generate_jwt(user.id, user.role, user.team_id);
    let response = LoginResponse {
        id: user.id,
        username: user.username,
        email: user.email,
        role: user.role.to_string(),
        team_id: user.team_id,
        token,
        expires_at,
    };

    (
        StatusCode::OK,
        Json(ApiResponse::success(response, "Login successful")),
    )
}
