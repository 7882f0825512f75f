//! Judge scoring route.

use axum::{Extension, Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::Deserialize;

use crate::auth::claims::AuthUser;
use crate::response::ApiResponse;
use crate::routes::common::ScoreResponse;
use common::state::AppState;
use db::models::{
    judge::Model as Judge, judge_assignment::Model as JudgeAssignment, score::Model as Score,
};

#[derive(Debug, Deserialize)]
pub struct CreateScoreRequest {
    pub team_id: i64,
    pub round_id: i64,
    pub value: i32,
    pub remarks: Option<String>,
}

/// POST /api/judge/scores
///
/// Record a score for an assigned team. One score per (judge, team, round);
/// a second attempt conflicts.
///
/// ### Responses
///
/// - `201 Created`
/// ```json
/// {
///   "success": true,
///   "data": {
///     "id": 12,
///     "judge_id": 2,
///     "team_id": 3,
///     "round_id": 1,
///     "value": 87,
///     "remarks": "Strong demo, thin tests"
///   },
///   "message": "Score recorded successfully"
/// }
/// ```
///
/// - `403 Forbidden` (no judge profile, or team not assigned)
/// - `409 Conflict` (already scored)
/// - `500 Internal Server Error`
pub async fn create_score(
    State(app_state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Json(req): Json<CreateScoreRequest>,
) -> impl IntoResponse {
    let db = app_state.db();

    let judge = match Judge::find_by_user(db, user.0.sub).await {
        Ok(Some(judge)) => judge,
        Ok(None) => {
            return (
                StatusCode::FORBIDDEN,
                Json(ApiResponse::<ScoreResponse>::error(
                    "No judge profile for this account",
                )),
            );
        }
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<ScoreResponse>::error(format!(
                    "Database error: {}",
                    e
                ))),
            );
        }
    };

    match JudgeAssignment::is_assigned(db, judge.id, req.team_id, req.round_id).await {
        Ok(true) => {}
        Ok(false) => {
            return (
                StatusCode::FORBIDDEN,
                Json(ApiResponse::<ScoreResponse>::error(
                    "Not assigned to this team for this round",
                )),
            );
        }
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<ScoreResponse>::error(format!(
                    "Database error: {}",
                    e
                ))),
            );
        }
    }

    match Score::create(
        db,
        judge.id,
        req.team_id,
        req.round_id,
        req.value,
        req.remarks.as_deref(),
    )
    .await
    {
        Ok(score) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(
                ScoreResponse::from(score),
                "Score recorded successfully",
            )),
        ),
        Err(e) => {
            if e.to_string().contains("UNIQUE constraint failed") {
                return (
                    StatusCode::CONFLICT,
                    Json(ApiResponse::<ScoreResponse>::error(
                        "A score for this judge, team and round already exists",
                    )),
                );
            }

            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<ScoreResponse>::error(format!(
                    "Database error: {}",
                    e
                ))),
            )
        }
    }
}
