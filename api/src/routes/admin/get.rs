//! Admin listing routes.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::response::ApiResponse;
use crate::routes::admin::common::{AssignmentResponse, JudgeResponse, ShortlistResponse};
use crate::routes::common::{FinalTaskResponse, RoundResponse, ScoreResponse, SubtaskResponse, TeamResponse};
use common::state::AppState;
use db::models::{
    final_task::Model as FinalTask,
    judge::Entity as JudgeEntity,
    judge_assignment::Model as JudgeAssignment,
    round::Entity as RoundEntity,
    score::Model as Score,
    shortlisted_team::Model as ShortlistedTeam,
    subtask::Model as Subtask,
    team::Entity as TeamEntity,
};
use sea_orm::EntityTrait;

/// GET /api/admin/teams
pub async fn list_teams(State(app_state): State<AppState>) -> impl IntoResponse {
    let db = app_state.db();

    match TeamEntity::find().all(db).await {
        Ok(teams) => {
            let response: Vec<TeamResponse> = teams.into_iter().map(Into::into).collect();
            (
                StatusCode::OK,
                Json(ApiResponse::success(response, "Teams fetched successfully")),
            )
        }
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<Vec<TeamResponse>>::error(format!(
                "Database error: {}",
                e
            ))),
        ),
    }
}

/// GET /api/admin/rounds
pub async fn list_rounds(State(app_state): State<AppState>) -> impl IntoResponse {
    let db = app_state.db();

    match RoundEntity::find().all(db).await {
        Ok(rounds) => {
            let response: Vec<RoundResponse> = rounds.into_iter().map(Into::into).collect();
            (
                StatusCode::OK,
                Json(ApiResponse::success(response, "Rounds fetched successfully")),
            )
        }
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<Vec<RoundResponse>>::error(format!(
                "Database error: {}",
                e
            ))),
        ),
    }
}

/// GET /api/admin/rounds/{round_id}/subtasks
pub async fn list_subtasks(
    State(app_state): State<AppState>,
    Path(round_id): Path<i64>,
) -> impl IntoResponse {
    let db = app_state.db();

    match Subtask::find_for_round(db, round_id).await {
        Ok(subtasks) => {
            let response: Vec<SubtaskResponse> = subtasks.into_iter().map(Into::into).collect();
            (
                StatusCode::OK,
                Json(ApiResponse::success(
                    response,
                    "Subtasks fetched successfully",
                )),
            )
        }
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<Vec<SubtaskResponse>>::error(format!(
                "Database error: {}",
                e
            ))),
        ),
    }
}

/// GET /api/admin/judges
pub async fn list_judges(State(app_state): State<AppState>) -> impl IntoResponse {
    let db = app_state.db();

    match JudgeEntity::find().all(db).await {
        Ok(judges) => {
            let response: Vec<JudgeResponse> = judges.into_iter().map(Into::into).collect();
            (
                StatusCode::OK,
                Json(ApiResponse::success(response, "Judges fetched successfully")),
            )
        }
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<Vec<JudgeResponse>>::error(format!(
                "Database error: {}",
                e
            ))),
        ),
    }
}

/// GET /api/admin/rounds/{round_id}/assignments
pub async fn list_assignments(
    State(app_state): State<AppState>,
    Path(round_id): Path<i64>,
) -> impl IntoResponse {
    let db = app_state.db();

    match JudgeAssignment::find_for_round(db, round_id).await {
        Ok(assignments) => {
            let response: Vec<AssignmentResponse> =
                assignments.into_iter().map(Into::into).collect();
            (
                StatusCode::OK,
                Json(ApiResponse::success(
                    response,
                    "Assignments fetched successfully",
                )),
            )
        }
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<Vec<AssignmentResponse>>::error(format!(
                "Database error: {}",
                e
            ))),
        ),
    }
}

/// GET /api/admin/rounds/{round_id}/shortlist
pub async fn list_shortlist(
    State(app_state): State<AppState>,
    Path(round_id): Path<i64>,
) -> impl IntoResponse {
    let db = app_state.db();

    match ShortlistedTeam::find_for_round(db, round_id).await {
        Ok(entries) => {
            let response: Vec<ShortlistResponse> = entries.into_iter().map(Into::into).collect();
            (
                StatusCode::OK,
                Json(ApiResponse::success(
                    response,
                    "Shortlist fetched successfully",
                )),
            )
        }
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<Vec<ShortlistResponse>>::error(format!(
                "Database error: {}",
                e
            ))),
        ),
    }
}

/// GET /api/admin/rounds/{round_id}/scores
pub async fn list_scores(
    State(app_state): State<AppState>,
    Path(round_id): Path<i64>,
) -> impl IntoResponse {
    let db = app_state.db();

    match Score::find_for_round(db, round_id).await {
        Ok(scores) => {
            let response: Vec<ScoreResponse> = scores.into_iter().map(Into::into).collect();
            (
                StatusCode::OK,
                Json(ApiResponse::success(response, "Scores fetched successfully")),
            )
        }
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<Vec<ScoreResponse>>::error(format!(
                "Database error: {}",
                e
            ))),
        ),
    }
}

/// GET /api/admin/final-task
///
/// The current final-task record, released or not.
pub async fn get_final_task(State(app_state): State<AppState>) -> impl IntoResponse {
    let db = app_state.db();

    match FinalTask::current(db).await {
        Ok(Some(task)) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                FinalTaskResponse::from(task),
                "Final task fetched successfully",
            )),
        ),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<FinalTaskResponse>::error(
                "No final task has been created",
            )),
        ),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<FinalTaskResponse>::error(format!(
                "Database error: {}",
                e
            ))),
        ),
    }
}
