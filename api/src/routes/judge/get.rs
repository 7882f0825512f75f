//! Judge read routes: assigned teams and their submissions.

use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::auth::claims::AuthUser;
use crate::response::ApiResponse;
use crate::routes::common::{SubmissionResponse, TeamResponse};
use common::state::AppState;
use db::models::{
    judge::Model as Judge,
    judge_assignment::Model as JudgeAssignment,
    submission::Model as Submission,
    team::{Column as TeamColumn, Entity as TeamEntity},
};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};

/// GET /api/judge/rounds/{round_id}/teams
///
/// Teams assigned to the calling judge for the round.
pub async fn assigned_teams(
    State(app_state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(round_id): Path<i64>,
) -> impl IntoResponse {
    let db = app_state.db();

    let judge = match Judge::find_by_user(db, user.0.sub).await {
        Ok(Some(judge)) => judge,
        Ok(None) => {
            return (
                StatusCode::FORBIDDEN,
                Json(ApiResponse::<Vec<TeamResponse>>::error(
                    "No judge profile for this account",
                )),
            );
        }
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<Vec<TeamResponse>>::error(format!(
                    "Database error: {}",
                    e
                ))),
            );
        }
    };

    let assignments = match JudgeAssignment::find_for_judge_and_round(db, judge.id, round_id).await
    {
        Ok(assignments) => assignments,
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<Vec<TeamResponse>>::error(format!(
                    "Database error: {}",
                    e
                ))),
            );
        }
    };

    let team_ids: Vec<i64> = assignments.iter().map(|a| a.team_id).collect();

    match TeamEntity::find()
        .filter(TeamColumn::Id.is_in(team_ids))
        .all(db)
        .await
    {
        Ok(teams) => {
            let response: Vec<TeamResponse> = teams.into_iter().map(Into::into).collect();
            (
                StatusCode::OK,
                Json(ApiResponse::success(
                    response,
                    "Assigned teams fetched successfully",
                )),
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

/// GET /api/judge/rounds/{round_id}/teams/{team_id}/submission
///
/// A submission of one of the judge's assigned teams. 403 when the team is
/// not assigned to the caller for this round.
pub async fn team_submission(
    State(app_state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path((round_id, team_id)): Path<(i64, i64)>,
) -> impl IntoResponse {
    let db = app_state.db();

    let judge = match Judge::find_by_user(db, user.0.sub).await {
        Ok(Some(judge)) => judge,
        Ok(None) => {
            return (
                StatusCode::FORBIDDEN,
                Json(ApiResponse::<SubmissionResponse>::error(
                    "No judge profile for this account",
                )),
            );
        }
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<SubmissionResponse>::error(format!(
                    "Database error: {}",
                    e
                ))),
            );
        }
    };

    match JudgeAssignment::is_assigned(db, judge.id, team_id, round_id).await {
        Ok(true) => {}
        Ok(false) => {
            return (
                StatusCode::FORBIDDEN,
                Json(ApiResponse::<SubmissionResponse>::error(
                    "Not assigned to this team for this round",
                )),
            );
        }
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<SubmissionResponse>::error(format!(
                    "Database error: {}",
                    e
                ))),
            );
        }
    }

    match Submission::find_by_team_and_round(db, team_id, round_id).await {
        Ok(Some(submission)) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                SubmissionResponse::from(submission),
                "Submission fetched successfully",
            )),
        ),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<SubmissionResponse>::error(
                "This team has not submitted for this round",
            )),
        ),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<SubmissionResponse>::error(format!(
                "Database error: {}",
                e
            ))),
        ),
    }
}
