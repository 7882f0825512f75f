//! Team creation routes: subtask selection and submission.

use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use validator::Validate;

use crate::auth::claims::AuthUser;
use crate::response::ApiResponse;
use crate::routes::common::SubmissionResponse;
use crate::routes::team::common::{SelectionResponse, SubmissionRequest};
use common::format_validation_errors;
use common::state::AppState;
use db::models::{
    round::Entity as RoundEntity,
    round_options::Model as RoundOptions,
    submission::Model as Submission,
    subtask::Entity as SubtaskEntity,
    team_subtask_selection::Model as TeamSubtaskSelection,
};
use sea_orm::EntityTrait;

#[derive(Debug, Deserialize)]
pub struct SelectSubtaskRequest {
    pub subtask_id: i64,
}

/// POST /api/team/rounds/{round_id}/selection
///
/// Commit to one of the offered subtasks. A team selects once per round;
/// repeats conflict. The choice is mirrored onto the stored offer.
///
/// ### Responses
/// - `201 Created`
/// - `400 Bad Request` (subtask not part of the team's offer)
/// - `404 Not Found` (subtask not in this round)
/// - `409 Conflict` (already selected, or no offer made yet)
/// - `500 Internal Server Error`
pub async fn select_subtask(
    State(app_state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(round_id): Path<i64>,
    Json(req): Json<SelectSubtaskRequest>,
) -> impl IntoResponse {
    let db = app_state.db();

    let team_id = match user.0.team_id {
        Some(team_id) => team_id,
        None => {
            return (
                StatusCode::FORBIDDEN,
                Json(ApiResponse::<SelectionResponse>::error("No team linkage")),
            );
        }
    };

    match SubtaskEntity::find_by_id(req.subtask_id).one(db).await {
        Ok(Some(subtask)) if subtask.round_id == round_id => {}
        Ok(_) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ApiResponse::<SelectionResponse>::error(format!(
                    "Subtask {} in Round {} not found.",
                    req.subtask_id, round_id
                ))),
            );
        }
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<SelectionResponse>::error(format!(
                    "Database error: {}",
                    e
                ))),
            );
        }
    }

    let options = match RoundOptions::find_by_team_and_round(db, team_id, round_id).await {
        Ok(Some(options)) => options,
        Ok(None) => {
            return (
                StatusCode::CONFLICT,
                Json(ApiResponse::<SelectionResponse>::error(
                    "No subtask options have been offered yet",
                )),
            );
        }
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<SelectionResponse>::error(format!(
                    "Database error: {}",
                    e
                ))),
            );
        }
    };

    if !options.offered_ids().contains(&req.subtask_id) {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<SelectionResponse>::error(
                "Subtask was not offered to this team",
            )),
        );
    }

    let selection = match TeamSubtaskSelection::create(db, team_id, round_id, req.subtask_id).await
    {
        Ok(selection) => selection,
        Err(e) => {
            if e.to_string().contains("UNIQUE constraint failed") {
                return (
                    StatusCode::CONFLICT,
                    Json(ApiResponse::<SelectionResponse>::error(
                        "A subtask has already been selected for this round",
                    )),
                );
            }

            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<SelectionResponse>::error(format!(
                    "Database error: {}",
                    e
                ))),
            );
        }
    };

    if let Err(e) = RoundOptions::set_selected(db, options.id, req.subtask_id).await {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<SelectionResponse>::error(format!(
                "Database error: {}",
                e
            ))),
        );
    }

    (
        StatusCode::CREATED,
        Json(ApiResponse::success(
            SelectionResponse::from(selection),
            "Subtask selected successfully",
        )),
    )
}

/// POST /api/team/rounds/{round_id}/submission
///
/// Create the team's submission for a round. Only allowed while the round
/// has submissions enabled; one submission per (team, round).
pub async fn create_submission(
    State(app_state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(round_id): Path<i64>,
    Json(req): Json<SubmissionRequest>,
) -> impl IntoResponse {
    let db = app_state.db();

    let team_id = match user.0.team_id {
        Some(team_id) => team_id,
        None => {
            return (
                StatusCode::FORBIDDEN,
                Json(ApiResponse::<SubmissionResponse>::error("No team linkage")),
            );
        }
    };

    if let Err(validation_errors) = req.validate() {
        let error_message = format_validation_errors(&validation_errors);
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<SubmissionResponse>::error(error_message)),
        );
    }

    match RoundEntity::find_by_id(round_id).one(db).await {
        Ok(Some(round)) if round.submissions_enabled => {}
        Ok(Some(_)) => {
            return (
                StatusCode::FORBIDDEN,
                Json(ApiResponse::<SubmissionResponse>::error(
                    "Submissions are not enabled for this round",
                )),
            );
        }
        Ok(None) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ApiResponse::<SubmissionResponse>::error(format!(
                    "Round {} not found.",
                    round_id
                ))),
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

    match Submission::create(
        db,
        team_id,
        round_id,
        req.file_url.as_deref(),
        req.github_url.as_deref(),
        req.overview.as_deref(),
    )
    .await
    {
        Ok(submission) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(
                SubmissionResponse::from(submission),
                "Submission created successfully",
            )),
        ),
        Err(e) => {
            if e.to_string().contains("UNIQUE constraint failed") {
                return (
                    StatusCode::CONFLICT,
                    Json(ApiResponse::<SubmissionResponse>::error(
                        "A submission for this round already exists",
                    )),
                );
            }

            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<SubmissionResponse>::error(format!(
                    "Database error: {}",
                    e
                ))),
            )
        }
    }
}
