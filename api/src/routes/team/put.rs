//! Team submission edit route.

use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::Utc;
use validator::Validate;

use crate::auth::claims::AuthUser;
use crate::response::ApiResponse;
use crate::routes::common::SubmissionResponse;
use crate::routes::team::common::SubmissionRequest;
use common::format_validation_errors;
use common::state::AppState;
use db::models::{
    round::Entity as RoundEntity,
    submission::{ActiveModel as SubmissionActiveModel, Model as Submission},
};
use sea_orm::{ActiveModelTrait, ActiveValue::Set, EntityTrait};

/// PUT /api/team/rounds/{round_id}/submission
///
/// Update the team's submission. Refused once the record is locked or when
/// the round no longer accepts submissions. Only provided fields change.
///
/// ### Responses
/// - `200 OK` with the updated submission
/// - `403 Forbidden` (submissions disabled)
/// - `404 Not Found` (no submission yet)
/// - `423 Locked` (submission locked by an admin)
/// - `500 Internal Server Error`
pub async fn update_submission(
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

    let submission = match Submission::find_by_team_and_round(db, team_id, round_id).await {
        Ok(Some(submission)) => submission,
        Ok(None) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ApiResponse::<SubmissionResponse>::error(
                    "No submission for this round",
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

    if submission.locked {
        return (
            StatusCode::LOCKED,
            Json(ApiResponse::<SubmissionResponse>::error(
                "Submission is locked",
            )),
        );
    }

    let mut active_model: SubmissionActiveModel = submission.into();
    if let Some(file_url) = req.file_url {
        active_model.file_url = Set(Some(file_url));
    }
    if let Some(github_url) = req.github_url {
        active_model.github_url = Set(Some(github_url));
    }
    if let Some(overview) = req.overview {
        active_model.overview = Set(Some(overview));
    }
    active_model.updated_at = Set(Utc::now());

    match active_model.update(db).await {
        Ok(submission) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                SubmissionResponse::from(submission),
                "Submission updated successfully",
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
