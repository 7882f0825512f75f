//! Team read routes.

use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use rand::seq::SliceRandom;

use crate::auth::claims::AuthUser;
use crate::response::ApiResponse;
use crate::routes::common::{FinalTaskResponse, RoundResponse, SubmissionResponse, SubtaskResponse};
use crate::routes::team::common::{OptionsResponse, SelectionResponse};
use common::state::AppState;
use db::models::{
    final_task::Model as FinalTask,
    round::Model as Round,
    round_options::Model as RoundOptions,
    submission::Model as Submission,
    subtask::Model as Subtask,
    team_subtask_display::Model as TeamSubtaskDisplay,
    team_subtask_selection::Model as TeamSubtaskSelection,
};

/// Number of subtasks drawn for each team's offer.
const OFFER_COUNT: usize = 2;

/// GET /api/team/rounds/active
pub async fn active_round(State(app_state): State<AppState>) -> impl IntoResponse {
    let db = app_state.db();

    match Round::find_active(db).await {
        Ok(Some(round)) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                RoundResponse::from(round),
                "Active round fetched successfully",
            )),
        ),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<RoundResponse>::error("No active round")),
        ),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<RoundResponse>::error(format!(
                "Database error: {}",
                e
            ))),
        ),
    }
}

/// GET /api/team/rounds/{round_id}/options
///
/// The team's subtask offer for the round. The first call draws two
/// distinct subtasks belonging to the round, persists the offer and records
/// a display marker per shown subtask; later calls return the stored offer
/// unchanged.
///
/// ### Responses
/// - `200 OK` with the offer (and the selection, once made)
/// - `409 Conflict` when the round has fewer than two subtasks
/// - `500 Internal Server Error`
pub async fn subtask_options(
    State(app_state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(round_id): Path<i64>,
) -> impl IntoResponse {
    let db = app_state.db();

    let team_id = match user.0.team_id {
        Some(team_id) => team_id,
        None => {
            return (
                StatusCode::FORBIDDEN,
                Json(ApiResponse::<OptionsResponse>::error("No team linkage")),
            );
        }
    };

    let existing = match RoundOptions::find_by_team_and_round(db, team_id, round_id).await {
        Ok(existing) => existing,
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<OptionsResponse>::error(format!(
                    "Database error: {}",
                    e
                ))),
            );
        }
    };

    let options = match existing {
        Some(options) => options,
        None => {
            let subtasks = match Subtask::find_for_round(db, round_id).await {
                Ok(subtasks) => subtasks,
                Err(e) => {
                    return (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        Json(ApiResponse::<OptionsResponse>::error(format!(
                            "Database error: {}",
                            e
                        ))),
                    );
                }
            };

            if subtasks.len() < OFFER_COUNT {
                return (
                    StatusCode::CONFLICT,
                    Json(ApiResponse::<OptionsResponse>::error(
                        "Not enough subtasks in this round to make an offer",
                    )),
                );
            }

            let offered_ids: Vec<i64> = {
                let mut rng = rand::thread_rng();
                subtasks
                    .choose_multiple(&mut rng, OFFER_COUNT)
                    .map(|s| s.id)
                    .collect()
            };

            match RoundOptions::create(db, team_id, round_id, &offered_ids).await {
                Ok(options) => {
                    for subtask_id in &offered_ids {
                        if let Err(e) =
                            TeamSubtaskDisplay::record(db, team_id, round_id, *subtask_id).await
                        {
                            return (
                                StatusCode::INTERNAL_SERVER_ERROR,
                                Json(ApiResponse::<OptionsResponse>::error(format!(
                                    "Database error: {}",
                                    e
                                ))),
                            );
                        }
                    }
                    options
                }
                Err(e) if e.to_string().contains("UNIQUE constraint failed") => {
                    // Lost the race against a concurrent first call; serve
                    // the offer that call persisted.
                    match RoundOptions::find_by_team_and_round(db, team_id, round_id).await {
                        Ok(Some(options)) => options,
                        Ok(None) | Err(_) => {
                            return (
                                StatusCode::INTERNAL_SERVER_ERROR,
                                Json(ApiResponse::<OptionsResponse>::error(
                                    "Database error while loading subtask offer",
                                )),
                            );
                        }
                    }
                }
                Err(e) => {
                    return (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        Json(ApiResponse::<OptionsResponse>::error(format!(
                            "Database error: {}",
                            e
                        ))),
                    );
                }
            }
        }
    };

    let offered_ids = options.offered_ids();
    let subtasks = match Subtask::find_for_round(db, round_id).await {
        Ok(subtasks) => subtasks,
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<OptionsResponse>::error(format!(
                    "Database error: {}",
                    e
                ))),
            );
        }
    };

    // Resolve ids against the round's subtasks, preserving draw order.
    let offered: Vec<SubtaskResponse> = offered_ids
        .iter()
        .filter_map(|id| subtasks.iter().find(|s| s.id == *id))
        .cloned()
        .map(Into::into)
        .collect();

    let response = OptionsResponse {
        subtasks: offered,
        selected_subtask_id: options.selected_subtask_id,
    };

    (
        StatusCode::OK,
        Json(ApiResponse::success(
            response,
            "Subtask options fetched successfully",
        )),
    )
}

/// GET /api/team/rounds/{round_id}/selection
pub async fn get_selection(
    State(app_state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(round_id): Path<i64>,
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

    match TeamSubtaskSelection::find_by_team_and_round(db, team_id, round_id).await {
        Ok(Some(selection)) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                SelectionResponse::from(selection),
                "Selection fetched successfully",
            )),
        ),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<SelectionResponse>::error(
                "No subtask selected for this round",
            )),
        ),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<SelectionResponse>::error(format!(
                "Database error: {}",
                e
            ))),
        ),
    }
}

/// GET /api/team/rounds/{round_id}/shown
///
/// Subtasks recorded as shown to the team for this round.
pub async fn shown_subtasks(
    State(app_state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(round_id): Path<i64>,
) -> impl IntoResponse {
    let db = app_state.db();

    let team_id = match user.0.team_id {
        Some(team_id) => team_id,
        None => {
            return (
                StatusCode::FORBIDDEN,
                Json(ApiResponse::<Vec<SubtaskResponse>>::error("No team linkage")),
            );
        }
    };

    let displays = match TeamSubtaskDisplay::find_for_team_and_round(db, team_id, round_id).await {
        Ok(displays) => displays,
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<Vec<SubtaskResponse>>::error(format!(
                    "Database error: {}",
                    e
                ))),
            );
        }
    };

    let subtasks = match Subtask::find_for_round(db, round_id).await {
        Ok(subtasks) => subtasks,
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<Vec<SubtaskResponse>>::error(format!(
                    "Database error: {}",
                    e
                ))),
            );
        }
    };

    let response: Vec<SubtaskResponse> = displays
        .iter()
        .filter_map(|d| subtasks.iter().find(|s| s.id == d.subtask_id))
        .cloned()
        .map(Into::into)
        .collect();

    (
        StatusCode::OK,
        Json(ApiResponse::success(
            response,
            "Shown subtasks fetched successfully",
        )),
    )
}

/// GET /api/team/rounds/{round_id}/submission
pub async fn get_submission(
    State(app_state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(round_id): Path<i64>,
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
                "No submission for this round",
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

/// GET /api/team/final-task
///
/// The released final task. 404 until an admin releases one.
pub async fn final_task(State(app_state): State<AppState>) -> impl IntoResponse {
    let db = app_state.db();

    match FinalTask::current_released(db).await {
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
                "The final task has not been released",
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
