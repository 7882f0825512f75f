//! Admin creation routes.
//!
//! All creation endpoints for the admin portal. Responses follow the
//! standard `ApiResponse` format; uniqueness violations surface as `409`.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::response::ApiResponse;
use crate::routes::admin::common::{
    AssignmentResponse, JudgeResponse, RoundRequest, ShortlistResponse, UserResponse,
};
use crate::routes::common::{FinalTaskResponse, RoundResponse, SubtaskResponse, TeamResponse};
use common::state::AppState;
use db::models::{
    final_task::Model as FinalTask,
    judge::{Entity as JudgeEntity, Model as Judge},
    judge_assignment::Model as JudgeAssignment,
    round::{Entity as RoundEntity, Model as Round},
    shortlisted_team::Model as ShortlistedTeam,
    subtask::Model as Subtask,
    team::{Entity as TeamEntity, Model as Team},
    user::{Entity as UserEntity, Model as User, Role},
};
use sea_orm::EntityTrait;

#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: Role,
    pub team_id: Option<i64>,
}

/// POST /api/admin/users
///
/// Provision a portal account with a role and, for team accounts, the team
/// linkage its tokens will carry.
///
/// ### Responses
///
/// - `201 Created`
/// ```json
/// {
///   "success": true,
///   "data": {
///     "id": 7,
///     "username": "nullptr",
///     "email": "nullptr@teams.example",
///     "role": "team",
///     "team_id": 3,
///     "created_at": "2026-07-20T18:00:00Z",
///     "updated_at": "2026-07-20T18:00:00Z"
///   },
///   "message": "User created successfully"
/// }
/// ```
///
/// - `409 Conflict` (duplicate username or email)
/// - `500 Internal Server Error`
pub async fn create_user(
    State(app_state): State<AppState>,
    Json(req): Json<CreateUserRequest>,
) -> impl IntoResponse {
    let db = app_state.db();

    match User::create(
        db,
        &req.username,
        &req.email,
        &req.password,
        req.role,
        req.team_id,
    )
    .await
    {
        Ok(user) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(
                UserResponse::from(user),
                "User created successfully",
            )),
        ),
        Err(e) => {
            let msg = e.to_string();
            if msg.contains("UNIQUE constraint failed: users.username") {
                return (
                    StatusCode::CONFLICT,
                    Json(ApiResponse::<UserResponse>::error(
                        "A user with this username already exists",
                    )),
                );
            }
            if msg.contains("UNIQUE constraint failed: users.email") {
                return (
                    StatusCode::CONFLICT,
                    Json(ApiResponse::<UserResponse>::error(
                        "A user with this email already exists",
                    )),
                );
            }

            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<UserResponse>::error(format!(
                    "Database error: {}",
                    e
                ))),
            )
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateTeamRequest {
    pub name: String,
}

/// POST /api/admin/teams
pub async fn create_team(
    State(app_state): State<AppState>,
    Json(req): Json<CreateTeamRequest>,
) -> impl IntoResponse {
    let db = app_state.db();

    match Team::create(db, &req.name).await {
        Ok(team) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(
                TeamResponse::from(team),
                "Team created successfully",
            )),
        ),
        Err(e) => {
            if e.to_string()
                .contains("UNIQUE constraint failed: teams.name")
            {
                return (
                    StatusCode::CONFLICT,
                    Json(ApiResponse::<TeamResponse>::error(
                        "A team with this name already exists",
                    )),
                );
            }

            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<TeamResponse>::error(format!(
                    "Database error: {}",
                    e
                ))),
            )
        }
    }
}

/// POST /api/admin/rounds
///
/// Create a competition round. Rounds start inactive with submissions
/// disabled; both are flipped via `PUT /admin/rounds/{round_id}`.
pub async fn create_round(
    State(app_state): State<AppState>,
    Json(req): Json<RoundRequest>,
) -> impl IntoResponse {
    let db = app_state.db();

    if req.end_time <= req.start_time {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<RoundResponse>::error(
                "End time must be after start time",
            )),
        );
    }

    match Round::create(db, req.number, req.start_time, req.end_time).await {
        Ok(round) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(
                RoundResponse::from(round),
                "Round created successfully",
            )),
        ),
        Err(e) => {
            if e.to_string()
                .contains("UNIQUE constraint failed: rounds.number")
            {
                return (
                    StatusCode::CONFLICT,
                    Json(ApiResponse::<RoundResponse>::error(
                        "A round with this number already exists",
                    )),
                );
            }

            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<RoundResponse>::error(format!(
                    "Database error: {}",
                    e
                ))),
            )
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateSubtaskRequest {
    pub title: String,
    pub description: String,
}

/// POST /api/admin/rounds/{round_id}/subtasks
pub async fn create_subtask(
    State(app_state): State<AppState>,
    Path(round_id): Path<i64>,
    Json(req): Json<CreateSubtaskRequest>,
) -> impl IntoResponse {
    let db = app_state.db();

    match RoundEntity::find_by_id(round_id).one(db).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ApiResponse::<SubtaskResponse>::error(format!(
                    "Round {} not found.",
                    round_id
                ))),
            );
        }
        Err(_) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<SubtaskResponse>::error(
                    "Database error while checking round",
                )),
            );
        }
    }

    match Subtask::create(db, round_id, &req.title, &req.description).await {
        Ok(subtask) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(
                SubtaskResponse::from(subtask),
                "Subtask created successfully",
            )),
        ),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<SubtaskResponse>::error(format!(
                "Database error: {}",
                e
            ))),
        ),
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateJudgeRequest {
    pub user_id: i64,
    pub track: String,
}

/// POST /api/admin/judges
///
/// Link a judge profile to an existing user account.
pub async fn create_judge(
    State(app_state): State<AppState>,
    Json(req): Json<CreateJudgeRequest>,
) -> impl IntoResponse {
    let db = app_state.db();

    match UserEntity::find_by_id(req.user_id).one(db).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ApiResponse::<JudgeResponse>::error(format!(
                    "User {} not found.",
                    req.user_id
                ))),
            );
        }
        Err(_) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<JudgeResponse>::error(
                    "Database error while checking user",
                )),
            );
        }
    }

    match Judge::create(db, req.user_id, &req.track).await {
        Ok(judge) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(
                JudgeResponse::from(judge),
                "Judge created successfully",
            )),
        ),
        Err(e) => {
            if e.to_string()
                .contains("UNIQUE constraint failed: judges.user_id")
            {
                return (
                    StatusCode::CONFLICT,
                    Json(ApiResponse::<JudgeResponse>::error(
                        "A judge profile for this user already exists",
                    )),
                );
            }

            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<JudgeResponse>::error(format!(
                    "Database error: {}",
                    e
                ))),
            )
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateAssignmentRequest {
    pub judge_id: i64,
    pub team_id: i64,
    pub round_id: i64,
}

/// POST /api/admin/assignments
///
/// Assign a judge to a team for a round.
pub async fn create_assignment(
    State(app_state): State<AppState>,
    Json(req): Json<CreateAssignmentRequest>,
) -> impl IntoResponse {
    let db = app_state.db();

    let judge = JudgeEntity::find_by_id(req.judge_id).one(db).await;
    let team = TeamEntity::find_by_id(req.team_id).one(db).await;
    let round = RoundEntity::find_by_id(req.round_id).one(db).await;

    let checks = [
        (judge.map(|j| j.is_some()), "Judge", req.judge_id),
        (team.map(|t| t.is_some()), "Team", req.team_id),
        (round.map(|r| r.is_some()), "Round", req.round_id),
    ];
    for (found, what, id) in checks {
        match found {
            Ok(true) => {}
            Ok(false) => {
                return (
                    StatusCode::NOT_FOUND,
                    Json(ApiResponse::<AssignmentResponse>::error(format!(
                        "{} {} not found.",
                        what, id
                    ))),
                );
            }
            Err(e) => {
                return (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ApiResponse::<AssignmentResponse>::error(format!(
                        "Database error: {}",
                        e
                    ))),
                );
            }
        }
    }

    match JudgeAssignment::create(db, req.judge_id, req.team_id, req.round_id).await {
        Ok(assignment) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(
                AssignmentResponse::from(assignment),
                "Judge assigned successfully",
            )),
        ),
        Err(e) => {
            if e.to_string().contains("UNIQUE constraint failed") {
                return (
                    StatusCode::CONFLICT,
                    Json(ApiResponse::<AssignmentResponse>::error(
                        "This judge is already assigned to this team for this round",
                    )),
                );
            }

            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<AssignmentResponse>::error(format!(
                    "Database error: {}",
                    e
                ))),
            )
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ShortlistRequest {
    pub team_id: i64,
    pub round_id: i64,
}

/// POST /api/admin/shortlist
///
/// Mark a team as advancing to the given round.
pub async fn shortlist_team(
    State(app_state): State<AppState>,
    Json(req): Json<ShortlistRequest>,
) -> impl IntoResponse {
    let db = app_state.db();

    match ShortlistedTeam::create(db, req.team_id, req.round_id).await {
        Ok(entry) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(
                ShortlistResponse::from(entry),
                "Team shortlisted successfully",
            )),
        ),
        Err(e) => {
            if e.to_string().contains("UNIQUE constraint failed") {
                return (
                    StatusCode::CONFLICT,
                    Json(ApiResponse::<ShortlistResponse>::error(
                        "This team is already shortlisted for this round",
                    )),
                );
            }

            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<ShortlistResponse>::error(format!(
                    "Database error: {}",
                    e
                ))),
            )
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct FinalTaskRequest {
    pub title: String,
    pub description: String,
    pub link: Option<String>,
    /// Defaults to releasing immediately.
    pub released: Option<bool>,
}

/// POST /api/admin/final-task
///
/// Create (and by default release) the final task. A new record supersedes
/// any earlier one.
pub async fn release_final_task(
    State(app_state): State<AppState>,
    Json(req): Json<FinalTaskRequest>,
) -> impl IntoResponse {
    let db = app_state.db();

    match FinalTask::create(
        db,
        &req.title,
        &req.description,
        req.link.as_deref(),
        req.released.unwrap_or(true),
    )
    .await
    {
        Ok(task) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(
                FinalTaskResponse::from(task),
                "Final task saved successfully",
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
