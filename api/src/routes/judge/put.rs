//! Judge score edit route.

use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::Utc;
use serde::Deserialize;

use crate::auth::claims::AuthUser;
use crate::response::ApiResponse;
use crate::routes::common::ScoreResponse;
use common::state::AppState;
use db::models::{
    judge::Model as Judge,
    score::{ActiveModel as ScoreActiveModel, Entity as ScoreEntity},
};
use sea_orm::{ActiveModelTrait, ActiveValue::Set, EntityTrait};

#[derive(Debug, Deserialize, Default)]
pub struct EditScoreRequest {
    pub value: Option<i32>,
    pub remarks: Option<String>,
}

/// PUT /api/judge/scores/{score_id}
///
/// Update value or remarks of one of the caller's own scores.
pub async fn update_score(
    State(app_state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(score_id): Path<i64>,
    Json(req): Json<EditScoreRequest>,
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

    let score = match ScoreEntity::find_by_id(score_id).one(db).await {
        Ok(Some(score)) => score,
        Ok(None) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ApiResponse::<ScoreResponse>::error(format!(
                    "Score {} not found.",
                    score_id
                ))),
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

    if score.judge_id != judge.id {
        return (
            StatusCode::FORBIDDEN,
            Json(ApiResponse::<ScoreResponse>::error(
                "You can only edit your own scores",
            )),
        );
    }

    let mut active_model: ScoreActiveModel = score.into();
    if let Some(value) = req.value {
        active_model.value = Set(value);
    }
    if let Some(remarks) = req.remarks {
        active_model.remarks = Set(Some(remarks));
    }
    active_model.updated_at = Set(Utc::now());

    match active_model.update(db).await {
        Ok(score) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                ScoreResponse::from(score),
                "Score updated successfully",
            )),
        ),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<ScoreResponse>::error(format!(
                "Database error: {}",
                e
            ))),
        ),
    }
}
