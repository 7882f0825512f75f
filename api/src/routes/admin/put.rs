//! Admin round edit route.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::response::ApiResponse;
use crate::routes::common::RoundResponse;
use common::state::AppState;
use db::models::round::{ActiveModel as RoundActiveModel, Column as RoundColumn, Entity as RoundEntity};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, EntityTrait, QueryFilter, sea_query::Expr,
};

#[derive(Debug, Deserialize, Default)]
pub struct EditRoundRequest {
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub is_active: Option<bool>,
    pub submissions_enabled: Option<bool>,
}

/// PUT /api/admin/rounds/{round_id}
///
/// Edit round times and flags. Activating a round deactivates every other
/// round, keeping at most one active at a time.
///
/// ### Responses
/// - `200 OK` with the updated round
/// - `404 Not Found` for an unknown round id
/// - `500 Internal Server Error`
pub async fn edit_round(
    State(app_state): State<AppState>,
    Path(round_id): Path<i64>,
    Json(req): Json<EditRoundRequest>,
) -> impl IntoResponse {
    let db = app_state.db();

    let round = match RoundEntity::find_by_id(round_id).one(db).await {
        Ok(Some(round)) => round,
        Ok(None) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ApiResponse::<RoundResponse>::error(format!(
                    "Round {} not found.",
                    round_id
                ))),
            );
        }
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<RoundResponse>::error(format!(
                    "Database error: {}",
                    e
                ))),
            );
        }
    };

    if req.is_active == Some(true) {
        let deactivate = RoundEntity::update_many()
            .col_expr(RoundColumn::IsActive, Expr::value(false))
            .filter(RoundColumn::Id.ne(round_id))
            .exec(db)
            .await;
        if let Err(e) = deactivate {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<RoundResponse>::error(format!(
                    "Database error: {}",
                    e
                ))),
            );
        }
    }

    let mut active_model: RoundActiveModel = round.into();
    if let Some(start_time) = req.start_time {
        active_model.start_time = Set(start_time);
    }
    if let Some(end_time) = req.end_time {
        active_model.end_time = Set(end_time);
    }
    if let Some(is_active) = req.is_active {
        active_model.is_active = Set(is_active);
    }
    if let Some(submissions_enabled) = req.submissions_enabled {
        active_model.submissions_enabled = Set(submissions_enabled);
    }
    active_model.updated_at = Set(Utc::now());

    match active_model.update(db).await {
        Ok(round) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                RoundResponse::from(round),
                "Round updated successfully",
            )),
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
