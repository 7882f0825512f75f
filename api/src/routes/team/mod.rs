//! # Team Routes Module
//!
//! Defines and wires up routes for the `/api/team` endpoint group. The
//! whole group sits behind the `allow_team` guard, which also rejects team
//! tokens without a team linkage, so handlers can rely on `team_id`.
//!
//! ## Structure
//! - `get.rs` — active round, subtask offer, selection, shown subtasks,
//!   own submission, final task
//! - `post.rs` — subtask selection and submission creation
//! - `put.rs` — submission edits while unlocked

use ::common::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};
use get::{active_round, final_task, get_selection, get_submission, shown_subtasks, subtask_options};
use post::{create_submission, select_subtask};
use put::update_submission;

pub mod common;
pub mod get;
pub mod post;
pub mod put;

pub fn team_routes() -> Router<AppState> {
    Router::new()
        .route("/rounds/active", get(active_round))
        .route("/rounds/{round_id}/options", get(subtask_options))
        .route(
            "/rounds/{round_id}/selection",
            post(select_subtask).get(get_selection),
        )
        .route("/rounds/{round_id}/shown", get(shown_subtasks))
        .route(
            "/rounds/{round_id}/submission",
            post(create_submission).put(update_submission).get(get_submission),
        )
        .route("/final-task", get(final_task))
}
