//! # Admin Routes Module
//!
//! Defines and wires up routes for the `/api/admin` endpoint group. The
//! whole group sits behind the `allow_admin` guard.
//!
//! ## Structure
//! - `post.rs` — create users, teams, rounds, subtasks, judges, assignments,
//!   shortlist entries, final task
//! - `get.rs` — listings per resource (teams, rounds, judges, scores, ...)
//! - `put.rs` — round edits (times, activation, submission gate)

use ::common::state::AppState;
use axum::{
    Router,
    routing::{get, post, put},
};
use get::{
    get_final_task, list_assignments, list_judges, list_rounds, list_scores, list_shortlist,
    list_subtasks, list_teams,
};
use post::{
    create_assignment, create_judge, create_round, create_subtask, create_team, create_user,
    release_final_task, shortlist_team,
};
use put::edit_round;

pub mod common;
pub mod get;
pub mod post;
pub mod put;

pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/users", post(create_user))
        .route("/teams", post(create_team).get(list_teams))
        .route("/rounds", post(create_round).get(list_rounds))
        .route("/rounds/{round_id}", put(edit_round))
        .route(
            "/rounds/{round_id}/subtasks",
            post(create_subtask).get(list_subtasks),
        )
        .route("/judges", post(create_judge).get(list_judges))
        .route("/assignments", post(create_assignment))
        .route("/rounds/{round_id}/assignments", get(list_assignments))
        .route("/shortlist", post(shortlist_team))
        .route("/rounds/{round_id}/shortlist", get(list_shortlist))
        .route("/rounds/{round_id}/scores", get(list_scores))
        .route("/final-task", post(release_final_task).get(get_final_task))
}
