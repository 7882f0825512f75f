//! # Judge Routes Module
//!
//! Defines and wires up routes for the `/api/judge` endpoint group. The
//! whole group sits behind the `allow_judge` guard; handlers additionally
//! resolve the caller's judge profile and reject accounts without one.

use axum::{
    Router,
    routing::{get, post, put},
};
use common::state::AppState;
use get::{assigned_teams, team_submission};
use post::create_score;
use put::update_score;

pub mod get;
pub mod post;
pub mod put;

pub fn judge_routes() -> Router<AppState> {
    Router::new()
        .route("/rounds/{round_id}/teams", get(assigned_teams))
        .route(
            "/rounds/{round_id}/teams/{team_id}/submission",
            get(team_submission),
        )
        .route("/scores", post(create_score))
        .route("/scores/{score_id}", put(update_score))
}
