use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::routes::common::SubtaskResponse;

lazy_static::lazy_static! {
    static ref HTTP_URL_REGEX: regex::Regex =
        regex::Regex::new(r"^https?://\S+$").unwrap();
    static ref GITHUB_URL_REGEX: regex::Regex =
        regex::Regex::new(r"^https://github\.com/[A-Za-z0-9_.-]+/[A-Za-z0-9_.-]+/?$").unwrap();
}

/// Body shared by submission create and update.
#[derive(Debug, Deserialize, Validate)]
pub struct SubmissionRequest {
    #[validate(regex(
        path = *HTTP_URL_REGEX,
        message = "File link must be an http(s) URL"
    ))]
    pub file_url: Option<String>,

    #[validate(regex(
        path = *GITHUB_URL_REGEX,
        message = "GitHub link must be a https://github.com/owner/repo URL"
    ))]
    pub github_url: Option<String>,

    #[validate(length(max = 2000, message = "Overview must be at most 2000 characters"))]
    pub overview: Option<String>,
}

/// The subtask offer shown to a team for a round.
#[derive(Debug, Serialize, Default)]
pub struct OptionsResponse {
    pub subtasks: Vec<SubtaskResponse>,
    pub selected_subtask_id: Option<i64>,
}

#[derive(Debug, Serialize, Default)]
pub struct SelectionResponse {
    pub team_id: i64,
    pub round_id: i64,
    pub subtask_id: i64,
}

impl From<db::models::team_subtask_selection::Model> for SelectionResponse {
    fn from(selection: db::models::team_subtask_selection::Model) -> Self {
        Self {
            team_id: selection.team_id,
            round_id: selection.round_id,
            subtask_id: selection.subtask_id,
        }
    }
}
