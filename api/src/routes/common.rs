//! Response shapes shared across portal route groups.

use serde::Serialize;

#[derive(Debug, Serialize, Default)]
pub struct RoundResponse {
    pub id: i64,
    pub number: i32,
    pub start_time: String,
    pub end_time: String,
    pub is_active: bool,
    pub submissions_enabled: bool,
}

impl From<db::models::round::Model> for RoundResponse {
    fn from(round: db::models::round::Model) -> Self {
        Self {
            id: round.id,
            number: round.number,
            start_time: round.start_time.to_rfc3339(),
            end_time: round.end_time.to_rfc3339(),
            is_active: round.is_active,
            submissions_enabled: round.submissions_enabled,
        }
    }
}

#[derive(Debug, Serialize, Default)]
pub struct SubtaskResponse {
    pub id: i64,
    pub round_id: i64,
    pub title: String,
    pub description: String,
}

impl From<db::models::subtask::Model> for SubtaskResponse {
    fn from(subtask: db::models::subtask::Model) -> Self {
        Self {
            id: subtask.id,
            round_id: subtask.round_id,
            title: subtask.title,
            description: subtask.description,
        }
    }
}

#[derive(Debug, Serialize, Default)]
pub struct SubmissionResponse {
    pub id: i64,
    pub team_id: i64,
    pub round_id: i64,
    pub file_url: Option<String>,
    pub github_url: Option<String>,
    pub overview: Option<String>,
    pub locked: bool,
    pub created_at: String,
    pub updated_at: String,
}

impl From<db::models::submission::Model> for SubmissionResponse {
    fn from(submission: db::models::submission::Model) -> Self {
        Self {
            id: submission.id,
            team_id: submission.team_id,
            round_id: submission.round_id,
            file_url: submission.file_url,
            github_url: submission.github_url,
            overview: submission.overview,
            locked: submission.locked,
            created_at: submission.created_at.to_rfc3339(),
            updated_at: submission.updated_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Serialize, Default)]
pub struct ScoreResponse {
    pub id: i64,
    pub judge_id: i64,
    pub team_id: i64,
    pub round_id: i64,
    pub value: i32,
    pub remarks: Option<String>,
}

impl From<db::models::score::Model> for ScoreResponse {
    fn from(score: db::models::score::Model) -> Self {
        Self {
            id: score.id,
            judge_id: score.judge_id,
            team_id: score.team_id,
            round_id: score.round_id,
            value: score.value,
            remarks: score.remarks,
        }
    }
}

#[derive(Debug, Serialize, Default)]
pub struct FinalTaskResponse {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub link: Option<String>,
    pub released: bool,
    pub released_at: Option<String>,
}

impl From<db::models::final_task::Model> for FinalTaskResponse {
    fn from(task: db::models::final_task::Model) -> Self {
        Self {
            id: task.id,
            title: task.title,
            description: task.description,
            link: task.link,
            released: task.released,
            released_at: task.released_at.map(|t| t.to_rfc3339()),
        }
    }
}

#[derive(Debug, Serialize, Default)]
pub struct TeamResponse {
    pub id: i64,
    pub name: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<db::models::team::Model> for TeamResponse {
    fn from(team: db::models::team::Model) -> Self {
        Self {
            id: team.id,
            name: team.name,
            created_at: team.created_at.to_rfc3339(),
            updated_at: team.updated_at.to_rfc3339(),
        }
    }
}
