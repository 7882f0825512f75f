use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Default)]
pub struct UserResponse {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub role: String,
    pub team_id: Option<i64>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<db::models::user::Model> for UserResponse {
    fn from(user: db::models::user::Model) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            role: user.role.to_string(),
            team_id: user.team_id,
            created_at: user.created_at.to_rfc3339(),
            updated_at: user.updated_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Serialize, Default)]
pub struct JudgeResponse {
    pub id: i64,
    pub user_id: i64,
    pub track: String,
}

impl From<db::models::judge::Model> for JudgeResponse {
    fn from(judge: db::models::judge::Model) -> Self {
        Self {
            id: judge.id,
            user_id: judge.user_id,
            track: judge.track,
        }
    }
}

#[derive(Debug, Serialize, Default)]
pub struct AssignmentResponse {
    pub id: i64,
    pub judge_id: i64,
    pub team_id: i64,
    pub round_id: i64,
}

impl From<db::models::judge_assignment::Model> for AssignmentResponse {
    fn from(assignment: db::models::judge_assignment::Model) -> Self {
        Self {
            id: assignment.id,
            judge_id: assignment.judge_id,
            team_id: assignment.team_id,
            round_id: assignment.round_id,
        }
    }
}

#[derive(Debug, Serialize, Default)]
pub struct ShortlistResponse {
    pub team_id: i64,
    pub round_id: i64,
}

impl From<db::models::shortlisted_team::Model> for ShortlistResponse {
    fn from(entry: db::models::shortlisted_team::Model) -> Self {
        Self {
            team_id: entry.team_id,
            round_id: entry.round_id,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct RoundRequest {
    pub number: i32,
    pub start_time: chrono::DateTime<chrono::Utc>,
    pub end_time: chrono::DateTime<chrono::Utc>,
}
