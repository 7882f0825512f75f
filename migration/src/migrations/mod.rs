pub mod m202607150001_create_teams;
pub mod m202607150002_create_users;
pub mod m202607150003_create_rounds;
pub mod m202607150004_create_subtasks;
pub mod m202607150005_create_judges;
pub mod m202607150006_create_judge_assignments;
pub mod m202607150007_create_submissions;
pub mod m202607150008_create_scores;
pub mod m202607160001_create_shortlisted_teams;
pub mod m202607160002_create_team_subtask_selections;
pub mod m202607160003_create_team_subtask_displays;
pub mod m202607160004_create_round_options;
pub mod m202607160005_create_final_tasks;
