mod admin_test;
mod health_test;
mod judge_test;
mod team_test;
