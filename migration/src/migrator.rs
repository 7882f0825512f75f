use sea_orm_migration::prelude::*;

use crate::migrations;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(migrations::m202607150001_create_teams::Migration),
            Box::new(migrations::m202607150002_create_users::Migration),
            Box::new(migrations::m202607150003_create_rounds::Migration),
            Box::new(migrations::m202607150004_create_subtasks::Migration),
            Box::new(migrations::m202607150005_create_judges::Migration),
            Box::new(migrations::m202607150006_create_judge_assignments::Migration),
            Box::new(migrations::m202607150007_create_submissions::Migration),
            Box::new(migrations::m202607150008_create_scores::Migration),
            Box::new(migrations::m202607160001_create_shortlisted_teams::Migration),
            Box::new(migrations::m202607160002_create_team_subtask_selections::Migration),
            Box::new(migrations::m202607160003_create_team_subtask_displays::Migration),
            Box::new(migrations::m202607160004_create_round_options::Migration),
            Box::new(migrations::m202607160005_create_final_tasks::Migration),
        ]
    }
}
