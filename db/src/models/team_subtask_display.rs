use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use serde::Serialize;

/// Marker: the subtask has been shown to the team for the round.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "team_subtask_displays")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub team_id: i64,

    #[sea_orm(primary_key, auto_increment = false)]
    pub round_id: i64,

    #[sea_orm(primary_key, auto_increment = false)]
    pub subtask_id: i64,

    pub created_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::team::Entity",
        from = "Column::TeamId",
        to = "super::team::Column::Id"
    )]
    Team,

    #[sea_orm(
        belongs_to = "super::round::Entity",
        from = "Column::RoundId",
        to = "super::round::Column::Id"
    )]
    Round,

    #[sea_orm(
        belongs_to = "super::subtask::Entity",
        from = "Column::SubtaskId",
        to = "super::subtask::Column::Id"
    )]
    Subtask,
}

impl Related<super::subtask::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Subtask.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub async fn record(
        db: &DbConn,
        team_id: i64,
        round_id: i64,
        subtask_id: i64,
    ) -> Result<Model, DbErr> {
        let active_model = ActiveModel {
            team_id: Set(team_id),
            round_id: Set(round_id),
            subtask_id: Set(subtask_id),
            created_at: Set(Utc::now()),
        };

        active_model.insert(db).await
    }

    pub async fn find_for_team_and_round(
        db: &DbConn,
        team_id: i64,
        round_id: i64,
    ) -> Result<Vec<Model>, DbErr> {
        Entity::find()
            .filter(Column::TeamId.eq(team_id))
            .filter(Column::RoundId.eq(round_id))
            .all(db)
            .await
    }
}
