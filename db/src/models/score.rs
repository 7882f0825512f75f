use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use serde::Serialize;

/// A judge's score for a team in a round. Unique per (judge, team, round);
/// the database index backs the invariant, insert surfaces the violation.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "scores")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub judge_id: i64,
    pub team_id: i64,
    pub round_id: i64,
    pub value: i32,
    pub remarks: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::judge::Entity",
        from = "Column::JudgeId",
        to = "super::judge::Column::Id"
    )]
    Judge,

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
}

impl Related<super::judge::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Judge.def()
    }
}

impl Related<super::team::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Team.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub async fn create(
        db: &DbConn,
        judge_id: i64,
        team_id: i64,
        round_id: i64,
        value: i32,
        remarks: Option<&str>,
    ) -> Result<Model, DbErr> {
        let now = Utc::now();
        let active_model = ActiveModel {
            judge_id: Set(judge_id),
            team_id: Set(team_id),
            round_id: Set(round_id),
            value: Set(value),
            remarks: Set(remarks.map(str::to_owned)),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        active_model.insert(db).await
    }

    pub async fn find_for_round(db: &DbConn, round_id: i64) -> Result<Vec<Model>, DbErr> {
        Entity::find()
            .filter(Column::RoundId.eq(round_id))
            .all(db)
            .await
    }
}
