use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use serde::Serialize;

/// A team's submission for a round. One per (team, round).
///
/// `locked` freezes the record against further team edits; judges and admins
/// still read it.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "submissions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub team_id: i64,
    pub round_id: i64,
    pub file_url: Option<String>,
    pub github_url: Option<String>,
    pub overview: Option<String>,
    pub locked: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
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
}

impl Related<super::team::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Team.def()
    }
}

impl Related<super::round::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Round.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub async fn create(
        db: &DbConn,
        team_id: i64,
        round_id: i64,
        file_url: Option<&str>,
        github_url: Option<&str>,
        overview: Option<&str>,
    ) -> Result<Model, DbErr> {
        let now = Utc::now();
        let active_model = ActiveModel {
            team_id: Set(team_id),
            round_id: Set(round_id),
            file_url: Set(file_url.map(str::to_owned)),
            github_url: Set(github_url.map(str::to_owned)),
            overview: Set(overview.map(str::to_owned)),
            locked: Set(false),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        active_model.insert(db).await
    }

    pub async fn find_by_team_and_round(
        db: &DbConn,
        team_id: i64,
        round_id: i64,
    ) -> Result<Option<Model>, DbErr> {
        Entity::find()
            .filter(Column::TeamId.eq(team_id))
            .filter(Column::RoundId.eq(round_id))
            .one(db)
            .await
    }
}
