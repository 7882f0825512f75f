use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use serde::Serialize;

/// The subtask offer made to a team for a round: the ids drawn for display
/// and, once committed, the one selected. Unique per (team, round), so the
/// same offer is returned on every revisit.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "round_options")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub team_id: i64,
    pub round_id: i64,
    /// JSON array of subtask ids, in draw order.
    pub offered_subtask_ids: Json,
    pub selected_subtask_id: Option<i64>,
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
        offered: &[i64],
    ) -> Result<Model, DbErr> {
        let now = Utc::now();
        let active_model = ActiveModel {
            team_id: Set(team_id),
            round_id: Set(round_id),
            offered_subtask_ids: Set(serde_json::json!(offered)),
            selected_subtask_id: Set(None),
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

    /// The offered subtask ids decoded from the JSON column.
    pub fn offered_ids(&self) -> Vec<i64> {
        self.offered_subtask_ids
            .as_array()
            .map(|ids| ids.iter().filter_map(|v| v.as_i64()).collect())
            .unwrap_or_default()
    }

    pub async fn set_selected(db: &DbConn, id: i64, subtask_id: i64) -> Result<Model, DbErr> {
        let model = Entity::find_by_id(id).one(db).await?;

        let model = match model {
            Some(m) => m,
            None => return Err(DbErr::RecordNotFound("Round options not found".to_string())),
        };

        let mut active_model: ActiveModel = model.into();
        active_model.selected_subtask_id = Set(Some(subtask_id));
        active_model.updated_at = Set(Utc::now());
        active_model.update(db).await
    }
}
