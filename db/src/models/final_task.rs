use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use sea_orm::QueryOrder;
use serde::Serialize;

/// The final-round task record. Treated as a singleton: `current` returns
/// the latest row, and releasing replaces any prior release.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "final_tasks")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub title: String,
    pub description: String,
    pub link: Option<String>,
    pub released: bool,
    pub released_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        panic!("No RelationDef implemented")
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub async fn create(
        db: &DbConn,
        title: &str,
        description: &str,
        link: Option<&str>,
        released: bool,
    ) -> Result<Model, DbErr> {
        let now = Utc::now();
        let active_model = ActiveModel {
            title: Set(title.to_owned()),
            description: Set(description.to_owned()),
            link: Set(link.map(str::to_owned)),
            released: Set(released),
            released_at: Set(released.then_some(now)),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        active_model.insert(db).await
    }

    pub async fn current(db: &DbConn) -> Result<Option<Model>, DbErr> {
        Entity::find().order_by_desc(Column::Id).one(db).await
    }

    pub async fn current_released(db: &DbConn) -> Result<Option<Model>, DbErr> {
        Entity::find()
            .filter(Column::Released.eq(true))
            .order_by_desc(Column::Id)
            .one(db)
            .await
    }
}
