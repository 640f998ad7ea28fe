use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A like event. Carries no payload beyond the attraction it points at.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "Like")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_name = "attractionId")]
    pub attraction_id: i32,
    #[sea_orm(column_name = "createdAt")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::attraction::Entity",
        from = "Column::AttractionId",
        to = "super::attraction::Column::Id"
    )]
    Attraction,
}

impl Related<super::attraction::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Attraction.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
