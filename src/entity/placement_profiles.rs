//! 就业档案实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "placement_profiles")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub user_id: i64,
    pub cgpa: f64,
    pub percentage_10th: f64,
    pub percentage_12th: f64,
    pub is_placement_coordinator: bool,
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id"
    )]
    User,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_placement_profile(self) -> crate::models::placement::entities::PlacementProfile {
        use crate::models::placement::entities::PlacementProfile;
        use chrono::{DateTime, Utc};

        PlacementProfile {
            id: self.id,
            user_id: self.user_id,
            cgpa: self.cgpa,
            percentage_10th: self.percentage_10th,
            percentage_12th: self.percentage_12th,
            is_placement_coordinator: self.is_placement_coordinator,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
        }
    }
}
