//! 投递记录实体，other_details 为投递时的档案快照（JSON 文本）

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "placement_applications")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub user_id: i64,
    pub company_id: i64,
    #[sea_orm(column_type = "Text")]
    pub other_details: String,
    pub applied_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id"
    )]
    User,
    #[sea_orm(
        belongs_to = "super::placement_companies::Entity",
        from = "Column::CompanyId",
        to = "super::placement_companies::Column::Id"
    )]
    Company,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::placement_companies::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Company.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_placement_application(
        self,
    ) -> crate::errors::Result<crate::models::placement::entities::PlacementApplication> {
        use crate::models::placement::entities::PlacementApplication;
        use chrono::{DateTime, Utc};

        Ok(PlacementApplication {
            id: self.id,
            user_id: self.user_id,
            company_id: self.company_id,
            other_details: serde_json::from_str(&self.other_details)?,
            applied_at: DateTime::<Utc>::from_timestamp(self.applied_at, 0).unwrap_or_default(),
        })
    }
}
