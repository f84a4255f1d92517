//! 科研人员实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "research_profiles")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub profession: String,
    #[sea_orm(column_type = "Text")]
    pub research_interests: String,
    #[sea_orm(column_type = "Text")]
    pub research_scholars: String,
    #[sea_orm(column_type = "Text")]
    pub projects: String,
    pub image: Option<String>,
    #[sea_orm(column_type = "Text")]
    pub publications: String,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_research(self) -> crate::models::directory::entities::Research {
        use crate::models::directory::entities::Research;
        use chrono::{DateTime, Utc};

        Research {
            id: self.id,
            name: self.name,
            profession: self.profession,
            research_interests: self.research_interests,
            research_scholars: self.research_scholars,
            projects: self.projects,
            image: self.image,
            publications: self.publications,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
