//! 教师名录实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "faculty")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub profession: String,
    #[sea_orm(column_type = "Text")]
    pub about: String,
    #[sea_orm(column_type = "Text")]
    pub qualifications: String,
    pub experience: i32,
    pub branch: String,
    #[sea_orm(column_type = "Text")]
    pub projects: String,
    pub image: Option<String>,
    pub path: String,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_faculty(self) -> crate::models::directory::entities::Faculty {
        use crate::models::directory::entities::Faculty;
        use chrono::{DateTime, Utc};

        Faculty {
            id: self.id,
            name: self.name,
            profession: self.profession,
            about: self.about,
            qualifications: self.qualifications,
            experience: self.experience,
            branch: self.branch,
            projects: self.projects,
            image: self.image,
            path: self.path,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
