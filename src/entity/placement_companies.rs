//! 招聘公司实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "placement_companies")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    #[sea_orm(column_type = "Text")]
    pub job_description: String,
    pub min_cgpa: f64,
    pub min_10th: f64,
    pub min_12th: f64,
    pub max_backlogs: i32,
    pub package: f64,
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::placement_applications::Entity")]
    Applications,
}

impl Related<super::placement_applications::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Applications.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_placement_company(self) -> crate::models::placement::entities::PlacementCompany {
        use crate::models::placement::entities::PlacementCompany;
        use chrono::{DateTime, Utc};

        PlacementCompany {
            id: self.id,
            name: self.name,
            job_description: self.job_description,
            min_cgpa: self.min_cgpa,
            min_10th: self.min_10th,
            min_12th: self.min_12th,
            max_backlogs: self.max_backlogs,
            package: self.package,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
        }
    }
}
