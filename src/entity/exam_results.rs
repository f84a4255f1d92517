//! 考试成绩实体，results 为 JSON 文本

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "exam_results")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub exam_id: i64,
    #[sea_orm(column_type = "Text")]
    pub results: String,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::exams::Entity",
        from = "Column::ExamId",
        to = "super::exams::Column::Id"
    )]
    Exam,
}

impl Related<super::exams::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Exam.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_exam_result(
        self,
    ) -> crate::errors::Result<crate::models::exams::entities::ExamResult> {
        use crate::models::exams::entities::{ExamResult, ExamResultMap};
        use chrono::{DateTime, Utc};

        Ok(ExamResult {
            id: self.id,
            exam_id: self.exam_id,
            results: ExamResultMap::from_json(&self.results)?,
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        })
    }
}
