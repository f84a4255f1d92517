//! 班级与科目存储操作

use super::{SeaOrmStorage, is_unique_violation};
use crate::entity::classes::{ActiveModel, Entity as Classes};
use crate::entity::subjects::{
    ActiveModel as SubjectActiveModel, Column as SubjectColumn, Entity as Subjects,
};
use crate::errors::{CampusError, Result};
use crate::models::classes::{
    entities::{Class, Subject},
    requests::CreateClassRequest,
};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 创建班级
    pub async fn create_class_impl(&self, req: CreateClassRequest) -> Result<Class> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            name: Set(req.name),
            description: Set(Some(req.description)),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model.insert(&self.db).await.map_err(|e| {
            if is_unique_violation(&e) {
                CampusError::conflict("班级名称已存在")
            } else {
                CampusError::database_operation(format!("创建班级失败: {e}"))
            }
        })?;

        Ok(result.into_class())
    }

    /// 通过 ID 获取班级
    pub async fn get_class_by_id_impl(&self, class_id: i64) -> Result<Option<Class>> {
        let result = Classes::find_by_id(class_id)
            .one(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("查询班级失败: {e}")))?;

        Ok(result.map(|m| m.into_class()))
    }

    /// 创建科目
    pub async fn create_subject_impl(
        &self,
        class_id: i64,
        name: &str,
        description: &str,
    ) -> Result<Subject> {
        let model = SubjectActiveModel {
            class_id: Set(class_id),
            name: Set(name.to_string()),
            description: Set(description.to_string()),
            created_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("创建科目失败: {e}")))?;

        Ok(result.into_subject())
    }

    pub async fn get_subject_by_id_impl(&self, subject_id: i64) -> Result<Option<Subject>> {
        let result = Subjects::find_by_id(subject_id)
            .one(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("查询科目失败: {e}")))?;

        Ok(result.map(|m| m.into_subject()))
    }

    pub async fn list_class_subjects_impl(&self, class_id: i64) -> Result<Vec<Subject>> {
        let subjects = Subjects::find()
            .filter(SubjectColumn::ClassId.eq(class_id))
            .order_by_asc(SubjectColumn::Id)
            .all(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("查询科目列表失败: {e}")))?;

        Ok(subjects.into_iter().map(|m| m.into_subject()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support;
    use crate::errors::CampusError;
    use crate::models::classes::requests::CreateClassRequest;

    fn class_req(name: &str) -> CreateClassRequest {
        CreateClassRequest {
            name: name.to_string(),
            description: String::new(),
        }
    }

    #[tokio::test]
    async fn test_class_name_is_unique() {
        let storage = test_support::storage().await;
        storage.create_class_impl(class_req("CSE-A")).await.unwrap();

        let err = storage.create_class_impl(class_req("CSE-A")).await.unwrap_err();
        assert!(matches!(err, CampusError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_subjects_are_scoped_to_class() {
        let storage = test_support::storage().await;
        let a = storage.create_class_impl(class_req("A")).await.unwrap();
        let b = storage.create_class_impl(class_req("B")).await.unwrap();

        storage.create_subject_impl(a.id, "Math", "").await.unwrap();
        storage.create_subject_impl(a.id, "Physics", "lab").await.unwrap();
        storage.create_subject_impl(b.id, "History", "").await.unwrap();

        let subjects = storage.list_class_subjects_impl(a.id).await.unwrap();
        let names: Vec<_> = subjects.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Math", "Physics"]);
    }
}
