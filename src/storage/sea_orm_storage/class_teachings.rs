//! 班级成员关系存储操作

use super::{SeaOrmStorage, is_unique_violation};
use crate::entity::class_teachings::{ActiveModel, Column, Entity as ClassTeachings};
use crate::entity::users::Entity as Users;
use crate::errors::{CampusError, Result};
use crate::models::{
    class_teachings::entities::{ClassRole, ClassTeaching},
    classes::entities::Class,
    users::entities::User,
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    Set,
};

impl SeaOrmStorage {
    /// 获取用户在班级中的成员关系
    pub async fn get_class_teaching_impl(
        &self,
        user_id: i64,
        class_id: i64,
    ) -> Result<Option<ClassTeaching>> {
        let result = ClassTeachings::find()
            .filter(
                Condition::all()
                    .add(Column::UserId.eq(user_id))
                    .add(Column::ClassId.eq(class_id)),
            )
            .one(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("查询班级成员失败: {e}")))?;

        Ok(result.map(|m| m.into_class_teaching()))
    }

    /// 唯一的授权判断：存在对应角色的成员记录
    pub async fn has_class_role_impl(
        &self,
        user_id: i64,
        class_id: i64,
        role: ClassRole,
    ) -> Result<bool> {
        let count = ClassTeachings::find()
            .filter(
                Condition::all()
                    .add(Column::UserId.eq(user_id))
                    .add(Column::ClassId.eq(class_id))
                    .add(Column::Role.eq(role.to_string())),
            )
            .count(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("查询班级角色失败: {e}")))?;

        Ok(count > 0)
    }

    /// 添加成员，依赖 (class_id, user_id) 唯一索引拒绝重复
    pub async fn add_class_member_impl(
        &self,
        class_id: i64,
        user_id: i64,
        role: ClassRole,
    ) -> Result<ClassTeaching> {
        let model = ActiveModel {
            class_id: Set(class_id),
            user_id: Set(user_id),
            role: Set(role.to_string()),
            joined_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        let result = model.insert(&self.db).await.map_err(|e| {
            if is_unique_violation(&e) {
                CampusError::conflict("该用户已在班级中")
            } else {
                CampusError::database_operation(format!("添加班级成员失败: {e}"))
            }
        })?;

        Ok(result.into_class_teaching())
    }

    /// 列出班级成员（含用户信息）
    pub async fn list_class_members_impl(
        &self,
        class_id: i64,
    ) -> Result<Vec<(ClassTeaching, User)>> {
        let rows = ClassTeachings::find()
            .filter(Column::ClassId.eq(class_id))
            .order_by_asc(Column::JoinedAt)
            .order_by_asc(Column::Id)
            .find_also_related(Users)
            .all(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("查询班级成员列表失败: {e}")))?;

        Ok(rows
            .into_iter()
            .filter_map(|(member, user)| {
                user.map(|u| (member.into_class_teaching(), u.into_user()))
            })
            .collect())
    }

    /// 列出用户所在的班级及其角色
    pub async fn list_user_classes_impl(&self, user_id: i64) -> Result<Vec<(Class, ClassRole)>> {
        use crate::entity::classes::Entity as Classes;

        let rows = ClassTeachings::find()
            .filter(Column::UserId.eq(user_id))
            .order_by_asc(Column::ClassId)
            .find_also_related(Classes)
            .all(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("查询用户班级失败: {e}")))?;

        Ok(rows
            .into_iter()
            .filter_map(|(member, class)| {
                let role = member.into_class_teaching().role;
                class.map(|c| (c.into_class(), role))
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support;
    use crate::errors::CampusError;
    use crate::models::{
        class_teachings::entities::ClassRole, classes::requests::CreateClassRequest,
    };

    async fn class(storage: &super::SeaOrmStorage, name: &str) -> i64 {
        storage
            .create_class_impl(CreateClassRequest {
                name: name.to_string(),
                description: String::new(),
            })
            .await
            .unwrap()
            .id
    }

    #[tokio::test]
    async fn test_has_class_role_follows_membership_row() {
        let storage = test_support::storage().await;
        let teacher = test_support::user(&storage, "teacher").await;
        let student = test_support::user(&storage, "student").await;
        let class_id = class(&storage, "CSE-A").await;

        storage
            .add_class_member_impl(class_id, teacher.id, ClassRole::Teacher)
            .await
            .unwrap();
        storage
            .add_class_member_impl(class_id, student.id, ClassRole::Student)
            .await
            .unwrap();

        assert!(storage.has_class_role_impl(teacher.id, class_id, ClassRole::Teacher).await.unwrap());
        assert!(!storage.has_class_role_impl(student.id, class_id, ClassRole::Teacher).await.unwrap());
        assert!(!storage.has_class_role_impl(teacher.id, class_id + 1, ClassRole::Teacher).await.unwrap());
    }

    #[tokio::test]
    async fn test_enrolling_twice_is_conflict_regardless_of_role() {
        let storage = test_support::storage().await;
        let user = test_support::user(&storage, "s").await;
        let class_id = class(&storage, "CSE-B").await;

        storage
            .add_class_member_impl(class_id, user.id, ClassRole::Student)
            .await
            .unwrap();
        let err = storage
            .add_class_member_impl(class_id, user.id, ClassRole::Teacher)
            .await
            .unwrap_err();
        assert!(matches!(err, CampusError::Conflict(_)));

        let members = storage.list_class_members_impl(class_id).await.unwrap();
        assert_eq!(members.len(), 1);
        assert_eq!(members[0].0.role, ClassRole::Student);
        assert_eq!(members[0].1.id, user.id);
    }

    #[tokio::test]
    async fn test_list_user_classes_carries_role() {
        let storage = test_support::storage().await;
        let user = test_support::user(&storage, "t").await;
        let a = class(&storage, "A").await;
        let b = class(&storage, "B").await;
        class(&storage, "C").await;

        storage.add_class_member_impl(a, user.id, ClassRole::Teacher).await.unwrap();
        storage.add_class_member_impl(b, user.id, ClassRole::Student).await.unwrap();

        let classes = storage.list_user_classes_impl(user.id).await.unwrap();
        assert_eq!(classes.len(), 2);
        assert_eq!(classes[0].0.name, "A");
        assert_eq!(classes[0].1, ClassRole::Teacher);
        assert_eq!(classes[1].1, ClassRole::Student);
    }
}
