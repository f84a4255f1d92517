//! 考试与成绩存储操作

use std::collections::BTreeSet;

use super::{SeaOrmStorage, is_unique_violation};
use crate::entity::exam_results::{
    ActiveModel as ExamResultActiveModel, Column as ExamResultColumn, Entity as ExamResults,
};
use crate::entity::exams::{ActiveModel, Column, Entity as Exams};
use crate::entity::users::{Column as UserColumn, Entity as Users};
use crate::errors::{CampusError, Result};
use crate::models::exams::{
    entities::{Exam, ExamResult, ExamResultMap},
    requests::PublishResultEntry,
};
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, QuerySelect, Set,
    TransactionTrait,
};

impl SeaOrmStorage {
    /// 创建考试，科目归属由服务层校验
    pub async fn create_exam_impl(
        &self,
        class_id: i64,
        subject_id: i64,
        name: &str,
        description: &str,
    ) -> Result<Exam> {
        let model = ActiveModel {
            class_id: Set(class_id),
            subject_id: Set(subject_id),
            name: Set(name.to_string()),
            description: Set(description.to_string()),
            created_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("创建考试失败: {e}")))?;

        Ok(result.into_exam())
    }

    pub async fn get_exam_by_id_impl(&self, exam_id: i64) -> Result<Option<Exam>> {
        let result = Exams::find_by_id(exam_id)
            .one(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("查询考试失败: {e}")))?;

        Ok(result.map(|m| m.into_exam()))
    }

    pub async fn list_subject_exams_impl(&self, subject_id: i64) -> Result<Vec<Exam>> {
        let exams = Exams::find()
            .filter(Column::SubjectId.eq(subject_id))
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("查询考试列表失败: {e}")))?;

        Ok(exams.into_iter().map(|m| m.into_exam()).collect())
    }

    /// 发布成绩
    ///
    /// 在同一事务内校验所有学生并按学生 upsert；任一学生不存在时整批回滚。
    /// 首次发布时两个请求同时插入成绩行，后者撞上 exam_id 唯一索引，重试一次走更新分支。
    pub async fn publish_exam_results_impl(
        &self,
        exam_id: i64,
        entries: Vec<PublishResultEntry>,
    ) -> Result<ExamResult> {
        if let Some(result) = self.try_publish_exam_results(exam_id, &entries).await? {
            return Ok(result);
        }
        self.try_publish_exam_results(exam_id, &entries)
            .await?
            .ok_or_else(|| CampusError::database_operation("保存考试成绩失败: 成绩行写入冲突"))
    }

    /// 返回 None 表示插入成绩行时与并发的首次发布冲突
    async fn try_publish_exam_results(
        &self,
        exam_id: i64,
        entries: &[PublishResultEntry],
    ) -> Result<Option<ExamResult>> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| CampusError::database_operation(format!("开启事务失败: {e}")))?;

        let now = chrono::Utc::now().timestamp();

        // 先写后读：SQLite 上立即取得写锁，PostgreSQL/MySQL 上锁住已有成绩行
        ExamResults::update_many()
            .col_expr(ExamResultColumn::UpdatedAt, Expr::value(now))
            .filter(ExamResultColumn::ExamId.eq(exam_id))
            .exec(&txn)
            .await
            .map_err(|e| CampusError::database_operation(format!("锁定考试成绩失败: {e}")))?;

        let student_ids: BTreeSet<i64> = entries.iter().map(|e| e.student_id).collect();
        let found: BTreeSet<i64> = Users::find()
            .select_only()
            .column(UserColumn::Id)
            .filter(UserColumn::Id.is_in(student_ids.iter().copied()))
            .into_tuple::<i64>()
            .all(&txn)
            .await
            .map_err(|e| CampusError::database_operation(format!("查询学生失败: {e}")))?
            .into_iter()
            .collect();

        if let Some(missing) = student_ids.difference(&found).next() {
            return Err(CampusError::not_found(format!("学生 {missing} 不存在")));
        }

        let existing = ExamResults::find()
            .filter(ExamResultColumn::ExamId.eq(exam_id))
            .lock_exclusive()
            .one(&txn)
            .await
            .map_err(|e| CampusError::database_operation(format!("查询考试成绩失败: {e}")))?;

        let mut results = match &existing {
            Some(model) => ExamResultMap::from_json(&model.results)?,
            None => ExamResultMap::default(),
        };
        for entry in entries {
            results.upsert(entry.student_id, entry.marks, entry.grade.clone());
        }

        let saved = match existing {
            Some(model) => ExamResultActiveModel {
                id: Set(model.id),
                results: Set(results.to_json()?),
                updated_at: Set(now),
                ..Default::default()
            }
            .update(&txn)
            .await
            .map_err(|e| CampusError::database_operation(format!("保存考试成绩失败: {e}")))?,
            None => {
                let inserted = ExamResultActiveModel {
                    exam_id: Set(exam_id),
                    results: Set(results.to_json()?),
                    updated_at: Set(now),
                    ..Default::default()
                }
                .insert(&txn)
                .await;
                match inserted {
                    Ok(model) => model,
                    Err(e) if is_unique_violation(&e) => return Ok(None),
                    Err(e) => {
                        return Err(CampusError::database_operation(format!(
                            "保存考试成绩失败: {e}"
                        )));
                    }
                }
            }
        };

        txn.commit()
            .await
            .map_err(|e| CampusError::database_operation(format!("提交事务失败: {e}")))?;

        saved.into_exam_result().map(Some)
    }

    pub async fn get_exam_result_impl(&self, exam_id: i64) -> Result<Option<ExamResult>> {
        let result = ExamResults::find()
            .filter(ExamResultColumn::ExamId.eq(exam_id))
            .one(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("查询考试成绩失败: {e}")))?;

        result.map(|m| m.into_exam_result()).transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::super::{SeaOrmStorage, test_support};
    use crate::errors::CampusError;
    use crate::models::{
        classes::requests::CreateClassRequest, exams::requests::PublishResultEntry,
    };

    async fn exam(storage: &SeaOrmStorage) -> i64 {
        let class = storage
            .create_class_impl(CreateClassRequest {
                name: "CSE".to_string(),
                description: String::new(),
            })
            .await
            .unwrap();
        let subject = storage.create_subject_impl(class.id, "Math", "").await.unwrap();
        storage
            .create_exam_impl(class.id, subject.id, "Midterm", "")
            .await
            .unwrap()
            .id
    }

    fn entry(student_id: i64, marks: f64, grade: Option<&str>) -> PublishResultEntry {
        PublishResultEntry {
            student_id,
            marks,
            grade: grade.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn test_publish_twice_overwrites_single_student() {
        let storage = test_support::storage().await;
        let a = test_support::user(&storage, "a").await;
        let b = test_support::user(&storage, "b").await;
        let exam_id = exam(&storage).await;

        storage
            .publish_exam_results_impl(
                exam_id,
                vec![entry(a.id, 60.0, Some("C")), entry(b.id, 75.0, Some("B"))],
            )
            .await
            .unwrap();
        let result = storage
            .publish_exam_results_impl(exam_id, vec![entry(a.id, 88.0, Some("A"))])
            .await
            .unwrap();

        assert_eq!(result.results.len(), 2);
        assert_eq!(result.results.get(a.id).unwrap().marks, 88.0);
        assert_eq!(result.results.get(b.id).unwrap().grade.as_deref(), Some("B"));

        let stored = storage.get_exam_result_impl(exam_id).await.unwrap().unwrap();
        assert_eq!(stored.results, result.results);
    }

    #[tokio::test]
    async fn test_unknown_student_writes_nothing() {
        let storage = test_support::storage().await;
        let a = test_support::user(&storage, "a").await;
        let exam_id = exam(&storage).await;

        let err = storage
            .publish_exam_results_impl(exam_id, vec![entry(a.id, 50.0, None), entry(404, 1.0, None)])
            .await
            .unwrap_err();
        assert!(matches!(err, CampusError::NotFound(_)));
        assert!(storage.get_exam_result_impl(exam_id).await.unwrap().is_none());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_publishes_keep_every_student() {
        let storage = test_support::file_storage().await;
        let exam_id = exam(&storage).await;
        let mut students = Vec::new();
        for i in 0..20 {
            students.push(test_support::user(&storage, &format!("s{i}")).await.id);
        }

        let publishes = students.iter().map(|&id| {
            let storage = storage.clone();
            async move {
                storage
                    .publish_exam_results_impl(exam_id, vec![entry(id, 70.0, None)])
                    .await
            }
        });
        let outcomes = futures_util::future::join_all(publishes).await;

        for outcome in &outcomes {
            assert!(outcome.is_ok(), "{outcome:?}");
        }
        let stored = storage.get_exam_result_impl(exam_id).await.unwrap().unwrap();
        assert_eq!(stored.results.len(), students.len());
    }

    #[tokio::test]
    async fn test_list_subject_exams() {
        let storage = test_support::storage().await;
        let exam_id = exam(&storage).await;
        let exam = storage.get_exam_by_id_impl(exam_id).await.unwrap().unwrap();

        let exams = storage.list_subject_exams_impl(exam.subject_id).await.unwrap();
        assert_eq!(exams.len(), 1);
        assert_eq!(exams[0].name, "Midterm");
        assert!(storage.list_subject_exams_impl(999).await.unwrap().is_empty());
    }
}
