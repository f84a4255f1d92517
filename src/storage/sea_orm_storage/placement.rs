//! 就业模块存储操作

use super::{SeaOrmStorage, is_unique_violation};
use crate::entity::placement_applications::{
    ActiveModel as ApplicationActiveModel, Column as ApplicationColumn,
    Entity as PlacementApplications,
};
use crate::entity::placement_companies::{
    ActiveModel as CompanyActiveModel, Column as CompanyColumn, Entity as PlacementCompanies,
};
use crate::entity::placement_profiles::{
    ActiveModel as ProfileActiveModel, Column as ProfileColumn, Entity as PlacementProfiles,
};
use crate::entity::users::Entity as Users;
use crate::errors::{CampusError, Result};
use crate::models::{
    placement::{
        eligibility::is_eligible,
        entities::{PlacementApplication, PlacementCompany, PlacementProfile},
        requests::CreateCompanyRequest,
    },
    users::entities::User,
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};

impl SeaOrmStorage {
    /// 创建就业档案，每个用户至多一份
    pub async fn create_placement_profile_impl(
        &self,
        user_id: i64,
        cgpa: f64,
        percentage_10th: f64,
        percentage_12th: f64,
    ) -> Result<PlacementProfile> {
        let model = ProfileActiveModel {
            user_id: Set(user_id),
            cgpa: Set(cgpa),
            percentage_10th: Set(percentage_10th),
            percentage_12th: Set(percentage_12th),
            is_placement_coordinator: Set(false),
            created_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        let result = model.insert(&self.db).await.map_err(|e| {
            if is_unique_violation(&e) {
                CampusError::conflict("就业档案已存在")
            } else {
                CampusError::database_operation(format!("创建就业档案失败: {e}"))
            }
        })?;

        Ok(result.into_placement_profile())
    }

    pub async fn get_placement_profile_impl(
        &self,
        user_id: i64,
    ) -> Result<Option<PlacementProfile>> {
        let result = PlacementProfiles::find()
            .filter(ProfileColumn::UserId.eq(user_id))
            .one(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("查询就业档案失败: {e}")))?;

        Ok(result.map(|m| m.into_placement_profile()))
    }

    /// 设置协调员标记，档案不存在时返回 false
    pub async fn set_placement_coordinator_impl(&self, user_id: i64, value: bool) -> Result<bool> {
        let result = PlacementProfiles::update_many()
            .col_expr(
                ProfileColumn::IsPlacementCoordinator,
                sea_orm::sea_query::Expr::value(value),
            )
            .filter(ProfileColumn::UserId.eq(user_id))
            .exec(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("更新协调员标记失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    pub async fn create_placement_company_impl(
        &self,
        req: CreateCompanyRequest,
    ) -> Result<PlacementCompany> {
        let model = CompanyActiveModel {
            name: Set(req.name),
            job_description: Set(req.job_description),
            min_cgpa: Set(req.min_cgpa),
            min_10th: Set(req.min_10th),
            min_12th: Set(req.min_12th),
            max_backlogs: Set(req.max_backlogs),
            package: Set(req.package),
            created_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("创建公司失败: {e}")))?;

        Ok(result.into_placement_company())
    }

    pub async fn get_placement_company_impl(
        &self,
        company_id: i64,
    ) -> Result<Option<PlacementCompany>> {
        let result = PlacementCompanies::find_by_id(company_id)
            .one(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("查询公司失败: {e}")))?;

        Ok(result.map(|m| m.into_placement_company()))
    }

    pub async fn list_placement_companies_impl(&self) -> Result<Vec<PlacementCompany>> {
        let companies = PlacementCompanies::find()
            .order_by_asc(CompanyColumn::Id)
            .all(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("查询公司列表失败: {e}")))?;

        Ok(companies
            .into_iter()
            .map(|m| m.into_placement_company())
            .collect())
    }

    pub async fn list_applied_company_ids_impl(&self, user_id: i64) -> Result<Vec<i64>> {
        PlacementApplications::find()
            .select_only()
            .column(ApplicationColumn::CompanyId)
            .filter(ApplicationColumn::UserId.eq(user_id))
            .into_tuple::<i64>()
            .all(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("查询投递记录失败: {e}")))
    }

    /// 投递
    ///
    /// 校验顺序：公司存在（NotFound）→ 未重复投递（Conflict）→
    /// 有档案且满足门槛（Authorization）。写入是一条独立的 INSERT，
    /// 并发重复投递由 (user_id, company_id) 唯一索引判定为 Conflict。
    /// SQLite WAL 下读后写的事务在并发时会以 BUSY_SNAPSHOT 失败，这里不开启事务。
    pub async fn apply_to_company_impl(
        &self,
        user_id: i64,
        company_id: i64,
    ) -> Result<PlacementApplication> {
        let company = PlacementCompanies::find_by_id(company_id)
            .one(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("查询公司失败: {e}")))?
            .ok_or_else(|| CampusError::not_found(format!("公司 {company_id} 不存在")))?
            .into_placement_company();

        let already_applied = PlacementApplications::find()
            .filter(
                Condition::all()
                    .add(ApplicationColumn::UserId.eq(user_id))
                    .add(ApplicationColumn::CompanyId.eq(company_id)),
            )
            .count(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("查询投递记录失败: {e}")))?;
        if already_applied > 0 {
            return Err(CampusError::conflict("已投递过该公司"));
        }

        let profile = PlacementProfiles::find()
            .filter(ProfileColumn::UserId.eq(user_id))
            .one(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("查询就业档案失败: {e}")))?
            .ok_or_else(|| CampusError::authorization("尚未创建就业档案"))?
            .into_placement_profile();

        if !is_eligible(&profile, &company) {
            return Err(CampusError::authorization("不满足该公司的投递条件"));
        }

        let snapshot = serde_json::to_string(&profile.snapshot())?;
        let model = ApplicationActiveModel {
            user_id: Set(user_id),
            company_id: Set(company_id),
            other_details: Set(snapshot),
            applied_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        let result = model.insert(&self.db).await.map_err(|e| {
            if is_unique_violation(&e) {
                CampusError::conflict("已投递过该公司")
            } else {
                CampusError::database_operation(format!("创建投递记录失败: {e}"))
            }
        })?;

        result.into_placement_application()
    }

    /// 某公司的全部投递（含投递人）
    pub async fn list_company_applications_impl(
        &self,
        company_id: i64,
    ) -> Result<Vec<(PlacementApplication, User)>> {
        let rows = PlacementApplications::find()
            .filter(ApplicationColumn::CompanyId.eq(company_id))
            .order_by_asc(ApplicationColumn::AppliedAt)
            .order_by_asc(ApplicationColumn::Id)
            .find_also_related(Users)
            .all(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("查询投递列表失败: {e}")))?;

        let mut items = Vec::with_capacity(rows.len());
        for (application, user) in rows {
            if let Some(user) = user {
                items.push((application.into_placement_application()?, user.into_user()));
            }
        }
        Ok(items)
    }
}

#[cfg(test)]
mod tests {
    use super::super::{SeaOrmStorage, test_support};
    use crate::errors::CampusError;
    use crate::models::placement::requests::CreateCompanyRequest;

    async fn company(storage: &SeaOrmStorage) -> i64 {
        storage
            .create_placement_company_impl(CreateCompanyRequest {
                name: "Acme".to_string(),
                job_description: "SDE".to_string(),
                min_cgpa: 8.0,
                min_10th: 85.0,
                min_12th: 85.0,
                max_backlogs: 0,
                package: 12.5,
            })
            .await
            .unwrap()
            .id
    }

    #[tokio::test]
    async fn test_second_profile_is_conflict() {
        let storage = test_support::storage().await;
        let user = test_support::user(&storage, "a").await;

        storage
            .create_placement_profile_impl(user.id, 8.5, 90.0, 88.0)
            .await
            .unwrap();
        let err = storage
            .create_placement_profile_impl(user.id, 9.0, 90.0, 88.0)
            .await
            .unwrap_err();
        assert!(matches!(err, CampusError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_apply_snapshots_profile_and_rejects_duplicate() {
        let storage = test_support::storage().await;
        let a = test_support::user(&storage, "a").await;
        storage
            .create_placement_profile_impl(a.id, 8.5, 90.0, 88.0)
            .await
            .unwrap();
        let company_id = company(&storage).await;

        let application = storage.apply_to_company_impl(a.id, company_id).await.unwrap();
        assert_eq!(application.other_details["cgpa"], 8.5);
        assert_eq!(application.other_details["user"], a.id);
        assert_eq!(application.other_details["is_placement_coordinator"], false);

        let err = storage
            .apply_to_company_impl(a.id, company_id)
            .await
            .unwrap_err();
        assert!(matches!(err, CampusError::Conflict(_)));

        let applications = storage
            .list_company_applications_impl(company_id)
            .await
            .unwrap();
        assert_eq!(applications.len(), 1);
        assert_eq!(applications[0].1.username, "a");
        assert_eq!(
            storage.list_applied_company_ids_impl(a.id).await.unwrap(),
            vec![company_id]
        );
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_duplicate_applies_yield_one_row() {
        let storage = test_support::file_storage().await;
        let a = test_support::user(&storage, "a").await;
        storage
            .create_placement_profile_impl(a.id, 8.5, 90.0, 88.0)
            .await
            .unwrap();
        let company_id = company(&storage).await;

        let user_id = a.id;
        let applies = (0..8).map(|_| {
            let storage = storage.clone();
            async move { storage.apply_to_company_impl(user_id, company_id).await }
        });
        let outcomes = futures_util::future::join_all(applies).await;

        let created = outcomes.iter().filter(|r| r.is_ok()).count();
        assert_eq!(created, 1);
        for outcome in outcomes.iter().filter(|r| r.is_err()) {
            assert!(matches!(outcome, Err(CampusError::Conflict(_))), "{outcome:?}");
        }
        assert_eq!(
            storage
                .list_company_applications_impl(company_id)
                .await
                .unwrap()
                .len(),
            1
        );
    }

    #[tokio::test]
    async fn test_ineligible_or_missing_profile_is_forbidden() {
        let storage = test_support::storage().await;
        let b = test_support::user(&storage, "b").await;
        let c = test_support::user(&storage, "c").await;
        storage
            .create_placement_profile_impl(b.id, 7.0, 90.0, 90.0)
            .await
            .unwrap();
        let company_id = company(&storage).await;

        let err = storage.apply_to_company_impl(b.id, company_id).await.unwrap_err();
        assert!(matches!(err, CampusError::Authorization(_)));
        let err = storage.apply_to_company_impl(c.id, company_id).await.unwrap_err();
        assert!(matches!(err, CampusError::Authorization(_)));

        assert!(
            storage
                .list_company_applications_impl(company_id)
                .await
                .unwrap()
                .is_empty()
        );
    }

    #[tokio::test]
    async fn test_apply_to_missing_company_is_not_found() {
        let storage = test_support::storage().await;
        let a = test_support::user(&storage, "a").await;

        let err = storage.apply_to_company_impl(a.id, 42).await.unwrap_err();
        assert!(matches!(err, CampusError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_set_coordinator_flag() {
        let storage = test_support::storage().await;
        let a = test_support::user(&storage, "a").await;
        assert!(!storage.set_placement_coordinator_impl(a.id, true).await.unwrap());

        storage
            .create_placement_profile_impl(a.id, 8.0, 80.0, 80.0)
            .await
            .unwrap();
        assert!(storage.set_placement_coordinator_impl(a.id, true).await.unwrap());
        let profile = storage.get_placement_profile_impl(a.id).await.unwrap().unwrap();
        assert!(profile.is_placement_coordinator);
    }
}
