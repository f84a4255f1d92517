//! 教师 / 科研名录存储操作

use super::SeaOrmStorage;
use crate::entity::faculty::{ActiveModel as FacultyActiveModel, Column as FacultyColumn, Entity as Faculty};
use crate::entity::research_profiles::{
    ActiveModel as ResearchActiveModel, Column as ResearchColumn, Entity as ResearchProfiles,
};
use crate::errors::{CampusError, Result};
use crate::models::{
    PaginatedResponse, PaginationInfo,
    directory::{
        entities::{Faculty as FacultyEntry, Research},
        requests::{FacultyRequest, ResearchRequest},
    },
};
use sea_orm::{ActiveModelTrait, EntityTrait, PaginatorTrait, QueryOrder, Set};

impl SeaOrmStorage {
    pub async fn create_faculty_impl(&self, req: FacultyRequest) -> Result<FacultyEntry> {
        let now = chrono::Utc::now().timestamp();

        let model = FacultyActiveModel {
            name: Set(req.name),
            profession: Set(req.profession),
            about: Set(req.about),
            qualifications: Set(req.qualifications),
            experience: Set(req.experience),
            branch: Set(req.branch),
            projects: Set(req.projects),
            image: Set(req.image),
            path: Set(req.path),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("创建教师条目失败: {e}")))?;

        Ok(result.into_faculty())
    }

    pub async fn get_faculty_by_id_impl(&self, id: i64) -> Result<Option<FacultyEntry>> {
        let result = Faculty::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("查询教师条目失败: {e}")))?;

        Ok(result.map(|m| m.into_faculty()))
    }

    /// 分页列出教师条目
    pub async fn list_faculty_impl(
        &self,
        page: u64,
        size: u64,
    ) -> Result<PaginatedResponse<FacultyEntry>> {
        let paginator = Faculty::find()
            .order_by_asc(FacultyColumn::Id)
            .paginate(&self.db, size);

        let total = paginator
            .num_items()
            .await
            .map_err(|e| CampusError::database_operation(format!("查询教师总数失败: {e}")))?;
        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| CampusError::database_operation(format!("查询教师页数失败: {e}")))?;
        let items = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| CampusError::database_operation(format!("查询教师列表失败: {e}")))?;

        Ok(PaginatedResponse {
            items: items.into_iter().map(|m| m.into_faculty()).collect(),
            pagination: PaginationInfo::new(page, size, total, pages),
        })
    }

    /// 整体替换教师条目
    pub async fn update_faculty_impl(
        &self,
        id: i64,
        req: FacultyRequest,
    ) -> Result<Option<FacultyEntry>> {
        if self.get_faculty_by_id_impl(id).await?.is_none() {
            return Ok(None);
        }

        let model = FacultyActiveModel {
            id: Set(id),
            name: Set(req.name),
            profession: Set(req.profession),
            about: Set(req.about),
            qualifications: Set(req.qualifications),
            experience: Set(req.experience),
            branch: Set(req.branch),
            projects: Set(req.projects),
            image: Set(req.image),
            path: Set(req.path),
            updated_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("更新教师条目失败: {e}")))?;

        Ok(Some(result.into_faculty()))
    }

    pub async fn delete_faculty_impl(&self, id: i64) -> Result<bool> {
        let result = Faculty::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("删除教师条目失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    pub async fn create_research_impl(&self, req: ResearchRequest) -> Result<Research> {
        let now = chrono::Utc::now().timestamp();

        let model = ResearchActiveModel {
            name: Set(req.name),
            profession: Set(req.profession),
            research_interests: Set(req.research_interests),
            research_scholars: Set(req.research_scholars),
            projects: Set(req.projects),
            image: Set(req.image),
            publications: Set(req.publications),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("创建科研条目失败: {e}")))?;

        Ok(result.into_research())
    }

    pub async fn get_research_by_id_impl(&self, id: i64) -> Result<Option<Research>> {
        let result = ResearchProfiles::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("查询科研条目失败: {e}")))?;

        Ok(result.map(|m| m.into_research()))
    }

    pub async fn list_research_impl(
        &self,
        page: u64,
        size: u64,
    ) -> Result<PaginatedResponse<Research>> {
        let paginator = ResearchProfiles::find()
            .order_by_asc(ResearchColumn::Id)
            .paginate(&self.db, size);

        let total = paginator
            .num_items()
            .await
            .map_err(|e| CampusError::database_operation(format!("查询科研总数失败: {e}")))?;
        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| CampusError::database_operation(format!("查询科研页数失败: {e}")))?;
        let items = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| CampusError::database_operation(format!("查询科研列表失败: {e}")))?;

        Ok(PaginatedResponse {
            items: items.into_iter().map(|m| m.into_research()).collect(),
            pagination: PaginationInfo::new(page, size, total, pages),
        })
    }

    pub async fn update_research_impl(
        &self,
        id: i64,
        req: ResearchRequest,
    ) -> Result<Option<Research>> {
        if self.get_research_by_id_impl(id).await?.is_none() {
            return Ok(None);
        }

        let model = ResearchActiveModel {
            id: Set(id),
            name: Set(req.name),
            profession: Set(req.profession),
            research_interests: Set(req.research_interests),
            research_scholars: Set(req.research_scholars),
            projects: Set(req.projects),
            image: Set(req.image),
            publications: Set(req.publications),
            updated_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("更新科研条目失败: {e}")))?;

        Ok(Some(result.into_research()))
    }

    pub async fn delete_research_impl(&self, id: i64) -> Result<bool> {
        let result = ResearchProfiles::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("删除科研条目失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support;
    use crate::models::directory::requests::{FacultyRequest, ResearchRequest};

    fn faculty(name: &str) -> FacultyRequest {
        FacultyRequest {
            name: name.to_string(),
            profession: "Professor".to_string(),
            about: String::new(),
            qualifications: "PhD".to_string(),
            experience: 5,
            branch: "General".to_string(),
            projects: String::new(),
            image: None,
            path: "/home".to_string(),
        }
    }

    #[tokio::test]
    async fn test_faculty_crud_and_pagination() {
        let storage = test_support::storage().await;
        for i in 0..3 {
            storage.create_faculty_impl(faculty(&format!("f{i}"))).await.unwrap();
        }

        let page = storage.list_faculty_impl(2, 2).await.unwrap();
        assert_eq!(page.pagination.total, 3);
        assert_eq!(page.pagination.total_pages, 2);
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].name, "f2");

        let id = page.items[0].id;
        let mut update = faculty("renamed");
        update.branch = "CSE".to_string();
        let updated = storage.update_faculty_impl(id, update).await.unwrap().unwrap();
        assert_eq!(updated.name, "renamed");
        assert_eq!(updated.branch, "CSE");

        assert!(storage.delete_faculty_impl(id).await.unwrap());
        assert!(!storage.delete_faculty_impl(id).await.unwrap());
        assert!(storage.update_faculty_impl(id, faculty("x")).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_research_round_trip() {
        let storage = test_support::storage().await;
        let created = storage
            .create_research_impl(ResearchRequest {
                name: "R".to_string(),
                profession: "Scientist".to_string(),
                research_interests: "ML".to_string(),
                research_scholars: "2".to_string(),
                projects: "P".to_string(),
                image: Some("r.png".to_string()),
                publications: String::new(),
            })
            .await
            .unwrap();

        let fetched = storage.get_research_by_id_impl(created.id).await.unwrap().unwrap();
        assert_eq!(fetched.image.as_deref(), Some("r.png"));
        assert_eq!(storage.list_research_impl(1, 10).await.unwrap().items.len(), 1);
    }
}
