pub mod faculty;
pub mod research;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::PaginationQuery;
use crate::models::directory::requests::{FacultyRequest, ResearchRequest};
use crate::storage::Storage;

pub struct DirectoryService {
    storage: Option<Arc<dyn Storage>>,
}

impl DirectoryService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> ActixResult<Arc<dyn Storage>> {
        match &self.storage {
            Some(storage) => Ok(storage.clone()),
            None => super::storage_from_request(request),
        }
    }

    // 教师名录
    pub async fn list_faculty(
        &self,
        request: &HttpRequest,
        query: PaginationQuery,
    ) -> ActixResult<HttpResponse> {
        faculty::list_faculty(self, request, query).await
    }

    pub async fn get_faculty(&self, request: &HttpRequest, id: i64) -> ActixResult<HttpResponse> {
        faculty::get_faculty(self, request, id).await
    }

    pub async fn create_faculty(
        &self,
        request: &HttpRequest,
        body: FacultyRequest,
    ) -> ActixResult<HttpResponse> {
        faculty::create_faculty(self, request, body).await
    }

    pub async fn update_faculty(
        &self,
        request: &HttpRequest,
        id: i64,
        body: FacultyRequest,
    ) -> ActixResult<HttpResponse> {
        faculty::update_faculty(self, request, id, body).await
    }

    pub async fn delete_faculty(
        &self,
        request: &HttpRequest,
        id: i64,
    ) -> ActixResult<HttpResponse> {
        faculty::delete_faculty(self, request, id).await
    }

    // 科研名录
    pub async fn list_research(
        &self,
        request: &HttpRequest,
        query: PaginationQuery,
    ) -> ActixResult<HttpResponse> {
        research::list_research(self, request, query).await
    }

    pub async fn get_research(&self, request: &HttpRequest, id: i64) -> ActixResult<HttpResponse> {
        research::get_research(self, request, id).await
    }

    pub async fn create_research(
        &self,
        request: &HttpRequest,
        body: ResearchRequest,
    ) -> ActixResult<HttpResponse> {
        research::create_research(self, request, body).await
    }

    pub async fn update_research(
        &self,
        request: &HttpRequest,
        id: i64,
        body: ResearchRequest,
    ) -> ActixResult<HttpResponse> {
        research::update_research(self, request, id, body).await
    }

    pub async fn delete_research(
        &self,
        request: &HttpRequest,
        id: i64,
    ) -> ActixResult<HttpResponse> {
        research::delete_research(self, request, id).await
    }
}
