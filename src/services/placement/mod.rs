pub mod applications;
pub mod apply;
pub mod companies;
pub mod coordinator;
pub mod profile;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::placement::requests::{
    ApplyRequest, CreateCompanyRequest, CreateProfileRequest, SetCoordinatorRequest,
};
use crate::models::{ApiResponse, ErrorCode};
use crate::storage::Storage;

pub struct PlacementService {
    storage: Option<Arc<dyn Storage>>,
}

impl PlacementService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> ActixResult<Arc<dyn Storage>> {
        match &self.storage {
            Some(storage) => Ok(storage.clone()),
            None => super::storage_from_request(request),
        }
    }

    pub async fn get_profile(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        profile::get_profile(self, request).await
    }

    pub async fn create_profile(
        &self,
        request: &HttpRequest,
        body: CreateProfileRequest,
    ) -> ActixResult<HttpResponse> {
        profile::create_profile(self, request, body).await
    }

    pub async fn list_companies(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        companies::list_companies(self, request).await
    }

    pub async fn create_company(
        &self,
        request: &HttpRequest,
        body: CreateCompanyRequest,
    ) -> ActixResult<HttpResponse> {
        companies::create_company(self, request, body).await
    }

    // 学生视角：附带资格与投递状态
    pub async fn list_student_companies(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        companies::list_student_companies(self, request).await
    }

    pub async fn apply(
        &self,
        request: &HttpRequest,
        body: ApplyRequest,
    ) -> ActixResult<HttpResponse> {
        apply::apply(self, request, body).await
    }

    pub async fn list_company_applications(
        &self,
        request: &HttpRequest,
        company_id: i64,
    ) -> ActixResult<HttpResponse> {
        applications::list_company_applications(self, request, company_id).await
    }

    pub async fn set_coordinator(
        &self,
        request: &HttpRequest,
        user_id: i64,
        body: SetCoordinatorRequest,
    ) -> ActixResult<HttpResponse> {
        coordinator::set_coordinator(self, request, user_id, body).await
    }
}

/// 当前用户必须是就业协调员（没有档案同样视为无权限）
pub(crate) async fn require_coordinator(
    storage: &Arc<dyn Storage>,
    user_id: i64,
) -> Result<(), HttpResponse> {
    match storage.get_placement_profile(user_id).await {
        Ok(Some(profile)) if profile.is_placement_coordinator => Ok(()),
        Ok(_) => Err(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::CoordinatorRequired,
            "No permission, only placement coordinator is permitted",
        ))),
        Err(e) => Err(crate::services::error_response(
            e,
            ErrorCode::CoordinatorRequired,
        )),
    }
}
