pub mod create;
pub mod get;
pub mod list;
pub mod members;
pub mod subjects;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::classes::requests::{
    AddStudentRequest, AddTeacherRequest, CreateClassRequest, CreateSubjectRequest,
};
use crate::storage::Storage;

pub struct ClassService {
    storage: Option<Arc<dyn Storage>>,
}

impl ClassService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> ActixResult<Arc<dyn Storage>> {
        match &self.storage {
            Some(storage) => Ok(storage.clone()),
            None => super::storage_from_request(request),
        }
    }

    // 当前用户所在的班级
    pub async fn list_user_classes(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::list_user_classes(self, request).await
    }

    pub async fn create_class(
        &self,
        request: &HttpRequest,
        class_data: CreateClassRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_class(self, request, class_data).await
    }

    pub async fn get_class_details(
        &self,
        request: &HttpRequest,
        class_id: i64,
    ) -> ActixResult<HttpResponse> {
        get::get_class_details(self, request, class_id).await
    }

    pub async fn get_class_role(
        &self,
        request: &HttpRequest,
        class_id: i64,
    ) -> ActixResult<HttpResponse> {
        get::get_class_role(self, request, class_id).await
    }

    pub async fn add_teacher(
        &self,
        request: &HttpRequest,
        class_id: i64,
        body: AddTeacherRequest,
    ) -> ActixResult<HttpResponse> {
        members::add_teacher(self, request, class_id, body).await
    }

    pub async fn add_student(
        &self,
        request: &HttpRequest,
        class_id: i64,
        body: AddStudentRequest,
    ) -> ActixResult<HttpResponse> {
        members::add_student(self, request, class_id, body).await
    }

    pub async fn add_subject(
        &self,
        request: &HttpRequest,
        class_id: i64,
        body: CreateSubjectRequest,
    ) -> ActixResult<HttpResponse> {
        subjects::add_subject(self, request, class_id, body).await
    }
}
