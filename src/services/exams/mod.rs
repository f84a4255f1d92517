pub mod create;
pub mod list;
pub mod publish;
pub mod results;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::exams::requests::{CreateExamRequest, PublishResultsRequest};
use crate::storage::Storage;

pub struct ExamService {
    storage: Option<Arc<dyn Storage>>,
}

impl ExamService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> ActixResult<Arc<dyn Storage>> {
        match &self.storage {
            Some(storage) => Ok(storage.clone()),
            None => super::storage_from_request(request),
        }
    }

    pub async fn create_exam(
        &self,
        request: &HttpRequest,
        class_id: i64,
        subject_id: i64,
        body: CreateExamRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_exam(self, request, class_id, subject_id, body).await
    }

    pub async fn publish_results(
        &self,
        request: &HttpRequest,
        exam_id: i64,
        body: PublishResultsRequest,
    ) -> ActixResult<HttpResponse> {
        publish::publish_results(self, request, exam_id, body).await
    }

    pub async fn view_results(
        &self,
        request: &HttpRequest,
        exam_id: i64,
    ) -> ActixResult<HttpResponse> {
        results::view_results(self, request, exam_id).await
    }

    pub async fn list_subject_exams(
        &self,
        request: &HttpRequest,
        subject_id: i64,
    ) -> ActixResult<HttpResponse> {
        list::list_subject_exams(self, request, subject_id).await
    }
}
