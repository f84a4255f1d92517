use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::ExamService;
use crate::models::exams::{requests::CreateExamRequest, responses::ExamCreatedResponse};
use crate::models::{ApiResponse, ErrorCode};

pub async fn create_exam(
    service: &ExamService,
    request: &HttpRequest,
    class_id: i64,
    subject_id: i64,
    body: CreateExamRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    // 科目必须属于该班级
    match storage.get_subject_by_id(subject_id).await {
        Ok(Some(subject)) if subject.class_id == class_id => {}
        Ok(_) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::SubjectNotFound,
                "Subject not found in this class",
            )));
        }
        Err(e) => return Ok(crate::services::error_response(e, ErrorCode::SubjectNotFound)),
    }

    let Some(name) = body
        .name
        .map(|n| n.trim().to_string())
        .filter(|n| !n.is_empty())
    else {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ExamInvalid,
            "Exam name is required.",
        )));
    };

    match storage
        .create_exam(class_id, subject_id, &name, body.description.trim())
        .await
    {
        Ok(exam) => {
            info!("Exam {} created for class {}", exam.id, class_id);
            Ok(HttpResponse::Created().json(ApiResponse::success(
                ExamCreatedResponse { exam },
                "Exam created successfully.",
            )))
        }
        Err(e) => Ok(crate::services::error_response(e, ErrorCode::ExamInvalid)),
    }
}
