use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ExamService;
use crate::models::exams::responses::{SubjectExamItem, SubjectExamsResponse};
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_subject_exams(
    service: &ExamService,
    request: &HttpRequest,
    subject_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    let subject = match storage.get_subject_by_id(subject_id).await {
        Ok(Some(subject)) => subject,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::SubjectNotFound,
                "Subject not found",
            )));
        }
        Err(e) => return Ok(crate::services::error_response(e, ErrorCode::SubjectNotFound)),
    };

    let exams = match storage.list_subject_exams(subject_id).await {
        Ok(exams) if !exams.is_empty() => exams,
        Ok(_) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::ExamNotFound,
                "No exams found for this subject.",
            )));
        }
        Err(e) => return Ok(crate::services::error_response(e, ErrorCode::ExamNotFound)),
    };

    // 考试与科目属于同一班级
    let class_name = match storage.get_class_by_id(subject.class_id).await {
        Ok(class) => class.map(|c| c.name).unwrap_or_default(),
        Err(e) => return Ok(crate::services::error_response(e, ErrorCode::ClassNotFound)),
    };

    let items = exams
        .into_iter()
        .map(|exam| SubjectExamItem {
            id: exam.id,
            name: exam.name,
            description: exam.description,
            class_assigned: class_name.clone(),
            subject: subject.name.clone(),
        })
        .collect();

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        SubjectExamsResponse {
            subject: subject.name,
            exams: items,
        },
        "Exams retrieved successfully",
    )))
}
