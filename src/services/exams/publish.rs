use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::ExamService;
use crate::errors::CampusError;
use crate::models::class_teachings::entities::ClassRole;
use crate::models::exams::requests::PublishResultsRequest;
use crate::models::{ApiResponse, ErrorCode};

/// 发布成绩
///
/// 按考试所属班级做教师校验，整批写入在一个事务中完成。
pub async fn publish_results(
    service: &ExamService,
    request: &HttpRequest,
    exam_id: i64,
    body: PublishResultsRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let user = match crate::services::current_user(request) {
        Ok(user) => user,
        Err(response) => return Ok(response),
    };

    let exam = match storage.get_exam_by_id(exam_id).await {
        Ok(Some(exam)) => exam,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::ExamNotFound,
                "Exam not found",
            )));
        }
        Err(e) => return Ok(crate::services::error_response(e, ErrorCode::ExamNotFound)),
    };

    match storage
        .has_class_role(user.id, exam.class_id, ClassRole::Teacher)
        .await
    {
        Ok(true) => {}
        Ok(false) => {
            return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                ErrorCode::ClassPermissionDenied,
                "You are not authorized to publish results for this exam.",
            )));
        }
        Err(e) => {
            return Ok(crate::services::error_response(
                e,
                ErrorCode::ClassPermissionDenied,
            ));
        }
    }

    let entries = match body.results {
        Some(entries) if !entries.is_empty() => entries,
        _ => {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::ExamResultInvalid,
                "No results data provided.",
            )));
        }
    };

    if let Some(entry) = entries.iter().find(|e| !e.marks.is_finite()) {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ExamResultInvalid,
            format!("Invalid marks for student {}", entry.student_id),
        )));
    }

    let count = entries.len();
    match storage.publish_exam_results(exam_id, entries).await {
        Ok(result) => {
            info!(
                "User {} published {} result(s) for exam {}",
                user.id, count, exam_id
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(
                result,
                "Exam results published successfully!",
            )))
        }
        Err(CampusError::NotFound(msg)) => {
            info!("Publishing results for exam {} rejected: {}", exam_id, msg);
            Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::ExamStudentNotFound,
                "One or more students in the results do not exist.",
            )))
        }
        Err(e) => Ok(crate::services::error_response(
            e,
            ErrorCode::ExamResultInvalid,
        )),
    }
}
