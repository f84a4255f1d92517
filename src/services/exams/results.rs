use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ExamService;
use crate::models::exams::responses::ExamResultsResponse;
use crate::models::{ApiResponse, ErrorCode};

pub async fn view_results(
    service: &ExamService,
    request: &HttpRequest,
    exam_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    let result = match storage.get_exam_result(exam_id).await {
        Ok(Some(result)) if !result.results.is_empty() => result,
        Ok(_) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::ExamResultNotFound,
                "No results published for this exam yet.",
            )));
        }
        Err(e) => {
            return Ok(crate::services::error_response(
                e,
                ErrorCode::ExamResultNotFound,
            ));
        }
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

    let subject_name = match storage.get_subject_by_id(exam.subject_id).await {
        Ok(subject) => subject.map(|s| s.name).unwrap_or_default(),
        Err(e) => return Ok(crate::services::error_response(e, ErrorCode::SubjectNotFound)),
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        ExamResultsResponse {
            exam: exam.name,
            subject: subject_name,
            results: result.results,
        },
        "Exam results retrieved successfully",
    )))
}
