use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ClassService;
use crate::models::classes::{requests::CreateSubjectRequest, responses::SubjectBrief};
use crate::models::{ApiResponse, ErrorCode};

pub async fn add_subject(
    service: &ClassService,
    request: &HttpRequest,
    class_id: i64,
    body: CreateSubjectRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    let Some(name) = body
        .name
        .map(|n| n.trim().to_string())
        .filter(|n| !n.is_empty())
    else {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::SubjectInvalid,
            "Subject name is required.",
        )));
    };

    match storage
        .create_subject(class_id, &name, body.description.trim())
        .await
    {
        Ok(subject) => Ok(HttpResponse::Created().json(ApiResponse::success(
            SubjectBrief::from(subject),
            "Subject added successfully to the class.",
        ))),
        Err(e) => Ok(crate::services::error_response(e, ErrorCode::SubjectInvalid)),
    }
}
