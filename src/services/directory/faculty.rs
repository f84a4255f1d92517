use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::DirectoryService;
use crate::models::directory::requests::FacultyRequest;
use crate::models::{ApiResponse, ErrorCode, PaginationQuery};
use crate::utils::validate::validate_required;

pub async fn list_faculty(
    service: &DirectoryService,
    request: &HttpRequest,
    query: PaginationQuery,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let (page, size) = query.normalized();

    match storage.list_faculty(page, size).await {
        Ok(list) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            list,
            "Faculty retrieved successfully",
        ))),
        Err(e) => Ok(crate::services::error_response(e, ErrorCode::FacultyNotFound)),
    }
}

pub async fn get_faculty(
    service: &DirectoryService,
    request: &HttpRequest,
    id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.get_faculty_by_id(id).await {
        Ok(Some(faculty)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            faculty,
            "Faculty retrieved successfully",
        ))),
        Ok(None) => Ok(not_found()),
        Err(e) => Ok(crate::services::error_response(e, ErrorCode::FacultyNotFound)),
    }
}

pub async fn create_faculty(
    service: &DirectoryService,
    request: &HttpRequest,
    body: FacultyRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    if let Err(msg) = validate_faculty(&body) {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::DirectoryEntryInvalid,
            msg,
        )));
    }

    match storage.create_faculty(body).await {
        Ok(faculty) => {
            info!("Faculty {} created", faculty.id);
            Ok(HttpResponse::Created().json(ApiResponse::success(
                faculty,
                "Faculty created successfully",
            )))
        }
        Err(e) => Ok(crate::services::error_response(
            e,
            ErrorCode::DirectoryEntryInvalid,
        )),
    }
}

pub async fn update_faculty(
    service: &DirectoryService,
    request: &HttpRequest,
    id: i64,
    body: FacultyRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    if let Err(msg) = validate_faculty(&body) {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::DirectoryEntryInvalid,
            msg,
        )));
    }

    match storage.update_faculty(id, body).await {
        Ok(Some(faculty)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            faculty,
            "Faculty updated successfully",
        ))),
        Ok(None) => Ok(not_found()),
        Err(e) => Ok(crate::services::error_response(
            e,
            ErrorCode::DirectoryEntryInvalid,
        )),
    }
}

pub async fn delete_faculty(
    service: &DirectoryService,
    request: &HttpRequest,
    id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.delete_faculty(id).await {
        Ok(true) => {
            info!("Faculty {} deleted", id);
            Ok(HttpResponse::NoContent().finish())
        }
        Ok(false) => Ok(not_found()),
        Err(e) => Ok(crate::services::error_response(e, ErrorCode::FacultyNotFound)),
    }
}

fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ApiResponse::error_empty(
        ErrorCode::FacultyNotFound,
        "Faculty not found",
    ))
}

fn validate_faculty(body: &FacultyRequest) -> Result<(), String> {
    validate_required("name", &body.name)?;
    validate_required("profession", &body.profession)?;
    validate_required("qualifications", &body.qualifications)?;
    if body.experience < 0 {
        return Err("experience must not be negative".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_faculty() {
        let mut body: FacultyRequest = serde_json::from_str(
            r#"{"name":"Dr. Rao","profession":"Professor","qualifications":"PhD","experience":12}"#,
        )
        .unwrap();
        assert!(validate_faculty(&body).is_ok());

        body.experience = -1;
        assert!(validate_faculty(&body).is_err());

        body.experience = 0;
        body.profession = String::new();
        assert!(validate_faculty(&body).is_err());
    }
}
