use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::DirectoryService;
use crate::models::directory::requests::ResearchRequest;
use crate::models::{ApiResponse, ErrorCode, PaginationQuery};
use crate::utils::validate::validate_required;

pub async fn list_research(
    service: &DirectoryService,
    request: &HttpRequest,
    query: PaginationQuery,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let (page, size) = query.normalized();

    match storage.list_research(page, size).await {
        Ok(list) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            list,
            "Research profile retrieved successfully",
        ))),
        Err(e) => Ok(crate::services::error_response(e, ErrorCode::ResearchNotFound)),
    }
}

pub async fn get_research(
    service: &DirectoryService,
    request: &HttpRequest,
    id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.get_research_by_id(id).await {
        Ok(Some(research)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            research,
            "Research profile retrieved successfully",
        ))),
        Ok(None) => Ok(not_found()),
        Err(e) => Ok(crate::services::error_response(e, ErrorCode::ResearchNotFound)),
    }
}

pub async fn create_research(
    service: &DirectoryService,
    request: &HttpRequest,
    body: ResearchRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    if let Err(msg) = validate_research(&body) {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::DirectoryEntryInvalid,
            msg,
        )));
    }

    match storage.create_research(body).await {
        Ok(research) => {
            info!("Research profile {} created", research.id);
            Ok(HttpResponse::Created().json(ApiResponse::success(
                research,
                "Research profile created successfully",
            )))
        }
        Err(e) => Ok(crate::services::error_response(
            e,
            ErrorCode::DirectoryEntryInvalid,
        )),
    }
}

pub async fn update_research(
    service: &DirectoryService,
    request: &HttpRequest,
    id: i64,
    body: ResearchRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    if let Err(msg) = validate_research(&body) {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::DirectoryEntryInvalid,
            msg,
        )));
    }

    match storage.update_research(id, body).await {
        Ok(Some(research)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            research,
            "Research profile updated successfully",
        ))),
        Ok(None) => Ok(not_found()),
        Err(e) => Ok(crate::services::error_response(
            e,
            ErrorCode::DirectoryEntryInvalid,
        )),
    }
}

pub async fn delete_research(
    service: &DirectoryService,
    request: &HttpRequest,
    id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.delete_research(id).await {
        Ok(true) => {
            info!("Research profile {} deleted", id);
            Ok(HttpResponse::NoContent().finish())
        }
        Ok(false) => Ok(not_found()),
        Err(e) => Ok(crate::services::error_response(e, ErrorCode::ResearchNotFound)),
    }
}

fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ApiResponse::error_empty(
        ErrorCode::ResearchNotFound,
        "Research profile not found",
    ))
}

fn validate_research(body: &ResearchRequest) -> Result<(), String> {
    validate_required("name", &body.name)?;
    validate_required("profession", &body.profession)?;
    validate_required("research_interests", &body.research_interests)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_research_requires_interests() {
        let mut body: ResearchRequest = serde_json::from_str(
            r#"{"name":"Dr. Iyer","profession":"Associate Professor","research_interests":"Graph mining","research_scholars":"2","projects":"NSF grant","image":null}"#,
        )
        .unwrap();
        assert!(body.publications.is_empty());
        assert!(validate_research(&body).is_ok());

        body.research_interests = "   ".to_string();
        assert!(validate_research(&body).is_err());
    }
}
