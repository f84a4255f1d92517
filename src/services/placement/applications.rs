use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::PlacementService;
use crate::models::placement::responses::{ApplicationResponse, CompanyApplicationsResponse};
use crate::models::{ApiResponse, ErrorCode};

/// 某公司的全部投递记录（仅就业协调员）
pub async fn list_company_applications(
    service: &PlacementService,
    request: &HttpRequest,
    company_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let user = match crate::services::current_user(request) {
        Ok(user) => user,
        Err(response) => return Ok(response),
    };

    if let Err(response) = super::require_coordinator(&storage, user.id).await {
        return Ok(response);
    }

    let company = match storage.get_placement_company(company_id).await {
        Ok(Some(company)) => company,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::CompanyNotFound,
                "Company not found",
            )));
        }
        Err(e) => return Ok(crate::services::error_response(e, ErrorCode::CompanyNotFound)),
    };

    let rows = match storage.list_company_applications(company_id).await {
        Ok(rows) => rows,
        Err(e) => return Ok(crate::services::error_response(e, ErrorCode::ApplicationFailed)),
    };

    let items = rows
        .into_iter()
        .map(|(application, applicant)| ApplicationResponse {
            user: applicant.summary(),
            company: company.clone(),
            other_details: application.other_details,
        })
        .collect();

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        CompanyApplicationsResponse { company, items },
        "Applications retrieved successfully",
    )))
}
