use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::PlacementService;
use crate::errors::CampusError;
use crate::models::placement::{requests::ApplyRequest, responses::ApplicationResponse};
use crate::models::{ApiResponse, ErrorCode};

/// 投递公司
///
/// 校验与写入在存储层完成，这里只负责错误码映射。
pub async fn apply(
    service: &PlacementService,
    request: &HttpRequest,
    body: ApplyRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let user = match crate::services::current_user(request) {
        Ok(user) => user,
        Err(response) => return Ok(response),
    };

    let Some(company_id) = body.company_id else {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "company_id is required",
        )));
    };

    let application = match storage.apply_to_company(user.id, company_id).await {
        Ok(application) => application,
        Err(CampusError::NotFound(msg)) => {
            info!("Application by user {} rejected: {}", user.id, msg);
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::CompanyNotFound,
                "Company not found",
            )));
        }
        Err(CampusError::Conflict(msg)) => {
            info!("Application by user {} rejected: {}", user.id, msg);
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::ApplicationAlreadyExists,
                "You have already applied to this company.",
            )));
        }
        Err(CampusError::Authorization(msg)) => {
            info!("Application by user {} rejected: {}", user.id, msg);
            return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                ErrorCode::ApplicationNotEligible,
                "You are not eligible to apply for this company.",
            )));
        }
        Err(e) => return Ok(crate::services::error_response(e, ErrorCode::ApplicationFailed)),
    };

    let company = match storage.get_placement_company(company_id).await {
        Ok(Some(company)) => company,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::CompanyNotFound,
                "Company not found",
            )));
        }
        Err(e) => return Ok(crate::services::error_response(e, ErrorCode::ApplicationFailed)),
    };

    info!("User {} applied to company {}", user.id, company_id);
    Ok(HttpResponse::Created().json(ApiResponse::success(
        ApplicationResponse {
            user: user.summary(),
            company,
            other_details: application.other_details,
        },
        "Application submitted successfully",
    )))
}
