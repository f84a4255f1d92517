use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::collections::HashSet;
use tracing::info;

use super::PlacementService;
use crate::models::placement::{
    eligibility::is_eligible, requests::CreateCompanyRequest, responses::StudentCompanyItem,
};
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::{validate_range, validate_required};

/// 公司列表（完整字段，无需登录）
pub async fn list_companies(
    service: &PlacementService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.list_placement_companies().await {
        Ok(companies) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            companies,
            "Companies retrieved successfully",
        ))),
        Err(e) => Ok(crate::services::error_response(e, ErrorCode::CompanyNotFound)),
    }
}

pub async fn create_company(
    service: &PlacementService,
    request: &HttpRequest,
    body: CreateCompanyRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let user = match crate::services::current_user(request) {
        Ok(user) => user,
        Err(response) => return Ok(response),
    };

    if let Err(response) = super::require_coordinator(&storage, user.id).await {
        return Ok(response);
    }

    if let Err(msg) = validate_company(&body) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::CompanyInvalid, msg)));
    }

    let body = CreateCompanyRequest {
        name: body.name.trim().to_string(),
        job_description: body.job_description.trim().to_string(),
        ..body
    };

    match storage.create_placement_company(body).await {
        Ok(company) => {
            info!("Company {} created by coordinator {}", company.id, user.id);
            Ok(HttpResponse::Created().json(ApiResponse::success(
                company,
                "Company created successfully",
            )))
        }
        Err(e) => Ok(crate::services::error_response(e, ErrorCode::CompanyInvalid)),
    }
}

/// 学生视角的公司列表，没有就业档案时返回 404
pub async fn list_student_companies(
    service: &PlacementService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let user = match crate::services::current_user(request) {
        Ok(user) => user,
        Err(response) => return Ok(response),
    };

    let profile = match storage.get_placement_profile(user.id).await {
        Ok(Some(profile)) => profile,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::PlacementProfileNotFound,
                "Placement profile not found",
            )));
        }
        Err(e) => {
            return Ok(crate::services::error_response(
                e,
                ErrorCode::PlacementProfileNotFound,
            ));
        }
    };

    let companies = match storage.list_placement_companies().await {
        Ok(companies) => companies,
        Err(e) => return Ok(crate::services::error_response(e, ErrorCode::CompanyNotFound)),
    };

    let applied: HashSet<i64> = match storage.list_applied_company_ids(user.id).await {
        Ok(ids) => ids.into_iter().collect(),
        Err(e) => return Ok(crate::services::error_response(e, ErrorCode::CompanyNotFound)),
    };

    let items: Vec<StudentCompanyItem> = companies
        .into_iter()
        .map(|company| StudentCompanyItem {
            is_eligible: is_eligible(&profile, &company),
            applied: applied.contains(&company.id),
            company,
        })
        .collect();

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        items,
        "Companies retrieved successfully",
    )))
}

fn validate_company(body: &CreateCompanyRequest) -> Result<(), String> {
    validate_required("name", &body.name)?;
    validate_range("min_cgpa", body.min_cgpa, 0.0, 10.0)?;
    validate_range("min_10th", body.min_10th, 0.0, 100.0)?;
    validate_range("min_12th", body.min_12th, 0.0, 100.0)?;
    if body.max_backlogs < 0 {
        return Err("max_backlogs must not be negative".to_string());
    }
    if !body.package.is_finite() || body.package < 0.0 {
        return Err("package must not be negative".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn company() -> CreateCompanyRequest {
        CreateCompanyRequest {
            name: "Acme".to_string(),
            job_description: "SDE".to_string(),
            min_cgpa: 8.0,
            min_10th: 85.0,
            min_12th: 85.0,
            max_backlogs: 0,
            package: 1_200_000.0,
        }
    }

    #[test]
    fn test_validate_company_accepts_valid() {
        assert!(validate_company(&company()).is_ok());
    }

    #[test]
    fn test_validate_company_rejects_invalid_fields() {
        let mut c = company();
        c.name = "  ".to_string();
        assert!(validate_company(&c).is_err());

        let mut c = company();
        c.min_cgpa = 11.0;
        assert!(validate_company(&c).is_err());

        let mut c = company();
        c.max_backlogs = -1;
        assert!(validate_company(&c).is_err());

        let mut c = company();
        c.package = -5.0;
        assert!(validate_company(&c).is_err());
    }
}
