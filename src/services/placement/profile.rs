use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::PlacementService;
use crate::errors::CampusError;
use crate::models::placement::requests::CreateProfileRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::{round_to, validate_range};

pub async fn get_profile(
    service: &PlacementService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let user = match crate::services::current_user(request) {
        Ok(user) => user,
        Err(response) => return Ok(response),
    };

    match storage.get_placement_profile(user.id).await {
        Ok(Some(profile)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            profile,
            "Placement profile retrieved successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::PlacementProfileNotFound,
            "Placement profile not found",
        ))),
        Err(e) => Ok(crate::services::error_response(
            e,
            ErrorCode::PlacementProfileNotFound,
        )),
    }
}

pub async fn create_profile(
    service: &PlacementService,
    request: &HttpRequest,
    body: CreateProfileRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let user = match crate::services::current_user(request) {
        Ok(user) => user,
        Err(response) => return Ok(response),
    };

    match storage.get_placement_profile(user.id).await {
        Ok(None) => {}
        Ok(Some(_)) => return Ok(profile_exists()),
        Err(e) => {
            return Ok(crate::services::error_response(
                e,
                ErrorCode::PlacementProfileInvalid,
            ));
        }
    }

    let (cgpa, percentage_10th, percentage_12th) = match normalize_scores(&body) {
        Ok(scores) => scores,
        Err(msg) => {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::PlacementProfileInvalid,
                msg,
            )));
        }
    };

    match storage
        .create_placement_profile(user.id, cgpa, percentage_10th, percentage_12th)
        .await
    {
        Ok(profile) => {
            info!("Placement profile created for user {}", user.id);
            Ok(HttpResponse::Created().json(ApiResponse::success(
                profile,
                "Placement profile created successfully",
            )))
        }
        // 并发创建由唯一索引兜底
        Err(CampusError::Conflict(msg)) => {
            info!("Placement profile for user {} rejected: {}", user.id, msg);
            Ok(profile_exists())
        }
        Err(e) => Ok(crate::services::error_response(
            e,
            ErrorCode::PlacementProfileInvalid,
        )),
    }
}

fn profile_exists() -> HttpResponse {
    HttpResponse::BadRequest().json(ApiResponse::error_empty(
        ErrorCode::PlacementProfileAlreadyExists,
        "Profile already exists",
    ))
}

/// 校验并取整：cgpa 保留 2 位，百分比保留 4 位
fn normalize_scores(body: &CreateProfileRequest) -> Result<(f64, f64, f64), String> {
    let (Some(cgpa), Some(p10), Some(p12)) =
        (body.cgpa, body.percentage_10th, body.percentage_12th)
    else {
        return Err("Invalid data provided".to_string());
    };

    validate_range("cgpa", cgpa, 0.0, 10.0)?;
    validate_range("percentage_10th", p10, 0.0, 100.0)?;
    validate_range("percentage_12th", p12, 0.0, 100.0)?;

    Ok((round_to(cgpa, 2), round_to(p10, 4), round_to(p12, 4)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body(cgpa: Option<f64>, p10: Option<f64>, p12: Option<f64>) -> CreateProfileRequest {
        CreateProfileRequest {
            cgpa,
            percentage_10th: p10,
            percentage_12th: p12,
        }
    }

    #[test]
    fn test_normalize_scores_rounds() {
        let (cgpa, p10, p12) =
            normalize_scores(&body(Some(8.456), Some(90.123456), Some(88.0))).unwrap();
        assert_eq!(cgpa, 8.46);
        assert_eq!(p10, 90.1235);
        assert_eq!(p12, 88.0);
    }

    #[test]
    fn test_normalize_scores_rejects_missing_and_out_of_range() {
        assert!(normalize_scores(&body(None, Some(90.0), Some(90.0))).is_err());
        assert!(normalize_scores(&body(Some(10.5), Some(90.0), Some(90.0))).is_err());
        assert!(normalize_scores(&body(Some(8.0), Some(-1.0), Some(90.0))).is_err());
        assert!(normalize_scores(&body(Some(8.0), Some(90.0), Some(f64::NAN))).is_err());
    }
}
