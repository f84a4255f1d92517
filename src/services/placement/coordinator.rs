use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::PlacementService;
use crate::models::placement::requests::SetCoordinatorRequest;
use crate::models::{ApiResponse, ErrorCode};

/// 管理员设置或取消就业协调员
pub async fn set_coordinator(
    service: &PlacementService,
    request: &HttpRequest,
    user_id: i64,
    body: SetCoordinatorRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage
        .set_placement_coordinator(user_id, body.is_placement_coordinator)
        .await
    {
        Ok(true) => {
            info!(
                "Placement coordinator flag of user {} set to {}",
                user_id, body.is_placement_coordinator
            );
            match storage.get_placement_profile(user_id).await {
                Ok(Some(profile)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
                    profile,
                    "Placement coordinator updated",
                ))),
                Ok(None) => Ok(profile_not_found()),
                Err(e) => Ok(crate::services::error_response(
                    e,
                    ErrorCode::PlacementProfileNotFound,
                )),
            }
        }
        Ok(false) => Ok(profile_not_found()),
        Err(e) => Ok(crate::services::error_response(
            e,
            ErrorCode::PlacementProfileNotFound,
        )),
    }
}

fn profile_not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ApiResponse::error_empty(
        ErrorCode::PlacementProfileNotFound,
        "Placement profile not found",
    ))
}
