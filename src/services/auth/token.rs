use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::{
    ApiResponse, ErrorCode,
    auth::{RefreshTokenRequest, RefreshTokenResponse},
    users::entities::UserStatus,
};
use crate::utils::jwt::JwtUtils;

use super::AuthService;

pub async fn handle_refresh_token(
    service: &AuthService,
    refresh_request: RefreshTokenRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    let Some(refresh_token) = refresh_request.refresh.filter(|t| !t.trim().is_empty()) else {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "refresh token is required",
        )));
    };

    let claims = match JwtUtils::verify_refresh_token(refresh_token.trim()) {
        Ok(claims) => claims,
        Err(e) => {
            tracing::debug!("Refresh token rejected: {}", e);
            return Ok(unauthorized());
        }
    };

    // 已注销的 token
    match storage.is_token_blacklisted(&claims.jti).await {
        Ok(false) => {}
        Ok(true) => return Ok(unauthorized()),
        Err(e) => return Ok(crate::services::error_response(e, ErrorCode::TokenInvalid)),
    }

    let Some(user_id) = claims.user_id() else {
        return Ok(unauthorized());
    };

    // 以当前用户角色签发，角色变更后立即生效
    let user = match storage.get_user_by_id(user_id).await {
        Ok(Some(user)) if user.status == UserStatus::Active => user,
        Ok(_) => return Ok(unauthorized()),
        Err(e) => return Ok(crate::services::error_response(e, ErrorCode::TokenInvalid)),
    };

    match JwtUtils::generate_access_token(user.id, &user.role.to_string()) {
        Ok(access) => {
            let response = RefreshTokenResponse {
                access,
                expires_in: JwtUtils::access_token_expires_in(),
            };
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                response,
                "Token refreshed successfully",
            )))
        }
        Err(e) => {
            tracing::error!("Failed to generate access token: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Unable to generate token",
                )),
            )
        }
    }
}

fn unauthorized() -> HttpResponse {
    HttpResponse::Unauthorized().json(ApiResponse::error_empty(
        ErrorCode::TokenInvalid,
        "Token is invalid or expired",
    ))
}
