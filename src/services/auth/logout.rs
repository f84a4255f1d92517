use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, http::StatusCode};

use crate::models::{ApiResponse, ErrorCode, auth::RefreshTokenRequest};
use crate::utils::jwt::JwtUtils;

use super::AuthService;

/// 处理用户登出
///
/// 将请求体中的 refresh token 写入黑名单，之后该 token 不能再用于刷新。
pub async fn handle_logout(
    service: &AuthService,
    logout_request: RefreshTokenRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let user = match crate::services::current_user(request) {
        Ok(user) => user,
        Err(response) => return Ok(response),
    };

    let Some(refresh_token) = logout_request.refresh.filter(|t| !t.trim().is_empty()) else {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "refresh token is required",
        )));
    };

    let claims = match JwtUtils::verify_refresh_token(refresh_token.trim()) {
        Ok(claims) => claims,
        Err(e) => {
            tracing::debug!("Logout with invalid refresh token: {}", e);
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::TokenInvalid,
                "Token is invalid or expired",
            )));
        }
    };

    // 只能注销自己的 token
    if claims.user_id() != Some(user.id) {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::TokenInvalid,
            "Token does not belong to current user",
        )));
    }

    if let Err(e) = storage
        .blacklist_token(&claims.jti, user.id, claims.exp as i64)
        .await
    {
        return Ok(crate::services::error_response(
            e,
            ErrorCode::InternalServerError,
        ));
    }

    tracing::info!("User {} logged out", user.username);
    Ok(HttpResponse::build(StatusCode::RESET_CONTENT)
        .json(ApiResponse::<()>::success_empty("Successfully logged out.")))
}
