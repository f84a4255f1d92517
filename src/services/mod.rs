pub mod auth;
pub mod classes;
pub mod directory;
pub mod exams;
pub mod placement;

pub use auth::AuthService;
pub use classes::ClassService;
pub use directory::DirectoryService;
pub use exams::ExamService;
pub use placement::PlacementService;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, error::ErrorInternalServerError};
use std::sync::Arc;

use crate::errors::CampusError;
use crate::middlewares::RequireJWT;
use crate::models::{ApiResponse, ErrorCode, users::entities::User};
use crate::storage::Storage;

/// 从 app data 中获取存储实例
pub(crate) fn storage_from_request(request: &HttpRequest) -> ActixResult<Arc<dyn Storage>> {
    request
        .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
        .map(|data| data.get_ref().clone())
        .ok_or_else(|| {
            tracing::error!("Storage not found in app data");
            ErrorInternalServerError("Storage not configured")
        })
}

/// 获取当前登录用户，未登录时返回 401 响应
pub(crate) fn current_user(request: &HttpRequest) -> Result<User, HttpResponse> {
    RequireJWT::extract_user_claims(request).ok_or_else(|| {
        HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Unauthorized access, please login",
        ))
    })
}

/// 将存储层错误转换为响应
///
/// 内部错误只记录日志，对外返回通用信息。
pub(crate) fn error_response(err: CampusError, code: ErrorCode) -> HttpResponse {
    if err.is_internal() {
        tracing::error!("{}", err.format_simple());
        return HttpResponse::InternalServerError().json(ApiResponse::error_empty(
            ErrorCode::InternalServerError,
            "Internal server error",
        ));
    }
    HttpResponse::build(err.http_status()).json(ApiResponse::error_empty(code, err.message()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;

    #[test]
    fn test_error_response_status() {
        let resp = error_response(CampusError::conflict("dup"), ErrorCode::ClassAlreadyJoined);
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let resp = error_response(CampusError::authorization("no"), ErrorCode::Forbidden);
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);

        let resp = error_response(
            CampusError::database_operation("connection reset"),
            ErrorCode::ApplicationFailed,
        );
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
