use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::ClassService;
use crate::errors::CampusError;
use crate::models::classes::{requests::CreateClassRequest, responses::ClassBrief};
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::validate_required;

/// 班级名称最大长度
const MAX_CLASS_NAME_LEN: usize = 100;

pub async fn create_class(
    service: &ClassService,
    request: &HttpRequest,
    class_data: CreateClassRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    if let Err(msg) = validate_required("name", &class_data.name) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::ClassCreationFailed, msg)));
    }
    let name = class_data.name.trim().to_string();
    if name.chars().count() > MAX_CLASS_NAME_LEN {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ClassCreationFailed,
            format!("name must be at most {MAX_CLASS_NAME_LEN} characters"),
        )));
    }

    let class_data = CreateClassRequest {
        name,
        description: class_data.description.trim().to_string(),
    };

    match storage.create_class(class_data).await {
        Ok(class) => {
            info!("Class {} created successfully", class.name);
            Ok(HttpResponse::Created().json(ApiResponse::success(
                ClassBrief::from(class),
                "Class created successfully",
            )))
        }
        Err(CampusError::Conflict(msg)) => {
            info!("Class creation rejected: {}", msg);
            Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::ClassAlreadyExists,
                "A class with this name already exists",
            )))
        }
        Err(e) => Ok(crate::services::error_response(
            e,
            ErrorCode::ClassCreationFailed,
        )),
    }
}
