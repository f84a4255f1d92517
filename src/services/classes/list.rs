use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ClassService;
use crate::models::classes::responses::{UserClassItem, UserClassesResponse};
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_user_classes(
    service: &ClassService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let user = match crate::services::current_user(request) {
        Ok(user) => user,
        Err(response) => return Ok(response),
    };

    match storage.list_user_classes(user.id).await {
        Ok(rows) => {
            let classes = rows
                .into_iter()
                .map(|(class, role)| UserClassItem {
                    class: class.into(),
                    role,
                })
                .collect();
            Ok(HttpResponse::Ok()
                .insert_header(("Referrer-Policy", "strict-origin-when-cross-origin"))
                .json(ApiResponse::success(
                    UserClassesResponse { classes },
                    "Classes retrieved successfully",
                )))
        }
        Err(e) => Ok(crate::services::error_response(e, ErrorCode::ClassNotFound)),
    }
}
