use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ClassService;
use crate::models::class_teachings::entities::ClassRole;
use crate::models::classes::responses::{ClassDetailResponse, ClassRoleResponse};
use crate::models::{ApiResponse, ErrorCode};

/// 班级详情：班级信息、教师、学生与科目
pub async fn get_class_details(
    service: &ClassService,
    request: &HttpRequest,
    class_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    let class = match storage.get_class_by_id(class_id).await {
        Ok(Some(class)) => class,
        Ok(None) => return Ok(class_not_found()),
        Err(e) => return Ok(crate::services::error_response(e, ErrorCode::ClassNotFound)),
    };

    let members = match storage.list_class_members(class_id).await {
        Ok(members) => members,
        Err(e) => return Ok(crate::services::error_response(e, ErrorCode::ClassNotFound)),
    };

    let subjects = match storage.list_class_subjects(class_id).await {
        Ok(subjects) => subjects,
        Err(e) => return Ok(crate::services::error_response(e, ErrorCode::SubjectNotFound)),
    };

    let (teachers, students): (Vec<_>, Vec<_>) = members
        .into_iter()
        .partition(|(teaching, _)| teaching.role == ClassRole::Teacher);

    let response = ClassDetailResponse {
        class: class.into(),
        teachers: teachers.into_iter().map(|(_, user)| user.summary()).collect(),
        students: students.into_iter().map(|(_, user)| user.summary()).collect(),
        subjects: subjects.into_iter().map(Into::into).collect(),
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        response,
        "Class details retrieved successfully",
    )))
}

/// 当前用户在班级中的角色，不是成员时返回 404
pub async fn get_class_role(
    service: &ClassService,
    request: &HttpRequest,
    class_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let user = match crate::services::current_user(request) {
        Ok(user) => user,
        Err(response) => return Ok(response),
    };

    match storage.get_class_by_id(class_id).await {
        Ok(Some(_)) => {}
        Ok(None) => return Ok(class_not_found()),
        Err(e) => return Ok(crate::services::error_response(e, ErrorCode::ClassNotFound)),
    }

    match storage.get_class_teaching(user.id, class_id).await {
        Ok(Some(teaching)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            ClassRoleResponse {
                role: teaching.role,
            },
            "Class role retrieved successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ClassUserNotFound,
            "You are not a member of this class",
        ))),
        Err(e) => Ok(crate::services::error_response(
            e,
            ErrorCode::ClassUserNotFound,
        )),
    }
}

pub(super) fn class_not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ApiResponse::error_empty(
        ErrorCode::ClassNotFound,
        "Class not found",
    ))
}
