use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::ClassService;
use crate::errors::CampusError;
use crate::middlewares::RequireClassRole;
use crate::models::class_teachings::entities::ClassRole;
use crate::models::classes::{
    requests::{AddStudentRequest, AddTeacherRequest},
    responses::ClassMemberResponse,
};
use crate::models::{ApiResponse, ErrorCode};

/// 管理员指派教师
pub async fn add_teacher(
    service: &ClassService,
    request: &HttpRequest,
    class_id: i64,
    body: AddTeacherRequest,
) -> ActixResult<HttpResponse> {
    // 管理员不是班级成员，先确认班级存在
    let storage = service.get_storage(request)?;
    match storage.get_class_by_id(class_id).await {
        Ok(Some(_)) => {}
        Ok(None) => return Ok(super::get::class_not_found()),
        Err(e) => return Ok(crate::services::error_response(e, ErrorCode::ClassNotFound)),
    }

    add_member(
        service,
        request,
        class_id,
        body.teacher_email,
        "teacher_email",
        ClassRole::Teacher,
    )
    .await
}

/// 教师添加学生（教师身份由中间件校验）
pub async fn add_student(
    service: &ClassService,
    request: &HttpRequest,
    class_id: i64,
    body: AddStudentRequest,
) -> ActixResult<HttpResponse> {
    if let Some(role) = RequireClassRole::extract_class_role(request) {
        info!("Enrolling a student in class {} as {}", class_id, role);
    }

    add_member(
        service,
        request,
        class_id,
        body.student_email,
        "student_email",
        ClassRole::Student,
    )
    .await
}

async fn add_member(
    service: &ClassService,
    request: &HttpRequest,
    class_id: i64,
    email: Option<String>,
    field: &str,
    role: ClassRole,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    let Some(email) = email
        .map(|e| e.trim().to_lowercase())
        .filter(|e| !e.is_empty())
    else {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            format!("{field} is required"),
        )));
    };

    let user = match storage.get_user_by_email(&email).await {
        Ok(Some(user)) => user,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::UserNotFound,
                "User not found",
            )));
        }
        Err(e) => return Ok(crate::services::error_response(e, ErrorCode::UserNotFound)),
    };

    match storage.add_class_member(class_id, user.id, role).await {
        Ok(teaching) => {
            info!(
                "User {} added to class {} as {}",
                user.id, class_id, teaching.role
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(
                ClassMemberResponse {
                    class_id,
                    user: user.summary(),
                    role: teaching.role,
                },
                format!("{} added successfully to the class.", capitalize(&role.to_string())),
            )))
        }
        Err(CampusError::Conflict(msg)) => {
            info!("Enrollment of user {} in class {} rejected: {}", user.id, class_id, msg);
            Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::ClassAlreadyJoined,
                "User is already a member of this class.",
            )))
        }
        Err(e) => Ok(crate::services::error_response(e, ErrorCode::ClassNotFound)),
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::capitalize;

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("student"), "Student");
        assert_eq!(capitalize(""), "");
    }
}
