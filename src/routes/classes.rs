use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::class_teachings::entities::ClassRole;
use crate::models::classes::requests::{
    AddStudentRequest, AddTeacherRequest, CreateClassRequest, CreateSubjectRequest,
};
use crate::models::exams::requests::CreateExamRequest;
use crate::models::users::entities::UserRole;
use crate::services::{ClassService, ExamService};
use crate::utils::{SafeClassIdI64, SafeSubjectIdI64};

// 懒加载的全局 CLASS_SERVICE 实例
static CLASS_SERVICE: Lazy<ClassService> = Lazy::new(ClassService::new_lazy);
static EXAM_SERVICE: Lazy<ExamService> = Lazy::new(ExamService::new_lazy);

// HTTP处理程序
pub async fn list_user_classes(req: HttpRequest) -> ActixResult<HttpResponse> {
    CLASS_SERVICE.list_user_classes(&req).await
}

pub async fn create_class(
    req: HttpRequest,
    class_data: web::Json<CreateClassRequest>,
) -> ActixResult<HttpResponse> {
    CLASS_SERVICE
        .create_class(&req, class_data.into_inner())
        .await
}

pub async fn add_teacher(
    req: HttpRequest,
    class_id: SafeClassIdI64,
    body: web::Json<AddTeacherRequest>,
) -> ActixResult<HttpResponse> {
    CLASS_SERVICE
        .add_teacher(&req, class_id.0, body.into_inner())
        .await
}

pub async fn get_class_role(
    req: HttpRequest,
    class_id: SafeClassIdI64,
) -> ActixResult<HttpResponse> {
    CLASS_SERVICE.get_class_role(&req, class_id.0).await
}

pub async fn get_class_details(
    req: HttpRequest,
    class_id: SafeClassIdI64,
) -> ActixResult<HttpResponse> {
    CLASS_SERVICE.get_class_details(&req, class_id.0).await
}

pub async fn add_student(
    req: HttpRequest,
    class_id: SafeClassIdI64,
    body: web::Json<AddStudentRequest>,
) -> ActixResult<HttpResponse> {
    CLASS_SERVICE
        .add_student(&req, class_id.0, body.into_inner())
        .await
}

pub async fn add_subject(
    req: HttpRequest,
    class_id: SafeClassIdI64,
    body: web::Json<CreateSubjectRequest>,
) -> ActixResult<HttpResponse> {
    CLASS_SERVICE
        .add_subject(&req, class_id.0, body.into_inner())
        .await
}

pub async fn add_exam(
    req: HttpRequest,
    class_id: SafeClassIdI64,
    subject_id: SafeSubjectIdI64,
    body: web::Json<CreateExamRequest>,
) -> ActixResult<HttpResponse> {
    EXAM_SERVICE
        .create_exam(&req, class_id.0, subject_id.0, body.into_inner())
        .await
}

// 配置路由
pub fn configure_classes_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/teacher/classes/")
            .wrap(middlewares::RequireJWT)
            .route(web::get().to(list_user_classes)),
    )
    .service(
        // 仅管理员可创建班级
        web::resource("/classes/")
            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles()))
            .wrap(middlewares::RequireJWT)
            .route(web::post().to(create_class)),
    )
    .service(
        web::scope("/class/{class_id}")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("/add-teacher/")
                    .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles()))
                    .route(web::post().to(add_teacher)),
            )
            .service(web::resource("/role/").route(web::get().to(get_class_role)))
            .service(web::resource("/details/").route(web::get().to(get_class_details)))
            // 以下操作需要班级教师身份
            .service(
                web::resource("/add-student/")
                    .wrap(middlewares::RequireClassRole::new(&ClassRole::Teacher))
                    .route(web::post().to(add_student)),
            )
            .service(
                web::resource("/add-subject/")
                    .wrap(middlewares::RequireClassRole::new(&ClassRole::Teacher))
                    .route(web::post().to(add_subject)),
            )
            .service(
                web::resource("/{subject_id}/add-exam/")
                    .wrap(middlewares::RequireClassRole::new(&ClassRole::Teacher))
                    .route(web::post().to(add_exam)),
            ),
    );
}
