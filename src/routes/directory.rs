use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::PaginationQuery;
use crate::models::directory::requests::{FacultyRequest, ResearchRequest};
use crate::models::users::entities::UserRole;
use crate::services::DirectoryService;
use crate::utils::SafeIDI64;

static DIRECTORY_SERVICE: Lazy<DirectoryService> = Lazy::new(DirectoryService::new_lazy);

// 教师名录
pub async fn list_faculty(
    req: HttpRequest,
    query: web::Query<PaginationQuery>,
) -> ActixResult<HttpResponse> {
    DIRECTORY_SERVICE
        .list_faculty(&req, query.into_inner())
        .await
}

pub async fn create_faculty(
    req: HttpRequest,
    body: web::Json<FacultyRequest>,
) -> ActixResult<HttpResponse> {
    DIRECTORY_SERVICE
        .create_faculty(&req, body.into_inner())
        .await
}

pub async fn get_faculty(req: HttpRequest, id: SafeIDI64) -> ActixResult<HttpResponse> {
    DIRECTORY_SERVICE.get_faculty(&req, id.0).await
}

pub async fn update_faculty(
    req: HttpRequest,
    id: SafeIDI64,
    body: web::Json<FacultyRequest>,
) -> ActixResult<HttpResponse> {
    DIRECTORY_SERVICE
        .update_faculty(&req, id.0, body.into_inner())
        .await
}

pub async fn delete_faculty(req: HttpRequest, id: SafeIDI64) -> ActixResult<HttpResponse> {
    DIRECTORY_SERVICE.delete_faculty(&req, id.0).await
}

// 科研名录
pub async fn list_research(
    req: HttpRequest,
    query: web::Query<PaginationQuery>,
) -> ActixResult<HttpResponse> {
    DIRECTORY_SERVICE
        .list_research(&req, query.into_inner())
        .await
}

pub async fn create_research(
    req: HttpRequest,
    body: web::Json<ResearchRequest>,
) -> ActixResult<HttpResponse> {
    DIRECTORY_SERVICE
        .create_research(&req, body.into_inner())
        .await
}

pub async fn get_research(req: HttpRequest, id: SafeIDI64) -> ActixResult<HttpResponse> {
    DIRECTORY_SERVICE.get_research(&req, id.0).await
}

pub async fn update_research(
    req: HttpRequest,
    id: SafeIDI64,
    body: web::Json<ResearchRequest>,
) -> ActixResult<HttpResponse> {
    DIRECTORY_SERVICE
        .update_research(&req, id.0, body.into_inner())
        .await
}

pub async fn delete_research(req: HttpRequest, id: SafeIDI64) -> ActixResult<HttpResponse> {
    DIRECTORY_SERVICE.delete_research(&req, id.0).await
}

// 配置路由：读取公开，写入仅管理员
pub fn configure_directory_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/teachers/")
            .route(web::get().to(list_faculty))
            .route(
                web::post()
                    .to(create_faculty)
                    .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles()))
                    .wrap(middlewares::RequireJWT),
            ),
    )
    .service(
        web::resource("/teachers/{id}/")
            .route(web::get().to(get_faculty))
            .route(
                web::put()
                    .to(update_faculty)
                    .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles()))
                    .wrap(middlewares::RequireJWT),
            )
            .route(
                web::delete()
                    .to(delete_faculty)
                    .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles()))
                    .wrap(middlewares::RequireJWT),
            ),
    )
    .service(
        web::resource("/research/")
            .route(web::get().to(list_research))
            .route(
                web::post()
                    .to(create_research)
                    .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles()))
                    .wrap(middlewares::RequireJWT),
            ),
    )
    .service(
        web::resource("/research/{id}/")
            .route(web::get().to(get_research))
            .route(
                web::put()
                    .to(update_research)
                    .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles()))
                    .wrap(middlewares::RequireJWT),
            )
            .route(
                web::delete()
                    .to(delete_research)
                    .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles()))
                    .wrap(middlewares::RequireJWT),
            ),
    );
}
