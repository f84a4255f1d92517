/*!
 * 基于班级角色的访问控制中间件
 *
 * 此中间件必须在 RequireJWT 中间件之后使用。它从路径参数 `class_id`
 * 解析班级，班级不存在时返回 404，随后通过 `Storage::has_class_role`
 * 判断用户是否具有所需角色（与发布成绩的校验走同一谓词）。
 * 系统管理员不享有班级内权限。
 *
 * ## 使用方法
 *
 * ```rust,ignore
 * use crate::middlewares::{RequireJWT, RequireClassRole};
 * use crate::models::class_teachings::entities::ClassRole;
 *
 * web::resource("/class/{class_id}/add-subject/")
 *     .wrap(RequireClassRole::new(&ClassRole::Teacher))
 *     .wrap(RequireJWT)
 *     .route(web::post().to(add_subject));
 * ```
 */

use actix_service::{Service, Transform};
use actix_web::{
    Error, HttpMessage,
    body::EitherBody,
    dev::{ServiceRequest, ServiceResponse},
    http::StatusCode,
};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use std::{rc::Rc, sync::Arc};

use crate::{
    errors::{CampusError, Result as CampusResult},
    models::{
        ErrorCode,
        class_teachings::entities::ClassRole,
        users::entities::User,
    },
    storage::Storage,
};

use super::create_error_response;

#[derive(Clone)]
pub struct RequireClassRole {
    required_roles: Vec<ClassRole>,
}

impl RequireClassRole {
    /// 创建需要特定班级角色的中间件
    pub fn new(role: &ClassRole) -> Self {
        Self {
            required_roles: vec![*role],
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for RequireClassRole
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RequireClassRoleMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequireClassRoleMiddleware {
            service: Rc::new(service),
            required_roles: self.required_roles.clone(),
        }))
    }
}

pub struct RequireClassRoleMiddleware<S> {
    service: Rc<S>,
    required_roles: Vec<ClassRole>,
}

impl<S, B> Service<ServiceRequest> for RequireClassRoleMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(
        &self,
        ctx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let srv = self.service.clone();
        let required_roles = self.required_roles.clone();

        Box::pin(async move {
            // 1. 校验用户信息
            let user_opt = req.extensions().get::<User>().cloned();
            let user = match user_opt {
                Some(user) => user,
                None => {
                    return Ok(req.into_response(
                        create_error_response(
                            StatusCode::UNAUTHORIZED,
                            ErrorCode::Unauthorized,
                            "Unauthorized: missing user claims",
                        )
                        .map_into_right_body(),
                    ));
                }
            };

            // 2. 校验 class_id
            let class_id = match req
                .match_info()
                .get("class_id")
                .and_then(|s| s.parse::<i64>().ok())
            {
                Some(cid) => cid,
                None => {
                    return Ok(req.into_response(
                        create_error_response(
                            StatusCode::BAD_REQUEST,
                            ErrorCode::BadRequest,
                            "Missing or invalid class_id",
                        )
                        .map_into_right_body(),
                    ));
                }
            };

            // 3. 班级存在后按角色逐一校验
            let matched = match lookup_role(&req, user.id, class_id, &required_roles).await {
                Ok(matched) => matched,
                Err(CampusError::NotFound(msg)) => {
                    return Ok(req.into_response(
                        create_error_response(StatusCode::NOT_FOUND, ErrorCode::ClassNotFound, msg)
                            .map_into_right_body(),
                    ));
                }
                Err(e) => {
                    tracing::error!("班级权限校验失败: {}", e);
                    return Ok(req.into_response(
                        create_error_response(
                            StatusCode::INTERNAL_SERVER_ERROR,
                            ErrorCode::InternalServerError,
                            "Internal server error",
                        )
                        .map_into_right_body(),
                    ));
                }
            };

            match matched {
                Some(role) => {
                    tracing::debug!("User {} acts as {} in class {}", user.id, role, class_id);
                    req.extensions_mut().insert(role);
                    let res = srv.call(req).await?.map_into_left_body();
                    Ok(res)
                }
                None => Ok(req.into_response(
                    create_error_response(
                        StatusCode::FORBIDDEN,
                        ErrorCode::ClassPermissionDenied,
                        "Access denied for this class role",
                    )
                    .map_into_right_body(),
                )),
            }
        })
    }
}

// 辅助函数：从请求中提取班级角色
impl RequireClassRole {
    /// 从请求扩展中提取中间件确认过的班级角色
    /// 此函数应该在应用了RequireClassRole中间件的路由处理程序中使用
    pub fn extract_class_role(req: &actix_web::HttpRequest) -> Option<ClassRole> {
        req.extensions().get::<ClassRole>().copied()
    }
}

async fn lookup_role(
    req: &ServiceRequest,
    user_id: i64,
    class_id: i64,
    required_roles: &[ClassRole],
) -> CampusResult<Option<ClassRole>> {
    let storage = req
        .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
        .ok_or_else(|| CampusError::database_config("Storage not found in app data"))?
        .get_ref()
        .clone();

    if storage.get_class_by_id(class_id).await?.is_none() {
        return Err(CampusError::not_found("Class not found"));
    }

    for role in required_roles {
        if storage.has_class_role(user_id, class_id, *role).await? {
            return Ok(Some(*role));
        }
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::classes::requests::CreateClassRequest;
    use crate::storage::sea_orm_storage::test_support;
    use actix_web::{App, HttpRequest, HttpResponse, test, web};

    async fn echo_role(req: HttpRequest) -> HttpResponse {
        let role = RequireClassRole::extract_class_role(&req)
            .map(|r| r.to_string())
            .unwrap_or_default();
        HttpResponse::Ok().body(role)
    }

    #[actix_web::test]
    async fn test_teacher_guard() {
        let seaorm = test_support::storage().await;
        let teacher = test_support::user(&seaorm, "teacher").await;
        let student = test_support::user(&seaorm, "student").await;
        let outsider = test_support::user(&seaorm, "outsider").await;
        let storage: Arc<dyn Storage> = Arc::new(seaorm);

        let class = storage
            .create_class(CreateClassRequest {
                name: "CS-A".to_string(),
                description: String::new(),
            })
            .await
            .unwrap();
        storage
            .add_class_member(class.id, teacher.id, ClassRole::Teacher)
            .await
            .unwrap();
        storage
            .add_class_member(class.id, student.id, ClassRole::Student)
            .await
            .unwrap();

        let cases = [
            (teacher, class.id, StatusCode::OK),
            (student.clone(), class.id, StatusCode::FORBIDDEN),
            (outsider, class.id, StatusCode::FORBIDDEN),
            (student, class.id + 100, StatusCode::NOT_FOUND),
        ];

        for (user, class_id, expected) in cases {
            let app = test::init_service(
                App::new()
                    .app_data(web::Data::new(storage.clone()))
                    .service(
                        web::resource("/class/{class_id}/add-subject/")
                            .wrap(RequireClassRole::new(&ClassRole::Teacher))
                            .wrap_fn(move |req, srv| {
                                req.extensions_mut().insert(user.clone());
                                srv.call(req)
                            })
                            .route(web::post().to(echo_role)),
                    ),
            )
            .await;

            let req = test::TestRequest::post()
                .uri(&format!("/class/{class_id}/add-subject/"))
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), expected);
            if expected == StatusCode::OK {
                assert_eq!(test::read_body(resp).await, "teacher");
            }
        }
    }
}
