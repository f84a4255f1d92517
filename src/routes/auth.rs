use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::auth::requests::{LoginRequest, RefreshTokenRequest};
use crate::models::users::requests::RegisterRequest;
use crate::services::AuthService;

// 懒加载的全局 AuthService 实例
static AUTH_SERVICE: Lazy<AuthService> = Lazy::new(AuthService::new_lazy);

pub async fn register(
    req: HttpRequest,
    user_data: web::Json<RegisterRequest>,
) -> ActixResult<HttpResponse> {
    AUTH_SERVICE.register(user_data.into_inner(), &req).await
}

pub async fn login(
    req: HttpRequest,
    user_data: web::Json<LoginRequest>,
) -> ActixResult<HttpResponse> {
    AUTH_SERVICE.login(user_data.into_inner(), &req).await
}

pub async fn logout(
    req: HttpRequest,
    body: web::Json<RefreshTokenRequest>,
) -> ActixResult<HttpResponse> {
    AUTH_SERVICE.logout(body.into_inner(), &req).await
}

pub async fn refresh_token(
    req: HttpRequest,
    body: web::Json<RefreshTokenRequest>,
) -> ActixResult<HttpResponse> {
    AUTH_SERVICE.refresh_token(body.into_inner(), &req).await
}

// 配置路由
pub fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/register/")
            .wrap(middlewares::RateLimit::register())
            .route(web::post().to(register)),
    )
    .service(
        web::resource("/login/")
            .wrap(middlewares::RateLimit::login())
            .route(web::post().to(login)),
    )
    .service(
        web::resource("/token/refresh/")
            .wrap(middlewares::RateLimit::refresh_token())
            .route(web::post().to(refresh_token)),
    )
    .service(
        web::resource("/logout/")
            .wrap(middlewares::RequireJWT)
            .route(web::post().to(logout)),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::users::{entities::UserRole, requests::CreateUserRequest};
    use crate::storage::{Storage, sea_orm_storage::test_support};
    use crate::utils::password::hash_password;
    use actix_web::{App, http::StatusCode, test};
    use serde_json::{Value, json};
    use std::sync::Arc;

    async fn seed_user(storage: &Arc<dyn Storage>, name: &str) {
        storage
            .create_user(CreateUserRequest {
                username: name.to_string(),
                email: format!("{name}@example.com"),
                password: hash_password("Campus#2024").unwrap(),
                first_name: name.to_string(),
                last_name: String::new(),
                role: UserRole::User,
            })
            .await
            .unwrap();
    }

    #[actix_web::test]
    async fn test_logged_out_refresh_token_cannot_refresh() {
        let storage: Arc<dyn Storage> = Arc::new(test_support::storage().await);
        seed_user(&storage, "carol").await;

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(storage))
                .configure(configure_auth_routes),
        )
        .await;

        // 独立 IP，避免与其他用例共享限流计数
        let client_ip = ("X-Real-IP", "10.20.30.40");

        let req = test::TestRequest::post()
            .uri("/login/")
            .insert_header(client_ip)
            .set_json(json!({ "email": "carol@example.com", "password": "Campus#2024" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        let access = body["data"]["access"].as_str().unwrap().to_string();
        let refresh = body["data"]["refresh"].as_str().unwrap().to_string();

        let req = test::TestRequest::post()
            .uri("/token/refresh/")
            .insert_header(client_ip)
            .set_json(json!({ "refresh": refresh }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let req = test::TestRequest::post()
            .uri("/logout/")
            .set_json(json!({ "refresh": refresh }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        let req = test::TestRequest::post()
            .uri("/logout/")
            .insert_header(("Authorization", format!("Bearer {access}")))
            .set_json(json!({ "refresh": refresh }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::RESET_CONTENT);

        let req = test::TestRequest::post()
            .uri("/token/refresh/")
            .insert_header(client_ip)
            .set_json(json!({ "refresh": refresh }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_login_rejects_wrong_password() {
        let storage: Arc<dyn Storage> = Arc::new(test_support::storage().await);
        seed_user(&storage, "dave").await;

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(storage))
                .configure(configure_auth_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/login/")
            .insert_header(("X-Real-IP", "10.20.30.41"))
            .set_json(json!({ "email": "dave@example.com", "password": "wrong-password" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
