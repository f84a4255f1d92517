use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::placement::requests::{
    ApplyRequest, CreateCompanyRequest, CreateProfileRequest, SetCoordinatorRequest,
};
use crate::models::users::entities::UserRole;
use crate::services::PlacementService;
use crate::utils::{SafeCompanyIdI64, SafeUserIdI64};

// 懒加载的全局 PlacementService 实例
static PLACEMENT_SERVICE: Lazy<PlacementService> = Lazy::new(PlacementService::new_lazy);

pub async fn get_profile(req: HttpRequest) -> ActixResult<HttpResponse> {
    PLACEMENT_SERVICE.get_profile(&req).await
}

pub async fn create_profile(
    req: HttpRequest,
    body: web::Json<CreateProfileRequest>,
) -> ActixResult<HttpResponse> {
    PLACEMENT_SERVICE
        .create_profile(&req, body.into_inner())
        .await
}

pub async fn list_companies(req: HttpRequest) -> ActixResult<HttpResponse> {
    PLACEMENT_SERVICE.list_companies(&req).await
}

pub async fn create_company(
    req: HttpRequest,
    body: web::Json<CreateCompanyRequest>,
) -> ActixResult<HttpResponse> {
    PLACEMENT_SERVICE
        .create_company(&req, body.into_inner())
        .await
}

pub async fn list_student_companies(req: HttpRequest) -> ActixResult<HttpResponse> {
    PLACEMENT_SERVICE.list_student_companies(&req).await
}

pub async fn apply(req: HttpRequest, body: web::Json<ApplyRequest>) -> ActixResult<HttpResponse> {
    PLACEMENT_SERVICE.apply(&req, body.into_inner()).await
}

pub async fn list_company_applications(
    req: HttpRequest,
    company_id: SafeCompanyIdI64,
) -> ActixResult<HttpResponse> {
    PLACEMENT_SERVICE
        .list_company_applications(&req, company_id.0)
        .await
}

pub async fn set_coordinator(
    req: HttpRequest,
    user_id: SafeUserIdI64,
    body: web::Json<SetCoordinatorRequest>,
) -> ActixResult<HttpResponse> {
    PLACEMENT_SERVICE
        .set_coordinator(&req, user_id.0, body.into_inner())
        .await
}

// 配置路由
pub fn configure_placement_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/placement")
            .service(
                web::resource("/profile/")
                    .wrap(middlewares::RequireJWT)
                    .route(web::get().to(get_profile))
                    .route(web::post().to(create_profile)),
            )
            .service(
                web::resource("/company/")
                    // 公司列表公开
                    .route(web::get().to(list_companies))
                    // 协调员身份在服务层校验
                    .route(
                        web::post()
                            .to(create_company)
                            .wrap(middlewares::RequireJWT),
                    ),
            )
            .service(
                web::resource("/student/company/")
                    .wrap(middlewares::RequireJWT)
                    .route(web::get().to(list_student_companies)),
            )
            .service(
                web::resource("/apply/")
                    .wrap(middlewares::RequireJWT)
                    .route(web::post().to(apply)),
            )
            .service(
                web::resource("/company/{company_id}/applications/")
                    .wrap(middlewares::RequireJWT)
                    .route(web::get().to(list_company_applications)),
            )
            .service(
                web::resource("/coordinator/{user_id}/")
                    .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles()))
                    .wrap(middlewares::RequireJWT)
                    .route(web::put().to(set_coordinator)),
            ),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{Storage, sea_orm_storage::test_support};
    use actix_web::{App, http::StatusCode, test};
    use serde_json::{Value, json};
    use std::sync::Arc;

    #[actix_web::test]
    async fn test_coordinator_company_and_apply_flow() {
        let seaorm = test_support::storage().await;
        let coordinator = test_support::user(&seaorm, "coord").await;
        let alice = test_support::user(&seaorm, "alice").await;
        let bob = test_support::user(&seaorm, "bob").await;
        let nobody = test_support::user(&seaorm, "nobody").await;
        let storage: Arc<dyn Storage> = Arc::new(seaorm);

        storage
            .create_placement_profile(coordinator.id, 9.0, 95.0, 95.0)
            .await
            .unwrap();
        assert!(
            storage
                .set_placement_coordinator(coordinator.id, true)
                .await
                .unwrap()
        );
        storage
            .create_placement_profile(alice.id, 8.5, 90.0, 88.0)
            .await
            .unwrap();
        storage
            .create_placement_profile(bob.id, 7.0, 90.0, 90.0)
            .await
            .unwrap();

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(storage.clone()))
                .configure(configure_placement_routes),
        )
        .await;

        let company = json!({
            "name": "Acme",
            "job_description": "SDE",
            "min_cgpa": 8.0,
            "min_10th": 85.0,
            "min_12th": 85.0,
            "max_backlogs": 0,
            "package": 12.5
        });

        // 非协调员与无档案用户不能发布公司
        for user in [&alice, &nobody] {
            let req = test::TestRequest::post()
                .uri("/placement/company/")
                .insert_header(test_support::bearer(user))
                .set_json(&company)
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::FORBIDDEN);
        }

        let req = test::TestRequest::post()
            .uri("/placement/company/")
            .insert_header(test_support::bearer(&coordinator))
            .set_json(&company)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let body: Value = test::read_body_json(resp).await;
        let company_id = body["data"]["id"].as_i64().unwrap();

        let req = test::TestRequest::get().uri("/placement/company/").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        let companies = body["data"].as_array().unwrap();
        assert_eq!(companies.len(), 1);
        assert_eq!(companies[0]["name"], "Acme");

        let apply = json!({ "company_id": company_id });
        let req = test::TestRequest::post()
            .uri("/placement/apply/")
            .insert_header(test_support::bearer(&alice))
            .set_json(&apply)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["user"]["id"], alice.id);
        assert_eq!(body["data"]["company"]["id"], company_id);
        assert_eq!(body["data"]["other_details"]["cgpa"], 8.5);

        let req = test::TestRequest::post()
            .uri("/placement/apply/")
            .insert_header(test_support::bearer(&alice))
            .set_json(&apply)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "You have already applied to this company.");

        let req = test::TestRequest::post()
            .uri("/placement/apply/")
            .insert_header(test_support::bearer(&bob))
            .set_json(&apply)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);

        let req = test::TestRequest::get()
            .uri("/placement/student/company/")
            .insert_header(test_support::bearer(&alice))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"][0]["is_eligible"], true);
        assert_eq!(body["data"][0]["applied"], true);

        let req = test::TestRequest::get()
            .uri("/placement/student/company/")
            .insert_header(test_support::bearer(&nobody))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let uri = format!("/placement/company/{company_id}/applications/");
        let req = test::TestRequest::get()
            .uri(&uri)
            .insert_header(test_support::bearer(&alice))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);

        let req = test::TestRequest::get()
            .uri(&uri)
            .insert_header(test_support::bearer(&coordinator))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        let items = body["data"]["items"].as_array().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0]["user"]["username"], "alice");
    }

    #[actix_web::test]
    async fn test_company_routes_require_login() {
        let storage: Arc<dyn Storage> = Arc::new(test_support::storage().await);
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(storage))
                .configure(configure_placement_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/placement/apply/")
            .set_json(json!({ "company_id": 1 }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        let req = test::TestRequest::get().uri("/placement/company/").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }
}
