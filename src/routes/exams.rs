use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::exams::requests::PublishResultsRequest;
use crate::services::ExamService;
use crate::utils::{SafeExamIdI64, SafeSubjectIdI64};

static EXAM_SERVICE: Lazy<ExamService> = Lazy::new(ExamService::new_lazy);

pub async fn publish_results(
    req: HttpRequest,
    exam_id: SafeExamIdI64,
    body: web::Json<PublishResultsRequest>,
) -> ActixResult<HttpResponse> {
    EXAM_SERVICE
        .publish_results(&req, exam_id.0, body.into_inner())
        .await
}

pub async fn view_results(req: HttpRequest, exam_id: SafeExamIdI64) -> ActixResult<HttpResponse> {
    EXAM_SERVICE.view_results(&req, exam_id.0).await
}

pub async fn list_subject_exams(
    req: HttpRequest,
    subject_id: SafeSubjectIdI64,
) -> ActixResult<HttpResponse> {
    EXAM_SERVICE.list_subject_exams(&req, subject_id.0).await
}

// 配置路由
pub fn configure_exams_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        // 教师身份在服务层按考试所属班级校验
        web::resource("/exams/{exam_id}/publish-results/")
            .wrap(middlewares::RequireJWT)
            .route(web::post().to(publish_results)),
    )
    .service(
        web::resource("/view-exam-results/{exam_id}/")
            .wrap(middlewares::RequireJWT)
            .route(web::get().to(view_results)),
    )
    .service(
        web::resource("/subjects/{subject_id}/exams/")
            .wrap(middlewares::RequireJWT)
            .route(web::get().to(list_subject_exams)),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        class_teachings::entities::ClassRole, classes::requests::CreateClassRequest,
    };
    use crate::storage::{Storage, sea_orm_storage::test_support};
    use actix_web::{App, http::StatusCode, test};
    use serde_json::{Value, json};
    use std::sync::Arc;

    #[actix_web::test]
    async fn test_only_class_teacher_publishes_results() {
        let seaorm = test_support::storage().await;
        let teacher = test_support::user(&seaorm, "teacher").await;
        let student = test_support::user(&seaorm, "student").await;
        let outsider = test_support::user(&seaorm, "outsider").await;
        let storage: Arc<dyn Storage> = Arc::new(seaorm);

        let class = storage
            .create_class(CreateClassRequest {
                name: "CSE-B".to_string(),
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
        let subject = storage.create_subject(class.id, "Physics", "").await.unwrap();
        let exam = storage
            .create_exam(class.id, subject.id, "Final", "")
            .await
            .unwrap();

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(storage))
                .configure(configure_exams_routes),
        )
        .await;

        let uri = format!("/exams/{}/publish-results/", exam.id);
        let results = json!({
            "results": [{ "student_id": student.id, "marks": 91.5, "grade": "A" }]
        });

        for user in [&student, &outsider] {
            let req = test::TestRequest::post()
                .uri(&uri)
                .insert_header(test_support::bearer(user))
                .set_json(&results)
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::FORBIDDEN);
        }

        for body in [json!({ "results": [] }), json!({})] {
            let req = test::TestRequest::post()
                .uri(&uri)
                .insert_header(test_support::bearer(&teacher))
                .set_json(&body)
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        }

        let req = test::TestRequest::get()
            .uri(&format!("/view-exam-results/{}/", exam.id))
            .insert_header(test_support::bearer(&student))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let req = test::TestRequest::post()
            .uri(&uri)
            .insert_header(test_support::bearer(&teacher))
            .set_json(&results)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let req = test::TestRequest::get()
            .uri(&format!("/view-exam-results/{}/", exam.id))
            .insert_header(test_support::bearer(&student))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["results"][student.id.to_string()]["marks"], 91.5);

        let req = test::TestRequest::post()
            .uri("/exams/9999/publish-results/")
            .insert_header(test_support::bearer(&teacher))
            .set_json(&results)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
