//! 路径参数提取器
//!
//! 路由中的 ID 参数统一通过这些类型提取，解析失败直接返回 400 响应信封，
//! 避免 actix 默认的纯文本错误。

use actix_web::{FromRequest, HttpRequest, HttpResponse, dev::Payload, error::InternalError};
use futures_util::future::{Ready, ready};

use crate::models::{ApiResponse, ErrorCode};

/// 解析正整数 ID
fn parse_positive_i64(raw: Option<&str>) -> Option<i64> {
    raw.and_then(|s| s.trim().parse::<i64>().ok())
        .filter(|id| *id > 0)
}

fn invalid_param_error(param: &str) -> actix_web::Error {
    let response = HttpResponse::BadRequest().json(ApiResponse::error_empty(
        ErrorCode::BadRequest,
        format!("Invalid path parameter: {param}"),
    ));
    InternalError::from_response(format!("invalid path parameter {param}"), response).into()
}

macro_rules! define_safe_i64_extractor {
    ($($name:ident => $param:literal),* $(,)?) => {
        $(
            #[derive(Debug, Clone, Copy, PartialEq, Eq)]
            pub struct $name(pub i64);

            impl FromRequest for $name {
                type Error = actix_web::Error;
                type Future = Ready<Result<Self, Self::Error>>;

                fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
                    ready(
                        parse_positive_i64(req.match_info().get($param))
                            .map($name)
                            .ok_or_else(|| invalid_param_error($param)),
                    )
                }
            }
        )*
    };
}

define_safe_i64_extractor! {
    SafeIDI64 => "id",
    SafeClassIdI64 => "class_id",
    SafeSubjectIdI64 => "subject_id",
    SafeExamIdI64 => "exam_id",
    SafeCompanyIdI64 => "company_id",
    SafeUserIdI64 => "user_id",
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[test]
    fn test_parse_positive_i64() {
        assert_eq!(parse_positive_i64(Some("42")), Some(42));
        assert_eq!(parse_positive_i64(Some(" 7 ")), Some(7));
        assert_eq!(parse_positive_i64(Some("0")), None);
        assert_eq!(parse_positive_i64(Some("-3")), None);
        assert_eq!(parse_positive_i64(Some("abc")), None);
        assert_eq!(parse_positive_i64(None), None);
    }

    #[actix_web::test]
    async fn test_extract_from_match_info() {
        let req = TestRequest::default()
            .param("class_id", "12")
            .to_http_request();
        let extracted = SafeClassIdI64::extract(&req).await.unwrap();
        assert_eq!(extracted, SafeClassIdI64(12));

        let req = TestRequest::default()
            .param("exam_id", "x1")
            .to_http_request();
        assert!(SafeExamIdI64::extract(&req).await.is_err());
    }
}
