//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 요청 거부 사유를
//! 일관된 JSON 응답으로 변환합니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::core::errors::{AppError, AppResult};
//!
//! fn create_user(request: UserCreateRequest) -> AppResult<i64> {
//!     let valid = request.into_valid()?; // MissingFields → AppError
//!     Ok(valid.id())
//! }
//! ```
//!
//! ## 응답 형식
//!
//! ```json
//! {
//!   "success": false,
//!   "errorCode": "MissingRequiredField",
//!   "errorMessage": "missing required field(s): id, email",
//!   "data": { "fields": ["id", "email"] }
//! }
//! ```

use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use serde_json::json;
use thiserror::Error;

use crate::core::validation::MissingFields;
use crate::domain::dto::users::response::ActionResult;

/// 애플리케이션 전역 에러 타입
///
/// 핸들러에서 반환되면 자동으로 HTTP 응답으로 변환됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 필수 필드 누락 (400 Bad Request)
    #[error("{0}")]
    MissingRequiredField(#[from] MissingFields),

    /// 요청 본문 파싱/형식 에러 (400 Bad Request)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 응답 본문의 `errorCode` 값
    pub fn code(&self) -> &'static str {
        match self {
            AppError::MissingRequiredField(_) => "MissingRequiredField",
            AppError::ValidationError(_) => "ValidationError",
            AppError::InternalError(_) => "InternalError",
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::MissingRequiredField(_) | AppError::ValidationError(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 누락 필드 에러는 `data.fields`에 누락된 필드의 와이어 이름을 담습니다.
    fn error_response(&self) -> HttpResponse {
        let mut body = ActionResult::fail(self.code(), self.to_string());

        if let AppError::MissingRequiredField(missing) = self {
            body.data = Some(json!({ "fields": missing.fields() }));
        }

        HttpResponse::build(self.status_code()).json(body)
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use actix_web::ResponseError;

    fn missing(fields: &[(&'static str, bool)]) -> MissingFields {
        MissingFields::check(fields).unwrap_err()
    }

    #[test]
    fn test_missing_field_error_response() {
        let error = AppError::from(missing(&[("id", false), ("email", true)]));
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(error.code(), "MissingRequiredField");
    }

    #[actix_web::test]
    async fn test_missing_field_response_body_lists_fields() {
        let error = AppError::from(missing(&[("id", false), ("userName", false)]));
        let body = to_bytes(error.error_response().into_body()).await.unwrap();
        let value: serde_json::Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(value["success"], false);
        assert_eq!(value["errorCode"], "MissingRequiredField");
        assert_eq!(value["data"]["fields"], json!(["id", "userName"]));
        assert_eq!(
            value["errorMessage"],
            "missing required field(s): id, userName"
        );
    }

    #[test]
    fn test_validation_error_response() {
        let error = AppError::ValidationError("expected i64".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_validation_error_body_has_no_data() {
        let error = AppError::ValidationError("expected i64".to_string());
        let body = to_bytes(error.error_response().into_body()).await.unwrap();
        let value: serde_json::Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(value["success"], false);
        assert_eq!(value["errorCode"], "ValidationError");
        assert_eq!(value["errorMessage"], "Validation error: expected i64");
        assert_eq!(value["data"], serde_json::Value::Null);
    }

    #[test]
    fn test_internal_error_response() {
        let error = AppError::InternalError("Something went wrong".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
