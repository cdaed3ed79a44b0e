//! # User Admin HTTP Handlers
//!
//! 관리자 API의 사용자 관리 엔드포인트를 처리합니다.
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `POST` | `/api/admin/user/create` | 사용자 생성 요청 | 200 OK |
//!
//! 요청 본문은 [`ValidatedJson`] 추출기가 핸들러 실행 전에 한 번 검증하므로,
//! 핸들러 본문에는 필수 필드가 모두 채워진 요청만 도달합니다.

use actix_web::{post, web, HttpResponse};

use crate::core::errors::AppError;
use crate::domain::dto::users::request::UserCreateRequest;
use crate::domain::dto::users::response::ActionResult;
use crate::middlewares::ValidatedJson;
use crate::services::users::UserCreationService;

/// 사용자 생성 핸들러
///
/// # 요청 본문
///
/// ```json
/// {
///   "id": 1,
///   "userName": "alice",
///   "password": "p@ss",
///   "nickName": "Al",
///   "email": "a@x.com"
/// }
/// ```
///
/// # 응답
///
/// ## 성공 (200 OK)
/// ```json
/// { "success": true, "errorCode": null, "errorMessage": null, "data": 1 }
/// ```
///
/// ## 필수 필드 누락 (400 Bad Request)
/// ```json
/// {
///   "success": false,
///   "errorCode": "MissingRequiredField",
///   "errorMessage": "missing required field(s): id",
///   "data": { "fields": ["id"] }
/// }
/// ```
///
/// # 사용 예제
///
/// ```bash
/// curl -X POST http://localhost:8080/api/admin/user/create \
///   -H "Content-Type: application/json" \
///   -d '{"id":1,"userName":"alice","password":"p@ss","nickName":"Al","email":"a@x.com"}'
/// ```
#[post("/create")]
pub async fn create_user(
    payload: ValidatedJson<UserCreateRequest>,
    service: web::Data<dyn UserCreationService>,
) -> Result<HttpResponse, AppError> {
    let id = service.create_user(payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(ActionResult::ok(id)))
}
