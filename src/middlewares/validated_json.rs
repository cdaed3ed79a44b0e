//! 검증 JSON 추출기
//!
//! `web::Json<T>`로 요청 본문을 역직렬화한 뒤 [`IntoValidated`] 계약으로
//! 검증하여, 핸들러 본문이 실행되기 전에 잘못된 요청을 거부합니다.
//!
//! ```rust,ignore
//! #[post("/create")]
//! async fn create_user(payload: ValidatedJson<UserCreateRequest>) -> Result<HttpResponse, AppError> {
//!     let request: ValidUserCreateRequest = payload.into_inner();
//!     // ...
//! }
//! ```

use actix_web::dev::Payload;
use actix_web::{web, Error, FromRequest, HttpRequest};
use futures_util::future::LocalBoxFuture;
use serde::de::DeserializeOwned;

use crate::core::errors::AppError;
use crate::core::validation::IntoValidated;

/// 역직렬화와 검증을 모두 통과한 요청 본문
pub struct ValidatedJson<T: IntoValidated>(pub T::Output);

impl<T: IntoValidated> ValidatedJson<T> {
    pub fn into_inner(self) -> T::Output {
        self.0
    }
}

impl<T> FromRequest for ValidatedJson<T>
where
    T: DeserializeOwned + IntoValidated + 'static,
    T::Output: 'static,
{
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let body = web::Json::<T>::from_request(req, payload);
        let path = req.path().to_owned();

        Box::pin(async move {
            let body = body.await?;

            match body.into_inner().into_validated() {
                Ok(valid) => Ok(ValidatedJson(valid)),
                Err(err) => {
                    log::warn!("요청 검증 실패 ({}): {}", path, err);
                    Err(err.into())
                }
            }
        })
    }
}

/// 본문 파싱 에러를 `AppError::ValidationError`로 변환하는 JSON 설정
///
/// 잘못된 JSON, 타입 불일치, Content-Type 누락 모두 400 응답이 됩니다.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, req| {
        log::warn!("요청 본문 파싱 실패 ({}): {}", req.path(), err);
        AppError::ValidationError(err.to_string()).into()
    })
}
