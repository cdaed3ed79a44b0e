//! 사용자 생성 서비스
//!
//! 검증된 사용자 생성 요청을 받아 계정을 만드는 작업의 경계입니다.
//! 실제 저장소와 비밀번호 해싱은 이 trait을 구현하는 외부 서비스의 몫입니다.

use async_trait::async_trait;

use crate::core::errors::AppResult;
use crate::domain::dto::users::request::ValidUserCreateRequest;

/// 사용자 생성 작업
#[async_trait]
pub trait UserCreationService: Send + Sync {
    /// 사용자를 생성하고 생성된 사용자의 id를 반환합니다.
    async fn create_user(&self, request: ValidUserCreateRequest) -> AppResult<i64>;
}

/// 요청을 수락하고 id를 그대로 돌려주는 기본 구현
///
/// 저장소가 연결되지 않은 배포에서 요청 계약만 확인할 때 사용합니다.
/// 비밀번호는 로그에 남기지 않습니다.
#[derive(Debug, Default, Clone)]
pub struct AcceptingUserService;

impl AcceptingUserService {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl UserCreationService for AcceptingUserService {
    async fn create_user(&self, request: ValidUserCreateRequest) -> AppResult<i64> {
        log::info!(
            "사용자 생성 요청 수락: id={}, userName={}, email={}",
            request.id(),
            request.user_name(),
            request.email()
        );

        Ok(request.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dto::users::request::UserCreateRequest;

    #[actix_web::test]
    async fn test_accepting_service_returns_request_id() {
        let request = UserCreateRequest::new(42, "alice", "p@ss", "Al", "a@x.com")
            .into_valid()
            .unwrap();

        let id = AcceptingUserService::new().create_user(request).await.unwrap();

        assert_eq!(id, 42);
    }
}
