//! 사용자 관리 관리자 API
//!
//! 관리자 API로 들어오는 사용자 생성 요청을 역직렬화하고, 필수 필드가 모두
//! 존재하는지 검증한 뒤 사용자 생성 서비스에 넘깁니다.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← /api/admin/user/*, /health
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  ValidatedJson  │ ← 역직렬화 + 필수 필드 검증
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← UserCreationService 구현체
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use user_admin_api::domain::dto::users::request::UserCreateRequest;
//!
//! let request: UserCreateRequest = serde_json::from_str(body)?;
//! match request.into_valid() {
//!     Ok(valid) => service.create_user(valid).await?,
//!     Err(missing) => log::warn!("거부됨: {}", missing),
//! }
//! ```

pub mod core;
pub mod config;
pub mod domain;
pub mod services;
pub mod routes;
pub mod handlers;
pub mod middlewares;
