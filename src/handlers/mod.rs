//! # HTTP Handlers
//!
//! Actix-web 엔드포인트 핸들러 모음입니다. 라우트 등록은 [`crate::routes`]에서 합니다.
//!
//! - [`users`] - 관리자 사용자 관리 엔드포인트

pub mod users;
