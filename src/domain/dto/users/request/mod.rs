//! # 사용자 관련 요청 DTO 모듈
//!
//! 클라이언트로부터 받은 JSON 데이터를 구조화된 Rust 타입으로 변환하고,
//! 비즈니스 로직에 전달하기 전에 필수 필드 존재 여부를 검증합니다.
//!
//! ## 검증 흐름
//!
//! 1. **구문 검증**: `serde`가 JSON 구조와 타입을 확인
//! 2. **존재 검증**: `UserCreateRequest::into_valid`가 null 필드를 모두 수집
//!
//! 검증 실패는 `AppError::MissingRequiredField`로 변환되어
//! HTTP 400 Bad Request 응답이 됩니다.

pub mod user_create_request;

pub use user_create_request::{RequiredField, UserCreateRequest, ValidUserCreateRequest};
