//! # Core Module
//!
//! 애플리케이션 전역에서 공유되는 에러 타입과 요청 검증 계약을 제공합니다.
//!
//! - [`errors`] - `AppError`와 HTTP 응답 매핑
//! - [`validation`] - `IntoValidated` trait과 `MissingFields` 에러

pub mod errors;
pub mod validation;

pub use errors::*;
pub use validation::*;
