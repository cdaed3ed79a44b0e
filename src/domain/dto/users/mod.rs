//! # 사용자 DTO 모듈
//!
//! - [`request`] - 사용자 생성 요청과 검증된 요청 타입
//! - [`response`] - 공통 응답 envelope

pub mod request;
pub mod response;
