//! # Data Transfer Objects
//!
//! HTTP 경계에서 주고받는 요청/응답 구조체를 도메인별로 묶습니다.

pub mod users;
