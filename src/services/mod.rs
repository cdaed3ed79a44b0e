//! # Service Layer
//!
//! 핸들러가 호출하는 비즈니스 작업의 경계를 정의합니다.

pub mod users;
