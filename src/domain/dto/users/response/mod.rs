//! # 사용자 관련 응답 DTO 모듈

pub mod action_result;

pub use action_result::ActionResult;
