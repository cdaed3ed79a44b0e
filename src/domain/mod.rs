//! # Domain Layer
//!
//! 관리자 API가 다루는 요청/응답 데이터 구조를 정의합니다.
//! 사용자 엔티티와 저장소는 이 크레이트 바깥의 서비스가 소유합니다.

pub mod dto;
