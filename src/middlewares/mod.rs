//! # Request Middlewares
//!
//! 핸들러 앞단에서 요청을 가로채는 구성요소입니다.
//!
//! - [`validated_json`] - 요청 본문 역직렬화 + 필수 필드 검증 추출기

pub mod validated_json;

pub use validated_json::{json_config, ValidatedJson};
