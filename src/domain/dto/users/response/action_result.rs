//! 관리자 API 공통 응답 envelope

use serde::{Deserialize, Serialize};

/// 모든 관리자 API 응답을 감싸는 구조체
///
/// # JSON 예제
///
/// ```json
/// { "success": true, "errorCode": null, "errorMessage": null, "data": 1 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionResult<T> {
    pub success: bool,
    pub error_code: Option<String>,
    pub error_message: Option<String>,
    pub data: Option<T>,
}

impl<T> ActionResult<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            error_code: None,
            error_message: None,
            data: Some(data),
        }
    }

    pub fn fail(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            success: false,
            error_code: Some(code.into()),
            error_message: Some(message.into()),
            data: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ok_serializes_camel_case_envelope() {
        let value = serde_json::to_value(ActionResult::ok(42_i64)).unwrap();

        assert_eq!(
            value,
            serde_json::json!({
                "success": true,
                "errorCode": null,
                "errorMessage": null,
                "data": 42
            })
        );
    }

    #[test]
    fn test_fail_carries_code_and_message() {
        let result: ActionResult<i64> = ActionResult::fail("ValidationError", "bad body");

        assert!(!result.success);
        assert_eq!(result.error_code.as_deref(), Some("ValidationError"));
        assert_eq!(result.error_message.as_deref(), Some("bad body"));
        assert_eq!(result.data, None);
    }
}
