//! 요청 DTO 검증 계약
//!
//! 어노테이션 기반 런타임 검증 대신, 각 DTO가 명시적인 검증 함수를 통해
//! 검증된 타입으로 변환되도록 합니다. [`crate::middlewares::ValidatedJson`]
//! 추출기가 핸들러 실행 전에 이 계약을 호출합니다.

use thiserror::Error;

use crate::core::errors::AppResult;

/// 역직렬화된 요청을 검증된 타입으로 변환하는 trait
///
/// # Examples
///
/// ```rust,ignore
/// impl IntoValidated for UserCreateRequest {
///     type Output = ValidUserCreateRequest;
///
///     fn into_validated(self) -> AppResult<Self::Output> {
///         Ok(self.into_valid()?)
///     }
/// }
/// ```
pub trait IntoValidated {
    /// 검증을 통과한 값의 타입
    type Output;

    fn into_validated(self) -> AppResult<Self::Output>;
}

/// 하나 이상의 필수 필드가 null인 경우의 에러
///
/// 필드는 와이어 이름(JSON 키)으로 선언 순서대로 보관되며, 비어 있는 상태로는
/// 생성되지 않습니다.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("missing required field(s): {}", .fields.join(", "))]
pub struct MissingFields {
    fields: Vec<&'static str>,
}

impl MissingFields {
    /// `(필드 이름, 존재 여부)` 목록을 검사합니다.
    ///
    /// 존재하지 않는 필드가 하나라도 있으면 모두 모아 에러로 반환합니다.
    pub fn check(presence: &[(&'static str, bool)]) -> Result<(), MissingFields> {
        let fields: Vec<&'static str> = presence
            .iter()
            .filter(|(_, present)| !present)
            .map(|(name, _)| *name)
            .collect();

        if fields.is_empty() {
            Ok(())
        } else {
            Err(MissingFields { fields })
        }
    }

    /// 누락된 필드 이름으로 직접 생성합니다. `fields`는 비어 있지 않아야 합니다.
    pub(crate) fn new(fields: Vec<&'static str>) -> Self {
        MissingFields { fields }
    }

    pub fn fields(&self) -> &[&'static str] {
        &self.fields
    }

    pub fn contains(&self, field: &str) -> bool {
        self.fields.iter().any(|f| *f == field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_present_passes() {
        assert!(MissingFields::check(&[("id", true), ("email", true)]).is_ok());
    }

    #[test]
    fn test_collects_every_missing_field_in_order() {
        let err = MissingFields::check(&[("id", false), ("userName", true), ("email", false)])
            .unwrap_err();

        assert_eq!(err.fields(), &["id", "email"]);
        assert!(err.contains("email"));
        assert!(!err.contains("userName"));
        assert_eq!(err.to_string(), "missing required field(s): id, email");
    }
}
