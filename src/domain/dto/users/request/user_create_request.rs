//! # 사용자 생성 요청 DTO
//!
//! 관리자 API로 들어오는 사용자 계정 생성 요청의 데이터 구조를 정의합니다.
//! 이 계층에서는 다섯 개 필드가 모두 존재하는지(non-null)만 검증하며,
//! 형식/길이/중복 검증은 하지 않습니다.
//!
//! ## 와이어 형식
//!
//! ```json
//! {
//!   "id": 1,
//!   "userName": "alice",
//!   "password": "p@ss",
//!   "nickName": "Al",
//!   "email": "a@x.com"
//! }
//! ```
//!
//! 키가 없거나 값이 `null`이면 해당 필드는 누락으로 취급됩니다.
//! 빈 문자열은 존재하는 값입니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! let request: UserCreateRequest = serde_json::from_str(body)?;
//! let valid = request.into_valid()?;
//! service.create_user(valid).await?;
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::core::errors::AppResult;
use crate::core::validation::{IntoValidated, MissingFields};

const REDACTED: &str = "***";

/// 사용자 생성 요청의 필수 필드
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequiredField {
    Id,
    UserName,
    Password,
    NickName,
    Email,
}

impl RequiredField {
    /// 선언 순서대로 나열된 모든 필수 필드
    pub const ALL: [RequiredField; 5] = [
        RequiredField::Id,
        RequiredField::UserName,
        RequiredField::Password,
        RequiredField::NickName,
        RequiredField::Email,
    ];

    /// JSON 키 이름
    pub fn as_str(&self) -> &'static str {
        match self {
            RequiredField::Id => "id",
            RequiredField::UserName => "userName",
            RequiredField::Password => "password",
            RequiredField::NickName => "nickName",
            RequiredField::Email => "email",
        }
    }

    /// Rust 필드 이름 (`validator` 에러 키)
    pub fn field_name(&self) -> &'static str {
        match self {
            RequiredField::Id => "id",
            RequiredField::UserName => "user_name",
            RequiredField::Password => "password",
            RequiredField::NickName => "nick_name",
            RequiredField::Email => "email",
        }
    }
}

impl fmt::Display for RequiredField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 사용자 생성 요청 DTO
///
/// 역직렬화 대상이므로 모든 필드는 타입 수준에서 선택적입니다.
/// 비즈니스 로직에 전달하기 전에 [`UserCreateRequest::into_valid`]로
/// [`ValidUserCreateRequest`]로 변환해야 합니다.
///
/// `validator::Validate`도 구현하므로 `required` 규칙을 통한 표준 검증
/// 경로도 사용할 수 있습니다.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UserCreateRequest {
    /// 기본 키
    #[validate(required(message = "id는 필수입니다"))]
    pub id: Option<i64>,

    /// 사용자명
    #[validate(required(message = "userName은 필수입니다"))]
    pub user_name: Option<String>,

    /// 비밀번호 (이 경계에서는 평문)
    #[validate(required(message = "password는 필수입니다"))]
    pub password: Option<String>,

    /// 닉네임
    #[validate(required(message = "nickName은 필수입니다"))]
    pub nick_name: Option<String>,

    /// 이메일
    #[validate(required(message = "email은 필수입니다"))]
    pub email: Option<String>,
}

impl UserCreateRequest {
    /// 모든 필드가 채워진 요청을 생성합니다.
    pub fn new(
        id: i64,
        user_name: impl Into<String>,
        password: impl Into<String>,
        nick_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id: Some(id),
            user_name: Some(user_name.into()),
            password: Some(password.into()),
            nick_name: Some(nick_name.into()),
            email: Some(email.into()),
        }
    }

    pub fn id(&self) -> Option<i64> {
        self.id
    }

    pub fn user_name(&self) -> Option<&str> {
        self.user_name.as_deref()
    }

    pub fn password(&self) -> Option<&str> {
        self.password.as_deref()
    }

    pub fn nick_name(&self) -> Option<&str> {
        self.nick_name.as_deref()
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    /// null인 필드를 선언 순서대로 반환합니다.
    pub fn missing_fields(&self) -> Vec<RequiredField> {
        match self.check() {
            Ok(()) => Vec::new(),
            Err(missing) => RequiredField::ALL
                .into_iter()
                .filter(|field| missing.contains(field.as_str()))
                .collect(),
        }
    }

    /// 필수 필드 존재 여부를 검증합니다.
    ///
    /// `validator`의 `required` 규칙 결과를 와이어 이름으로 옮겨 담습니다.
    ///
    /// # Errors
    ///
    /// 하나 이상의 필드가 null이면 누락된 필드 전체를 담은 [`MissingFields`]
    pub fn check(&self) -> Result<(), MissingFields> {
        let Err(errors) = self.validate() else {
            return Ok(());
        };

        let field_errors = errors.field_errors();
        let presence = RequiredField::ALL
            .map(|field| (field.as_str(), !field_errors.contains_key(field.field_name())));

        MissingFields::check(&presence)
    }

    /// 검증 후 모든 필드가 보장된 타입으로 변환합니다.
    pub fn into_valid(self) -> Result<ValidUserCreateRequest, MissingFields> {
        self.check()?;

        match (self.id, self.user_name, self.password, self.nick_name, self.email) {
            (Some(id), Some(user_name), Some(password), Some(nick_name), Some(email)) => {
                Ok(ValidUserCreateRequest {
                    id,
                    user_name,
                    password,
                    nick_name,
                    email,
                })
            }
            (id, user_name, password, nick_name, email) => {
                let absent = [
                    id.is_none(),
                    user_name.is_none(),
                    password.is_none(),
                    nick_name.is_none(),
                    email.is_none(),
                ];
                let fields = RequiredField::ALL
                    .into_iter()
                    .zip(absent)
                    .filter(|(_, absent)| *absent)
                    .map(|(field, _)| field.as_str())
                    .collect();

                Err(MissingFields::new(fields))
            }
        }
    }
}

impl fmt::Debug for UserCreateRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserCreateRequest")
            .field("id", &self.id)
            .field("user_name", &self.user_name)
            .field("password", &self.password.as_ref().map(|_| REDACTED))
            .field("nick_name", &self.nick_name)
            .field("email", &self.email)
            .finish()
    }
}

impl IntoValidated for UserCreateRequest {
    type Output = ValidUserCreateRequest;

    fn into_validated(self) -> AppResult<Self::Output> {
        Ok(self.into_valid()?)
    }
}

/// 필수 필드 검증을 통과한 사용자 생성 요청
///
/// [`UserCreateRequest::into_valid`] 또는 `TryFrom`으로만 생성됩니다.
#[derive(Clone, PartialEq, Eq)]
pub struct ValidUserCreateRequest {
    id: i64,
    user_name: String,
    password: String,
    nick_name: String,
    email: String,
}

impl ValidUserCreateRequest {
    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn user_name(&self) -> &str {
        &self.user_name
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn nick_name(&self) -> &str {
        &self.nick_name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// `(id, user_name, password, nick_name, email)` 순서로 소유권을 넘깁니다.
    pub fn into_parts(self) -> (i64, String, String, String, String) {
        (self.id, self.user_name, self.password, self.nick_name, self.email)
    }
}

impl TryFrom<UserCreateRequest> for ValidUserCreateRequest {
    type Error = MissingFields;

    fn try_from(request: UserCreateRequest) -> Result<Self, Self::Error> {
        request.into_valid()
    }
}

impl From<ValidUserCreateRequest> for UserCreateRequest {
    fn from(valid: ValidUserCreateRequest) -> Self {
        UserCreateRequest::new(
            valid.id,
            valid.user_name,
            valid.password,
            valid.nick_name,
            valid.email,
        )
    }
}

impl fmt::Debug for ValidUserCreateRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidUserCreateRequest")
            .field("id", &self.id)
            .field("user_name", &self.user_name)
            .field("password", &REDACTED)
            .field("nick_name", &self.nick_name)
            .field("email", &self.email)
            .finish()
    }
}
