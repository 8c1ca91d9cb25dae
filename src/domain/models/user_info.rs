//! OpenID Connect UserInfo 프로필과 부분 오버라이드 구조체

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// OpenID Connect 표준 UserInfo 클레임
///
/// `/userinfo` 응답 본문이며, 저장되지 않고 요청마다 다시 계산됩니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    /// Subject 식별자
    pub sub: String,
    pub name: String,
    pub given_name: String,
    pub family_name: String,
    pub email: String,
    pub email_verified: bool,
    /// 프로필 이미지 URL
    pub picture: String,
    /// 사용자 로케일 (비어 있으면 생략)
    #[serde(default, skip_serializing_if = "is_blank")]
    pub locale: Option<String>,
    /// Hosted domain (비어 있으면 생략)
    #[serde(default, skip_serializing_if = "is_blank")]
    pub hd: Option<String>,
}

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().is_none_or(str::is_empty)
}

impl UserInfo {
    /// 발급된 토큰의 client_id로부터 기본 프로필을 생성합니다.
    ///
    /// `sub`는 client_id 그대로, 이메일은 `<client_id>@example.com`입니다.
    pub fn generated_for(client_id: &str) -> Self {
        Self {
            sub: client_id.to_string(),
            name: "Generated User".to_string(),
            given_name: String::new(),
            family_name: String::new(),
            email: format!("{}@example.com", client_id),
            email_verified: true,
            picture: String::new(),
            locale: None,
            hd: None,
        }
    }

    /// 서버 기본 mock 사용자 프로필
    pub fn mock_user(email: &str, name: &str) -> Self {
        Self {
            sub: "123456789".to_string(),
            name: name.to_string(),
            given_name: "Test".to_string(),
            family_name: "User".to_string(),
            email: email.to_string(),
            email_verified: true,
            picture: "https://example.com/profile.jpg".to_string(),
            locale: None,
            hd: None,
        }
    }
}

/// UserInfo 부분 오버라이드
///
/// `/config`로 전달되는 `user_info` 객체입니다. 각 필드는 값이 있고 타입이
/// 맞을 때만 적용되며, 타입이 틀린 값은 요청 전체를 실패시키지 않고
/// 없는 것으로 취급됩니다.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfoOverride {
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub given_name: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub family_name: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub email_verified: Option<bool>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub picture: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub hd: Option<String>,
}

impl UserInfoOverride {
    /// 존재하는 필드만 `user`에 덮어씁니다.
    pub fn apply_to(&self, user: &mut UserInfo) {
        if let Some(sub) = &self.sub {
            user.sub = sub.clone();
        }
        if let Some(name) = &self.name {
            user.name = name.clone();
        }
        if let Some(given_name) = &self.given_name {
            user.given_name = given_name.clone();
        }
        if let Some(family_name) = &self.family_name {
            user.family_name = family_name.clone();
        }
        if let Some(email) = &self.email {
            user.email = email.clone();
        }
        if let Some(email_verified) = self.email_verified {
            user.email_verified = email_verified;
        }
        if let Some(picture) = &self.picture {
            user.picture = picture.clone();
        }
        if let Some(locale) = &self.locale {
            user.locale = Some(locale.clone());
        }
        if let Some(hd) = &self.hd {
            user.hd = Some(hd.clone());
        }
    }
}

/// 타입이 맞지 않는 값을 `None`으로 취급하는 역직렬화 함수
pub(crate) fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}
