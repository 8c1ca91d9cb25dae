//! JWT 클레임, 토큰 응답, JWKS 구조체
//!
//! 액세스 토큰과 ID 토큰은 모두 RS256으로 서명되며 동일한 `kid`를 헤더에
//! 포함합니다. 검증 측은 [`Jwks`]로 공개된 키를 사용합니다.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::user_info::{UserInfoOverride, lenient};

/// 액세스 토큰 클레임
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessTokenClaims {
    /// 발급자 (서버 issuer URL)
    pub iss: String,
    /// `user-<client_id>`
    pub sub: String,
    /// 대상 클라이언트
    pub aud: String,
    pub iat: i64,
    pub exp: i64,
    /// 부여된 scope 목록
    pub scope: Vec<String>,
}

/// OpenID Connect ID 토큰 클레임
///
/// `email`/`name`은 `/config`의 `tokens.user_info` 오버라이드가 있을 때만
/// 포함됩니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdTokenClaims {
    pub iss: String,
    pub sub: String,
    pub aud: String,
    pub iat: i64,
    pub exp: i64,
    /// 토큰마다 새로 생성되는 랜덤 nonce
    pub nonce: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// `/token` 성공 응답
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    /// 항상 `"Bearer"`
    pub token_type: String,
    /// 액세스 토큰 유효 시간 (초)
    pub expires_in: i64,
    pub refresh_token: String,
    pub id_token: String,
}

/// 토큰 클레임 오버라이드 설정
///
/// 현재는 `user_info`의 `email`, `name`만 ID 토큰에 반영되며,
/// 나머지 키는 `GET /config` 조회를 위해 그대로 보관합니다.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TokenOverrideConfig {
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub user_info: Option<UserInfoOverride>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl TokenOverrideConfig {
    /// ID 토큰에 넣을 이메일 (비어 있으면 `None`)
    pub fn id_token_email(&self) -> Option<String> {
        self.user_info
            .as_ref()
            .and_then(|info| info.email.clone())
            .filter(|email| !email.is_empty())
    }

    /// ID 토큰에 넣을 이름 (비어 있으면 `None`)
    pub fn id_token_name(&self) -> Option<String> {
        self.user_info
            .as_ref()
            .and_then(|info| info.name.clone())
            .filter(|name| !name.is_empty())
    }
}

/// JSON Web Key (RFC 7517) - RSA 공개키
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Jwk {
    /// 항상 `"RSA"`
    pub kty: String,
    /// 항상 `"sig"`
    #[serde(rename = "use")]
    pub use_: String,
    pub kid: String,
    /// 항상 `"RS256"`
    pub alg: String,
    /// base64url (패딩 없음) modulus
    pub n: String,
    /// base64url (패딩 없음) exponent
    pub e: String,
}

/// JWK Set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Jwks {
    pub keys: Vec<Jwk>,
}
