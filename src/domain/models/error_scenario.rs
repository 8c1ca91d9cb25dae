//! 에러 시나리오 모델
//!
//! 테스트 클라이언트가 특정 엔드포인트에 강제로 OAuth2 에러를 주입할 때
//! 사용하는 구조체들입니다. 서버는 한 번에 하나의 시나리오만 보관합니다.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// 에러 주입이 가능한 엔드포인트
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Endpoint {
    Authorize,
    Token,
    Userinfo,
}

impl Endpoint {
    pub fn as_str(&self) -> &'static str {
        match self {
            Endpoint::Authorize => "authorize",
            Endpoint::Token => "token",
            Endpoint::Userinfo => "userinfo",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Endpoint {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "authorize" => Ok(Endpoint::Authorize),
            "token" => Ok(Endpoint::Token),
            "userinfo" => Ok(Endpoint::Userinfo),
            other => Err(format!("Unknown endpoint: {}", other)),
        }
    }
}

/// 활성화된 에러 시나리오
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorScenario {
    pub enabled: bool,
    pub endpoint: Endpoint,
    /// 응답 HTTP 상태 코드 (redirect 에러인 `/authorize`에서는 사용되지 않음)
    pub status_code: u16,
    /// OAuth2 `error` 값
    pub error_code: String,
    /// OAuth2 `error_description` 값 (빈 문자열 허용)
    pub description: String,
}

impl ErrorScenario {
    /// 해당 엔드포인트에 적용되어야 하는지 여부
    pub fn applies_to(&self, endpoint: Endpoint) -> bool {
        self.enabled && self.endpoint == endpoint
    }
}
