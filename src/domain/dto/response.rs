//! 응답 DTO

use serde::{Deserialize, Serialize};

use crate::domain::models::{ErrorScenario, TokenOverrideConfig, UserInfo};

/// OAuth2 표준 에러 응답 본문 (RFC 6749 §5.2)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OAuthErrorBody {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_description: Option<String>,
}

/// `POST /config` 성공 응답
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigResponse {
    pub status: String,
    pub message: String,
}

impl ConfigResponse {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            status: "success".to_string(),
            message: message.into(),
        }
    }
}

/// `GET /config` 응답 - 현재 서버 설정 스냅샷
#[derive(Debug, Clone, Serialize)]
pub struct ConfigSnapshot {
    /// 기본 mock 사용자
    pub user: UserInfo,
    pub tokens: TokenOverrideConfig,
    pub error_scenario: Option<ErrorScenario>,
}

/// `GET /version` 응답
///
/// 커밋/빌드 정보는 컴파일 시 환경 변수(`GIT_COMMIT`, `BUILD_DATE`,
/// `RUSTC_VERSION`)가 주어진 경우에만 채워집니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VersionInfo {
    pub version: String,
    pub commit: String,
    pub build_date: String,
    pub rust_version: String,
}

impl VersionInfo {
    pub fn current() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            commit: option_env!("GIT_COMMIT").unwrap_or("none").to_string(),
            build_date: option_env!("BUILD_DATE").unwrap_or_default().to_string(),
            rust_version: option_env!("RUSTC_VERSION").unwrap_or("unknown").to_string(),
        }
    }
}
