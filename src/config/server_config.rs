//! 서버 및 mock 사용자 설정 관리 모듈
//!
//! 모든 값은 시작 시 한 번 환경 변수에서 읽습니다.

use std::env;
use std::fmt::Display;
use std::str::FromStr;

use log::{info, warn};

use crate::services::auth::DEFAULT_TOKEN_LIFETIME_SECS;

/// 기본 포트
pub const DEFAULT_PORT: u16 = 8080;

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    /// 개발 환경
    Development,
    /// 테스트 환경 - 자동화된 테스트용 설정
    Test,
    /// 스테이징 환경
    Staging,
    /// 프로덕션 환경
    Production,
}

impl Environment {
    /// 문자열에서 Environment를 생성합니다. (대소문자 무관)
    ///
    /// 알 수 없는 값은 mock 서버 특성상 `Test`입니다.
    pub fn from_name(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "staging" | "stage" => Environment::Staging,
            "production" | "prod" => Environment::Production,
            _ => Environment::Test,
        }
    }
}

/// 서버 설정
///
/// | 환경 변수 | 기본값 |
/// |-----------|--------|
/// | `MOCK_OAUTH_PORT` | `8080` |
/// | `MOCK_OAUTH_HOST` | `0.0.0.0` |
/// | `MOCK_ISSUER_URL` | `http://localhost:<port>` |
/// | `MOCK_USER_EMAIL` | `testuser@example.com` |
/// | `MOCK_USER_NAME` | `Test User` |
/// | `MOCK_TOKEN_EXPIRY` | `3600` (초) |
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    /// 바인딩 주소
    pub host: String,
    pub port: u16,
    /// 명시적으로 지정된 issuer/base URL
    pub issuer_url: Option<String>,
    pub user_email: String,
    pub user_name: String,
    /// 토큰 유효 시간 (초)
    pub token_expiry: i64,
    pub environment: Environment,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

impl ServerConfig {
    /// 프로세스 환경 변수에서 설정을 읽습니다.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 임의의 조회 함수로 설정을 구성합니다.
    ///
    /// 숫자 값을 파싱할 수 없으면 경고를 남기고 기본값을 사용합니다.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = parse_or(&lookup, "MOCK_OAUTH_PORT", DEFAULT_PORT);

        let mut token_expiry = parse_or(&lookup, "MOCK_TOKEN_EXPIRY", DEFAULT_TOKEN_LIFETIME_SECS);
        if token_expiry <= 0 {
            warn!(
                "⚠️ MOCK_TOKEN_EXPIRY는 양수여야 합니다: {}. 기본값 {} 사용",
                token_expiry, DEFAULT_TOKEN_LIFETIME_SECS
            );
            token_expiry = DEFAULT_TOKEN_LIFETIME_SECS;
        }

        Self {
            host: lookup("MOCK_OAUTH_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port,
            issuer_url: lookup("MOCK_ISSUER_URL").filter(|url| !url.is_empty()),
            user_email: lookup("MOCK_USER_EMAIL")
                .unwrap_or_else(|| "testuser@example.com".to_string()),
            user_name: lookup("MOCK_USER_NAME").unwrap_or_else(|| "Test User".to_string()),
            token_expiry,
            environment: lookup("ENVIRONMENT")
                .map(|name| Environment::from_name(&name))
                .unwrap_or(Environment::Test),
        }
    }

    /// 토큰 `iss`와 discovery 문서에 사용하는 base URL
    ///
    /// 끝의 `/`는 제거됩니다.
    pub fn base_url(&self) -> String {
        match &self.issuer_url {
            Some(url) => url.trim_end_matches('/').to_string(),
            None => format!("http://localhost:{}", self.port),
        }
    }

    pub fn bind_address(&self) -> (String, u16) {
        (self.host.clone(), self.port)
    }

    pub fn log_summary(&self) {
        info!("🔧 실행 환경: {:?}", self.environment);
        info!("🔧 Issuer URL: {}", self.base_url());
        info!("🔧 기본 사용자: {} <{}>", self.user_name, self.user_email);
        info!("🔧 토큰 유효 시간: {}초", self.token_expiry);
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: FromStr + Display + Copy,
    T::Err: Display,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|e| {
            warn!("⚠️ {} 파싱 실패 ({}): {}. 기본값 {} 사용", key, raw, e, default);
            default
        }),
        None => default,
    }
}

/// `PROFILE`에 따라 `.env` 파일을 로드합니다.
///
/// * `PROFILE=dev` - `.env.dev`
/// * `PROFILE=prod` - `.env.prod`
/// * 기타 - `.env`
///
/// 파일이 없어도 에러가 아닙니다.
pub fn load_env_file() {
    let profile = env::var("PROFILE").unwrap_or_default();

    let result = match profile.as_str() {
        "prod" => dotenv::from_filename(".env.prod"),
        "dev" => dotenv::from_filename(".env.dev"),
        _ => dotenv::dotenv(),
    };

    match result {
        Ok(path) => info!("📄 환경 파일 로드됨: {}", path.display()),
        Err(e) => info!("📄 환경 파일 없음 (profile: {:?}): {}", profile, e),
    }
}
