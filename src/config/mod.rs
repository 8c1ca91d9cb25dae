//! # Configuration Module
//!
//! 환경 변수 기반 설정을 관리합니다.
//!
//! ## 모듈 구성
//!
//! - [`server_config`] - 바인딩 주소, issuer URL, 기본 mock 사용자, 토큰 유효 시간
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use mock_oauth2_server::config::{load_env_file, ServerConfig};
//!
//! load_env_file();
//! let config = ServerConfig::from_env();
//! println!("Issuer: {}", config.base_url());
//! ```
//!
//! ## 환경 변수
//!
//! ```bash
//! export MOCK_OAUTH_PORT="8080"
//! export MOCK_OAUTH_HOST="0.0.0.0"
//! export MOCK_ISSUER_URL="http://localhost:8080"
//! export MOCK_USER_EMAIL="testuser@example.com"
//! export MOCK_USER_NAME="Test User"
//! export MOCK_TOKEN_EXPIRY="3600"
//! export ENVIRONMENT="test"   # development, test, staging, production
//! export PROFILE="dev"        # .env.dev / .env.prod / .env
//! ```

pub mod server_config;

pub use server_config::*;
