//! Mock OAuth2 / OpenID Connect 인가 서버
//!
//! 통합 테스트에서 실제 Identity Provider 대신 사용하는 인가 서버입니다.
//! Authorization Code 플로우를 사용자 동의 화면 없이 처리하고, RS256으로
//! 서명된 액세스/ID 토큰을 발급하며, 런타임에 에러 응답과 클레임을 바꿀 수
//! 있는 설정 엔드포인트를 제공합니다.
//!
//! # Features
//!
//! - **Authorization Code 플로우**: `/authorize` → `/token` → `/userinfo`
//! - **RS256 JWT**: 프로세스 수명 동안 하나의 RSA 키 쌍, `/jwks`로 공개키 배포
//! - **에러 시나리오**: 엔드포인트별 OAuth2 에러 응답 주입
//! - **클레임 오버라이드**: ID 토큰과 userinfo의 사용자 정보 변경
//! - **인메모리 저장소**: 재시작 시 모든 상태가 사라짐
//! - **Bearer 인증 미들웨어**: 발급된 액세스 토큰으로 보호되는 라우트 구성
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← OAuth2 / OIDC / config 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← KeySigner, TokenIssuer, ErrorScenarioEngine
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← CodeTokenStore (RwLock)
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use mock_oauth2_server::config::ServerConfig;
//! use mock_oauth2_server::state::AppState;
//!
//! let state = AppState::new(ServerConfig::from_env());
//! state.signer.ensure_keys()?;
//! ```

pub mod config;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod middlewares;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;
