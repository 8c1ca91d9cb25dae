//! # HTTP Request Handlers Module
//!
//! OAuth2 / OpenID Connect 엔드포인트 핸들러입니다. 핸들러는 요청을 파싱하고
//! 서비스 계층을 호출하는 얇은 계층이며, 모든 에러는 [`AppError`]로
//! 반환되어 OAuth2 JSON 형식으로 변환됩니다.
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Client (OAuth2 클라이언트 라이브러리, 테스트)
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   Handlers (이 모듈)                            ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services - KeySigner, TokenIssuer,            ← Service Layer
//!              ErrorScenarioEngine
//! ├─────────────────────────────────────────────┤
//!   Repositories - CodeTokenStore                 ← Repository Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## 엔드포인트
//!
//! | Method | Path | Handler |
//! |--------|------|---------|
//! | GET | `/authorize` | [`authorize::authorize`] |
//! | POST | `/token` | [`token::token`] |
//! | GET | `/userinfo` | [`userinfo::userinfo`] |
//! | GET | `/jwks` | [`discovery::jwks`] |
//! | GET | `/.well-known/openid-configuration` | [`discovery::openid_configuration`] |
//! | GET, POST | `/config` | [`config::get_config`], [`config::update_config`] |
//! | DELETE | `/config/error_scenario/{endpoint}` | [`config::clear_error_scenario`] |
//! | GET | `/version` | [`meta::version`] |
//! | GET | `/callback` | [`meta::callback`] |
//!
//! 에러 시나리오가 설정된 엔드포인트(authorize, token, userinfo)는 다른 모든
//! 검증보다 먼저 시나리오를 확인합니다. (authorize는 필수 파라미터 검증 후)

pub mod authorize;
pub mod config;
pub mod discovery;
pub mod meta;
pub mod token;
pub mod userinfo;

use actix_web::HttpResponse;
use actix_web::http::StatusCode;

use crate::domain::{ErrorScenario, OAuthErrorBody};
use crate::errors::AppError;

/// 에러 시나리오를 JSON 에러 응답으로 변환합니다.
///
/// `description`이 비어 있으면 `error_description`은 생략됩니다.
pub(crate) fn scenario_error_response(scenario: &ErrorScenario) -> HttpResponse {
    let status = StatusCode::from_u16(scenario.status_code).unwrap_or(StatusCode::BAD_REQUEST);

    HttpResponse::build(status).json(OAuthErrorBody {
        error: scenario.error_code.clone(),
        error_description: Some(scenario.description.clone()).filter(|d| !d.is_empty()),
    })
}

/// 등록되지 않은 메서드 (405)
pub async fn method_not_allowed() -> Result<HttpResponse, AppError> {
    Err(AppError::MethodNotAllowed)
}
