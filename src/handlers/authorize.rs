//! Authorization 엔드포인트
//!
//! 사용자 동의 화면 없이 즉시 인가 코드를 발급하고 `redirect_uri`로
//! 리다이렉트합니다.

use actix_web::http::header;
use actix_web::{HttpResponse, get, web};
use log::info;
use url::Url;
use uuid::Uuid;
use validator::Validate;

use crate::domain::{AuthorizationGrant, AuthorizeQuery, Endpoint};
use crate::errors::AppError;
use crate::state::AppState;
use crate::utils::build_redirect_url;

/// 인가 코드 발급
///
/// # Endpoint
/// `GET /authorize?client_id&redirect_uri&scope&response_type=code&state?`
///
/// # 처리 순서
/// 1. 필수 파라미터와 `redirect_uri` 형식 검증 (실패 시 400, 저장소 변경 없음)
/// 2. `authorize` 에러 시나리오가 활성화되어 있으면 `error`,
///    `error_description`, `state`를 붙여 리다이렉트 (코드 발급 없음)
/// 3. UUID v4 코드를 10분 유효로 저장하고 `code`, `state`를 붙여 302 리다이렉트
#[get("/authorize")]
pub async fn authorize(
    state: web::Data<AppState>,
    query: Result<web::Query<AuthorizeQuery>, actix_web::Error>,
) -> Result<HttpResponse, AppError> {
    let query = query
        .map_err(|e| AppError::InvalidRequest(format!("Invalid request parameters: {}", e)))?
        .into_inner();

    query
        .validate()
        .map_err(|e| AppError::InvalidRequest(format!("Invalid request parameters: {}", e)))?;

    let redirect_uri = Url::parse(&query.redirect_uri)
        .map_err(|e| AppError::InvalidRequest(format!("Invalid redirect URI: {}", e)))?;

    if query.response_type != "code" {
        return Err(AppError::UnsupportedResponseType(format!(
            "Unsupported response type: {}",
            query.response_type
        )));
    }

    if let Some(scenario) = state.scenarios.consult(Endpoint::Authorize) {
        info!(
            "🚫 authorize 에러 시나리오 응답 - error: {}, description: {}",
            scenario.error_code, scenario.description
        );

        let mut params = vec![("error", scenario.error_code.as_str())];
        if !scenario.description.is_empty() {
            params.push(("error_description", scenario.description.as_str()));
        }
        if let Some(client_state) = query.state() {
            params.push(("state", client_state));
        }

        return Ok(found(&build_redirect_url(&redirect_uri, &params)));
    }

    let code = Uuid::new_v4().to_string();
    state.store.store_auth_code(
        &code,
        AuthorizationGrant::new(&query.client_id, &query.redirect_uri, &query.scope),
    );

    info!(
        "✅ 인가 코드 발급 - client_id: {}, scope: {}",
        query.client_id, query.scope
    );

    let mut params = vec![("code", code.as_str())];
    if let Some(client_state) = query.state() {
        params.push(("state", client_state));
    }

    Ok(found(&build_redirect_url(&redirect_uri, &params)))
}

fn found(location: &str) -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, location))
        .finish()
}
