//! Token 엔드포인트

use actix_web::http::header;
use actix_web::{HttpResponse, web};
use log::{info, warn};

use crate::domain::{Endpoint, TokenRequest};
use crate::errors::AppError;
use crate::handlers::scenario_error_response;
use crate::state::AppState;

/// 인가 코드 → 토큰 교환
///
/// # Endpoint
/// `POST /token` (`application/x-www-form-urlencoded`)
///
/// `token` 에러 시나리오가 활성화되어 있으면 폼을 해석하기 전에 설정된
/// 상태 코드와 JSON 에러로 응답하며, 인가 코드는 소비되지 않습니다.
///
/// # Errors
/// * 400 `invalid_request` - 폼 파싱 실패
/// * 400 `unsupported_grant_type`
/// * 400 `invalid_grant` - 없는/만료/재사용 코드, client_id/redirect_uri 불일치
pub async fn token(
    state: web::Data<AppState>,
    form: Result<web::Form<TokenRequest>, actix_web::Error>,
) -> Result<HttpResponse, AppError> {
    if let Some(scenario) = state.scenarios.consult(Endpoint::Token) {
        info!("🚫 token 에러 시나리오 응답 - error: {}", scenario.error_code);
        return Ok(scenario_error_response(&scenario));
    }

    let request = form
        .map_err(|e| {
            warn!("⚠️ token 요청 폼 파싱 실패: {}", e);
            AppError::InvalidRequest("Invalid request".to_string())
        })?
        .into_inner();

    let response = state.issuer.exchange(&state.base_url(), &request)?;

    Ok(HttpResponse::Ok()
        .insert_header((header::CACHE_CONTROL, "no-store"))
        .json(response))
}
