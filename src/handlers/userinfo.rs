//! UserInfo 엔드포인트

use actix_web::http::header;
use actix_web::{HttpRequest, HttpResponse, get, web};
use log::{debug, info};

use crate::domain::Endpoint;
use crate::errors::AppError;
use crate::handlers::scenario_error_response;
use crate::middlewares::resolve_bearer_user;
use crate::state::AppState;

/// Bearer 토큰 소유자의 OpenID UserInfo
///
/// # Endpoint
/// `GET /userinfo` (`Authorization: Bearer <access_token>`)
///
/// # Errors
/// * 401 `invalid_token` - 헤더 누락, 형식 오류, 발급되지 않은 토큰
#[get("/userinfo")]
pub async fn userinfo(
    state: web::Data<AppState>,
    req: HttpRequest,
) -> Result<HttpResponse, AppError> {
    if let Some(scenario) = state.scenarios.consult(Endpoint::Userinfo) {
        info!("🚫 userinfo 에러 시나리오 응답 - error: {}", scenario.error_code);
        return Ok(scenario_error_response(&scenario));
    }

    let auth_header = req
        .headers()
        .get(header::AUTHORIZATION)
        .map(|value| value.to_str().unwrap_or_default());
    let user = resolve_bearer_user(&state.store, auth_header)?;

    debug!("👤 userinfo 조회 - sub: {}", user.sub);

    Ok(HttpResponse::Ok().json(user))
}
