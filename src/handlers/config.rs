//! 런타임 설정(control plane) 엔드포인트
//!
//! 테스트가 실행 중에 에러 시나리오와 토큰/사용자 클레임을 바꿀 수 있게
//! 합니다.

use actix_web::{HttpResponse, web};
use log::{info, warn};

use crate::domain::{ConfigRequest, ConfigResponse, ConfigSnapshot, Endpoint};
use crate::errors::AppError;
use crate::state::AppState;

/// 설정 갱신
///
/// # Endpoint
/// `POST /config`
///
/// ```json
/// {
///   "user_info": { "name": "Config User" },
///   "tokens": { "user_info": { "email": "a@b.com", "name": "Custom" } },
///   "error_scenario": { "endpoint": "token", "error": "invalid_grant", "enabled": true }
/// }
/// ```
///
/// 모든 섹션은 선택적입니다. `tokens`는 기존 값을 통째로 교체하고,
/// `error_scenario`는 단일 슬롯을 교체합니다.
///
/// # Errors
/// * 400 `invalid_request` - JSON 파싱 실패 또는 알 수 없는 endpoint
pub async fn update_config(
    state: web::Data<AppState>,
    body: web::Bytes,
) -> Result<HttpResponse, AppError> {
    let request: ConfigRequest = serde_json::from_slice(&body).map_err(|e| {
        warn!("⚠️ 잘못된 설정 JSON: {}", e);
        AppError::InvalidRequest(format!("Invalid JSON: {}", e))
    })?;

    if let Some(patch) = &request.user_info {
        state.store.update_default_user(patch);
        info!("⚙️ 기본 mock 사용자 갱신");
    }

    if let Some(tokens) = request.tokens {
        state.store.store_token_config(tokens);
        info!("⚙️ 토큰 오버라이드 설정 교체");
    }

    if let Some(scenario) = &request.error_scenario {
        state.scenarios.configure(scenario);
    }

    Ok(HttpResponse::Ok().json(ConfigResponse::success(
        "Configuration updated successfully",
    )))
}

/// 현재 설정 조회
///
/// # Endpoint
/// `GET /config`
///
/// 비활성화된 에러 시나리오도 그대로 보여줍니다.
pub async fn get_config(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(ConfigSnapshot {
        user: state.store.default_user(),
        tokens: state.store.get_token_config(),
        error_scenario: state.store.current_error_scenario(),
    })
}

/// 에러 시나리오 해제
///
/// # Endpoint
/// `DELETE /config/error_scenario/{endpoint}`
///
/// 저장된 시나리오가 다른 엔드포인트용이면 그대로 둡니다.
pub async fn clear_error_scenario(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let endpoint: Endpoint = path.into_inner().parse().map_err(AppError::InvalidRequest)?;

    let message = if state.scenarios.clear(endpoint) {
        format!("Error scenario cleared for {}", endpoint)
    } else {
        format!("No error scenario configured for {}", endpoint)
    };

    Ok(HttpResponse::Ok().json(ConfigResponse::success(message)))
}
