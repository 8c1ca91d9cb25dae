//! 에러 시나리오 엔진
//!
//! 보호된 엔드포인트(authorize, token, userinfo)는 정상 처리 전에
//! [`ErrorScenarioEngine::consult`]를 호출하여, 활성화된 시나리오가 있으면
//! 그 에러로 즉시 응답합니다. 상태는 [`CodeTokenStore`]의 단일 슬롯에
//! 저장됩니다.

use std::sync::Arc;

use log::info;

use crate::domain::dto::ErrorScenarioRequest;
use crate::domain::models::{Endpoint, ErrorScenario};
use crate::repositories::CodeTokenStore;

/// OAuth2 에러 코드 → HTTP 상태 코드
///
/// 목록에 없는 코드는 400입니다.
pub fn status_code_for(error_code: &str) -> u16 {
    match error_code {
        "invalid_request"
        | "invalid_grant"
        | "unsupported_grant_type"
        | "invalid_scope"
        | "unsupported_response_type" => 400,
        "invalid_client" | "unauthorized_client" => 401,
        "access_denied" => 403,
        "server_error" => 500,
        "temporarily_unavailable" => 503,
        _ => 400,
    }
}

#[derive(Debug, Clone)]
pub struct ErrorScenarioEngine {
    store: Arc<CodeTokenStore>,
}

impl ErrorScenarioEngine {
    pub fn new(store: Arc<CodeTokenStore>) -> Self {
        Self { store }
    }

    /// `/config` 요청으로 시나리오 슬롯을 교체합니다.
    ///
    /// `enabled`가 생략되면 `true`이며, 이전 시나리오는 엔드포인트와
    /// 관계없이 버려집니다.
    pub fn configure(&self, request: &ErrorScenarioRequest) -> ErrorScenario {
        let error_code = request.error.clone().unwrap_or_default();
        let scenario = ErrorScenario {
            enabled: request.enabled.unwrap_or(true),
            endpoint: request.endpoint,
            status_code: status_code_for(&error_code),
            error_code,
            description: request.error_description.clone().unwrap_or_default(),
        };

        info!(
            "⚙️ 에러 시나리오 설정 - endpoint: {}, error: {}, enabled: {}",
            scenario.endpoint, scenario.error_code, scenario.enabled
        );

        self.store.store_error_scenario(scenario.clone());
        scenario
    }

    /// 엔드포인트에 적용할 활성 시나리오를 반환합니다.
    pub fn consult(&self, endpoint: Endpoint) -> Option<ErrorScenario> {
        self.store.get_error_scenario(endpoint)
    }

    /// 저장된 시나리오가 `endpoint`에 대한 것일 때만 제거합니다.
    pub fn clear(&self, endpoint: Endpoint) -> bool {
        let cleared = self.store.clear_error_scenario(endpoint);
        if cleared {
            info!("🧹 에러 시나리오 해제 - endpoint: {}", endpoint);
        }
        cleared
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn engine() -> ErrorScenarioEngine {
        ErrorScenarioEngine::new(Arc::new(CodeTokenStore::default()))
    }

    fn request(value: serde_json::Value) -> ErrorScenarioRequest {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_status_code_table() {
        assert_eq!(status_code_for("invalid_request"), 400);
        assert_eq!(status_code_for("invalid_scope"), 400);
        assert_eq!(status_code_for("invalid_client"), 401);
        assert_eq!(status_code_for("unauthorized_client"), 401);
        assert_eq!(status_code_for("access_denied"), 403);
        assert_eq!(status_code_for("server_error"), 500);
        assert_eq!(status_code_for("temporarily_unavailable"), 503);
        assert_eq!(status_code_for("made_up_error"), 400);
        assert_eq!(status_code_for(""), 400);
    }

    #[test]
    fn test_enabled_defaults_to_true() {
        let engine = engine();
        engine.configure(&request(json!({ "endpoint": "authorize", "error": "access_denied" })));

        let scenario = engine.consult(Endpoint::Authorize).unwrap();
        assert_eq!(scenario.status_code, 403);
        assert_eq!(scenario.error_code, "access_denied");
    }

    #[test]
    fn test_null_description_becomes_empty() {
        let engine = engine();
        let scenario = engine.configure(&request(json!({
            "endpoint": "token",
            "error": "server_error",
            "error_description": null
        })));

        assert_eq!(scenario.status_code, 500);
        assert_eq!(scenario.description, "");
    }

    #[test]
    fn test_explicit_disable() {
        let engine = engine();
        engine.configure(&request(json!({
            "endpoint": "authorize",
            "error": "access_denied",
            "enabled": false
        })));

        assert!(engine.consult(Endpoint::Authorize).is_none());
    }

    #[test]
    fn test_scenario_is_isolated_to_its_endpoint() {
        let engine = engine();
        engine.configure(&request(json!({ "endpoint": "token", "error": "invalid_grant" })));

        assert!(engine.consult(Endpoint::Token).is_some());
        assert!(engine.consult(Endpoint::Authorize).is_none());
        assert!(engine.consult(Endpoint::Userinfo).is_none());
    }

    #[test]
    fn test_new_configuration_replaces_previous_endpoint() {
        let engine = engine();
        engine.configure(&request(json!({ "endpoint": "token", "error": "invalid_grant" })));
        engine.configure(&request(json!({ "endpoint": "userinfo", "error": "invalid_token" })));

        assert!(engine.consult(Endpoint::Token).is_none());
        assert_eq!(engine.consult(Endpoint::Userinfo).unwrap().status_code, 400);
    }

    #[test]
    fn test_clear_ignores_other_endpoints() {
        let engine = engine();
        engine.configure(&request(json!({ "endpoint": "token", "error": "server_error" })));

        assert!(!engine.clear(Endpoint::Authorize));
        assert!(engine.consult(Endpoint::Token).is_some());
        assert!(engine.clear(Endpoint::Token));
        assert!(engine.consult(Endpoint::Token).is_none());
    }
}
