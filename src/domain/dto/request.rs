//! 요청 DTO
//!
//! 쿼리 스트링, 폼, JSON 본문으로 들어오는 입력 구조체들입니다.

use serde::Deserialize;
use validator::Validate;

use crate::domain::models::user_info::lenient;
use crate::domain::models::{Endpoint, TokenOverrideConfig, UserInfoOverride};
use crate::utils::validate_redirect_uri;

/// `GET /authorize` 쿼리 파라미터
///
/// 필수 파라미터가 빠지면 400 `invalid_request`로 응답합니다.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct AuthorizeQuery {
    #[validate(length(min = 1, message = "client_id is required"))]
    pub client_id: String,

    #[validate(
        length(min = 1, message = "redirect_uri is required"),
        custom(function = "validate_redirect_uri")
    )]
    pub redirect_uri: String,

    #[validate(length(min = 1, message = "scope is required"))]
    pub scope: String,

    pub response_type: String,

    /// 클라이언트 state. 비어 있으면 redirect에 포함하지 않습니다.
    pub state: Option<String>,
}

impl AuthorizeQuery {
    pub fn state(&self) -> Option<&str> {
        self.state.as_deref().filter(|s| !s.is_empty())
    }
}

/// `POST /token` 폼 파라미터 (`application/x-www-form-urlencoded`)
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TokenRequest {
    pub grant_type: String,
    pub code: String,
    pub client_id: String,
    pub redirect_uri: String,
    /// 검증하지 않음
    pub client_secret: Option<String>,
}

/// `/config`의 `error_scenario` 객체
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorScenarioRequest {
    /// 생략하면 `true`
    #[serde(default)]
    pub enabled: Option<bool>,
    pub endpoint: Endpoint,
    /// `null`이나 문자열이 아닌 값은 생략된 것으로 취급
    #[serde(default, deserialize_with = "lenient")]
    pub error: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub error_description: Option<String>,
}

/// `POST /config` 본문
///
/// 모든 섹션은 선택적이며, 존재하는 섹션만 적용됩니다.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigRequest {
    /// 기본 mock 사용자 프로필 패치
    #[serde(default)]
    pub user_info: Option<UserInfoOverride>,
    /// 토큰 클레임 오버라이드 (전체 교체)
    #[serde(default)]
    pub tokens: Option<TokenOverrideConfig>,
    #[serde(default)]
    pub error_scenario: Option<ErrorScenarioRequest>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_authorize_query_validation() {
        let query = AuthorizeQuery {
            client_id: "c1".into(),
            redirect_uri: "http://localhost/cb".into(),
            scope: String::new(),
            response_type: "code".into(),
            state: None,
        };

        let errors = query.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("scope"));
    }

    #[test]
    fn test_empty_state_is_treated_as_absent() {
        let query = AuthorizeQuery {
            state: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(query.state(), None);
    }

    #[test]
    fn test_config_request_sections() {
        let request: ConfigRequest = serde_json::from_value(json!({
            "error_scenario": { "endpoint": "userinfo", "error": "invalid_token" }
        }))
        .unwrap();

        assert!(request.user_info.is_none());
        assert!(request.tokens.is_none());

        let scenario = request.error_scenario.unwrap();
        assert_eq!(scenario.endpoint, Endpoint::Userinfo);
        assert_eq!(scenario.enabled, None);
        assert_eq!(scenario.error_description, None);
    }

    #[test]
    fn test_null_scenario_fields_are_treated_as_absent() {
        let request: ConfigRequest = serde_json::from_value(json!({
            "error_scenario": {
                "endpoint": "token",
                "error": "invalid_grant",
                "error_description": null
            }
        }))
        .unwrap();

        let scenario = request.error_scenario.unwrap();
        assert_eq!(scenario.error.as_deref(), Some("invalid_grant"));
        assert_eq!(scenario.error_description, None);
    }

    #[test]
    fn test_redirect_uri_must_be_absolute_url_without_control_chars() {
        let base = AuthorizeQuery {
            client_id: "c1".into(),
            redirect_uri: "http://x/cb".into(),
            scope: "openid".into(),
            response_type: "code".into(),
            state: None,
        };
        assert!(base.validate().is_ok());

        for bad in ["http://x/cb\nevil", "relative/cb"] {
            let query = AuthorizeQuery {
                redirect_uri: bad.into(),
                ..base.clone()
            };
            let errors = query.validate().unwrap_err();
            assert!(errors.field_errors().contains_key("redirect_uri"));
        }
    }

    #[test]
    fn test_unknown_scenario_endpoint_is_rejected() {
        let result: Result<ConfigRequest, _> = serde_json::from_value(json!({
            "error_scenario": { "endpoint": "jwks", "error": "server_error" }
        }));
        assert!(result.is_err());
    }
}
