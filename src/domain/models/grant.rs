//! 인가 코드 grant 모델

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

/// 인가 코드 유효 시간 (분)
pub const AUTH_CODE_TTL_MINUTES: i64 = 10;

/// `/authorize`에서 발급되어 `/token`에서 정확히 한 번 소비되는 인가 정보
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthorizationGrant {
    pub client_id: String,
    pub redirect_uri: String,
    /// 공백으로 구분된 scope 문자열 (요청 그대로)
    pub scope: String,
    pub expires_at: DateTime<Utc>,
}

impl AuthorizationGrant {
    /// 현재 시각 기준 10분 뒤 만료되는 grant를 생성합니다.
    pub fn new(
        client_id: impl Into<String>,
        redirect_uri: impl Into<String>,
        scope: impl Into<String>,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            redirect_uri: redirect_uri.into(),
            scope: scope.into(),
            expires_at: Utc::now() + Duration::minutes(AUTH_CODE_TTL_MINUTES),
        }
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at < now
    }

    /// 액세스 토큰에 기록할 scope 목록. 비어 있으면 `["openid"]`.
    pub fn scopes(&self) -> Vec<String> {
        let scopes: Vec<String> = self.scope.split_whitespace().map(str::to_string).collect();
        if scopes.is_empty() {
            vec!["openid".to_string()]
        } else {
            scopes
        }
    }
}
