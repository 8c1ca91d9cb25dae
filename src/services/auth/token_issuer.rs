//! 토큰 발급 서비스
//!
//! 인가 코드 grant를 액세스 토큰 + ID 토큰 + 리프레시 토큰으로 교환합니다.
//! [`KeySigner`]로 서명하고 [`CodeTokenStore`]에 발급 결과를 기록합니다.

use std::sync::Arc;

use chrono::Utc;
use log::{info, warn};

use crate::domain::dto::TokenRequest;
use crate::domain::models::{AuthorizationGrant, TokenResponse};
use crate::errors::{AppError, AppResult};
use crate::repositories::CodeTokenStore;
use crate::services::auth::KeySigner;

/// 지원하는 유일한 grant type
pub const AUTHORIZATION_CODE_GRANT: &str = "authorization_code";

const INVALID_CODE: &str = "Invalid authorization code";

/// `user-<client_id>` 형식의 subject
pub fn subject_for(client_id: &str) -> String {
    format!("user-{}", client_id)
}

/// 검증되지 않는 불투명 리프레시 토큰
fn refresh_token_for(client_id: &str) -> String {
    format!(
        "mock-refresh-token-{}-{}",
        client_id,
        Utc::now().format("%Y%m%d%H%M%S")
    )
}

/// 토큰 발급 서비스
#[derive(Debug, Clone)]
pub struct TokenIssuer {
    signer: Arc<KeySigner>,
    store: Arc<CodeTokenStore>,
}

impl TokenIssuer {
    pub fn new(signer: Arc<KeySigner>, store: Arc<CodeTokenStore>) -> Self {
        Self { signer, store }
    }

    /// `/token` 요청을 검증하고 토큰을 발급합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::UnsupportedGrantType` - `grant_type != "authorization_code"`
    /// * `AppError::InvalidGrant` - 없는/만료된/이미 사용된 코드, client_id 또는
    ///   redirect_uri 불일치
    /// * `AppError::Signing` / `AppError::KeyGeneration` - 서명 실패
    pub fn exchange(&self, issuer_url: &str, request: &TokenRequest) -> AppResult<TokenResponse> {
        if request.grant_type != AUTHORIZATION_CODE_GRANT {
            return Err(AppError::UnsupportedGrantType(
                "Unsupported grant type".to_string(),
            ));
        }

        let grant = self
            .store
            .get_auth_code(&request.code)
            .ok_or_else(|| AppError::InvalidGrant(INVALID_CODE.to_string()))?;

        if grant.is_expired(Utc::now()) {
            warn!("⏰ 만료된 인가 코드 - client_id: {}", grant.client_id);
            self.store.remove_auth_code(&request.code);
            return Err(AppError::InvalidGrant(INVALID_CODE.to_string()));
        }

        if grant.client_id != request.client_id {
            return Err(AppError::InvalidGrant("Client ID mismatch".to_string()));
        }

        if grant.redirect_uri != request.redirect_uri {
            return Err(AppError::InvalidGrant("Redirect URI mismatch".to_string()));
        }

        self.issue(issuer_url, &request.code, &grant)
    }

    /// 검증된 grant로 토큰을 서명하고 교환을 확정합니다.
    ///
    /// 서명은 저장소 락 밖에서 수행되며, 확정 시점에 코드가 이미 사라졌다면
    /// (동시 교환) 서명된 토큰은 버려지고 `InvalidGrant`를 반환합니다.
    /// 성공하면 코드는 삭제되어 있고 액세스 토큰은 조회 가능합니다.
    pub fn issue(
        &self,
        issuer_url: &str,
        code: &str,
        grant: &AuthorizationGrant,
    ) -> AppResult<TokenResponse> {
        let subject = subject_for(&grant.client_id);
        let config = self.store.get_token_config();

        let access_token = self.signer.sign_access_token(
            issuer_url,
            &grant.client_id,
            &subject,
            grant.scopes(),
        )?;

        let email = config.id_token_email();
        let name = config.id_token_name();
        let id_token = self.signer.sign_id_token(
            issuer_url,
            &grant.client_id,
            &subject,
            email.as_deref(),
            name.as_deref(),
        )?;

        if !self
            .store
            .redeem_auth_code(code, &access_token, &grant.client_id)
        {
            warn!("⚠️ 인가 코드가 동시에 교환됨 - client_id: {}", grant.client_id);
            return Err(AppError::InvalidGrant(INVALID_CODE.to_string()));
        }

        info!("🎫 토큰 발급 완료 - client_id: {}", grant.client_id);

        Ok(TokenResponse {
            access_token,
            token_type: "Bearer".to_string(),
            expires_in: self.signer.token_lifetime(),
            refresh_token: refresh_token_for(&grant.client_id),
            id_token,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use once_cell::sync::Lazy;
    use serde_json::json;

    static SIGNER: Lazy<Arc<KeySigner>> = Lazy::new(|| Arc::new(KeySigner::new()));

    const ISSUER: &str = "http://localhost:8080";

    fn setup() -> (TokenIssuer, Arc<CodeTokenStore>) {
        let store = Arc::new(CodeTokenStore::default());
        (TokenIssuer::new(SIGNER.clone(), store.clone()), store)
    }

    fn token_request(code: &str) -> TokenRequest {
        TokenRequest {
            grant_type: AUTHORIZATION_CODE_GRANT.to_string(),
            code: code.to_string(),
            client_id: "c1".to_string(),
            redirect_uri: "http://x/cb".to_string(),
            client_secret: None,
        }
    }

    #[test]
    fn test_exchange_issues_tokens_and_consumes_code() {
        let (issuer, store) = setup();
        store.store_auth_code(
            "code-1",
            AuthorizationGrant::new("c1", "http://x/cb", "openid profile"),
        );

        let response = issuer.exchange(ISSUER, &token_request("code-1")).unwrap();

        assert_eq!(response.token_type, "Bearer");
        assert_eq!(response.expires_in, 3600);
        assert!(response.refresh_token.starts_with("mock-refresh-token-c1-"));
        assert!(store.get_auth_code("code-1").is_none());
        assert_eq!(
            store.get_client_id_by_token(&response.access_token).as_deref(),
            Some("c1")
        );

        let access = SIGNER.verify(&response.access_token).unwrap();
        assert_eq!(access["sub"], "user-c1");
        assert_eq!(access["iss"], ISSUER);
        assert_eq!(access["scope"], json!(["openid", "profile"]));

        let id = SIGNER.verify(&response.id_token).unwrap();
        assert_eq!(id["aud"], "c1");
        assert!(!id.contains_key("email"));
        assert!(!id.contains_key("name"));
    }

    #[test]
    fn test_code_cannot_be_exchanged_twice() {
        let (issuer, store) = setup();
        store.store_auth_code("code-1", AuthorizationGrant::new("c1", "http://x/cb", "openid"));

        issuer.exchange(ISSUER, &token_request("code-1")).unwrap();
        let second = issuer.exchange(ISSUER, &token_request("code-1"));

        match second {
            Err(AppError::InvalidGrant(msg)) => assert_eq!(msg, "Invalid authorization code"),
            other => panic!("Expected InvalidGrant, got {:?}", other),
        }
    }

    #[test]
    fn test_expired_code_is_rejected_and_removed() {
        let (issuer, store) = setup();
        let mut grant = AuthorizationGrant::new("c1", "http://x/cb", "openid");
        grant.expires_at = Utc::now() - chrono::Duration::seconds(1);
        store.store_auth_code("old", grant);

        assert!(matches!(
            issuer.exchange(ISSUER, &token_request("old")),
            Err(AppError::InvalidGrant(_))
        ));
        assert!(store.get_auth_code("old").is_none());
    }

    #[test]
    fn test_mismatches_keep_the_code() {
        let (issuer, store) = setup();
        store.store_auth_code("code-1", AuthorizationGrant::new("c1", "http://x/cb", "openid"));

        let mut wrong_client = token_request("code-1");
        wrong_client.client_id = "other".to_string();
        match issuer.exchange(ISSUER, &wrong_client) {
            Err(AppError::InvalidGrant(msg)) => assert_eq!(msg, "Client ID mismatch"),
            other => panic!("Expected InvalidGrant, got {:?}", other),
        }

        let mut wrong_redirect = token_request("code-1");
        wrong_redirect.redirect_uri = "http://evil/cb".to_string();
        match issuer.exchange(ISSUER, &wrong_redirect) {
            Err(AppError::InvalidGrant(msg)) => assert_eq!(msg, "Redirect URI mismatch"),
            other => panic!("Expected InvalidGrant, got {:?}", other),
        }

        assert!(store.get_auth_code("code-1").is_some());
    }

    #[test]
    fn test_unsupported_grant_type() {
        let (issuer, _) = setup();
        let mut request = token_request("whatever");
        request.grant_type = "password".to_string();

        assert!(matches!(
            issuer.exchange(ISSUER, &request),
            Err(AppError::UnsupportedGrantType(_))
        ));
    }

    #[test]
    fn test_id_token_uses_configured_user_info() {
        let (issuer, store) = setup();
        store.store_token_config(
            serde_json::from_value(json!({
                "user_info": { "email": "a@b.com", "name": "Custom" }
            }))
            .unwrap(),
        );
        store.store_auth_code("code-1", AuthorizationGrant::new("c1", "http://x/cb", ""));

        let response = issuer.exchange(ISSUER, &token_request("code-1")).unwrap();

        let id = SIGNER.verify(&response.id_token).unwrap();
        assert_eq!(id["email"], "a@b.com");
        assert_eq!(id["name"], "Custom");

        let access = SIGNER.verify(&response.access_token).unwrap();
        assert_eq!(access["scope"], json!(["openid"]));
    }

    #[test]
    fn test_concurrent_exchange_succeeds_once() {
        let (issuer, store) = setup();
        store.store_auth_code("race", AuthorizationGrant::new("c1", "http://x/cb", "openid"));
        let request = token_request("race");

        let results: Vec<bool> = std::thread::scope(|s| {
            let handles: Vec<_> = (0..4)
                .map(|_| s.spawn(|| issuer.exchange(ISSUER, &request).is_ok()))
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        assert_eq!(results.iter().filter(|ok| **ok).count(), 1);
    }
}
