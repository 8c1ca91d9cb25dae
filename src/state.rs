//! 애플리케이션 공유 상태
//!
//! 시작 시 한 번 구성되어 `web::Data<AppState>`로 모든 핸들러에 전달됩니다.
//! 전역 싱글톤 없이 각 컴포넌트를 `Arc`로 명시적으로 공유합니다.

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::domain::models::UserInfo;
use crate::repositories::CodeTokenStore;
use crate::services::auth::{ErrorScenarioEngine, KeySigner, TokenIssuer};

#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    pub store: Arc<CodeTokenStore>,
    pub signer: Arc<KeySigner>,
    pub issuer: TokenIssuer,
    pub scenarios: ErrorScenarioEngine,
}

impl AppState {
    /// 설정의 토큰 유효 시간으로 새 서명기를 만들어 상태를 구성합니다.
    ///
    /// 키 쌍은 아직 생성되지 않습니다. 시작 시 `signer.ensure_keys()`를
    /// 호출하면 첫 요청 전에 생성됩니다.
    pub fn new(config: ServerConfig) -> Self {
        let signer = Arc::new(KeySigner::with_lifetime(config.token_expiry));
        Self::with_signer(config, signer)
    }

    /// 이미 만들어진 서명기를 공유하여 상태를 구성합니다.
    pub fn with_signer(config: ServerConfig, signer: Arc<KeySigner>) -> Self {
        let store = Arc::new(CodeTokenStore::new(UserInfo::mock_user(
            &config.user_email,
            &config.user_name,
        )));

        Self {
            issuer: TokenIssuer::new(signer.clone(), store.clone()),
            scenarios: ErrorScenarioEngine::new(store.clone()),
            config: Arc::new(config),
            store,
            signer,
        }
    }

    /// 토큰 `iss`와 discovery 문서의 base URL
    pub fn base_url(&self) -> String {
        self.config.base_url()
    }
}
