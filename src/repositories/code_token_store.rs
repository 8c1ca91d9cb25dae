//! 인가 코드 / 액세스 토큰 / 동적 설정을 보관하는 인메모리 저장소
//!
//! 모든 상태는 하나의 [`RwLock`]으로 보호됩니다. 조회는 공유 락, 변경은
//! 배타 락을 사용하며, 락을 잡은 상태로 서명 등 다른 컴포넌트를 호출하지
//! 않습니다.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use log::debug;

use crate::domain::models::{
    AuthorizationGrant, Endpoint, ErrorScenario, TokenOverrideConfig, UserInfo, UserInfoOverride,
};

#[derive(Debug)]
struct StoreState {
    /// code → grant
    auth_codes: HashMap<String, AuthorizationGrant>,
    /// access_token → client_id
    tokens: HashMap<String, String>,
    token_config: TokenOverrideConfig,
    /// 단일 슬롯
    error_scenario: Option<ErrorScenario>,
    default_user: UserInfo,
}

/// 인가 코드와 토큰 저장소
///
/// `AppState`를 통해 `Arc`로 공유되며, 모든 메서드는 `&self`로 호출됩니다.
///
/// # Examples
///
/// ```rust,ignore
/// let store = CodeTokenStore::default();
/// store.store_auth_code("code-1", AuthorizationGrant::new("c1", "http://x/cb", "openid"));
///
/// let grant = store.get_auth_code("code-1").unwrap();
/// assert!(store.redeem_auth_code("code-1", "access-token", &grant.client_id));
/// assert!(store.get_auth_code("code-1").is_none());
/// ```
#[derive(Debug)]
pub struct CodeTokenStore {
    state: RwLock<StoreState>,
}

impl Default for CodeTokenStore {
    fn default() -> Self {
        Self::new(UserInfo::mock_user("testuser@example.com", "Test User"))
    }
}

impl CodeTokenStore {
    /// 기본 mock 사용자 프로필로 빈 저장소를 생성합니다.
    pub fn new(default_user: UserInfo) -> Self {
        Self {
            state: RwLock::new(StoreState {
                auth_codes: HashMap::new(),
                tokens: HashMap::new(),
                token_config: TokenOverrideConfig::default(),
                error_scenario: None,
                default_user,
            }),
        }
    }

    // 모든 변경은 단일 대입이므로 poison 상태여도 데이터는 일관적입니다.
    fn read(&self) -> RwLockReadGuard<'_, StoreState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, StoreState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    // ===== 인가 코드 =====

    /// 인가 코드를 저장합니다. 같은 코드가 있으면 덮어씁니다.
    pub fn store_auth_code(&self, code: &str, grant: AuthorizationGrant) {
        debug!("📝 인가 코드 저장 - client_id: {}", grant.client_id);
        self.write().auth_codes.insert(code.to_string(), grant);
    }

    /// 인가 코드를 조회합니다.
    ///
    /// 만료 여부는 검사하지 않습니다. 호출자가 `expires_at`을 확인해야 합니다.
    pub fn get_auth_code(&self, code: &str) -> Option<AuthorizationGrant> {
        self.read().auth_codes.get(code).cloned()
    }

    /// 인가 코드를 삭제합니다. 없는 코드여도 에러가 아닙니다.
    pub fn remove_auth_code(&self, code: &str) {
        self.write().auth_codes.remove(code);
    }

    /// 인가 코드 교환을 확정합니다.
    ///
    /// 하나의 배타 락 안에서 코드를 제거하고 액세스 토큰을 등록합니다.
    /// 코드가 이미 없으면(다른 요청이 먼저 교환했으면) 아무것도 바꾸지 않고
    /// `false`를 반환합니다.
    pub fn redeem_auth_code(&self, code: &str, access_token: &str, client_id: &str) -> bool {
        let mut state = self.write();
        if state.auth_codes.remove(code).is_none() {
            return false;
        }
        state
            .tokens
            .insert(access_token.to_string(), client_id.to_string());
        true
    }

    // ===== 액세스 토큰 =====

    pub fn store_token(&self, token: &str, client_id: &str) {
        self.write()
            .tokens
            .insert(token.to_string(), client_id.to_string());
    }

    pub fn get_client_id_by_token(&self, token: &str) -> Option<String> {
        self.read().tokens.get(token).cloned()
    }

    /// 토큰 소유 클라이언트의 UserInfo를 생성합니다.
    ///
    /// 기본값은 [`UserInfo::generated_for`]이며, 저장된 `tokens.user_info`
    /// 오버라이드가 있으면 필드 단위로 덮어씁니다.
    pub fn get_user_info_by_token(&self, token: &str) -> Option<UserInfo> {
        let state = self.read();
        let client_id = state.tokens.get(token)?;

        let mut user = UserInfo::generated_for(client_id);
        if let Some(patch) = &state.token_config.user_info {
            patch.apply_to(&mut user);
        }
        Some(user)
    }

    // ===== 토큰 설정 =====

    /// 토큰 오버라이드 설정을 통째로 교체합니다.
    pub fn store_token_config(&self, config: TokenOverrideConfig) {
        self.write().token_config = config;
    }

    /// 현재 토큰 오버라이드 설정의 복사본
    pub fn get_token_config(&self) -> TokenOverrideConfig {
        self.read().token_config.clone()
    }

    // ===== 기본 mock 사용자 =====

    pub fn default_user(&self) -> UserInfo {
        self.read().default_user.clone()
    }

    pub fn update_default_user(&self, patch: &UserInfoOverride) {
        patch.apply_to(&mut self.write().default_user);
    }

    // ===== 에러 시나리오 =====

    /// 에러 시나리오 슬롯을 통째로 교체합니다.
    pub fn store_error_scenario(&self, scenario: ErrorScenario) {
        self.write().error_scenario = Some(scenario);
    }

    /// 활성화되어 있고 엔드포인트가 일치하는 시나리오만 반환합니다.
    pub fn get_error_scenario(&self, endpoint: Endpoint) -> Option<ErrorScenario> {
        self.read()
            .error_scenario
            .as_ref()
            .filter(|scenario| scenario.applies_to(endpoint))
            .cloned()
    }

    /// 활성 여부와 관계없이 저장된 시나리오를 반환합니다.
    pub fn current_error_scenario(&self) -> Option<ErrorScenario> {
        self.read().error_scenario.clone()
    }

    /// 저장된 시나리오의 엔드포인트가 일치할 때만 제거합니다.
    ///
    /// 실제로 제거했으면 `true`.
    pub fn clear_error_scenario(&self, endpoint: Endpoint) -> bool {
        let mut state = self.write();
        match &state.error_scenario {
            Some(scenario) if scenario.endpoint == endpoint => {
                state.error_scenario = None;
                true
            }
            _ => false,
        }
    }
}
