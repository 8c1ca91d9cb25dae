//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 이 서버의 상태는 재시작 시 사라지는 인메모리 저장소 하나뿐입니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use mock_oauth2_server::repositories::CodeTokenStore;
//!
//! let store = CodeTokenStore::default();
//! store.store_token("access-token", "client-1");
//! assert_eq!(store.get_client_id_by_token("access-token").as_deref(), Some("client-1"));
//! ```

pub mod code_token_store;

pub use code_token_store::CodeTokenStore;
