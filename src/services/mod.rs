//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스는 `AppState`에서 한 번 생성되어 `Arc`로 공유됩니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::auth::{KeySigner, TokenIssuer};
//!
//! let signer = Arc::new(KeySigner::new());
//! let issuer = TokenIssuer::new(signer.clone(), store.clone());
//! let response = issuer.exchange("http://localhost:8080", &request)?;
//! ```

pub mod auth;
