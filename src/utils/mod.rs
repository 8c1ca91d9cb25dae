//! 공통 유틸리티 함수 모듈
//!
//! # Modules
//!
//! - [`string_utils`] - Bearer 헤더 파싱, 토큰 마스킹
//! - [`url_utils`] - 리다이렉트 URL 구성
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::utils::{build_redirect_url, extract_bearer_token, mask_token};
//!
//! let token = extract_bearer_token(Some("Bearer eyJhbGciOi..."))?;
//! log::info!("token: {}", mask_token(token));
//!
//! let location = build_redirect_url("http://localhost/cb", &[("code", "abc")]);
//! ```

pub mod string_utils;
pub mod url_utils;

pub use string_utils::*;
pub use url_utils::*;
