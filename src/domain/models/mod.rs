//! # Domain Models Module
//!
//! 인가 서버 내부에서 다루는 값 객체들입니다.
//!
//! ```text
//! models/
//! ├── grant.rs           ← 인가 코드 grant
//! ├── token.rs           ← JWT 클레임, 토큰 응답, JWKS, 토큰 오버라이드
//! ├── user_info.rs       ← UserInfo 프로필 및 부분 오버라이드
//! └── error_scenario.rs  ← 에러 주입 시나리오
//! ```

pub mod error_scenario;
pub mod grant;
pub mod token;
pub mod user_info;

pub use error_scenario::*;
pub use grant::*;
pub use token::*;
pub use user_info::{UserInfo, UserInfoOverride};
