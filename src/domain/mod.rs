//! # Domain Layer Module
//!
//! 인가 서버의 도메인 타입을 정의합니다.
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── DTOs    - HTTP 요청/응답 계약
//! └── Models  - grant, 토큰 클레임, UserInfo, 에러 시나리오
//!      │
//!      ▼
//! Application Layer (Services)
//!      │
//!      ▼
//! Infrastructure Layer (Repositories)
//! ```

pub mod dto;
pub mod models;

pub use dto::*;
pub use models::*;
