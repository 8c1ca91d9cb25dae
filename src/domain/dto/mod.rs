//! # Data Transfer Objects (DTO) Module
//!
//! HTTP 경계에서 주고받는 요청/응답 구조체입니다.
//!
//! | 모듈 | 역할 |
//! |------|------|
//! | [`request`] | 쿼리, 폼, JSON 본문 매핑 및 `validator` 검증 |
//! | [`response`] | JSON 응답 본문 |

pub mod request;
pub mod response;

pub use request::*;
pub use response::*;
