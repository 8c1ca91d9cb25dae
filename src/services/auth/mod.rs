//! 인증 관련 서비스 모듈
//!
//! - [`key_signer`]: RSA 키 관리, JWT 서명/검증, JWKS
//! - [`token_issuer`]: 인가 코드 → 토큰 교환
//! - [`error_scenario_engine`]: 엔드포인트별 에러 주입

pub mod error_scenario_engine;
pub mod key_signer;
pub mod token_issuer;

pub use error_scenario_engine::*;
pub use key_signer::*;
pub use token_issuer::*;
