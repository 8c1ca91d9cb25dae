//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 모든 에러를
//! OAuth2 표준 형식의 JSON 응답으로 변환합니다.
//!
//! ## 응답 형식
//!
//! ```json
//! {
//!   "error": "invalid_grant",
//!   "error_description": "Invalid authorization code"
//! }
//! ```
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | `error` |
//! |----------|-------------|---------|
//! | `InvalidRequest` | 400 | `invalid_request` |
//! | `UnsupportedResponseType` | 400 | `unsupported_response_type` |
//! | `UnsupportedGrantType` | 400 | `unsupported_grant_type` |
//! | `InvalidGrant` | 400 | `invalid_grant` |
//! | `InvalidToken` | 401 | `invalid_token` |
//! | `MethodNotAllowed` | 405 | `invalid_request` |
//! | `KeyGeneration` / `Signing` / `InternalError` | 500 | `server_error` |
//!
//! 5xx 에러는 상세 원인을 로그에만 남기고 클라이언트에는 일반 메시지만 반환합니다.

use actix_web::http::StatusCode;
use thiserror::Error;

use crate::domain::OAuthErrorBody;

/// 애플리케이션 전역 에러 타입
#[derive(Error, Debug)]
pub enum AppError {
    /// 필수 파라미터 누락, 잘못된 JSON 등 (400 Bad Request)
    #[error("{0}")]
    InvalidRequest(String),

    /// `response_type != "code"` (400 Bad Request)
    #[error("{0}")]
    UnsupportedResponseType(String),

    /// `grant_type != "authorization_code"` (400 Bad Request)
    #[error("{0}")]
    UnsupportedGrantType(String),

    /// 존재하지 않거나 만료/재사용된 코드, client_id·redirect_uri 불일치 (400 Bad Request)
    #[error("{0}")]
    InvalidGrant(String),

    /// Bearer 토큰 누락·형식 오류·미등록, JWT 검증 실패 (401 Unauthorized)
    #[error("{0}")]
    InvalidToken(String),

    /// 허용되지 않은 HTTP 메서드 (405 Method Not Allowed)
    #[error("Method not allowed")]
    MethodNotAllowed,

    /// RSA 키 생성 실패 (500 Internal Server Error)
    #[error("Key generation failed: {0}")]
    KeyGeneration(String),

    /// JWT 서명 실패 (500 Internal Server Error)
    #[error("Token signing failed: {0}")]
    Signing(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 응답 본문의 OAuth2 `error` 코드
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::InvalidRequest(_) | AppError::MethodNotAllowed => "invalid_request",
            AppError::UnsupportedResponseType(_) => "unsupported_response_type",
            AppError::UnsupportedGrantType(_) => "unsupported_grant_type",
            AppError::InvalidGrant(_) => "invalid_grant",
            AppError::InvalidToken(_) => "invalid_token",
            AppError::KeyGeneration(_) | AppError::Signing(_) | AppError::InternalError(_) => {
                "server_error"
            }
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidRequest(_)
            | AppError::UnsupportedResponseType(_)
            | AppError::UnsupportedGrantType(_)
            | AppError::InvalidGrant(_) => StatusCode::BAD_REQUEST,
            AppError::InvalidToken(_) => StatusCode::UNAUTHORIZED,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 내부 에러는 원인을 로그로만 남기고 `"Internal Server Error"`로 응답합니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        let status = self.status_code();

        let description = if status.is_server_error() {
            log::error!("❌ {}", self);
            "Internal Server Error".to_string()
        } else {
            self.to_string()
        };

        actix_web::HttpResponse::build(status).json(OAuthErrorBody {
            error: self.error_code().to_string(),
            error_description: Some(description),
        })
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }
}
