//! Bearer 토큰 인증 미들웨어
//!
//! `/token`에서 발급된 액세스 토큰을 검증하고 토큰 소유자의 [`UserInfo`]를
//! request extension에 저장합니다. 핸들러는 `web::ReqData<UserInfo>`로
//! 꺼내 씁니다.
//!
//! [`UserInfo`]: crate::domain::UserInfo

use std::future::{Ready, ready};
use std::rc::Rc;

use actix_web::{
    Error, Result,
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
};

use crate::middlewares::bearer_inner::BearerAuthService;

/// 인증 모드
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    /// 유효한 토큰이 없으면 401 `invalid_token`
    Required,
    /// 토큰이 없거나 유효하지 않아도 요청을 진행 (extension 없음)
    Optional,
}

/// Bearer 토큰 인증 미들웨어
#[derive(Debug, Clone)]
pub struct BearerAuth {
    mode: AuthMode,
}

impl BearerAuth {
    pub fn new(mode: AuthMode) -> Self {
        Self { mode }
    }

    /// 필수 인증 미들웨어 생성
    pub fn required() -> Self {
        Self::new(AuthMode::Required)
    }

    /// 선택적 인증 미들웨어 생성
    pub fn optional() -> Self {
        Self::new(AuthMode::Optional)
    }
}

/// ActixWeb Transform trait 구현
impl<S, B> Transform<S, ServiceRequest> for BearerAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = BearerAuthService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(BearerAuthService {
            service: Rc::new(service),
            mode: self.mode,
        }))
    }
}
