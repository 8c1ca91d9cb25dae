//! BearerAuth 인증 로직의 핵심적인 기능
use std::rc::Rc;

use actix_web::body::EitherBody;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, forward_ready};
use actix_web::http::header;
use actix_web::{Error, HttpMessage, ResponseError, web};
use futures_util::future::LocalBoxFuture;

use crate::domain::UserInfo;
use crate::errors::{AppError, AppResult};
use crate::middlewares::AuthMode;
use crate::repositories::CodeTokenStore;
use crate::state::AppState;
use crate::utils::{extract_bearer_token, mask_token};

/// 실제 인증 로직을 수행하는 서비스
pub struct BearerAuthService<S> {
    pub service: Rc<S>,
    pub mode: AuthMode,
}

impl<S, B> Service<ServiceRequest> for BearerAuthService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();
        let mode = self.mode;

        Box::pin(async move {
            match (mode, authenticate_request(&req)) {
                // Required 모드에서 인증 실패
                (AuthMode::Required, Err(err)) => {
                    log::warn!("🔒 인증 실패: {}", err);
                    let response = err.error_response();
                    let (req, _) = req.into_parts();
                    return Ok(ServiceResponse::new(req, response).map_into_right_body());
                }
                (_, Ok(user)) => {
                    log::debug!("✅ Bearer 인증 성공 - sub: {}", user.sub);
                    req.extensions_mut().insert(user);
                }
                // Optional 모드에서 인증 실패 (진행 허용)
                (AuthMode::Optional, Err(_)) => {
                    log::debug!("선택적 인증: 유효한 토큰 없음, 요청 진행");
                }
            }

            let res = service.call(req).await?;
            Ok(res.map_into_left_body())
        })
    }
}

/// 요청의 Authorization 헤더로 사용자 정보를 조회
fn authenticate_request(req: &ServiceRequest) -> AppResult<UserInfo> {
    let state = req
        .app_data::<web::Data<AppState>>()
        .ok_or_else(|| AppError::InternalError("AppState is not registered".to_string()))?;

    let auth_header = req
        .headers()
        .get(header::AUTHORIZATION)
        .map(|value| value.to_str().unwrap_or_default());

    resolve_bearer_user(&state.store, auth_header)
}

/// Bearer 토큰을 발급된 액세스 토큰으로 해석하여 UserInfo를 반환합니다.
///
/// # Errors
///
/// * `AppError::InvalidToken` - 헤더 누락, `Bearer ` 형식 아님, 발급되지 않은 토큰
pub fn resolve_bearer_user(
    store: &CodeTokenStore,
    auth_header: Option<&str>,
) -> AppResult<UserInfo> {
    let token = extract_bearer_token(auth_header)?;

    store.get_user_info_by_token(token).ok_or_else(|| {
        log::debug!("🔍 알 수 없는 액세스 토큰: {}", mask_token(token));
        AppError::InvalidToken("Unauthorized - Invalid token".to_string())
    })
}
