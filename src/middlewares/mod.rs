//! 미들웨어 모듈
//!
//! # 제공 미들웨어
//!
//! ### Bearer 인증 미들웨어 (BearerAuth)
//! - `Authorization: Bearer <access_token>` 추출
//! - 발급된 액세스 토큰인지 `CodeTokenStore`에서 확인
//! - 토큰 소유자의 `UserInfo`를 request extension에 저장
//! - 필수/선택 인증 모드 지원
//!
//! `/userinfo`는 에러 시나리오를 먼저 확인해야 하므로 미들웨어로 감싸지 않고
//! 같은 해석 함수([`resolve_bearer_user`])를 직접 호출합니다.
//!
//! # 사용 방법
//!
//! ```rust,ignore
//! use actix_web::{web, App, HttpResponse};
//! use mock_oauth2_server::domain::UserInfo;
//! use mock_oauth2_server::middlewares::BearerAuth;
//!
//! async fn whoami(user: web::ReqData<UserInfo>) -> HttpResponse {
//!     HttpResponse::Ok().json(user.into_inner())
//! }
//!
//! App::new()
//!     .app_data(web::Data::new(state))
//!     .service(
//!         web::scope("/protected")
//!             .wrap(BearerAuth::required())
//!             .route("/whoami", web::get().to(whoami)),
//!     )
//! ```

pub mod bearer_auth;
mod bearer_inner;

pub use bearer_auth::{AuthMode, BearerAuth};
pub use bearer_inner::resolve_bearer_user;
