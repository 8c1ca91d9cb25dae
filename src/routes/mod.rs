//! API 라우트 설정 모듈
//!
//! OAuth2 / OIDC 엔드포인트와 런타임 설정(control plane) 엔드포인트를
//! 등록합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//!
//! let app = App::new()
//!     .app_data(web::Data::new(state))
//!     .configure(configure_all_routes);
//! ```

use crate::handlers;
use actix_web::web;
use serde_json::json;

/// 모든 라우트를 설정합니다
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(health_check);

    configure_oauth_routes(cfg);
    configure_control_routes(cfg);
}

/// OAuth2 / OpenID Connect 라우트
///
/// - `GET /authorize`
/// - `POST /token` (다른 메서드는 405)
/// - `GET /userinfo`
/// - `GET /jwks`
/// - `GET /.well-known/openid-configuration`
/// - `GET /callback`
fn configure_oauth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::authorize::authorize)
        .service(
            web::resource("/token")
                .route(web::post().to(handlers::token::token))
                .default_service(web::to(handlers::method_not_allowed)),
        )
        .service(handlers::userinfo::userinfo)
        .service(handlers::discovery::jwks)
        .service(handlers::discovery::openid_configuration)
        .service(handlers::meta::callback);
}

/// 테스트 제어용 라우트
///
/// - `GET /config`, `POST /config` (다른 메서드는 405)
/// - `DELETE /config/error_scenario/{endpoint}`
/// - `GET /version`
///
/// ```bash
/// curl -X POST http://localhost:8080/config \
///   -H "Content-Type: application/json" \
///   -d '{"error_scenario":{"endpoint":"token","error":"invalid_grant"}}'
/// ```
fn configure_control_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/config")
            .route(web::get().to(handlers::config::get_config))
            .route(web::post().to(handlers::config::update_config))
            .default_service(web::to(handlers::method_not_allowed)),
    )
    .service(
        web::resource("/config/error_scenario/{endpoint}")
            .route(web::delete().to(handlers::config::clear_error_scenario)),
    )
    .service(handlers::meta::version);
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// ```bash
/// curl http://localhost:8080/health
/// ```
///
/// Response:
/// ```json
/// {
///   "status": "healthy",
///   "service": "mock_oauth2_server",
///   "version": "0.1.0",
///   "timestamp": "2026-01-01T00:00:00Z"
/// }
/// ```
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
