//! 버전 정보와 콜백 엔드포인트

use actix_web::{HttpResponse, get};

use crate::domain::VersionInfo;

/// 빌드 버전 정보
///
/// # Endpoint
/// `GET /version`
#[get("/version")]
pub async fn version() -> HttpResponse {
    HttpResponse::Ok().json(VersionInfo::current())
}

/// 테스트용 리다이렉트 대상. 빈 본문으로 200을 반환합니다.
///
/// # Endpoint
/// `GET /callback`
#[get("/callback")]
pub async fn callback() -> HttpResponse {
    HttpResponse::Ok().finish()
}
