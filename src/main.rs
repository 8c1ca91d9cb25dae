//! Mock OAuth2 서버 메인 애플리케이션
//!
//! 설정을 읽고 RSA 키 쌍을 미리 생성한 뒤 Actix-web HTTP 서버를 구동합니다.

use actix_cors::Cors;
use actix_web::{App, HttpServer, middleware, web};
use clap::Parser;
use env_logger::Env;
use log::{error, info};
use mock_oauth2_server::config::{ServerConfig, load_env_file};
use mock_oauth2_server::routes::configure_all_routes;
use mock_oauth2_server::state::AppState;

/// 명령행 인자
#[derive(Debug, Parser)]
#[command(name = "mock-oauth2-server", version, about = "Mock OAuth2 / OpenID Connect server")]
struct Args {
    /// 리스닝 포트 (`MOCK_OAUTH_PORT`보다 우선)
    #[arg(long)]
    port: Option<u16>,

    /// issuer/base URL (`MOCK_ISSUER_URL`보다 우선)
    #[arg(long)]
    host: Option<String>,
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();

    load_env_file();
    init_logging();

    info!("🚀 Mock OAuth2 서버 시작중...");

    let mut config = ServerConfig::from_env();
    if let Some(port) = args.port {
        config.port = port;
    }
    if let Some(host) = args.host {
        config.issuer_url = Some(host);
    }
    config.log_summary();

    let state = AppState::new(config);

    // 첫 요청 전에 키 쌍 생성
    info!("🔐 RSA 키 쌍 생성 중...");
    if let Err(e) = state.signer.ensure_keys() {
        error!("❌ RSA 키 쌍 생성 실패: {}", e);
        return Err(std::io::Error::other(e.to_string()));
    }
    info!("✅ RSA 키 쌍 생성 완료");

    start_http_server(state).await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(state: AppState) -> std::io::Result<()> {
    let bind_address = state.config.bind_address();
    let base_url = state.base_url();

    info!("🌐 서버가 {}:{} 에서 실행중입니다", bind_address.0, bind_address.1);
    info!("📍 Issuer: {}", base_url);
    info!("📍 Discovery: {}/.well-known/openid-configuration", base_url);

    let data = web::Data::new(state);

    HttpServer::new(move || {
        App::new()
            .app_data(data.clone())
            .wrap(configure_cors())
            .wrap(middleware::Logger::default())
            .configure(configure_all_routes)
    })
    .bind(bind_address)?
    .run()
    .await
}

/// 로깅 시스템을 초기화합니다
///
/// # Environment Variables
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=info")
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=info"));
}

/// 브라우저 기반 테스트 클라이언트용 CORS 설정
fn configure_cors() -> Cors {
    Cors::permissive()
}
