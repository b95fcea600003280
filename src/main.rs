//! 인증 서비스 메인 애플리케이션
//!
//! 설정을 읽고, 사용자 저장소를 연결한 뒤 Actix-web HTTP 서버를 구동합니다.
//! 설정 로드나 데이터베이스 연결에 실패하면 재시도 없이 즉시 종료합니다.

use std::io;
use std::sync::Arc;

use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info, warn};

use phone_auth_service::config::{AppConfig, StoreBackend};
use phone_auth_service::core::AppState;
use phone_auth_service::db::Database;
use phone_auth_service::repositories::users::{InMemoryUserStore, MongoUserRepository, UserStore};
use phone_auth_service::routes::configure_all_routes;
use phone_auth_service::services::auth::CredentialHasher;

#[actix_web::main]
async fn main() -> io::Result<()> {
    let env_file = load_env_file();
    init_logging();

    info!("🚀 인증 서비스 시작중...");
    match env_file {
        Ok(name) => info!("{} 파일 로드 됨", name),
        Err(e) => warn!("환경 파일 로드 실패 (프로세스 환경 변수만 사용): {}", e),
    }

    let config = AppConfig::from_env().map_err(|e| {
        error!("설정 로드 실패: {}", e);
        io::Error::other(e.to_string())
    })?;

    if !config.secret.is_configured() {
        warn!("JWT_SECRET이 설정되지 않았습니다");
    }

    let store = initialize_user_store(&config).await?;
    let hasher = CredentialHasher::new(config.bcrypt_cost);
    let state = AppState::new(store, hasher);

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다! (bcrypt cost: {})", hasher.cost());

    start_http_server(config, state).await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// CORS, 접근 로그, 경로 정규화 미들웨어를 포함합니다.
async fn start_http_server(config: AppConfig, state: AppState) -> io::Result<()> {
    let bind_address = config.bind_address();
    let state = web::Data::new(state);
    let cors_origins = config.cors_origins.clone();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);

    HttpServer::new(move || {
        App::new()
            .wrap(configure_cors(&cors_origins))
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .app_data(state.clone())
            .configure(configure_all_routes)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}

/// 환경별 설정 파일을 로드합니다
///
/// * `PROFILE=dev` - .env.dev 파일 로드
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
///
/// 로거 초기화 전에 호출되므로 결과만 반환하고 로그는 호출자가 남깁니다.
fn load_env_file() -> Result<String, dotenv::Error> {
    let profile = std::env::var("PROFILE").unwrap_or_default();

    let file_name = match profile.as_str() {
        "prod" => ".env.prod",
        "dev" => ".env.dev",
        _ => ".env",
    };

    if file_name == ".env" {
        dotenv().map(|_| file_name.to_string())
    } else {
        dotenv::from_filename(file_name).map(|_| file_name.to_string())
    }
}

/// 로깅 시스템을 초기화합니다
///
/// ```bash
/// RUST_LOG=debug cargo run
/// RUST_LOG=phone_auth_service::services=debug cargo run
/// ```
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=info"));
}

/// 설정된 백엔드로 사용자 저장소를 준비합니다
///
/// MongoDB의 경우 연결 확인(ping)과 `phone` 유니크 인덱스 생성까지 마쳐야
/// 서버가 요청을 받기 시작합니다.
async fn initialize_user_store(config: &AppConfig) -> io::Result<Arc<dyn UserStore>> {
    match (config.store_backend, config.database.as_ref()) {
        (StoreBackend::Mongo, Some(db_config)) => {
            info!("📡 데이터베이스 연결 중...");

            let database = Database::connect(db_config).await.map_err(|e| {
                error!("MongoDB 연결 실패: {}", e);
                io::Error::other(e.to_string())
            })?;

            let repository = MongoUserRepository::new(&database, &db_config.collection_name);
            repository.create_indexes().await.map_err(|e| {
                error!("사용자 인덱스 생성 실패: {}", e);
                io::Error::other(e.to_string())
            })?;

            info!(
                "✅ 사용자 저장소 준비 완료: {}.{}",
                database.database_name(),
                db_config.collection_name
            );
            Ok(Arc::new(repository))
        }
        (StoreBackend::Mongo, None) => Err(io::Error::other("MongoDB 설정이 없습니다")),
        (StoreBackend::Memory, _) => {
            warn!("⚠️ 메모리 사용자 저장소 사용 중 - 재시작 시 모든 사용자가 사라집니다");
            Ok(Arc::new(InMemoryUserStore::new()))
        }
    }
}

/// CORS 설정을 구성합니다
fn configure_cors(origins: &[String]) -> Cors {
    origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allowed_headers(vec![header::ACCEPT, header::CONTENT_TYPE])
        .max_age(3600)
}
