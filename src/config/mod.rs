//! # Configuration Module
//!
//! 서비스 설정 관리를 담당하는 모듈입니다.
//! 시작 시점에 환경 변수를 한 번 읽어 [`AppConfig`]를 만들고,
//! 이후에는 읽기 전용으로 공유합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 실행 환경, 서버, 데이터베이스 설정
//! - [`auth_config`] - bcrypt cost, 시크릿 설정
//!
//! ## 환경 변수
//!
//! ```bash
//! # 필수
//! export MONGODB_CONN_STRING="mongodb://localhost:27017"
//!
//! # 선택
//! export JWT_SECRET="your-secret"
//! export DATABASE_NAME="test"            # 기본값: test
//! export HOST="0.0.0.0"                  # 기본값: 0.0.0.0
//! export PORT="8088"                     # 기본값: 8088
//! export BCRYPT_COST="12"                # 4-15 범위
//! export ENVIRONMENT="production"        # development, test, staging, production
//! export STORE_BACKEND="mongo"           # mongo, memory
//! export CORS_ALLOWED_ORIGINS="http://localhost:3000"
//! ```

pub mod data_config;
pub mod auth_config;

pub use data_config::*;
pub use auth_config::*;

use thiserror::Error;

/// 환경 변수 조회 함수
///
/// 운영 코드는 [`process_env`]를, 테스트는 고정된 맵을 조회하는 클로저를 넘깁니다.
pub type Lookup<'a> = &'a dyn Fn(&str) -> Option<String>;

/// 프로세스 환경 변수를 조회합니다.
pub fn process_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// 설정 로드 실패
///
/// 시작 단계에서만 발생하며, 발생 시 프로세스는 즉시 종료됩니다.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("required environment variable {0} is not set")]
    Missing(&'static str),

    #[error("environment variable {key} has unsupported value {value:?}")]
    Invalid { key: &'static str, value: String },
}

/// 시작 시점에 확정되는 전체 설정
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub cors_origins: Vec<String>,
    pub store_backend: StoreBackend,
    /// `store_backend`가 `Memory`이면 `None`입니다.
    pub database: Option<DatabaseConfig>,
    pub bcrypt_cost: u32,
    pub secret: SecretConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(&process_env)
    }

    pub fn from_lookup(lookup: Lookup<'_>) -> Result<Self, ConfigError> {
        let store_backend = DatabaseConfig::store_backend_from(lookup)?;
        let database = match store_backend {
            StoreBackend::Mongo => Some(DatabaseConfig::from_lookup(lookup)?),
            StoreBackend::Memory => None,
        };

        Ok(Self {
            host: ServerConfig::host_from(lookup),
            port: ServerConfig::port_from(lookup),
            cors_origins: ServerConfig::cors_origins_from(lookup),
            store_backend,
            database,
            bcrypt_cost: PasswordConfig::bcrypt_cost_from(lookup),
            secret: SecretConfig::from_lookup(lookup),
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_backend_needs_no_database() {
        let lookup = |key: &str| match key {
            "STORE_BACKEND" => Some("memory".to_string()),
            "ENVIRONMENT" => Some("test".to_string()),
            _ => None,
        };
        let config = AppConfig::from_lookup(&lookup).unwrap();

        assert_eq!(config.store_backend, StoreBackend::Memory);
        assert!(config.database.is_none());
        assert_eq!(config.bcrypt_cost, 4);
        assert_eq!(config.bind_address(), "0.0.0.0:8088");
    }

    #[test]
    fn test_mongo_backend_fails_without_connection_string() {
        let lookup = |_: &str| -> Option<String> { None };
        assert!(matches!(
            AppConfig::from_lookup(&lookup),
            Err(ConfigError::Missing("MONGODB_CONN_STRING"))
        ));
    }
}
