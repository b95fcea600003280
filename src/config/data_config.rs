//! 데이터베이스, 서버, 실행 환경 관련 설정
//!
//! 모든 설정 함수는 프로세스 환경 변수를 읽는 버전과 조회 함수를 인자로 받는
//! `*_from` 버전을 함께 제공합니다. 테스트는 `*_from` 버전을 사용하므로
//! 프로세스 환경을 변경하지 않습니다.

use super::{ConfigError, Lookup};

/// 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    Development,
    Test,
    Staging,
    Production,
}

impl Environment {
    /// `ENVIRONMENT` 환경 변수에서 현재 환경을 결정합니다. 기본값은 Production입니다.
    pub fn current_from(lookup: Lookup<'_>) -> Self {
        lookup("ENVIRONMENT")
            .map(|value| Self::from_name(&value))
            .unwrap_or(Environment::Production)
    }

    pub fn from_name(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }
}

/// HTTP 서버 설정
pub struct ServerConfig;

impl ServerConfig {
    pub const DEFAULT_PORT: u16 = 8088;
    pub const DEFAULT_HOST: &'static str = "0.0.0.0";
    pub const DEFAULT_CORS_ORIGIN: &'static str = "http://localhost:3000";

    pub fn port_from(lookup: Lookup<'_>) -> u16 {
        lookup("PORT")
            .and_then(|value| value.trim().parse().ok())
            .unwrap_or(Self::DEFAULT_PORT)
    }

    pub fn host_from(lookup: Lookup<'_>) -> String {
        lookup("HOST")
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| Self::DEFAULT_HOST.to_string())
    }

    /// `CORS_ALLOWED_ORIGINS`를 쉼표로 분리해 허용 Origin 목록을 만듭니다.
    pub fn cors_origins_from(lookup: Lookup<'_>) -> Vec<String> {
        let origins: Vec<String> = lookup("CORS_ALLOWED_ORIGINS")
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect();

        if origins.is_empty() {
            vec![Self::DEFAULT_CORS_ORIGIN.to_string()]
        } else {
            origins
        }
    }
}

/// 사용자 저장소 백엔드
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StoreBackend {
    /// MongoDB `users` 컬렉션
    Mongo,
    /// 프로세스 메모리 (로컬 실행 및 테스트용, 재시작 시 데이터 소실)
    Memory,
}

/// MongoDB 연결 설정
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub uri: String,
    pub database_name: String,
    pub collection_name: String,
}

impl DatabaseConfig {
    pub const DEFAULT_DATABASE_NAME: &'static str = "test";
    pub const USERS_COLLECTION: &'static str = "users";

    /// 연결 문자열은 `MONGODB_CONN_STRING`, 없으면 `MONGODB_URI`에서 읽습니다.
    /// 둘 다 없으면 시작할 수 없습니다.
    pub fn from_lookup(lookup: Lookup<'_>) -> Result<Self, ConfigError> {
        let uri = lookup("MONGODB_CONN_STRING")
            .or_else(|| lookup("MONGODB_URI"))
            .filter(|value| !value.trim().is_empty())
            .ok_or(ConfigError::Missing("MONGODB_CONN_STRING"))?;

        let database_name = lookup("DATABASE_NAME")
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| Self::DEFAULT_DATABASE_NAME.to_string());

        Ok(Self {
            uri,
            database_name,
            collection_name: Self::USERS_COLLECTION.to_string(),
        })
    }

    pub fn store_backend_from(lookup: Lookup<'_>) -> Result<StoreBackend, ConfigError> {
        match lookup("STORE_BACKEND").as_deref().map(str::to_lowercase).as_deref() {
            None | Some("") | Some("mongo") | Some("mongodb") => Ok(StoreBackend::Mongo),
            Some("memory") => Ok(StoreBackend::Memory),
            Some(other) => Err(ConfigError::Invalid {
                key: "STORE_BACKEND",
                value: other.to_string(),
            }),
        }
    }
}
