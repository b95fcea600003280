//! Database Connection Management Module
//!
//! MongoDB 데이터베이스 연결 관리를 담당하는 모듈입니다.
//! 연결은 시작 시점에 한 번 만들어지고, 드라이버 내부의 연결 풀을
//! 모든 요청이 공유합니다.
//!
//! # 기본 사용법
//!
//! ```rust,ignore
//! use crate::config::DatabaseConfig;
//! use crate::db::Database;
//!
//! let config = DatabaseConfig::from_lookup(&process_env)?;
//! let database = Database::connect(&config).await?;
//! let users = database.collection::<User>(&config.collection_name);
//! ```

use log::info;
use mongodb::{bson::doc, options::ClientOptions, Client, Collection};

use crate::config::DatabaseConfig;

/// MongoDB 데이터베이스 연결 래퍼
#[derive(Clone)]
pub struct Database {
    /// MongoDB 클라이언트 인스턴스
    client: Client,
    /// 사용할 데이터베이스 이름
    database_name: String,
}

impl Database {
    /// 새 MongoDB 데이터베이스 연결을 생성합니다.
    ///
    /// 연결 문자열을 파싱해 클라이언트를 만들고 `ping`으로 연결을 검증합니다.
    /// 실패는 호출자에게 그대로 전달되며, 시작 단계에서는 프로세스 종료로 이어집니다.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, mongodb::error::Error> {
        let mut client_options = ClientOptions::parse(&config.uri).await?;

        // 애플리케이션 이름 설정 (서버 측 로그에서 식별용)
        client_options.app_name = Some("phone_auth".to_string());

        let client = Client::with_options(client_options)?;

        client
            .database(&config.database_name)
            .run_command(doc! { "ping": 1 })
            .await?;

        info!("✅ MongoDB 연결 성공: {}", config.database_name);

        Ok(Self {
            client,
            database_name: config.database_name.clone(),
        })
    }

    /// MongoDB 데이터베이스 인스턴스를 반환합니다.
    pub fn get_database(&self) -> mongodb::Database {
        self.client.database(&self.database_name)
    }

    /// 타입이 지정된 컬렉션 핸들을 반환합니다.
    pub fn collection<T>(&self, name: &str) -> Collection<T>
    where
        T: Send + Sync,
    {
        self.get_database().collection::<T>(name)
    }

    /// 데이터베이스 이름을 반환합니다.
    pub fn database_name(&self) -> &str {
        &self.database_name
    }
}
