//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 서비스 계층은 [`UserStore`](users::UserStore) trait에만 의존하고,
//! 실제 구현(MongoDB 또는 메모리)은 시작 시점에 주입됩니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::repositories::users::{InMemoryUserStore, UserStore};
//!
//! let store: Arc<dyn UserStore> = Arc::new(InMemoryUserStore::default());
//! let user = store.find_by_phone("555-0100").await?;
//! ```

pub mod users;
