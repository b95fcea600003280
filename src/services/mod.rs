//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스는 전역 인스턴스가 아니라 시작 시점에 명시적으로 생성되어
//! [`AppState`](crate::core::AppState)를 통해 핸들러로 전달됩니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::repositories::users::InMemoryUserStore;
//! use crate::services::{auth::CredentialHasher, users::UserService};
//!
//! let service = UserService::new(Arc::new(InMemoryUserStore::new()), CredentialHasher::new(4));
//! ```

pub mod users;
pub mod auth;
