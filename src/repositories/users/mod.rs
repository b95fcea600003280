//! 사용자 데이터 액세스 계층
//!
//! - [`user_store`] - 저장소 계약 ([`UserStore`])과 에러
//! - [`user_repo`] - MongoDB 구현
//! - [`memory_repo`] - 메모리 구현

pub mod user_store;
pub mod user_repo;
pub mod memory_repo;

pub use user_store::{StoreError, UserStore};
pub use user_repo::MongoUserRepository;
pub use memory_repo::InMemoryUserStore;
