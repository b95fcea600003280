//! # Domain Entities
//!
//! MongoDB에 저장되는 영속 엔티티를 정의합니다.

pub mod users;

pub use users::*;
