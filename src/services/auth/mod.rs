//! 자격 증명 관련 서비스 모듈
//!
//! - [`credential_hasher`] - bcrypt 해싱/검증

pub mod credential_hasher;

pub use credential_hasher::{CredentialError, CredentialHasher};
