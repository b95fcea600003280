//! # 사용자 관련 요청 DTO 모듈
//!
//! 클라이언트로부터 받은 JSON 본문을 구조화된 Rust 타입으로 변환합니다.
//! JSON 구조와 타입이 맞지 않으면 (`serde` 디코딩 실패) 400으로 응답합니다.

pub mod credentials_request;

pub use credentials_request::CredentialsRequest;
