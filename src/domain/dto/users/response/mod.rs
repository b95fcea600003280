//! 사용자 관련 응답 DTO 모듈

pub mod register_response;

pub use register_response::RegisterResponse;
