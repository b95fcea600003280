//! 사용자 관리 서비스 모듈
//!
//! 회원가입과 로그인 비즈니스 로직을 제공합니다.
//!
//! # Security
//!
//! - bcrypt 비밀번호 해싱 (블로킹 풀에서 실행)
//! - 전화번호 중복 방지 (사전 조회 + 저장소 유니크 제약)
//! - 응답 DTO를 통한 다이제스트 비노출

pub mod user_service;

pub use user_service::UserService;
