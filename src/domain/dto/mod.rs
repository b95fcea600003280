//! # Data Transfer Objects
//!
//! HTTP 요청/응답 계약을 정의합니다. 저장소 엔티티와 분리되어 있어
//! 비밀번호 다이제스트 같은 내부 필드가 응답으로 새어 나가지 않습니다.

pub mod users;

pub use users::*;
