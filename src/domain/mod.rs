//! # Domain Layer Module
//!
//! 도메인 계층을 구성하는 모듈입니다.
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── Entities  - 저장소 문서 (User)
//! └── DTOs      - HTTP 요청/응답 계약
//!      │
//!      ▼
//! Services → Repositories → MongoDB
//! ```
//!
//! 엔티티와 DTO를 분리해 두는 것이 이 계층의 핵심 규칙입니다.
//! `User`는 저장소에만 쓰이고, 응답은 항상 DTO로 변환된 뒤 직렬화됩니다.

pub mod entities;
pub mod dto;

pub use entities::*;
pub use dto::*;
