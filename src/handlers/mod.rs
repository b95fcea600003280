//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Client
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   Handlers (이 모듈) - 디코딩, 검증, 응답 작성     ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services - 비즈니스 로직                      ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Repositories - 데이터 접근                    ← Repository Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! 핸들러는 `web::Data<AppState>`로 서비스를 받고, 실패는 `AppError`를
//! `?`로 전파해 상태 코드 변환을 에러 타입에 맡깁니다.

pub mod auth;
