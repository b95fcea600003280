//! 전화번호 기반 인증 서비스
//!
//! 회원가입(`POST /register`)과 로그인(`POST /login`) 두 엔드포인트를 제공하는
//! Actix-web 서비스입니다. 사용자는 MongoDB `users` 컬렉션에 저장되고,
//! 비밀번호는 bcrypt 다이제스트로만 보관됩니다.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← /register, /login, /health
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 디코딩/검증/응답
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 회원가입/로그인, bcrypt
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← UserStore (MongoDB / 메모리)
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//! use phone_auth_service::core::AppState;
//! use phone_auth_service::routes::configure_all_routes;
//!
//! let state = web::Data::new(AppState::in_memory(4));
//! let app = App::new().app_data(state).configure(configure_all_routes);
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod routes;
pub mod handlers;
pub mod errors;
