//! # Core Module
//!
//! 요청 처리에 필요한 공유 의존성을 묶는 [`AppState`]를 제공합니다.
//!
//! 전역 싱글톤 대신 `main`에서 상태를 한 번 조립하고 `web::Data`로
//! 모든 워커에 공유합니다. 테스트는 메모리 저장소로 같은 상태를 조립합니다.

pub mod state;

pub use state::AppState;
