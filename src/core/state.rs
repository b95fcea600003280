//! 애플리케이션 공유 상태

use std::sync::Arc;

use crate::repositories::users::{InMemoryUserStore, UserStore};
use crate::services::auth::CredentialHasher;
use crate::services::users::UserService;

/// 핸들러에 주입되는 공유 상태
///
/// 시작 이후 변경되지 않습니다. 가변 상태는 저장소(DB 연결 풀) 안에만 있습니다.
#[derive(Clone)]
pub struct AppState {
    pub user_service: UserService,
}

impl AppState {
    pub fn new(store: Arc<dyn UserStore>, hasher: CredentialHasher) -> Self {
        Self {
            user_service: UserService::new(store, hasher),
        }
    }

    /// 메모리 저장소와 주어진 cost로 상태를 조립합니다.
    pub fn in_memory(bcrypt_cost: u32) -> Self {
        Self::new(Arc::new(InMemoryUserStore::new()), CredentialHasher::new(bcrypt_cost))
    }
}
