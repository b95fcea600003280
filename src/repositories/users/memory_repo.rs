//! 메모리 기반 사용자 저장소
//!
//! `STORE_BACKEND=memory`로 실행하거나 테스트에서 사용합니다.
//! 전화번호를 키로 하는 맵을 쓰기 잠금 안에서 확인 후 삽입하므로
//! MongoDB 유니크 인덱스와 같은 유일성 보장을 제공합니다.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use super::user_store::{StoreError, UserStore};
use crate::domain::entities::users::User;

#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    users: RwLock<HashMap<String, User>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 저장된 사용자 수
    pub fn len(&self) -> usize {
        self.users.read().map(|users| users.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn poisoned<T>(_: T) -> StoreError {
    StoreError::Backend("in-memory user store lock poisoned".to_string())
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn find_by_phone(&self, phone: &str) -> Result<Option<User>, StoreError> {
        let users = self.users.read().map_err(poisoned)?;
        Ok(users.get(phone).cloned())
    }

    async fn insert(&self, mut user: User) -> Result<ObjectId, StoreError> {
        let mut users = self.users.write().map_err(poisoned)?;

        if users.contains_key(&user.phone) {
            return Err(StoreError::Duplicate { phone: user.phone });
        }

        let id = *user.id.get_or_insert_with(ObjectId::new);
        users.insert(user.phone.clone(), user);
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(phone: &str) -> User {
        User::new_registered(phone.to_string(), "digest".to_string())
    }

    #[actix_web::test]
    async fn test_insert_assigns_id_and_find_returns_it() {
        let store = InMemoryUserStore::new();
        assert!(store.is_empty());

        let id = store.insert(user("555-0100")).await.unwrap();
        let found = store.find_by_phone("555-0100").await.unwrap().unwrap();

        assert_eq!(found.id, Some(id));
        assert_eq!(store.len(), 1);
        assert!(!store.is_empty());
    }

    #[actix_web::test]
    async fn test_insert_keeps_preassigned_id() {
        let store = InMemoryUserStore::new();
        let mut preset = user("555-0101");
        let preset_id = ObjectId::new();
        preset.id = Some(preset_id);

        assert_eq!(store.insert(preset).await.unwrap(), preset_id);
    }

    #[actix_web::test]
    async fn test_duplicate_phone_is_rejected() {
        let store = InMemoryUserStore::new();
        store.insert(user("555-0100")).await.unwrap();

        let err = store.insert(user("555-0100")).await.unwrap_err();

        assert!(matches!(err, StoreError::Duplicate { ref phone } if phone == "555-0100"));
        assert_eq!(store.len(), 1);
    }

    #[actix_web::test]
    async fn test_lookup_is_exact_match() {
        let store = InMemoryUserStore::new();
        store.insert(user("555-0100")).await.unwrap();

        assert!(store.find_by_phone("5550100").await.unwrap().is_none());
        assert!(store.find_by_phone("555-0100 ").await.unwrap().is_none());
    }
}
