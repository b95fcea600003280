//! # MongoDB 사용자 리포지토리
//!
//! `users` 컬렉션에 대한 [`UserStore`] 구현입니다.
//!
//! ## 인덱스
//!
//! - `phone_unique`: `phone` (오름차순, UNIQUE)
//!
//! 유니크 인덱스가 전화번호 유일성의 최종 판정자입니다. 두 회원가입 요청이
//! 동시에 사전 조회를 통과하더라도 두 번째 `insert_one`은 중복 키 에러(11000)로
//! 실패하고, 이는 [`StoreError::Duplicate`]로 변환됩니다.

use async_trait::async_trait;
use log::info;
use mongodb::{
    bson::{doc, oid::ObjectId},
    error::{Error as MongoError, ErrorKind, WriteFailure},
    options::IndexOptions,
    Collection, IndexModel,
};

use super::user_store::{StoreError, UserStore};
use crate::db::Database;
use crate::domain::entities::users::User;

/// MongoDB 중복 키 에러 코드
const DUPLICATE_KEY_CODE: i32 = 11000;

/// 사용자 데이터 액세스 리포지토리 (MongoDB)
#[derive(Clone)]
pub struct MongoUserRepository {
    collection: Collection<User>,
}

impl MongoUserRepository {
    pub fn new(database: &Database, collection_name: &str) -> Self {
        Self {
            collection: database.collection::<User>(collection_name),
        }
    }

    /// 데이터베이스 인덱스 생성
    ///
    /// 시작 시점에 한 번 호출합니다. 이미 중복 전화번호가 저장된 컬렉션에서는
    /// 유니크 인덱스 생성이 실패하며, 이 경우 서비스는 시작되지 않습니다.
    pub async fn create_indexes(&self) -> Result<(), StoreError> {
        let phone_index = IndexModel::builder()
            .keys(doc! { "phone": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("phone_unique".to_string())
                .build())
            .build();

        self.collection
            .create_index(phone_index)
            .await
            .map_err(|e| StoreError::Backend(e.to_string()))?;

        info!("사용자 컬렉션 인덱스 준비 완료: phone_unique");
        Ok(())
    }
}

#[async_trait]
impl UserStore for MongoUserRepository {
    async fn find_by_phone(&self, phone: &str) -> Result<Option<User>, StoreError> {
        self.collection
            .find_one(doc! { "phone": phone })
            .await
            .map_err(|e| StoreError::Backend(e.to_string()))
    }

    async fn insert(&self, mut user: User) -> Result<ObjectId, StoreError> {
        let id = *user.id.get_or_insert_with(ObjectId::new);

        let result = self.collection.insert_one(&user).await;

        match result {
            Ok(_) => Ok(id),
            Err(e) if is_duplicate_key(&e) => Err(StoreError::Duplicate { phone: user.phone }),
            Err(e) => Err(StoreError::Backend(e.to_string())),
        }
    }
}

fn is_duplicate_key(err: &MongoError) -> bool {
    match err.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(write_error)) => {
            write_error.code == DUPLICATE_KEY_CODE
        }
        _ => false,
    }
}
