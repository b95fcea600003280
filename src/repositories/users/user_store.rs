//! # 사용자 저장소 계약
//!
//! 전화번호를 키로 하는 사용자 컬렉션에 대한 최소한의 연산만 정의합니다.
//! 수정/삭제 연산은 존재하지 않습니다.

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use thiserror::Error;

use crate::domain::entities::users::User;
use crate::errors::AppError;

/// 저장소 계층 에러
#[derive(Error, Debug)]
pub enum StoreError {
    /// 같은 전화번호의 사용자가 이미 존재합니다 (유니크 제약 위반).
    #[error("user with phone {phone} already exists")]
    Duplicate { phone: String },

    /// 연결, 쿼리, 직렬화 등 저장소 자체의 실패
    #[error("user store failure: {0}")]
    Backend(String),
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Duplicate { .. } => {
                AppError::ConflictError("User with this phone number already exists".to_string())
            }
            StoreError::Backend(message) => AppError::DatabaseError(message),
        }
    }
}

/// 사용자 저장소
///
/// 구현체는 전화번호 유일성을 저장소 수준에서 보장해야 합니다.
/// 즉, 중복 전화번호의 `insert`는 동시 요청 사이에서도 반드시
/// [`StoreError::Duplicate`]로 실패합니다.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// 전화번호 완전 일치 조회
    ///
    /// 대소문자 변환이나 정규화 없이 바이트 단위로 비교합니다.
    async fn find_by_phone(&self, phone: &str) -> Result<Option<User>, StoreError>;

    /// 새 사용자를 저장하고 할당된 ID를 반환합니다.
    ///
    /// `user.id`가 비어 있으면 저장소가 새 ID를 생성합니다.
    async fn insert(&self, user: User) -> Result<ObjectId, StoreError>;
}
