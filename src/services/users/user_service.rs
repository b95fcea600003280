//! # 사용자 관리 서비스 구현
//!
//! 회원가입과 로그인의 핵심 비즈니스 로직을 구현합니다.
//!
//! ```text
//! ┌───────────────────────────────────────────────┐
//! │                  UserService                  │
//! │  register: 중복 확인 → 해싱 → 엔티티 생성 → 저장  │
//! │  login:    조회 → 비밀번호 검증                  │
//! └───────────────────────────────────────────────┘
//!            │                         │
//!            ▼                         ▼
//!   Arc<dyn UserStore>         CredentialHasher
//! ```
//!
//! 각 요청은 독립적이며 서비스는 요청 사이에 어떤 상태도 기억하지 않습니다.
//! 로그인은 세션이나 토큰을 발급하지 않습니다.

use std::sync::Arc;
use std::time::Instant;

use actix_web::web;
use log::{debug, error, info};

use crate::domain::dto::users::{CredentialsRequest, RegisterResponse};
use crate::domain::entities::users::User;
use crate::errors::{AppError, AppResult, ErrorContext};
use crate::repositories::users::{StoreError, UserStore};
use crate::services::auth::CredentialHasher;

pub const USER_EXISTS_MESSAGE: &str = "User with this phone number already exists";
pub const USER_NOT_FOUND_MESSAGE: &str = "User not found";
pub const INVALID_PASSWORD_MESSAGE: &str = "Invalid password";
pub const HASHING_FAILED_MESSAGE: &str = "Error hashing password";
pub const SAVE_FAILED_MESSAGE: &str = "Error saving user";

/// 사용자 관리 비즈니스 로직 서비스
///
/// 저장소와 해셔는 생성자로 주입됩니다. 둘 다 시작 이후 읽기 전용이므로
/// 서비스는 모든 워커 스레드에서 잠금 없이 공유됩니다.
#[derive(Clone)]
pub struct UserService {
    store: Arc<dyn UserStore>,
    hasher: CredentialHasher,
}

impl UserService {
    pub fn new(store: Arc<dyn UserStore>, hasher: CredentialHasher) -> Self {
        Self { store, hasher }
    }

    /// 새 사용자 계정 생성
    ///
    /// # 처리 과정
    ///
    /// 1. 전화번호로 기존 사용자 조회 → 있으면 `ConflictError`
    /// 2. 비밀번호 해싱 (블로킹 풀) → 실패 시 `InternalError`
    /// 3. 기본값으로 `User` 생성
    /// 4. 저장 → 중복 키면 `ConflictError`, 그 외 실패는 `InternalError`
    ///
    /// 1번의 사전 조회는 빠른 실패 경로일 뿐이고, 동시 요청 간의 유일성은
    /// 4번에서 저장소 유니크 제약이 보장합니다.
    pub async fn register(&self, request: CredentialsRequest) -> AppResult<RegisterResponse> {
        let start_time = Instant::now();
        let CredentialsRequest { phone, password } = request;

        if self.store.find_by_phone(&phone).await?.is_some() {
            debug!("회원가입 거부 - 이미 등록된 전화번호: {}", phone);
            return Err(AppError::ConflictError(USER_EXISTS_MESSAGE.to_string()));
        }

        let hasher = self.hasher;
        let hash_start = Instant::now();
        let digest = web::block(move || hasher.hash(&password))
            .await
            .context(HASHING_FAILED_MESSAGE)?
            .map_err(|e| {
                error!("비밀번호 해싱 실패: {}", e);
                AppError::InternalError(HASHING_FAILED_MESSAGE.to_string())
            })?;
        debug!("Password hashing took: {:?}", hash_start.elapsed());

        let mut user = User::new_registered(phone, digest);

        let id = self.store.insert(user.clone()).await.map_err(|e| match e {
            StoreError::Duplicate { phone } => {
                debug!("회원가입 거부 - 동시 요청으로 인한 중복 전화번호: {}", phone);
                AppError::ConflictError(USER_EXISTS_MESSAGE.to_string())
            }
            StoreError::Backend(message) => {
                error!("사용자 저장 실패: {}", message);
                AppError::InternalError(SAVE_FAILED_MESSAGE.to_string())
            }
        })?;
        user.id = Some(id);

        info!("회원가입 완료 - ID: {}, 소요: {:?}", id.to_hex(), start_time.elapsed());

        Ok(RegisterResponse::from(&user))
    }

    /// 전화번호/비밀번호 인증
    ///
    /// 성공 시 저장된 사용자를 반환합니다. 사용자가 없거나 비밀번호가 틀리면
    /// 둘 다 `AuthenticationError`(401)이며 메시지로만 구분됩니다.
    /// 조회 중 저장소 에러도 별도 상태 코드 없이 "User not found"로 응답합니다.
    pub async fn login(&self, request: CredentialsRequest) -> AppResult<User> {
        let CredentialsRequest { phone, password } = request;

        let found = self.store.find_by_phone(&phone).await.map_err(|e| {
            error!("로그인 중 사용자 조회 실패: {}", e);
            AppError::AuthenticationError(USER_NOT_FOUND_MESSAGE.to_string())
        })?;

        let user = found.ok_or_else(|| {
            debug!("로그인 실패 - 존재하지 않는 전화번호: {}", phone);
            AppError::AuthenticationError(USER_NOT_FOUND_MESSAGE.to_string())
        })?;

        let hasher = self.hasher;
        let digest = user.password.clone();
        let verify_start = Instant::now();
        let is_valid = web::block(move || hasher.verify(&digest, &password))
            .await
            .context("Error verifying password")?
            .map_err(|e| {
                error!("저장된 다이제스트 손상 - ID: {:?}, 에러: {}", user.id_string(), e);
                AppError::InternalError("Error verifying password".to_string())
            })?;
        debug!("Password verification took: {:?}", verify_start.elapsed());

        if !is_valid {
            debug!("로그인 실패 - 비밀번호 불일치: {}", phone);
            return Err(AppError::AuthenticationError(INVALID_PASSWORD_MESSAGE.to_string()));
        }

        info!("로그인 성공 - ID: {:?}", user.id_string());
        Ok(user)
    }
}
