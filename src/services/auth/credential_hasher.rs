//! # 비밀번호 해셔
//!
//! bcrypt 기반의 단방향 해싱과 검증을 제공합니다.
//!
//! - 솔트는 해시마다 새로 생성되어 다이제스트에 포함됩니다.
//! - cost는 시작 시점에 결정되는 고정값입니다 ([`PasswordConfig`](crate::config::PasswordConfig)).
//! - bcrypt는 72바이트까지만 입력을 사용하므로, 더 긴 비밀번호는 잘라내지 않고
//!   해싱 단계에서 거부합니다. 검증 단계에서는 항상 불일치로 처리됩니다.
//!
//! 해싱은 의도적으로 느린 CPU 작업입니다. 비동기 워커에서 직접 호출하지 말고
//! `actix_web::web::block`으로 블로킹 풀에 넘겨야 합니다.

use bcrypt::BcryptError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CredentialError {
    /// 다이제스트를 만들 수 없음 (입력 길이 초과, 잘못된 cost 등)
    #[error("password hashing failed: {0}")]
    Hashing(String),

    /// 저장된 다이제스트가 bcrypt 형식이 아님
    #[error("password verification failed: {0}")]
    Verification(String),
}

/// bcrypt 해셔
///
/// cost 하나만 보관하는 `Copy` 타입이라 블로킹 클로저로 그대로 옮길 수 있습니다.
#[derive(Debug, Clone, Copy)]
pub struct CredentialHasher {
    cost: u32,
}

impl CredentialHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// 평문 비밀번호의 솔트 포함 다이제스트를 생성합니다.
    pub fn hash(&self, plaintext: &str) -> Result<String, CredentialError> {
        bcrypt::non_truncating_hash(plaintext, self.cost)
            .map_err(|e| CredentialError::Hashing(e.to_string()))
    }

    /// 평문이 다이제스트와 일치하는지 확인합니다.
    ///
    /// 불일치는 `Ok(false)`이며, 에러는 다이제스트 자체가 손상된 경우에만 반환됩니다.
    pub fn verify(&self, digest: &str, plaintext: &str) -> Result<bool, CredentialError> {
        match bcrypt::non_truncating_verify(plaintext, digest) {
            Ok(matches) => Ok(matches),
            Err(BcryptError::Truncation(_)) => Ok(false),
            Err(e) => Err(CredentialError::Verification(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_COST: u32 = 4;

    #[test]
    fn test_hash_then_verify() {
        let hasher = CredentialHasher::new(TEST_COST);
        let digest = hasher.hash("correct-horse").unwrap();

        assert_ne!(digest, "correct-horse");
        assert!(hasher.verify(&digest, "correct-horse").unwrap());
        assert!(!hasher.verify(&digest, "wrong").unwrap());
    }

    #[test]
    fn test_salts_differ_between_hashes() {
        let hasher = CredentialHasher::new(TEST_COST);

        let first = hasher.hash("same-password").unwrap();
        let second = hasher.hash("same-password").unwrap();

        assert_ne!(first, second);
        assert!(hasher.verify(&second, "same-password").unwrap());
    }

    #[test]
    fn test_digest_embeds_cost() {
        let digest = CredentialHasher::new(TEST_COST).hash("pw").unwrap();
        assert!(digest.starts_with("$2b$04$"));
    }

    #[test]
    fn test_overlong_password_is_rejected() {
        let hasher = CredentialHasher::new(TEST_COST);
        let overlong = "a".repeat(73);

        assert!(matches!(hasher.hash(&overlong), Err(CredentialError::Hashing(_))));

        let digest = hasher.hash(&"a".repeat(72)).unwrap();
        assert!(!hasher.verify(&digest, &overlong).unwrap());
    }

    #[test]
    fn test_malformed_digest_is_an_error() {
        let hasher = CredentialHasher::new(TEST_COST);

        assert!(matches!(
            hasher.verify("plaintext-not-a-digest", "plaintext-not-a-digest"),
            Err(CredentialError::Verification(_))
        ));
    }

    #[test]
    fn test_invalid_cost_fails_hashing() {
        let hasher = CredentialHasher::new(2);
        assert!(matches!(hasher.hash("pw"), Err(CredentialError::Hashing(_))));
    }
}
