//! 인증 관련 설정
//!
//! bcrypt cost와 서명용 시크릿을 관리합니다.

use std::fmt;

use super::{Environment, Lookup};

/// 비밀번호 해싱 설정
pub struct PasswordConfig;

impl PasswordConfig {
    pub const MIN_COST: u32 = 4;
    pub const MAX_COST: u32 = 15;

    /// 현재 환경에 맞는 bcrypt cost를 반환합니다.
    ///
    /// `BCRYPT_COST`가 4-15 범위의 정수이면 그 값을 우선 사용하고,
    /// 그렇지 않으면 `ENVIRONMENT`에 따른 기본값을 사용합니다.
    pub fn bcrypt_cost_from(lookup: Lookup<'_>) -> u32 {
        lookup("BCRYPT_COST")
            .and_then(|value| value.trim().parse::<u32>().ok())
            .filter(|cost| (Self::MIN_COST..=Self::MAX_COST).contains(cost))
            .unwrap_or_else(|| Self::bcrypt_cost_for_env(&Environment::current_from(lookup)))
    }

    /// 특정 환경에 대한 bcrypt cost를 반환합니다.
    pub fn bcrypt_cost_for_env(env: &Environment) -> u32 {
        match env {
            Environment::Development => 4,
            Environment::Test => 4,
            Environment::Staging => 10,
            Environment::Production => 12,
        }
    }
}

/// `JWT_SECRET` 값
///
/// 로그인은 토큰을 발급하지 않으므로 현재는 보관만 합니다.
/// 로그에 노출되지 않도록 `Debug` 출력은 가려집니다.
#[derive(Clone, Default)]
pub struct SecretConfig {
    secret: Option<String>,
}

impl SecretConfig {
    pub fn from_lookup(lookup: Lookup<'_>) -> Self {
        Self {
            secret: lookup("JWT_SECRET").filter(|value| !value.is_empty()),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.secret.is_some()
    }
}

impl fmt::Debug for SecretConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let shown = if self.secret.is_some() { "[REDACTED]" } else { "<unset>" };
        f.debug_struct("SecretConfig").field("secret", &shown).finish()
    }
}
