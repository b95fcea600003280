//! 전화번호/비밀번호 자격 증명 요청 DTO
//!
//! `/register`와 `/login`이 같은 본문 형식을 사용합니다.

use serde::{Deserialize, Serialize};

/// `{ "phone": "...", "password": "..." }`
///
/// 두 필드 모두 문자열로 존재해야 합니다. 빈 문자열도 유효한 값입니다.
/// 전화번호는 정규화하지 않고 받은 그대로 사용하며, 그 밖의 필드는 무시됩니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CredentialsRequest {
    pub phone: String,
    pub password: String,
}
