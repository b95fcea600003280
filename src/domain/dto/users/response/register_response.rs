//! 회원가입 응답 DTO
//!
//! 저장된 [`User`] 중 외부에 공개할 정보만 골라 담습니다.
//! 비밀번호 다이제스트는 이 타입에 존재하지 않으므로 직렬화될 수 없습니다.

use serde::{Deserialize, Serialize};

use crate::domain::entities::users::User;

pub const REGISTERED_MESSAGE: &str = "User registered successfully";

/// `201 Created` 본문: `{ "message": ..., "userId": ... }`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterResponse {
    pub message: String,
    pub user_id: String,
}

impl From<&User> for RegisterResponse {
    fn from(user: &User) -> Self {
        Self {
            message: REGISTERED_MESSAGE.to_string(),
            user_id: user.id_string().unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::oid::ObjectId;

    #[test]
    fn test_response_never_contains_digest() {
        let mut user = User::new_registered("555-0100".to_string(), "$2b$04$secretdigest".to_string());
        let id = ObjectId::new();
        user.id = Some(id);

        let json = serde_json::to_value(RegisterResponse::from(&user)).unwrap();

        assert_eq!(json["message"], "User registered successfully");
        assert_eq!(json["userId"], id.to_hex());
        assert!(json.get("password").is_none());
        assert!(!json.to_string().contains("secretdigest"));
    }
}
