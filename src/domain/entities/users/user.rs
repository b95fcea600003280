//! User Entity Implementation
//!
//! 서비스의 유일한 영속 엔티티입니다. 전화번호가 비즈니스 키이며,
//! `password` 필드에는 생성 시점부터 항상 bcrypt 다이제스트만 저장됩니다.
//!
//! 이 타입은 저장소 문서 형식(BSON)만을 위한 것이며, HTTP 응답으로 직접
//! 직렬화하지 않습니다. 외부로 나가는 데이터는 `dto::users::response`를 거칩니다.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// 신규 사용자의 기본 역할
pub const DEFAULT_ROLE: &str = "user";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// 저장 시 한 번만 할당되며 이후 변경되지 않습니다.
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub phone: String,
    /// bcrypt 다이제스트
    pub password: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_logo: Option<String>,
    #[serde(default)]
    pub amount: f64,
    #[serde(default)]
    pub balance: f64,
    #[serde(default)]
    pub point: i64,
    #[serde(default = "default_role")]
    pub role: String,
}

fn default_role() -> String {
    DEFAULT_ROLE.to_string()
}

impl User {
    /// 회원가입으로 만들어지는 신규 사용자
    ///
    /// 자격 증명 외의 모든 필드는 기본값(빈 이름, 0 잔액, 0 포인트, `"user"` 역할)입니다.
    /// ID는 저장소가 삽입 시 할당합니다.
    pub fn new_registered(phone: String, password_digest: String) -> Self {
        Self {
            id: None,
            phone,
            password: password_digest,
            first_name: String::new(),
            last_name: String::new(),
            avatar_logo: None,
            amount: 0.0,
            balance: 0.0,
            point: 0,
            role: default_role(),
        }
    }

    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson;

    #[test]
    fn test_new_registered_has_defaults() {
        let user = User::new_registered("555-0100".to_string(), "$2b$04$digest".to_string());

        assert!(user.id.is_none());
        assert_eq!(user.phone, "555-0100");
        assert_eq!(user.password, "$2b$04$digest");
        assert_eq!(user.first_name, "");
        assert_eq!(user.last_name, "");
        assert_eq!(user.avatar_logo, None);
        assert_eq!(user.amount, 0.0);
        assert_eq!(user.balance, 0.0);
        assert_eq!(user.point, 0);
        assert_eq!(user.role, "user");
    }

    #[test]
    fn test_document_field_names() {
        let mut user = User::new_registered("555-0100".to_string(), "digest".to_string());
        user.id = Some(ObjectId::new());

        let document = bson::to_document(&user).unwrap();

        assert!(document.contains_key("_id"));
        assert!(document.contains_key("firstName"));
        assert!(document.contains_key("lastName"));
        assert!(!document.contains_key("avatarLogo"));
        assert_eq!(document.get_str("role").unwrap(), "user");
    }

    #[test]
    fn test_sparse_document_fills_defaults() {
        let document = bson::doc! {
            "_id": ObjectId::new(),
            "phone": "555-0199",
            "password": "digest",
            "point": 7_i32,
        };

        let user: User = bson::from_document(document).unwrap();

        assert_eq!(user.point, 7);
        assert_eq!(user.role, "user");
        assert_eq!(user.balance, 0.0);
    }
}
