use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::error::UserServiceError;

/// User document as stored in the `users` collection.
///
/// `password` holds the bcrypt hash, never the plaintext.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Parsed user identifier. The external API carries ids as 24-hex-char
/// strings; every path-id endpoint goes through `parse` so a malformed id
/// is rejected with 400 before any database call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserId(ObjectId);

impl UserId {
    pub fn parse(id: &str) -> Result<Self, UserServiceError> {
        ObjectId::parse_str(id)
            .map(UserId)
            .map_err(|_| UserServiceError::InvalidId)
    }

    pub fn as_object_id(&self) -> ObjectId {
        self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.to_hex())
    }
}

/// User as returned by list/get, with `_id` stringified.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct UserResponse {
    #[serde(rename = "_id")]
    #[schema(example = "64f8d23d5aa1e45e76892abc")]
    pub id: String,
    #[schema(example = "Shipra")]
    pub name: String,
    #[schema(example = "shipra@example.com")]
    pub email: String,
    /// Stored bcrypt hash. Exposed as-is (see DESIGN.md).
    pub password: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        UserResponse {
            id: user.id.map(|oid| oid.to_hex()).unwrap_or_default(),
            name: user.name,
            email: user.email,
            password: user.password,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_id() {
        let id = UserId::parse("64f8d23d5aa1e45e76892abc").unwrap();
        assert_eq!(id.to_string(), "64f8d23d5aa1e45e76892abc");
    }

    #[test]
    fn test_parse_rejects_short_id() {
        assert!(matches!(
            UserId::parse("64f8d23d"),
            Err(UserServiceError::InvalidId)
        ));
    }

    #[test]
    fn test_parse_rejects_non_hex() {
        assert!(matches!(
            UserId::parse("zzzzzzzzzzzzzzzzzzzzzzzz"),
            Err(UserServiceError::InvalidId)
        ));
    }

    #[test]
    fn test_parse_rejects_too_long() {
        assert!(matches!(
            UserId::parse("64f8d23d5aa1e45e76892abc00"),
            Err(UserServiceError::InvalidId)
        ));
    }

    #[test]
    fn test_response_stringifies_object_id() {
        let oid = ObjectId::parse_str("64f8d23d5aa1e45e76892abc").unwrap();
        let user = User {
            id: Some(oid),
            name: "Shipra".to_string(),
            email: "shipra@example.com".to_string(),
            password: "$2b$12$hash".to_string(),
        };
        let response = UserResponse::from(user);
        assert_eq!(response.id, "64f8d23d5aa1e45e76892abc");
        assert_eq!(response.name, "Shipra");
    }
}
