//! Catalog user records.

use serde::{Deserialize, Serialize};

use super::id::UserId;

/// A user as returned by the catalog service.
///
/// The storefront only reads and deletes users; it never creates or edits
/// them, so only the fields the admin view renders are kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Catalog-assigned identifier.
    pub id: UserId,
    /// Account email address.
    pub email: String,
    /// Role label; the service omits it for regular accounts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

impl User {
    /// The role to display, defaulting to "user" when the service sent none.
    #[must_use]
    pub fn role_or_default(&self) -> &str {
        self.role.as_deref().unwrap_or("user")
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_catalog_user() {
        let json = r#"{
            "id": 1,
            "email": "john@gmail.com",
            "username": "johnd",
            "password": "m38rmF$",
            "phone": "1-570-236-7033"
        }"#;

        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.id, UserId::new(1));
        assert_eq!(user.email, "john@gmail.com");
        assert_eq!(user.role, None);
    }

    #[test]
    fn test_role_defaults_to_user() {
        let user = User {
            id: UserId::new(3),
            email: "kevin@gmail.com".to_owned(),
            role: None,
        };
        assert_eq!(user.role_or_default(), "user");
    }

    #[test]
    fn test_explicit_role_wins() {
        let user = User {
            id: UserId::new(4),
            email: "don@gmail.com".to_owned(),
            role: Some("admin".to_owned()),
        };
        assert_eq!(user.role_or_default(), "admin");
    }
}
