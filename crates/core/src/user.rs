//! Storefront user, mirrored from the hosted identity provider.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{UserId, UserRole};

/// A users-table row.
///
/// The row lifecycle is owned by the auth bridge: created on first
/// authenticated sighting, updated on profile or role change via the
/// identity provider's webhooks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    /// Identifier assigned by the hosted identity provider.
    pub clerk_id: String,
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }

    /// Display name: first and last name, falling back to the email.
    #[must_use]
    pub fn display_name(&self) -> String {
        let name = format!("{} {}", self.first_name, self.last_name);
        let name = name.trim();
        if name.is_empty() {
            self.email.clone()
        } else {
            name.to_owned()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(first: &str, last: &str, role: UserRole) -> User {
        let now = Utc::now();
        User {
            id: UserId::generate(),
            clerk_id: "user_2abc".to_owned(),
            email: "ada@example.com".to_owned(),
            first_name: first.to_owned(),
            last_name: last.to_owned(),
            role,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_is_admin() {
        assert!(user("Ada", "Obi", UserRole::Admin).is_admin());
        assert!(!user("Ada", "Obi", UserRole::User).is_admin());
    }

    #[test]
    fn test_display_name_falls_back_to_email() {
        assert_eq!(user("Ada", "Obi", UserRole::User).display_name(), "Ada Obi");
        assert_eq!(user("", "", UserRole::User).display_name(), "ada@example.com");
    }
}
