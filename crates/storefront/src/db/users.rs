//! User rows in the `users` table.
//!
//! Users are keyed by our own `usr_` ID but looked up by their identity
//! provider ID (`clerk_id`) on every authenticated request.

use serde_json::json;

use boles_core::{User, UserId, UserRole};

use super::{Db, DbError};

impl Db {
    /// Look up a user by identity provider ID.
    ///
    /// # Errors
    ///
    /// Returns `DbError` when the table API request fails.
    pub async fn get_user_by_clerk_id(&self, clerk_id: &str) -> Result<Option<User>, DbError> {
        let Some(client) = self.client("get_user_by_clerk_id") else {
            return Ok(None);
        };
        client
            .select_single("users", &[("clerk_id", &format!("eq.{clerk_id}"))])
            .await
    }

    /// Look up a user by internal ID.
    ///
    /// # Errors
    ///
    /// Returns `DbError` when the table API request fails.
    pub async fn get_user(&self, id: &UserId) -> Result<Option<User>, DbError> {
        let Some(client) = self.client("get_user") else {
            return Ok(None);
        };
        client
            .select_single("users", &[("id", &format!("eq.{}", id.as_str()))])
            .await
    }

    /// List all users, newest first.
    ///
    /// # Errors
    ///
    /// Returns `DbError` when the table API request fails.
    pub async fn get_users(&self) -> Result<Vec<User>, DbError> {
        let Some(client) = self.client("get_users") else {
            return Ok(Vec::new());
        };
        client
            .select("users", &[("order", "created_at.desc")])
            .await
    }

    /// Persist a new user row.
    ///
    /// In mock mode the user is echoed back unpersisted.
    ///
    /// # Errors
    ///
    /// Returns `DbError` when the table API request fails.
    pub async fn create_user(&self, user: &User) -> Result<User, DbError> {
        let Some(client) = self.client("create_user") else {
            return Ok(user.clone());
        };
        client.insert("users", user).await
    }

    /// Update a user's profile fields from the identity provider.
    ///
    /// # Errors
    ///
    /// Returns `DbError` when the table API request fails.
    pub async fn update_user_profile(
        &self,
        clerk_id: &str,
        email: &str,
        first_name: &str,
        last_name: &str,
    ) -> Result<Option<User>, DbError> {
        let Some(client) = self.client("update_user_profile") else {
            return Ok(None);
        };
        client
            .update(
                "users",
                &[("clerk_id", &format!("eq.{clerk_id}"))],
                &json!({
                    "email": email,
                    "first_name": first_name,
                    "last_name": last_name,
                    "updated_at": chrono::Utc::now(),
                }),
            )
            .await
    }

    /// Change a user's role.
    ///
    /// # Errors
    ///
    /// Returns `DbError` when the table API request fails.
    pub async fn update_user_role(
        &self,
        clerk_id: &str,
        role: UserRole,
    ) -> Result<Option<User>, DbError> {
        let Some(client) = self.client("update_user_role") else {
            return Ok(None);
        };
        client
            .update(
                "users",
                &[("clerk_id", &format!("eq.{clerk_id}"))],
                &json!({
                    "role": role,
                    "updated_at": chrono::Utc::now(),
                }),
            )
            .await
    }

    /// Remove a user row after deletion at the identity provider.
    ///
    /// # Errors
    ///
    /// Returns `DbError` when the table API request fails.
    pub async fn delete_user(&self, clerk_id: &str) -> Result<(), DbError> {
        let Some(client) = self.client("delete_user") else {
            return Ok(());
        };
        client
            .delete("users", &[("clerk_id", &format!("eq.{clerk_id}"))])
            .await
    }
}
