//! Wishlist rows in the `wishlist` table.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use boles_core::{ProductId, UserId, WishlistEntryId};

use super::{Db, DbError};

/// One saved product on a user's wishlist.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WishlistEntry {
    pub id: WishlistEntryId,
    pub user_id: UserId,
    pub product_id: ProductId,
    pub created_at: DateTime<Utc>,
}

impl WishlistEntry {
    /// Create a fresh entry for `user_id` saving `product_id`.
    #[must_use]
    pub fn new(user_id: UserId, product_id: ProductId) -> Self {
        Self {
            id: WishlistEntryId::generate(),
            user_id,
            product_id,
            created_at: Utc::now(),
        }
    }
}

impl Db {
    /// List a user's wishlist, newest first.
    ///
    /// # Errors
    ///
    /// Returns `DbError` when the table API request fails.
    pub async fn get_wishlist(&self, user_id: &UserId) -> Result<Vec<WishlistEntry>, DbError> {
        let Some(client) = self.client("get_wishlist") else {
            return Ok(Vec::new());
        };
        client
            .select(
                "wishlist",
                &[
                    ("user_id", &format!("eq.{}", user_id.as_str())),
                    ("order", "created_at.desc"),
                ],
            )
            .await
    }

    /// Save a product to a user's wishlist.
    ///
    /// # Errors
    ///
    /// Returns `DbError` when the table API request fails.
    pub async fn add_wishlist_entry(
        &self,
        entry: &WishlistEntry,
    ) -> Result<WishlistEntry, DbError> {
        let Some(client) = self.client("add_wishlist_entry") else {
            return Ok(entry.clone());
        };
        client.insert("wishlist", entry).await
    }

    /// Remove a product from a user's wishlist.
    ///
    /// # Errors
    ///
    /// Returns `DbError` when the table API request fails.
    pub async fn remove_wishlist_entry(
        &self,
        user_id: &UserId,
        product_id: &ProductId,
    ) -> Result<(), DbError> {
        let Some(client) = self.client("remove_wishlist_entry") else {
            return Ok(());
        };
        client
            .delete(
                "wishlist",
                &[
                    ("user_id", &format!("eq.{}", user_id.as_str())),
                    ("product_id", &format!("eq.{}", product_id.as_str())),
                ],
            )
            .await
    }
}
