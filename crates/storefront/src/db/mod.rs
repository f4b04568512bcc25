//! Data-access facade over the hosted table API.
//!
//! All reads and writes go through [`Db`], which wraps an optional
//! [`TableClient`]. When the table API is unconfigured the facade degrades
//! rather than failing: reads return empty or built-in mock results and
//! writes are acknowledged without persisting, so the storefront stays
//! usable in local development.

mod client;
mod orders;
mod products;
mod users;
mod wallets;
mod wishlist;

pub use client::{DbError, TableClient};
pub use wishlist::WishlistEntry;

use crate::config::SupabaseConfig;

/// Data-access facade for the storefront.
#[derive(Debug, Clone, Default)]
pub struct Db {
    client: Option<TableClient>,
}

impl Db {
    /// Create the facade; `None` selects degraded (mock) mode.
    #[must_use]
    pub fn new(config: Option<&SupabaseConfig>) -> Self {
        let client = config.map(TableClient::new);
        if client.is_none() {
            tracing::warn!("Table API not configured; data access runs in mock mode");
        }
        Self { client }
    }

    /// Whether a real table API backend is configured.
    #[must_use]
    pub const fn is_configured(&self) -> bool {
        self.client.is_some()
    }

    /// The underlying client, logging the skipped operation when absent.
    fn client(&self, op: &str) -> Option<&TableClient> {
        if self.client.is_none() {
            tracing::debug!(operation = op, "Table API unconfigured, using mock path");
        }
        self.client.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unconfigured_facade() {
        let db = Db::new(None);
        assert!(!db.is_configured());
        assert!(db.client("test").is_none());
    }

    #[tokio::test]
    async fn test_unconfigured_lookups_resolve_to_none() {
        let db = Db::new(None);
        let user = db
            .get_user_by_clerk_id("user_abc")
            .await
            .expect("mock reads never fail");
        assert!(user.is_none());

        let wallet = db
            .get_wallet(&boles_core::UserId::generate())
            .await
            .expect("mock reads never fail");
        assert!(wallet.is_none());
    }
}
