//! Wallet rows in the `wallets` table.
//!
//! The whole wallet (balance plus embedded transaction ledger) is stored
//! as one row per user and written back after every mutation.

use boles_core::{UserId, Wallet};

use super::{Db, DbError};

impl Db {
    /// Fetch a user's wallet.
    ///
    /// # Errors
    ///
    /// Returns `DbError` when the table API request fails.
    pub async fn get_wallet(&self, user_id: &UserId) -> Result<Option<Wallet>, DbError> {
        let Some(client) = self.client("get_wallet") else {
            return Ok(None);
        };
        client
            .select_single("wallets", &[("user_id", &format!("eq.{}", user_id.as_str()))])
            .await
    }

    /// Write a wallet back, creating the row on first use.
    ///
    /// In mock mode the wallet is echoed back unpersisted; the in-process
    /// cache remains the source of truth.
    ///
    /// # Errors
    ///
    /// Returns `DbError` when the table API request fails.
    pub async fn upsert_wallet(&self, wallet: &Wallet) -> Result<Wallet, DbError> {
        let Some(client) = self.client("upsert_wallet") else {
            return Ok(wallet.clone());
        };
        client.upsert("wallets", "user_id", wallet).await
    }
}
