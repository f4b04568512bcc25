//! Order rows in the `orders` table.

use serde_json::json;

use boles_core::{Order, OrderId, OrderStatus, UserId};

use super::{Db, DbError};

impl Db {
    /// List a user's orders, newest first.
    ///
    /// # Errors
    ///
    /// Returns `DbError` when the table API request fails.
    pub async fn get_orders_for_user(&self, user_id: &UserId) -> Result<Vec<Order>, DbError> {
        let Some(client) = self.client("get_orders_for_user") else {
            return Ok(Vec::new());
        };
        client
            .select(
                "orders",
                &[
                    ("user_id", &format!("eq.{}", user_id.as_str())),
                    ("order", "created_at.desc"),
                ],
            )
            .await
    }

    /// List all orders, newest first.
    ///
    /// # Errors
    ///
    /// Returns `DbError` when the table API request fails.
    pub async fn get_orders(&self) -> Result<Vec<Order>, DbError> {
        let Some(client) = self.client("get_orders") else {
            return Ok(Vec::new());
        };
        client
            .select("orders", &[("order", "created_at.desc")])
            .await
    }

    /// Fetch a single order.
    ///
    /// # Errors
    ///
    /// Returns `DbError` when the table API request fails.
    pub async fn get_order(&self, id: &OrderId) -> Result<Option<Order>, DbError> {
        let Some(client) = self.client("get_order") else {
            return Ok(None);
        };
        client
            .select_single("orders", &[("id", &format!("eq.{}", id.as_str()))])
            .await
    }

    /// Persist a new order.
    ///
    /// In mock mode the order is echoed back unpersisted so checkout still
    /// completes locally.
    ///
    /// # Errors
    ///
    /// Returns `DbError` when the table API request fails.
    pub async fn create_order(&self, order: &Order) -> Result<Order, DbError> {
        let Some(client) = self.client("create_order") else {
            return Ok(order.clone());
        };
        client.insert("orders", order).await
    }

    /// Move an order to a new status.
    ///
    /// Returns `None` when no such order exists.
    ///
    /// # Errors
    ///
    /// Returns `DbError` when the table API request fails.
    pub async fn update_order_status(
        &self,
        id: &OrderId,
        status: OrderStatus,
    ) -> Result<Option<Order>, DbError> {
        let Some(client) = self.client("update_order_status") else {
            return Ok(None);
        };
        client
            .update(
                "orders",
                &[("id", &format!("eq.{}", id.as_str()))],
                &json!({
                    "status": status,
                    "updated_at": chrono::Utc::now(),
                }),
            )
            .await
    }
}
