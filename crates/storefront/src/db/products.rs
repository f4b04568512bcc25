//! Product rows in the `products` table.
//!
//! In mock mode reads fall back to the built-in demo catalog so the
//! storefront always has something to sell.

use boles_core::{Product, ProductId};

use super::{Db, DbError};
use crate::catalog;

impl Db {
    /// List the full catalog, optionally filtered by category.
    ///
    /// # Errors
    ///
    /// Returns `DbError` when the table API request fails.
    pub async fn get_products(&self, category: Option<&str>) -> Result<Vec<Product>, DbError> {
        let Some(client) = self.client("get_products") else {
            let mut products = catalog::demo_products();
            if let Some(category) = category {
                products.retain(|p| p.category == category);
            }
            return Ok(products);
        };

        let mut query: Vec<(&str, String)> = vec![("order", "name.asc".to_owned())];
        if let Some(category) = category {
            query.push(("category", format!("eq.{category}")));
        }
        let query: Vec<(&str, &str)> = query.iter().map(|(k, v)| (*k, v.as_str())).collect();
        client.select("products", &query).await
    }

    /// Fetch a single product.
    ///
    /// # Errors
    ///
    /// Returns `DbError` when the table API request fails.
    pub async fn get_product(&self, id: &ProductId) -> Result<Option<Product>, DbError> {
        let Some(client) = self.client("get_product") else {
            return Ok(catalog::demo_product(id));
        };
        client
            .select_single("products", &[("id", &format!("eq.{}", id.as_str()))])
            .await
    }

    /// Persist a new product.
    ///
    /// # Errors
    ///
    /// Returns `DbError` when the table API request fails.
    pub async fn create_product(&self, product: &Product) -> Result<Product, DbError> {
        let Some(client) = self.client("create_product") else {
            return Ok(product.clone());
        };
        client.insert("products", product).await
    }

    /// Replace a product row.
    ///
    /// # Errors
    ///
    /// Returns `DbError` when the table API request fails.
    pub async fn update_product(&self, product: &Product) -> Result<Option<Product>, DbError> {
        let Some(client) = self.client("update_product") else {
            return Ok(None);
        };
        client
            .update(
                "products",
                &[("id", &format!("eq.{}", product.id.as_str()))],
                product,
            )
            .await
    }

    /// Remove a product from the catalog.
    ///
    /// # Errors
    ///
    /// Returns `DbError` when the table API request fails.
    pub async fn delete_product(&self, id: &ProductId) -> Result<(), DbError> {
        let Some(client) = self.client("delete_product") else {
            return Ok(());
        };
        client
            .delete("products", &[("id", &format!("eq.{}", id.as_str()))])
            .await
    }
}
