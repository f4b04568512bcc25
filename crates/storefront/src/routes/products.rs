//! Public catalog routes.
//!
//! Prices are stored in USD; responses add display strings in Naira at
//! the current cached exchange rate.

use axum::Json;
use axum::extract::{Path, Query, State};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use boles_core::{Product, ProductId};

use crate::error::{AppError, Result};
use crate::services::exchange::{convert, format_naira};
use crate::state::AppState;

/// A product as rendered to clients.
#[derive(Debug, Serialize)]
pub struct ProductView {
    #[serde(flatten)]
    pub product: Product,
    pub in_stock: bool,
    /// Display price in Naira, e.g. `₦39,984`.
    pub display_price: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_original_price: Option<String>,
}

impl ProductView {
    fn new(product: Product, rate: Decimal) -> Self {
        Self {
            in_stock: product.in_stock(),
            display_price: format_naira(convert(product.price, rate)),
            display_original_price: product
                .original_price
                .map(|p| format_naira(convert(p, rate))),
            product,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CatalogQuery {
    pub category: Option<String>,
}

/// `GET /api/products` — list the catalog, optionally by category.
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<CatalogQuery>,
) -> Result<Json<Vec<ProductView>>> {
    let products = state.db().get_products(query.category.as_deref()).await?;
    let rate = state.exchange().usd_to_ngn().await;
    Ok(Json(
        products
            .into_iter()
            .map(|p| ProductView::new(p, rate))
            .collect(),
    ))
}

/// `GET /api/products/{id}` — fetch one product.
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
) -> Result<Json<ProductView>> {
    let product = state
        .db()
        .get_product(&id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("product {id}")))?;
    let rate = state.exchange().usd_to_ngn().await;
    Ok(Json(ProductView::new(product, rate)))
}
