//! Admin catalog management.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::Deserialize;

use boles_core::{Product, ProductId};

use crate::error::{AppError, Result};
use crate::middleware::RequireAdmin;
use crate::state::AppState;

/// Catalog fields accepted on create and update.
#[derive(Debug, Deserialize)]
pub struct ProductPayload {
    pub name: String,
    pub description: String,
    pub price: Decimal,
    #[serde(default)]
    pub original_price: Option<Decimal>,
    pub category: String,
    #[serde(default = "default_brand")]
    pub brand: String,
    pub model: String,
    pub stock_count: u32,
    pub warranty: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub specifications: BTreeMap<String, String>,
    #[serde(default)]
    pub badges: Vec<String>,
}

fn default_brand() -> String {
    "BOLES".to_owned()
}

impl ProductPayload {
    fn into_product(self, id: ProductId) -> Product {
        Product {
            id,
            name: self.name,
            description: self.description,
            price: self.price,
            original_price: self.original_price,
            category: self.category,
            brand: self.brand,
            model: self.model,
            stock_count: self.stock_count,
            warranty: self.warranty,
            image: self.image,
            images: self.images,
            features: self.features,
            specifications: self.specifications,
            badges: self.badges,
        }
    }
}

/// `GET /api/admin/products` — raw catalog rows (USD prices, no display fields).
pub async fn index(
    State(state): State<AppState>,
    RequireAdmin(_): RequireAdmin,
) -> Result<Json<Vec<Product>>> {
    Ok(Json(state.db().get_products(None).await?))
}

/// `POST /api/admin/products` — add a product to the catalog.
pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(_): RequireAdmin,
    Json(payload): Json<ProductPayload>,
) -> Result<(StatusCode, Json<Product>)> {
    if payload.price <= Decimal::ZERO {
        return Err(AppError::BadRequest("price must be positive".to_owned()));
    }
    let product = payload.into_product(ProductId::generate());
    let product = state.db().create_product(&product).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// `PUT /api/admin/products/{id}` — replace a product's fields.
pub async fn update(
    State(state): State<AppState>,
    RequireAdmin(_): RequireAdmin,
    Path(id): Path<ProductId>,
    Json(payload): Json<ProductPayload>,
) -> Result<Json<Product>> {
    if payload.price <= Decimal::ZERO {
        return Err(AppError::BadRequest("price must be positive".to_owned()));
    }
    let product = payload.into_product(id.clone());
    let updated = state
        .db()
        .update_product(&product)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("product {id}")))?;
    Ok(Json(updated))
}

/// `DELETE /api/admin/products/{id}` — remove a product.
pub async fn remove(
    State(state): State<AppState>,
    RequireAdmin(_): RequireAdmin,
    Path(id): Path<ProductId>,
) -> Result<StatusCode> {
    state.db().delete_product(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
