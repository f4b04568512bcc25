//! Shopping cart routes.
//!
//! Carts are anonymous and server-held: `POST /api/cart` mints an opaque
//! cart ID the client carries through the session. No authentication is
//! required until checkout.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use boles_core::{CartId, ProductId, ShoppingCart};

use crate::error::{AppError, Result};
use crate::state::AppState;

/// One cart line as rendered to clients.
#[derive(Debug, Serialize)]
pub struct CartLineView {
    pub product_id: ProductId,
    pub name: String,
    pub unit_price: Decimal,
    pub quantity: u32,
    pub line_total: Decimal,
}

/// A cart as rendered to clients.
#[derive(Debug, Serialize)]
pub struct CartView {
    pub cart_id: CartId,
    pub items: Vec<CartLineView>,
    pub total: Decimal,
    pub item_count: u32,
    pub open: bool,
}

impl CartView {
    fn new(cart_id: CartId, cart: &ShoppingCart) -> Self {
        Self {
            items: cart
                .items()
                .iter()
                .map(|item| CartLineView {
                    product_id: item.product.id.clone(),
                    name: item.product.name.clone(),
                    unit_price: item.product.price,
                    quantity: item.quantity,
                    line_total: item.line_total(),
                })
                .collect(),
            total: cart.total(),
            item_count: cart.item_count(),
            open: cart.is_open(),
            cart_id,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AddItemRequest {
    pub product_id: ProductId,
    pub quantity: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateItemRequest {
    /// New absolute quantity; zero or negative removes the line.
    pub quantity: i64,
}

fn cart_not_found(cart_id: &CartId) -> AppError {
    AppError::NotFound(format!("cart {cart_id}"))
}

/// `POST /api/cart` — create an empty cart.
pub async fn create(State(state): State<AppState>) -> (StatusCode, Json<CartView>) {
    let cart_id = state.carts().create().await;
    let view = CartView::new(cart_id, &ShoppingCart::new());
    (StatusCode::CREATED, Json(view))
}

/// `GET /api/cart/{cart_id}` — fetch a cart snapshot.
pub async fn show(
    State(state): State<AppState>,
    Path(cart_id): Path<CartId>,
) -> Result<Json<CartView>> {
    let cart = state
        .carts()
        .get(&cart_id)
        .await
        .ok_or_else(|| cart_not_found(&cart_id))?;
    Ok(Json(CartView::new(cart_id, &cart)))
}

/// `POST /api/cart/{cart_id}/items` — add a product (merging quantities).
pub async fn add_item(
    State(state): State<AppState>,
    Path(cart_id): Path<CartId>,
    Json(request): Json<AddItemRequest>,
) -> Result<Json<CartView>> {
    let product = state
        .db()
        .get_product(&request.product_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("product {}", request.product_id)))?;

    let cart = state
        .carts()
        .modify(&cart_id, |cart| {
            cart.add(product, request.quantity.unwrap_or(1));
            cart.clone()
        })
        .await
        .ok_or_else(|| cart_not_found(&cart_id))?;
    Ok(Json(CartView::new(cart_id, &cart)))
}

/// `PATCH /api/cart/{cart_id}/items/{product_id}` — set a line quantity.
pub async fn update_item(
    State(state): State<AppState>,
    Path((cart_id, product_id)): Path<(CartId, ProductId)>,
    Json(request): Json<UpdateItemRequest>,
) -> Result<Json<CartView>> {
    let cart = state
        .carts()
        .modify(&cart_id, |cart| {
            cart.update_quantity(&product_id, request.quantity);
            cart.clone()
        })
        .await
        .ok_or_else(|| cart_not_found(&cart_id))?;
    Ok(Json(CartView::new(cart_id, &cart)))
}

/// `DELETE /api/cart/{cart_id}/items/{product_id}` — remove a line.
pub async fn remove_item(
    State(state): State<AppState>,
    Path((cart_id, product_id)): Path<(CartId, ProductId)>,
) -> Result<Json<CartView>> {
    let cart = state
        .carts()
        .modify(&cart_id, |cart| {
            cart.remove(&product_id);
            cart.clone()
        })
        .await
        .ok_or_else(|| cart_not_found(&cart_id))?;
    Ok(Json(CartView::new(cart_id, &cart)))
}

/// `DELETE /api/cart/{cart_id}` — empty the cart (the ID stays valid).
pub async fn clear(
    State(state): State<AppState>,
    Path(cart_id): Path<CartId>,
) -> Result<Json<CartView>> {
    let cart = state
        .carts()
        .modify(&cart_id, |cart| {
            cart.clear();
            cart.clone()
        })
        .await
        .ok_or_else(|| cart_not_found(&cart_id))?;
    Ok(Json(CartView::new(cart_id, &cart)))
}

/// `POST /api/cart/{cart_id}/toggle` — open or close the cart drawer.
pub async fn toggle(
    State(state): State<AppState>,
    Path(cart_id): Path<CartId>,
) -> Result<Json<CartView>> {
    let cart = state
        .carts()
        .modify(&cart_id, |cart| {
            cart.toggle();
            cart.clone()
        })
        .await
        .ok_or_else(|| cart_not_found(&cart_id))?;
    Ok(Json(CartView::new(cart_id, &cart)))
}
