//! Wishlist routes.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde::Deserialize;

use boles_core::ProductId;

use crate::db::WishlistEntry;
use crate::error::{AppError, Result};
use crate::middleware::CurrentUser;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AddWishlistRequest {
    pub product_id: ProductId,
}

/// `GET /api/wishlist` — the user's saved products, newest first.
pub async fn index(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Result<Json<Vec<WishlistEntry>>> {
    Ok(Json(state.db().get_wishlist(&user.id).await?))
}

/// `POST /api/wishlist` — save a product.
pub async fn add(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(request): Json<AddWishlistRequest>,
) -> Result<(StatusCode, Json<WishlistEntry>)> {
    // Reject IDs that don't resolve to a product
    if state.db().get_product(&request.product_id).await?.is_none() {
        return Err(AppError::NotFound(format!(
            "product {}",
            request.product_id
        )));
    }
    let entry = WishlistEntry::new(user.id, request.product_id);
    let entry = state.db().add_wishlist_entry(&entry).await?;
    Ok((StatusCode::CREATED, Json(entry)))
}

/// `DELETE /api/wishlist/{product_id}` — remove a saved product.
pub async fn remove(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(product_id): Path<ProductId>,
) -> Result<StatusCode> {
    state
        .db()
        .remove_wishlist_entry(&user.id, &product_id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
