//! Authenticated account routes.

use axum::Json;
use axum::extract::State;

use boles_core::{Order, User};

use crate::error::Result;
use crate::middleware::CurrentUser;
use crate::state::AppState;

/// `GET /api/account/profile` — the authenticated user's profile.
pub async fn profile(CurrentUser(user): CurrentUser) -> Json<User> {
    Json(user)
}

/// `GET /api/account/orders` — the user's order history, newest first.
pub async fn orders(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Result<Json<Vec<Order>>> {
    Ok(Json(state.db().get_orders_for_user(&user.id).await?))
}
