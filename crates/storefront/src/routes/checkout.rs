//! Checkout.
//!
//! Turns a cart into a pending order. Wallet payments are validated and
//! debited server-side before the order is persisted; a debit failure
//! leaves the cart, wallet, and order store untouched. The confirmation
//! email is best-effort and never fails the checkout.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use boles_core::{Address, CartId, Order, PaymentMethod};

use crate::error::{AppError, Result};
use crate::middleware::CurrentUser;
use crate::routes::wallet::mutate_wallet;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CheckoutRequest {
    pub cart_id: CartId,
    pub shipping_address: Address,
    /// Defaults to the shipping address when absent.
    pub billing_address: Option<Address>,
    pub payment_method: PaymentMethod,
    pub notes: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CheckoutResponse {
    pub order: Order,
    /// Remaining balance after a wallet payment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wallet_balance: Option<Decimal>,
}

/// `POST /api/checkout` — place an order from a cart.
pub async fn create(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(request): Json<CheckoutRequest>,
) -> Result<(StatusCode, Json<CheckoutResponse>)> {
    let missing = request.shipping_address.missing_fields();
    if !missing.is_empty() {
        return Err(AppError::BadRequest(format!(
            "shipping address is missing: {}",
            missing.join(", ")
        )));
    }

    let cart = state
        .carts()
        .get(&request.cart_id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("cart {}", request.cart_id)))?;
    if cart.is_empty() {
        return Err(AppError::BadRequest("cart is empty".to_owned()));
    }

    let billing = request
        .billing_address
        .unwrap_or_else(|| request.shipping_address.clone());
    let order = Order::from_cart(
        user.id.clone(),
        &cart,
        request.shipping_address,
        billing,
        request.payment_method,
        request.notes,
    );

    // Wallet payments settle before anything is persisted, so a failed
    // debit leaves no trace of the order.
    let wallet_balance = if request.payment_method == PaymentMethod::Wallet {
        let wallet = mutate_wallet(&state, &user.id, |wallet| {
            wallet.debit_purchase(order.totals.total, order.id.clone())
        })
        .await?;
        Some(wallet.balance)
    } else {
        None
    };

    let order = state.db().create_order(&order).await?;
    let _ = state
        .carts()
        .modify(&request.cart_id, boles_core::ShoppingCart::clear)
        .await;

    if let Err(error) = state.email().send_order_confirmation(&user, &order).await {
        tracing::warn!(%error, order_id = %order.id, "Order confirmation email failed");
    }

    tracing::info!(
        order_id = %order.id,
        user_id = %user.id,
        total = %order.totals.total,
        "Order placed"
    );
    Ok((
        StatusCode::CREATED,
        Json(CheckoutResponse {
            order,
            wallet_balance,
        }),
    ))
}
