//! Admin order management.

use axum::Json;
use axum::extract::{Path, State};
use serde::Deserialize;

use boles_core::{Order, OrderId, OrderStatus, PaymentMethod};

use crate::error::{AppError, Result};
use crate::middleware::RequireAdmin;
use crate::routes::wallet::mutate_wallet;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct StatusUpdateRequest {
    pub status: OrderStatus,
}

/// `GET /api/admin/orders` — all orders, newest first.
pub async fn index(
    State(state): State<AppState>,
    RequireAdmin(_): RequireAdmin,
) -> Result<Json<Vec<Order>>> {
    Ok(Json(state.db().get_orders().await?))
}

/// `PATCH /api/admin/orders/{id}/status` — move an order to a new status.
///
/// Moving a wallet-paid order to `refunded` credits the order total back
/// to the customer's wallet. The customer is notified by email; delivery
/// failure doesn't fail the update.
pub async fn update_status(
    State(state): State<AppState>,
    RequireAdmin(_): RequireAdmin,
    Path(id): Path<OrderId>,
    Json(request): Json<StatusUpdateRequest>,
) -> Result<Json<Order>> {
    let previous = state.db().get_order(&id).await?.map(|order| order.status);
    let order = state
        .db()
        .update_order_status(&id, request.status)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("order {id}")))?;

    if request.status == OrderStatus::Refunded {
        refund_to_wallet(&state, &order, previous.unwrap_or(order.status)).await?;
    }

    match state.db().get_user(&order.user_id).await? {
        Some(customer) => {
            if let Err(error) = state
                .email()
                .send_order_status(&customer, &order, request.status)
                .await
            {
                tracing::warn!(%error, order_id = %order.id, "Order status email failed");
            }
        }
        None => {
            tracing::warn!(order_id = %order.id, "Order has no resolvable customer");
        }
    }

    tracing::info!(order_id = %order.id, status = %request.status, "Order status updated");
    Ok(Json(order))
}

/// Credit a refunded order's total back to the customer's wallet.
///
/// Only wallet-paid orders settle through the ledger; card and external
/// payments are refunded by their own providers. An order already in
/// `refunded` is skipped so repeated transitions can't credit twice.
async fn refund_to_wallet(state: &AppState, order: &Order, previous: OrderStatus) -> Result<()> {
    if order.payment_method != PaymentMethod::Wallet || previous == OrderStatus::Refunded {
        return Ok(());
    }
    let wallet = mutate_wallet(state, &order.user_id, |wallet| {
        wallet.credit_refund(order.totals.total, order.id.clone())
    })
    .await?;
    tracing::info!(
        order_id = %order.id,
        user_id = %order.user_id,
        amount = %order.totals.total,
        balance = %wallet.balance,
        "Order total refunded to wallet"
    );
    Ok(())
}
