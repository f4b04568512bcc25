//! Wallet routes.
//!
//! The wallet is server-authoritative: balances are loaded from the table
//! API (through a write-through cache), mutated by the domain ledger, and
//! written back. Clients never submit balances.

use axum::Json;
use axum::extract::State;
use rust_decimal::Decimal;
use serde::Deserialize;

use boles_core::{UserId, Wallet, WalletError, WalletTransaction};

use crate::error::Result;
use crate::middleware::CurrentUser;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AmountRequest {
    pub amount: Decimal,
}

/// Load a user's wallet: cache, then table API, then a fresh empty wallet.
pub(crate) async fn load_wallet(state: &AppState, user_id: &UserId) -> Result<Wallet> {
    if let Some(wallet) = state.wallets().get(user_id).await {
        return Ok(wallet);
    }
    if let Some(wallet) = state.db().get_wallet(user_id).await? {
        state.wallets().put(wallet.clone()).await;
        return Ok(wallet);
    }
    let wallet = Wallet::new(user_id.clone());
    save_wallet(state, wallet.clone()).await?;
    Ok(wallet)
}

/// Write a wallet through the cache to the table API.
async fn save_wallet(state: &AppState, wallet: Wallet) -> Result<()> {
    state.db().upsert_wallet(&wallet).await?;
    state.wallets().put(wallet).await;
    Ok(())
}

/// Apply one ledger mutation to a user's wallet and persist the result.
///
/// The whole load-mutate-save cycle runs under the user's wallet lock, so
/// concurrent mutations for the same user are applied one at a time and
/// each sees the balance left by the previous one. A mutation that returns
/// an error persists nothing.
pub(crate) async fn mutate_wallet(
    state: &AppState,
    user_id: &UserId,
    mutation: impl FnOnce(&mut Wallet) -> std::result::Result<WalletTransaction, WalletError>,
) -> Result<Wallet> {
    let _guard = state.wallets().user_lock(user_id).await;
    let mut wallet = load_wallet(state, user_id).await?;
    mutation(&mut wallet)?;
    save_wallet(state, wallet.clone()).await?;
    Ok(wallet)
}

/// `GET /api/wallet` — the authenticated user's wallet.
pub async fn show(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Result<Json<Wallet>> {
    let wallet = load_wallet(&state, &user.id).await?;
    Ok(Json(wallet))
}

/// `POST /api/wallet/top-up` — credit the wallet.
pub async fn top_up(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(request): Json<AmountRequest>,
) -> Result<Json<Wallet>> {
    let wallet = mutate_wallet(&state, &user.id, |wallet| wallet.top_up(request.amount)).await?;
    Ok(Json(wallet))
}

/// `POST /api/wallet/withdraw` — debit the wallet.
pub async fn withdraw(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(request): Json<AmountRequest>,
) -> Result<Json<Wallet>> {
    let wallet = mutate_wallet(&state, &user.id, |wallet| wallet.withdraw(request.amount)).await?;
    Ok(Json(wallet))
}

/// `GET /api/wallet/transactions` — the ledger, newest first.
pub async fn transactions(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Result<Json<Vec<WalletTransaction>>> {
    let wallet = load_wallet(&state, &user.id).await?;
    Ok(Json(wallet.transactions))
}
