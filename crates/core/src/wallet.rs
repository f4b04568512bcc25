//! Mock wallet ledger.
//!
//! The wallet is an append-only ledger of signed transactions plus a cached
//! balance. Invariant: `balance` always equals the sum of all transaction
//! amounts. Every mutation appends exactly one transaction (newest first),
//! applies the same delta to the balance, and stamps `updated_at`.
//!
//! This is a demo ledger, not a financial system of record; balances are
//! validated here (server side) before any debit, but there is no
//! settlement, reconciliation, or idempotency machinery.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::types::{OrderId, TransactionId, TransactionStatus, TransactionType, UserId, WalletId};

/// Wallet mutation errors.
#[derive(Debug, Error)]
pub enum WalletError {
    /// A debit would overdraw the wallet.
    #[error("insufficient wallet balance: have {balance}, need {required}")]
    InsufficientBalance { balance: Decimal, required: Decimal },

    /// Top-ups, withdrawals, and debits must move a positive amount.
    #[error("amount must be positive, got {0}")]
    NonPositiveAmount(Decimal),
}

/// A single ledger entry. Positive amounts are credits, negative are debits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WalletTransaction {
    pub id: TransactionId,
    pub user_id: UserId,
    pub amount: Decimal,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub status: TransactionStatus,
    pub description: String,
    pub created_at: DateTime<Utc>,
    /// Human-readable reference code (e.g. `TXN-4F9A21C07B`).
    pub reference: String,
    #[serde(default)]
    pub order_id: Option<OrderId>,
}

impl WalletTransaction {
    /// Construct a transaction with a fresh ID and reference code.
    #[must_use]
    pub fn new(
        user_id: UserId,
        amount: Decimal,
        kind: TransactionType,
        status: TransactionStatus,
        description: impl Into<String>,
        order_id: Option<OrderId>,
    ) -> Self {
        Self {
            id: TransactionId::generate(),
            user_id,
            amount,
            kind,
            status,
            description: description.into(),
            created_at: Utc::now(),
            reference: reference_code(),
            order_id,
        }
    }
}

/// Generate a `TXN-` reference code from a UUID fragment.
#[must_use]
pub fn reference_code() -> String {
    let fragment: String = Uuid::new_v4()
        .simple()
        .to_string()
        .chars()
        .take(10)
        .collect();
    format!("TXN-{}", fragment.to_uppercase())
}

/// A user's wallet: balance plus full transaction history, newest first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wallet {
    pub id: WalletId,
    pub user_id: UserId,
    pub balance: Decimal,
    /// ISO 4217 currency code; the storefront wallet operates in USD.
    pub currency: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub transactions: Vec<WalletTransaction>,
}

impl Wallet {
    /// Create an empty wallet for a user, balance zero.
    #[must_use]
    pub fn new(user_id: UserId) -> Self {
        let now = Utc::now();
        Self {
            id: WalletId::generate(),
            user_id,
            balance: Decimal::ZERO,
            currency: "USD".to_owned(),
            created_at: now,
            updated_at: now,
            transactions: Vec::new(),
        }
    }

    /// Build a wallet from an existing transaction history.
    ///
    /// Transactions are ordered newest first and the balance is set to the
    /// exact sum of their amounts, establishing the ledger invariant.
    #[must_use]
    pub fn from_transactions(user_id: UserId, mut transactions: Vec<WalletTransaction>) -> Self {
        transactions.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        let balance = transactions.iter().map(|t| t.amount).sum();
        let created_at = transactions
            .last()
            .map_or_else(Utc::now, |t| t.created_at);
        Self {
            id: WalletId::generate(),
            user_id,
            balance,
            currency: "USD".to_owned(),
            created_at,
            updated_at: Utc::now(),
            transactions,
        }
    }

    /// Prepend a transaction and apply its amount to the balance.
    fn apply(&mut self, transaction: WalletTransaction) -> WalletTransaction {
        self.balance += transaction.amount;
        self.updated_at = Utc::now();
        self.transactions.insert(0, transaction.clone());
        transaction
    }

    /// Credit the wallet with a deposit.
    ///
    /// # Errors
    ///
    /// Returns `WalletError::NonPositiveAmount` if `amount <= 0`.
    pub fn top_up(&mut self, amount: Decimal) -> Result<WalletTransaction, WalletError> {
        if amount <= Decimal::ZERO {
            return Err(WalletError::NonPositiveAmount(amount));
        }
        Ok(self.apply(WalletTransaction::new(
            self.user_id.clone(),
            amount,
            TransactionType::Deposit,
            TransactionStatus::Completed,
            "Wallet top-up",
            None,
        )))
    }

    /// Debit the wallet for a withdrawal.
    ///
    /// # Errors
    ///
    /// Returns `WalletError::NonPositiveAmount` if `amount <= 0`, or
    /// `WalletError::InsufficientBalance` if the wallet cannot cover it;
    /// the wallet is unchanged on error.
    pub fn withdraw(&mut self, amount: Decimal) -> Result<WalletTransaction, WalletError> {
        if amount <= Decimal::ZERO {
            return Err(WalletError::NonPositiveAmount(amount));
        }
        self.check_funds(amount)?;
        Ok(self.apply(WalletTransaction::new(
            self.user_id.clone(),
            -amount,
            TransactionType::Withdrawal,
            TransactionStatus::Pending,
            "Wallet withdrawal",
            None,
        )))
    }

    /// Debit the wallet for an order payment.
    ///
    /// # Errors
    ///
    /// Returns `WalletError::NonPositiveAmount` if `total <= 0`, or
    /// `WalletError::InsufficientBalance` if the wallet cannot cover the
    /// order; the wallet is unchanged on error.
    pub fn debit_purchase(
        &mut self,
        total: Decimal,
        order_id: OrderId,
    ) -> Result<WalletTransaction, WalletError> {
        if total <= Decimal::ZERO {
            return Err(WalletError::NonPositiveAmount(total));
        }
        self.check_funds(total)?;
        let description = format!("Payment for order {order_id}");
        Ok(self.apply(WalletTransaction::new(
            self.user_id.clone(),
            -total,
            TransactionType::Purchase,
            TransactionStatus::Completed,
            description,
            Some(order_id),
        )))
    }

    /// Credit the wallet for an order refund.
    ///
    /// # Errors
    ///
    /// Returns `WalletError::NonPositiveAmount` if `amount <= 0`.
    pub fn credit_refund(
        &mut self,
        amount: Decimal,
        order_id: OrderId,
    ) -> Result<WalletTransaction, WalletError> {
        if amount <= Decimal::ZERO {
            return Err(WalletError::NonPositiveAmount(amount));
        }
        let description = format!("Refund for order {order_id}");
        Ok(self.apply(WalletTransaction::new(
            self.user_id.clone(),
            amount,
            TransactionType::Refund,
            TransactionStatus::Completed,
            description,
            Some(order_id),
        )))
    }

    /// Sum of all transaction amounts.
    #[must_use]
    pub fn ledger_sum(&self) -> Decimal {
        self.transactions.iter().map(|t| t.amount).sum()
    }

    /// Whether the cached balance matches the ledger sum.
    #[must_use]
    pub fn balance_consistent(&self) -> bool {
        self.balance == self.ledger_sum()
    }

    fn check_funds(&self, required: Decimal) -> Result<(), WalletError> {
        if self.balance < required {
            return Err(WalletError::InsufficientBalance {
                balance: self.balance,
                required,
            });
        }
        Ok(())
    }
}
