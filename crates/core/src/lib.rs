//! Shared domain types for the BOLES Smart Home storefront.
//!
//! This crate holds the pure domain model: typed IDs, status enums, the
//! product catalog entry, the shopping cart, orders, and the wallet ledger.
//! Everything here is synchronous and side-effect free; persistence and
//! transport live in the storefront crate.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod order;
pub mod product;
pub mod types;
pub mod user;
pub mod wallet;

pub use cart::{CartItem, ShoppingCart};
pub use order::{Address, Order, OrderItem, OrderTotals};
pub use product::Product;
pub use types::{
    CartId, OrderId, OrderStatus, PaymentMethod, ProductId, TransactionId, TransactionStatus,
    TransactionType, UserId, UserRole, WalletId, WishlistEntryId,
};
pub use user::User;
pub use wallet::{Wallet, WalletError, WalletTransaction};
