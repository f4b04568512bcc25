//! Core type definitions shared across the workspace.

mod id;
mod status;

pub use id::{
    CartId, OrderId, ProductId, TransactionId, UserId, WalletId, WishlistEntryId,
};
pub use status::{OrderStatus, PaymentMethod, TransactionStatus, TransactionType, UserRole};
