//! Status enums for orders, wallet transactions, and users.

use serde::{Deserialize, Serialize};

/// Order lifecycle status.
///
/// Transitions are driven by the admin back-office (or demo seeding); there
/// is no automated fulfillment state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    #[default]
    Pending,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
    Refunded,
}

impl OrderStatus {
    /// All statuses, in lifecycle order.
    pub const ALL: [Self; 6] = [
        Self::Pending,
        Self::Processing,
        Self::Shipped,
        Self::Delivered,
        Self::Cancelled,
        Self::Refunded,
    ];

    /// Whether a shipment exists for this status (tracking data applies).
    #[must_use]
    pub const fn has_shipment(self) -> bool {
        matches!(self, Self::Shipped | Self::Delivered)
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Pending => "pending",
            Self::Processing => "processing",
            Self::Shipped => "shipped",
            Self::Delivered => "delivered",
            Self::Cancelled => "cancelled",
            Self::Refunded => "refunded",
        };
        write!(f, "{s}")
    }
}

/// Wallet transaction type.
///
/// Deposits and refunds carry positive amounts, withdrawals and purchases
/// negative ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionType {
    Deposit,
    Withdrawal,
    Purchase,
    Refund,
}

impl std::fmt::Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Deposit => "deposit",
            Self::Withdrawal => "withdrawal",
            Self::Purchase => "purchase",
            Self::Refund => "refund",
        };
        write!(f, "{s}")
    }
}

/// Wallet transaction status.
///
/// Recorded synchronously at mutation time; there is no asynchronous
/// settlement step, so `Pending` never transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TransactionStatus {
    #[default]
    Completed,
    Pending,
    Failed,
}

/// Storefront user role, mirrored from the identity provider's
/// `publicMetadata.role`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    #[default]
    User,
    Admin,
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::User => write!(f, "user"),
            Self::Admin => write!(f, "admin"),
        }
    }
}

impl std::str::FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(Self::User),
            "admin" => Ok(Self::Admin),
            _ => Err(format!("invalid user role: {s}")),
        }
    }
}

/// Payment method tag recorded on an order.
///
/// Only `Wallet` is actually processed; the card and express options are
/// accepted as tags without any gateway integration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    Wallet,
    Card,
    Paypal,
    ApplePay,
    GooglePay,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_status_serde_snake_case() {
        let json = serde_json::to_string(&OrderStatus::Shipped).expect("serialize");
        assert_eq!(json, "\"shipped\"");
        let back: OrderStatus = serde_json::from_str("\"refunded\"").expect("deserialize");
        assert_eq!(back, OrderStatus::Refunded);
    }

    #[test]
    fn test_has_shipment() {
        assert!(OrderStatus::Shipped.has_shipment());
        assert!(OrderStatus::Delivered.has_shipment());
        assert!(!OrderStatus::Pending.has_shipment());
        assert!(!OrderStatus::Cancelled.has_shipment());
    }

    #[test]
    fn test_user_role_round_trip() {
        let role: UserRole = "admin".parse().expect("valid role");
        assert_eq!(role, UserRole::Admin);
        assert_eq!(role.to_string(), "admin");
        assert!("superuser".parse::<UserRole>().is_err());
    }
}
