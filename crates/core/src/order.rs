//! Orders: immutable line items, totals, and address snapshots.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::cart::{CartItem, ShoppingCart};
use crate::types::{OrderId, OrderStatus, PaymentMethod, ProductId, UserId};

/// Sales tax rate applied at checkout (7%).
#[must_use]
pub fn tax_rate() -> Decimal {
    Decimal::new(7, 2)
}

/// Subtotal at or above which shipping is free.
#[must_use]
pub fn free_shipping_threshold() -> Decimal {
    Decimal::from(100)
}

/// Flat shipping fee below the free-shipping threshold.
#[must_use]
pub fn standard_shipping_fee() -> Decimal {
    Decimal::new(999, 2)
}

/// Shipping fee for a given subtotal.
#[must_use]
pub fn shipping_fee(subtotal: Decimal) -> Decimal {
    if subtotal >= free_shipping_threshold() {
        Decimal::ZERO
    } else {
        standard_shipping_fee()
    }
}

/// A postal address snapshot stored on an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub full_name: String,
    pub line1: String,
    #[serde(default)]
    pub line2: Option<String>,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub country: String,
    #[serde(default)]
    pub phone: Option<String>,
}

impl Address {
    /// Names of required fields that are empty, for validation messages.
    #[must_use]
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.full_name.trim().is_empty() {
            missing.push("full_name");
        }
        if self.line1.trim().is_empty() {
            missing.push("line1");
        }
        if self.city.trim().is_empty() {
            missing.push("city");
        }
        if self.state.trim().is_empty() {
            missing.push("state");
        }
        if self.postal_code.trim().is_empty() {
            missing.push("postal_code");
        }
        if self.country.trim().is_empty() {
            missing.push("country");
        }
        missing
    }
}

/// A line item frozen onto an order at checkout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub product_id: ProductId,
    pub name: String,
    pub quantity: u32,
    pub unit_price: Decimal,
    pub line_total: Decimal,
}

impl From<&CartItem> for OrderItem {
    fn from(item: &CartItem) -> Self {
        Self {
            product_id: item.product.id.clone(),
            name: item.product.name.clone(),
            quantity: item.quantity,
            unit_price: item.product.price,
            line_total: item.line_total(),
        }
    }
}

/// Order money breakdown. Invariant: `total = subtotal + tax + shipping - discount`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderTotals {
    pub subtotal: Decimal,
    pub tax: Decimal,
    pub shipping: Decimal,
    pub discount: Decimal,
    pub total: Decimal,
}

impl OrderTotals {
    /// Compute totals from a subtotal: 7% tax, the given shipping fee and
    /// discount, and a total satisfying the invariant.
    #[must_use]
    pub fn compute(subtotal: Decimal, shipping: Decimal, discount: Decimal) -> Self {
        let tax = (subtotal * tax_rate()).round_dp(2);
        Self {
            subtotal,
            tax,
            shipping,
            discount,
            total: subtotal + tax + shipping - discount,
        }
    }
}

/// A customer order.
///
/// Items are immutable once the order is created; only `status`,
/// `tracking_number`, `estimated_delivery`, and `updated_at` change
/// afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub user_id: UserId,
    pub items: Vec<OrderItem>,
    pub status: OrderStatus,
    #[serde(flatten)]
    pub totals: OrderTotals,
    pub shipping_address: Address,
    pub billing_address: Address,
    pub payment_method: PaymentMethod,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub tracking_number: Option<String>,
    #[serde(default)]
    pub estimated_delivery: Option<DateTime<Utc>>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl Order {
    /// Build a pending order from a cart snapshot.
    ///
    /// The subtotal is the cart total, tax is 7%, shipping follows the
    /// free-over-threshold policy, and no discount applies at checkout.
    #[must_use]
    pub fn from_cart(
        user_id: UserId,
        cart: &ShoppingCart,
        shipping_address: Address,
        billing_address: Address,
        payment_method: PaymentMethod,
        notes: Option<String>,
    ) -> Self {
        let subtotal = cart.total();
        let totals = OrderTotals::compute(subtotal, shipping_fee(subtotal), Decimal::ZERO);
        let now = Utc::now();
        Self {
            id: OrderId::generate(),
            user_id,
            items: cart.items().iter().map(OrderItem::from).collect(),
            status: OrderStatus::Pending,
            totals,
            shipping_address,
            billing_address,
            payment_method,
            created_at: now,
            updated_at: now,
            tracking_number: None,
            estimated_delivery: None,
            notes,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::product::Product;

    fn product(id: &str, price: Decimal) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("Product {id}"),
            description: String::new(),
            price,
            original_price: None,
            category: "test".to_owned(),
            brand: "BOLES".to_owned(),
            model: "T".to_owned(),
            stock_count: 5,
            warranty: "1 year".to_owned(),
            image: String::new(),
            images: Vec::new(),
            features: Vec::new(),
            specifications: BTreeMap::new(),
            badges: Vec::new(),
        }
    }

    fn address() -> Address {
        Address {
            full_name: "Ada Obi".to_owned(),
            line1: "12 Adeola Odeku Street".to_owned(),
            line2: None,
            city: "Lagos".to_owned(),
            state: "Lagos".to_owned(),
            postal_code: "101241".to_owned(),
            country: "Nigeria".to_owned(),
            phone: None,
        }
    }

    #[test]
    fn test_totals_invariant() {
        let totals = OrderTotals::compute(
            Decimal::new(45_700, 2),
            Decimal::ZERO,
            Decimal::new(1_000, 2),
        );
        assert_eq!(
            totals.total,
            totals.subtotal + totals.tax + totals.shipping - totals.discount
        );
        // 7% of 457.00
        assert_eq!(totals.tax, Decimal::new(3_199, 2));
    }

    #[test]
    fn test_shipping_free_over_threshold() {
        assert_eq!(shipping_fee(Decimal::from(100)), Decimal::ZERO);
        assert_eq!(shipping_fee(Decimal::from(250)), Decimal::ZERO);
        assert_eq!(shipping_fee(Decimal::new(9_999, 2)), standard_shipping_fee());
    }

    #[test]
    fn test_from_cart_freezes_line_items() {
        let mut cart = ShoppingCart::new();
        cart.add(product("hub", Decimal::from(299)), 1);
        cart.add(product("sensor", Decimal::from(79)), 2);

        let order = Order::from_cart(
            UserId::new("usr_test"),
            &cart,
            address(),
            address(),
            PaymentMethod::Wallet,
            None,
        );

        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.items.len(), 2);
        assert_eq!(order.totals.subtotal, Decimal::from(457));
        assert_eq!(order.totals.shipping, Decimal::ZERO);
        assert_eq!(order.totals.tax, Decimal::new(3_199, 2));
        assert_eq!(
            order.totals.total,
            order.totals.subtotal + order.totals.tax
        );

        let sensor = order
            .items
            .iter()
            .find(|i| i.product_id == ProductId::new("sensor"))
            .expect("sensor line present");
        assert_eq!(sensor.quantity, 2);
        assert_eq!(sensor.line_total, Decimal::from(158));
    }

    #[test]
    fn test_missing_shipping_fields_reported() {
        let mut addr = address();
        addr.city = String::new();
        addr.postal_code = "  ".to_owned();
        assert_eq!(addr.missing_fields(), vec!["city", "postal_code"]);
        assert!(address().missing_fields().is_empty());
    }
}
