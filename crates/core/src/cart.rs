//! In-memory shopping cart.
//!
//! The cart is the transient, UI-facing entity: created empty per client,
//! mutated by synchronous actions, never persisted. Totals are recomputed
//! from scratch on every read so no incremental bookkeeping can drift.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::product::Product;
use crate::types::ProductId;

/// A single cart line: a product and its quantity (always >= 1).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub product: Product,
    pub quantity: u32,
}

impl CartItem {
    /// Price times quantity for this line.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.product.price * Decimal::from(self.quantity)
    }
}

/// An ordered list of cart lines with a UI visibility flag.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShoppingCart {
    items: Vec<CartItem>,
    open: bool,
}

impl ShoppingCart {
    /// Create an empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The cart lines, in insertion order.
    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Add a product to the cart.
    ///
    /// Merges into an existing line for the same product (quantity is
    /// accumulated), otherwise appends a new line. Quantities below 1 are
    /// clamped to 1.
    pub fn add(&mut self, product: Product, quantity: u32) {
        let quantity = quantity.max(1);
        if let Some(item) = self.items.iter_mut().find(|i| i.product.id == product.id) {
            item.quantity += quantity;
        } else {
            self.items.push(CartItem { product, quantity });
        }
    }

    /// Remove a line by product ID. Unknown IDs are a no-op.
    pub fn remove(&mut self, product_id: &ProductId) {
        self.items.retain(|i| &i.product.id != product_id);
    }

    /// Set the quantity of an existing line.
    ///
    /// Quantities of zero or below delegate to [`Self::remove`]. Unknown
    /// IDs are a no-op.
    pub fn update_quantity(&mut self, product_id: &ProductId, quantity: i64) {
        if quantity <= 0 {
            self.remove(product_id);
            return;
        }
        // quantity > 0 fits u32 for any realistic cart; saturate otherwise
        let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        if let Some(item) = self.items.iter_mut().find(|i| &i.product.id == product_id) {
            item.quantity = quantity;
        }
    }

    /// Remove all lines.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Flip the UI visibility flag and return the new value.
    pub const fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Whether the cart drawer is open in the UI.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of `price * quantity` over all lines, recomputed from scratch.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.items.iter().map(CartItem::line_total).sum()
    }

    /// Sum of quantities over all lines.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }
}
