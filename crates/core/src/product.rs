//! Product catalog entry.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::ProductId;

/// A catalog product.
///
/// Reference data owned by the catalog; mutated only through the admin
/// back-office. Prices are USD decimals. Availability is derived from
/// `stock_count` — there is deliberately no stored `in_stock` flag, so the
/// two can never disagree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Stable slug identifier (e.g. `smart-bulb-pro`).
    pub id: ProductId,
    pub name: String,
    pub description: String,
    /// Current selling price in USD.
    pub price: Decimal,
    /// Pre-discount price, when the product is on sale.
    #[serde(default)]
    pub original_price: Option<Decimal>,
    pub category: String,
    pub brand: String,
    pub model: String,
    pub stock_count: u32,
    pub warranty: String,
    /// Primary image URL.
    pub image: String,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub specifications: BTreeMap<String, String>,
    #[serde(default)]
    pub badges: Vec<String>,
}

impl Product {
    /// Whether the product can currently be purchased.
    #[must_use]
    pub const fn in_stock(&self) -> bool {
        self.stock_count > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(stock_count: u32) -> Product {
        Product {
            id: ProductId::new("test-switch"),
            name: "Test Switch".to_owned(),
            description: "A switch for tests".to_owned(),
            price: Decimal::new(4_999, 2),
            original_price: None,
            category: "switches".to_owned(),
            brand: "BOLES".to_owned(),
            model: "TS-1".to_owned(),
            stock_count,
            warranty: "1 year".to_owned(),
            image: "/images/test-switch.jpg".to_owned(),
            images: Vec::new(),
            features: Vec::new(),
            specifications: BTreeMap::new(),
            badges: Vec::new(),
        }
    }

    #[test]
    fn test_in_stock_derived_from_stock_count() {
        assert!(product(3).in_stock());
        assert!(!product(0).in_stock());
    }

    #[test]
    fn test_row_with_legacy_in_stock_field_still_parses() {
        // Older rows carried a redundant boolean; it is ignored on read.
        let json = serde_json::json!({
            "id": "legacy-cam",
            "name": "Legacy Cam",
            "description": "old row",
            "price": "129.99",
            "category": "cameras",
            "brand": "BOLES",
            "model": "LC-2",
            "stock_count": 0,
            "in_stock": true,
            "warranty": "1 year",
            "image": "/images/legacy-cam.jpg"
        });
        let parsed: Product = serde_json::from_value(json).expect("row parses");
        assert!(!parsed.in_stock());
    }
}
