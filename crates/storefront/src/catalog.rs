//! Built-in demo catalog.
//!
//! Used as the mock result for product reads when the table API is
//! unconfigured, and by the CLI `seed products` command to populate a
//! configured backend.

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use boles_core::{Product, ProductId};

struct Entry {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    /// Price in cents, USD.
    price_cents: i64,
    original_price_cents: Option<i64>,
    category: &'static str,
    model: &'static str,
    stock_count: u32,
    warranty: &'static str,
    features: &'static [&'static str],
    specifications: &'static [(&'static str, &'static str)],
    badges: &'static [&'static str],
}

impl Entry {
    fn build(&self) -> Product {
        let image = format!("/images/products/{}.jpg", self.id);
        Product {
            id: ProductId::new(self.id),
            name: self.name.to_owned(),
            description: self.description.to_owned(),
            price: Decimal::new(self.price_cents, 2),
            original_price: self.original_price_cents.map(|c| Decimal::new(c, 2)),
            category: self.category.to_owned(),
            brand: "BOLES".to_owned(),
            model: self.model.to_owned(),
            stock_count: self.stock_count,
            warranty: self.warranty.to_owned(),
            images: vec![image.clone()],
            image,
            features: self.features.iter().map(|&f| f.to_owned()).collect(),
            specifications: self
                .specifications
                .iter()
                .map(|&(k, v)| (k.to_owned(), v.to_owned()))
                .collect::<BTreeMap<_, _>>(),
            badges: self.badges.iter().map(|&b| b.to_owned()).collect(),
        }
    }
}

const ENTRIES: &[Entry] = &[
    Entry {
        id: "smart-hub-central",
        name: "BOLES Central Smart Hub",
        description: "Whole-home automation hub with Zigbee, Z-Wave, and Matter support.",
        price_cents: 29_900,
        original_price_cents: Some(34_900),
        category: "hubs",
        model: "BH-100",
        stock_count: 24,
        warranty: "2 years",
        features: &[
            "Controls up to 200 devices",
            "Local automation engine",
            "Voice assistant integration",
        ],
        specifications: &[("Connectivity", "Zigbee / Z-Wave / Matter"), ("Power", "12V DC")],
        badges: &["bestseller"],
    },
    Entry {
        id: "smart-bulb-pro",
        name: "BOLES Smart Bulb Pro",
        description: "Full-colour dimmable smart bulb, 16 million colours, E27 fitting.",
        price_cents: 2_499,
        original_price_cents: None,
        category: "lighting",
        model: "BL-220",
        stock_count: 180,
        warranty: "1 year",
        features: &["16M colours", "Schedules and scenes", "No hub required"],
        specifications: &[("Lumens", "1100"), ("Fitting", "E27")],
        badges: &[],
    },
    Entry {
        id: "smart-doorbell-vision",
        name: "BOLES Vision Doorbell",
        description: "Video doorbell with two-way audio and person detection.",
        price_cents: 12_900,
        original_price_cents: Some(15_900),
        category: "security",
        model: "BD-310",
        stock_count: 42,
        warranty: "2 years",
        features: &["2K HDR video", "Two-way audio", "Person detection"],
        specifications: &[("Resolution", "2560x1920"), ("Field of view", "160°")],
        badges: &["sale"],
    },
    Entry {
        id: "smart-lock-secure",
        name: "BOLES SecureLock",
        description: "Keyless smart deadbolt with fingerprint and PIN entry.",
        price_cents: 19_900,
        original_price_cents: None,
        category: "security",
        model: "BK-410",
        stock_count: 31,
        warranty: "3 years",
        features: &["Fingerprint unlock", "Auto-lock", "Guest codes"],
        specifications: &[("Battery life", "12 months"), ("Material", "Zinc alloy")],
        badges: &["new"],
    },
    Entry {
        id: "smart-thermostat-eco",
        name: "BOLES EcoTherm Thermostat",
        description: "Learning thermostat that cuts heating and cooling costs.",
        price_cents: 15_900,
        original_price_cents: None,
        category: "climate",
        model: "BT-510",
        stock_count: 57,
        warranty: "2 years",
        features: &["Learning schedules", "Room sensors", "Energy reports"],
        specifications: &[("Display", "2.4\" colour"), ("Compatibility", "24V HVAC")],
        badges: &[],
    },
    Entry {
        id: "smart-camera-guard",
        name: "BOLES GuardCam Outdoor",
        description: "Weatherproof outdoor camera with colour night vision.",
        price_cents: 9_900,
        original_price_cents: Some(12_900),
        category: "cameras",
        model: "BC-620",
        stock_count: 0,
        warranty: "2 years",
        features: &["Colour night vision", "IP66 weatherproof", "Motion zones"],
        specifications: &[("Resolution", "1440p"), ("Storage", "Cloud / microSD")],
        badges: &["sale"],
    },
    Entry {
        id: "smart-plug-mini",
        name: "BOLES Mini Smart Plug",
        description: "Compact Wi-Fi plug with energy monitoring.",
        price_cents: 1_799,
        original_price_cents: None,
        category: "power",
        model: "BP-115",
        stock_count: 260,
        warranty: "1 year",
        features: &["Energy monitoring", "Away mode", "Compact design"],
        specifications: &[("Max load", "16A"), ("Wi-Fi", "2.4GHz")],
        badges: &["bestseller"],
    },
    Entry {
        id: "smart-speaker-sound",
        name: "BOLES SoundPoint Speaker",
        description: "Smart speaker with room-filling sound and voice control.",
        price_cents: 7_900,
        original_price_cents: None,
        category: "audio",
        model: "BS-730",
        stock_count: 88,
        warranty: "1 year",
        features: &["360° audio", "Multi-room sync", "Built-in voice assistant"],
        specifications: &[("Drivers", "2x full-range"), ("Inputs", "Wi-Fi / Bluetooth 5.2")],
        badges: &[],
    },
];

/// The full demo catalog.
#[must_use]
pub fn demo_products() -> Vec<Product> {
    ENTRIES.iter().map(Entry::build).collect()
}

/// Look up a demo product by ID.
#[must_use]
pub fn demo_product(id: &ProductId) -> Option<Product> {
    ENTRIES
        .iter()
        .find(|e| e.id == id.as_str())
        .map(Entry::build)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_unique_slugs() {
        let products = demo_products();
        assert!(!products.is_empty());
        let mut ids: Vec<_> = products.iter().map(|p| p.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), products.len());
    }

    #[test]
    fn test_lookup_by_id() {
        let id = ProductId::new("smart-bulb-pro");
        let product = demo_product(&id).expect("bulb exists");
        assert_eq!(product.name, "BOLES Smart Bulb Pro");
        assert!(product.in_stock());
        assert!(demo_product(&ProductId::new("missing")).is_none());
    }

    #[test]
    fn test_out_of_stock_entry_reports_unavailable() {
        let cam = demo_product(&ProductId::new("smart-camera-guard")).expect("cam exists");
        assert_eq!(cam.stock_count, 0);
        assert!(!cam.in_stock());
    }
}
