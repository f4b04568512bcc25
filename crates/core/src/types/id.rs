//! Newtype IDs for type-safe entity references.
//!
//! Entity IDs in the hosted table API are strings (slugs for products,
//! generated identifiers elsewhere), so each ID wraps a `String`. The
//! `define_id!` macro prevents accidentally mixing IDs from different
//! entity types.

/// Macro to define a type-safe string ID wrapper.
///
/// Creates a newtype wrapper around `String` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`, `Ord`
/// - `new()`, `generate()` (prefixed UUID fragment), `as_str()`
/// - `From<String>`, `From<&str>`, and `Display` implementations
///
/// # Example
///
/// ```rust
/// # use boles_core::define_id;
/// define_id!(DemoId, "demo");
///
/// let by_hand = DemoId::new("demo_fixed");
/// let fresh = DemoId::generate();
/// assert!(fresh.as_str().starts_with("demo_"));
/// assert_ne!(by_hand, fresh);
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident, $prefix:literal) => {
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            ::serde::Serialize,
            ::serde::Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create an ID from an existing string value.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Generate a fresh ID with this entity's prefix.
            #[must_use]
            pub fn generate() -> Self {
                let fragment: String = ::uuid::Uuid::new_v4()
                    .simple()
                    .to_string()
                    .chars()
                    .take(12)
                    .collect();
                Self(format!(concat!($prefix, "_{}"), fragment))
            }

            /// Get the underlying string value.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_owned())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

// Standard entity IDs
define_id!(UserId, "usr");
define_id!(ProductId, "prd");
define_id!(CartId, "crt");
define_id!(OrderId, "ord");
define_id!(WalletId, "wal");
define_id!(TransactionId, "txn");
define_id!(WishlistEntryId, "wsh");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_uses_prefix() {
        let id = OrderId::generate();
        assert!(id.as_str().starts_with("ord_"));
        assert_eq!(id.as_str().len(), "ord_".len() + 12);
    }

    #[test]
    fn test_generate_is_unique() {
        let a = TransactionId::generate();
        let b = TransactionId::generate();
        assert_ne!(a, b);
    }

    #[test]
    fn test_serde_transparent() {
        let id = ProductId::new("smart-bulb-pro");
        let json = serde_json::to_string(&id).expect("serialize");
        assert_eq!(json, "\"smart-bulb-pro\"");
        let back: ProductId = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, id);
    }
}
