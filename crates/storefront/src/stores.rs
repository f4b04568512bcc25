//! In-memory server-side stores.
//!
//! Carts are transient and scoped to an opaque cart ID handed to the
//! client; they are never persisted to the table API. Wallets are
//! persisted, but a write-through cache keeps the hot path off the
//! network.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{Mutex, OwnedMutexGuard, RwLock};

use boles_core::{CartId, ShoppingCart, UserId, Wallet};

/// Server-side cart storage keyed by generated cart ID.
#[derive(Debug, Default)]
pub struct CartStore {
    carts: RwLock<HashMap<CartId, ShoppingCart>>,
}

impl CartStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new empty cart and return its ID.
    pub async fn create(&self) -> CartId {
        let id = CartId::generate();
        self.carts
            .write()
            .await
            .insert(id.clone(), ShoppingCart::new());
        id
    }

    /// Fetch a snapshot of a cart.
    pub async fn get(&self, id: &CartId) -> Option<ShoppingCart> {
        self.carts.read().await.get(id).cloned()
    }

    /// Mutate a cart in place under the write lock.
    ///
    /// Returns `None` when no cart exists for `id`.
    pub async fn modify<T>(
        &self,
        id: &CartId,
        f: impl FnOnce(&mut ShoppingCart) -> T,
    ) -> Option<T> {
        let mut carts = self.carts.write().await;
        carts.get_mut(id).map(f)
    }
}

/// Write-through cache of wallets keyed by owner.
///
/// The table API remains the durable store; this cache only avoids a
/// round trip per wallet read within one server process. It also hands
/// out a per-user mutex so callers can serialize load-mutate-save
/// cycles: without it, two concurrent debits would both read the same
/// snapshot, both pass the balance check, and the losing write would
/// drop a ledger entry.
#[derive(Debug, Default)]
pub struct WalletCache {
    wallets: RwLock<HashMap<UserId, Wallet>>,
    locks: RwLock<HashMap<UserId, Arc<Mutex<()>>>>,
}

impl WalletCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn get(&self, user_id: &UserId) -> Option<Wallet> {
        self.wallets.read().await.get(user_id).cloned()
    }

    pub async fn put(&self, wallet: Wallet) {
        self.wallets
            .write()
            .await
            .insert(wallet.user_id.clone(), wallet);
    }

    /// Acquire the mutation lock for one user's wallet.
    ///
    /// Mutations for the same user queue behind the guard; different
    /// users proceed independently.
    pub async fn user_lock(&self, user_id: &UserId) -> OwnedMutexGuard<()> {
        let mutex = {
            let mut locks = self.locks.write().await;
            locks
                .entry(user_id.clone())
                .or_insert_with(|| Arc::new(Mutex::new(())))
                .clone()
        };
        mutex.lock_owned().await
    }
}

#[cfg(test)]
mod tests {
    use boles_core::{Product, ProductId};
    use rust_decimal::Decimal;

    use super::*;

    fn sample_product() -> Product {
        Product {
            id: ProductId::new("smart-bulb-pro"),
            name: "Bulb".to_owned(),
            description: String::new(),
            price: Decimal::new(2_499, 2),
            original_price: None,
            category: "lighting".to_owned(),
            brand: "BOLES".to_owned(),
            model: "BL-220".to_owned(),
            stock_count: 10,
            warranty: "1 year".to_owned(),
            image: String::new(),
            images: Vec::new(),
            features: Vec::new(),
            specifications: std::collections::BTreeMap::new(),
            badges: Vec::new(),
        }
    }

    #[tokio::test]
    async fn test_cart_store_lifecycle() {
        let store = CartStore::new();
        let id = store.create().await;

        let cart = store.get(&id).await.expect("cart exists");
        assert!(cart.is_empty());

        let count = store
            .modify(&id, |cart| {
                cart.add(sample_product(), 2);
                cart.item_count()
            })
            .await
            .expect("cart exists");
        assert_eq!(count, 2);

        let cart = store.get(&id).await.expect("cart exists");
        assert_eq!(cart.total(), Decimal::new(4_998, 2));
    }

    #[tokio::test]
    async fn test_cart_store_unknown_id() {
        let store = CartStore::new();
        assert!(store.get(&CartId::generate()).await.is_none());
        assert!(
            store
                .modify(&CartId::generate(), ShoppingCart::clear)
                .await
                .is_none()
        );
    }

    #[tokio::test]
    async fn test_wallet_cache_round_trip() {
        let cache = WalletCache::new();
        let user_id = UserId::generate();
        assert!(cache.get(&user_id).await.is_none());

        let mut wallet = Wallet::new(user_id.clone());
        wallet
            .top_up(Decimal::new(5_000, 2))
            .expect("positive amount");
        cache.put(wallet).await;

        let cached = cache.get(&user_id).await.expect("cached");
        assert_eq!(cached.balance, Decimal::new(5_000, 2));
    }

    #[tokio::test]
    async fn test_user_lock_serializes_same_user_only() {
        let wait = std::time::Duration::from_millis(50);
        let cache = WalletCache::new();
        let ada = UserId::new("usr_ada");
        let ben = UserId::new("usr_ben");

        let guard = cache.user_lock(&ada).await;

        // A second acquisition for the same user queues behind the guard.
        let blocked = tokio::time::timeout(wait, cache.user_lock(&ada)).await;
        assert!(blocked.is_err());

        // Other users are unaffected.
        let other = tokio::time::timeout(wait, cache.user_lock(&ben)).await;
        assert!(other.is_ok());

        drop(guard);
        let reacquired = tokio::time::timeout(wait, cache.user_lock(&ada)).await;
        assert!(reacquired.is_ok());
    }
}
