//! Shared application state for the storefront.

use std::sync::Arc;

use crate::config::StorefrontConfig;
use crate::db::Db;
use crate::services::email::EmailService;
use crate::services::exchange::ExchangeRates;
use crate::stores::{CartStore, WalletCache};

/// Shared application state, cheap to clone.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    db: Db,
    email: EmailService,
    exchange: ExchangeRates,
    carts: CartStore,
    wallets: WalletCache,
}

impl AppState {
    /// Build the full service graph from configuration.
    #[must_use]
    pub fn new(config: StorefrontConfig) -> Self {
        let db = Db::new(config.supabase.as_ref());
        let email = EmailService::new(config.resend.clone());
        let exchange = ExchangeRates::new();

        Self {
            inner: Arc::new(AppStateInner {
                db,
                email,
                exchange,
                carts: CartStore::new(),
                wallets: WalletCache::new(),
            }),
        }
    }

    #[must_use]
    pub fn db(&self) -> &Db {
        &self.inner.db
    }

    #[must_use]
    pub fn email(&self) -> &EmailService {
        &self.inner.email
    }

    #[must_use]
    pub fn exchange(&self) -> &ExchangeRates {
        &self.inner.exchange
    }

    #[must_use]
    pub fn carts(&self) -> &CartStore {
        &self.inner.carts
    }

    #[must_use]
    pub fn wallets(&self) -> &WalletCache {
        &self.inner.wallets
    }
}
