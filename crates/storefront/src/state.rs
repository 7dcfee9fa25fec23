//! Application state shared across handlers.

use std::sync::Arc;

use calabash_store::{
    CartRepository, CatalogRepository, JsonStore, OrderRepository, PreferencesRepository,
};

use crate::config::StorefrontConfig;

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`; hands out per-collection repositories
/// over the shared JSON store.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    store: JsonStore,
}

impl AppState {
    /// Create a new application state from configuration.
    #[must_use]
    pub fn new(config: StorefrontConfig) -> Self {
        let store = JsonStore::open(&config.store_path);
        Self {
            inner: Arc::new(AppStateInner { config, store }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the shared JSON store.
    #[must_use]
    pub fn store(&self) -> &JsonStore {
        &self.inner.store
    }

    /// Repository over the product catalog.
    #[must_use]
    pub fn catalog(&self) -> CatalogRepository<'_> {
        CatalogRepository::new(self.store())
    }

    /// Repository over the shopping cart.
    #[must_use]
    pub fn cart(&self) -> CartRepository<'_> {
        CartRepository::new(self.store())
    }

    /// Repository over the order log.
    #[must_use]
    pub fn orders(&self) -> OrderRepository<'_> {
        OrderRepository::new(self.store())
    }

    /// Repository over UI preferences.
    #[must_use]
    pub fn prefs(&self) -> PreferencesRepository<'_> {
        PreferencesRepository::new(self.store())
    }
}
