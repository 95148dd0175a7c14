//! Application state shared across handlers.

use orders_core::{OrderStore, SiteConfig};
use parking_lot::RwLock;
use std::sync::Arc;

/// The session's order store plus startup configuration.
///
/// The lock is `parking_lot` rather than `tokio::sync` because it is never held across an
/// `.await`, and it does not poison if a handler panics.
#[derive(Clone, Debug)]
pub struct AppState {
    store: Arc<RwLock<OrderStore>>,
    config: Arc<SiteConfig>,
}

impl AppState {
    pub fn new(store: OrderStore, config: SiteConfig) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
            config: Arc::new(config),
        }
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    /// Run `f` with shared access to the store.
    pub fn read<R>(&self, f: impl FnOnce(&OrderStore) -> R) -> R {
        f(&self.store.read())
    }

    /// Run `f` with exclusive access to the store.
    pub fn write<R>(&self, f: impl FnOnce(&mut OrderStore) -> R) -> R {
        f(&mut self.store.write())
    }
}
