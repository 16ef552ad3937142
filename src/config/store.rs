//! Shared settings store.
//!
//! Every consumer reads the current value on demand instead of caching it, so
//! a reload between two failure events is picked up by the second one.

use std::sync::Arc;

use arc_swap::ArcSwap;

use crate::config::schema::BailOutConfig;

/// Cheaply clonable handle to the current configuration.
#[derive(Clone)]
pub struct ConfigStore {
    inner: Arc<ArcSwap<BailOutConfig>>,
}

impl ConfigStore {
    pub fn new(config: BailOutConfig) -> Self {
        Self {
            inner: Arc::new(ArcSwap::from_pointee(config)),
        }
    }

    /// Snapshot of the current configuration.
    pub fn current(&self) -> Arc<BailOutConfig> {
        self.inner.load_full()
    }

    /// Replace the configuration.
    pub fn replace(&self, config: BailOutConfig) {
        self.inner.store(Arc::new(config));
    }

    /// Apply a single change on top of the current configuration.
    pub fn update(&self, f: impl Fn(&mut BailOutConfig)) {
        self.inner.rcu(|current| {
            let mut next = BailOutConfig::clone(current);
            f(&mut next);
            next
        });
    }
}

impl Default for ConfigStore {
    fn default() -> Self {
        Self::new(BailOutConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_is_visible_to_clones() {
        let store = ConfigStore::default();
        let other = store.clone();

        store.update(|c| c.fail_effect_duration_secs = 7.0);
        assert_eq!(other.current().fail_effect_duration_secs, 7.0);
    }
}
