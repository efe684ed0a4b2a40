//! In-memory catalog store implementation.
//!
//! Backs the rate catalog with a plain map. Suitable for tests and for
//! embedding callers that load their catalog from elsewhere at startup.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::RwLock;

use crate::ports::{CatalogError, CatalogRate, CatalogStore};

/// In-memory [`CatalogStore`] backed by a `RwLock<HashMap>`.
///
/// # Panics
///
/// Methods panic if the internal lock is poisoned, which only happens
/// after another thread panicked mid-operation.
pub struct InMemoryCatalogStore {
    rates: RwLock<HashMap<String, CatalogRate>>,
}

impl InMemoryCatalogStore {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self {
            rates: RwLock::new(HashMap::new()),
        }
    }

    /// Creates a catalog pre-seeded with rates.
    ///
    /// Later duplicates of a key replace earlier ones.
    pub fn with_rates(rates: Vec<CatalogRate>) -> Self {
        let map = rates.into_iter().map(|r| (r.key.clone(), r)).collect();
        Self {
            rates: RwLock::new(map),
        }
    }

    /// Returns the number of cataloged rates.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub fn rate_count(&self) -> usize {
        self.rates
            .read()
            .expect("InMemoryCatalogStore: rates lock poisoned")
            .len()
    }
}

impl Default for InMemoryCatalogStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CatalogStore for InMemoryCatalogStore {
    async fn find_by_key(&self, key: &str) -> Result<Option<CatalogRate>, CatalogError> {
        let rates = self
            .rates
            .read()
            .expect("InMemoryCatalogStore: rates lock poisoned");
        Ok(rates.get(key).cloned())
    }

    async fn save(&self, rate: CatalogRate) -> Result<(), CatalogError> {
        if rate.key.trim().is_empty() {
            return Err(CatalogError::InvalidRate("key cannot be empty".to_string()));
        }
        if !rate.rate.is_finite() {
            return Err(CatalogError::InvalidRate(format!(
                "rate for '{}' is not finite",
                rate.key
            )));
        }

        self.rates
            .write()
            .expect("InMemoryCatalogStore: rates write lock poisoned")
            .insert(rate.key.clone(), rate);
        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<CatalogRate>, CatalogError> {
        let mut all: Vec<CatalogRate> = self
            .rates
            .read()
            .expect("InMemoryCatalogStore: rates lock poisoned")
            .values()
            .cloned()
            .collect();
        all.sort_by(|a, b| a.key.cmp(&b.key));
        Ok(all)
    }
}
