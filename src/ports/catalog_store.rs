//! Catalog store port.
//!
//! Defines the contract for the reference-rate catalog quotes draw
//! their default prices from. Implementations handle the actual
//! storage.
//!
//! # Design
//!
//! - **Keyed by item name**: a rate's key matches the labor role or
//!   material/equipment name it prices
//! - **Injected, never global**: handlers receive the store as a
//!   dependency so two callers can work against different catalogs

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, ErrorCode};

/// One reference rate of the price catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogRate {
    /// Labor role or item name this rate prices.
    pub key: String,
    /// Billing unit, e.g. "h", "m3", "día".
    pub unit: String,
    /// Whole currency units per unit.
    pub rate: f64,
}

impl CatalogRate {
    /// Creates a new catalog rate.
    pub fn new(key: impl Into<String>, unit: impl Into<String>, rate: f64) -> Self {
        Self {
            key: key.into(),
            unit: unit.into(),
            rate,
        }
    }
}

/// Repository port for catalog rate persistence.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// Find a rate by its key.
    ///
    /// Returns `None` if no rate is cataloged under the key.
    async fn find_by_key(&self, key: &str) -> Result<Option<CatalogRate>, CatalogError>;

    /// Save a rate, replacing any existing rate under the same key.
    ///
    /// # Errors
    ///
    /// - `InvalidRate` for a non-finite rate or empty key
    /// - `Storage` on persistence failure
    async fn save(&self, rate: CatalogRate) -> Result<(), CatalogError>;

    /// List all cataloged rates ordered by key.
    async fn list_all(&self) -> Result<Vec<CatalogRate>, CatalogError>;
}

/// Errors that can occur during catalog operations
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Invalid rate: {0}")]
    InvalidRate(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl From<CatalogError> for DomainError {
    fn from(err: CatalogError) -> Self {
        let code = match &err {
            CatalogError::InvalidRate(_) => ErrorCode::ValidationFailed,
            CatalogError::Storage(_) => ErrorCode::StorageError,
        };
        DomainError::new(code, err.to_string())
    }
}
