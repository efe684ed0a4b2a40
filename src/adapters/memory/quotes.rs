//! In-memory quote reader implementation.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::RwLock;

use crate::domain::costing::CostInput;
use crate::domain::foundation::QuoteId;
use crate::ports::{QuoteError, QuoteReader};

/// In-memory [`QuoteReader`] backed by a `RwLock<HashMap>`.
///
/// The port is read-only; seeding happens through [`Self::insert`].
///
/// # Panics
///
/// Methods panic if the internal lock is poisoned.
pub struct InMemoryQuoteReader {
    quotes: RwLock<HashMap<QuoteId, CostInput>>,
}

impl InMemoryQuoteReader {
    /// Creates an empty reader.
    pub fn new() -> Self {
        Self {
            quotes: RwLock::new(HashMap::new()),
        }
    }

    /// Stores the cost input for a quote, replacing any previous one.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub fn insert(&self, quote_id: QuoteId, input: CostInput) {
        self.quotes
            .write()
            .expect("InMemoryQuoteReader: quotes write lock poisoned")
            .insert(quote_id, input);
    }
}

impl Default for InMemoryQuoteReader {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl QuoteReader for InMemoryQuoteReader {
    async fn cost_input(&self, quote_id: &QuoteId) -> Result<CostInput, QuoteError> {
        let quotes = self
            .quotes
            .read()
            .expect("InMemoryQuoteReader: quotes lock poisoned");
        quotes
            .get(quote_id)
            .cloned()
            .ok_or(QuoteError::NotFound(*quote_id))
    }
}
