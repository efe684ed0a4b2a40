//! ComputeQuoteTotalsHandler - Query handler for pricing a quote.
//!
//! Loads the quote's cost input through the reader port, validates it
//! at the boundary, and runs the pure rollup engine.

use std::sync::Arc;

use tracing::debug;

use crate::domain::costing::{CostEngine, QuoteTotals, DEFAULT_VAT_RATE_PCT};
use crate::domain::foundation::{DomainError, QuoteId};
use crate::ports::QuoteReader;

/// Query to compute the full price cascade of a quote.
#[derive(Debug, Clone)]
pub struct ComputeQuoteTotalsQuery {
    /// The quote to price.
    pub quote_id: QuoteId,
}

/// Result of a successful totals query.
pub type ComputeQuoteTotalsResult = QuoteTotals;

/// Handler for computing quote totals.
pub struct ComputeQuoteTotalsHandler {
    quote_reader: Arc<dyn QuoteReader>,
    vat_rate_pct: f64,
}

impl ComputeQuoteTotalsHandler {
    /// Creates a handler using the statutory VAT rate.
    pub fn new(quote_reader: Arc<dyn QuoteReader>) -> Self {
        Self::with_vat_rate(quote_reader, DEFAULT_VAT_RATE_PCT)
    }

    /// Creates a handler with an explicit VAT rate, e.g. from configuration.
    pub fn with_vat_rate(quote_reader: Arc<dyn QuoteReader>, vat_rate_pct: f64) -> Self {
        Self {
            quote_reader,
            vat_rate_pct,
        }
    }

    pub async fn handle(
        &self,
        query: ComputeQuoteTotalsQuery,
    ) -> Result<ComputeQuoteTotalsResult, DomainError> {
        let input = self.quote_reader.cost_input(&query.quote_id).await?;

        // Fail fast on NaN or out-of-range knobs before any arithmetic.
        input.validate()?;

        let totals = CostEngine::compute_with_vat(&input, self.vat_rate_pct);

        debug!(
            quote_id = %query.quote_id,
            net_price = %totals.net_price,
            total_with_vat = %totals.total_with_vat,
            "Computed quote totals"
        );

        Ok(totals)
    }
}
