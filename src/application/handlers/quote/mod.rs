//! Quote handlers - pricing and catalog resolution.

mod apply_catalog_rates;
mod compute_quote_totals;

pub use apply_catalog_rates::{
    ApplyCatalogRatesCommand, ApplyCatalogRatesHandler, ApplyCatalogRatesResult,
};
pub use compute_quote_totals::{
    ComputeQuoteTotalsHandler, ComputeQuoteTotalsQuery, ComputeQuoteTotalsResult,
};
