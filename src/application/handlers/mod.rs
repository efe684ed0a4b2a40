//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod quote;
pub mod schedule;

pub use quote::{
    ApplyCatalogRatesCommand, ApplyCatalogRatesHandler, ApplyCatalogRatesResult,
    ComputeQuoteTotalsHandler, ComputeQuoteTotalsQuery, ComputeQuoteTotalsResult,
};
pub use schedule::{
    CurveResolution, GeneratePaymentReportHandler, GeneratePaymentReportQuery,
    GeneratePaymentReportResult, GetProgressCurveHandler, GetProgressCurveQuery,
    GetProgressCurveResult, DEFAULT_WEEKLY_THRESHOLD_DAYS,
};
