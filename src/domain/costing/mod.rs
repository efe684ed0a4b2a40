//! Quotation costing: line items, cost input, and the rollup engine.
//!
//! Everything here is pure and synchronous. The engine consumes a
//! [`CostInput`] snapshot and produces a [`QuoteTotals`] read model;
//! persistence and transport live behind ports, not in this module.

mod engine;
mod input;
mod line_items;
mod totals;

pub use engine::{CostEngine, DEFAULT_VAT_RATE_PCT};
pub use input::CostInput;
pub use line_items::{
    ContingencyItem, EquipmentItem, IndirectCharge, IndirectItem, LaborItem, LogisticsPlan,
    MaterialItem,
};
pub use totals::{CostBreakdown, QuoteTotals};
