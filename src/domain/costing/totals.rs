//! Derived pricing records consumed by UI and export renderers.

use serde::Serialize;

use crate::domain::foundation::Money;

/// The full cascading price of one quote.
///
/// Immutable once computed; a fresh instance is produced on every
/// calculation call rather than patching fields of an old one. Renderers
/// treat it as a read-only value object.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteTotals {
    /// Labor + materials + equipment + logistics.
    pub direct_cost: Money,
    /// Supervision/administration tied to hours or flat amounts.
    pub indirect_cost: Money,
    pub cost_subtotal: Money,
    /// General overhead (GG) on the cost subtotal.
    pub overhead_amount: Money,
    pub base: Money,
    /// Risk reserve on the post-overhead base.
    pub contingency_amount: Money,
    pub total_cost: Money,
    /// Total cost plus target margin.
    pub net_price: Money,
    pub vat: Money,
    pub total_with_vat: Money,
    pub gross_margin: Money,
    /// Margin as a share of the net price, two decimals.
    pub margin_pct: f64,
    /// Margin as a share of the total cost, two decimals.
    pub markup_pct: f64,
}

impl QuoteTotals {
    /// An all-zero totals record, what an empty costing computes to.
    pub fn zero() -> Self {
        Self {
            direct_cost: Money::ZERO,
            indirect_cost: Money::ZERO,
            cost_subtotal: Money::ZERO,
            overhead_amount: Money::ZERO,
            base: Money::ZERO,
            contingency_amount: Money::ZERO,
            total_cost: Money::ZERO,
            net_price: Money::ZERO,
            vat: Money::ZERO,
            total_with_vat: Money::ZERO,
            gross_margin: Money::ZERO,
            margin_pct: 0.0,
            markup_pct: 0.0,
        }
    }
}

/// Per-category subtotals, shown next to the line items.
///
/// Every field is the same rounded figure the rollup chain consumed, so
/// the displayed breakdown always adds up to the displayed totals.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CostBreakdown {
    pub labor: Money,
    pub materials: Money,
    pub equipment: Money,
    pub logistics: Money,
    pub indirect_hourly: Money,
    pub indirect_fixed: Money,
    /// Sum of all named contingency percentages.
    pub contingency_pct_total: f64,
}

impl CostBreakdown {
    /// Direct cost implied by this breakdown.
    pub fn direct_cost(&self) -> Money {
        self.labor + self.materials + self.equipment + self.logistics
    }

    /// Indirect cost implied by this breakdown.
    pub fn indirect_cost(&self) -> Money {
        self.indirect_hourly + self.indirect_fixed
    }
}
