//! Cost rollup engine - deterministic cascading quote pricing.

use super::input::CostInput;
use super::totals::{CostBreakdown, QuoteTotals};
use crate::domain::foundation::{round2, round_whole, Money};

/// Statutory VAT rate applied to the net price, in percent.
pub const DEFAULT_VAT_RATE_PCT: f64 = 19.0;

/// Pure rollup of a [`CostInput`] into a [`QuoteTotals`].
///
/// The cascade rounds to whole currency units at every intermediate
/// step, never only at the end, so each stage matches the line-item
/// subtotals a user sees. Recomputing from the same input is always
/// bit-identical.
pub struct CostEngine;

impl CostEngine {
    /// Computes the full price cascade with the statutory VAT rate.
    pub fn compute(input: &CostInput) -> QuoteTotals {
        Self::compute_with_vat(input, DEFAULT_VAT_RATE_PCT)
    }

    /// Computes the full price cascade with an explicit VAT rate.
    ///
    /// Total function: it never fails. Empty categories cost zero,
    /// negative (credit) items pass through unclamped.
    ///
    /// # Edge Cases
    /// - All-empty input: every field zero, both percentages 0
    /// - Zero or negative net price: `margin_pct` is 0, never NaN
    /// - Zero or negative total cost: `markup_pct` is 0, never infinite
    pub fn compute_with_vat(input: &CostInput, vat_rate_pct: f64) -> QuoteTotals {
        let breakdown = Self::breakdown(input);

        let direct_cost = breakdown.direct_cost();
        let indirect_cost = breakdown.indirect_cost();
        let cost_subtotal = direct_cost + indirect_cost;

        let overhead_amount = Money::rounded(cost_subtotal.as_f64() * input.overhead_pct / 100.0);
        let base = cost_subtotal + overhead_amount;

        let contingency_amount =
            Money::rounded(base.as_f64() * breakdown.contingency_pct_total / 100.0);
        let total_cost = base + contingency_amount;

        let net_price = Money::rounded(total_cost.as_f64() * (1.0 + input.utility_pct / 100.0));
        let vat = Money::rounded(net_price.as_f64() * vat_rate_pct / 100.0);
        let total_with_vat = net_price + vat;

        let gross_margin = net_price - total_cost;
        let margin_pct = if net_price.value() > 0 {
            round2(gross_margin.as_f64() / net_price.as_f64() * 100.0)
        } else {
            0.0
        };
        let markup_pct = if total_cost.value() > 0 {
            round2((net_price.as_f64() / total_cost.as_f64() - 1.0) * 100.0)
        } else {
            0.0
        };

        QuoteTotals {
            direct_cost,
            indirect_cost,
            cost_subtotal,
            overhead_amount,
            base,
            contingency_amount,
            total_cost,
            net_price,
            vat,
            total_with_vat,
            gross_margin,
            margin_pct,
            markup_pct,
        }
    }

    /// Sums each category's already-rounded line subtotals.
    pub fn breakdown(input: &CostInput) -> CostBreakdown {
        let labor: Money = input.labor_items.iter().map(|i| i.subtotal()).sum();
        let materials: Money = input.material_items.iter().map(|i| i.subtotal()).sum();
        let equipment: Money = input.equipment_items.iter().map(|i| i.subtotal()).sum();
        let logistics = input.logistics.subtotal();

        let indirect_hourly: Money = input
            .indirect_items
            .iter()
            .filter(|i| i.is_hourly())
            .map(|i| i.subtotal())
            .sum();
        let indirect_fixed: Money = input
            .indirect_items
            .iter()
            .filter(|i| !i.is_hourly())
            .map(|i| i.subtotal())
            .sum();

        CostBreakdown {
            labor,
            materials,
            equipment,
            logistics,
            indirect_hourly,
            indirect_fixed,
            contingency_pct_total: input.contingency_pct_total(),
        }
    }

    /// Converts working days into billable hours, rounded to whole hours.
    ///
    /// `efficiency` is a 0–1 factor for expected productive time.
    pub fn labor_hours_from_days(days: f64, hours_per_day: f64, efficiency: f64) -> f64 {
        round_whole(days * hours_per_day * efficiency)
    }

    /// Material subtotal for a quantity with a waste allowance.
    pub fn material_subtotal(quantity: f64, unit_cost: f64, waste_pct: f64) -> Money {
        Money::rounded(quantity * (1.0 + waste_pct / 100.0) * unit_cost)
    }
}
