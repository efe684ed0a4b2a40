//! CostInput - the raw record a quote's totals are computed from.

use serde::{Deserialize, Serialize};

use super::line_items::{
    ContingencyItem, EquipmentItem, IndirectItem, LaborItem, LogisticsPlan, MaterialItem,
};
use crate::domain::foundation::ValidationError;

/// All cost categories of one quote/costing, plus the pricing knobs.
///
/// Every collection defaults to empty and every percentage to zero, so a
/// record with categories missing is a valid (all-zero) costing. The
/// engines never mutate a `CostInput`; totals are recomputed wholesale
/// from it on every call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CostInput {
    #[serde(default)]
    pub labor_items: Vec<LaborItem>,

    #[serde(default)]
    pub material_items: Vec<MaterialItem>,

    #[serde(default)]
    pub equipment_items: Vec<EquipmentItem>,

    #[serde(default)]
    pub logistics: LogisticsPlan,

    #[serde(default)]
    pub indirect_items: Vec<IndirectItem>,

    /// Named contingency reserves, summed into one percentage.
    #[serde(default)]
    pub contingency_items: Vec<ContingencyItem>,

    /// General overhead (GG) applied to the cost subtotal, in percent.
    #[serde(default)]
    pub overhead_pct: f64,

    /// Target margin applied to total cost to derive the net price, in percent.
    #[serde(default)]
    pub utility_pct: f64,
}

impl CostInput {
    /// Sum of all contingency percentages.
    pub fn contingency_pct_total(&self) -> f64 {
        self.contingency_items.iter().map(|c| c.pct).sum()
    }

    /// Validates every numeric field is finite.
    ///
    /// The rollup engine itself never fails; this is the fail-fast
    /// boundary for records arriving from the input supplier.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for item in &self.labor_items {
            item.validate()?;
        }
        for item in &self.material_items {
            item.validate()?;
        }
        for item in &self.equipment_items {
            item.validate()?;
        }
        self.logistics.validate()?;
        for item in &self.indirect_items {
            item.validate()?;
        }
        for item in &self.contingency_items {
            item.validate()?;
        }
        if !self.overhead_pct.is_finite() {
            return Err(ValidationError::non_finite("overhead_pct"));
        }
        if !self.utility_pct.is_finite() {
            return Err(ValidationError::non_finite("utility_pct"));
        }
        Ok(())
    }
}
