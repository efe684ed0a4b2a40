//! Cost line items - the raw rows a quote is built from.
//!
//! Each item type knows its own subtotal, rounded to a whole currency
//! unit at the item level. The rollup engine sums these already-rounded
//! subtotals, so the totals always reconcile with the line items a user
//! sees.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Money, ValidationError};

fn ensure_finite(field: &str, value: f64) -> Result<(), ValidationError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ValidationError::non_finite(field))
    }
}

/// One labor row: a role hired for a number of hours.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaborItem {
    pub role: String,
    pub hours: f64,
    pub hourly_rate: f64,
    /// Surcharge on the base rate (night shift, altitude, hazard), in percent.
    #[serde(default)]
    pub surcharge_pct: f64,
}

impl LaborItem {
    /// Subtotal: hours × rate × (1 + surcharge/100), rounded.
    pub fn subtotal(&self) -> Money {
        Money::rounded(self.hours * self.hourly_rate * (1.0 + self.surcharge_pct / 100.0))
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        ensure_finite("labor.hours", self.hours)?;
        ensure_finite("labor.hourly_rate", self.hourly_rate)?;
        ensure_finite("labor.surcharge_pct", self.surcharge_pct)
    }
}

/// One material row, with a waste allowance on the purchased quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialItem {
    pub name: String,
    pub quantity: f64,
    pub unit_cost: f64,
    #[serde(default)]
    pub waste_pct: f64,
}

impl MaterialItem {
    /// Subtotal: quantity × (1 + waste/100) × unit cost, rounded.
    pub fn subtotal(&self) -> Money {
        Money::rounded(self.quantity * (1.0 + self.waste_pct / 100.0) * self.unit_cost)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        ensure_finite("material.quantity", self.quantity)?;
        ensure_finite("material.unit_cost", self.unit_cost)?;
        ensure_finite("material.waste_pct", self.waste_pct)
    }
}

/// One equipment row, billed per unit of use (day, hour-machine, lump sum).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquipmentItem {
    pub name: String,
    pub unit: String,
    pub quantity: f64,
    pub rate: f64,
}

impl EquipmentItem {
    /// Subtotal: quantity × rate, rounded.
    pub fn subtotal(&self) -> Money {
        Money::rounded(self.quantity * self.rate)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        ensure_finite("equipment.quantity", self.quantity)?;
        ensure_finite("equipment.rate", self.rate)
    }
}

/// Logistics costing, one of two mutually exclusive modes.
///
/// Modelled as a tagged union so switching modes cannot leave stale
/// fields from the other mode behind.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "camelCase")]
pub enum LogisticsPlan {
    /// Quote without a logistics component.
    #[default]
    None,

    /// Costed by distance driven.
    Distance {
        km: f64,
        rate_per_km: f64,
        tolls: f64,
        driver_hours: f64,
        driver_rate: f64,
    },

    /// Costed by crew days on site.
    PerDiem {
        daily_allowance: f64,
        days: f64,
        accommodation: f64,
        fixed_mobilization: f64,
    },
}

impl LogisticsPlan {
    /// Subtotal for the active mode, rounded. `None` costs nothing.
    pub fn subtotal(&self) -> Money {
        match self {
            LogisticsPlan::None => Money::ZERO,
            LogisticsPlan::Distance {
                km,
                rate_per_km,
                tolls,
                driver_hours,
                driver_rate,
            } => Money::rounded(km * rate_per_km + tolls + driver_hours * driver_rate),
            LogisticsPlan::PerDiem {
                daily_allowance,
                days,
                accommodation,
                fixed_mobilization,
            } => Money::rounded(daily_allowance * days + accommodation + fixed_mobilization),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        match self {
            LogisticsPlan::None => Ok(()),
            LogisticsPlan::Distance {
                km,
                rate_per_km,
                tolls,
                driver_hours,
                driver_rate,
            } => {
                ensure_finite("logistics.km", *km)?;
                ensure_finite("logistics.rate_per_km", *rate_per_km)?;
                ensure_finite("logistics.tolls", *tolls)?;
                ensure_finite("logistics.driver_hours", *driver_hours)?;
                ensure_finite("logistics.driver_rate", *driver_rate)
            }
            LogisticsPlan::PerDiem {
                daily_allowance,
                days,
                accommodation,
                fixed_mobilization,
            } => {
                ensure_finite("logistics.daily_allowance", *daily_allowance)?;
                ensure_finite("logistics.days", *days)?;
                ensure_finite("logistics.accommodation", *accommodation)?;
                ensure_finite("logistics.fixed_mobilization", *fixed_mobilization)
            }
        }
    }
}

/// How an indirect item is charged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum IndirectCharge {
    /// Supervision or administration billed by the hour.
    Hourly { hours: f64, hourly_rate: f64 },
    /// A flat amount (permits, insurance, site office).
    Fixed { amount: f64 },
}

/// One indirect-cost row, kept separate from general overhead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndirectItem {
    pub description: String,
    pub charge: IndirectCharge,
}

impl IndirectItem {
    /// Subtotal per charge kind, rounded.
    pub fn subtotal(&self) -> Money {
        match &self.charge {
            IndirectCharge::Hourly { hours, hourly_rate } => Money::rounded(hours * hourly_rate),
            IndirectCharge::Fixed { amount } => Money::rounded(*amount),
        }
    }

    /// True for hourly-charged items; used by the category breakdown.
    pub fn is_hourly(&self) -> bool {
        matches!(self.charge, IndirectCharge::Hourly { .. })
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        match &self.charge {
            IndirectCharge::Hourly { hours, hourly_rate } => {
                ensure_finite("indirect.hours", *hours)?;
                ensure_finite("indirect.hourly_rate", *hourly_rate)
            }
            IndirectCharge::Fixed { amount } => ensure_finite("indirect.amount", *amount),
        }
    }
}

/// One named contingency percentage; all rows are summed into a single
/// percentage applied to the post-overhead base.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContingencyItem {
    pub name: String,
    pub pct: f64,
}

impl ContingencyItem {
    pub fn validate(&self) -> Result<(), ValidationError> {
        ensure_finite("contingency.pct", self.pct)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labor_subtotal_applies_surcharge() {
        let item = LaborItem {
            role: "Soldador".to_string(),
            hours: 40.0,
            hourly_rate: 15000.0,
            surcharge_pct: 0.0,
        };
        assert_eq!(item.subtotal().value(), 600000);

        let night_shift = LaborItem {
            surcharge_pct: 25.0,
            ..item
        };
        assert_eq!(night_shift.subtotal().value(), 750000);
    }

    #[test]
    fn labor_subtotal_rounds_fractional_hours() {
        let item = LaborItem {
            role: "Ayudante".to_string(),
            hours: 7.5,
            hourly_rate: 8333.0,
            surcharge_pct: 0.0,
        };
        // 7.5 × 8333 = 62497.5, rounds up
        assert_eq!(item.subtotal().value(), 62498);
    }

    #[test]
    fn material_subtotal_applies_waste() {
        let item = MaterialItem {
            name: "Hormigón H30".to_string(),
            quantity: 12.0,
            unit_cost: 95000.0,
            waste_pct: 5.0,
        };
        // 12 × 1.05 × 95000 = 1197000
        assert_eq!(item.subtotal().value(), 1197000);
    }

    #[test]
    fn equipment_subtotal_is_quantity_times_rate() {
        let item = EquipmentItem {
            name: "Retroexcavadora".to_string(),
            unit: "día".to_string(),
            quantity: 3.0,
            rate: 180000.0,
        };
        assert_eq!(item.subtotal().value(), 540000);
    }

    #[test]
    fn logistics_none_costs_nothing() {
        assert_eq!(LogisticsPlan::None.subtotal(), Money::ZERO);
        assert_eq!(LogisticsPlan::default(), LogisticsPlan::None);
    }

    #[test]
    fn logistics_distance_mode_sums_all_components() {
        let plan = LogisticsPlan::Distance {
            km: 320.0,
            rate_per_km: 450.0,
            tolls: 12400.0,
            driver_hours: 8.0,
            driver_rate: 6000.0,
        };
        // 144000 + 12400 + 48000
        assert_eq!(plan.subtotal().value(), 204400);
    }

    #[test]
    fn logistics_per_diem_mode_sums_all_components() {
        let plan = LogisticsPlan::PerDiem {
            daily_allowance: 25000.0,
            days: 10.0,
            accommodation: 180000.0,
            fixed_mobilization: 60000.0,
        };
        assert_eq!(plan.subtotal().value(), 490000);
    }

    #[test]
    fn logistics_serializes_with_mode_tag() {
        let plan = LogisticsPlan::PerDiem {
            daily_allowance: 25000.0,
            days: 10.0,
            accommodation: 0.0,
            fixed_mobilization: 0.0,
        };
        let json = serde_json::to_string(&plan).unwrap();
        assert!(json.contains("\"mode\":\"perDiem\""));

        let distance = LogisticsPlan::Distance {
            km: 1.0,
            rate_per_km: 1.0,
            tolls: 0.0,
            driver_hours: 0.0,
            driver_rate: 0.0,
        };
        let json = serde_json::to_string(&distance).unwrap();
        assert!(json.contains("\"mode\":\"distance\""));
    }

    #[test]
    fn indirect_hourly_and_fixed_subtotals() {
        let hourly = IndirectItem {
            description: "Supervisión".to_string(),
            charge: IndirectCharge::Hourly {
                hours: 20.0,
                hourly_rate: 18000.0,
            },
        };
        assert_eq!(hourly.subtotal().value(), 360000);
        assert!(hourly.is_hourly());

        let fixed = IndirectItem {
            description: "Permisos municipales".to_string(),
            charge: IndirectCharge::Fixed { amount: 150000.0 },
        };
        assert_eq!(fixed.subtotal().value(), 150000);
        assert!(!fixed.is_hourly());
    }

    #[test]
    fn negative_credit_items_are_not_clamped() {
        let credit = MaterialItem {
            name: "Devolución acero sobrante".to_string(),
            quantity: -2.0,
            unit_cost: 45000.0,
            waste_pct: 0.0,
        };
        assert_eq!(credit.subtotal().value(), -90000);
    }

    #[test]
    fn validate_rejects_non_finite_fields() {
        let item = LaborItem {
            role: "Capataz".to_string(),
            hours: f64::NAN,
            hourly_rate: 10000.0,
            surcharge_pct: 0.0,
        };
        assert!(item.validate().is_err());

        let plan = LogisticsPlan::Distance {
            km: f64::INFINITY,
            rate_per_km: 450.0,
            tolls: 0.0,
            driver_hours: 0.0,
            driver_rate: 0.0,
        };
        assert!(plan.validate().is_err());
    }
}
