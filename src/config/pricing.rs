//! Pricing configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Pricing knobs consumed by the quote handlers.
#[derive(Debug, Clone, Deserialize)]
pub struct PricingConfig {
    /// VAT rate applied to the net price, in percent
    #[serde(default = "default_vat_rate_pct")]
    pub vat_rate_pct: f64,
}

impl PricingConfig {
    /// Validate pricing configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.vat_rate_pct.is_finite() || !(0.0..=100.0).contains(&self.vat_rate_pct) {
            return Err(ValidationError::InvalidVatRate);
        }
        Ok(())
    }
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            vat_rate_pct: default_vat_rate_pct(),
        }
    }
}

fn default_vat_rate_pct() -> f64 {
    19.0
}
