//! ApplyCatalogRatesHandler - Fills unpriced line items from the catalog.
//!
//! Estimators draft quotes with rates left at zero when the price
//! should come from the reference catalog. This handler resolves those
//! rates through the [`CatalogStore`] port: labor items look up their
//! role, material and equipment items look up their name. Already
//! priced items are never touched.

use std::sync::Arc;

use tracing::debug;

use crate::domain::costing::CostInput;
use crate::domain::foundation::DomainError;
use crate::ports::CatalogStore;

/// Command to resolve catalog rates onto a cost input.
#[derive(Debug, Clone)]
pub struct ApplyCatalogRatesCommand {
    /// The cost input to price, typically fresh from a quote draft.
    pub input: CostInput,
}

/// Outcome of catalog resolution.
#[derive(Debug, Clone)]
pub struct ApplyCatalogRatesResult {
    /// The input with every resolvable rate filled in.
    pub input: CostInput,
    /// Catalog keys that were applied, one entry per filled line item.
    pub applied: Vec<String>,
    /// Keys of unpriced line items the catalog does not know.
    pub unresolved: Vec<String>,
}

/// Handler for resolving catalog rates onto quote drafts.
pub struct ApplyCatalogRatesHandler {
    catalog: Arc<dyn CatalogStore>,
}

impl ApplyCatalogRatesHandler {
    pub fn new(catalog: Arc<dyn CatalogStore>) -> Self {
        Self { catalog }
    }

    pub async fn handle(
        &self,
        command: ApplyCatalogRatesCommand,
    ) -> Result<ApplyCatalogRatesResult, DomainError> {
        let mut input = command.input;
        let mut applied = Vec::new();
        let mut unresolved = Vec::new();

        for item in &mut input.labor_items {
            if item.hourly_rate != 0.0 {
                continue;
            }
            match self.catalog.find_by_key(&item.role).await? {
                Some(rate) => {
                    item.hourly_rate = rate.rate;
                    applied.push(item.role.clone());
                }
                None => unresolved.push(item.role.clone()),
            }
        }

        for item in &mut input.material_items {
            if item.unit_cost != 0.0 {
                continue;
            }
            match self.catalog.find_by_key(&item.name).await? {
                Some(rate) => {
                    item.unit_cost = rate.rate;
                    applied.push(item.name.clone());
                }
                None => unresolved.push(item.name.clone()),
            }
        }

        for item in &mut input.equipment_items {
            if item.rate != 0.0 {
                continue;
            }
            match self.catalog.find_by_key(&item.name).await? {
                Some(rate) => {
                    item.rate = rate.rate;
                    applied.push(item.name.clone());
                }
                None => unresolved.push(item.name.clone()),
            }
        }

        debug!(
            applied = applied.len(),
            unresolved = unresolved.len(),
            "Applied catalog rates"
        );

        Ok(ApplyCatalogRatesResult {
            input,
            applied,
            unresolved,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryCatalogStore;
    use crate::domain::costing::{EquipmentItem, LaborItem, MaterialItem};
    use crate::ports::CatalogRate;

    fn catalog() -> Arc<InMemoryCatalogStore> {
        Arc::new(InMemoryCatalogStore::with_rates(vec![
            CatalogRate::new("Maestro", "h", 15000.0),
            CatalogRate::new("Cemento", "saco", 5990.0),
            CatalogRate::new("Retroexcavadora", "día", 280000.0),
        ]))
    }

    fn draft_input() -> CostInput {
        CostInput {
            labor_items: vec![LaborItem {
                role: "Maestro".to_string(),
                hours: 40.0,
                hourly_rate: 0.0,
                surcharge_pct: 0.0,
            }],
            material_items: vec![MaterialItem {
                name: "Cemento".to_string(),
                quantity: 30.0,
                unit_cost: 0.0,
                waste_pct: 5.0,
            }],
            equipment_items: vec![EquipmentItem {
                name: "Retroexcavadora".to_string(),
                unit: "día".to_string(),
                quantity: 2.0,
                rate: 0.0,
            }],
            ..CostInput::default()
        }
    }

    #[tokio::test]
    async fn fills_unpriced_items_from_catalog() {
        let handler = ApplyCatalogRatesHandler::new(catalog());
        let result = handler
            .handle(ApplyCatalogRatesCommand {
                input: draft_input(),
            })
            .await
            .unwrap();

        assert_eq!(result.input.labor_items[0].hourly_rate, 15000.0);
        assert_eq!(result.input.material_items[0].unit_cost, 5990.0);
        assert_eq!(result.input.equipment_items[0].rate, 280000.0);
        assert_eq!(result.applied.len(), 3);
        assert!(result.unresolved.is_empty());
    }

    #[tokio::test]
    async fn priced_items_are_left_untouched() {
        let mut input = draft_input();
        input.labor_items[0].hourly_rate = 17500.0;

        let handler = ApplyCatalogRatesHandler::new(catalog());
        let result = handler
            .handle(ApplyCatalogRatesCommand { input })
            .await
            .unwrap();

        assert_eq!(result.input.labor_items[0].hourly_rate, 17500.0);
        assert_eq!(result.applied.len(), 2);
    }

    #[tokio::test]
    async fn unknown_keys_are_reported_unresolved() {
        let mut input = draft_input();
        input.labor_items[0].role = "Gásfiter".to_string();

        let handler = ApplyCatalogRatesHandler::new(catalog());
        let result = handler
            .handle(ApplyCatalogRatesCommand { input })
            .await
            .unwrap();

        assert_eq!(result.unresolved, vec!["Gásfiter".to_string()]);
        assert_eq!(result.input.labor_items[0].hourly_rate, 0.0);
    }

    #[tokio::test]
    async fn empty_input_resolves_to_empty_result() {
        let handler = ApplyCatalogRatesHandler::new(catalog());
        let result = handler
            .handle(ApplyCatalogRatesCommand {
                input: CostInput::default(),
            })
            .await
            .unwrap();

        assert!(result.applied.is_empty());
        assert!(result.unresolved.is_empty());
        assert_eq!(result.input, CostInput::default());
    }
}
