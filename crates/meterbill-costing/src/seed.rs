//! Default plans, accounts, and seeded in-memory stores

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use meterbill_common::PricePlan;
use rust_decimal::Decimal;
use tracing::info;

use crate::generator;
use crate::store::{InMemoryPlanDirectory, InMemoryReadingStore, ReadingStore};

pub const MOST_EVIL_PRICE_PLAN_ID: &str = "price-plan-0";
pub const RENEWABLES_PRICE_PLAN_ID: &str = "price-plan-1";
pub const STANDARD_PRICE_PLAN_ID: &str = "price-plan-2";

/// The three stock price plans
pub fn default_price_plans() -> Vec<PricePlan> {
    vec![
        PricePlan::new(MOST_EVIL_PRICE_PLAN_ID, "Dr Evil's Dark Energy", Decimal::TEN),
        PricePlan::new(RENEWABLES_PRICE_PLAN_ID, "The Green Eco", Decimal::TWO),
        PricePlan::new(STANDARD_PRICE_PLAN_ID, "Power for Everyone", Decimal::ONE),
    ]
}

/// Stock smart meters and their assigned plans
pub fn default_accounts() -> HashMap<String, String> {
    [
        ("smart-meter-0", MOST_EVIL_PRICE_PLAN_ID),
        ("smart-meter-1", RENEWABLES_PRICE_PLAN_ID),
        ("smart-meter-2", MOST_EVIL_PRICE_PLAN_ID),
        ("smart-meter-3", STANDARD_PRICE_PLAN_ID),
        ("smart-meter-4", RENEWABLES_PRICE_PLAN_ID),
    ]
    .into_iter()
    .map(|(meter, plan)| (meter.to_string(), plan.to_string()))
    .collect()
}

/// Stores populated with the stock plans and accounts, and
/// `readings_per_meter` generated readings ending at `end` for every meter.
pub fn seeded_stores(
    readings_per_meter: usize,
    end: DateTime<Utc>,
) -> (InMemoryReadingStore, InMemoryPlanDirectory) {
    let accounts = default_accounts();
    let store = InMemoryReadingStore::new();
    for meter_id in accounts.keys() {
        store.store_readings(meter_id, generator::generate(readings_per_meter, end));
    }

    info!(
        meters = accounts.len(),
        readings_per_meter, "Seeded reading store"
    );
    (store, InMemoryPlanDirectory::new(default_price_plans(), accounts))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::PlanDirectory;

    #[test]
    fn test_default_plans() {
        let plans = default_price_plans();
        assert_eq!(plans.len(), 3);
        assert_eq!(plans[0].unit_rate, Decimal::TEN);
        assert_eq!(plans[2].energy_supplier, "Power for Everyone");
    }

    #[test]
    fn test_default_accounts_resolve() {
        let plans = default_price_plans();
        for plan_id in default_accounts().values() {
            assert!(plans.iter().any(|p| &p.plan_name == plan_id));
        }
        assert_eq!(default_accounts()["smart-meter-3"], STANDARD_PRICE_PLAN_ID);
    }

    #[test]
    fn test_seeded_stores() {
        let (store, directory) = seeded_stores(20, Utc::now());
        assert_eq!(store.meter_count(), 5);
        assert_eq!(store.readings("smart-meter-4").unwrap().len(), 20);
        assert_eq!(
            directory.price_plan_id_for_meter("smart-meter-1").as_deref(),
            Some(RENEWABLES_PRICE_PLAN_ID)
        );
    }
}
