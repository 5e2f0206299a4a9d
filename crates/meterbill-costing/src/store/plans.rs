//! Price plan directory
//!
//! Resolves which plan a meter is on and what a plan costs.

use std::collections::HashMap;

use dashmap::DashMap;
use meterbill_common::{PricePlan, Result};
use parking_lot::RwLock;
use tracing::debug;

/// Lookup of plan assignments and plan definitions
pub trait PlanDirectory: Send + Sync {
    /// Plan id assigned to a meter, if any
    fn price_plan_id_for_meter(&self, meter_id: &str) -> Option<String>;

    /// Plan with the given id, if known
    fn find_plan(&self, plan_id: &str) -> Option<PricePlan>;

    /// All known plans
    fn price_plans(&self) -> Vec<PricePlan>;
}

/// In-memory plan directory
#[derive(Debug, Default)]
pub struct InMemoryPlanDirectory {
    plans: RwLock<Vec<PricePlan>>,
    accounts: DashMap<String, String>,
}

impl InMemoryPlanDirectory {
    pub fn new(plans: Vec<PricePlan>, accounts: HashMap<String, String>) -> Self {
        Self {
            plans: RwLock::new(plans),
            accounts: accounts.into_iter().collect(),
        }
    }

    /// Build a directory from a JSON array of plans, with no accounts
    pub fn from_plans_json(json: &str) -> Result<Self> {
        let plans: Vec<PricePlan> = serde_json::from_str(json)?;
        Ok(Self::new(plans, HashMap::new()))
    }

    /// Assign a meter to a plan, returning the previous assignment
    pub fn assign(&self, meter_id: impl Into<String>, plan_id: impl Into<String>) -> Option<String> {
        let meter_id = meter_id.into();
        let plan_id = plan_id.into();
        debug!(meter_id = %meter_id, plan_id = %plan_id, "Assigned price plan");
        self.accounts.insert(meter_id, plan_id)
    }

    /// Add a plan, replacing any plan with the same name
    pub fn add_plan(&self, plan: PricePlan) {
        let mut plans = self.plans.write();
        plans.retain(|p| p.plan_name != plan.plan_name);
        plans.push(plan);
    }
}

impl PlanDirectory for InMemoryPlanDirectory {
    fn price_plan_id_for_meter(&self, meter_id: &str) -> Option<String> {
        self.accounts.get(meter_id).map(|entry| entry.value().clone())
    }

    fn find_plan(&self, plan_id: &str) -> Option<PricePlan> {
        self.plans
            .read()
            .iter()
            .find(|p| p.plan_name == plan_id)
            .cloned()
    }

    fn price_plans(&self) -> Vec<PricePlan> {
        self.plans.read().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn directory() -> InMemoryPlanDirectory {
        let plans = vec![
            PricePlan::new("price-plan-0", "Dr Evil's Dark Energy", dec!(10)),
            PricePlan::new("price-plan-1", "The Green Eco", dec!(2)),
        ];
        let accounts = HashMap::from([("smart-meter-0".to_string(), "price-plan-0".to_string())]);
        InMemoryPlanDirectory::new(plans, accounts)
    }

    #[test]
    fn test_lookup() {
        let dir = directory();
        assert_eq!(
            dir.price_plan_id_for_meter("smart-meter-0").as_deref(),
            Some("price-plan-0")
        );
        assert!(dir.price_plan_id_for_meter("smart-meter-9").is_none());
        assert_eq!(dir.find_plan("price-plan-1").unwrap().unit_rate, dec!(2));
        assert!(dir.find_plan("price-plan-9").is_none());
    }

    #[test]
    fn test_assign_and_add_plan() {
        let dir = directory();
        let previous = dir.assign("smart-meter-0", "price-plan-1");
        assert_eq!(previous.as_deref(), Some("price-plan-0"));

        dir.add_plan(PricePlan::new("price-plan-1", "The Green Eco", dec!(3)));
        assert_eq!(dir.price_plans().len(), 2);
        assert_eq!(dir.find_plan("price-plan-1").unwrap().unit_rate, dec!(3));
    }

    #[test]
    fn test_from_plans_json() {
        let json = r#"[
            {"plan_name": "price-plan-2", "energy_supplier": "Power for Everyone", "unit_rate": "1"}
        ]"#;
        let dir = InMemoryPlanDirectory::from_plans_json(json).unwrap();
        assert_eq!(dir.price_plans().len(), 1);
        assert!(InMemoryPlanDirectory::from_plans_json("{").is_err());
    }
}
