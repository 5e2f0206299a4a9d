//! Price plan comparison and recommendation

use std::collections::BTreeMap;

use meterbill_common::Result;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use super::calculator::CostCalculator;
use crate::store::{PlanDirectory, ReadingStore};

/// A meter's current plan alongside its cost under every known plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanComparison {
    /// Plan currently assigned to the meter, if any
    pub price_plan_id: Option<String>,
    /// Cost by plan name
    pub price_plan_comparisons: BTreeMap<String, Decimal>,
}

impl<R: ReadingStore, P: PlanDirectory> CostCalculator<R, P> {
    /// Compare every plan for a meter.
    ///
    /// `None` when the meter has no stored readings.
    #[instrument(skip(self))]
    pub fn compare_price_plans(&self, meter_id: &str) -> Result<Option<PlanComparison>> {
        let Some(costs) = self.calculate_cost_for_all_plans(meter_id)? else {
            return Ok(None);
        };

        Ok(Some(PlanComparison {
            price_plan_id: self.plan_directory().price_plan_id_for_meter(meter_id),
            price_plan_comparisons: costs,
        }))
    }

    /// Plans ordered from cheapest to most expensive for a meter.
    ///
    /// Ties are ordered by plan name. `limit` truncates the list when it is
    /// smaller than the number of plans.
    #[instrument(skip(self))]
    pub fn recommend_price_plans(
        &self,
        meter_id: &str,
        limit: Option<usize>,
    ) -> Result<Option<Vec<(String, Decimal)>>> {
        let Some(costs) = self.calculate_cost_for_all_plans(meter_id)? else {
            return Ok(None);
        };

        let mut ranked: Vec<(String, Decimal)> = costs.into_iter().collect();
        // BTreeMap iteration is already name-ordered, so a stable sort keeps ties by name
        ranked.sort_by(|a, b| a.1.cmp(&b.1));

        if let Some(limit) = limit {
            ranked.truncate(limit);
        }

        debug!(recommended = ranked.len(), "Ranked price plans");
        Ok(Some(ranked))
    }
}
