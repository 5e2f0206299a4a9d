//! Price plans
//!
//! A price plan is a named tariff with a unit rate (cost per kWh). Plans may
//! carry per-weekday peak multipliers applied on top of the unit rate.

use chrono::{DateTime, Datelike, Utc, Weekday};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Multiplier applied to the unit rate on a given day of the week
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeakTimeMultiplier {
    pub day_of_week: Weekday,
    pub multiplier: Decimal,
}

impl PeakTimeMultiplier {
    pub fn new(day_of_week: Weekday, multiplier: Decimal) -> Self {
        Self {
            day_of_week,
            multiplier,
        }
    }
}

/// Named tariff
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricePlan {
    /// Unique plan identifier
    pub plan_name: String,
    /// Supplier offering the plan
    pub energy_supplier: String,
    /// Cost per kilowatt-hour
    pub unit_rate: Decimal,
    #[serde(default)]
    pub peak_time_multipliers: Vec<PeakTimeMultiplier>,
}

impl PricePlan {
    /// Create a plan without peak multipliers
    pub fn new(
        plan_name: impl Into<String>,
        energy_supplier: impl Into<String>,
        unit_rate: Decimal,
    ) -> Self {
        Self {
            plan_name: plan_name.into(),
            energy_supplier: energy_supplier.into(),
            unit_rate,
            peak_time_multipliers: Vec::new(),
        }
    }

    /// Add a peak multiplier for a weekday
    pub fn with_peak_time_multiplier(mut self, day_of_week: Weekday, multiplier: Decimal) -> Self {
        self.peak_time_multipliers
            .push(PeakTimeMultiplier::new(day_of_week, multiplier));
        self
    }

    /// Unit rate in effect at `at`.
    ///
    /// The first multiplier matching the weekday wins; without a match the
    /// plain unit rate applies.
    pub fn price_at(&self, at: DateTime<Utc>) -> Decimal {
        let weekday = at.weekday();
        self.peak_time_multipliers
            .iter()
            .find(|m| m.day_of_week == weekday)
            .map(|m| self.unit_rate * m.multiplier)
            .unwrap_or(self.unit_rate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rust_decimal_macros::dec;

    #[test]
    fn test_price_without_multipliers() {
        let plan = PricePlan::new("price-plan-0", "Dr Evil's Dark Energy", dec!(10));
        // 2024-03-04 is a Monday
        let monday = Utc.with_ymd_and_hms(2024, 3, 4, 12, 0, 0).unwrap();
        assert_eq!(plan.price_at(monday), dec!(10));
    }

    #[test]
    fn test_price_with_peak_multiplier() {
        let plan = PricePlan::new("price-plan-1", "The Green Eco", dec!(2))
            .with_peak_time_multiplier(Weekday::Wed, dec!(1.5))
            .with_peak_time_multiplier(Weekday::Wed, dec!(3));

        let wednesday = Utc.with_ymd_and_hms(2024, 3, 6, 8, 30, 0).unwrap();
        let thursday = Utc.with_ymd_and_hms(2024, 3, 7, 8, 30, 0).unwrap();

        assert_eq!(plan.price_at(wednesday), dec!(3.0));
        assert_eq!(plan.price_at(thursday), dec!(2));
    }

    #[test]
    fn test_deserialize_without_multipliers() {
        let json = r#"{"plan_name":"p","energy_supplier":"s","unit_rate":"0.15"}"#;
        let plan: PricePlan = serde_json::from_str(json).unwrap();
        assert!(plan.peak_time_multipliers.is_empty());
        assert_eq!(plan.unit_rate, dec!(0.15));
    }
}
