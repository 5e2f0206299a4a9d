//! Energy cost calculation
//!
//! Three formulas live here and are intentionally kept apart:
//! - [`calculate_cost`]: average draw divided by usage hours, times the unit
//!   rate, over every stored reading
//! - [`CostCalculator::calculate_last_week_cost`]: average draw times usage
//!   hours over the trailing window, times the meter's own unit rate
//! - [`CostCalculator::calculate_last_week_cost_for_readings`]: sum of draw
//!   inside the window divided by the count of all readings given

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::{DateTime, TimeDelta, Utc};
use meterbill_common::{
    decimal::{checked_sum, div_half_up, round_half_up},
    BillingError, PricePlan, Reading, Result, SECONDS_PER_HOUR,
};
use rust_decimal::Decimal;
use tracing::{debug, instrument, warn};

use crate::config::BillingConfig;
use crate::store::{PlanDirectory, ReadingStore};

/// Cost calculator over a reading store and a plan directory
pub struct CostCalculator<R, P> {
    readings: Arc<R>,
    plans: Arc<P>,
    config: BillingConfig,
}

impl<R: ReadingStore, P: PlanDirectory> CostCalculator<R, P> {
    /// Create a calculator with default settings
    pub fn new(readings: Arc<R>, plans: Arc<P>) -> Self {
        Self::with_config(readings, plans, BillingConfig::default())
    }

    pub fn with_config(readings: Arc<R>, plans: Arc<P>, config: BillingConfig) -> Self {
        Self {
            readings,
            plans,
            config,
        }
    }

    pub fn config(&self) -> &BillingConfig {
        &self.config
    }

    pub fn reading_store(&self) -> &R {
        &self.readings
    }

    pub fn plan_directory(&self) -> &P {
        &self.plans
    }

    /// Cost of every stored reading under each known plan.
    ///
    /// `None` when the meter has no stored readings.
    #[instrument(skip(self))]
    pub fn calculate_cost_for_all_plans(
        &self,
        meter_id: &str,
    ) -> Result<Option<BTreeMap<String, Decimal>>> {
        let readings = match self.readings.readings(meter_id) {
            Some(readings) if !readings.is_empty() => readings,
            _ => {
                debug!("No readings stored for meter");
                return Ok(None);
            }
        };

        let mut costs = BTreeMap::new();
        for plan in self.plans.price_plans() {
            let cost = calculate_cost(&readings, &plan)?;
            costs.insert(plan.plan_name, cost);
        }

        debug!(plans = costs.len(), readings = readings.len(), "Calculated cost for all plans");
        Ok(Some(costs))
    }

    /// Cost of the trailing window for a meter under its assigned plan
    pub fn calculate_last_week_cost(&self, meter_id: &str) -> Result<Decimal> {
        self.calculate_last_week_cost_at(meter_id, Utc::now())
    }

    /// [`Self::calculate_last_week_cost`] with an explicit current instant
    #[instrument(skip(self))]
    pub fn calculate_last_week_cost_at(&self, meter_id: &str, now: DateTime<Utc>) -> Result<Decimal> {
        let readings = match self.readings.readings(meter_id) {
            Some(readings) if readings.len() >= 2 => readings,
            _ => return Ok(Decimal::ZERO),
        };

        let cutoff = self.window_start(now)?;
        let mut window: Vec<Reading> = readings
            .into_iter()
            .filter(|r| r.timestamp > cutoff)
            .collect();
        if window.len() < 2 {
            debug!(qualifying = window.len(), "Not enough readings in window");
            return Ok(Decimal::ZERO);
        }
        window.sort_by_key(|r| r.timestamp);

        let total = checked_sum(window.iter().map(|r| r.value)).ok_or(BillingError::Overflow)?;
        let average = div_half_up(total, Decimal::from(window.len()), self.config.average_scale)
            .ok_or(BillingError::DivisionByZero)?;

        // Sorted and non-empty, so first and last exist
        let (first, last) = (window[0].timestamp, window[window.len() - 1].timestamp);
        let seconds = (last - first).num_seconds();
        let hours = div_half_up(
            Decimal::from(seconds),
            Decimal::from(SECONDS_PER_HOUR),
            self.config.duration_scale,
        )
        .ok_or(BillingError::DivisionByZero)?;
        if hours.is_zero() {
            debug!("Readings in window span no time");
            return Ok(Decimal::ZERO);
        }

        let energy_kwh = average
            .checked_mul(hours)
            .ok_or(BillingError::Overflow)?;

        let plan_id = self.plans.price_plan_id_for_meter(meter_id).ok_or_else(|| {
            warn!("No price plan attached to meter");
            BillingError::NoPlanAssigned {
                meter_id: meter_id.to_string(),
            }
        })?;
        let plan = self.plans.find_plan(&plan_id).ok_or_else(|| {
            warn!(plan_id = %plan_id, "Assigned price plan not found");
            BillingError::UnknownPlan {
                plan_id: plan_id.clone(),
            }
        })?;

        let cost = energy_kwh
            .checked_mul(plan.unit_rate)
            .map(|cost| round_half_up(cost, self.config.cost_scale))
            .ok_or(BillingError::Overflow)?;
        debug!(
            plan_id = %plan_id,
            %average,
            %hours,
            %energy_kwh,
            %cost,
            "Calculated last week cost"
        );
        Ok(cost)
    }

    /// Trailing-window figure for an explicit set of readings
    pub fn calculate_last_week_cost_for_readings(
        &self,
        readings: Option<&[Reading]>,
    ) -> Result<Decimal> {
        self.calculate_last_week_cost_for_readings_at(readings, Utc::now())
    }

    /// [`Self::calculate_last_week_cost_for_readings`] with an explicit current
    /// instant.
    ///
    /// Only readings inside the window are summed, but the divisor is the
    /// count of every reading passed in.
    pub fn calculate_last_week_cost_for_readings_at(
        &self,
        readings: Option<&[Reading]>,
        now: DateTime<Utc>,
    ) -> Result<Decimal> {
        let readings = match readings {
            Some(readings) if !readings.is_empty() => readings,
            _ => return Ok(Decimal::ZERO),
        };

        let cutoff = self.window_start(now)?;
        let total = checked_sum(
            readings
                .iter()
                .filter(|r| r.timestamp > cutoff)
                .map(|r| r.value),
        )
        .ok_or(BillingError::Overflow)?;

        div_half_up(total, Decimal::from(readings.len()), total.scale())
            .ok_or(BillingError::DivisionByZero)
    }

    fn window_start(&self, now: DateTime<Utc>) -> Result<DateTime<Utc>> {
        TimeDelta::try_days(self.config.window_days)
            .and_then(|window| now.checked_sub_signed(window))
            .ok_or_else(|| {
                BillingError::Config(format!(
                    "window of {} days reaches outside the representable time range",
                    self.config.window_days
                ))
            })
    }
}

/// Cost of a set of readings under a plan.
///
/// The average is rounded half-up at the scale of the summed values and the
/// energy at the scale of the average. Fails with
/// [`BillingError::DivisionByZero`] when the readings span no time.
pub fn calculate_cost(readings: &[Reading], plan: &PricePlan) -> Result<Decimal> {
    let average = average_reading(readings)?;
    let hours = usage_time_in_hours(readings)?;
    if hours.is_zero() {
        return Err(BillingError::DivisionByZero);
    }

    let energy_kwh =
        div_half_up(average, hours, average.scale()).ok_or(BillingError::DivisionByZero)?;
    energy_kwh
        .checked_mul(plan.unit_rate)
        .ok_or(BillingError::Overflow)
}

fn average_reading(readings: &[Reading]) -> Result<Decimal> {
    let total = checked_sum(readings.iter().map(|r| r.value)).ok_or(BillingError::Overflow)?;
    div_half_up(total, Decimal::from(readings.len()), total.scale())
        .ok_or(BillingError::DivisionByZero)
}

fn usage_time_in_hours(readings: &[Reading]) -> Result<Decimal> {
    let first = readings.iter().map(|r| r.timestamp).min();
    let last = readings.iter().map(|r| r.timestamp).max();
    match (first, last) {
        (Some(first), Some(last)) => {
            let seconds = (last - first).num_seconds();
            Ok(Decimal::from(seconds) / Decimal::from(SECONDS_PER_HOUR))
        }
        _ => Err(BillingError::DivisionByZero),
    }
}
