//! Meter readings
//!
//! A reading is an instantaneous power draw (kW) sampled at an instant.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{BillingError, Result};

/// Timestamped instantaneous power draw sample
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reading {
    /// When the sample was taken
    pub timestamp: DateTime<Utc>,
    /// Power draw in kilowatts
    pub value: Decimal,
}

impl Reading {
    pub fn new(timestamp: DateTime<Utc>, value: Decimal) -> Self {
        Self { timestamp, value }
    }
}

/// A batch of readings submitted for one smart meter
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeterReadings {
    pub smart_meter_id: String,
    pub electricity_readings: Vec<Reading>,
}

impl MeterReadings {
    pub fn new(smart_meter_id: impl Into<String>, electricity_readings: Vec<Reading>) -> Self {
        Self {
            smart_meter_id: smart_meter_id.into(),
            electricity_readings,
        }
    }

    /// Validate the batch
    pub fn validate(&self) -> Result<()> {
        if self.smart_meter_id.is_empty() {
            return Err(BillingError::Validation("smart_meter_id is required".into()));
        }
        if self.electricity_readings.is_empty() {
            return Err(BillingError::Validation(
                "electricity_readings must not be empty".into(),
            ));
        }
        Ok(())
    }
}
