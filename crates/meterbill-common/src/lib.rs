//! # Meterbill Common
//!
//! Shared domain types, errors, and decimal helpers for meterbill.
//!
//! ## Core Types
//!
//! - [`Reading`]: timestamped instantaneous power draw (kW)
//! - [`MeterReadings`]: a batch of readings for one smart meter
//! - [`PricePlan`]: named tariff with a unit rate per kWh
//!
//! ## Arithmetic
//!
//! All money and energy values are [`rust_decimal::Decimal`]; rounding goes
//! through [`decimal`] and is always half-up.

pub mod decimal;
pub mod error;
pub mod types;

// Re-export commonly used types at crate root
pub use error::{BillingError, Result};
pub use types::{
    price_plan::{PeakTimeMultiplier, PricePlan},
    reading::{MeterReadings, Reading},
};

/// Seconds in one hour
pub const SECONDS_PER_HOUR: i64 = 3600;
