//! # Meterbill Costing
//!
//! Energy cost calculation for smart meters.
//!
//! ## Cost Formulas
//!
//! ```text
//! Last week:  cost = round2(avg(kW) × hours × unit_rate)
//! Per plan:   cost = (avg(kW) / hours) × unit_rate
//! ```
//!
//! Readings come from a [`ReadingStore`]; plan assignments and unit rates
//! come from a [`PlanDirectory`]. Both have in-memory implementations.

pub mod config;
pub mod generator;
pub mod pricing;
pub mod seed;
pub mod store;

pub use config::BillingConfig;
pub use pricing::{calculate_cost, CostCalculator, PlanComparison};
pub use store::{InMemoryPlanDirectory, InMemoryReadingStore, PlanDirectory, ReadingStore};

/// Default trailing billing window in days
pub const DEFAULT_WINDOW_DAYS: i64 = 7;

/// Longest accepted trailing billing window in days
pub const MAX_WINDOW_DAYS: i64 = 36_500;

/// Default fractional digits for intermediate averages and durations
pub const DEFAULT_INTERMEDIATE_SCALE: u32 = 10;

/// Default fractional digits of a final cost
pub const DEFAULT_COST_SCALE: u32 = 2;
