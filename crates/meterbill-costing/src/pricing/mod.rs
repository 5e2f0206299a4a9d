//! Pricing module
//!
//! Provides energy cost calculation with:
//! - Per-plan cost over every stored reading
//! - Trailing-window cost under the meter's assigned plan
//! - Plan comparison and recommendation

pub mod calculator;
pub mod comparison;

pub use calculator::{calculate_cost, CostCalculator};
pub use comparison::PlanComparison;
