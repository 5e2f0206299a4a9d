//! Domain types for meterbill

pub mod price_plan;
pub mod reading;
