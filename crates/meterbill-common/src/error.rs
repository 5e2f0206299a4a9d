//! Error types for meterbill
//!
//! Missing plan assignments and unresolvable plans are errors; missing
//! readings are not (they produce zero cost or an absent result).

use thiserror::Error;

/// Result type alias using BillingError
pub type Result<T> = std::result::Result<T, BillingError>;

/// Unified error type for billing operations
#[derive(Debug, Error)]
pub enum BillingError {
    /// The meter has no price plan id in the directory
    #[error("No price plan attached to smart meter id: {meter_id}")]
    NoPlanAssigned { meter_id: String },

    /// The plan id does not resolve to a known plan
    #[error("No price plan found for id: {plan_id}")]
    UnknownPlan { plan_id: String },

    /// Usage duration computed to zero in the per-plan cost formula
    #[error("Division by zero: usage duration is zero")]
    DivisionByZero,

    // Input validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    // Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// A sum or product exceeded the range of `Decimal`
    #[error("Billing calculation overflow")]
    Overflow,
}

impl From<serde_json::Error> for BillingError {
    fn from(err: serde_json::Error) -> Self {
        BillingError::Serialization(err.to_string())
    }
}
