//! Billing configuration

use anyhow::Result;
use meterbill_common::BillingError;
use serde::{Deserialize, Serialize};

/// Cost calculation settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillingConfig {
    /// Length of the trailing billing window in days
    pub window_days: i64,
    /// Fractional digits kept for the average reading (last-week path)
    pub average_scale: u32,
    /// Fractional digits kept for the usage duration in hours (last-week path)
    pub duration_scale: u32,
    /// Fractional digits of a final last-week cost
    pub cost_scale: u32,
}

impl Default for BillingConfig {
    fn default() -> Self {
        Self {
            window_days: crate::DEFAULT_WINDOW_DAYS,
            average_scale: crate::DEFAULT_INTERMEDIATE_SCALE,
            duration_scale: crate::DEFAULT_INTERMEDIATE_SCALE,
            cost_scale: crate::DEFAULT_COST_SCALE,
        }
    }
}

impl BillingConfig {
    /// Load configuration from `.env` and `METERBILL_*` environment variables.
    ///
    /// Unset or unparsable variables keep their defaults.
    pub fn load() -> Result<Self> {
        let _ = dotenvy::dotenv();

        let mut cfg = Self::default();

        if let Ok(val) = std::env::var("METERBILL_WINDOW_DAYS") {
            if let Ok(v) = val.parse() {
                cfg.window_days = v;
            }
        }
        if let Ok(val) = std::env::var("METERBILL_AVERAGE_SCALE") {
            if let Ok(v) = val.parse() {
                cfg.average_scale = v;
            }
        }
        if let Ok(val) = std::env::var("METERBILL_DURATION_SCALE") {
            if let Ok(v) = val.parse() {
                cfg.duration_scale = v;
            }
        }
        if let Ok(val) = std::env::var("METERBILL_COST_SCALE") {
            if let Ok(v) = val.parse() {
                cfg.cost_scale = v;
            }
        }

        cfg.validate()?;
        Ok(cfg)
    }

    /// Check settings are usable
    pub fn validate(&self) -> meterbill_common::Result<()> {
        if self.window_days <= 0 || self.window_days > crate::MAX_WINDOW_DAYS {
            return Err(BillingError::Config(format!(
                "window_days must be between 1 and {}, got {}",
                crate::MAX_WINDOW_DAYS,
                self.window_days
            )));
        }
        // rust_decimal carries at most 28 fractional digits
        for (name, scale) in [
            ("average_scale", self.average_scale),
            ("duration_scale", self.duration_scale),
            ("cost_scale", self.cost_scale),
        ] {
            if scale > 28 {
                return Err(BillingError::Config(format!(
                    "{name} must be at most 28, got {scale}"
                )));
            }
        }
        Ok(())
    }
}
