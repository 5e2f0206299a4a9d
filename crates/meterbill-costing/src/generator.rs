//! Synthetic meter readings

use chrono::{DateTime, Duration, Utc};
use meterbill_common::Reading;
use rand::Rng;
use rust_decimal::Decimal;

/// Seconds between generated readings
pub const READING_INTERVAL_SECS: i64 = 10;

/// Generate `count` readings spaced [`READING_INTERVAL_SECS`] apart, the last
/// one at `end`, oldest first.
///
/// Values are in [0, 1) kW with four fractional digits.
pub fn generate(count: usize, end: DateTime<Utc>) -> Vec<Reading> {
    let mut rng = rand::thread_rng();
    let mut readings: Vec<Reading> = (0..count)
        .map(|i| {
            let timestamp = end - Duration::seconds(i as i64 * READING_INTERVAL_SECS);
            let value = Decimal::new(rng.gen_range(0..10_000), 4);
            Reading::new(timestamp, value)
        })
        .collect();
    readings.reverse();
    readings
}
