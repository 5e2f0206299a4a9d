//! Meter reading storage
//!
//! Readings are kept per smart meter id. A meter with no entry is unknown; a
//! meter may also be known with an empty reading list.

use dashmap::DashMap;
use meterbill_common::{MeterReadings, Reading, Result};
use tracing::debug;

/// Source of meter readings
pub trait ReadingStore: Send + Sync {
    /// All readings recorded for a meter, or `None` if the meter is unknown
    fn readings(&self, meter_id: &str) -> Option<Vec<Reading>>;

    /// Append readings for a meter
    fn store_readings(&self, meter_id: &str, readings: Vec<Reading>);
}

/// In-memory reading store
///
/// Uses DashMap for concurrent access.
#[derive(Debug, Default)]
pub struct InMemoryReadingStore {
    readings: DashMap<String, Vec<Reading>>,
}

impl InMemoryReadingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate a submitted batch and append it
    pub fn store(&self, batch: MeterReadings) -> Result<()> {
        batch.validate()?;
        self.store_readings(&batch.smart_meter_id, batch.electricity_readings);
        Ok(())
    }

    /// Number of known meters
    pub fn meter_count(&self) -> usize {
        self.readings.len()
    }
}

impl ReadingStore for InMemoryReadingStore {
    fn readings(&self, meter_id: &str) -> Option<Vec<Reading>> {
        self.readings.get(meter_id).map(|entry| entry.value().clone())
    }

    fn store_readings(&self, meter_id: &str, readings: Vec<Reading>) {
        let count = readings.len();
        let mut entry = self.readings.entry(meter_id.to_string()).or_default();
        entry.extend(readings);
        debug!(meter_id, added = count, total = entry.len(), "Stored readings");
    }
}
