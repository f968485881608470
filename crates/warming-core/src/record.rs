//! Temperature records.

use serde::{Deserialize, Serialize};

/// Source label of the series the narrative is built on.
pub const GISTEMP: &str = "GISTEMP";

/// One row of the global temperature anomaly series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemperatureRecord {
    /// Calendar year.
    #[serde(rename = "Year")]
    pub year: i32,
    /// Mean anomaly in degrees Celsius.
    #[serde(rename = "Mean")]
    pub mean_anomaly: f64,
    /// Label of the originating dataset.
    #[serde(rename = "Source")]
    pub source: String,
}

impl TemperatureRecord {
    /// Creates a record.
    #[must_use]
    pub fn new(year: i32, mean_anomaly: f64, source: impl Into<String>) -> Self {
        Self {
            year,
            mean_anomaly,
            source: source.into(),
        }
    }

    /// Returns true when this record belongs to the GISTEMP series.
    #[must_use]
    pub fn is_gistemp(&self) -> bool {
        self.source == GISTEMP
    }
}
