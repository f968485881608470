//! The GISTEMP dataset owned by the narrative controller.

use warming_core::record::TemperatureRecord;

use crate::window::DataWindow;

/// GISTEMP records ordered by year. Read-only once built.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    records: Vec<TemperatureRecord>,
}

impl Dataset {
    /// Builds the dataset from raw loader output: keeps GISTEMP rows only and
    /// orders them by year (stable, so equal years keep source order).
    ///
    /// No matching rows is not an error; the dataset is simply empty.
    #[must_use]
    pub fn from_records(raw: Vec<TemperatureRecord>) -> Self {
        let mut records: Vec<TemperatureRecord> =
            raw.into_iter().filter(TemperatureRecord::is_gistemp).collect();
        records.sort_by_key(|record| record.year);
        Self { records }
    }

    /// Returns an empty dataset.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns the records in year order.
    #[must_use]
    pub fn records(&self) -> &[TemperatureRecord] {
        &self.records
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true when the dataset holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Derives a fresh view of the records inside `window`.
    #[must_use]
    pub fn window(&self, window: &DataWindow) -> Vec<TemperatureRecord> {
        window.apply(&self.records)
    }
}
