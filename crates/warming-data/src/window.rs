//! Data windows: the per-scene record predicate.

use serde::Serialize;
use warming_core::record::TemperatureRecord;

/// Selects the sub-sequence of the dataset a scene displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DataWindow {
    /// Every record.
    All,
    /// Records with `year >= year`.
    FromYear {
        /// Inclusive lower bound.
        year: i32,
    },
}

impl DataWindow {
    /// Returns true when `record` falls inside this window.
    #[must_use]
    pub fn contains(&self, record: &TemperatureRecord) -> bool {
        match self {
            Self::All => true,
            Self::FromYear { year } => record.year >= *year,
        }
    }

    /// Returns the records inside this window, preserving order.
    #[must_use]
    pub fn apply(&self, records: &[TemperatureRecord]) -> Vec<TemperatureRecord> {
        records
            .iter()
            .filter(|record| self.contains(record))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records() -> Vec<TemperatureRecord> {
        vec![
            TemperatureRecord::new(1979, 0.1, "GISTEMP"),
            TemperatureRecord::new(1980, 0.3, "GISTEMP"),
            TemperatureRecord::new(1995, 0.45, "GISTEMP"),
        ]
    }

    #[test]
    fn test_all_keeps_every_record() {
        assert_eq!(DataWindow::All.apply(&records()), records());
    }

    #[test]
    fn test_from_year_bound_is_inclusive() {
        let window = DataWindow::FromYear { year: 1980 };

        let years: Vec<i32> = window.apply(&records()).iter().map(|r| r.year).collect();

        assert_eq!(years, vec![1980, 1995]);
    }

    #[test]
    fn test_apply_is_idempotent() {
        // Arrange
        let window = DataWindow::FromYear { year: 1980 };

        // Act
        let once = window.apply(&records());
        let twice = window.apply(&once);

        // Assert
        assert_eq!(once, twice);
    }

    #[test]
    fn test_window_with_no_members_yields_empty() {
        let window = DataWindow::FromYear { year: 2100 };

        assert!(window.apply(&records()).is_empty());
    }
}
