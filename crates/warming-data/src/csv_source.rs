//! CSV-backed `RecordSource`.

use std::io::Read;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::{debug, instrument};
use warming_core::error::DomainError;
use warming_core::record::TemperatureRecord;
use warming_core::source::RecordSource;

/// Reads `Source,Year,Mean` rows from a CSV file on disk.
#[derive(Debug, Clone)]
pub struct CsvRecordSource {
    path: PathBuf,
}

impl CsvRecordSource {
    /// Create a source for the CSV file at `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the file this source reads from.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl RecordSource for CsvRecordSource {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    async fn load(&self) -> Result<Vec<TemperatureRecord>, DomainError> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|e| DomainError::DataLoad(format!("{}: {e}", self.path.display())))?;

        let records = parse_records(bytes.as_slice())?;
        debug!(count = records.len(), "parsed temperature records");
        Ok(records)
    }
}

/// Parses CSV rows into records, coercing `Year` to an integer and `Mean` to
/// a float. Columns are matched by header name; extra columns are ignored.
///
/// # Errors
///
/// Returns `DomainError::MalformedRecord` for the first row that fails to
/// coerce, or `DomainError::DataLoad` if the reader itself fails.
pub fn parse_records<R: Read>(reader: R) -> Result<Vec<TemperatureRecord>, DomainError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut records = Vec::new();
    for row in csv_reader.deserialize::<TemperatureRecord>() {
        let record = row.map_err(|e| match e.position() {
            Some(position) => DomainError::MalformedRecord {
                line: position.line(),
                message: e.to_string(),
            },
            None => DomainError::DataLoad(e.to_string()),
        })?;
        records.push(record);
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_records_coerces_year_and_mean() {
        // Arrange
        let input = "Source,Year,Mean\nGISTEMP,1980,0.26\nGCAG,1980,0.2747\n";

        // Act
        let records = parse_records(input.as_bytes()).unwrap();

        // Assert
        assert_eq!(
            records,
            vec![
                TemperatureRecord::new(1980, 0.26, "GISTEMP"),
                TemperatureRecord::new(1980, 0.2747, "GCAG"),
            ]
        );
    }

    #[test]
    fn test_parse_records_matches_columns_by_header_name() {
        let input = "Year, Mean, Source\n1988, 0.4, GISTEMP\n";

        let records = parse_records(input.as_bytes()).unwrap();

        assert_eq!(records, vec![TemperatureRecord::new(1988, 0.4, "GISTEMP")]);
    }

    #[test]
    fn test_parse_records_accepts_negative_anomalies() {
        let input = "Source,Year,Mean\nGISTEMP,1909,-0.47\n";

        let records = parse_records(input.as_bytes()).unwrap();

        assert!((records[0].mean_anomaly - -0.47).abs() < f64::EPSILON);
    }

    #[test]
    fn test_parse_records_header_only_yields_empty() {
        let records = parse_records("Source,Year,Mean\n".as_bytes()).unwrap();

        assert!(records.is_empty());
    }

    #[test]
    fn test_parse_records_reports_line_of_malformed_row() {
        // Arrange
        let input = "Source,Year,Mean\nGISTEMP,1980,0.26\nGISTEMP,nineteen,0.1\n";

        // Act
        let result = parse_records(input.as_bytes());

        // Assert
        match result {
            Err(DomainError::MalformedRecord { line, .. }) => assert_eq!(line, 3),
            other => panic!("expected MalformedRecord, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_load_missing_file_returns_data_load_error() {
        // Arrange
        let source = CsvRecordSource::new("does/not/exist.csv");

        // Act
        let result = source.load().await;

        // Assert
        match result {
            Err(DomainError::DataLoad(message)) => assert!(message.contains("exist.csv")),
            other => panic!("expected DataLoad, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_load_reads_bundled_dataset() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../data/global_temp.csv");
        let source = CsvRecordSource::new(path);

        let records = source.load().await.unwrap();

        assert!(records.iter().any(TemperatureRecord::is_gistemp));
        assert!(records.iter().any(|r| !r.is_gistemp()));
    }
}
