//! Test record sources: mock `RecordSource` implementations.

use async_trait::async_trait;
use warming_core::error::DomainError;
use warming_core::record::TemperatureRecord;
use warming_core::source::RecordSource;

/// A record source that returns a fixed set of records.
#[derive(Debug, Clone)]
pub struct StaticRecordSource(pub Vec<TemperatureRecord>);

#[async_trait]
impl RecordSource for StaticRecordSource {
    async fn load(&self) -> Result<Vec<TemperatureRecord>, DomainError> {
        Ok(self.0.clone())
    }
}

/// A record source that always fails to load. Useful for testing the
/// unavailable-data fallback.
#[derive(Debug)]
pub struct FailingRecordSource;

#[async_trait]
impl RecordSource for FailingRecordSource {
    async fn load(&self) -> Result<Vec<TemperatureRecord>, DomainError> {
        Err(DomainError::DataLoad("connection refused".into()))
    }
}
