//! Record source abstraction.
//!
//! The tabular loader is an external collaborator: it performs the single
//! asynchronous fetch-and-parse step before the first render.

use async_trait::async_trait;

use crate::error::DomainError;
use crate::record::TemperatureRecord;

/// Loads the raw, unfiltered temperature series.
#[async_trait]
pub trait RecordSource: Send + Sync {
    /// Load every record, in source order.
    async fn load(&self) -> Result<Vec<TemperatureRecord>, DomainError>;
}
