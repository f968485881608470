//! Shared test mocks and fixtures for the warming narrative.

mod fixtures;
mod source;
mod surface;

pub use fixtures::{mixed_source_records, sample_records};
pub use source::{FailingRecordSource, StaticRecordSource};
pub use surface::{RecordingSurface, SurfaceOp};
