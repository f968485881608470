//! Warming narrative: data context.
//!
//! Loads the raw temperature series, reduces it to the GISTEMP dataset, and
//! derives per-scene data windows.

pub mod csv_source;
pub mod dataset;
pub mod window;

pub use csv_source::{CsvRecordSource, parse_records};
pub use dataset::Dataset;
pub use window::DataWindow;
