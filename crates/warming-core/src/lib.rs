//! Warming Core: shared domain abstractions.
//!
//! This crate defines the record type and the traits that the data, chart,
//! and narrative crates depend on. It contains no infrastructure code.

pub mod command;
pub mod error;
pub mod record;
pub mod source;
