//! Warming narrative: scene navigation context.
//!
//! Responsible for the fixed scene sequence, saturating scene navigation,
//! and re-rendering the active scene onto a display surface.

pub mod application;
pub mod domain;
