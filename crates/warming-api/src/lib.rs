//! Warming narrative: HTTP surface.
//!
//! Serves the narrative page, the navigation commands, and the rendered
//! scene as SVG.

pub mod config;
pub mod error;
pub mod routes;
pub mod state;
pub mod telemetry;
