//! Warming narrative: chart context.
//!
//! The shared draw routine every scene goes through: scale construction,
//! domain fallback, axis ticks, line geometry, tooltip markers, annotation
//! callouts, and serialisation onto a display surface.

pub mod chart;
pub mod extent;
pub mod layout;
pub mod scale;
pub mod surface;
pub mod svg;

pub use chart::{
    Annotation, Callout, Chart, ChartRequest, DomainSource, Marker, Point, Tick, build_chart,
};
pub use extent::Extent;
pub use layout::{ChartLayout, Margin};
pub use scale::LinearScale;
pub use surface::{DisplaySurface, SvgSurface};
pub use svg::render_svg;
