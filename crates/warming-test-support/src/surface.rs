//! Test surface: records every clear/present call.

use warming_chart::chart::Chart;
use warming_chart::surface::DisplaySurface;

/// One call made against a `RecordingSurface`.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceOp {
    /// `clear()` was called.
    Cleared,
    /// `present()` was called with this chart.
    Presented(Box<Chart>),
}

/// A display surface that keeps a log of operations instead of drawing.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    ops: Vec<SurfaceOp>,
}

impl RecordingSurface {
    /// Create an empty recording surface.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All operations, oldest first.
    #[must_use]
    pub fn ops(&self) -> &[SurfaceOp] {
        &self.ops
    }

    /// The most recently presented chart.
    #[must_use]
    pub fn last_chart(&self) -> Option<&Chart> {
        self.ops.iter().rev().find_map(|op| match op {
            SurfaceOp::Presented(chart) => Some(chart.as_ref()),
            SurfaceOp::Cleared => None,
        })
    }

    /// Number of charts presented.
    #[must_use]
    pub fn present_count(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, SurfaceOp::Presented(_)))
            .count()
    }
}

impl DisplaySurface for RecordingSurface {
    fn clear(&mut self) {
        self.ops.push(SurfaceOp::Cleared);
    }

    fn present(&mut self, chart: &Chart) {
        self.ops.push(SurfaceOp::Presented(Box::new(chart.clone())));
    }
}
