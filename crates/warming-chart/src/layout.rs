//! Canvas size and margins.

use serde::Serialize;

/// Space reserved around the plot area, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Margin {
    /// Top margin (holds title and subtitle).
    pub top: f64,
    /// Right margin.
    pub right: f64,
    /// Bottom margin (holds the year axis).
    pub bottom: f64,
    /// Left margin (holds the anomaly axis).
    pub left: f64,
}

impl Default for Margin {
    fn default() -> Self {
        Self {
            top: 60.0,
            right: 40.0,
            bottom: 40.0,
            left: 60.0,
        }
    }
}

/// Outer canvas dimensions plus margins.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChartLayout {
    /// Full canvas width.
    pub width: f64,
    /// Full canvas height.
    pub height: f64,
    /// Margins around the plot area.
    pub margin: Margin,
}

impl Default for ChartLayout {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 500.0,
            margin: Margin::default(),
        }
    }
}

impl ChartLayout {
    /// Width of the plot area.
    #[must_use]
    pub fn inner_width(&self) -> f64 {
        (self.width - self.margin.left - self.margin.right).max(0.0)
    }

    /// Height of the plot area.
    #[must_use]
    pub fn inner_height(&self) -> f64 {
        (self.height - self.margin.top - self.margin.bottom).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_plot_area_is_700_by_400() {
        let layout = ChartLayout::default();

        assert!((layout.inner_width() - 700.0).abs() < f64::EPSILON);
        assert!((layout.inner_height() - 400.0).abs() < f64::EPSILON);
    }
}
