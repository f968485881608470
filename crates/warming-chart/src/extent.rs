//! Value extents and the fixed fallback domains.

use serde::Serialize;

/// Closed interval `[min, max]` over observed values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Extent {
    /// Lower bound.
    pub min: f64,
    /// Upper bound.
    pub max: f64,
}

/// Year domain used when neither the window nor the dataset has records.
pub const DEFAULT_YEAR_EXTENT: Extent = Extent {
    min: 1880.0,
    max: 2020.0,
};

/// Anomaly domain used when neither the window nor the dataset has records.
pub const DEFAULT_ANOMALY_EXTENT: Extent = Extent {
    min: -1.0,
    max: 1.0,
};

impl Extent {
    /// Creates an extent, ordering the bounds.
    #[must_use]
    pub fn new(a: f64, b: f64) -> Self {
        if a <= b {
            Self { min: a, max: b }
        } else {
            Self { min: b, max: a }
        }
    }

    /// Returns the extent of `values`, skipping NaN. `None` when nothing
    /// comparable remains.
    pub fn of<I>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        values
            .into_iter()
            .filter(|v| !v.is_nan())
            .fold(None, |acc, v| match acc {
                None => Some(Self { min: v, max: v }),
                Some(e) => Some(Self {
                    min: e.min.min(v),
                    max: e.max.max(v),
                }),
            })
    }

    /// Width of the interval.
    #[must_use]
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Returns true when the interval collapses to a single value.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.span().abs() <= f64::EPSILON
    }

    /// Returns true when `value` lies inside the interval.
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_of_empty_is_none() {
        assert_eq!(Extent::of(Vec::<f64>::new()), None);
    }

    #[test]
    fn test_of_single_value_is_degenerate() {
        let extent = Extent::of([1980.0]).unwrap();

        assert_eq!(extent, Extent::new(1980.0, 1980.0));
        assert!(extent.is_degenerate());
    }

    #[test]
    fn test_of_ignores_nan() {
        let extent = Extent::of([0.5, f64::NAN, -0.2]).unwrap();

        assert_eq!(extent, Extent::new(-0.2, 0.5));
    }

    #[test]
    fn test_new_orders_bounds() {
        assert_eq!(Extent::new(2.0, -1.0), Extent { min: -1.0, max: 2.0 });
    }
}
