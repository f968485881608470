//! Linear scales with round-number domain expansion and tick generation.
//!
//! Tick steps are restricted to 1, 2, or 5 times a power of ten, chosen so
//! that roughly `count` ticks cover the domain.

use serde::Serialize;

use crate::extent::Extent;

const E10: f64 = 7.071_067_811_865_476; // sqrt(50)
const E5: f64 = 3.162_277_660_168_379_5; // sqrt(10)
const E2: f64 = std::f64::consts::SQRT_2;

const MAX_NICE_ITERATIONS: usize = 10;

/// Maps a continuous domain linearly onto a pixel range.
///
/// A degenerate domain (`min == max`) maps every value to the midpoint of
/// the range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LinearScale {
    domain: Extent,
    range: (f64, f64),
}

impl LinearScale {
    /// Creates a scale from `domain` onto `range`. The range may be inverted.
    #[must_use]
    pub fn new(domain: Extent, range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// The input domain.
    #[must_use]
    pub fn domain(&self) -> Extent {
        self.domain
    }

    /// The output range.
    #[must_use]
    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    /// Maps `value` from the domain onto the range. Values outside the domain
    /// extrapolate; nothing is clamped.
    #[must_use]
    pub fn apply(&self, value: f64) -> f64 {
        let t = if self.domain.is_degenerate() {
            0.5
        } else {
            (value - self.domain.min) / self.domain.span()
        };
        self.range.0 + t * (self.range.1 - self.range.0)
    }

    /// Expands the domain outward to multiples of the tick step for `count`
    /// ticks. Degenerate or non-finite domains are left unchanged, as is a
    /// domain that does not settle within ten refinements.
    #[must_use]
    pub fn nice(mut self, count: usize) -> Self {
        let (mut start, mut stop) = (self.domain.min, self.domain.max);
        if count == 0 || self.domain.is_degenerate() || !start.is_finite() || !stop.is_finite() {
            return self;
        }

        let mut previous: Option<f64> = None;
        for _ in 0..MAX_NICE_ITERATIONS {
            let step = tick_increment(start, stop, count);
            if previous.is_some_and(|p| (p - step).abs() <= f64::EPSILON * p.abs()) {
                self.domain = Extent::new(start, stop);
                return self;
            }
            if step > 0.0 {
                start = (start / step).floor() * step;
                stop = (stop / step).ceil() * step;
            } else if step < 0.0 {
                start = (start * step).ceil() / step;
                stop = (stop * step).floor() / step;
            } else {
                break;
            }
            previous = Some(step);
        }
        self
    }

    /// Returns approximately `count` round-number tick values inside the
    /// domain, ascending. A degenerate domain yields its single value.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let (start, stop) = (self.domain.min, self.domain.max);
        if count == 0 || !start.is_finite() || !stop.is_finite() {
            return Vec::new();
        }
        if self.domain.is_degenerate() {
            return vec![start];
        }

        let Some((i1, i2, inc)) = tick_spec(start, stop, count as f64) else {
            return Vec::new();
        };
        (i1..=i2)
            .map(|i| {
                if inc < 0.0 {
                    i as f64 / -inc
                } else {
                    i as f64 * inc
                }
            })
            .collect()
    }

    /// The distance between adjacent ticks for `count` ticks, or `None` for a
    /// degenerate domain.
    #[must_use]
    pub fn tick_step(&self, count: usize) -> Option<f64> {
        if count == 0 || self.domain.is_degenerate() {
            return None;
        }
        let inc = tick_increment(self.domain.min, self.domain.max, count);
        if inc < 0.0 {
            Some(-1.0 / inc)
        } else if inc > 0.0 {
            Some(inc)
        } else {
            None
        }
    }
}

fn step_factor(error: f64) -> f64 {
    if error >= E10 {
        10.0
    } else if error >= E5 {
        5.0
    } else if error >= E2 {
        2.0
    } else {
        1.0
    }
}

/// Tick step for the domain. Steps below one are returned as the negated
/// reciprocal so that integer arithmetic stays exact.
#[allow(clippy::cast_precision_loss)]
fn tick_increment(start: f64, stop: f64, count: usize) -> f64 {
    let step = (stop - start) / count as f64;
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = step_factor(error);
    if power >= 0.0 {
        factor * 10f64.powf(power)
    } else {
        -10f64.powf(-power) / factor
    }
}

/// First and last tick index plus the increment (negated reciprocal when the
/// step is below one).
#[allow(clippy::cast_possible_truncation)]
fn tick_spec(start: f64, stop: f64, count: f64) -> Option<(i64, i64, f64)> {
    let step = (stop - start) / count.max(0.0);
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = step_factor(error);

    let (mut i1, mut i2, inc);
    if power < 0.0 {
        let inverse = 10f64.powf(-power) / factor;
        i1 = (start * inverse).round();
        i2 = (stop * inverse).round();
        if i1 / inverse < start {
            i1 += 1.0;
        }
        if i2 / inverse > stop {
            i2 -= 1.0;
        }
        inc = -inverse;
    } else {
        let size = 10f64.powf(power) * factor;
        i1 = (start / size).round();
        i2 = (stop / size).round();
        if i1 * size < start {
            i1 += 1.0;
        }
        if i2 * size > stop {
            i2 -= 1.0;
        }
        inc = size;
    }

    if i2 < i1 && (0.5..2.0).contains(&count) {
        return tick_spec(start, stop, count * 2.0);
    }
    if !i1.is_finite() || !i2.is_finite() || i2 < i1 {
        return None;
    }
    Some((i1 as i64, i2 as i64, inc))
}
