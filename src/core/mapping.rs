//! Derived motion mapper: piecewise-linear functions of a progress value.
//!
//! A mapping is an ordered list of `(breakpoint, output)` pairs.  Between
//! two breakpoints the output is interpolated linearly; outside the
//! declared domain it clamps to the nearest endpoint.  Mappings are
//! immutable once built, so evaluating one is pure.

use thiserror::Error;

use super::color::Rgb;

/// Values a mapping can produce.
pub trait Interpolate: Copy {
    fn interpolate(from: Self, to: Self, t: f64) -> Self;
}

impl Interpolate for f64 {
    fn interpolate(from: Self, to: Self, t: f64) -> Self {
        from + (to - from) * t
    }
}

impl Interpolate for Rgb {
    fn interpolate(from: Self, to: Self, t: f64) -> Self {
        from.lerp(to, t)
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum MappingError {
    #[error("a mapping needs at least one breakpoint")]
    Empty,
    #[error("breakpoint {index} ({value}) is lower than the one before it")]
    Decreasing { index: usize, value: f64 },
    #[error("breakpoint {index} is not a finite number")]
    NotFinite { index: usize },
    #[error("domain has {domain} breakpoints but range has {range} outputs")]
    LengthMismatch { domain: usize, range: usize },
}

/// Direction of an `f64` mapping's outputs across its domain.
#[cfg(test)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Increasing,
    Decreasing,
    Constant,
    Mixed,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MotionMapping<T> {
    points: Vec<(f64, T)>,
}

impl<T: Interpolate> MotionMapping<T> {
    /// Build from `(breakpoint, output)` pairs.  Breakpoints must be finite
    /// and non-decreasing.
    pub fn new(points: Vec<(f64, T)>) -> Result<Self, MappingError> {
        if points.is_empty() {
            return Err(MappingError::Empty);
        }
        for (index, &(x, _)) in points.iter().enumerate() {
            if !x.is_finite() {
                return Err(MappingError::NotFinite { index });
            }
            if index > 0 && x < points[index - 1].0 {
                return Err(MappingError::Decreasing { index, value: x });
            }
        }
        Ok(Self { points })
    }

    /// Framer-style constructor: parallel domain and range slices.
    pub fn from_slices(domain: &[f64], range: &[T]) -> Result<Self, MappingError> {
        if domain.len() != range.len() {
            return Err(MappingError::LengthMismatch {
                domain: domain.len(),
                range: range.len(),
            });
        }
        Self::new(domain.iter().copied().zip(range.iter().copied()).collect())
    }

    /// Two-point mapping `[d0, d1] → [r0, r1]`.
    pub fn linear(domain: (f64, f64), range: (T, T)) -> Result<Self, MappingError> {
        Self::new(vec![(domain.0, range.0), (domain.1, range.1)])
    }

    /// Evaluate at `x`.
    pub fn eval(&self, x: f64) -> T {
        let first = self.points[0];
        let last = self.points[self.points.len() - 1];
        if x.is_nan() || x <= first.0 {
            return first.1;
        }
        if x >= last.0 {
            return last.1;
        }

        // First segment whose right breakpoint is beyond x.  A repeated
        // breakpoint yields a zero-width segment that is skipped, which
        // makes the output step at that point.
        let seg = self.points.partition_point(|&(bx, _)| bx <= x);
        let (x0, y0) = self.points[seg - 1];
        let (x1, y1) = self.points[seg];
        let span = x1 - x0;
        if span <= 0.0 {
            return y1;
        }
        T::interpolate(y0, y1, (x - x0) / span)
    }

    /// Output at the start of the domain (the "at rest" value).
    pub fn rest(&self) -> T {
        self.points[0].1
    }
}

#[cfg(test)]
impl MotionMapping<f64> {
    pub fn direction(&self) -> Direction {
        let mut up = false;
        let mut down = false;
        for pair in self.points.windows(2) {
            let (a, b) = (pair[0].1, pair[1].1);
            if b > a {
                up = true;
            } else if b < a {
                down = true;
            }
        }
        match (up, down) {
            (true, false) => Direction::Increasing,
            (false, true) => Direction::Decreasing,
            (false, false) => Direction::Constant,
            (true, true) => Direction::Mixed,
        }
    }
}
