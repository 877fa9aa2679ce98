//! Viewport tracker: normalised scroll progress of a region.
//!
//! Progress is 0 when the `start` intersection occurs and 1 when the `end`
//! intersection occurs.  An intersection is a pair of edges, one on the
//! tracked region and one on the viewport, e.g. `"end start"` means "the
//! region's bottom edge touches the viewport's top edge".

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use super::geometry::{Rect, Viewport};

// ───────────────────────────────────────── progress ──────────

/// A scroll progress value, always within `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Progress(f64);

impl Progress {
    pub const ZERO: Progress = Progress(0.0);

    /// Clamp `value` into `[0, 1]`.  NaN becomes 0.
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self::ZERO;
        }
        Self(value.clamp(0.0, 1.0))
    }

    pub fn get(self) -> f64 {
        self.0
    }
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}", self.0)
    }
}

// ───────────────────────────────────────── anchors ───────────

/// A point along an element's vertical extent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Edge {
    Start,
    Center,
    End,
    /// Arbitrary fraction of the height (0 = top, 1 = bottom).
    Fraction(f64),
}

impl Edge {
    pub fn fraction(self) -> f64 {
        match self {
            Edge::Start => 0.0,
            Edge::Center => 0.5,
            Edge::End => 1.0,
            Edge::Fraction(f) => f,
        }
    }
}

impl FromStr for Edge {
    type Err = ParseOffsetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "start" => Ok(Edge::Start),
            "center" => Ok(Edge::Center),
            "end" => Ok(Edge::End),
            other => other
                .parse::<f64>()
                .ok()
                .filter(|f| f.is_finite())
                .map(Edge::Fraction)
                .ok_or_else(|| ParseOffsetError::UnknownEdge(other.to_string())),
        }
    }
}

/// "`target` edge of the region meets `container` edge of the viewport".
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Intersection {
    pub target: Edge,
    pub container: Edge,
}

impl Intersection {
    pub const fn new(target: Edge, container: Edge) -> Self {
        Self { target, container }
    }

    /// The scroll offset at which this intersection happens.
    fn scroll_offset(&self, region: &Rect, viewport: &Viewport) -> f64 {
        region.top() + self.target.fraction() * region.height
            - self.container.fraction() * viewport.height
    }
}

impl FromStr for Intersection {
    type Err = ParseOffsetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        let (Some(target), Some(container), None) = (parts.next(), parts.next(), parts.next())
        else {
            return Err(ParseOffsetError::Malformed(s.to_string()));
        };
        Ok(Self::new(target.parse()?, container.parse()?))
    }
}

/// The pair of intersections that define progress 0 and progress 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollOffset {
    pub start: Intersection,
    pub end: Intersection,
}

impl ScrollOffset {
    /// Build from framer-style strings, e.g. `("start end", "end start")`.
    pub fn parse(start: &str, end: &str) -> Result<Self, ParseOffsetError> {
        Ok(Self {
            start: start.parse()?,
            end: end.parse()?,
        })
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ParseOffsetError {
    #[error("expected \"<target-edge> <container-edge>\", got {0:?}")]
    Malformed(String),
    #[error("unknown edge {0:?} (expected start, center, end or a number)")]
    UnknownEdge(String),
}

// ───────────────────────────────────────── tracker ───────────

/// Tracks one region's progress through the viewport.
#[derive(Debug, Clone)]
pub struct ViewportTracker {
    offset: ScrollOffset,
    progress: Progress,
}

impl ViewportTracker {
    pub fn new(offset: ScrollOffset) -> Self {
        Self {
            offset,
            progress: Progress::ZERO,
        }
    }

    /// Recompute progress for the region's current position.
    ///
    /// When the start and end offsets coincide the ratio is undefined and
    /// the previous value is kept.
    pub fn update(&mut self, region: &Rect, viewport: &Viewport) -> Progress {
        let start = self.offset.start.scroll_offset(region, viewport);
        let end = self.offset.end.scroll_offset(region, viewport);
        let span = end - start;
        if span.abs() < f64::EPSILON {
            return self.progress;
        }
        self.progress = Progress::new((viewport.scroll_y - start) / span);
        self.progress
    }

    pub fn progress(&self) -> Progress {
        self.progress
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ONE: Progress = Progress(1.0);

    fn hero_region() -> Rect {
        Rect::new(0.0, 0.0, 80.0, 24.0)
    }

    fn leaving() -> ScrollOffset {
        ScrollOffset::parse("start start", "end start").unwrap()
    }

    fn passing() -> ScrollOffset {
        ScrollOffset::parse("start end", "end start").unwrap()
    }

    #[test]
    fn leaving_offset_runs_from_top_to_bottom_edge() {
        let mut t = ViewportTracker::new(leaving());
        let vp = Viewport::new(0.0, 80.0, 24.0);
        assert_eq!(t.update(&hero_region(), &vp), Progress::ZERO);
        assert_eq!(t.update(&hero_region(), &vp.scrolled_to(12.0)).get(), 0.5);
        assert_eq!(t.update(&hero_region(), &vp.scrolled_to(24.0)), ONE);
        // Past the end clamps.
        assert_eq!(t.update(&hero_region(), &vp.scrolled_to(100.0)), ONE);
    }

    #[test]
    fn passing_offset_spans_region_plus_viewport() {
        let region = Rect::new(0.0, 100.0, 80.0, 20.0);
        let mut t = ViewportTracker::new(passing());
        let vp = Viewport::new(0.0, 80.0, 20.0);
        // Starts when region top (100) meets viewport bottom: scroll = 80.
        assert_eq!(t.update(&region, &vp.scrolled_to(80.0)), Progress::ZERO);
        // Ends at region bottom (120) meets viewport top: scroll = 120.
        assert_eq!(t.update(&region, &vp.scrolled_to(100.0)).get(), 0.5);
        assert_eq!(t.update(&region, &vp.scrolled_to(120.0)), ONE);
    }

    #[test]
    fn scrolling_back_decreases_progress() {
        let mut t = ViewportTracker::new(leaving());
        let vp = Viewport::new(0.0, 80.0, 24.0);
        let forward = t.update(&hero_region(), &vp.scrolled_to(18.0));
        let back = t.update(&hero_region(), &vp.scrolled_to(6.0));
        assert!(back < forward);
    }

    #[test]
    fn zero_extent_holds_previous_value() {
        let mut t = ViewportTracker::new(leaving());
        let vp = Viewport::new(0.0, 80.0, 24.0);
        let before = t.update(&hero_region(), &vp.scrolled_to(6.0));

        let collapsed = Rect::new(0.0, 0.0, 80.0, 0.0);
        assert_eq!(t.update(&collapsed, &vp.scrolled_to(20.0)), before);
        assert_eq!(t.progress(), before);
    }

    #[test]
    fn parses_framer_style_offsets() {
        let offset = ScrollOffset::parse("start end", "end start").unwrap();
        assert_eq!(offset.start, Intersection::new(Edge::Start, Edge::End));
        assert_eq!(offset.end, Intersection::new(Edge::End, Edge::Start));

        let custom: Intersection = "0.25 center".parse().unwrap();
        assert_eq!(custom.target, Edge::Fraction(0.25));
        assert_eq!(custom.container, Edge::Center);
    }

    #[test]
    fn rejects_malformed_offsets() {
        assert_eq!(
            "start".parse::<Intersection>(),
            Err(ParseOffsetError::Malformed("start".into()))
        );
        assert_eq!(
            "top start".parse::<Intersection>(),
            Err(ParseOffsetError::UnknownEdge("top".into()))
        );
    }

    #[test]
    fn progress_clamps_and_rejects_nan() {
        assert_eq!(Progress::new(-0.3), Progress::ZERO);
        assert_eq!(Progress::new(7.0), ONE);
        assert_eq!(Progress::new(f64::NAN), Progress::ZERO);
    }
}
