//! Visibility predicate: "is this region on screen?" with a margin.
//!
//! Margins follow CSS `rootMargin`: positive values grow the effective
//! viewport, negative values shrink it.  A `Once` predicate latches after
//! its first hit and never reports false again.

use std::str::FromStr;

use thiserror::Error;

use super::geometry::{Rect, Viewport};

// ───────────────────────────────────────── margin ────────────

/// A single margin length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Length {
    Px(f64),
    /// Percentage of the viewport dimension on the same axis.
    Percent(f64),
}

impl Length {
    fn resolve(self, basis: f64) -> f64 {
        match self {
            Length::Px(v) => v,
            Length::Percent(p) => basis * p / 100.0,
        }
    }
}

impl FromStr for Length {
    type Err = ParseMarginError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || ParseMarginError::BadLength(s.to_string());
        let parse = |n: &str| n.parse::<f64>().ok().filter(|v| v.is_finite()).ok_or_else(bad);
        if let Some(n) = s.strip_suffix('%') {
            Ok(Length::Percent(parse(n)?))
        } else if let Some(n) = s.strip_suffix("px") {
            Ok(Length::Px(parse(n)?))
        } else if s == "0" {
            Ok(Length::Px(0.0))
        } else {
            Err(bad())
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ParseMarginError {
    #[error("margin needs 1 to 4 values, got {0}")]
    Arity(usize),
    #[error("invalid margin length {0:?} (expected e.g. \"-20%\" or \"50px\")")]
    BadLength(String),
}

/// Per-edge adjustment of the viewport before testing intersection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margin {
    pub top: Length,
    pub right: Length,
    pub bottom: Length,
    pub left: Length,
}

impl Margin {
    pub const ZERO: Margin = Margin::uniform(Length::Px(0.0));

    pub const fn uniform(len: Length) -> Self {
        Self {
            top: len,
            right: len,
            bottom: len,
            left: len,
        }
    }

    /// Effective viewport rectangle with this margin applied.
    fn apply(&self, vp: &Viewport) -> Rect {
        let r = vp.rect();
        let top = r.top() - self.top.resolve(vp.height);
        let bottom = r.bottom() + self.bottom.resolve(vp.height);
        let left = r.left() - self.left.resolve(vp.width);
        let right = r.right() + self.right.resolve(vp.width);
        Rect::new(left, top, right - left, bottom - top)
    }
}

impl Default for Margin {
    fn default() -> Self {
        Self::ZERO
    }
}

impl FromStr for Margin {
    type Err = ParseMarginError;

    /// CSS shorthand: `a`, `v h`, `t h b`, or `t r b l`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let vals = s
            .split_whitespace()
            .map(str::parse::<Length>)
            .collect::<Result<Vec<_>, _>>()?;
        let (top, right, bottom, left) = match vals.as_slice() {
            [a] => (*a, *a, *a, *a),
            [v, h] => (*v, *h, *v, *h),
            [t, h, b] => (*t, *h, *b, *h),
            [t, r, b, l] => (*t, *r, *b, *l),
            other => return Err(ParseMarginError::Arity(other.len())),
        };
        Ok(Self {
            top,
            right,
            bottom,
            left,
        })
    }
}

// ───────────────────────────────────────── predicate ─────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TriggerMode {
    /// Latch true after the first hit (one-shot reveals).
    Once,
    /// Follow the region in and out (cyclic effects).
    #[default]
    Repeat,
}

/// What the last `update` did to the predicate's value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisibilityChange {
    Entered,
    Left,
    Unchanged,
}

#[derive(Debug, Clone)]
pub struct VisibilityPredicate {
    margin: Margin,
    mode: TriggerMode,
    visible: bool,
}

impl VisibilityPredicate {
    pub fn new(margin: Margin, mode: TriggerMode) -> Self {
        Self {
            margin,
            mode,
            visible: false,
        }
    }

    pub fn once(margin: Margin) -> Self {
        Self::new(margin, TriggerMode::Once)
    }

    pub fn repeat(margin: Margin) -> Self {
        Self::new(margin, TriggerMode::Repeat)
    }

    /// Re-test against the current viewport.
    pub fn update(&mut self, region: &Rect, viewport: &Viewport) -> VisibilityChange {
        if self.mode == TriggerMode::Once && self.visible {
            return VisibilityChange::Unchanged;
        }
        let now = intersects(region, &self.margin.apply(viewport));
        let change = match (self.visible, now) {
            (false, true) => VisibilityChange::Entered,
            (true, false) => VisibilityChange::Left,
            _ => VisibilityChange::Unchanged,
        };
        self.visible = now;
        change
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

/// Overlap test.  Sharing an edge counts, as it does for an
/// `IntersectionObserver` with a zero threshold.
fn intersects(region: &Rect, window: &Rect) -> bool {
    let overlap_y = region.bottom().min(window.bottom()) - region.top().max(window.top());
    let overlap_x = region.right().min(window.right()) - region.left().max(window.left());
    overlap_x >= 0.0 && overlap_y >= 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport(scroll_y: f64) -> Viewport {
        Viewport::new(scroll_y, 100.0, 100.0)
    }

    fn section() -> Rect {
        Rect::new(0.0, 200.0, 100.0, 100.0)
    }

    #[test]
    fn repeat_mode_follows_region() {
        let mut p = VisibilityPredicate::repeat(Margin::ZERO);
        assert_eq!(p.update(&section(), &viewport(0.0)), VisibilityChange::Unchanged);
        assert!(!p.is_visible());
        assert_eq!(p.update(&section(), &viewport(150.0)), VisibilityChange::Entered);
        assert!(p.is_visible());
        assert_eq!(p.update(&section(), &viewport(160.0)), VisibilityChange::Unchanged);
        assert_eq!(p.update(&section(), &viewport(400.0)), VisibilityChange::Left);
        assert!(!p.is_visible());
    }

    #[test]
    fn once_mode_latches() {
        let mut p = VisibilityPredicate::once(Margin::ZERO);
        assert_eq!(p.update(&section(), &viewport(150.0)), VisibilityChange::Entered);
        assert_eq!(p.update(&section(), &viewport(400.0)), VisibilityChange::Unchanged);
        assert!(p.is_visible());
        assert_eq!(p.update(&section(), &viewport(0.0)), VisibilityChange::Unchanged);
        assert!(p.is_visible());
    }

    #[test]
    fn touching_edge_counts_as_visible() {
        let mut p = VisibilityPredicate::repeat(Margin::ZERO);
        // Viewport bottom (200) exactly meets section top.
        assert_eq!(p.update(&section(), &viewport(100.0)), VisibilityChange::Entered);
        assert!(p.is_visible());
        // One px further apart and it is gone again.
        assert_eq!(p.update(&section(), &viewport(99.0)), VisibilityChange::Left);
        // Section bottom (300) meeting the viewport top also counts.
        assert_eq!(p.update(&section(), &viewport(300.0)), VisibilityChange::Entered);
    }

    #[test]
    fn negative_percent_margin_shrinks_viewport() {
        let margin: Margin = "-20%".parse().unwrap();
        let mut p = VisibilityPredicate::repeat(margin);
        // 10 rows of overlap, but the bottom 20 rows are trimmed away.
        p.update(&section(), &viewport(110.0));
        assert!(!p.is_visible());
        // 30 rows of overlap leaves 10 inside the shrunken window.
        p.update(&section(), &viewport(130.0));
        assert!(p.is_visible());
    }

    #[test]
    fn positive_px_margin_grows_viewport() {
        let margin: Margin = "50px".parse().unwrap();
        let mut p = VisibilityPredicate::repeat(margin);
        p.update(&section(), &viewport(60.0));
        assert!(p.is_visible());
    }

    #[test]
    fn zero_area_region_counts_when_inside() {
        let mut p = VisibilityPredicate::repeat(Margin::ZERO);
        let marker = Rect::new(10.0, 50.0, 0.0, 0.0);
        p.update(&marker, &viewport(0.0));
        assert!(p.is_visible());
        p.update(&marker, &viewport(60.0));
        assert!(!p.is_visible());
    }

    #[test]
    fn parses_css_shorthand() {
        let m: Margin = "10px -5%".parse().unwrap();
        assert_eq!(m.top, Length::Px(10.0));
        assert_eq!(m.right, Length::Percent(-5.0));
        assert_eq!(m.bottom, Length::Px(10.0));
        assert_eq!(m.left, Length::Percent(-5.0));

        let m: Margin = "1px 2px 3px".parse().unwrap();
        assert_eq!(m.left, Length::Px(2.0));
        assert_eq!(m.bottom, Length::Px(3.0));

        let m: Margin = "0 0 -100px 0".parse().unwrap();
        assert_eq!(m.bottom, Length::Px(-100.0));
    }

    #[test]
    fn rejects_bad_margins() {
        assert_eq!("".parse::<Margin>(), Err(ParseMarginError::Arity(0)));
        assert_eq!(
            "1px 1px 1px 1px 1px".parse::<Margin>(),
            Err(ParseMarginError::Arity(5))
        );
        assert_eq!(
            "20em".parse::<Margin>(),
            Err(ParseMarginError::BadLength("20em".into()))
        );
    }
}
