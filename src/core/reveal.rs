//! One-shot reveal: fades an element in the first time it scrolls into view.
//!
//! The trigger is a `Once` visibility predicate; the fade itself is a
//! time-driven tween fed by host ticks, with an optional stagger delay.

use std::time::Duration;

use super::geometry::{Rect, Viewport};
use super::mapping::{MappingError, MotionMapping};
use super::visibility::{Margin, VisibilityChange, VisibilityPredicate};

#[derive(Debug, Clone)]
pub struct Reveal {
    trigger: VisibilityPredicate,
    delay: Duration,
    duration: Duration,
    /// Time since the trigger fired; `None` until then.
    since: Option<Duration>,
    opacity: MotionMapping<f64>,
    offset_y: MotionMapping<f64>,
}

/// Presentation values for a revealing element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealParams {
    pub opacity: f64,
    /// Vertical displacement from the resting position.
    pub offset_y: f64,
}

impl RevealParams {
    pub const SHOWN: RevealParams = RevealParams {
        opacity: 1.0,
        offset_y: 0.0,
    };
}

impl Reveal {
    /// `rise` is how far below its rest position the element starts.
    pub fn new(
        margin: Margin,
        delay: Duration,
        duration: Duration,
        rise: f64,
    ) -> Result<Self, MappingError> {
        Ok(Self {
            trigger: VisibilityPredicate::once(margin),
            delay,
            duration: duration.max(Duration::from_millis(1)),
            since: None,
            opacity: MotionMapping::linear((0.0, 1.0), (0.0, 1.0))?,
            offset_y: MotionMapping::linear((0.0, 1.0), (rise, 0.0))?,
        })
    }

    pub fn update(&mut self, region: &Rect, viewport: &Viewport) {
        if self.trigger.update(region, viewport) == VisibilityChange::Entered {
            self.since = Some(Duration::ZERO);
        }
    }

    pub fn advance(&mut self, dt: Duration) {
        if let Some(since) = self.since.as_mut() {
            // Saturate once done so long sessions don't keep growing it.
            *since = (*since + dt).min(self.delay + self.duration);
        }
    }

    /// Tween position in `[0, 1]`, after the stagger delay.
    fn phase(&self) -> f64 {
        match self.since {
            None => 0.0,
            Some(since) => {
                let t = since.saturating_sub(self.delay);
                t.as_secs_f64() / self.duration.as_secs_f64()
            }
        }
    }

    pub fn params(&self, reduced_motion: bool) -> RevealParams {
        if reduced_motion {
            return RevealParams::SHOWN;
        }
        let p = self.phase();
        RevealParams {
            opacity: self.opacity.eval(p),
            offset_y: self.offset_y.eval(p),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card() -> Rect {
        Rect::new(0.0, 150.0, 10.0, 10.0)
    }

    #[test]
    fn hidden_until_triggered_then_fades_in() {
        let mut r = Reveal::new(Margin::ZERO, Duration::ZERO, Duration::from_millis(500), 30.0).unwrap();
        let vp = Viewport::new(0.0, 100.0, 100.0);

        r.update(&card(), &vp);
        r.advance(Duration::from_millis(500));
        assert_eq!(r.params(false), RevealParams { opacity: 0.0, offset_y: 30.0 });

        r.update(&card(), &vp.scrolled_to(100.0));
        r.advance(Duration::from_millis(250));
        let mid = r.params(false);
        assert!((mid.opacity - 0.5).abs() < 1e-9);
        assert!((mid.offset_y - 15.0).abs() < 1e-9);

        r.advance(Duration::from_secs(5));
        assert_eq!(r.params(false), RevealParams::SHOWN);
    }

    #[test]
    fn stays_revealed_after_leaving() {
        let mut r = Reveal::new(Margin::ZERO, Duration::ZERO, Duration::from_millis(100), 10.0).unwrap();
        let vp = Viewport::new(100.0, 100.0, 100.0);
        r.update(&card(), &vp);
        r.advance(Duration::from_millis(100));
        r.update(&card(), &vp.scrolled_to(0.0));
        assert_eq!(r.params(false), RevealParams::SHOWN);
    }

    #[test]
    fn stagger_delay_postpones_fade() {
        let mut r = Reveal::new(
            Margin::ZERO,
            Duration::from_millis(200),
            Duration::from_millis(500),
            0.0,
        )
        .unwrap();
        r.update(&card(), &Viewport::new(100.0, 100.0, 100.0));
        r.advance(Duration::from_millis(150));
        assert_eq!(r.params(false).opacity, 0.0);
        r.advance(Duration::from_millis(300));
        assert!((r.params(false).opacity - 0.5).abs() < 1e-9);
    }

    #[test]
    fn reduced_motion_shows_immediately() {
        let r = Reveal::new(Margin::ZERO, Duration::ZERO, Duration::from_millis(500), 30.0).unwrap();
        assert_eq!(r.params(true), RevealParams::SHOWN);
    }
}
