//! Hero: the brand name splits apart and fades as the section scrolls away.

use std::time::Duration;

use crate::core::geometry::{Rect, Viewport};
use crate::core::mapping::MotionMapping;
use crate::core::progress::{Progress, ScrollOffset, ViewportTracker};

use super::{Section, SectionError};

/// Progress runs while the hero scrolls off the top of the viewport.
const SCROLL_OFFSET: (&str, &str) = ("start start", "end start");

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeroParams {
    pub progress: Progress,
    /// Downward drift of the centre image, px.
    pub object_y: f64,
    /// Clockwise rotation of the centre image, degrees.
    pub object_rotate: f64,
    pub text_left_x: f64,
    pub text_right_x: f64,
    pub opacity: f64,
}

#[derive(Debug, Clone)]
pub struct HeroSection {
    region: Rect,
    tracker: ViewportTracker,
    object_y: MotionMapping<f64>,
    object_rotate: MotionMapping<f64>,
    text_left_x: MotionMapping<f64>,
    text_right_x: MotionMapping<f64>,
    opacity: MotionMapping<f64>,
    reduced_motion: bool,
}

impl HeroSection {
    pub fn new(reduced_motion: bool) -> Result<Self, SectionError> {
        let (start, end) = SCROLL_OFFSET;
        Ok(Self {
            region: Rect::default(),
            tracker: ViewportTracker::new(ScrollOffset::parse(start, end)?),
            object_y: MotionMapping::from_slices(&[0.0, 1.0], &[0.0, 150.0])?,
            object_rotate: MotionMapping::from_slices(&[0.0, 1.0], &[0.0, 15.0])?,
            text_left_x: MotionMapping::from_slices(&[0.0, 1.0], &[0.0, -100.0])?,
            text_right_x: MotionMapping::from_slices(&[0.0, 1.0], &[0.0, 100.0])?,
            // Fully faded before the section has completely left.
            opacity: MotionMapping::from_slices(&[0.0, 0.8], &[1.0, 0.0])?,
            reduced_motion,
        })
    }

    pub fn params(&self) -> HeroParams {
        let progress = self.tracker.progress();
        let at = |m: &MotionMapping<f64>| {
            if self.reduced_motion {
                m.rest()
            } else {
                m.eval(progress.get())
            }
        };
        HeroParams {
            progress,
            object_y: at(&self.object_y),
            object_rotate: at(&self.object_rotate),
            text_left_x: at(&self.text_left_x),
            text_right_x: at(&self.text_right_x),
            opacity: at(&self.opacity),
        }
    }
}

impl Section for HeroSection {
    fn name(&self) -> &'static str {
        "hero"
    }

    fn height_vh(&self) -> f64 {
        1.0
    }

    fn layout(&mut self, region: Rect, viewport: &Viewport) {
        self.region = region;
        self.on_scroll(viewport);
    }

    fn region(&self) -> Rect {
        self.region
    }

    fn on_scroll(&mut self, viewport: &Viewport) {
        self.tracker.update(&self.region, viewport);
    }

    fn on_tick(&mut self, _dt: Duration) {}

    fn set_reduced_motion(&mut self, reduced: bool) {
        self.reduced_motion = reduced;
    }

    fn teardown(&mut self) {}
}
