//! Day/night: the section palette flips between light and dark on a timer.
//!
//! A manual selection takes control from the timer.  Automatic cycling
//! stays off until the section has left the viewport and come back, so a
//! click is never overwritten by the next tick.  A selection made while
//! the section is off screen holds only until the section next enters.

use std::time::Duration;

use crate::core::color::Rgb;
use crate::core::cyclic::{CyclicPresentation, Toggle};
use crate::core::geometry::{Rect, Viewport};
use crate::core::mapping::MotionMapping;
use crate::core::progress::{Progress, ScrollOffset, ViewportTracker};
use crate::core::reveal::{Reveal, RevealParams};
use crate::core::visibility::{Length, Margin, VisibilityChange, VisibilityPredicate};

use super::{MotionSettings, Section, SectionError};

const SCROLL_OFFSET: (&str, &str) = ("start end", "end start");

pub const DAY_BACKGROUND: Rgb = Rgb::from_hex(0xF2F0E9);
pub const NIGHT_BACKGROUND: Rgb = Rgb::from_hex(0x1A1A18);
pub const DAY_FOREGROUND: Rgb = Rgb::from_hex(0x1A1A18);
pub const NIGHT_FOREGROUND: Rgb = Rgb::from_hex(0xF2F0E9);

/// Who currently controls the flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayNightMode {
    Auto,
    Manual,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DayNightParams {
    pub night: bool,
    pub mode: DayNightMode,
    /// 0 = fully day palette, 1 = fully night palette.
    pub blend: f64,
    pub background: Rgb,
    pub foreground: Rgb,
    pub progress: Progress,
    pub parallax_y: f64,
    pub heading: RevealParams,
}

#[derive(Debug)]
pub struct DayNightSection {
    region: Rect,
    in_view: VisibilityPredicate,
    cycle: CyclicPresentation<Toggle>,
    /// Set by a manual selection; cleared when the section leaves view.
    manual_hold: bool,
    /// The hold was taken off screen and ends on the next entry.
    hold_until_entry: bool,
    blend: f64,
    fade: Duration,
    background: MotionMapping<Rgb>,
    foreground: MotionMapping<Rgb>,
    tracker: ViewportTracker,
    parallax_y: MotionMapping<f64>,
    heading: Reveal,
    reduced_motion: bool,
}

impl DayNightSection {
    pub fn new(settings: &MotionSettings) -> Result<Self, SectionError> {
        let (start, end) = SCROLL_OFFSET;
        Ok(Self {
            region: Rect::default(),
            in_view: VisibilityPredicate::repeat(Margin::uniform(Length::Percent(-20.0))),
            cycle: CyclicPresentation::new(Toggle::default(), settings.day_night_interval),
            manual_hold: false,
            hold_until_entry: false,
            blend: 0.0,
            fade: settings.day_night_fade,
            background: MotionMapping::linear((0.0, 1.0), (DAY_BACKGROUND, NIGHT_BACKGROUND))?,
            foreground: MotionMapping::linear((0.0, 1.0), (DAY_FOREGROUND, NIGHT_FOREGROUND))?,
            tracker: ViewportTracker::new(ScrollOffset::parse(start, end)?),
            parallax_y: MotionMapping::linear((0.0, 1.0), (40.0, -40.0))?,
            heading: Reveal::new(Margin::ZERO, Duration::ZERO, Duration::from_millis(800), 50.0)?,
            reduced_motion: settings.reduced_motion,
        })
    }

    pub fn is_night(&self) -> bool {
        self.cycle.state().get()
    }

    pub fn mode(&self) -> DayNightMode {
        if self.manual_hold {
            DayNightMode::Manual
        } else {
            DayNightMode::Auto
        }
    }

    /// Manual override: set the flag and pause automatic cycling.
    pub fn select(&mut self, night: bool) {
        self.cycle.state_mut().set(night);
        self.cycle.pause();
        self.manual_hold = true;
        self.hold_until_entry = !self.in_view.is_visible();
        tracing::debug!(
            night,
            off_screen = self.hold_until_entry,
            "day/night set manually; auto cycle paused"
        );
    }

    /// Hand control back to the timer without waiting for the section to
    /// leave the viewport.
    pub fn resume_auto(&mut self) {
        if !self.manual_hold {
            return;
        }
        self.manual_hold = false;
        self.hold_until_entry = false;
        if self.in_view.is_visible() {
            self.cycle.set_visible(true);
        }
    }

    pub fn params(&self) -> DayNightParams {
        let blend = self.blend;
        let parallax_y = if self.reduced_motion {
            self.parallax_y.rest()
        } else {
            self.parallax_y.eval(self.tracker.progress().get())
        };
        DayNightParams {
            night: self.is_night(),
            mode: self.mode(),
            blend,
            background: self.background.eval(blend),
            foreground: self.foreground.eval(blend),
            progress: self.tracker.progress(),
            parallax_y,
            heading: self.heading.params(self.reduced_motion),
        }
    }

    fn heading_region(&self) -> Rect {
        let r = self.region;
        Rect::new(r.x, r.y, r.width, r.height * 0.3)
    }

    /// Move the palette blend toward the current flag.
    fn step_blend(&mut self, dt: Duration) {
        let target = if self.is_night() { 1.0 } else { 0.0 };
        if self.reduced_motion {
            self.blend = target;
            return;
        }
        let step = dt.as_secs_f64() / self.fade.as_secs_f64().max(f64::EPSILON);
        self.blend = if self.blend < target {
            (self.blend + step).min(target)
        } else {
            (self.blend - step).max(target)
        };
    }
}

impl Section for DayNightSection {
    fn name(&self) -> &'static str {
        "day-night"
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
        match self.in_view.update(&self.region, viewport) {
            VisibilityChange::Entered => {
                if self.hold_until_entry {
                    self.manual_hold = false;
                    self.hold_until_entry = false;
                }
                if !self.manual_hold {
                    self.cycle.set_visible(true);
                }
                tracing::debug!(section = self.name(), manual = self.manual_hold, "entered view");
            }
            VisibilityChange::Left => {
                self.cycle.set_visible(false);
                self.manual_hold = false;
                self.hold_until_entry = false;
                tracing::debug!(section = self.name(), "left view; cycle disarmed");
            }
            VisibilityChange::Unchanged => {}
        }
        self.tracker.update(&self.region, viewport);
        let heading = self.heading_region();
        self.heading.update(&heading, viewport);
    }

    fn on_tick(&mut self, dt: Duration) {
        self.cycle.advance(dt);
        self.step_blend(dt);
        self.heading.advance(dt);
    }

    fn set_reduced_motion(&mut self, reduced: bool) {
        self.reduced_motion = reduced;
    }

    fn teardown(&mut self) {
        self.cycle.teardown();
    }
}
