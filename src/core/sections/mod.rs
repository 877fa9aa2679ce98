//! Per-section motion state.
//!
//! Each section owns its tracker, mappings, predicates and cycles
//! outright.  The page stacks sections vertically and forwards every
//! scroll, resize and tick notification to each one in turn.

use std::time::Duration;

use thiserror::Error;

use super::geometry::{Rect, Viewport};
use super::mapping::MappingError;
use super::progress::ParseOffsetError;

pub mod catalogue;
pub mod day_night;
pub mod footer;
pub mod gallery;
pub mod hero;

pub use catalogue::{CatalogueParams, CatalogueSection};
pub use day_night::{DayNightMode, DayNightParams, DayNightSection};
pub use footer::{FooterParams, FooterSection};
pub use gallery::{GalleryParams, GallerySection};
pub use hero::{HeroParams, HeroSection};

/// A section's declared motion could not be built.
#[derive(Debug, Error, PartialEq)]
pub enum SectionError {
    #[error("invalid motion mapping: {0}")]
    Mapping(#[from] MappingError),
    #[error("invalid scroll offset: {0}")]
    Offset(#[from] ParseOffsetError),
}

/// Tunables shared by all sections.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionSettings {
    /// Resolve scroll-linked transforms at rest and skip reveal fades.
    pub reduced_motion: bool,
    pub catalogue_interval: Duration,
    pub day_night_interval: Duration,
    /// Time for the day/night palette blend to cross fully.
    pub day_night_fade: Duration,
}

impl Default for MotionSettings {
    fn default() -> Self {
        Self {
            reduced_motion: false,
            catalogue_interval: Duration::from_millis(3000),
            day_night_interval: Duration::from_millis(6000),
            day_night_fade: Duration::from_millis(600),
        }
    }
}

/// Lifecycle hooks every section implements.
pub trait Section {
    fn name(&self) -> &'static str;

    /// Height in multiples of the viewport height.
    fn height_vh(&self) -> f64;

    /// Place the section.  Called on construction and on every resize.
    fn layout(&mut self, region: Rect, viewport: &Viewport);

    fn region(&self) -> Rect;

    /// Recompute scroll-derived state.
    fn on_scroll(&mut self, viewport: &Viewport);

    /// Advance timers by `dt` of host time.
    fn on_tick(&mut self, dt: Duration);

    fn set_reduced_motion(&mut self, reduced: bool);

    /// Release every timer.  The section is inert afterwards.
    fn teardown(&mut self);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::mapping::MotionMapping;
    use crate::core::progress::ScrollOffset;

    fn offset(start: &str, end: &str) -> Result<ScrollOffset, SectionError> {
        Ok(ScrollOffset::parse(start, end)?)
    }

    #[test]
    fn bad_offset_surfaces_as_a_section_error() {
        let err = offset("top start", "end start").unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid scroll offset: unknown edge \"top\" (expected start, center, end or a number)"
        );
    }

    #[test]
    fn bad_mapping_surfaces_as_a_section_error() {
        let err: SectionError = MotionMapping::<f64>::linear((1.0, 0.0), (0.0, 1.0))
            .unwrap_err()
            .into();
        assert!(matches!(err, SectionError::Mapping(MappingError::Decreasing { index: 1, .. })));
    }

    #[test]
    fn every_section_builds_with_default_settings() {
        let settings = MotionSettings::default();
        assert!(HeroSection::new(false).is_ok());
        assert!(CatalogueSection::new(&settings).is_ok());
        assert!(DayNightSection::new(&settings).is_ok());
        assert!(GallerySection::new(false).is_ok());
        assert!(FooterSection::new(false).is_ok());
    }
}
