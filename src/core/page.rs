//! The page: sections stacked top to bottom under a fixed header.
//!
//! The page owns the viewport and forwards every host notification to each
//! section.  Sections never see one another.

use std::time::Duration;

use super::geometry::{Rect, Viewport};
use super::sections::{
    CatalogueParams, CatalogueSection, DayNightParams, DayNightSection, FooterParams,
    FooterSection, GalleryParams, GallerySection, HeroParams, HeroSection, MotionSettings,
    Section, SectionError,
};
use super::signup::NewsletterForm;

/// Scroll distance after which the header switches to its solid style.
pub const HEADER_SCROLL_THRESHOLD: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HeaderParams {
    pub scrolled: bool,
}

#[derive(Debug)]
pub struct Page {
    viewport: Viewport,
    height: f64,
    header: HeaderParams,
    settings: MotionSettings,
    hero: HeroSection,
    catalogue: CatalogueSection,
    day_night: DayNightSection,
    gallery: GallerySection,
    footer: FooterSection,
    torn_down: bool,
}

impl Page {
    pub fn new(settings: MotionSettings, width: f64, height: f64) -> Result<Self, SectionError> {
        let mut page = Self {
            viewport: Viewport::new(0.0, width, height),
            height: 0.0,
            header: HeaderParams::default(),
            settings,
            hero: HeroSection::new(settings.reduced_motion)?,
            catalogue: CatalogueSection::new(&settings)?,
            day_night: DayNightSection::new(&settings)?,
            gallery: GallerySection::new(settings.reduced_motion)?,
            footer: FooterSection::new(settings.reduced_motion)?,
            torn_down: false,
        };
        page.layout();
        Ok(page)
    }

    fn sections_mut(&mut self) -> [&mut dyn Section; 5] {
        [
            &mut self.hero,
            &mut self.catalogue,
            &mut self.day_night,
            &mut self.gallery,
            &mut self.footer,
        ]
    }

    fn sections(&self) -> [&dyn Section; 5] {
        [
            &self.hero,
            &self.catalogue,
            &self.day_night,
            &self.gallery,
            &self.footer,
        ]
    }

    /// Stack sections and re-place their children for the current size.
    fn layout(&mut self) {
        let vp = self.viewport;
        let mut y = 0.0;
        for section in self.sections_mut() {
            let h = section.height_vh() * vp.height;
            section.layout(Rect::new(0.0, y, vp.width, h), &vp);
            y += h;
        }
        self.height = y;
        self.viewport.scroll_y = self.viewport.scroll_y.clamp(0.0, self.max_scroll());
        self.notify_scroll();
    }

    fn notify_scroll(&mut self) {
        let vp = self.viewport;
        self.header.scrolled = vp.scroll_y > HEADER_SCROLL_THRESHOLD;
        for section in self.sections_mut() {
            section.on_scroll(&vp);
        }
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.viewport.width = width.max(0.0);
        self.viewport.height = height.max(0.0);
        self.layout();
    }

    /// Scroll to an absolute offset, clamped to the document.
    pub fn scroll_to(&mut self, y: f64) {
        let y = if y.is_finite() { y } else { 0.0 };
        let y = y.clamp(0.0, self.max_scroll());
        if y == self.viewport.scroll_y {
            return;
        }
        self.viewport.scroll_y = y;
        self.notify_scroll();
    }

    /// Host timer tick.  No-op after teardown.
    pub fn tick(&mut self, dt: Duration) {
        if self.torn_down {
            return;
        }
        for section in self.sections_mut() {
            section.on_tick(dt);
        }
    }

    pub fn set_reduced_motion(&mut self, reduced: bool) {
        self.settings.reduced_motion = reduced;
        for section in self.sections_mut() {
            section.set_reduced_motion(reduced);
        }
    }

    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        for section in self.sections_mut() {
            section.teardown();
        }
        self.torn_down = true;
        tracing::debug!("page torn down");
    }

    pub fn max_scroll(&self) -> f64 {
        (self.height - self.viewport.height).max(0.0)
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn settings(&self) -> &MotionSettings {
        &self.settings
    }

    /// `(name, region)` for every section, top to bottom.
    pub fn section_regions(&self) -> Vec<(&'static str, Rect)> {
        self.sections()
            .iter()
            .map(|s| (s.name(), s.region()))
            .collect()
    }

    pub fn header(&self) -> HeaderParams {
        self.header
    }

    pub fn hero(&self) -> HeroParams {
        self.hero.params()
    }

    pub fn catalogue(&self) -> CatalogueParams {
        self.catalogue.params()
    }

    pub fn day_night(&self) -> DayNightParams {
        self.day_night.params()
    }

    pub fn gallery(&self) -> GalleryParams {
        self.gallery.params()
    }

    pub fn footer(&self) -> FooterParams {
        self.footer.params()
    }

    /// Manual day/night selection.
    pub fn select_night(&mut self, night: bool) {
        self.day_night.select(night);
    }

    pub fn resume_day_night(&mut self) {
        self.day_night.resume_auto();
    }

    pub fn newsletter_mut(&mut self) -> &mut NewsletterForm {
        self.footer.newsletter_mut()
    }
}

impl Drop for Page {
    fn drop(&mut self) {
        self.teardown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VW: f64 = 1280.0;
    const VH: f64 = 800.0;

    fn page() -> Page {
        Page::new(MotionSettings::default(), VW, VH).unwrap()
    }

    #[test]
    fn sections_stack_without_gaps() {
        let p = page();
        let regions = p.section_regions();
        let names: Vec<_> = regions.iter().map(|(n, _)| *n).collect();
        assert_eq!(names, ["hero", "catalogue", "day-night", "gallery", "footer"]);
        for pair in regions.windows(2) {
            assert_eq!(pair[0].1.bottom(), pair[1].1.top());
        }
        assert!((p.max_scroll() - VH * 4.7).abs() < 1e-6);
    }

    #[test]
    fn scroll_is_clamped_to_the_document() {
        let mut p = page();
        p.scroll_to(-50.0);
        assert_eq!(p.viewport().scroll_y, 0.0);
        p.scroll_to(1e9);
        assert_eq!(p.viewport().scroll_y, p.max_scroll());
        p.scroll_to(f64::NAN);
        assert_eq!(p.viewport().scroll_y, 0.0);
    }

    #[test]
    fn header_turns_solid_past_threshold() {
        let mut p = page();
        assert!(!p.header().scrolled);
        p.scroll_to(HEADER_SCROLL_THRESHOLD);
        assert!(!p.header().scrolled);
        p.scroll_to(HEADER_SCROLL_THRESHOLD + 1.0);
        assert!(p.header().scrolled);
    }

    #[test]
    fn hero_and_catalogue_respond_independently() {
        let mut p = page();
        p.scroll_to(VH * 0.5);
        assert_eq!(p.hero().progress.get(), 0.5);
        p.tick(Duration::from_secs(3));
        assert_eq!(p.catalogue().active_index, 1);
        // Day/night is still below the fold and has not toggled.
        assert!(!p.day_night().night);
    }

    #[test]
    fn resize_keeps_relative_progress() {
        let mut p = page();
        p.scroll_to(VH * 0.5);
        p.resize(VW, VH * 2.0);
        assert_eq!(p.viewport().height, VH * 2.0);
        assert_eq!(p.hero().progress.get(), 0.25);
    }

    #[test]
    fn toggling_reduced_motion_reaches_every_section() {
        let mut p = page();
        p.scroll_to(VH * 0.5);
        p.set_reduced_motion(true);
        assert!(p.settings().reduced_motion);
        assert_eq!(p.hero().object_y, 0.0);
        assert_eq!(p.footer().heading, crate::core::reveal::RevealParams::SHOWN);
    }

    #[test]
    fn newsletter_form_is_reachable_from_the_footer() {
        let mut p = page();
        p.newsletter_mut().push('a');
        assert_eq!(p.footer().newsletter.email(), "a");
    }

    #[test]
    fn teardown_silences_all_timers() {
        let mut p = page();
        p.scroll_to(VH);
        p.teardown();
        p.tick(Duration::from_secs(30));
        assert_eq!(p.catalogue().active_index, 0);
        assert!(!p.catalogue().cycling);
    }
}
