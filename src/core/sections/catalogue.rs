//! Catalogue: a grid of cards with a rotating highlight.
//!
//! The highlight advances every `catalogue_interval` while at least part
//! of the section sits inside the viewport shrunk by 20% on each edge.

use std::time::Duration;

use crate::core::content::{CatalogueItem, CATALOGUE};
use crate::core::cyclic::{CyclicIndex, CyclicPresentation};
use crate::core::geometry::{Rect, Viewport};
use crate::core::reveal::{Reveal, RevealParams};
use crate::core::visibility::{Length, Margin, VisibilityChange, VisibilityPredicate};

use super::{MotionSettings, Section, SectionError};

const COLUMNS: usize = 5;
const ACTIVE_SCALE: f64 = 1.05;
/// Cards start at this scale and grow to 1 as they reveal.
const ENTRANCE_SCALE: f64 = 0.9;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardParams {
    pub item: &'static CatalogueItem,
    /// Grid cell in document space, before scaling.
    pub rect: Rect,
    pub active: bool,
    /// Entrance scale × highlight scale.
    pub scale: f64,
    pub reveal: RevealParams,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CatalogueParams {
    pub active_index: usize,
    /// Whether the highlight is currently cycling.
    pub cycling: bool,
    pub heading: RevealParams,
    pub cards: Vec<CardParams>,
}

#[derive(Debug)]
pub struct CatalogueSection {
    region: Rect,
    in_view: VisibilityPredicate,
    highlight: CyclicPresentation<CyclicIndex>,
    heading: Reveal,
    heading_region: Rect,
    cards: Vec<(Rect, Reveal)>,
    reduced_motion: bool,
}

impl CatalogueSection {
    pub fn new(settings: &MotionSettings) -> Result<Self, SectionError> {
        let cards = (0..CATALOGUE.len())
            .map(|i| -> Result<(Rect, Reveal), SectionError> {
                let reveal = Reveal::new(
                    Margin::uniform(Length::Px(-50.0)),
                    Duration::from_millis(50) * i as u32,
                    Duration::from_millis(500),
                    0.0,
                )?;
                Ok((Rect::default(), reveal))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            region: Rect::default(),
            in_view: VisibilityPredicate::repeat(Margin::uniform(Length::Percent(-20.0))),
            highlight: CyclicPresentation::new(
                CyclicIndex::new(CATALOGUE.len()),
                settings.catalogue_interval,
            ),
            heading: Reveal::new(Margin::ZERO, Duration::ZERO, Duration::from_millis(500), 30.0)?,
            heading_region: Rect::default(),
            cards,
            reduced_motion: settings.reduced_motion,
        })
    }

    pub fn active_index(&self) -> usize {
        self.highlight.state().get()
    }

    pub fn params(&self) -> CatalogueParams {
        let active_index = self.active_index();
        let cards = self
            .cards
            .iter()
            .zip(CATALOGUE)
            .enumerate()
            .map(|(i, ((rect, reveal), item))| {
                let reveal = reveal.params(self.reduced_motion);
                let active = i == active_index;
                let entrance = ENTRANCE_SCALE + (1.0 - ENTRANCE_SCALE) * reveal.opacity;
                let highlight = if active { ACTIVE_SCALE } else { 1.0 };
                CardParams {
                    item,
                    rect: *rect,
                    active,
                    scale: entrance * highlight,
                    reveal,
                }
            })
            .collect();
        CatalogueParams {
            active_index,
            cycling: self.highlight.is_running(),
            heading: self.heading.params(self.reduced_motion),
            cards,
        }
    }

    /// Grid placement: heading in the top fifth, cards below in rows of five.
    fn place_children(&mut self) {
        let r = self.region;
        self.heading_region = Rect::new(r.x, r.y, r.width, r.height * 0.2);

        let rows = self.cards.len().div_ceil(COLUMNS).max(1);
        let grid_top = r.y + r.height * 0.25;
        let grid_h = r.height * 0.7;
        let cell_w = r.width / COLUMNS as f64;
        let cell_h = grid_h / rows as f64;
        for (i, (rect, _)) in self.cards.iter_mut().enumerate() {
            let (row, col) = (i / COLUMNS, i % COLUMNS);
            *rect = Rect::new(
                r.x + col as f64 * cell_w,
                grid_top + row as f64 * cell_h,
                cell_w,
                cell_h,
            );
        }
    }
}

impl Section for CatalogueSection {
    fn name(&self) -> &'static str {
        "catalogue"
    }

    fn height_vh(&self) -> f64 {
        1.5
    }

    fn layout(&mut self, region: Rect, viewport: &Viewport) {
        self.region = region;
        self.place_children();
        self.on_scroll(viewport);
    }

    fn region(&self) -> Rect {
        self.region
    }

    fn on_scroll(&mut self, viewport: &Viewport) {
        match self.in_view.update(&self.region, viewport) {
            VisibilityChange::Entered => {
                tracing::debug!(section = self.name(), "entered view; highlight armed");
                self.highlight.set_visible(true);
            }
            VisibilityChange::Left => {
                tracing::debug!(section = self.name(), "left view; highlight disarmed");
                self.highlight.set_visible(false);
            }
            VisibilityChange::Unchanged => {}
        }
        self.heading.update(&self.heading_region, viewport);
        for (rect, reveal) in &mut self.cards {
            reveal.update(rect, viewport);
        }
    }

    fn on_tick(&mut self, dt: Duration) {
        self.highlight.advance(dt);
        self.heading.advance(dt);
        for (_, reveal) in &mut self.cards {
            reveal.advance(dt);
        }
    }

    fn set_reduced_motion(&mut self, reduced: bool) {
        self.reduced_motion = reduced;
    }

    fn teardown(&mut self) {
        self.highlight.teardown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VH: f64 = 800.0;

    /// Catalogue placed directly below a one-viewport hero.
    fn laid_out() -> (CatalogueSection, Viewport) {
        let vp = Viewport::new(0.0, 1280.0, VH);
        let mut s = CatalogueSection::new(&MotionSettings::default()).unwrap();
        s.layout(Rect::new(0.0, VH, 1280.0, VH * 1.5), &vp);
        (s, vp)
    }

    #[test]
    fn highlight_waits_for_the_section() {
        let (mut s, _) = laid_out();
        s.on_tick(Duration::from_secs(10));
        assert_eq!(s.active_index(), 0);
        assert!(!s.params().cycling);
    }

    #[test]
    fn highlight_needs_twenty_percent_inset() {
        let (mut s, vp) = laid_out();
        // 100px of overlap is still inside the bottom 20% (160px) band.
        s.on_scroll(&vp.scrolled_to(100.0));
        assert!(!s.params().cycling);

        s.on_scroll(&vp.scrolled_to(300.0));
        assert!(s.params().cycling);
        s.on_tick(Duration::from_millis(3000));
        assert_eq!(s.active_index(), 1);
    }

    #[test]
    fn highlight_wraps_over_every_card() {
        let (mut s, vp) = laid_out();
        s.on_scroll(&vp.scrolled_to(VH));
        for _ in 0..CATALOGUE.len() {
            s.on_tick(Duration::from_millis(3000));
        }
        assert_eq!(s.active_index(), 0);
    }

    #[test]
    fn leaving_freezes_and_reentering_restarts_interval() {
        let (mut s, vp) = laid_out();
        s.on_scroll(&vp.scrolled_to(VH));
        s.on_tick(Duration::from_millis(2500));

        s.on_scroll(&vp.scrolled_to(0.0));
        s.on_tick(Duration::from_secs(30));
        assert_eq!(s.active_index(), 0);

        s.on_scroll(&vp.scrolled_to(VH));
        // The earlier 2.5s must not carry over.
        s.on_tick(Duration::from_millis(600));
        assert_eq!(s.active_index(), 0);
        s.on_tick(Duration::from_millis(2400));
        assert_eq!(s.active_index(), 1);
    }

    #[test]
    fn active_card_is_scaled_up() {
        let (mut s, vp) = laid_out();
        s.on_scroll(&vp.scrolled_to(VH));
        s.on_tick(Duration::from_secs(2));
        let params = s.params();
        let active = &params.cards[0];
        assert!(active.active);
        assert!((active.scale - ACTIVE_SCALE).abs() < 1e-9);
        assert!((params.cards[1].scale - 1.0).abs() < 1e-9);
    }

    #[test]
    fn cards_reveal_once_with_stagger() {
        let (mut s, vp) = laid_out();
        s.on_scroll(&vp.scrolled_to(VH));
        s.on_tick(Duration::from_millis(250));
        let cards = s.params().cards;
        assert!(cards[0].reveal.opacity > cards[4].reveal.opacity);

        s.on_tick(Duration::from_secs(2));
        s.on_scroll(&vp.scrolled_to(0.0));
        assert!(s.params().cards.iter().take(5).all(|c| c.reveal.opacity == 1.0));
    }

    #[test]
    fn teardown_stops_the_highlight() {
        let (mut s, vp) = laid_out();
        s.on_scroll(&vp.scrolled_to(VH));
        s.teardown();
        s.on_scroll(&vp.scrolled_to(0.0));
        s.on_scroll(&vp.scrolled_to(VH));
        s.on_tick(Duration::from_secs(10));
        assert_eq!(s.active_index(), 0);
        assert!(!s.params().cycling);
    }
}
