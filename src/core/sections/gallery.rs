//! Gallery: a horizontal track that slides left as the section passes.

use std::time::Duration;

use crate::core::content::{GalleryItem, GalleryPosition, GALLERY};
use crate::core::geometry::{Rect, Viewport};
use crate::core::mapping::MotionMapping;
use crate::core::progress::{Progress, ScrollOffset, ViewportTracker};
use crate::core::reveal::{Reveal, RevealParams};
use crate::core::visibility::{Length, Margin};

use super::{Section, SectionError};

/// Widths of alternating pieces, fraction of the viewport width.
const WIDE: f64 = 0.30;
const NARROW: f64 = 0.22;
const GAP: f64 = 0.05;

const SCROLL_OFFSET: (&str, &str) = ("start end", "end start");

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GalleryPieceParams {
    pub item: &'static GalleryItem,
    /// Document-space rectangle after the track shift.
    pub rect: Rect,
    pub reveal: RevealParams,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GalleryParams {
    pub progress: Progress,
    /// Track shift as a percentage of the track's own width (0 → -50).
    pub track_x_percent: f64,
    pub track_x: f64,
    pub heading: RevealParams,
    pub pieces: Vec<GalleryPieceParams>,
}

#[derive(Debug)]
struct Piece {
    item: &'static GalleryItem,
    /// Rectangle with the track at rest.
    home: Rect,
    reveal: Reveal,
}

#[derive(Debug)]
pub struct GallerySection {
    region: Rect,
    tracker: ViewportTracker,
    track_x: MotionMapping<f64>,
    track_width: f64,
    heading: Reveal,
    pieces: Vec<Piece>,
    reduced_motion: bool,
}

impl GallerySection {
    pub fn new(reduced_motion: bool) -> Result<Self, SectionError> {
        let pieces = GALLERY
            .iter()
            .enumerate()
            .map(|(i, item)| -> Result<Piece, SectionError> {
                Ok(Piece {
                    item,
                    home: Rect::default(),
                    reveal: Reveal::new(
                        Margin::uniform(Length::Px(-100.0)),
                        Duration::from_millis(100) * i as u32,
                        Duration::from_millis(600),
                        50.0,
                    )?,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        let (start, end) = SCROLL_OFFSET;
        Ok(Self {
            region: Rect::default(),
            tracker: ViewportTracker::new(ScrollOffset::parse(start, end)?),
            track_x: MotionMapping::linear((0.0, 1.0), (0.0, -50.0))?,
            track_width: 0.0,
            heading: Reveal::new(Margin::ZERO, Duration::ZERO, Duration::from_millis(500), 30.0)?,
            pieces,
            reduced_motion,
        })
    }

    fn track_x_percent(&self) -> f64 {
        if self.reduced_motion {
            self.track_x.rest()
        } else {
            self.track_x.eval(self.tracker.progress().get())
        }
    }

    fn track_shift(&self) -> f64 {
        self.track_width * self.track_x_percent() / 100.0
    }

    fn shifted(&self, home: Rect) -> Rect {
        Rect {
            x: home.x + self.track_shift(),
            ..home
        }
    }

    pub fn params(&self) -> GalleryParams {
        GalleryParams {
            progress: self.tracker.progress(),
            track_x_percent: self.track_x_percent(),
            track_x: self.track_shift(),
            heading: self.heading.params(self.reduced_motion),
            pieces: self
                .pieces
                .iter()
                .map(|p| GalleryPieceParams {
                    item: p.item,
                    rect: self.shifted(p.home),
                    reveal: p.reveal.params(self.reduced_motion),
                })
                .collect(),
        }
    }

    fn place_pieces(&mut self, viewport_width: f64) {
        let r = self.region;
        let track_top = r.y + r.height * 0.35;
        let track_h = r.height * 0.55;
        let piece_h = track_h * 0.6;
        let gap = viewport_width * GAP;

        let mut x = r.x + gap;
        for (i, piece) in self.pieces.iter_mut().enumerate() {
            let w = viewport_width * if i % 2 == 0 { WIDE } else { NARROW };
            let drop = match piece.item.position {
                GalleryPosition::Top => 0.0,
                GalleryPosition::Middle => track_h * 0.2,
                GalleryPosition::Bottom => track_h * 0.4,
            };
            piece.home = Rect::new(x, track_top + drop, w, piece_h);
            x += w + gap;
        }
        self.track_width = x - r.x;
    }
}

impl Section for GallerySection {
    fn name(&self) -> &'static str {
        "gallery"
    }

    fn height_vh(&self) -> f64 {
        1.2
    }

    fn layout(&mut self, region: Rect, viewport: &Viewport) {
        self.region = region;
        self.place_pieces(viewport.width);
        self.on_scroll(viewport);
    }

    fn region(&self) -> Rect {
        self.region
    }

    fn on_scroll(&mut self, viewport: &Viewport) {
        self.tracker.update(&self.region, viewport);
        let r = self.region;
        self.heading
            .update(&Rect::new(r.x, r.y, r.width, r.height * 0.25), viewport);

        // Pieces reveal where they are on screen, so the shift matters.
        let shift = self.track_shift();
        for piece in &mut self.pieces {
            let rect = Rect {
                x: piece.home.x + shift,
                ..piece.home
            };
            piece.reveal.update(&rect, viewport);
        }
    }

    fn on_tick(&mut self, dt: Duration) {
        self.heading.advance(dt);
        for piece in &mut self.pieces {
            piece.reveal.advance(dt);
        }
    }

    fn set_reduced_motion(&mut self, reduced: bool) {
        self.reduced_motion = reduced;
    }

    fn teardown(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    const VH: f64 = 800.0;
    const VW: f64 = 1280.0;

    /// Gallery starting at y = 2000, height 1.2 viewports.
    fn laid_out() -> (GallerySection, Viewport) {
        let vp = Viewport::new(0.0, VW, VH);
        let mut g = GallerySection::new(false).unwrap();
        g.layout(Rect::new(0.0, 2000.0, VW, VH * 1.2), &vp);
        (g, vp)
    }

    #[test]
    fn track_slides_half_its_width_across_the_pass() {
        let (mut g, vp) = laid_out();
        // Pass runs from scroll 1200 (top meets bottom) to 2960 (bottom meets top).
        g.on_scroll(&vp.scrolled_to(1200.0));
        assert_eq!(g.params().track_x_percent, 0.0);

        g.on_scroll(&vp.scrolled_to(2080.0));
        let mid = g.params();
        assert!((mid.track_x_percent + 25.0).abs() < 1e-9);

        g.on_scroll(&vp.scrolled_to(2960.0));
        let end = g.params();
        assert_eq!(end.track_x_percent, -50.0);
        assert!((end.track_x + g.track_width / 2.0).abs() < 1e-9);
    }

    #[test]
    fn pieces_alternate_vertical_positions() {
        let (g, _) = laid_out();
        let pieces = g.params().pieces;
        assert!(pieces[0].rect.y < pieces[2].rect.y);
        assert!(pieces[2].rect.y < pieces[1].rect.y);
        assert!(pieces[0].rect.width > pieces[1].rect.width);
    }

    #[test]
    fn offscreen_pieces_reveal_once_the_track_brings_them_in() {
        let (mut g, vp) = laid_out();
        g.on_scroll(&vp.scrolled_to(1800.0));
        g.on_tick(Duration::from_secs(2));
        let early = g.params();
        assert_eq!(early.pieces[2].reveal.opacity, 1.0);
        assert_eq!(early.pieces[5].reveal.opacity, 0.0);

        g.on_scroll(&vp.scrolled_to(2600.0));
        g.on_tick(Duration::from_secs(2));
        assert_eq!(g.params().pieces[5].reveal.opacity, 1.0);
    }

    #[test]
    fn reduced_motion_pins_the_track() {
        let (mut g, vp) = laid_out();
        g.set_reduced_motion(true);
        g.on_scroll(&vp.scrolled_to(2500.0));
        assert_eq!(g.params().track_x, 0.0);
        assert!(g.params().progress.get() > 0.0);
    }
}
