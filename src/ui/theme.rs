//! Colour palette and text styles used across the preview.

use ratatui::style::{Color, Modifier, Style};

use crate::core::color::Rgb;
use crate::core::sections::day_night::{DAY_BACKGROUND, DAY_FOREGROUND};

/// Warm accent used for the highlighted card and the brand mark.
pub const ACCENT: Rgb = Rgb::from_hex(0xB0703C);
/// Muted secondary text (materials, copyright).
pub const MUTED: Rgb = Rgb::from_hex(0x8A857A);
/// Failed signup message.
pub const ERROR: Rgb = Rgb::from_hex(0xC0392B);

/// Central theme.  Change colours here and they propagate everywhere.
pub struct Theme;

impl Theme {
    pub fn rgb(c: Rgb) -> Color {
        Color::Rgb(c.r, c.g, c.b)
    }

    /// `fg` drawn at `opacity` over `bg`.  Terminals have no alpha, so
    /// fades are mixed here.
    pub fn faded(fg: Rgb, bg: Rgb, opacity: f64) -> Color {
        Self::rgb(bg.lerp(fg, opacity))
    }

    pub fn page_bg() -> Rgb {
        DAY_BACKGROUND
    }

    pub fn page_fg() -> Rgb {
        DAY_FOREGROUND
    }

    // ── header ─────────────────────────────────────────────────
    /// Transparent at the top of the page, solid once scrolled.
    pub fn header_style(scrolled: bool) -> Style {
        if scrolled {
            Style::default()
                .bg(Self::rgb(DAY_FOREGROUND))
                .fg(Self::rgb(DAY_BACKGROUND))
        } else {
            Style::default()
                .bg(Self::rgb(DAY_BACKGROUND))
                .fg(Self::rgb(DAY_FOREGROUND))
        }
    }

    pub fn brand_style(scrolled: bool) -> Style {
        Self::header_style(scrolled)
            .fg(Self::rgb(ACCENT))
            .add_modifier(Modifier::BOLD)
    }

    // ── sections ───────────────────────────────────────────────
    pub fn heading_style(fg: Rgb, bg: Rgb, opacity: f64) -> Style {
        Style::default()
            .fg(Self::faded(fg, bg, opacity))
            .add_modifier(Modifier::BOLD)
    }

    pub fn card_border_style(active: bool, opacity: f64) -> Style {
        let (fg, modifier) = if active {
            (ACCENT, Modifier::BOLD)
        } else {
            (MUTED, Modifier::empty())
        };
        Style::default()
            .fg(Self::faded(fg, Self::page_bg(), opacity))
            .add_modifier(modifier)
    }

    // ── chrome ─────────────────────────────────────────────────
    pub fn status_bar_style() -> Style {
        Style::default().bg(Color::DarkGray).fg(Color::White)
    }
}
