//! Page rendering: draws each section from its parameter struct.
//!
//! Everything is placed in document px and projected onto cells at the
//! last moment, so the motion core never sees the terminal grid.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph},
    Frame,
};

use crate::core::color::Rgb;
use crate::core::content::{BRAND, COPYRIGHT, HERO_WORDS, SOCIAL_LINKS, TAGLINE};
use crate::core::geometry;
use crate::core::page::Page;
use crate::core::reveal::RevealParams;
use crate::core::sections::{
    CatalogueParams, DayNightMode, DayNightParams, FooterParams, GalleryParams, HeroParams,
};
use crate::core::signup::{NewsletterForm, SubmitState};

use super::layout::{Projection, PX_PER_ROW};
use super::theme::{Theme, ACCENT, ERROR, MUTED};

/// Draw the visible part of the page into `area`.
pub fn render_page(frame: &mut Frame, area: Rect, page: &Page) {
    let proj = Projection::new(area, page.viewport().scroll_y);
    for (name, region) in page.section_regions() {
        match name {
            "hero" => render_hero(frame, &proj, &region, &page.hero()),
            "catalogue" => render_catalogue(frame, &proj, &region, &page.catalogue()),
            "day-night" => render_day_night(frame, &proj, &region, &page.day_night()),
            "gallery" => render_gallery(frame, &proj, &region, &page.gallery()),
            "footer" => render_footer(frame, &proj, &region, &page.footer()),
            _ => {}
        }
    }
}

// ── helpers ─────────────────────────────────────────────────────

fn fill(frame: &mut Frame, proj: &Projection, r: &geometry::Rect, bg: Rgb) {
    if let Some(cells) = proj.project(r) {
        frame.render_widget(Block::default().style(Style::default().bg(Theme::rgb(bg))), cells);
    }
}

fn text(
    frame: &mut Frame,
    proj: &Projection,
    r: &geometry::Rect,
    lines: Vec<Line<'static>>,
    alignment: Alignment,
) {
    if let Some(cells) = proj.project(r) {
        let p = Paragraph::new(lines)
            .alignment(alignment)
            .scroll((proj.clipped_rows(r), 0));
        frame.render_widget(p, cells);
    }
}

fn shifted(r: geometry::Rect, dx: f64, dy: f64) -> geometry::Rect {
    geometry::Rect {
        x: r.x + dx,
        y: r.y + dy,
        ..r
    }
}

/// Scale about the centre.
fn scaled(r: geometry::Rect, s: f64) -> geometry::Rect {
    let (w, h) = (r.width * s, r.height * s);
    geometry::Rect::new(
        r.x + (r.width - w) / 2.0,
        r.y + (r.height - h) / 2.0,
        w,
        h,
    )
}

/// Horizontal band of `rows` terminal rows starting at `frac` of `r`.
fn band(r: &geometry::Rect, frac: f64, rows: f64) -> geometry::Rect {
    geometry::Rect::new(r.x, r.y + r.height * frac, r.width, rows * PX_PER_ROW)
}

fn letterspaced(word: &str) -> String {
    word.chars()
        .map(String::from)
        .collect::<Vec<_>>()
        .join(" ")
}

fn heading(
    frame: &mut Frame,
    proj: &Projection,
    r: geometry::Rect,
    title: &'static str,
    reveal: RevealParams,
    (fg, bg): (Rgb, Rgb),
) {
    let style = Theme::heading_style(fg, bg, reveal.opacity).add_modifier(Modifier::ITALIC);
    text(
        frame,
        proj,
        &shifted(r, 0.0, reveal.offset_y),
        vec![Line::styled(title, style)],
        Alignment::Center,
    );
}

// ── sections ────────────────────────────────────────────────────

fn render_hero(frame: &mut Frame, proj: &Projection, r: &geometry::Rect, p: &HeroParams) {
    let (fg, bg) = (Theme::page_fg(), Theme::page_bg());
    fill(frame, proj, r, bg);

    let object_w = r.width * 0.2;
    let centre = r.x + r.width / 2.0;
    let object = geometry::Rect::new(
        centre - object_w / 2.0,
        r.y + r.height * 0.25 + p.object_y,
        object_w,
        r.height * 0.45,
    );
    if let Some(cells) = proj.project(&object) {
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Theme::faded(MUTED, bg, p.opacity)))
            .title(Line::from(format!(" {:.0}° ", p.object_rotate)).alignment(Alignment::Center));
        frame.render_widget(block, cells);
    }

    let word_style = Style::default()
        .fg(Theme::faded(fg, bg, p.opacity))
        .add_modifier(Modifier::BOLD);
    let words = band(r, 0.5, 1.0);
    let half = r.width / 2.0 - object_w / 2.0;
    let left = geometry::Rect::new(r.x + p.text_left_x, words.y, half, words.height);
    let right = geometry::Rect::new(centre + object_w / 2.0 + p.text_right_x, words.y, half, words.height);
    text(
        frame,
        proj,
        &left,
        vec![Line::styled(letterspaced(HERO_WORDS.0), word_style)],
        Alignment::Right,
    );
    text(
        frame,
        proj,
        &right,
        vec![Line::styled(letterspaced(HERO_WORDS.1), word_style)],
        Alignment::Left,
    );

    let tagline = Style::default().fg(Theme::faded(MUTED, bg, p.opacity));
    text(
        frame,
        proj,
        &band(r, 0.82, 1.0),
        vec![Line::styled(TAGLINE.to_uppercase(), tagline)],
        Alignment::Center,
    );
}

fn render_catalogue(frame: &mut Frame, proj: &Projection, r: &geometry::Rect, p: &CatalogueParams) {
    let (fg, bg) = (Theme::page_fg(), Theme::page_bg());
    fill(frame, proj, r, bg);
    heading(frame, proj, band(r, 0.08, 1.0), "Our Catalogue", p.heading, (fg, bg));

    for card in &p.cards {
        let rect = shifted(scaled(card.rect, card.scale * 0.9), 0.0, card.reveal.offset_y);
        let Some(cells) = proj.project(&rect) else {
            continue;
        };
        let opacity = card.reveal.opacity;
        let title_style = Style::default()
            .fg(Theme::faded(fg, bg, opacity))
            .add_modifier(Modifier::ITALIC);
        let block = Block::bordered()
            .border_type(if card.active {
                BorderType::Thick
            } else {
                BorderType::Rounded
            })
            .border_style(Theme::card_border_style(card.active, opacity));
        let body = Paragraph::new(vec![
            Line::styled(card.item.title, title_style),
            Line::styled(
                card.item.material.to_uppercase(),
                Style::default().fg(Theme::faded(MUTED, bg, opacity)),
            ),
        ])
        .block(block)
        .scroll((proj.clipped_rows(&rect), 0));
        frame.render_widget(body, cells);
    }
}

fn render_day_night(frame: &mut Frame, proj: &Projection, r: &geometry::Rect, p: &DayNightParams) {
    let (fg, bg) = (p.foreground, p.background);
    fill(frame, proj, r, bg);
    heading(frame, proj, band(r, 0.1, 1.0), "Day & Night", p.heading, (fg, bg));

    let image = shifted(
        geometry::Rect::new(r.x + r.width * 0.3, r.y + r.height * 0.3, r.width * 0.4, r.height * 0.45),
        0.0,
        p.parallax_y,
    );
    if let Some(cells) = proj.project(&image) {
        let label = if p.night { " night " } else { " day " };
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Theme::rgb(bg.lerp(fg, 0.5))))
            .title(Line::from(label).alignment(Alignment::Center));
        frame.render_widget(block, cells);
    }

    let mode = match p.mode {
        DayNightMode::Auto => "auto",
        DayNightMode::Manual => "manual",
    };
    let toggle = |on: bool, label: &'static str| {
        let style = if on {
            Style::default().fg(Theme::rgb(bg)).bg(Theme::rgb(fg))
        } else {
            Style::default().fg(Theme::rgb(fg))
        };
        Span::styled(label, style)
    };
    text(
        frame,
        proj,
        &band(r, 0.85, 1.0),
        vec![Line::from(vec![
            toggle(!p.night, " DAY "),
            Span::raw("  "),
            toggle(p.night, " NIGHT "),
            Span::styled(format!("   {mode}"), Style::default().fg(Theme::rgb(bg.lerp(fg, 0.5)))),
        ])],
        Alignment::Center,
    );
}

fn render_gallery(frame: &mut Frame, proj: &Projection, r: &geometry::Rect, p: &GalleryParams) {
    let (fg, bg) = (Theme::page_fg(), Theme::page_bg());
    fill(frame, proj, r, bg);
    heading(frame, proj, band(r, 0.1, 1.0), "The Collection", p.heading, (fg, bg));

    for piece in &p.pieces {
        let rect = shifted(piece.rect, 0.0, piece.reveal.offset_y);
        let Some(cells) = proj.project(&rect) else {
            continue;
        };
        let opacity = piece.reveal.opacity;
        let body = Paragraph::new(vec![
            Line::styled(
                piece.item.title,
                Style::default()
                    .fg(Theme::faded(fg, bg, opacity))
                    .add_modifier(Modifier::ITALIC),
            ),
            Line::styled(
                piece.item.material.to_uppercase(),
                Style::default().fg(Theme::faded(MUTED, bg, opacity)),
            ),
        ])
        .block(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Theme::faded(MUTED, bg, opacity))),
        )
        .scroll((proj.clipped_rows(&rect), 0));
        frame.render_widget(body, cells);
    }
}

fn render_footer(frame: &mut Frame, proj: &Projection, r: &geometry::Rect, p: &FooterParams) {
    // Footer is always dark.
    let (fg, bg) = (Theme::page_bg(), Theme::page_fg());
    fill(frame, proj, r, bg);
    heading(frame, proj, band(r, 0.2, 1.0), "Submit Aesthetically", p.heading, (fg, bg));
    text(
        frame,
        proj,
        &shifted(band(r, 0.42, 4.0), 0.0, p.links.offset_y),
        newsletter_lines(&p.newsletter, (fg, bg), p.links.opacity),
        Alignment::Center,
    );

    let links_style = Style::default().fg(Theme::faded(fg, bg, p.links.opacity));
    let muted = Style::default().fg(Theme::faded(MUTED, bg, p.links.opacity));
    let brand = Style::default()
        .fg(Theme::faded(ACCENT, bg, p.links.opacity))
        .add_modifier(Modifier::BOLD);
    text(
        frame,
        proj,
        &shifted(band(r, 0.72, 4.0), 0.0, p.links.offset_y),
        vec![
            Line::styled(BRAND.to_uppercase(), brand),
            Line::styled(SOCIAL_LINKS.join("  ·  "), links_style),
            Line::raw(""),
            Line::styled(COPYRIGHT, muted),
        ],
        Alignment::Center,
    );
}

/// Field width in characters, placeholder included.
const FIELD_CHARS: usize = 28;

fn newsletter_lines(form: &NewsletterForm, (fg, bg): (Rgb, Rgb), opacity: f64) -> Vec<Line<'static>> {
    let muted = Style::default().fg(Theme::faded(MUTED, bg, opacity));
    let normal = Style::default().fg(Theme::faded(fg, bg, opacity));
    let field = if form.email().is_empty() {
        Span::styled(format!("{:<FIELD_CHARS$}", "Enter your email"), muted)
    } else {
        // Keep the tail visible once the address outgrows the field.
        let skip = form.email().chars().count().saturating_sub(FIELD_CHARS);
        let shown: String = form.email().chars().skip(skip).collect();
        Span::styled(format!("{shown:<FIELD_CHARS$}"), normal)
    };
    let button_style = if form.can_submit() {
        Style::default()
            .fg(Theme::faded(bg, ACCENT, opacity))
            .bg(Theme::rgb(ACCENT))
    } else {
        muted
    };
    let button = if form.is_submitting() { " Subscribing... " } else { " Subscribe " };
    let message_style = match form.state() {
        SubmitState::Error => Style::default().fg(Theme::faded(ERROR, bg, opacity)),
        _ => normal,
    };
    vec![
        Line::styled("Stay Updated", normal.add_modifier(Modifier::BOLD)),
        Line::from(vec![
            Span::styled("[ ", muted),
            field,
            Span::styled(" ] ", muted),
            Span::styled(button, button_style),
        ]),
        Line::styled(form.state().message().unwrap_or(""), message_style),
    ]
}
