//! UI / rendering layer: everything that touches Ratatui widgets.
//!
//! This layer reads the motion core's parameter structs and turns them
//! into cells.  It never mutates motion state.

pub mod layout;
pub mod page_view;
pub mod smooth_scroll;
pub mod theme;

use ratatui::{
    layout::Alignment,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::{handler::KEY_HINT, state::PreviewState};
use crate::core::content::{BRAND, SOCIAL_LINKS};

use self::layout::AppLayout;
use self::theme::Theme;

/// Draw one full frame.
pub fn render(frame: &mut Frame, state: &PreviewState) {
    let layout = AppLayout::from_area(frame.area());

    page_view::render_page(frame, layout.page_area, &state.page);

    let scrolled = state.page.header().scrolled;
    let header = Line::from(vec![
        Span::styled(format!(" {} ", BRAND.to_uppercase()), Theme::brand_style(scrolled)),
        Span::styled(
            format!("  Catalogue  Collection  {}", SOCIAL_LINKS.join("  ")),
            Theme::header_style(scrolled),
        ),
    ]);
    frame.render_widget(
        Paragraph::new(header).style(Theme::header_style(scrolled)),
        layout.header_area,
    );

    let vp = state.page.viewport();
    let position = format!(
        "{:>5.0}/{:.0}px{} ",
        vp.scroll_y,
        state.page.max_scroll(),
        if state.reduced_motion() { " · reduced" } else { "" }
    );
    let hint = state.status_message.as_deref().unwrap_or(KEY_HINT);
    let width = usize::from(layout.status_area.width);
    let left_width = width.saturating_sub(position.chars().count());
    let left: String = format!(" {hint}").chars().take(left_width).collect();
    let status = Line::from(vec![
        Span::raw(format!("{left:<left_width$}")),
        Span::raw(position),
    ]);
    frame.render_widget(
        Paragraph::new(status)
            .alignment(Alignment::Left)
            .style(Theme::status_bar_style()),
        layout.status_area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PreviewConfig;
    use crate::core::page::Page;
    use crate::core::sections::MotionSettings;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn frame_has_header_page_and_status() {
        let layout = AppLayout::from_area(ratatui::layout::Rect::new(0, 0, 100, 30));
        let (w, h) = layout.page_extent();
        let state = PreviewState::new(
            Page::new(MotionSettings::default(), w, h).unwrap(),
            &PreviewConfig::default(),
        );
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|frame| render(frame, &state)).unwrap();

        let buf = terminal.backend().buffer();
        let row = |y: u16| -> String { (0..100).map(|x| buf[(x, y)].symbol().to_string()).collect() };
        assert!(row(0).contains("FURNIONS"));
        assert!(row(29).contains("scroll"));
        assert!(row(29).trim_end().ends_with("px"));
    }
}
