//! Layout helpers: split the terminal and project document px onto cells.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::core::geometry;

/// Document px covered by one terminal row.
pub const PX_PER_ROW: f64 = 16.0;
/// Document px covered by one terminal column.  Cells are about twice as
/// tall as they are wide.
pub const PX_PER_COL: f64 = 8.0;

/// Fixed header on top, the scrolling page, a status bar at the bottom.
pub struct AppLayout {
    pub header_area: Rect,
    pub page_area: Rect,
    pub status_area: Rect,
}

impl AppLayout {
    pub fn from_area(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // header
                Constraint::Min(3),    // page
                Constraint::Length(1), // status bar
            ])
            .split(area);

        Self {
            header_area: chunks[0],
            page_area: chunks[1],
            status_area: chunks[2],
        }
    }

    /// Viewport size in document px for the page pane.
    pub fn page_extent(&self) -> (f64, f64) {
        (
            f64::from(self.page_area.width) * PX_PER_COL,
            f64::from(self.page_area.height) * PX_PER_ROW,
        )
    }
}

/// Maps document-space rectangles onto the page pane at a scroll offset.
#[derive(Debug, Clone, Copy)]
pub struct Projection {
    pub area: Rect,
    pub scroll_y: f64,
}

impl Projection {
    pub fn new(area: Rect, scroll_y: f64) -> Self {
        Self { area, scroll_y }
    }

    /// Screen cells covered by `r`, clipped to the pane.  `None` when
    /// nothing of it is on screen.
    pub fn project(&self, r: &geometry::Rect) -> Option<Rect> {
        let rows = f64::from(self.area.height);
        let cols = f64::from(self.area.width);

        let top = ((r.top() - self.scroll_y) / PX_PER_ROW).round().clamp(0.0, rows);
        let bottom = ((r.bottom() - self.scroll_y) / PX_PER_ROW).round().clamp(0.0, rows);
        let left = (r.left() / PX_PER_COL).round().clamp(0.0, cols);
        let right = (r.right() / PX_PER_COL).round().clamp(0.0, cols);
        if bottom <= top || right <= left {
            return None;
        }
        Some(Rect::new(
            self.area.x + left as u16,
            self.area.y + top as u16,
            (right - left) as u16,
            (bottom - top) as u16,
        ))
    }

    /// Rows of `r` hidden above the top edge of the pane.
    pub fn clipped_rows(&self, r: &geometry::Rect) -> u16 {
        let top = (r.top() - self.scroll_y) / PX_PER_ROW;
        if top < 0.0 {
            (-top).round().min(f64::from(u16::MAX)) as u16
        } else {
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pane() -> Rect {
        Rect::new(0, 1, 80, 25)
    }

    #[test]
    fn split_reserves_header_and_status_rows() {
        let layout = AppLayout::from_area(Rect::new(0, 0, 80, 27));
        assert_eq!(layout.header_area.height, 1);
        assert_eq!(layout.status_area.height, 1);
        assert_eq!(layout.page_area, pane());
        assert_eq!(layout.page_extent(), (640.0, 400.0));
    }

    #[test]
    fn projects_onto_pane_cells() {
        let proj = Projection::new(pane(), 0.0);
        let r = geometry::Rect::new(80.0, 32.0, 160.0, 64.0);
        assert_eq!(proj.project(&r), Some(Rect::new(10, 3, 20, 4)));
    }

    #[test]
    fn scrolling_clips_the_top() {
        let proj = Projection::new(pane(), 48.0);
        let r = geometry::Rect::new(0.0, 0.0, 640.0, 400.0);
        assert_eq!(proj.project(&r), Some(Rect::new(0, 1, 80, 22)));
        assert_eq!(proj.clipped_rows(&r), 3);
    }

    #[test]
    fn offscreen_rects_are_skipped() {
        let proj = Projection::new(pane(), 0.0);
        assert_eq!(proj.project(&geometry::Rect::new(0.0, 500.0, 640.0, 100.0)), None);
        assert_eq!(proj.project(&geometry::Rect::new(-200.0, 0.0, 100.0, 100.0)), None);
    }
}
