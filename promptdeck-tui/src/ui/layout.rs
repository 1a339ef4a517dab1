use ratatui::layout::{Constraint, Direction, Layout as RatatuiLayout, Rect};

/// Content grid switches to two columns from this width on
pub const WIDE_BREAKPOINT: u16 = 80;

/// Main page areas, top to bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageAreas {
    pub header: Rect,
    pub prompt: Rect,
    pub content: Rect,
    pub footer: Rect,
}

/// Layout manager for the page
pub struct Layout;

impl Layout {
    /// Header, prompt bar, content area and footer
    pub fn main(area: Rect) -> PageAreas {
        let chunks = RatatuiLayout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // Header
                Constraint::Length(9), // Prompt bar (field + hint)
                Constraint::Min(0),    // Content area
                Constraint::Length(1), // Footer
            ])
            .split(area);

        PageAreas {
            header: chunks[0],
            prompt: chunks[1],
            content: chunks[2],
            footer: chunks[3],
        }
    }

    /// Text field on the left, send button on the right
    ///
    /// Returns: (field_area, button_area)
    pub fn prompt_row(area: Rect) -> (Rect, Rect) {
        let chunks = RatatuiLayout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(10), Constraint::Length(16)])
            .split(area);

        (chunks[0], chunks[1])
    }

    /// Placeholder grid: list and chart side by side on wide terminals,
    /// stacked otherwise; the preview always spans the full width.
    ///
    /// Returns: (list_area, chart_area, preview_area)
    pub fn content_grid(area: Rect) -> (Rect, Rect, Rect) {
        if area.width >= WIDE_BREAKPOINT {
            let rows = RatatuiLayout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(7), Constraint::Min(3)])
                .split(area);
            let cols = RatatuiLayout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
                .split(rows[0]);
            (cols[0], cols[1], rows[1])
        } else {
            let rows = RatatuiLayout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(5),
                    Constraint::Length(4),
                    Constraint::Min(3),
                ])
                .split(area);
            (rows[0], rows[1], rows[2])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_main_layout_heights() {
        let areas = Layout::main(Rect::new(0, 0, 100, 40));
        assert_eq!(areas.header.height, 2);
        assert_eq!(areas.prompt.height, 9);
        assert_eq!(areas.footer.height, 1);
        assert_eq!(areas.content.height, 40 - 2 - 9 - 1);
    }

    #[test]
    fn test_content_grid_breakpoint() {
        let (list, chart, _) = Layout::content_grid(Rect::new(0, 0, 100, 20));
        assert_eq!(list.y, chart.y);

        let (list, chart, _) = Layout::content_grid(Rect::new(0, 0, 60, 20));
        assert!(chart.y > list.y);
    }
}
