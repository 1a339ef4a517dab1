use promptdeck_core::favorites::{CLOSE_LABEL, PANEL_TITLE};
use promptdeck_core::FavoritesPanel;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::{ACCENT, HIGHLIGHT, MUTED, SECONDARY};

/// Flyout width in columns (clamped to the terminal)
pub const PANEL_WIDTH: u16 = 34;

const NAV_HINT: &str = "↑↓ wählen · Enter laden · Esc";

/// Hit regions of the rendered flyout
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overlay {
    pub panel: Option<Rect>,
    pub close: Option<Rect>,
    /// Drawn entries as (list index, row)
    pub entries: Vec<(usize, Rect)>,
}

/// Render backdrop and flyout over `area`. Draws nothing while hidden.
pub fn render(f: &mut Frame, area: Rect, panel: &FavoritesPanel) -> Overlay {
    if panel.is_hidden() {
        return Overlay::default();
    }

    // Backdrop: dim whatever is underneath
    f.buffer_mut()
        .set_style(area, Style::default().add_modifier(Modifier::DIM));

    let panel_area = Rect::new(area.x, area.y, PANEL_WIDTH.min(area.width), area.height);
    f.render_widget(Clear, panel_area);

    let close_text = format!(" ✕ {} ", CLOSE_LABEL);
    let close_width = close_text.chars().count() as u16;

    let block = Block::default()
        .borders(Borders::RIGHT | Borders::TOP | Borders::BOTTOM)
        .border_style(Style::default().fg(ACCENT))
        .title(Span::styled(
            format!(" {} ", PANEL_TITLE),
            Style::default().add_modifier(Modifier::BOLD),
        ))
        .title_top(Line::from(Span::styled(close_text, Style::default().fg(MUTED))).right_aligned());
    let inner = block.inner(panel_area);
    f.render_widget(block, panel_area);

    let close = Rect::new(
        (panel_area.x + panel_area.width).saturating_sub(close_width + 1),
        panel_area.y,
        close_width,
        1,
    )
    .intersection(panel_area);

    // Row 0 is spacing and the last row holds the nav hint
    let list_height = inner.height.saturating_sub(2) as usize;
    let offset = scroll_offset(panel.highlighted(), list_height);

    let mut entries = Vec::with_capacity(list_height);
    for (idx, fav) in panel
        .favorites()
        .iter()
        .enumerate()
        .skip(offset)
        .take(list_height)
    {
        let row = inner.y + 1 + (idx - offset) as u16;
        let entry_area = Rect::new(inner.x, row, inner.width, 1);

        let style = if idx == panel.highlighted() {
            Style::default().fg(HIGHLIGHT).add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
            Style::default()
        };
        let line = Line::from(vec![
            Span::styled(format!(" {} ", idx + 1), Style::default().fg(SECONDARY)),
            Span::styled(format!(" {} ", fav.label), style),
        ]);
        f.render_widget(Paragraph::new(line), entry_area);
        entries.push((idx, entry_area));
    }

    if inner.height >= 2 {
        let hint_area = Rect::new(inner.x, inner.y + inner.height - 1, inner.width, 1);
        f.render_widget(
            Paragraph::new(Span::styled(NAV_HINT, Style::default().fg(MUTED))),
            hint_area,
        );
    }

    Overlay {
        panel: Some(panel_area),
        close: Some(close),
        entries,
    }
}

/// First list index to draw so the highlighted entry stays visible
fn scroll_offset(highlighted: usize, visible: usize) -> usize {
    if visible == 0 {
        return 0;
    }
    highlighted.saturating_sub(visible - 1)
}
