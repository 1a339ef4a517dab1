use promptdeck_core::favorites::TOGGLE_LABEL;
use promptdeck_core::shell::current_footer;
use ratatui::{
    layout::{Constraint, Direction, Layout as RatatuiLayout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::{ACCENT, MUTED};

/// Render the footer: key hints left, copyright right
pub fn render(f: &mut Frame, area: Rect) {
    let copyright = current_footer();
    let chunks = RatatuiLayout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(copyright.chars().count() as u16 + 1),
        ])
        .split(area);

    let hints = Line::from(vec![
        Span::styled(" Ctrl+O ", Style::default().fg(ACCENT)),
        Span::styled(TOGGLE_LABEL, Style::default().fg(MUTED)),
        Span::styled("  Tab ", Style::default().fg(ACCENT)),
        Span::styled("Fokus", Style::default().fg(MUTED)),
        Span::styled("  Ctrl+Q ", Style::default().fg(ACCENT)),
        Span::styled("Beenden", Style::default().fg(MUTED)),
    ]);
    f.render_widget(Paragraph::new(hints), chunks[0]);

    let copyright = Line::from(Span::styled(copyright, Style::default().fg(MUTED))).right_aligned();
    f.render_widget(Paragraph::new(copyright), chunks[1]);
}
