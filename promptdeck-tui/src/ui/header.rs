use promptdeck_core::shell::{BRAND_BADGE, BRAND_NAME, HEADER_ACTIONS};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{ACCENT, SECONDARY};

/// Header actions are hidden below this width
const ACTIONS_MIN_WIDTH: u16 = 60;

const TOGGLE: &str = " ☰ ";

/// Render the header bar; returns the favorites toggle area
pub fn render(f: &mut Frame, area: Rect) -> Rect {
    let mut spans = vec![
        Span::styled(TOGGLE, Style::default().fg(Color::Black).bg(ACCENT)),
        Span::raw("  "),
        Span::styled(
            format!(" {} ", BRAND_BADGE),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD | Modifier::REVERSED),
        ),
        Span::raw(" "),
        Span::styled(BRAND_NAME, Style::default().add_modifier(Modifier::BOLD)),
    ];

    if area.width >= ACTIONS_MIN_WIDTH {
        let actions: Vec<String> = HEADER_ACTIONS.iter().map(|a| format!("[ {} ]", a)).collect();
        let actions_width: usize = actions.iter().map(|a| a.chars().count() + 1).sum();
        let used: usize = spans.iter().map(|s| s.content.chars().count()).sum();
        let padding = (area.width as usize).saturating_sub(used + actions_width);

        spans.push(Span::raw(" ".repeat(padding)));
        for action in actions {
            spans.push(Span::styled(action, Style::default().fg(SECONDARY)));
            spans.push(Span::raw(" "));
        }
    }

    let header = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(SECONDARY)),
    );
    f.render_widget(header, area);

    Rect::new(area.x, area.y, TOGGLE.chars().count() as u16, 1).intersection(area)
}

#[cfg(test)]
mod tests {
    use crate::app::App;
    use crate::ui::test_support::{contains, draw};
    use promptdeck_core::Page;

    #[test]
    fn test_actions_hidden_on_narrow_terminal() {
        let mut app = App::new(Page::default());

        let wide = draw(&mut app, 100, 30);
        assert!(contains(&wide, "[ Neu ]"));
        assert!(contains(&wide, "[ Export ]"));

        let narrow = draw(&mut app, 50, 30);
        assert!(contains(&narrow, "Minimal Frontend"));
        assert!(!contains(&narrow, "[ Neu ]"));
    }
}
