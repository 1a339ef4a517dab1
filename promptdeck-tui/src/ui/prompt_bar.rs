use promptdeck_core::prompt::{SUBMIT_HINT, SUBMIT_LABEL};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout as RatatuiLayout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::layout::Layout;
use super::{ACCENT, BUSY, MUTED, SECONDARY};
use crate::app::{App, Focus};

/// Visual state of the send button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonState {
    Enabled,
    Disabled,
    Busy,
}

impl ButtonState {
    pub fn of(app: &App) -> Self {
        if app.page.input().is_busy() {
            ButtonState::Busy
        } else if app.page.can_submit() {
            ButtonState::Enabled
        } else {
            ButtonState::Disabled
        }
    }
}

/// Render the prompt bar; returns (field_area, button_area)
pub fn render(f: &mut Frame, area: Rect, app: &mut App) -> (Rect, Rect) {
    let rows = RatatuiLayout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7), // Field + button
            Constraint::Length(1), // Hint
            Constraint::Min(0),
        ])
        .split(area);

    let (field_area, button_row) = Layout::prompt_row(rows[0]);
    let button_area = Rect::new(button_row.x, button_row.y, button_row.width, 3).intersection(button_row);

    let keys_to_field = !app.page.favorites().is_open();
    let field_focused = keys_to_field && app.focus == Focus::Prompt;
    let button_focused = keys_to_field && app.focus == Focus::Send;

    render_field(f, field_area, app, field_focused);
    render_button(f, button_area, ButtonState::of(app), button_focused);

    let hint = Paragraph::new(Line::from(Span::styled(SUBMIT_HINT, Style::default().fg(MUTED))));
    f.render_widget(hint, rows[1]);

    (field_area, button_area)
}

fn render_field(f: &mut Frame, area: Rect, app: &mut App, focused: bool) {
    let border_color = if focused { ACCENT } else { SECONDARY };
    let title = if focused { " Prompt [EDIT] " } else { " Prompt " };

    app.textarea.set_block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(Style::default().fg(border_color)),
    );
    app.textarea.set_cursor_line_style(Style::default());

    if focused {
        app.textarea
            .set_cursor_style(Style::default().add_modifier(Modifier::REVERSED));
    } else {
        app.textarea.set_cursor_style(Style::default());
    }

    f.render_widget(&app.textarea, area);
}

fn render_button(f: &mut Frame, area: Rect, state: ButtonState, focused: bool) {
    let (label_style, border_color) = match state {
        ButtonState::Enabled => (Style::default().fg(ACCENT).add_modifier(Modifier::BOLD), ACCENT),
        ButtonState::Disabled => (Style::default().fg(SECONDARY), SECONDARY),
        ButtonState::Busy => (Style::default().fg(BUSY), BUSY),
    };
    let label_style = if focused {
        label_style.add_modifier(Modifier::REVERSED)
    } else {
        label_style
    };

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    if state == ButtonState::Busy {
        block = block.title(" … ");
    }

    let button = Paragraph::new(Line::from(Span::styled(
        format!("➤ {}", SUBMIT_LABEL),
        label_style,
    )))
    .alignment(Alignment::Center)
    .block(block);

    f.render_widget(button, area);
}
