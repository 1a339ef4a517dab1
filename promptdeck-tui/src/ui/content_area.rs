use promptdeck_core::content::{
    CHART_PLACEHOLDER, CHART_TITLE, LIST_ENTRIES, LIST_TITLE, PREVIEW_TITLE, SECTION_SUBTITLE,
    SECTION_TITLE,
};
use promptdeck_core::Preview;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

use super::layout::Layout;
use super::{MUTED, SECONDARY};

/// Render the content section
pub fn render(f: &mut Frame, area: Rect, preview: Preview<'_>) {
    let outer = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(SECONDARY))
        .title(Line::from(Span::styled(
            format!(" {} ", SECTION_TITLE),
            Style::default().add_modifier(Modifier::BOLD),
        )))
        .title_top(
            Line::from(Span::styled(
                format!(" {} ", SECTION_SUBTITLE),
                Style::default().fg(MUTED),
            ))
            .right_aligned(),
        );
    let inner = outer.inner(area);
    f.render_widget(outer, area);

    let (list_area, chart_area, preview_area) = Layout::content_grid(inner);

    render_list(f, list_area);
    render_chart(f, chart_area);
    render_preview(f, preview_area, preview);
}

fn card(title: &str) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(SECONDARY))
        .title(Span::styled(
            format!(" {} ", title),
            Style::default().add_modifier(Modifier::BOLD),
        ))
}

fn render_list(f: &mut Frame, area: Rect) {
    let items: Vec<ListItem> = LIST_ENTRIES
        .iter()
        .map(|entry| ListItem::new(format!("▪ {}", entry)))
        .collect();
    f.render_widget(List::new(items).block(card(LIST_TITLE)), area);
}

fn render_chart(f: &mut Frame, area: Rect) {
    let chart = Paragraph::new(Span::styled(CHART_PLACEHOLDER, Style::default().fg(MUTED)))
        .alignment(Alignment::Center)
        .block(card(CHART_TITLE).border_type(BorderType::Plain));
    f.render_widget(chart, area);
}

fn render_preview(f: &mut Frame, area: Rect, preview: Preview<'_>) {
    let style = if preview.is_placeholder() {
        Style::default().fg(MUTED)
    } else {
        Style::default()
    };

    // Text::raw keeps every line break; trim: false keeps indentation
    let body = Paragraph::new(Text::raw(preview.text()).style(style))
        .wrap(Wrap { trim: false })
        .block(card(PREVIEW_TITLE));
    f.render_widget(body, area);
}
