pub mod content_area;
pub mod favorites_panel;
pub mod footer;
pub mod header;
pub mod layout;
pub mod prompt_bar;

use ratatui::{layout::Rect, style::Color, Frame};

use crate::app::App;

/// Primary accent color
pub const ACCENT: Color = Color::Cyan;
/// Secondary color for borders and inactive elements
pub const SECONDARY: Color = Color::DarkGray;
/// Highlight color for the selected favorite
pub const HIGHLIGHT: Color = Color::Yellow;
/// Busy indicator
pub const BUSY: Color = Color::Yellow;
/// Muted text
pub const MUTED: Color = Color::Rgb(120, 120, 130);

/// Clickable areas from the last frame, used for mouse hit-testing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Regions {
    pub toggle: Rect,
    /// Flyout bounds (only while open)
    pub panel: Option<Rect>,
    pub close: Option<Rect>,
    /// Drawn favorite rows as (list index, row)
    pub entries: Vec<(usize, Rect)>,
    pub prompt: Rect,
    pub send: Rect,
}

/// Render the whole page
pub fn render(f: &mut Frame, app: &mut App) {
    let full = f.area();
    let areas = layout::Layout::main(full);

    app.regions.toggle = header::render(f, areas.header);
    let (prompt, send) = prompt_bar::render(f, areas.prompt, app);
    app.regions.prompt = prompt;
    app.regions.send = send;
    content_area::render(f, areas.content, app.page.preview());
    footer::render(f, areas.footer);

    // Overlay last so it covers everything else
    let overlay = favorites_panel::render(f, full, app.page.favorites());
    app.regions.panel = overlay.panel;
    app.regions.close = overlay.close;
    app.regions.entries = overlay.entries;
}
