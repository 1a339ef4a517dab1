//! Application shell metadata and page chrome text.

use chrono::{Datelike, Local};

/// Window/terminal title
pub const TITLE: &str = "Minimal AI Frontend";

/// Page description, also the CLI about text
pub const DESCRIPTION: &str =
    "Minimal terminal front-end with Prompt, Favorites flyout, and Content area";

/// Language of all UI copy
pub const LANG: &str = "de";

/// Header brand
pub const BRAND_BADGE: &str = "AI";
pub const BRAND_NAME: &str = "Minimal Frontend";

/// Inert header actions
pub const HEADER_ACTIONS: [&str; 2] = ["Neu", "Export"];

/// Footer line for a given year
pub fn footer_text(year: i32) -> String {
    format!("© {} — Built with ratatui & crossterm", year)
}

/// Footer line for the current local year
pub fn current_footer() -> String {
    footer_text(Local::now().year())
}
