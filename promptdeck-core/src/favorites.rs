//! Favorites: preset prompts and the slide-in panel that offers them.
//!
//! The list is fixed once the panel is built. Where it comes from is behind
//! [`FavoritesSource`], so the panel never cares whether the entries are the
//! built-in defaults or came from `config.toml`.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{PromptDeckError, Result};

/// Accessible label of the control that opens/closes the panel
pub const TOGGLE_LABEL: &str = "Favoriten öffnen";

/// Accessible label of the panel's own close control
pub const CLOSE_LABEL: &str = "Schließen";

/// Panel heading
pub const PANEL_TITLE: &str = "Favoriten";

/// Identifier of a favorite, unique within one list
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FavoriteId(String);

impl FavoriteId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FavoriteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for FavoriteId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// A named, preset block of prompt text
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Favorite {
    pub id: FavoriteId,
    pub label: String,
    pub prompt: String,
}

impl Favorite {
    pub fn new(id: impl Into<String>, label: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            id: FavoriteId::new(id),
            label: label.into(),
            prompt: prompt.into(),
        }
    }
}

/// The list shipped with the application
pub fn builtin_favorites() -> Vec<Favorite> {
    vec![
        Favorite::new("1", "Zusammenfassen", "Fasse diesen Text prägnant zusammen."),
        Favorite::new("2", "SQL-Generator", "Erzeuge eine SQL-Query basierend auf ..."),
        Favorite::new("3", "Task-Liste", "Erstelle eine Liste von Aufgaben für ..."),
    ]
}

/// Reject lists whose ids are not unique
pub fn validate_favorites(favorites: &[Favorite]) -> Result<()> {
    let mut seen = HashSet::with_capacity(favorites.len());
    for fav in favorites {
        if !seen.insert(fav.id.as_str()) {
            return Err(PromptDeckError::duplicate_favorite(fav.id.as_str()));
        }
    }
    Ok(())
}

/// Supplies the favorites list at startup
pub trait FavoritesSource {
    fn favorites(&self) -> Result<Vec<Favorite>>;
}

/// Built-in defaults
#[derive(Debug, Default, Clone, Copy)]
pub struct BuiltinFavorites;

impl FavoritesSource for BuiltinFavorites {
    fn favorites(&self) -> Result<Vec<Favorite>> {
        Ok(builtin_favorites())
    }
}

/// A fixed list handed in by the caller (e.g. from configuration)
#[derive(Debug, Clone)]
pub struct StaticFavorites(Vec<Favorite>);

impl StaticFavorites {
    pub fn new(favorites: Vec<Favorite>) -> Self {
        Self(favorites)
    }
}

impl FavoritesSource for StaticFavorites {
    fn favorites(&self) -> Result<Vec<Favorite>> {
        if self.0.is_empty() {
            return Err(PromptDeckError::NoFavorites);
        }
        validate_favorites(&self.0)?;
        Ok(self.0.clone())
    }
}

/// Reported to the page when the user picks an entry
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PanelEvent {
    Selected(Favorite),
}

/// Favorites panel state: the fixed list plus the open flag
#[derive(Debug, Clone)]
pub struct FavoritesPanel {
    favorites: Vec<Favorite>,
    open: bool,
    highlighted: usize,
}

impl FavoritesPanel {
    /// Create a closed panel over a fixed list
    pub fn new(favorites: Vec<Favorite>) -> Self {
        Self {
            favorites,
            open: false,
            highlighted: 0,
        }
    }

    /// Create a closed panel from a source, validating the list
    pub fn from_source(source: &dyn FavoritesSource) -> Result<Self> {
        let favorites = source.favorites()?;
        validate_favorites(&favorites)?;
        Ok(Self::new(favorites))
    }

    pub fn favorites(&self) -> &[Favorite] {
        &self.favorites
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Hidden-state for assistive output, always `!is_open()`
    pub fn is_hidden(&self) -> bool {
        !self.open
    }

    /// Index of the keyboard-highlighted entry
    pub fn highlighted(&self) -> usize {
        self.highlighted
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
        if self.open {
            self.highlighted = 0;
        }
        tracing::debug!(open = self.open, "favorites panel toggled");
    }

    /// Close via backdrop click, close control or Esc
    pub fn dismiss(&mut self) {
        self.open = false;
    }

    pub fn highlight_next(&mut self) {
        if self.highlighted + 1 < self.favorites.len() {
            self.highlighted += 1;
        }
    }

    pub fn highlight_previous(&mut self) {
        self.highlighted = self.highlighted.saturating_sub(1);
    }

    /// Select by id. Unknown ids leave the panel untouched.
    pub fn select(&mut self, id: &FavoriteId) -> Option<PanelEvent> {
        let index = self.favorites.iter().position(|f| &f.id == id)?;
        self.select_index(index)
    }

    /// Select by position in the list
    pub fn select_index(&mut self, index: usize) -> Option<PanelEvent> {
        let favorite = self.favorites.get(index)?.clone();
        self.open = false;
        tracing::debug!(id = %favorite.id, "favorite selected");
        Some(PanelEvent::Selected(favorite))
    }

    pub fn select_highlighted(&mut self) -> Option<PanelEvent> {
        self.select_index(self.highlighted)
    }
}

impl Default for FavoritesPanel {
    fn default() -> Self {
        Self::new(builtin_favorites())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panel_starts_closed_and_hidden() {
        let panel = FavoritesPanel::default();
        assert!(!panel.is_open());
        assert!(panel.is_hidden());
        assert_eq!(panel.favorites().len(), 3);
    }

    #[test]
    fn test_select_reports_record_and_closes() {
        let mut panel = FavoritesPanel::default();
        panel.toggle();
        assert!(panel.is_open());

        let event = panel.select(&FavoriteId::from("2"));
        assert_eq!(
            event,
            Some(PanelEvent::Selected(Favorite::new(
                "2",
                "SQL-Generator",
                "Erzeuge eine SQL-Query basierend auf ..."
            )))
        );
        assert!(!panel.is_open());
    }

    #[test]
    fn test_select_unknown_id_is_ignored() {
        let mut panel = FavoritesPanel::default();
        panel.toggle();

        assert_eq!(panel.select(&FavoriteId::from("nope")), None);
        assert!(panel.is_open());
    }

    #[test]
    fn test_dismiss_closes() {
        let mut panel = FavoritesPanel::default();
        panel.toggle();
        panel.dismiss();
        assert!(panel.is_hidden());

        // Dismissing a closed panel keeps it closed
        panel.dismiss();
        assert!(!panel.is_open());
    }

    #[test]
    fn test_highlight_stays_in_bounds() {
        let mut panel = FavoritesPanel::default();
        panel.toggle();

        panel.highlight_previous();
        assert_eq!(panel.highlighted(), 0);

        for _ in 0..10 {
            panel.highlight_next();
        }
        assert_eq!(panel.highlighted(), 2);

        let event = panel.select_highlighted();
        assert!(matches!(event, Some(PanelEvent::Selected(f)) if f.label == "Task-Liste"));
    }

    #[test]
    fn test_reopen_resets_highlight() {
        let mut panel = FavoritesPanel::default();
        panel.toggle();
        panel.highlight_next();
        panel.toggle();
        panel.toggle();
        assert_eq!(panel.highlighted(), 0);
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let source = StaticFavorites::new(vec![
            Favorite::new("a", "A", "first"),
            Favorite::new("a", "B", "second"),
        ]);

        let err = FavoritesPanel::from_source(&source).unwrap_err();
        assert!(matches!(err, PromptDeckError::DuplicateFavorite { ref id } if id == "a"));
    }

    #[test]
    fn test_empty_static_source_rejected() {
        let source = StaticFavorites::new(Vec::new());
        assert!(matches!(
            FavoritesPanel::from_source(&source),
            Err(PromptDeckError::NoFavorites)
        ));
    }

    #[test]
    fn test_builtin_ids_are_unique() {
        assert!(validate_favorites(&builtin_favorites()).is_ok());
    }
}
