//! Page composer: owns the prompt text and wires the three components.
//!
//! Every interaction arrives as a [`Msg`]; [`Page::update`] applies it and
//! returns the [`Effect`]s the runtime has to carry out (handing a prompt to
//! the sink, scheduling a busy reset). Nothing here performs I/O.

use std::time::Duration;

use crate::content::Preview;
use crate::favorites::{FavoriteId, FavoritesPanel, PanelEvent};
use crate::prompt::{PromptEvent, PromptInput, SubmitTrigger};

/// Inputs to the page
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Msg {
    ToggleFavorites,
    DismissFavorites,
    HighlightNext,
    HighlightPrevious,
    SelectHighlighted,
    SelectFavorite(FavoriteId),
    /// Select by list position (quick keys, mouse)
    SelectFavoriteAt(usize),
    ChangeText(String),
    Submit(SubmitTrigger),
    BusyElapsed { generation: u64 },
}

/// Work for the runtime
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    /// Hand the prompt to the submission sink
    Submit(String),
    /// Deliver `Msg::BusyElapsed { generation }` once `after` has elapsed
    ScheduleBusyReset { generation: u64, after: Duration },
}

#[derive(Debug, Clone)]
pub struct Page {
    prompt: String,
    favorites: FavoritesPanel,
    input: PromptInput,
}

impl Page {
    /// Fresh page: empty prompt, panel closed, not busy
    pub fn new(favorites: FavoritesPanel, input: PromptInput) -> Self {
        Self {
            prompt: String::new(),
            favorites,
            input,
        }
    }

    /// Current prompt text
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn favorites(&self) -> &FavoritesPanel {
        &self.favorites
    }

    pub fn input(&self) -> &PromptInput {
        &self.input
    }

    /// Whether the send button is enabled right now
    pub fn can_submit(&self) -> bool {
        self.input.can_submit(&self.prompt)
    }

    pub fn preview(&self) -> Preview<'_> {
        Preview::of(&self.prompt)
    }

    pub fn update(&mut self, msg: Msg) -> Vec<Effect> {
        match msg {
            Msg::ToggleFavorites => {
                self.favorites.toggle();
                Vec::new()
            }
            Msg::DismissFavorites => {
                self.favorites.dismiss();
                Vec::new()
            }
            Msg::HighlightNext => {
                self.favorites.highlight_next();
                Vec::new()
            }
            Msg::HighlightPrevious => {
                self.favorites.highlight_previous();
                Vec::new()
            }
            Msg::SelectHighlighted => {
                let event = self.favorites.select_highlighted();
                self.on_panel_event(event)
            }
            Msg::SelectFavorite(id) => {
                let event = self.favorites.select(&id);
                if event.is_none() {
                    tracing::warn!(id = %id, "unknown favorite selected");
                }
                self.on_panel_event(event)
            }
            Msg::SelectFavoriteAt(index) => {
                let event = self.favorites.select_index(index);
                self.on_panel_event(event)
            }
            Msg::ChangeText(text) => {
                let event = self.input.edit(text);
                self.on_prompt_event(Some(event))
            }
            Msg::Submit(trigger) => {
                let event = self.input.submit(trigger, &self.prompt);
                self.on_prompt_event(event)
            }
            Msg::BusyElapsed { generation } => {
                self.input.busy_elapsed(generation);
                Vec::new()
            }
        }
    }

    fn on_panel_event(&mut self, event: Option<PanelEvent>) -> Vec<Effect> {
        if let Some(PanelEvent::Selected(favorite)) = event {
            self.prompt = favorite.prompt;
        }
        Vec::new()
    }

    fn on_prompt_event(&mut self, event: Option<PromptEvent>) -> Vec<Effect> {
        match event {
            Some(PromptEvent::Changed(text)) => {
                self.prompt = text;
                Vec::new()
            }
            Some(PromptEvent::Submitted { value, reset }) => vec![
                Effect::Submit(value),
                Effect::ScheduleBusyReset {
                    generation: reset.generation,
                    after: reset.after,
                },
            ],
            None => Vec::new(),
        }
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::new(FavoritesPanel::default(), PromptInput::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::EMPTY_PREVIEW;

    #[test]
    fn test_initial_state() {
        let page = Page::default();
        assert_eq!(page.prompt(), "");
        assert!(!page.favorites().is_open());
        assert!(!page.input().is_busy());
        assert!(!page.can_submit());
        assert_eq!(page.preview().text(), EMPTY_PREVIEW);
    }

    #[test]
    fn test_select_sql_generator_scenario() {
        let mut page = Page::default();
        page.update(Msg::ToggleFavorites);

        let effects = page.update(Msg::SelectFavorite(FavoriteId::from("2")));

        assert!(effects.is_empty());
        assert_eq!(page.prompt(), "Erzeuge eine SQL-Query basierend auf ...");
        assert!(!page.favorites().is_open());
        assert_eq!(
            page.preview().text(),
            "Erzeuge eine SQL-Query basierend auf ..."
        );
    }

    #[test]
    fn test_selection_replaces_typed_text() {
        let mut page = Page::default();
        page.update(Msg::ChangeText("draft".into()));
        page.update(Msg::SelectFavoriteAt(0));

        assert_eq!(page.prompt(), "Fasse diesen Text prägnant zusammen.");
    }

    #[test]
    fn test_unknown_favorite_changes_nothing() {
        let mut page = Page::default();
        page.update(Msg::ChangeText("keep me".into()));
        page.update(Msg::ToggleFavorites);
        page.update(Msg::SelectFavorite(FavoriteId::from("99")));

        assert_eq!(page.prompt(), "keep me");
        assert!(page.favorites().is_open());
    }

    #[test]
    fn test_trailing_space_enables_button() {
        let mut page = Page::default();
        page.update(Msg::ChangeText("abc ".into()));
        assert!(page.can_submit());
    }

    #[test]
    fn test_button_submit_effects() {
        let mut page = Page::default();
        page.update(Msg::ChangeText(" hi ".into()));

        let effects = page.update(Msg::Submit(SubmitTrigger::Button));
        assert_eq!(
            effects,
            vec![
                Effect::Submit(" hi ".into()),
                Effect::ScheduleBusyReset {
                    generation: 1,
                    after: Duration::from_millis(300),
                },
            ]
        );
        assert!(page.input().is_busy());
        assert!(!page.can_submit());
        assert_eq!(page.prompt(), " hi ");

        page.update(Msg::BusyElapsed { generation: 1 });
        assert!(!page.input().is_busy());
        assert!(page.can_submit());
    }

    #[test]
    fn test_disabled_button_yields_no_effects() {
        let mut page = Page::default();
        page.update(Msg::ChangeText("   ".into()));

        assert!(page.update(Msg::Submit(SubmitTrigger::Button)).is_empty());
        assert!(!page.input().is_busy());
    }

    #[test]
    fn test_chord_submits_empty_prompt() {
        let mut page = Page::default();
        let effects = page.update(Msg::Submit(SubmitTrigger::Chord));

        assert_eq!(effects[0], Effect::Submit(String::new()));
        assert!(page.input().is_busy());
    }

    #[test]
    fn test_panel_and_busy_are_independent() {
        let mut page = Page::default();
        page.update(Msg::ChangeText("x".into()));
        page.update(Msg::Submit(SubmitTrigger::Button));
        page.update(Msg::ToggleFavorites);

        assert!(page.favorites().is_open());
        assert!(page.input().is_busy());

        page.update(Msg::DismissFavorites);
        assert!(page.input().is_busy());
    }
}
