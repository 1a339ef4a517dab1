//! Terminal-side application state
//!
//! `App` owns the [`Page`] model and the pieces only the terminal needs:
//! the text widget backing the prompt field, keyboard focus, and the hit
//! regions from the last frame. Input events become page messages here;
//! the effects those messages produce are handed back to the caller.

use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use promptdeck_core::prompt::PLACEHOLDER;
use promptdeck_core::{Effect, Msg, Page, SubmitTrigger};
use ratatui::layout::Position;
use tui_textarea::{CursorMove, TextArea};

use crate::event::{is_favorites_toggle, is_press, is_quit, is_submit_chord};
use crate::ui::Regions;

/// Which control receives keys while the flyout is closed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The prompt text field
    #[default]
    Prompt,
    /// The send button
    Send,
}

impl Focus {
    pub fn toggle(&self) -> Self {
        match self {
            Focus::Prompt => Focus::Send,
            Focus::Send => Focus::Prompt,
        }
    }
}

/// Main application state
pub struct App {
    pub page: Page,
    pub focus: Focus,
    pub should_quit: bool,
    /// Text widget mirroring `page.prompt()`
    pub textarea: TextArea<'static>,
    /// Clickable areas recorded by the last render
    pub regions: Regions,
}

impl App {
    pub fn new(page: Page) -> Self {
        let mut app = Self {
            page,
            focus: Focus::Prompt,
            should_quit: false,
            textarea: new_textarea(Vec::new()),
            regions: Regions::default(),
        };
        app.sync_textarea();
        app
    }

    /// Apply a message and keep the text widget in step with the page
    pub fn dispatch(&mut self, msg: Msg) -> Vec<Effect> {
        let effects = self.page.update(msg);
        self.sync_textarea();
        effects
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) -> Vec<Effect> {
        if !is_press(&key) {
            return Vec::new();
        }

        if is_quit(&key) {
            self.should_quit = true;
            return Vec::new();
        }

        if is_favorites_toggle(&key) {
            return self.dispatch(Msg::ToggleFavorites);
        }

        // The open flyout is modal
        if self.page.favorites().is_open() {
            return self.handle_favorites_key(key);
        }

        match key.code {
            KeyCode::Tab | KeyCode::BackTab => {
                self.focus = self.focus.toggle();
                Vec::new()
            }
            _ => match self.focus {
                Focus::Prompt => self.handle_prompt_key(key),
                Focus::Send => self.handle_send_key(key),
            },
        }
    }

    fn handle_favorites_key(&mut self, key: KeyEvent) -> Vec<Effect> {
        match key.code {
            KeyCode::Esc => self.dispatch(Msg::DismissFavorites),
            KeyCode::Down | KeyCode::Char('j') => self.dispatch(Msg::HighlightNext),
            KeyCode::Up | KeyCode::Char('k') => self.dispatch(Msg::HighlightPrevious),
            KeyCode::Enter => self.dispatch(Msg::SelectHighlighted),
            KeyCode::Char(c @ '1'..='9') => {
                let index = (c as usize) - ('1' as usize);
                self.dispatch(Msg::SelectFavoriteAt(index))
            }
            _ => Vec::new(),
        }
    }

    fn handle_prompt_key(&mut self, key: KeyEvent) -> Vec<Effect> {
        // Checked before the text widget so the chord never inserts a newline
        if is_submit_chord(&key) {
            return self.dispatch(Msg::Submit(SubmitTrigger::Chord));
        }

        if self.textarea.input(key) {
            let content = self.textarea.lines().join("\n");
            return self.dispatch(Msg::ChangeText(content));
        }

        Vec::new()
    }

    fn handle_send_key(&mut self, key: KeyEvent) -> Vec<Effect> {
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => self.dispatch(Msg::Submit(SubmitTrigger::Button)),
            _ => Vec::new(),
        }
    }

    /// Bracketed paste goes into the prompt field as one edit
    pub fn handle_paste(&mut self, text: &str) -> Vec<Effect> {
        if self.page.favorites().is_open() {
            return Vec::new();
        }
        self.focus = Focus::Prompt;
        if self.textarea.insert_str(text) {
            let content = self.textarea.lines().join("\n");
            return self.dispatch(Msg::ChangeText(content));
        }
        Vec::new()
    }

    /// Handle a mouse event using the regions of the last frame
    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> Vec<Effect> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Vec::new();
        }
        let pos = Position::new(mouse.column, mouse.row);

        if self.regions.toggle.contains(pos) {
            return self.dispatch(Msg::ToggleFavorites);
        }

        if self.page.favorites().is_open() {
            if self.regions.close.is_some_and(|r| r.contains(pos)) {
                return self.dispatch(Msg::DismissFavorites);
            }
            let hit = self.regions.entries.iter().find(|(_, r)| r.contains(pos));
            if let Some(&(index, _)) = hit {
                return self.dispatch(Msg::SelectFavoriteAt(index));
            }
            if self.regions.panel.is_some_and(|r| r.contains(pos)) {
                return Vec::new();
            }
            // Anywhere else is the backdrop
            return self.dispatch(Msg::DismissFavorites);
        }

        if self.regions.send.contains(pos) {
            self.focus = Focus::Send;
            return self.dispatch(Msg::Submit(SubmitTrigger::Button));
        }
        if self.regions.prompt.contains(pos) {
            self.focus = Focus::Prompt;
        }

        Vec::new()
    }

    /// Replace the widget's text when the page value changed elsewhere
    fn sync_textarea(&mut self) {
        let current = self.textarea.lines().join("\n");
        if current == self.page.prompt() {
            return;
        }

        let lines = self.page.prompt().split('\n').map(String::from).collect();
        let mut textarea = new_textarea(lines);
        if let Some(block) = self.textarea.block() {
            textarea.set_block(block.clone());
        }
        textarea.set_cursor_style(self.textarea.cursor_style());
        textarea.move_cursor(CursorMove::Bottom);
        textarea.move_cursor(CursorMove::End);
        self.textarea = textarea;
    }
}

fn new_textarea(lines: Vec<String>) -> TextArea<'static> {
    let mut textarea = TextArea::new(lines);
    textarea.set_placeholder_text(PLACEHOLDER);
    textarea
}
