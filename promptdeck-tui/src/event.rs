//! Terminal input polling and key chord classification

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Poll for events with timeout
pub fn poll_event(timeout: Duration) -> std::io::Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Key releases show up once keyboard enhancement is on; only presses count
pub fn is_press(key: &KeyEvent) -> bool {
    key.kind != KeyEventKind::Release
}

/// Ctrl+C / Ctrl+Q
pub fn is_quit(key: &KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('q'))
}

/// Ctrl+O opens/closes the favorites flyout
pub fn is_favorites_toggle(key: &KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('o')
}

/// Ctrl+Enter or Cmd(Super)+Enter.
///
/// Terminals without keyboard enhancement deliver Ctrl+Enter as Ctrl+J.
pub fn is_submit_chord(key: &KeyEvent) -> bool {
    let chord_modifier = key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::SUPER);

    match key.code {
        KeyCode::Enter => chord_modifier,
        KeyCode::Char('j') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_submit_chord_variants() {
        assert!(is_submit_chord(&key(KeyCode::Enter, KeyModifiers::CONTROL)));
        assert!(is_submit_chord(&key(KeyCode::Enter, KeyModifiers::SUPER)));
        assert!(is_submit_chord(&key(KeyCode::Char('j'), KeyModifiers::CONTROL)));

        assert!(!is_submit_chord(&key(KeyCode::Enter, KeyModifiers::NONE)));
        assert!(!is_submit_chord(&key(KeyCode::Enter, KeyModifiers::SHIFT)));
        assert!(!is_submit_chord(&key(KeyCode::Char('j'), KeyModifiers::NONE)));
    }

    #[test]
    fn test_quit_and_toggle_keys() {
        assert!(is_quit(&key(KeyCode::Char('c'), KeyModifiers::CONTROL)));
        assert!(is_quit(&key(KeyCode::Char('q'), KeyModifiers::CONTROL)));
        assert!(!is_quit(&key(KeyCode::Char('q'), KeyModifiers::NONE)));

        assert!(is_favorites_toggle(&key(KeyCode::Char('o'), KeyModifiers::CONTROL)));
        assert!(!is_favorites_toggle(&key(KeyCode::Char('o'), KeyModifiers::NONE)));
    }
}
