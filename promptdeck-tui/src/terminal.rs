//! Terminal management and main run loop

use std::io::{self, Stdout};
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::{
    event::{
        DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
        Event, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags,
        PushKeyboardEnhancementFlags,
    },
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, supports_keyboard_enhancement, EnterAlternateScreen,
        LeaveAlternateScreen, SetTitle,
    },
};
use promptdeck_core::shell::{LANG, TITLE};
use promptdeck_core::{FavoritesPanel, Msg, Page, PromptDeckConfig, PromptInput};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver};

use crate::app::App;
use crate::effects::EffectRunner;
use crate::event::poll_event;
use crate::ui;

type Backend = CrosstermBackend<Stdout>;

/// Initialize the terminal for TUI mode.
///
/// Returns whether keyboard enhancement was pushed (needed on restore).
fn init_terminal() -> Result<(Terminal<Backend>, bool)> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableBracketedPaste,
        SetTitle(TITLE)
    )
    .context("Failed to enter alternate screen")?;

    // Lets Ctrl+Enter arrive as a modified Enter instead of Ctrl+J
    let enhanced = supports_keyboard_enhancement().unwrap_or(false);
    if enhanced {
        execute!(
            stdout,
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES)
        )
        .context("Failed to enable keyboard enhancement")?;
    }
    tracing::debug!(enhanced, "terminal initialized");

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok((terminal, enhanced))
}

/// Restore the terminal to normal mode
fn restore_terminal(terminal: &mut Terminal<Backend>, enhanced: bool) -> Result<()> {
    if enhanced {
        execute!(terminal.backend_mut(), PopKeyboardEnhancementFlags)
            .context("Failed to disable keyboard enhancement")?;
    }
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableBracketedPaste
    )
    .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

/// Build a fresh page from configuration
pub fn build_page(config: &PromptDeckConfig) -> Result<Page> {
    let favorites = FavoritesPanel::from_source(config.favorites_source().as_ref())
        .context("Failed to load favorites")?;
    Ok(Page::new(favorites, PromptInput::new(config.busy_reset())))
}

/// Run the TUI application
pub async fn run(config: PromptDeckConfig) -> Result<()> {
    let page = build_page(&config)?;
    let sink = config.open_sink().context("Failed to open submission sink")?;

    let (busy_tx, busy_rx) = unbounded_channel();
    let runner = EffectRunner::new(sink, busy_tx);
    let mut app = App::new(page);

    let (mut terminal, enhanced) = init_terminal()?;
    tracing::info!(title = TITLE, lang = LANG, "promptdeck started");

    let result = run_loop(&mut terminal, &mut app, &runner, busy_rx);

    // Restore terminal (even if loop failed)
    restore_terminal(&mut terminal, enhanced)?;
    tracing::info!("promptdeck stopped");

    result
}

/// Main event loop
fn run_loop(
    terminal: &mut Terminal<Backend>,
    app: &mut App,
    runner: &EffectRunner,
    mut busy_rx: UnboundedReceiver<u64>,
) -> Result<()> {
    loop {
        // Busy resets that fired since the last frame, applied before drawing
        drain_busy_resets(app, runner, &mut busy_rx);

        terminal.draw(|frame| ui::render(frame, app))?;

        // Short timeout keeps the busy indicator responsive
        if let Some(event) = poll_event(Duration::from_millis(50))? {
            let effects = match event {
                Event::Key(key) => app.handle_key(key),
                Event::Mouse(mouse) => app.handle_mouse(mouse),
                Event::Paste(text) => app.handle_paste(&text),
                // Terminal resized, will be handled on next draw
                _ => Vec::new(),
            };
            runner.run(effects);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Apply every busy reset that has fired so far
fn drain_busy_resets(app: &mut App, runner: &EffectRunner, busy_rx: &mut UnboundedReceiver<u64>) {
    while let Ok(generation) = busy_rx.try_recv() {
        let effects = app.dispatch(Msg::BusyElapsed { generation });
        runner.run(effects);
    }
}
