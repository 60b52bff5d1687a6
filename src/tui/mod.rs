//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! - **Loading**: draws every ~80ms so the spinner animates.
//! - **Idle**: sleeps up to 500ms, only redraws on events or terminal resize.
//!
//! A `SteadyBlock` cursor style is used instead of a blinking cursor because
//! ratatui's `set_cursor_position` resets the terminal's blink timer on every
//! `draw()` call, making blinking cursors appear erratic during continuous redraws.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};
use std::time::{Duration, Instant};

use crossterm::cursor::{Hide, SetCursorStyle, Show};
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;

use crate::catalog::{GoogleBooksSource, VolumeSource};
use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::search;
use crate::core::state::{App, Screen};
use crate::tui::component::EventHandler;
use crate::tui::components::{BookListState, FormEvent, ResultsEvent, SearchForm};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub search_form: SearchForm,
    pub book_list: BookListState,
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            search_form: SearchForm::new(),
            book_list: BookListState::new(),
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(
            stdout(),
            EnableMouseCapture,
            EnableBracketedPaste,
            Show,                        // Show cursor for input editing
            SetCursorStyle::SteadyBlock, // Non-blinking, see module docs
        )?;
        info!("Terminal modes enabled (mouse, bracketed paste, steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture, DisableBracketedPaste, Hide);
    }
}

/// Build the catalog client from a resolved config.
pub fn build_source(config: &ResolvedConfig) -> Arc<dyn VolumeSource> {
    Arc::new(GoogleBooksSource::new(Some(config.base_url.clone())))
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let source = build_source(&config);
    let mut app = App::from_config(source, &config);
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = match TerminalModeGuard::new() {
        Ok(guard) => Some(guard),
        Err(e) => {
            warn!("Failed to enable terminal modes: {}", e);
            None
        }
    };

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();

    // Animation timer
    let start_time = Instant::now();
    let mut needs_redraw = true; // Force first frame

    'main: loop {
        let animating = app.is_loading();
        if animating {
            needs_redraw = true;
        }

        // Only draw when something changed
        if needs_redraw {
            let spinner_frame = (start_time.elapsed().as_secs_f32() * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, spinner_frame))?;
            needs_redraw = false;
        }

        // Dynamic poll timeout: short when animating (~12fps), long when idle
        let timeout = if animating {
            Duration::from_millis(80)
        } else {
            Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain ALL pending events before next draw
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            if let Some(action) = route_event(&app, &mut tui, &event) {
                let effect = update(&mut app, action);
                if apply_effect(effect, &app, &mut tui, &tx) {
                    break 'main;
                }
            }
        }

        // Handle background task actions (search results)
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            let effect = update(&mut app, action);
            if apply_effect(effect, &app, &mut tui, &tx) {
                break 'main;
            }
        }
    }

    info!("Shutting down");
    ratatui::restore();
    Ok(())
}

/// Sends a terminal event to whichever component owns the current screen
/// and converts what it emits into a core action.
fn route_event(app: &App, tui: &mut TuiState, event: &TuiEvent) -> Option<Action> {
    // Ctrl+C always quits regardless of screen
    if matches!(event, TuiEvent::ForceQuit) {
        return Some(Action::Quit);
    }
    // Resize just needs a redraw
    if matches!(event, TuiEvent::Resize) {
        return None;
    }

    match app.screen {
        Screen::Searching => match tui.search_form.handle_event(event)? {
            FormEvent::Submit(criteria) => Some(Action::Submit(criteria)),
            FormEvent::Quit => Some(Action::Quit),
        },
        // The form is locked behind the overlay; nothing to route
        Screen::Loading => None,
        Screen::Results => match tui.book_list.handle_event(event)? {
            ResultsEvent::Back => Some(Action::Back),
        },
    }
}

/// Carries out an effect. Returns `true` when the app should exit.
fn apply_effect(effect: Effect, app: &App, tui: &mut TuiState, tx: &mpsc::Sender<Action>) -> bool {
    match effect {
        Effect::None => false,
        Effect::Quit => true,
        Effect::SpawnSearch => {
            tui.book_list = BookListState::new();
            spawn_search(app, tx.clone());
            false
        }
        Effect::ResetForm => {
            tui.search_form.reset();
            tui.book_list = BookListState::new();
            false
        }
    }
}

fn spawn_search(app: &App, tx: mpsc::Sender<Action>) {
    info!("Spawning search via {}", app.source.name());

    // Clone what we need for the async task
    let source = app.source.clone();
    let criteria = app.criteria.clone();
    let max_results = app.max_results;
    let display_delay = app.display_delay;

    tokio::spawn(async move {
        let action = search::run(source.as_ref(), &criteria, max_results, display_delay).await;
        if tx.send(action).is_err() {
            warn!("Failed to send search result: receiver dropped");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::book::SearchCriteria;
    use crate::test_support::{StubSource, dune_volumes, test_app};

    fn type_text(tui: &mut TuiState, app: &App, text: &str) {
        for c in text.chars() {
            assert_eq!(route_event(app, tui, &TuiEvent::InputChar(c)), None);
        }
    }

    #[test]
    fn test_force_quit_from_any_screen() {
        let mut app = test_app();
        let mut tui = TuiState::new();
        assert_eq!(route_event(&app, &mut tui, &TuiEvent::ForceQuit), Some(Action::Quit));
        app.screen = Screen::Loading;
        assert_eq!(route_event(&app, &mut tui, &TuiEvent::ForceQuit), Some(Action::Quit));
    }

    #[test]
    fn test_enter_on_form_submits_criteria() {
        let app = test_app();
        let mut tui = TuiState::new();
        type_text(&mut tui, &app, "dune");
        assert_eq!(
            route_event(&app, &mut tui, &TuiEvent::Submit),
            Some(Action::Submit(SearchCriteria::new("dune", "", "")))
        );
    }

    #[test]
    fn test_loading_swallows_input() {
        let mut app = test_app();
        app.screen = Screen::Loading;
        let mut tui = TuiState::new();
        assert_eq!(route_event(&app, &mut tui, &TuiEvent::Submit), None);
        assert_eq!(route_event(&app, &mut tui, &TuiEvent::InputChar('x')), None);
        assert_eq!(tui.search_form.criteria(), SearchCriteria::default());
    }

    #[test]
    fn test_escape_on_results_goes_back() {
        let mut app = test_app();
        app.screen = Screen::Results;
        let mut tui = TuiState::new();
        assert_eq!(route_event(&app, &mut tui, &TuiEvent::Escape), Some(Action::Back));
    }

    #[test]
    fn test_reset_form_effect_clears_fields() {
        let app = test_app();
        let mut tui = TuiState::new();
        type_text(&mut tui, &app, "dune");
        let (tx, _rx) = mpsc::channel();
        assert!(!apply_effect(Effect::ResetForm, &app, &mut tui, &tx));
        assert_eq!(tui.search_form.criteria(), SearchCriteria::default());
    }

    #[test]
    fn test_quit_effect_exits() {
        let app = test_app();
        let mut tui = TuiState::new();
        let (tx, _rx) = mpsc::channel();
        assert!(apply_effect(Effect::Quit, &app, &mut tui, &tx));
        assert!(!apply_effect(Effect::None, &app, &mut tui, &tx));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_spawned_search_reports_back() {
        let mut app = App::new(Arc::new(StubSource::with_volumes(dune_volumes())));
        app.display_delay = Duration::ZERO;
        let mut tui = TuiState::new();
        let (tx, rx) = mpsc::channel();

        let effect = update(&mut app, Action::Submit(SearchCriteria::new("", "Other", "")));
        assert_eq!(effect, Effect::SpawnSearch);
        apply_effect(effect, &app, &mut tui, &tx);

        let action = rx.recv_timeout(Duration::from_secs(5)).unwrap();
        update(&mut app, action);
        assert_eq!(app.screen, Screen::Results);
        assert_eq!(app.books.len(), 1);
        assert_eq!(app.books[0].id, "2");
    }
}
