//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Enablement
//!
//! The state machine's transitions each have a "valid from" screen and
//! assert it. This loop is what upholds that contract: `action_for`
//! routes raw input per-screen, so a transition is only ever dispatched
//! from a screen it is valid on. A key that means nothing on the current
//! screen is dropped here, not absorbed by the core.
//!
//! ## Redraw Strategy
//!
//! Nothing animates, so the loop only redraws after an input event or a
//! terminal resize; otherwise it sleeps in `poll` for up to 500ms.

mod component;
mod components;
mod event;
mod ui;

use log::info;

use crate::core::action::{Action, Effect, update};
use crate::core::catalog::Catalog;
use crate::core::state::{App, Screen};
use crate::tui::event::{TuiEvent, poll_event_timeout};

const POLL_TIMEOUT: std::time::Duration = std::time::Duration::from_millis(500);

/// Translate an input event into an action, given the current screen.
/// Returns `None` for keys that do nothing on this screen.
fn action_for(screen: Screen, event: &TuiEvent) -> Option<Action> {
    // Ctrl+C always quits regardless of screen
    if matches!(event, TuiEvent::ForceQuit) {
        return Some(Action::Quit);
    }
    match screen {
        Screen::Front => match event {
            TuiEvent::Submit | TuiEvent::InputChar('s') => Some(Action::Start),
            TuiEvent::InputChar('q') | TuiEvent::Escape => Some(Action::Quit),
            _ => None,
        },
        Screen::Learning => match event {
            TuiEvent::Submit | TuiEvent::CursorRight | TuiEvent::InputChar('n') => {
                Some(Action::Next)
            }
            TuiEvent::CursorLeft | TuiEvent::InputChar('p') => Some(Action::Previous),
            TuiEvent::InputChar('q') => Some(Action::Quit),
            _ => None,
        },
        Screen::Done => match event {
            TuiEvent::Submit | TuiEvent::InputChar('r') => Some(Action::Restart),
            TuiEvent::InputChar('q') | TuiEvent::Escape => Some(Action::Quit),
            _ => None,
        },
    }
}

pub fn run() -> std::io::Result<()> {
    let mut app = App::new(Catalog::builtin());
    let mut terminal = ratatui::init();

    info!("TUI started with {} topics", app.catalog.len());

    let mut needs_redraw = true; // Force first frame
    loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &app))?;
            needs_redraw = false;
        }

        let Some(tui_event) = poll_event_timeout(POLL_TIMEOUT)? else {
            continue;
        };
        needs_redraw = true;

        if matches!(tui_event, TuiEvent::Resize) {
            continue;
        }

        let Some(action) = action_for(app.screen(), &tui_event) else {
            continue;
        };
        if update(&mut app, action) == Effect::Quit {
            break;
        }
    }

    info!("TUI exiting");
    ratatui::restore();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_front_routing() {
        assert_eq!(
            action_for(Screen::Front, &TuiEvent::Submit),
            Some(Action::Start)
        );
        assert_eq!(
            action_for(Screen::Front, &TuiEvent::InputChar('s')),
            Some(Action::Start)
        );
        assert_eq!(
            action_for(Screen::Front, &TuiEvent::InputChar('q')),
            Some(Action::Quit)
        );
        // Navigation keys are disabled off the learning screen.
        assert_eq!(action_for(Screen::Front, &TuiEvent::CursorRight), None);
        assert_eq!(action_for(Screen::Front, &TuiEvent::CursorLeft), None);
    }

    #[test]
    fn test_learning_routing() {
        assert_eq!(
            action_for(Screen::Learning, &TuiEvent::CursorRight),
            Some(Action::Next)
        );
        assert_eq!(
            action_for(Screen::Learning, &TuiEvent::Submit),
            Some(Action::Next)
        );
        assert_eq!(
            action_for(Screen::Learning, &TuiEvent::CursorLeft),
            Some(Action::Previous)
        );
        assert_eq!(action_for(Screen::Learning, &TuiEvent::Escape), None);
    }

    #[test]
    fn test_done_routing() {
        assert_eq!(
            action_for(Screen::Done, &TuiEvent::Submit),
            Some(Action::Restart)
        );
        assert_eq!(action_for(Screen::Done, &TuiEvent::CursorRight), None);
        assert_eq!(action_for(Screen::Done, &TuiEvent::CursorLeft), None);
        assert_eq!(
            action_for(Screen::Done, &TuiEvent::InputChar('q')),
            Some(Action::Quit)
        );
    }

    #[test]
    fn test_force_quit_works_on_every_screen() {
        for screen in [Screen::Front, Screen::Learning, Screen::Done] {
            assert_eq!(
                action_for(screen, &TuiEvent::ForceQuit),
                Some(Action::Quit)
            );
        }
    }
}
