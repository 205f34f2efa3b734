//! # Actions
//!
//! Everything that can happen in Primer becomes an `Action`.
//! User presses Enter on the front page? That's `Action::Start`.
//! Arrow key while learning? That's `Action::Next` or `Action::Previous`.
//!
//! The `update()` function takes the current state and an action, applies
//! the transition, and returns an [`Effect`] for the event loop to act on.
//! No I/O happens here.
//!
//! ```text
//! State + Action  →  update()  →  New State (+ Effect)
//! ```
//!
//! This makes everything testable: drive `update` with a scripted sequence
//! of actions and assert on the resulting screen and cursor.
//!
//! The TUI only dispatches actions that are valid for the current screen
//! (its per-screen key routing is the enablement layer); `update` forwards
//! to the `App` transition methods, which assert that contract.

use crate::core::state::App;

/// A user-originated event, already translated from raw input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Leave the front page and show the current topic.
    Start,
    /// Step forward; finishes the walkthrough from the last topic.
    Next,
    /// Step backward, wrapping from the first topic to the last.
    Previous,
    /// Leave the closing page and return to the front, from topic one.
    Restart,
    /// Exit the application.
    Quit,
}

/// What the event loop should do after a state update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
}

/// Apply `action` to `app`.
///
/// # Panics
///
/// Panics if `action` is a transition that is not valid on the current
/// screen (see the `App` transition methods). The caller routes input
/// per-screen, so this only fires on a routing bug.
pub fn update(app: &mut App, action: Action) -> Effect {
    log::debug!("update: {:?} on {:?}", action, app.screen());
    match action {
        Action::Start => app.start(),
        Action::Next => app.next(),
        Action::Previous => app.previous(),
        Action::Restart => app.restart(),
        Action::Quit => return Effect::Quit,
    }
    Effect::None
}
