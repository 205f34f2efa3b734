//! # Application State
//!
//! Core business state for Primer. This module contains domain logic only -
//! no TUI-specific types. Presentation concerns live in the `tui` module.
//!
//! ```text
//! App
//! ├── catalog: Catalog   // fixed topic list (never mutated)
//! ├── screen: Screen     // Front / Learning / Done
//! └── cursor: usize      // index of the current topic, 0 <= cursor < len
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! This keeps things predictable, so no surprise mutations.
//!
//! The cursor is the sole identity key for navigation. `is_active` compares
//! display titles as a derived view for the topic bar, but no transition
//! ever looks a topic up by its title text.

use crate::core::catalog::{Catalog, Topic};

/// Coarse UI mode the application is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Welcome page, shown at startup and after a restart.
    Front,
    /// Topic walkthrough, one topic visible at a time.
    Learning,
    /// Closing page, reached by stepping forward past the last topic.
    Done,
}

pub struct App {
    pub catalog: Catalog,
    screen: Screen,
    cursor: usize,
}

impl App {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            screen: Screen::Front,
            cursor: 0,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Topic at the cursor. Meaningful on every screen: the cursor is kept
    /// in range at all times, including on `Done`.
    pub fn current_topic(&self) -> &Topic {
        self.catalog.get(self.cursor)
    }

    /// True iff `title` is the current topic's title. Derived view for the
    /// topic bar's active-tab highlight; exactly one title satisfies this
    /// at any time.
    pub fn is_active(&self, title: &str) -> bool {
        self.current_topic().title == title
    }

    /// Begin (or resume) the walkthrough.
    ///
    /// The cursor is not reset: after a quit-less journey back to `Front`
    /// via `restart` it is 0, but `start` itself always resumes wherever
    /// the cursor was left.
    ///
    /// # Panics
    ///
    /// Panics unless the current screen is `Front`. Calling a transition
    /// from the wrong screen is a bug in the caller's key routing.
    pub fn start(&mut self) {
        assert_eq!(self.screen, Screen::Front, "start() is only valid on Front");
        self.screen = Screen::Learning;
        log::debug!("start: showing topic {} of {}", self.cursor + 1, self.catalog.len());
    }

    /// Step forward. From the last topic this finishes the walkthrough
    /// instead of wrapping: the screen becomes `Done` and the cursor stays
    /// on the last index.
    ///
    /// # Panics
    ///
    /// Panics unless the current screen is `Learning`.
    pub fn next(&mut self) {
        assert_eq!(self.screen, Screen::Learning, "next() is only valid on Learning");
        if self.cursor + 1 < self.catalog.len() {
            self.cursor += 1;
            log::debug!("next: topic {} of {}", self.cursor + 1, self.catalog.len());
        } else {
            self.screen = Screen::Done;
            log::info!("walkthrough finished after topic {}", self.cursor + 1);
        }
    }

    /// Step backward, wrapping from the first topic to the last. Unlike
    /// `next` there is no boundary: backward motion never gets stuck.
    ///
    /// # Panics
    ///
    /// Panics unless the current screen is `Learning`.
    pub fn previous(&mut self) {
        assert_eq!(
            self.screen,
            Screen::Learning,
            "previous() is only valid on Learning"
        );
        self.cursor = (self.cursor + self.catalog.len() - 1) % self.catalog.len();
        log::debug!("previous: topic {} of {}", self.cursor + 1, self.catalog.len());
    }

    /// Return to the welcome page with the cursor reset to the first topic.
    ///
    /// # Panics
    ///
    /// Panics unless the current screen is `Done`.
    pub fn restart(&mut self) {
        assert_eq!(self.screen, Screen::Done, "restart() is only valid on Done");
        self.screen = Screen::Front;
        self.cursor = 0;
        log::debug!("restart: back to front page");
    }
}
