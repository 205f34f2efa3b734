//! # KeyHints Component
//!
//! Bottom status line: the keys that do something on the current screen,
//! plus walkthrough progress while learning. This line is the visible half
//! of the enablement contract — a transition is only reachable while its
//! key is listed here.

use crate::core::state::{App, Screen};
use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Span;

pub struct KeyHints {
    line: String,
}

impl KeyHints {
    pub fn new(app: &App) -> Self {
        let line = match app.screen() {
            Screen::Front => "Enter start | q quit".to_string(),
            Screen::Learning => format!(
                "← previous | → next | q quit | topic {} of {}",
                app.cursor() + 1,
                app.catalog.len()
            ),
            Screen::Done => "Enter restart | q quit".to_string(),
        };
        Self { line }
    }
}

impl Component for KeyHints {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(
            Span::styled(self.line.as_str(), Style::default().fg(Color::DarkGray)),
            area,
        );
    }
}
