//! # TopicBar Component
//!
//! One tab per catalog topic, rendered as a single centered line. The tab
//! whose title matches the current topic is highlighted (cyan background,
//! black text); the rest stay dim. This is the `is_active` derived view
//! made visible: exactly one tab is ever highlighted.
//!
//! Stateless — the bar receives the catalog and the App's `is_active`
//! verdict per title, and renders what it's given.

use crate::core::catalog::Catalog;
use crate::core::state::App;
use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

pub struct TopicBar<'a> {
    catalog: &'a Catalog,
    active: Vec<bool>,
}

impl<'a> TopicBar<'a> {
    /// Snapshot the active-tab verdict for each topic from the app.
    pub fn new(app: &'a App) -> Self {
        let active = app
            .catalog
            .iter()
            .map(|topic| app.is_active(topic.title))
            .collect();
        Self {
            catalog: &app.catalog,
            active,
        }
    }
}

impl Component for TopicBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut spans: Vec<Span> = Vec::with_capacity(self.catalog.len() * 2);
        for (index, topic) in self.catalog.iter().enumerate() {
            if index > 0 {
                spans.push(Span::raw("  "));
            }
            let style = if self.active[index] {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White).add_modifier(Modifier::DIM)
            };
            spans.push(Span::styled(format!(" {} ", topic.title), style));
        }

        let bar = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
        frame.render_widget(bar, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::{Action, update};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn highlighted_cells(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .filter(|c| c.style().bg == Some(Color::Cyan))
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_all_titles_are_rendered() {
        let backend = TestBackend::new(100, 1);
        let mut terminal = Terminal::new(backend).unwrap();

        let mut app = App::new(Catalog::builtin());
        update(&mut app, Action::Start);

        terminal
            .draw(|f| TopicBar::new(&app).render(f, f.area()))
            .unwrap();

        let text = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>();
        for title in ["Programming", "Coding", "Python", "Loops", "Conditionals"] {
            assert!(text.contains(title), "missing tab: {title}");
        }
    }

    #[test]
    fn test_only_current_topic_is_highlighted() {
        let backend = TestBackend::new(100, 1);
        let mut terminal = Terminal::new(backend).unwrap();

        let mut app = App::new(Catalog::builtin());
        update(&mut app, Action::Start);
        update(&mut app, Action::Next);
        update(&mut app, Action::Next);

        terminal
            .draw(|f| TopicBar::new(&app).render(f, f.area()))
            .unwrap();

        let highlighted = highlighted_cells(&terminal);
        assert!(highlighted.contains("Python"));
        assert!(!highlighted.contains("Loops"));
        assert!(!highlighted.contains("Programming"));
    }

    #[test]
    fn test_highlight_follows_backward_wrap() {
        let backend = TestBackend::new(100, 1);
        let mut terminal = Terminal::new(backend).unwrap();

        let mut app = App::new(Catalog::builtin());
        update(&mut app, Action::Start);
        update(&mut app, Action::Previous);

        terminal
            .draw(|f| TopicBar::new(&app).render(f, f.area()))
            .unwrap();

        assert!(highlighted_cells(&terminal).contains("Conditionals"));
    }
}
