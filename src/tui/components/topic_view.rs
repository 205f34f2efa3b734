//! # TopicView Component
//!
//! The body of the learning screen: the current topic's title above its
//! descriptive text, wrapped to the available width.

use crate::core::catalog::Topic;
use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

pub struct TopicView<'a> {
    topic: &'a Topic,
}

impl<'a> TopicView<'a> {
    pub fn new(topic: &'a Topic) -> Self {
        Self { topic }
    }
}

impl Component for TopicView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        use Constraint::{Length, Min};
        let [title_area, _spacer, body_area] =
            Layout::vertical([Length(1), Length(1), Min(0)]).areas(area);

        let title = Paragraph::new(Line::from(Span::styled(
            self.topic.title,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(title, title_area);

        // Bodies carry their own embedded newlines; Wrap handles the rest.
        let body = Paragraph::new(self.topic.body)
            .style(Style::default().fg(Color::White))
            .wrap(Wrap { trim: true })
            .alignment(Alignment::Left);
        frame.render_widget(body, body_area);
    }
}
