//! # Finish Page Component
//!
//! The closing screen, reached by stepping forward past the last topic.

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

pub struct FinishPage;

impl Component for FinishPage {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let banner = Line::from(Span::styled(
            "Thanks for learning with Primer!",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ));
        let hint = Line::from(Span::styled(
            "Press Enter to start over, or q to exit",
            Style::default().fg(Color::White),
        ));

        let vertical_layout = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1), // Spacer
            Constraint::Length(1),
        ])
        .flex(Flex::Center)
        .split(area);

        frame.render_widget(
            Paragraph::new(banner).alignment(Alignment::Center),
            vertical_layout[0],
        );
        frame.render_widget(
            Paragraph::new(hint).alignment(Alignment::Center),
            vertical_layout[2],
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_finish_page_shows_thanks_and_restart_hint() {
        let backend = TestBackend::new(80, 10);
        let mut terminal = Terminal::new(backend).unwrap();

        terminal
            .draw(|f| {
                FinishPage.render(f, f.area());
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        let text = buffer
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>();

        assert!(text.contains("Thanks for learning"));
        assert!(text.contains("start over"));
    }
}
