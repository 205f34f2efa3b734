//! # Front Page Component
//!
//! The welcome screen shown at startup and after a restart.

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

pub struct FrontPage;

impl Component for FrontPage {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let banner = vec![
            Line::from(Span::styled(
                "Welcome to",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Primer: a Python learning walkthrough",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )),
        ];

        let version_text = format!("v{}", env!("CARGO_PKG_VERSION"));
        let footer = vec![
            Line::from(Span::styled(
                "Press Enter to start learning",
                Style::default().fg(Color::White),
            )),
            Line::from(Span::styled(
                version_text,
                Style::default().fg(Color::DarkGray),
            )),
        ];

        let banner_height = banner.len() as u16;
        let footer_height = footer.len() as u16;

        let vertical_layout = Layout::vertical([
            Constraint::Length(banner_height),
            Constraint::Length(1), // Spacer
            Constraint::Length(footer_height),
        ])
        .flex(Flex::Center)
        .split(area);

        frame.render_widget(
            Paragraph::new(banner).alignment(Alignment::Center),
            vertical_layout[0],
        );
        frame.render_widget(
            Paragraph::new(footer).alignment(Alignment::Center),
            vertical_layout[2],
        );
    }
}
