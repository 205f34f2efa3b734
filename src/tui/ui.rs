use crate::core::state::{App, Screen};
use crate::tui::component::Component;
use crate::tui::components::{FinishPage, FrontPage, KeyHints, TopicBar, TopicView};

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

/// Draw one frame: the current screen's content plus the key-hint footer.
pub fn draw_ui(frame: &mut Frame, app: &App) {
    use Constraint::{Length, Min};
    let [main_area, hints_area] = Layout::vertical([Min(0), Length(1)]).areas(frame.area());

    match app.screen() {
        Screen::Front => FrontPage.render(frame, main_area),
        Screen::Learning => {
            let [bar_area, topic_area] =
                Layout::vertical([Length(2), Min(0)]).areas(main_area);
            TopicBar::new(app).render(frame, bar_area);
            TopicView::new(app.current_topic()).render(frame, topic_area);
        }
        Screen::Done => FinishPage.render(frame, main_area),
    }

    KeyHints::new(app).render(frame, hints_area);
}
