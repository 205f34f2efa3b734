use ratatui::Frame;
use ratatui::layout::Rect;

/// A reusable UI component.
///
/// Components receive data via props (struct fields) and render to a
/// `Frame` within a given `Rect`. They hold no authoritative state: the
/// core `App` owns the screen and cursor, components render a reflection
/// of it.
///
/// `render` takes `&mut self` to align with ratatui's `StatefulWidget`
/// pattern, even though the current components are all stateless.
pub trait Component {
    /// Render the component into the given area.
    fn render(&mut self, frame: &mut Frame, area: Rect);
}
