use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};

/// TUI-specific input events, decoupled from which screen is showing.
/// The event loop decides what each means for the current screen.
pub enum TuiEvent {
    /// Ctrl+C: quits from anywhere.
    ForceQuit,
    /// Enter: primary action for the current screen.
    Submit,
    /// Right arrow.
    CursorRight,
    /// Left arrow.
    CursorLeft,
    /// Printable character (lowercased shortcut keys: s, n, p, r, q).
    InputChar(char),
    /// Esc.
    Escape,
    /// Terminal resize — only needs a redraw.
    Resize,
}

/// Poll for an event, blocking up to `timeout`.
pub fn poll_event_timeout(timeout: std::time::Duration) -> std::io::Result<Option<TuiEvent>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }
    let translated = match event::read()? {
        Event::Key(key_event) => {
            // Kitty-protocol terminals report key releases too; only act on press.
            if key_event.kind == KeyEventKind::Release {
                return Ok(None);
            }
            log::debug!(
                "Key event: {:?} with modifiers {:?}",
                key_event.code,
                key_event.modifiers
            );
            match (key_event.modifiers, key_event.code) {
                (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::ForceQuit),
                (_, KeyCode::Enter) => Some(TuiEvent::Submit),
                (_, KeyCode::Right) => Some(TuiEvent::CursorRight),
                (_, KeyCode::Left) => Some(TuiEvent::CursorLeft),
                (_, KeyCode::Esc) => Some(TuiEvent::Escape),
                (_, KeyCode::Char(c)) => Some(TuiEvent::InputChar(c.to_ascii_lowercase())),
                _ => None,
            }
        }
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    };
    Ok(translated)
}
