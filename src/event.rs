//! Events fed into the panel and the follow-up work it asks for

use crossterm::event::{Event, KeyEvent, KeyEventKind, MouseEvent};

/// Everything the panel can be asked to handle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelEvent {
    /// A key press
    Key(KeyEvent),
    /// The terminal changed size
    Resize { width: u16, height: u16 },
    /// Cursor blink timer fired
    Tick,
    /// Pointer input
    Mouse(MouseEvent),
    /// Bracketed paste
    Paste(String),
}

impl PanelEvent {
    /// Translate a raw terminal event.
    ///
    /// Key releases/repeats and focus gained/lost notifications have no
    /// meaning for the panel and map to `None`.
    pub fn from_terminal(event: Event) -> Option<PanelEvent> {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => Some(PanelEvent::Key(key)),
            Event::Key(_) => None,
            Event::Resize(width, height) => Some(PanelEvent::Resize { width, height }),
            Event::Mouse(mouse) => Some(PanelEvent::Mouse(mouse)),
            Event::Paste(text) => Some(PanelEvent::Paste(text)),
            Event::FocusGained | Event::FocusLost => None,
        }
    }
}

/// Work requested by the panel or a region, run by the event loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// End the session
    Quit,
    /// Deliver a [`PanelEvent::Tick`] after the blink interval
    Blink,
}
