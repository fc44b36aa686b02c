//! Text regions: the editable panes the panel is made of
//!
//! The panel only talks to panes through [`TextRegion`]; [`TextArea`] is the
//! implementation used by the binary.

mod textarea;

pub use textarea::TextArea;

use crate::event::{Command, PanelEvent};
use ratatui::text::Text;

/// Capabilities the panel needs from a pane
pub trait TextRegion {
    /// Set the outer width, borders included
    fn set_width(&mut self, width: u16);

    /// Set the outer height, borders included
    fn set_height(&mut self, height: u16);

    fn width(&self) -> u16;

    fn height(&self) -> u16;

    /// Enter the focused state. May ask for follow-up work such as a blink timer.
    fn focus(&mut self) -> Option<Command>;

    /// Leave the focused state
    fn blur(&mut self);

    fn is_focused(&self) -> bool;

    /// React to an event. Every pane sees every broadcast event; panes decide
    /// for themselves whether it applies.
    fn handle_event(&mut self, event: &PanelEvent) -> Option<Command>;

    /// Draw the pane as a block of styled lines
    fn render(&self) -> Text<'static>;

    /// Current buffer contents
    fn value(&self) -> String;
}
