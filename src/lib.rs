//! # Introduction
//!
//! panedit shows a fixed row of editable text panes side by side in the
//! terminal, for comparing or editing several short blocks of text at once.
//! Exactly one pane has focus; `Ctrl-N` cycles it, `Esc` or `Ctrl-C` quits.
//!
//! ## Event flow
//!
//! ```text
//! crossterm Event → PanelEvent → PanelModel::dispatch → panes → compose → frame
//! ```
//!
//! 1. [`event`] — the closed set of events the panel handles and the
//!    [`event::Command`]s it hands back to the loop.
//! 2. [`keymap`] — the fixed chord table (next, generate, quit).
//! 3. [`layout`] — splits the viewport between panes.
//! 4. [`panel`] — [`panel::PanelModel`], the state machine owning every pane.
//! 5. [`region`] — the [`region::TextRegion`] capability and
//!    [`region::TextArea`], the pane used by the binary.
//! 6. [`compose`] / [`help`] — join rendered panes and add the help line.
//! 7. [`app`] — the single-threaded draw-and-poll loop, run inside a
//!    [`terminal::TerminalGuard`].

pub mod app;
pub mod compose;
pub mod config;
pub mod error;
pub mod event;
pub mod help;
pub mod keymap;
pub mod layout;
pub mod panel;
pub mod region;
pub mod terminal;
pub mod theme;
pub mod zone;

pub use app::App;
pub use error::{PanelError, Result};
pub use panel::PanelModel;
