//! Error types for the panel
//!
//! Dispatch, layout and rendering are total and never fail. Errors only come
//! from construction (an out-of-range pane count) and from terminal I/O in the
//! event loop.

use thiserror::Error;

/// Errors surfaced by panel construction and the terminal event loop
#[derive(Error, Debug)]
pub enum PanelError {
    /// Terminal I/O failed (raw mode, drawing, event polling)
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The requested pane count is outside the supported bounds
    #[error("pane count {count} is out of range (expected {min}..={max})")]
    RegionCount {
        count: usize,
        min: usize,
        max: usize,
    },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, PanelError>;
