//! Raw-mode terminal session
//!
//! [`TerminalGuard`] puts the terminal into the state the UI needs and puts
//! it back when dropped, whether the loop returned, failed or panicked.

use std::io::{self, Write};

use crossterm::{
    cursor::Show,
    event::{
        DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
        KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, supports_keyboard_enhancement, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
};
use tracing::{debug, warn};

/// Restores the terminal on drop. Create it before touching the terminal so
/// a failed setup is undone too.
#[derive(Debug, Default)]
pub struct TerminalGuard {
    keyboard_enhanced: bool,
}

impl TerminalGuard {
    pub fn new() -> Self {
        TerminalGuard::default()
    }

    /// Raw mode, alternate screen, mouse capture, bracketed paste and, when
    /// the terminal supports it, disambiguated key codes
    pub fn setup<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        enable_raw_mode()?;
        execute!(out, EnterAlternateScreen, EnableMouseCapture, EnableBracketedPaste)?;
        // Ctrl-Enter is only distinguishable from Enter with enhanced key reporting
        if matches!(supports_keyboard_enhancement(), Ok(true)) {
            execute!(
                out,
                PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES)
            )?;
            self.keyboard_enhanced = true;
        }
        debug!(keyboard_enhanced = self.keyboard_enhanced, "terminal ready");
        Ok(())
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(e) = disable_raw_mode() {
            warn!(error = %e, "could not leave raw mode");
        }
        restore(&mut io::stdout(), self.keyboard_enhanced);
    }
}

/// Undo everything [`TerminalGuard::setup`] writes. Each step runs even if an
/// earlier one failed.
pub fn restore<W: Write>(out: &mut W, keyboard_enhanced: bool) {
    if keyboard_enhanced {
        let _ = execute!(out, PopKeyboardEnhancementFlags);
    }
    let _ = execute!(out, DisableBracketedPaste);
    let _ = execute!(out, DisableMouseCapture);
    let _ = execute!(out, LeaveAlternateScreen);
    let _ = execute!(out, Show);
}
