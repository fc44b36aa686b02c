//! Pane layout
//!
//! Panes share the viewport width equally and take the full height minus the
//! rows reserved for the help bar. Leftover columns from the integer division
//! stay unused.

use ratatui::layout::Rect;

/// Outer size of every pane, borders included
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PaneSize {
    pub width: u16,
    pub height: u16,
}

/// Size each of `count` panes gets in a `width` x `height` viewport.
///
/// Height is clamped to zero when the viewport is shorter than `help_height`.
pub fn pane_size(width: u16, height: u16, count: usize, help_height: u16) -> PaneSize {
    if count == 0 {
        return PaneSize::default();
    }
    let count = u16::try_from(count).unwrap_or(u16::MAX);
    PaneSize {
        width: width / count,
        height: height.saturating_sub(help_height),
    }
}

/// Screen rectangle of each pane, left to right from the top-left corner
pub fn pane_rects(size: PaneSize, count: usize) -> Vec<Rect> {
    (0..count)
        .map(|i| {
            let x = (i as u32 * size.width as u32).min(u16::MAX as u32) as u16;
            Rect::new(x, 0, size.width, size.height)
        })
        .collect()
}
