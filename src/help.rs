//! Help bar rendering

use crate::keymap::KeyBinding;
use crate::theme::Theme;
use ratatui::text::{Line, Span};
use std::rc::Rc;

const SEPARATOR: &str = " • ";

/// Renders the one-line key help shown under the panes
pub trait HelpRenderer {
    fn short_help(&self, bindings: &[&KeyBinding]) -> Line<'static>;
}

/// `key desc • key desc • ...` in the theme's help colours
#[derive(Debug, Clone)]
pub struct HelpBar {
    theme: Rc<Theme>,
}

impl HelpBar {
    pub fn new(theme: Rc<Theme>) -> Self {
        HelpBar { theme }
    }
}

impl HelpRenderer for HelpBar {
    fn short_help(&self, bindings: &[&KeyBinding]) -> Line<'static> {
        let mut spans = Vec::with_capacity(bindings.len() * 4);
        for (i, binding) in bindings.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(SEPARATOR, self.theme.help_separator));
            }
            spans.push(Span::styled(binding.help_key, self.theme.help_key));
            spans.push(Span::styled(" ", self.theme.help_desc));
            spans.push(Span::styled(binding.help_desc, self.theme.help_desc));
        }
        Line::from(spans)
    }
}
