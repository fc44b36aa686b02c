//! Fixed key-chord table
//!
//! Three logical actions are bound: advance focus, generate and quit. The
//! table is built once by [`KeyMap::new`] and never changes.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Logical action a chord resolves to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move focus to the next pane, wrapping around
    Next,
    /// Reserved; recognised but does nothing yet
    Generate,
    Quit,
}

/// A single key combination
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyChord {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyChord {
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        KeyChord { code, modifiers }
    }

    pub const fn ctrl(c: char) -> Self {
        KeyChord::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    /// Whether `key` is this chord. Shift is ignored for character keys since
    /// terminals disagree on reporting it.
    pub fn matches(&self, key: &KeyEvent) -> bool {
        if key.code != self.code {
            return false;
        }
        let mut mods = key.modifiers;
        if matches!(key.code, KeyCode::Char(_)) {
            mods.remove(KeyModifiers::SHIFT);
        }
        mods == self.modifiers
    }
}

/// Chords bound to one action, with the label shown in the help bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyBinding {
    pub action: Action,
    pub chords: Vec<KeyChord>,
    pub help_key: &'static str,
    pub help_desc: &'static str,
}

impl KeyBinding {
    pub fn matches(&self, key: &KeyEvent) -> bool {
        self.chords.iter().any(|chord| chord.matches(key))
    }
}

/// The three bindings the panel recognises
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyMap {
    pub next: KeyBinding,
    pub generate: KeyBinding,
    pub quit: KeyBinding,
}

impl KeyMap {
    pub fn new() -> Self {
        KeyMap {
            next: KeyBinding {
                action: Action::Next,
                chords: vec![KeyChord::ctrl('n')],
                help_key: "ctrl+n",
                help_desc: "next",
            },
            generate: KeyBinding {
                action: Action::Generate,
                chords: vec![KeyChord::new(KeyCode::Enter, KeyModifiers::CONTROL)],
                help_key: "ctrl+enter",
                help_desc: "generate",
            },
            quit: KeyBinding {
                action: Action::Quit,
                chords: vec![
                    KeyChord::new(KeyCode::Esc, KeyModifiers::NONE),
                    KeyChord::ctrl('c'),
                ],
                help_key: "esc",
                help_desc: "quit",
            },
        }
    }

    /// Resolve a key press. Quit is checked first so it always wins.
    pub fn resolve(&self, key: &KeyEvent) -> Option<Action> {
        [&self.quit, &self.next, &self.generate]
            .into_iter()
            .find(|binding| binding.matches(key))
            .map(|binding| binding.action)
    }

    /// Bindings in help-bar order
    pub fn bindings(&self) -> [&KeyBinding; 3] {
        [&self.next, &self.generate, &self.quit]
    }
}

impl Default for KeyMap {
    fn default() -> Self {
        Self::new()
    }
}
