//! Key event vocabulary shared by the input adapter, the key dispatcher and the
//! mode engine.
//!
//! The terminal driver yields exactly one `KeyEvent` per blocking read. Printable
//! characters arrive as `KeyCode::Char`; the small set of named special keys the
//! editor understands gets its own variant. `Null` models the NUL keystroke
//! (Ctrl-@ / Ctrl-Space on most terminals) which, like Esc, leaves Insert mode.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// KeyCode enumerates normalized logical key representations consumed by higher layers.
pub enum KeyCode {
    Char(char),
    Enter,
    Esc,
    Backspace,
    Tab,
    Up,
    Down,
    Left,
    Right,
    Null,
}

impl KeyCode {
    /// Printable ASCII range accepted for text entry (ordinal strictly between 31 and 127).
    pub fn printable(self) -> Option<char> {
        match self {
            KeyCode::Char(c) if is_printable(c) => Some(c),
            _ => None,
        }
    }
}

/// True for characters the buffer accepts via `insert_char`.
pub fn is_printable(c: char) -> bool {
    let ord = c as u32;
    31 < ord && ord < 127
}

bitflags::bitflags! {
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct KeyModifiers: u8 {
        const CTRL = 0b0000_0001;
        const ALT  = 0b0000_0010;
        const SHIFT= 0b0000_0100;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyEvent {
    pub code: KeyCode,
    pub mods: KeyModifiers,
}

impl KeyEvent {
    /// Key event without modifiers.
    pub fn plain(code: KeyCode) -> Self {
        Self {
            code,
            mods: KeyModifiers::empty(),
        }
    }

    pub fn char(c: char) -> Self {
        Self::plain(KeyCode::Char(c))
    }
}

impl From<KeyCode> for KeyEvent {
    fn from(code: KeyCode) -> Self {
        Self::plain(code)
    }
}

impl fmt::Display for KeyEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}{:?}", self.code, self.mods)
    }
}
