//! Register Store: 26 named line registers (`a`..=`z`) plus the unnamed clipboard.
//!
//! A copy replaces the target register's content; a paste reads it and
//! leaves it intact so the same block can be pasted repeatedly.

use core_text::Buffer;
use tracing::debug;

/// Register designator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterName {
    Unnamed,
    Named(RegisterLetter),
}

/// One of `a`..=`z`, stored as its slot index. Only `new` builds one, so
/// every value indexes a valid slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegisterLetter(u8);

impl RegisterLetter {
    /// Uppercase letters address the same slot as their lowercase form.
    pub fn new(c: char) -> Option<Self> {
        let c = c.to_ascii_lowercase();
        c.is_ascii_lowercase().then(|| Self(c as u8 - b'a'))
    }

    pub fn as_char(self) -> char {
        char::from(b'a' + self.0)
    }

    fn index(self) -> usize {
        usize::from(self.0)
    }
}

impl RegisterName {
    /// Parse a register letter; `None` for anything outside `a`..=`z` / `A`..=`Z`.
    pub fn from_char(c: char) -> Option<Self> {
        RegisterLetter::new(c).map(Self::Named)
    }
}

#[derive(Debug, Clone)]
pub struct Registers {
    unnamed: Vec<String>,
    named: [Vec<String>; 26],
}

impl Default for Registers {
    fn default() -> Self {
        Self::new()
    }
}

impl Registers {
    pub fn new() -> Self {
        Self {
            unnamed: Vec::new(),
            named: std::array::from_fn(|_| Vec::new()),
        }
    }

    fn slot(&self, name: RegisterName) -> &Vec<String> {
        match name {
            RegisterName::Unnamed => &self.unnamed,
            RegisterName::Named(letter) => &self.named[letter.index()],
        }
    }

    fn slot_mut(&mut self, name: RegisterName) -> &mut Vec<String> {
        match name {
            RegisterName::Unnamed => &mut self.unnamed,
            RegisterName::Named(letter) => &mut self.named[letter.index()],
        }
    }

    /// Register content, empty when never written.
    pub fn get(&self, name: RegisterName) -> &[String] {
        self.slot(name)
    }

    /// Capture lines `[start, end]` (inclusive) of `buffer` into `name`.
    ///
    /// Callers must pass `start <= end < buffer.line_count()`; out of range
    /// bounds are clamped rather than trusted.
    pub fn copy(&mut self, name: RegisterName, buffer: &Buffer, start: usize, end: usize) {
        debug_assert!(start <= end && end < buffer.line_count());
        let last = buffer.line_count() - 1;
        let end = end.min(last);
        let start = start.min(end);
        let content = buffer.lines()[start..=end].to_vec();
        debug!(target: "state.registers", register = ?name, start, end, lines = content.len(), "copy");
        *self.slot_mut(name) = content;
    }

    /// Insert the register's lines at the cursor line, pushing the cursor line
    /// down past the inserted block. Returns the number of lines inserted.
    pub fn paste(&self, name: RegisterName, buffer: &mut Buffer) -> usize {
        let content = self.slot(name);
        let mut cursor = buffer.cursor();
        for line in content {
            buffer.insert_line(cursor.line, line.clone());
            cursor.line += 1;
        }
        buffer.set_cursor(cursor);
        debug!(target: "state.registers", register = ?name, lines = content.len(), "paste");
        content.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_text::Position;
    use pretty_assertions::assert_eq;

    fn named(c: char) -> RegisterName {
        RegisterName::from_char(c).unwrap()
    }

    fn source() -> Buffer {
        Buffer::from_str("src", "l0\nl1\nl2\nl3\nl4\nl5")
    }

    #[test]
    fn copy_then_paste_into_other_buffer() {
        let mut regs = Registers::new();
        regs.copy(named('a'), &source(), 2, 4);
        let mut dst = Buffer::from_str("dst", "first\nsecond");
        let n = regs.paste(named('a'), &mut dst);
        assert_eq!(n, 3);
        assert_eq!(dst.lines(), &["l2", "l3", "l4", "first", "second"]);
        assert_eq!(dst.cursor(), Position::new(3, 0));
        assert_eq!(regs.get(named('a')), &["l2", "l3", "l4"]);
    }

    #[test]
    fn paste_is_repeatable() {
        let mut regs = Registers::new();
        regs.copy(RegisterName::Unnamed, &source(), 0, 0);
        let mut dst = Buffer::new("dst");
        regs.paste(RegisterName::Unnamed, &mut dst);
        regs.paste(RegisterName::Unnamed, &mut dst);
        assert_eq!(dst.lines(), &["l0", "l0", ""]);
        assert_eq!(dst.cursor().line, 2);
    }

    #[test]
    fn copy_overwrites_previous_content() {
        let mut regs = Registers::new();
        regs.copy(named('z'), &source(), 0, 5);
        regs.copy(named('z'), &source(), 1, 1);
        assert_eq!(regs.get(named('z')), &["l1"]);
        assert!(regs.get(RegisterName::Unnamed).is_empty());
    }

    #[test]
    fn paste_keeps_cursor_column() {
        let mut regs = Registers::new();
        regs.copy(RegisterName::Unnamed, &source(), 0, 1);
        let mut dst = Buffer::from_str("dst", "abc");
        dst.set_cursor(Position::new(0, 2));
        regs.paste(RegisterName::Unnamed, &mut dst);
        assert_eq!(dst.cursor(), Position::new(2, 2));
    }

    #[test]
    fn register_letters() {
        assert_eq!(RegisterName::from_char('Q'), Some(named('q')));
        assert_eq!(RegisterLetter::new('z').map(RegisterLetter::as_char), Some('z'));
        for c in ['1', '@', '[', '`', '{', 'é', ' '] {
            assert_eq!(RegisterName::from_char(c), None, "{c:?}");
        }
    }

    #[test]
    fn boundary_letters_address_distinct_slots() {
        let mut regs = Registers::new();
        regs.copy(named('a'), &source(), 0, 0);
        regs.copy(named('Z'), &source(), 5, 5);
        assert_eq!(regs.get(named('A')), &["l0"]);
        assert_eq!(regs.get(named('z')), &["l5"]);
        assert!(regs.get(named('m')).is_empty());
    }
}
