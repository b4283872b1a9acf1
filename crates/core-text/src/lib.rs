//! Line-based text buffer with an embedded cursor and viewport offset.
//!
//! Invariants (hold after every public call):
//! * `lines` is never empty; a fresh buffer holds a single empty line.
//! * `cursor.line < lines.len()` and `cursor.col <= line_len(cursor.line)`.
//!   A column equal to the line length addresses the slot just past the last
//!   character.
//! * Lines never contain tab characters: tabs are expanded to `TAB_SIZE`
//!   spaces on load and typed tabs insert `TAB_SIZE` spaces.
//!
//! Columns count `char`s, not bytes, so content loaded from disk that carries
//! non-ASCII text can still be edited without splitting a code point.

use std::path::{Path, PathBuf};

pub mod motion;
pub mod tabs;

pub use tabs::{TAB_SIZE, expand_tabs};

/// Cursor position expressed as (line index, character column).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    pub line: usize,
    pub col: usize,
}

impl Position {
    pub fn new(line: usize, col: usize) -> Self {
        Self { line, col }
    }
    pub fn origin() -> Self {
        Self { line: 0, col: 0 }
    }
}

/// One open, named, in-memory text document.
#[derive(Debug, Clone)]
pub struct Buffer {
    pub name: String,
    path: Option<PathBuf>,
    lines: Vec<String>,
    cursor: Position,
    top_row: usize,
}

impl Buffer {
    /// Empty buffer (`[""]`) with the cursor at the origin.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: None,
            lines: vec![String::new()],
            cursor: Position::origin(),
            top_row: 0,
        }
    }

    /// Construct a buffer from an in-memory string slice (tabs expanded, `\n` separated).
    pub fn from_str(name: impl Into<String>, content: &str) -> Self {
        let mut buf = Self::new(name);
        buf.replace_lines(content.lines().map(str::to_owned));
        buf
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn set_path(&mut self, path: impl Into<PathBuf>) {
        self.path = Some(path.into());
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn line(&self, idx: usize) -> Option<&str> {
        self.lines.get(idx).map(String::as_str)
    }

    /// Total number of lines in the buffer (always at least one).
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Length of a line in characters; 0 for out of range indices.
    pub fn line_len(&self, idx: usize) -> usize {
        self.lines.get(idx).map_or(0, |l| l.chars().count())
    }

    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Place the cursor, clamping into the valid range.
    pub fn set_cursor(&mut self, pos: Position) {
        let line = pos.line.min(self.lines.len() - 1);
        let col = pos.col.min(self.line_len(line));
        self.cursor = Position { line, col };
    }

    pub fn top_row(&self) -> usize {
        self.top_row
    }

    /// Replace the whole content (load). Tabs are expanded; an empty source
    /// yields the single empty line. Cursor and viewport return to the origin.
    pub fn replace_lines<I>(&mut self, lines: I)
    where
        I: IntoIterator<Item = String>,
    {
        self.lines = lines.into_iter().map(|l| expand_tabs(&l)).collect();
        if self.lines.is_empty() {
            self.lines.push(String::new());
        }
        self.cursor = Position::origin();
        self.top_row = 0;
        tracing::debug!(target: "text.buffer", name = %self.name, lines = self.lines.len(), "replace_lines");
    }

    /// Insert `ch` at the cursor and advance the cursor one column.
    pub fn insert_char(&mut self, ch: char) {
        let Position { line, col } = self.cursor;
        let text = &mut self.lines[line];
        let at = byte_index(text, col);
        if at == text.len() {
            text.push(ch);
        } else {
            text.insert(at, ch);
        }
        self.cursor.col += 1;
    }

    /// Fixed-width tab: `TAB_SIZE` spaces, no tab stops.
    pub fn insert_tab(&mut self) {
        for _ in 0..TAB_SIZE {
            self.insert_char(' ');
        }
    }

    /// Break the current line at the cursor; the suffix (possibly empty)
    /// becomes the next line and the cursor moves to its start.
    pub fn split_line(&mut self) {
        let Position { line, col } = self.cursor;
        let text = &mut self.lines[line];
        let at = byte_index(text, col);
        let tail = if at == text.len() {
            String::new()
        } else {
            text.split_off(at)
        };
        self.lines.insert(line + 1, tail);
        self.cursor = Position::new(line + 1, 0);
    }

    /// Delete the character before the cursor, or join the current line onto
    /// the previous one when the cursor sits in column 0. No-op at the origin.
    pub fn backspace(&mut self) {
        let Position { line, col } = self.cursor;
        if col > 0 {
            let text = &mut self.lines[line];
            let at = byte_index(text, col - 1);
            text.remove(at);
            self.cursor.col -= 1;
        } else if line > 0 {
            let current = self.lines.remove(line);
            let prev_len = self.line_len(line - 1);
            self.lines[line - 1].push_str(&current);
            self.cursor = Position::new(line - 1, prev_len);
        }
    }

    /// Insert a whole line before `idx` (`idx == line_count()` appends).
    /// A cursor at or below `idx` is not moved; callers decide where it goes.
    pub fn insert_line(&mut self, idx: usize, text: String) {
        let idx = idx.min(self.lines.len());
        self.lines.insert(idx, expand_tabs(&text));
    }

    /// Shift `top_row` so the cursor line lies in
    /// `[top_row, top_row + viewport_height - 2]`. The last terminal row is
    /// reserved for the status line.
    pub fn scroll_to_cursor(&mut self, viewport_height: usize) {
        let span = viewport_height.saturating_sub(2);
        let y = self.cursor.line;
        if self.top_row > y {
            self.top_row = y;
        } else if self.top_row + span < y {
            self.top_row = y - span;
        }
    }
}

/// Byte offset of character column `col` within `text` (end of string when past it).
fn byte_index(text: &str, col: usize) -> usize {
    text.char_indices().nth(col).map_or(text.len(), |(i, _)| i)
}
