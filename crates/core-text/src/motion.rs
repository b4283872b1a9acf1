//! Cursor motions. Every motion stays inside the buffer and silently clamps;
//! none of them can fail.

use crate::{Buffer, Position};

impl Buffer {
    /// One column left; stops at column 0.
    pub fn move_left(&mut self) {
        self.cursor.col = self.cursor.col.saturating_sub(1);
    }

    /// One column right; stops just past the last character.
    pub fn move_right(&mut self) {
        if self.cursor.col < self.line_len(self.cursor.line) {
            self.cursor.col += 1;
        }
    }

    /// One line up, clamping the column to the target line's length.
    pub fn move_up(&mut self) {
        if self.cursor.line > 0 {
            self.cursor.line -= 1;
            self.clamp_col();
        }
    }

    /// One line down, clamping the column to the target line's length.
    pub fn move_down(&mut self) {
        if self.cursor.line + 1 < self.lines.len() {
            self.cursor.line += 1;
            self.clamp_col();
        }
    }

    /// Left that continues onto the end of the previous line from column 0.
    pub fn move_left_wrapping(&mut self) {
        if self.cursor.col > 0 {
            self.cursor.col -= 1;
        } else if self.cursor.line > 0 {
            self.cursor.line -= 1;
            self.cursor.col = self.line_len(self.cursor.line);
        }
    }

    /// Right that continues onto the start of the next line from end of line.
    pub fn move_right_wrapping(&mut self) {
        if self.cursor.col < self.line_len(self.cursor.line) {
            self.cursor.col += 1;
        } else if self.cursor.line + 1 < self.lines.len() {
            self.cursor.line += 1;
            self.cursor.col = 0;
        }
    }

    pub fn move_line_start(&mut self) {
        self.cursor.col = 0;
    }

    pub fn move_line_end(&mut self) {
        self.cursor.col = self.line_len(self.cursor.line);
    }

    pub fn move_to_top(&mut self) {
        self.cursor = Position::origin();
    }

    /// First column of the last line.
    pub fn move_to_bottom(&mut self) {
        self.cursor = Position::new(self.lines.len() - 1, 0);
    }

    fn clamp_col(&mut self) {
        let len = self.line_len(self.cursor.line);
        if self.cursor.col > len {
            self.cursor.col = len;
        }
    }
}
