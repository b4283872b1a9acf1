//! Terminal writer.
//!
//! Paint commands are buffered in order and emitted in a single flush so a
//! frame never appears half drawn. Positions are absolute with a (0,0) origin.

use crate::{Frame, PLACEHOLDER, Row};
use anyhow::Result;
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    queue,
    style::Print,
    terminal::{Clear, ClearType},
};
use std::io::{Write, stdout};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    HideCursor,
    ShowCursor,
    MoveTo(u16, u16),
    /// Clear the row the cursor is on; always preceded by a `MoveTo`.
    ClearLine,
    Print(String),
}

#[derive(Debug, Default)]
pub struct Writer {
    cmds: Vec<Command>,
}

impl Writer {
    pub fn new() -> Self {
        Self { cmds: Vec::new() }
    }
    pub fn commands(&self) -> &[Command] {
        &self.cmds
    }
    pub fn move_to(&mut self, x: u16, y: u16) {
        self.cmds.push(Command::MoveTo(x, y));
    }
    pub fn clear_line(&mut self) {
        self.cmds.push(Command::ClearLine);
    }
    pub fn print<S: Into<String>>(&mut self, s: S) {
        let s: String = s.into();
        if !s.is_empty() {
            self.cmds.push(Command::Print(s));
        }
    }

    pub fn flush(self) -> Result<()> {
        let mut out = stdout();
        self.flush_to(&mut out)
    }

    pub fn flush_to<W: Write>(self, out: &mut W) -> Result<()> {
        for c in self.cmds {
            match c {
                Command::HideCursor => queue!(out, Hide)?,
                Command::ShowCursor => queue!(out, Show)?,
                Command::MoveTo(x, y) => queue!(out, MoveTo(x, y))?,
                Command::ClearLine => queue!(out, Clear(ClearType::CurrentLine))?,
                Command::Print(s) => queue!(out, Print(s))?,
            }
        }
        out.flush()?;
        Ok(())
    }
}

/// Translate a frame into writer commands: every text row, then the status
/// row, then the cursor directive.
pub fn paint(frame: &Frame) -> Writer {
    let mut w = Writer::new();
    w.cmds.push(Command::HideCursor);
    for (y, row) in frame.rows.iter().enumerate() {
        let y = u16::try_from(y).unwrap_or(u16::MAX);
        w.move_to(0, y);
        w.clear_line();
        match row {
            Row::Text(text) => w.print(text.as_str()),
            Row::Placeholder => w.print(PLACEHOLDER.to_string()),
        }
    }
    let status_row = u16::try_from(frame.rows.len()).unwrap_or(u16::MAX);
    w.move_to(0, status_row);
    w.clear_line();
    w.print(frame.status.as_str());
    w.move_to(frame.cursor.0, frame.cursor.1);
    w.cmds.push(Command::ShowCursor);
    w
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame() -> Frame {
        Frame {
            rows: vec![Row::Text("hi".into()), Row::Text(String::new()), Row::Placeholder],
            status: "-- INSERT --".into(),
            cursor: (2, 0),
        }
    }

    #[test]
    fn paint_orders_rows_status_then_cursor() {
        let w = paint(&frame());
        assert_eq!(
            w.commands(),
            &[
                Command::HideCursor,
                Command::MoveTo(0, 0),
                Command::ClearLine,
                Command::Print("hi".into()),
                Command::MoveTo(0, 1),
                Command::ClearLine,
                Command::MoveTo(0, 2),
                Command::ClearLine,
                Command::Print("~".into()),
                Command::MoveTo(0, 3),
                Command::ClearLine,
                Command::Print("-- INSERT --".into()),
                Command::MoveTo(2, 0),
                Command::ShowCursor,
            ]
        );
    }

    #[test]
    fn flush_emits_text_in_order() {
        let mut out = Vec::new();
        paint(&frame()).flush_to(&mut out).unwrap();
        let text = String::from_utf8_lossy(&out);
        let hi = text.find("hi").unwrap();
        let tilde = text.find('~').unwrap();
        let status = text.find("-- INSERT --").unwrap();
        assert!(hi < tilde && tilde < status);
    }
}
