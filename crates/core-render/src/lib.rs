//! Paint requests for the terminal.
//!
//! A `Frame` is the complete description of one repaint: one entry per visible
//! text row (a buffer line cut to the terminal width, or the placeholder glyph
//! past the end of the buffer), the status row text, and where the cursor goes.
//! `compose_frame` derives it from the session; `writer` turns it into
//! terminal commands.
//!
//! The bottom terminal row always holds the status line, so a terminal of
//! `viewport_height` rows shows `viewport_height - 1` buffer lines starting at
//! the active buffer's `top_row`.

pub mod status;
pub mod writer;

use core_state::{EditorState, Mode};
use core_text::Buffer;
use unicode_width::UnicodeWidthChar;

pub use status::{StatusSegment, compose_status, format_status};
pub use writer::{Command, Writer, paint};

/// Glyph drawn on rows past the last buffer line.
pub const PLACEHOLDER: char = '~';

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Row {
    Text(String),
    Placeholder,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub rows: Vec<Row>,
    pub status: String,
    /// Cursor directive as (column, row) screen cells.
    pub cursor: (u16, u16),
}

/// Build the frame for the active buffer on a terminal `width` columns wide.
pub fn compose_frame(state: &EditorState, width: u16) -> Frame {
    let width = usize::from(width.max(1));
    let text_rows = state.viewport_height.saturating_sub(1).max(1);
    let buf = state.active_buffer();
    let top = buf.top_row();

    let rows = (top..top + text_rows)
        .map(|idx| match buf.line(idx) {
            Some(line) => Row::Text(truncate_to_width(line, width)),
            None => Row::Placeholder,
        })
        .collect();

    let status = truncate_to_width(&format_status(&compose_status(state)), width);
    let cursor = match state.mode {
        Mode::CommandLine => {
            let col = display_width(state.command_line.buffer()) + 1;
            (col.min(width - 1), text_rows)
        }
        _ => {
            let pos = buf.cursor();
            let col = cursor_column(buf);
            (col.min(width - 1), pos.line.saturating_sub(top))
        }
    };
    tracing::trace!(target: "render", top, text_rows, width, "compose_frame");

    Frame {
        rows,
        status,
        cursor: (to_cell(cursor.0), to_cell(cursor.1)),
    }
}

/// Screen column of the cursor within its line.
fn cursor_column(buf: &Buffer) -> usize {
    let pos = buf.cursor();
    buf.line(pos.line)
        .map(|line| {
            line.chars()
                .take(pos.col)
                .map(|c| c.width().unwrap_or(0))
                .sum()
        })
        .unwrap_or(0)
}

fn display_width(text: &str) -> usize {
    text.chars().map(|c| c.width().unwrap_or(0)).sum()
}

/// Longest prefix of `text` whose display width fits in `width` columns.
/// Control characters (such as the `\r` kept from CRLF files) are not drawn.
pub fn truncate_to_width(text: &str, width: usize) -> String {
    let mut used = 0;
    let mut out = String::with_capacity(text.len().min(width));
    for c in text.chars() {
        if c.is_control() {
            continue;
        }
        let w = c.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        out.push(c);
    }
    out
}

fn to_cell(v: usize) -> u16 {
    u16::try_from(v).unwrap_or(u16::MAX)
}
