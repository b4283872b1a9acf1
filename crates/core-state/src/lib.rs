//! Editor session state: open buffers, registers, mode, command line and the
//! status message.
//!
//! `EditorState` is the single owner of all mutable session data. It is passed
//! by `&mut` to every component that edits it; nothing lives in globals. All
//! mutation happens on the one control thread that reads keystrokes.

pub mod buffers;
pub mod registers;

pub use buffers::BufferManager;
pub use registers::{RegisterLetter, RegisterName, Registers};

use core_text::Buffer;

/// Current editor mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Navigation; keystrokes accumulate into key sequences for the dispatcher.
    #[default]
    Normal,
    /// Text entry into the active buffer.
    Insert,
    /// Typing a `:` command on the status row.
    CommandLine,
}

impl Mode {
    pub fn label(self) -> &'static str {
        match self {
            Mode::Normal => "NORMAL",
            Mode::Insert => "INSERT",
            Mode::CommandLine => "COMMAND",
        }
    }
}

/// Partially typed command (without the `:` prompt).
#[derive(Debug, Default, Clone)]
pub struct CommandLineState {
    buf: String,
}

impl CommandLineState {
    pub fn buffer(&self) -> &str {
        &self.buf
    }

    pub fn clear(&mut self) {
        self.buf.clear();
    }

    pub fn push_char(&mut self, ch: char) {
        self.buf.push(ch);
    }

    /// Erase the last character. Returns `false` when there was nothing to
    /// erase, which callers treat as a request to leave the command line.
    pub fn backspace(&mut self) -> bool {
        self.buf.pop().is_some()
    }

    /// Take the submitted text, leaving the line empty.
    pub fn take(&mut self) -> String {
        std::mem::take(&mut self.buf)
    }
}

/// Top-level editor state container.
#[derive(Debug)]
pub struct EditorState {
    pub buffers: BufferManager,
    pub registers: Registers,
    pub mode: Mode,
    pub command_line: CommandLineState,
    /// Last message shown on the status row; each new message replaces it.
    pub status: Option<String>,
    /// Terminal rows available, including the status row.
    pub viewport_height: usize,
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new(Buffer::new("main"))
    }
}

impl EditorState {
    pub const DEFAULT_VIEWPORT_HEIGHT: usize = 24;

    /// Create a new state with a single active buffer.
    pub fn new(buffer: Buffer) -> Self {
        Self {
            buffers: BufferManager::new(buffer),
            registers: Registers::new(),
            mode: Mode::Normal,
            command_line: CommandLineState::default(),
            status: None,
            viewport_height: Self::DEFAULT_VIEWPORT_HEIGHT,
        }
    }

    pub fn active_buffer(&self) -> &Buffer {
        self.buffers.active()
    }

    pub fn active_buffer_mut(&mut self) -> &mut Buffer {
        self.buffers.active_mut()
    }

    pub fn set_status(&mut self, text: impl Into<String>) {
        let text = text.into();
        tracing::debug!(target: "state.status", %text, "status_set");
        self.status = Some(text);
    }

    pub fn clear_status(&mut self) {
        self.status = None;
    }

    /// Re-apply the viewport rule to the active buffer.
    pub fn scroll_active(&mut self) {
        let height = self.viewport_height;
        self.buffers.active_mut().scroll_to_cursor(height);
    }
}
