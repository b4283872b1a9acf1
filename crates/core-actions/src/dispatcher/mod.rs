//! Mode engine state machine.
//!
//! The `Editor` owns the session (`EditorState`), the binding table, the
//! pending Normal mode key sequence and the persistence service. Each call to
//! `handle_key` consumes exactly one keystroke and runs to completion:
//!
//! * `normal`  - key sequence accumulation and bound action execution
//! * `insert`  - text entry into the active buffer
//! * `command` - command-line editing, parsing (`command_parser`) and execution
//!
//! Insert and Command-Line are explicit states of the machine rather than
//! nested read loops, so control always returns to the caller between keys.
//! After every key the active buffer's viewport is re-clamped around the
//! cursor.

use crate::io_ops::Persistence;
use core_events::KeyEvent;
use core_keymap::{Keymap, PendingSequence};
use core_state::{EditorState, Mode};

mod command;
pub mod command_parser;
mod insert;
mod normal;

pub use command_parser::{CommandParser, ParsedCommand};

/// Result of handling a single keystroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatchResult {
    pub dirty: bool,
    pub quit: bool,
}

impl DispatchResult {
    pub fn dirty() -> Self {
        Self {
            dirty: true,
            quit: false,
        }
    }
    pub fn clean() -> Self {
        Self {
            dirty: false,
            quit: false,
        }
    }
    pub fn quit() -> Self {
        Self {
            dirty: true,
            quit: true,
        }
    }
}

pub struct Editor {
    pub state: EditorState,
    pub keymap: Keymap,
    pending: PendingSequence,
    io: Box<dyn Persistence>,
}

impl Editor {
    pub fn new(state: EditorState, keymap: Keymap, io: Box<dyn Persistence>) -> Self {
        Self {
            state,
            keymap,
            pending: PendingSequence::new(),
            io,
        }
    }

    pub fn mode(&self) -> Mode {
        self.state.mode
    }

    /// Keys typed in Normal mode that have not resolved to a binding yet.
    pub fn pending_keys(&self) -> String {
        self.pending.as_string()
    }

    pub fn persistence(&self) -> &dyn Persistence {
        self.io.as_ref()
    }

    /// Route one keystroke according to the current mode.
    pub fn handle_key(&mut self, key: KeyEvent) -> DispatchResult {
        let mode = self.state.mode;
        let result = match mode {
            Mode::Normal => normal::handle_key(self, key),
            Mode::Insert => insert::handle_key(&mut self.state, key),
            Mode::CommandLine => command::handle_key(self, key),
        };
        if self.state.mode != mode {
            tracing::debug!(target: "actions.dispatch", from = mode.label(), to = self.state.mode.label(), "mode_change");
        }
        self.state.scroll_active();
        result
    }

    /// Fire the binding for `sequence` looked up verbatim, bypassing the
    /// pending sequence. Returns whether a binding fired.
    pub fn try_execute(&mut self, sequence: &str) -> bool {
        let Some(action) = self.keymap.lookup(sequence).cloned() else {
            return false;
        };
        normal::execute(&mut self.state, action);
        self.state.scroll_active();
        true
    }

    /// Load `path` into the active buffer (the `e` command).
    pub fn open(&mut self, path: &std::path::Path) -> crate::io_ops::LoadOutcome {
        crate::io_ops::load(&mut self.state, self.io.as_ref(), path)
    }
}
