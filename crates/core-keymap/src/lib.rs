//! core-keymap: Normal mode key binding table.
//!
//! * `Keymap` maps an exact key-sequence string to an `Action`.
//! * `PendingSequence` accumulates Normal mode keystrokes (at most three) and
//!   resolves them against the keymap using shortest-suffix fallback.
//! * `source` parses the optional binding-definition file applied on top of
//!   the defaults.
//!
//! Actions are plain data. Executing them is the mode engine's job; the table
//! never holds closures.

use std::collections::HashMap;
use tracing::{debug, trace};

pub mod pending;
pub mod source;

pub use pending::PendingSequence;
pub use source::{SourceBinding, parse_source};

/// Bound action. Built-in kinds cover what the editor can execute natively;
/// `External` carries a name loaded from a binding source that did not match
/// any built-in.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Action {
    MoveLeft,
    MoveDown,
    MoveUp,
    MoveRight,
    InsertBefore,
    InsertAfter,
    CommandLine,
    GotoTop,
    GotoBottom,
    LineStart,
    LineEnd,
    YankLine,
    Paste,
    External(String),
}

const BUILTIN_NAMES: &[(&str, Action)] = &[
    ("move_left", Action::MoveLeft),
    ("move_down", Action::MoveDown),
    ("move_up", Action::MoveUp),
    ("move_right", Action::MoveRight),
    ("insert_before", Action::InsertBefore),
    ("insert_after", Action::InsertAfter),
    ("command_line", Action::CommandLine),
    ("goto_top", Action::GotoTop),
    ("goto_bottom", Action::GotoBottom),
    ("line_start", Action::LineStart),
    ("line_end", Action::LineEnd),
    ("yank_line", Action::YankLine),
    ("paste", Action::Paste),
];

impl Action {
    /// Resolve an action name from a binding source. Unknown names become `External`.
    pub fn from_name(name: &str) -> Action {
        BUILTIN_NAMES
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, a)| a.clone())
            .unwrap_or_else(|| Action::External(name.to_string()))
    }

    pub fn name(&self) -> &str {
        match self {
            Action::External(name) => name.as_str(),
            builtin => BUILTIN_NAMES
                .iter()
                .find(|(_, a)| a == builtin)
                .map(|(n, _)| *n)
                .unwrap_or("unknown"),
        }
    }
}

/// Sequence string -> action table.
#[derive(Debug, Clone, Default)]
pub struct Keymap {
    bindings: HashMap<String, Action>,
}

impl Keymap {
    /// Empty table (no defaults).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Built-in default bindings.
    pub fn with_defaults() -> Self {
        let mut map = Self::empty();
        for (seq, action) in [
            ("h", Action::MoveLeft),
            ("j", Action::MoveDown),
            ("k", Action::MoveUp),
            ("l", Action::MoveRight),
            ("i", Action::InsertBefore),
            ("a", Action::InsertAfter),
            (":", Action::CommandLine),
            ("gg", Action::GotoTop),
            ("G", Action::GotoBottom),
            ("0", Action::LineStart),
            ("$", Action::LineEnd),
            ("yy", Action::YankLine),
            ("p", Action::Paste),
        ] {
            map.bind(seq, action);
        }
        map
    }

    /// Register or overwrite the action for an exact sequence.
    pub fn bind(&mut self, sequence: impl Into<String>, action: Action) {
        let sequence = sequence.into();
        if let Some(prev) = self.bindings.insert(sequence.clone(), action.clone()) {
            trace!(target: "keymap", %sequence, previous = prev.name(), action = action.name(), "binding_overridden");
        }
    }

    /// Exact lookup.
    pub fn lookup(&self, sequence: &str) -> Option<&Action> {
        self.bindings.get(sequence)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Apply every binding found in a binding-definition source. Later lines
    /// override earlier ones and the defaults. Returns how many were applied.
    pub fn apply_source(&mut self, text: &str) -> usize {
        let parsed = parse_source(text);
        let count = parsed.len();
        for SourceBinding { sequence, action } in parsed {
            self.bind(sequence, action);
        }
        debug!(target: "keymap", count, "source_applied");
        count
    }

    /// Read and apply a binding-definition file.
    pub fn load_file(&mut self, path: &std::path::Path) -> std::io::Result<usize> {
        let text = std::fs::read_to_string(path)?;
        Ok(self.apply_source(&text))
    }
}
