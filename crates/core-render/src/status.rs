//! Status row composition.
//!
//! The row is assembled from ordered segments and then formatted:
//! * Insert mode shows `-- INSERT --`.
//! * Command-Line mode shows `:` followed by the text typed so far.
//! * Normal mode shows the most recent status message, or nothing.

use core_state::{EditorState, Mode};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusSegment<'a> {
    /// Mode indicator such as `-- INSERT --`.
    ModeLabel(&'static str),
    /// Command-line prompt and its pending text.
    Prompt(&'a str),
    /// Result of the last command or action.
    Message(&'a str),
}

pub fn compose_status(state: &EditorState) -> Vec<StatusSegment<'_>> {
    match state.mode {
        Mode::Insert => vec![StatusSegment::ModeLabel("-- INSERT --")],
        Mode::CommandLine => vec![StatusSegment::Prompt(state.command_line.buffer())],
        Mode::Normal => state
            .status
            .as_deref()
            .map(StatusSegment::Message)
            .into_iter()
            .collect(),
    }
}

pub fn format_status(segments: &[StatusSegment<'_>]) -> String {
    let mut s = String::with_capacity(32);
    for seg in segments {
        match seg {
            StatusSegment::ModeLabel(label) => s.push_str(label),
            StatusSegment::Prompt(text) => {
                s.push(':');
                s.push_str(text);
            }
            StatusSegment::Message(msg) => s.push_str(msg),
        }
    }
    s
}
