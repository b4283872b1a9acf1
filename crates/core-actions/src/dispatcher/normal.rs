//! Normal mode: keystrokes accumulate into the pending key sequence and fire
//! bound actions.

use super::{DispatchResult, Editor};
use core_events::{KeyCode, KeyEvent, KeyModifiers};
use core_keymap::Action;
use core_state::{EditorState, Mode, RegisterName};
use tracing::trace;

pub(crate) fn handle_key(ed: &mut Editor, key: KeyEvent) -> DispatchResult {
    match key.code {
        // Bindings are plain characters; Ctrl/Alt chords never match one.
        KeyCode::Char(_) if key.mods.intersects(KeyModifiers::CTRL | KeyModifiers::ALT) => {
            trace!(target: "actions.dispatch", %key, "modified_key_ignored");
            DispatchResult::clean()
        }
        KeyCode::Char(c) => match ed.pending.feed(c, &ed.keymap) {
            Some(action) => execute(&mut ed.state, action),
            None => DispatchResult::clean(),
        },
        KeyCode::Left | KeyCode::Right | KeyCode::Up | KeyCode::Down => {
            ed.pending.clear();
            let buf = ed.state.active_buffer_mut();
            match key.code {
                KeyCode::Left => buf.move_left(),
                KeyCode::Right => buf.move_right(),
                KeyCode::Up => buf.move_up(),
                _ => buf.move_down(),
            }
            DispatchResult::dirty()
        }
        KeyCode::Esc => {
            ed.pending.clear();
            DispatchResult::clean()
        }
        _ => DispatchResult::clean(),
    }
}

/// Run a bound action against the session.
pub(crate) fn execute(state: &mut EditorState, action: Action) -> DispatchResult {
    trace!(target: "actions.dispatch", action = action.name(), "execute");
    let buf = state.active_buffer_mut();
    match action {
        Action::MoveLeft => buf.move_left(),
        Action::MoveDown => buf.move_down(),
        Action::MoveUp => buf.move_up(),
        Action::MoveRight => buf.move_right(),
        Action::GotoTop => buf.move_to_top(),
        Action::GotoBottom => buf.move_to_bottom(),
        Action::LineStart => buf.move_line_start(),
        Action::LineEnd => buf.move_line_end(),
        Action::InsertBefore => {
            state.mode = Mode::Insert;
        }
        Action::InsertAfter => {
            // Append: one column right, clamped to the line length.
            buf.move_right();
            state.mode = Mode::Insert;
        }
        Action::CommandLine => {
            state.command_line.clear();
            state.clear_status();
            state.mode = Mode::CommandLine;
        }
        Action::YankLine => {
            let line = buf.cursor().line;
            let (buffers, registers) = (&state.buffers, &mut state.registers);
            registers.copy(RegisterName::Unnamed, buffers.active(), line, line);
            state.set_status("1 line yanked");
        }
        Action::Paste => {
            let (buffers, registers) = (&mut state.buffers, &state.registers);
            let n = registers.paste(RegisterName::Unnamed, buffers.active_mut());
            if n == 0 {
                state.set_status("Nothing in register");
            }
        }
        Action::External(name) => {
            state.set_status(format!("Unknown action: {name}"));
        }
    }
    DispatchResult::dirty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_text::{Buffer, Position};

    fn state(content: &str) -> EditorState {
        EditorState::new(Buffer::from_str("t", content))
    }

    #[test]
    fn insert_after_clamps_to_line_length() {
        let mut st = state("ab");
        st.active_buffer_mut().set_cursor(Position::new(0, 1));
        execute(&mut st, Action::InsertAfter);
        assert_eq!(st.active_buffer().cursor().col, 2);
        assert_eq!(st.mode, Mode::Insert);

        let mut st = state("ab");
        st.active_buffer_mut().set_cursor(Position::new(0, 2));
        execute(&mut st, Action::InsertAfter);
        assert_eq!(st.active_buffer().cursor().col, 2, "already at end");

        let mut st = state("");
        execute(&mut st, Action::InsertAfter);
        assert_eq!(st.active_buffer().cursor().col, 0, "empty line");
    }

    #[test]
    fn insert_before_keeps_cursor() {
        let mut st = state("abc");
        st.active_buffer_mut().set_cursor(Position::new(0, 1));
        execute(&mut st, Action::InsertBefore);
        assert_eq!(st.active_buffer().cursor().col, 1);
        assert_eq!(st.mode, Mode::Insert);
    }

    #[test]
    fn yank_line_then_paste() {
        let mut st = state("one\ntwo");
        st.active_buffer_mut().set_cursor(Position::new(1, 0));
        execute(&mut st, Action::YankLine);
        execute(&mut st, Action::Paste);
        assert_eq!(st.active_buffer().lines(), &["one", "two", "two"]);
        assert_eq!(st.active_buffer().cursor().line, 2);
    }

    #[test]
    fn paste_with_empty_register_reports() {
        let mut st = state("x");
        execute(&mut st, Action::Paste);
        assert_eq!(st.active_buffer().lines(), &["x"]);
        assert_eq!(st.status.as_deref(), Some("Nothing in register"));
    }

    #[test]
    fn external_action_reports_name() {
        let mut st = state("");
        execute(&mut st, Action::External("frobnicate".into()));
        assert_eq!(st.status.as_deref(), Some("Unknown action: frobnicate"));
    }

    #[test]
    fn command_line_entry_clears_status() {
        let mut st = state("");
        st.set_status("old");
        execute(&mut st, Action::CommandLine);
        assert_eq!(st.mode, Mode::CommandLine);
        assert!(st.status.is_none());
    }
}
