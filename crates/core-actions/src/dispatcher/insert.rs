//! Insert mode: every keystroke except Esc / NUL edits the active buffer.

use super::DispatchResult;
use core_events::{KeyCode, KeyEvent};
use core_state::{EditorState, Mode};

pub(crate) fn handle_key(state: &mut EditorState, key: KeyEvent) -> DispatchResult {
    let buf = state.active_buffer_mut();
    let before = buf.cursor();
    match key.code {
        KeyCode::Esc | KeyCode::Null => {
            state.mode = Mode::Normal;
            return DispatchResult::dirty();
        }
        KeyCode::Enter => buf.split_line(),
        KeyCode::Backspace => buf.backspace(),
        KeyCode::Tab => buf.insert_tab(),
        KeyCode::Left => buf.move_left_wrapping(),
        KeyCode::Right => buf.move_right_wrapping(),
        KeyCode::Up => buf.move_up(),
        KeyCode::Down => buf.move_down(),
        code => match code.printable() {
            Some(c) => buf.insert_char(c),
            None => return DispatchResult::clean(),
        },
    }
    let after = buf.cursor();
    tracing::trace!(target: "actions.dispatch", %key, line = before.line, col = before.col, to_line = after.line, to_col = after.col, "edit");
    DispatchResult::dirty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_text::{Buffer, Position};

    fn insert_state(content: &str) -> EditorState {
        let mut st = EditorState::new(Buffer::from_str("t", content));
        st.mode = Mode::Insert;
        st
    }

    fn press(st: &mut EditorState, code: KeyCode) -> DispatchResult {
        handle_key(st, KeyEvent::plain(code))
    }

    #[test]
    fn typing_newline_backspace_and_tab() {
        let mut st = insert_state("");
        for c in "ab".chars() {
            press(&mut st, KeyCode::Char(c));
        }
        press(&mut st, KeyCode::Enter);
        press(&mut st, KeyCode::Tab);
        press(&mut st, KeyCode::Char('c'));
        press(&mut st, KeyCode::Backspace);
        assert_eq!(st.active_buffer().lines(), &["ab", "    "]);
        assert_eq!(st.active_buffer().cursor(), Position::new(1, 4));
        assert_eq!(st.mode, Mode::Insert);
    }

    #[test]
    fn non_printable_chars_are_ignored() {
        let mut st = insert_state("");
        let r = press(&mut st, KeyCode::Char('\u{7}'));
        assert!(!r.dirty);
        press(&mut st, KeyCode::Char('é'));
        assert_eq!(st.active_buffer().lines(), &[String::new()]);
    }

    #[test]
    fn arrows_wrap_across_lines() {
        let mut st = insert_state("ab\ncd");
        st.active_buffer_mut().set_cursor(Position::new(1, 0));
        press(&mut st, KeyCode::Left);
        assert_eq!(st.active_buffer().cursor(), Position::new(0, 2));
        press(&mut st, KeyCode::Right);
        assert_eq!(st.active_buffer().cursor(), Position::new(1, 0));
    }

    #[test]
    fn only_exit_keys_leave_insert() {
        let mut st = insert_state("");
        press(&mut st, KeyCode::Char(':'));
        assert_eq!(st.mode, Mode::Insert);
        assert_eq!(st.active_buffer().line(0), Some(":"));
        press(&mut st, KeyCode::Esc);
        assert_eq!(st.mode, Mode::Normal);
    }
}
