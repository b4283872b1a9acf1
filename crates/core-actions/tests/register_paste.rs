mod common;
use common::*;

use core_state::RegisterName;

#[test]
fn copy_range_into_other_buffer_and_paste_twice() {
    let mut ed = editor("l0\nl1\nl2\nl3\nl4\nl5");
    // 1-based 3..=5 are zero-based lines 2..=4.
    command(&mut ed, "y 3 5 r");
    command(&mut ed, "b scratch");
    assert_eq!(ed.state.active_buffer().cursor().line, 0);

    command(&mut ed, "put r");
    let buf = ed.state.active_buffer();
    assert_eq!(buf.lines(), &["l2", "l3", "l4", ""]);
    assert_eq!(buf.cursor().line, 3);
    assert_eq!(
        ed.state.registers.get(RegisterName::from_char('r').unwrap()),
        &["l2", "l3", "l4"]
    );

    command(&mut ed, "put r");
    assert_eq!(ed.state.active_buffer().line_count(), 7);
}

#[test]
fn yank_line_binding_feeds_clipboard_register() {
    let mut ed = editor("first\nsecond");
    type_keys(&mut ed, "jyy");
    assert_eq!(ed.state.registers.get(RegisterName::Unnamed), &["second"]);
    type_keys(&mut ed, "ggp");
    assert_eq!(ed.state.active_buffer().lines(), &["second", "first", "second"]);
    command(&mut ed, "put");
    assert_eq!(ed.state.active_buffer().line_count(), 4);
}
