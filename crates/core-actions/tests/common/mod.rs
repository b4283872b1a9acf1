#![allow(dead_code)] // Shared across many integration tests; each test binary uses a subset of helpers.

use core_actions::{DispatchResult, Editor, MemoryPersistence, Persistence};
use core_events::{KeyCode, KeyEvent};
use core_keymap::Keymap;
use core_state::EditorState;
use core_text::Buffer;

pub fn editor_with(content: &str, keymap: Keymap, io: impl Persistence + 'static) -> Editor {
    Editor::new(
        EditorState::new(Buffer::from_str("main", content)),
        keymap,
        Box::new(io),
    )
}

pub fn editor(content: &str) -> Editor {
    editor_with(content, Keymap::with_defaults(), MemoryPersistence::new())
}

/// Feed printable characters one keystroke at a time.
pub fn type_keys(ed: &mut Editor, keys: &str) -> DispatchResult {
    let mut last = DispatchResult::clean();
    for c in keys.chars() {
        last = ed.handle_key(KeyEvent::char(c));
    }
    last
}

pub fn press(ed: &mut Editor, code: KeyCode) -> DispatchResult {
    ed.handle_key(KeyEvent::plain(code))
}

/// `:` + command + Enter from Normal mode.
pub fn command(ed: &mut Editor, cmd: &str) -> DispatchResult {
    type_keys(ed, ":");
    type_keys(ed, cmd);
    press(ed, KeyCode::Enter)
}
