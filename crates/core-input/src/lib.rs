//! Blocking terminal input.
//!
//! `read_event` waits for the next terminal event and narrows it to the
//! editor's key vocabulary. Translation is a pure function (`translate`) so the
//! mapping can be tested without a terminal.

use anyhow::Context;
use core_events::{KeyCode, KeyEvent, KeyModifiers};
use crossterm::event::{
    self as cevent, Event as CEvent, KeyCode as CKeyCode, KeyEvent as CKeyEvent, KeyEventKind,
    KeyModifiers as CMods,
};

/// Input the editor loop reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Key(KeyEvent),
    /// New terminal size as (columns, rows).
    Resize(u16, u16),
}

/// Block until the terminal yields an event. Returns `None` for events the
/// editor ignores (mouse, focus, paste, key release, unmapped keys).
pub fn read_event() -> anyhow::Result<Option<InputEvent>> {
    let event = cevent::read().context("reading terminal event")?;
    Ok(match event {
        CEvent::Key(key) => translate(key).map(InputEvent::Key),
        CEvent::Resize(w, h) => {
            tracing::debug!(target: "input", width = w, height = h, "resize");
            Some(InputEvent::Resize(w, h))
        }
        _ => None,
    })
}

/// Map a crossterm key event onto the editor's `KeyEvent`.
pub fn translate(key: CKeyEvent) -> Option<KeyEvent> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    let mods = map_mods(key.modifiers);
    let code = match key.code {
        CKeyCode::Char(' ' | '@' | '2') if mods.contains(KeyModifiers::CTRL) => KeyCode::Null,
        CKeyCode::Null => KeyCode::Null,
        CKeyCode::Char(_) if mods.contains(KeyModifiers::CTRL) => {
            tracing::trace!(target: "input", code = ?key.code, "key_unmapped");
            return None;
        }
        CKeyCode::Char(c) => KeyCode::Char(c),
        CKeyCode::Enter => KeyCode::Enter,
        CKeyCode::Esc => KeyCode::Esc,
        CKeyCode::Backspace => KeyCode::Backspace,
        CKeyCode::Tab => KeyCode::Tab,
        CKeyCode::Up => KeyCode::Up,
        CKeyCode::Down => KeyCode::Down,
        CKeyCode::Left => KeyCode::Left,
        CKeyCode::Right => KeyCode::Right,
        other => {
            tracing::trace!(target: "input", code = ?other, "key_unmapped");
            return None;
        }
    };
    // Shift is already folded into the character for text keys.
    let mods = match code {
        KeyCode::Char(_) => mods - KeyModifiers::SHIFT,
        KeyCode::Null => KeyModifiers::empty(),
        _ => mods,
    };
    Some(KeyEvent { code, mods })
}

pub(crate) fn map_mods(m: CMods) -> KeyModifiers {
    let mut out = KeyModifiers::empty();
    if m.contains(CMods::CONTROL) {
        out |= KeyModifiers::CTRL;
    }
    if m.contains(CMods::ALT) {
        out |= KeyModifiers::ALT;
    }
    if m.contains(CMods::SHIFT) {
        out |= KeyModifiers::SHIFT;
    }
    out
}
