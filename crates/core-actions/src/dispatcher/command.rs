//! Command-line editing & execution.
//!
//! Enter submits the typed text, Esc cancels it, and Backspace on an empty
//! line leaves the command line. Every outcome (success text or error) lands
//! on the status row, replacing whatever was there.

use super::command_parser::{CommandParser, ParsedCommand};
use super::{DispatchResult, Editor};
use crate::io_ops::{self, PersistError};
use core_events::{KeyCode, KeyEvent};
use core_state::{Mode, RegisterName};
use std::path::Path;
use tracing::{info, warn};

pub(crate) fn handle_key(ed: &mut Editor, key: KeyEvent) -> DispatchResult {
    let state = &mut ed.state;
    match key.code {
        KeyCode::Esc => {
            state.command_line.clear();
            state.mode = Mode::Normal;
            DispatchResult::dirty()
        }
        KeyCode::Enter => {
            let raw = state.command_line.take();
            state.mode = Mode::Normal;
            execute_command(ed, &raw)
        }
        KeyCode::Backspace => {
            if !state.command_line.backspace() {
                state.mode = Mode::Normal;
            }
            DispatchResult::dirty()
        }
        code => match code.printable() {
            Some(c) => {
                state.command_line.push_char(c);
                DispatchResult::dirty()
            }
            None => DispatchResult::clean(),
        },
    }
}

fn execute_command(ed: &mut Editor, raw: &str) -> DispatchResult {
    let parsed = CommandParser::parse(raw);
    info!(target: "actions.command", command = raw, "execute");
    match parsed {
        ParsedCommand::Quit => return DispatchResult::quit(),
        ParsedCommand::Write(target) => handle_write(ed, target.as_deref()),
        ParsedCommand::Edit(path) => {
            ed.open(&path);
        }
        ParsedCommand::Buffer(name) => {
            let created = ed.state.buffers.switch_or_create(&name);
            let note = if created { " [new]" } else { "" };
            ed.state.set_status(format!("\"{name}\"{note}"));
        }
        ParsedCommand::ChangeDir(path) => handle_cd(ed, &path),
        ParsedCommand::PrintDir => match std::env::current_dir() {
            Ok(dir) => ed.state.set_status(dir.display().to_string()),
            Err(e) => ed.state.set_status(format!("Error reading directory: {e}")),
        },
        ParsedCommand::ListBuffers => {
            let listing = ed.state.buffers.listing();
            ed.state.set_status(listing);
        }
        ParsedCommand::Yank {
            start,
            end,
            register,
        } => handle_yank(ed, start, end, register),
        ParsedCommand::Put(register) => {
            let state = &mut ed.state;
            let n = state.registers.paste(register, state.buffers.active_mut());
            if n == 0 {
                state.set_status("Nothing in register");
            } else {
                state.set_status(format!("{n} lines pasted"));
            }
        }
        ParsedCommand::Empty => {}
        ParsedCommand::Invalid(msg) => ed.state.set_status(msg),
        ParsedCommand::Unknown(cmd) => {
            warn!(target: "actions.command", command = %cmd, "command_not_found");
            ed.state.set_status("Command not found");
        }
    }
    DispatchResult::dirty()
}

fn handle_write(ed: &mut Editor, target: Option<&Path>) {
    match io_ops::save(&mut ed.state, ed.io.as_mut(), target) {
        Ok(path) => {
            let lines = ed.state.active_buffer().line_count();
            ed.state
                .set_status(format!("\"{}\" {lines}L written", path.display()));
        }
        Err(PersistError::NoPath) => {
            tracing::error!(target: "actions.command", "write_no_filename");
            ed.state.set_status("No file name");
        }
        Err(e) => {
            tracing::error!(target: "io", error = %e, "file_write_error");
            ed.state.set_status(capitalize(&e.to_string()));
        }
    }
}

fn handle_cd(ed: &mut Editor, path: &Path) {
    match std::env::set_current_dir(path) {
        Ok(()) => {
            let now = std::env::current_dir()
                .map(|d| d.display().to_string())
                .unwrap_or_else(|_| path.display().to_string());
            ed.state.set_status(now);
        }
        Err(e) => {
            warn!(target: "actions.command", path = %path.display(), error = %e, "cd_failed");
            ed.state
                .set_status(format!("Error changing directory: {}", path.display()));
        }
    }
}

fn handle_yank(ed: &mut Editor, start: usize, end: usize, register: RegisterName) {
    let state = &mut ed.state;
    let count = state.active_buffer().line_count();
    if start == 0 || start > end || end > count {
        state.set_status("Invalid range");
        return;
    }
    state
        .registers
        .copy(register, state.buffers.active(), start - 1, end - 1);
    state.set_status(format!("{} lines yanked", end - start + 1));
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io_ops::Persistence;
    use crate::MemoryPersistence;
    use core_keymap::Keymap;
    use core_state::EditorState;
    use core_text::Buffer;

    fn editor(content: &str, io: MemoryPersistence) -> Editor {
        Editor::new(
            EditorState::new(Buffer::from_str("main", content)),
            Keymap::with_defaults(),
            Box::new(io),
        )
    }

    fn run(ed: &mut Editor, cmd: &str) -> DispatchResult {
        ed.state.mode = Mode::CommandLine;
        for c in cmd.chars() {
            handle_key(ed, KeyEvent::char(c));
        }
        handle_key(ed, KeyCode::Enter.into())
    }

    #[test]
    fn typing_and_cancel() {
        let mut ed = editor("", MemoryPersistence::new());
        ed.state.mode = Mode::CommandLine;
        handle_key(&mut ed, KeyEvent::char('q'));
        assert_eq!(ed.state.command_line.buffer(), "q");
        handle_key(&mut ed, KeyCode::Esc.into());
        assert_eq!(ed.state.mode, Mode::Normal);
        assert_eq!(ed.state.command_line.buffer(), "");
    }

    #[test]
    fn backspace_on_empty_exits() {
        let mut ed = editor("", MemoryPersistence::new());
        ed.state.mode = Mode::CommandLine;
        handle_key(&mut ed, KeyEvent::char('w'));
        handle_key(&mut ed, KeyCode::Backspace.into());
        assert_eq!(ed.state.mode, Mode::CommandLine);
        handle_key(&mut ed, KeyCode::Backspace.into());
        assert_eq!(ed.state.mode, Mode::Normal);
    }

    #[test]
    fn quit_sets_quit_flag() {
        let mut ed = editor("", MemoryPersistence::new());
        assert!(run(&mut ed, "q").quit);
    }

    #[test]
    fn unknown_command_reports() {
        let mut ed = editor("x", MemoryPersistence::new());
        let r = run(&mut ed, "frob");
        assert!(!r.quit);
        assert_eq!(ed.state.status.as_deref(), Some("Command not found"));
        assert_eq!(ed.state.mode, Mode::Normal);
        assert_eq!(ed.state.active_buffer().lines(), &["x"]);
    }

    #[test]
    fn write_uses_stored_path_or_explicit_target() {
        let mut ed = editor("hello", MemoryPersistence::new());
        run(&mut ed, "w");
        assert_eq!(ed.state.status.as_deref(), Some("No file name"));
        run(&mut ed, "w /tmp/vellum-out.txt");
        assert_eq!(
            ed.persistence()
                .read(Path::new("/tmp/vellum-out.txt"))
                .unwrap(),
            vec!["hello".to_string()]
        );
        run(&mut ed, "w");
        assert!(ed.state.status.as_deref().unwrap().ends_with("1L written"));
    }

    #[test]
    fn write_failure_is_reported() {
        let mut io = MemoryPersistence::new();
        io.read_only.insert("/ro/file.txt".into());
        let mut ed = editor("data", io);
        run(&mut ed, "w /ro/file.txt");
        assert_eq!(
            ed.state.status.as_deref(),
            Some("Error saving file: /ro/file.txt")
        );
        assert!(ed.state.active_buffer().path().is_none());
    }

    #[test]
    fn edit_loads_into_active_buffer() {
        let io = MemoryPersistence::new().with_file("/docs/a.txt", "one\n\ttwo");
        let mut ed = editor("old", io);
        run(&mut ed, "e /docs/a.txt");
        let buf = ed.state.active_buffer();
        assert_eq!(buf.lines(), &["one", "    two"]);
        assert_eq!(buf.path(), Some(Path::new("/docs/a.txt")));
        assert_eq!(buf.name, "main");
        assert_eq!(ed.state.buffers.len(), 1);
    }

    #[test]
    fn edit_missing_creates_new_buffer() {
        let mut ed = editor("old", MemoryPersistence::new());
        run(&mut ed, "e /docs/new.txt");
        assert_eq!(ed.state.buffers.len(), 2);
        assert_eq!(ed.state.active_buffer().name, "/docs/new.txt");
        assert_eq!(ed.state.status.as_deref(), Some("\"/docs/new.txt\" [new]"));
        run(&mut ed, "b main");
        assert_eq!(ed.state.active_buffer().lines(), &["old"]);
    }

    #[test]
    fn buffer_switching_and_listing() {
        let mut ed = editor("", MemoryPersistence::new());
        run(&mut ed, "b notes");
        assert_eq!(ed.state.status.as_deref(), Some("\"notes\" [new]"));
        run(&mut ed, "b main");
        run(&mut ed, "buffers");
        assert_eq!(ed.state.status.as_deref(), Some("[main] notes"));
    }

    #[test]
    fn yank_and_put_named_register() {
        let mut ed = editor("l1\nl2\nl3\nl4", MemoryPersistence::new());
        run(&mut ed, "y 2 3 a");
        assert_eq!(ed.state.status.as_deref(), Some("2 lines yanked"));
        run(&mut ed, "b other");
        run(&mut ed, "put a");
        assert_eq!(ed.state.active_buffer().lines(), &["l2", "l3", ""]);
        run(&mut ed, "y 0 1");
        assert_eq!(ed.state.status.as_deref(), Some("Invalid range"));
        run(&mut ed, "y 2 9");
        assert_eq!(ed.state.status.as_deref(), Some("Invalid range"));
    }

    #[test]
    fn pwd_reports_directory() {
        let mut ed = editor("", MemoryPersistence::new());
        run(&mut ed, "pwd");
        let cwd = std::env::current_dir().unwrap();
        assert_eq!(ed.state.status.as_deref(), Some(cwd.display().to_string().as_str()));
    }

    #[test]
    fn cd_to_missing_directory_reports() {
        let mut ed = editor("", MemoryPersistence::new());
        run(&mut ed, "cd /definitely/not/here");
        assert_eq!(
            ed.state.status.as_deref(),
            Some("Error changing directory: /definitely/not/here")
        );
    }
}
