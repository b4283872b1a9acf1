//! Command-line parsing: one command per submission, no side effects.
//!
//! ```text
//! q                  quit
//! w [path]           write the active buffer (its own path unless one is given)
//! e <path>           load a file
//! b <name>           switch to (or create) a buffer
//! cd <path>          change working directory
//! pwd                show working directory
//! buffers            list open buffers
//! y <start> <end> [r] copy lines start..=end (1-based) into register r
//! put [r]            paste register r at the cursor line
//! ```
//!
//! A missing `r` addresses the unnamed clipboard register.

use core_state::RegisterName;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedCommand {
    Quit,
    Write(Option<PathBuf>),
    Edit(PathBuf),
    Buffer(String),
    ChangeDir(PathBuf),
    PrintDir,
    ListBuffers,
    Yank {
        start: usize,
        end: usize,
        register: RegisterName,
    },
    Put(RegisterName),
    /// Blank submission; nothing to do.
    Empty,
    /// Known command with malformed or missing arguments.
    Invalid(String),
    Unknown(String),
}

pub struct CommandParser;

impl CommandParser {
    pub fn parse(raw: &str) -> ParsedCommand {
        let s = raw.trim();
        if s.is_empty() {
            return ParsedCommand::Empty;
        }
        let (name, arg) = match s.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, rest.trim()),
            None => (s, ""),
        };
        match (name, arg) {
            ("q", "") => ParsedCommand::Quit,
            ("w", "") => ParsedCommand::Write(None),
            ("w", path) => ParsedCommand::Write(Some(PathBuf::from(path))),
            ("e", "") => ParsedCommand::Invalid("Argument required: e <path>".into()),
            ("e", path) => ParsedCommand::Edit(PathBuf::from(path)),
            ("b", "") => ParsedCommand::Invalid("Argument required: b <name>".into()),
            ("b", buf) => ParsedCommand::Buffer(buf.to_string()),
            ("cd", "") => ParsedCommand::Invalid("Argument required: cd <path>".into()),
            ("cd", path) => ParsedCommand::ChangeDir(PathBuf::from(path)),
            ("pwd", "") => ParsedCommand::PrintDir,
            ("buffers", "") => ParsedCommand::ListBuffers,
            ("y", args) => Self::parse_yank(args),
            ("put", "") => ParsedCommand::Put(RegisterName::Unnamed),
            ("put", reg) => match Self::parse_register(reg) {
                Some(register) => ParsedCommand::Put(register),
                None => ParsedCommand::Invalid(format!("Invalid register: {reg}")),
            },
            _ => ParsedCommand::Unknown(s.to_string()),
        }
    }

    fn parse_yank(args: &str) -> ParsedCommand {
        let mut parts = args.split_whitespace();
        let (Some(start), Some(end)) = (parts.next(), parts.next()) else {
            return ParsedCommand::Invalid("Usage: y <start> <end> [register]".into());
        };
        let (Ok(start), Ok(end)) = (start.parse::<usize>(), end.parse::<usize>()) else {
            return ParsedCommand::Invalid("Invalid range".into());
        };
        let register = match (parts.next(), parts.next()) {
            (None, _) => RegisterName::Unnamed,
            (Some(reg), None) => match Self::parse_register(reg) {
                Some(r) => r,
                None => return ParsedCommand::Invalid(format!("Invalid register: {reg}")),
            },
            (Some(_), Some(_)) => {
                return ParsedCommand::Invalid("Usage: y <start> <end> [register]".into());
            }
        };
        ParsedCommand::Yank {
            start,
            end,
            register,
        }
    }

    fn parse_register(s: &str) -> Option<RegisterName> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => RegisterName::from_char(c),
            _ => None,
        }
    }
}
