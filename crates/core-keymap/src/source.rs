//! Binding-definition source parser.
//!
//! Recognized line shape:
//!
//! ```text
//! bind "gg" goto_top
//! ```
//!
//! The quoted sequence holds one to three printable characters and the action
//! name is a single token. Everything else (comments, blanks, other shapes) is
//! ignored.

use crate::{Action, pending::PendingSequence};
use tracing::trace;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceBinding {
    pub sequence: String,
    pub action: Action,
}

pub fn parse_source(text: &str) -> Vec<SourceBinding> {
    text.lines()
        .enumerate()
        .filter_map(|(idx, line)| {
            let parsed = parse_line(line);
            if parsed.is_none() && !line.trim().is_empty() && !line.trim_start().starts_with('#') {
                trace!(target: "keymap.source", line = idx + 1, "line_ignored");
            }
            parsed
        })
        .collect()
}

fn parse_line(line: &str) -> Option<SourceBinding> {
    let rest = line.trim().strip_prefix("bind")?;
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }
    let rest = rest.trim_start().strip_prefix('"')?;
    let close = rest.find('"')?;
    let sequence = &rest[..close];
    let len = sequence.chars().count();
    if len == 0 || len > PendingSequence::MAX_LEN || !sequence.chars().all(|c| (' '..='~').contains(&c)) {
        return None;
    }
    let mut tail = rest[close + 1..].split_whitespace();
    let name = tail.next()?;
    if tail.next().is_some() {
        return None;
    }
    Some(SourceBinding {
        sequence: sequence.to_string(),
        action: Action::from_name(name),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_recognized_lines_only() {
        let text = r#"
# navigation
bind "gg" goto_top
bind "x"  make_coffee
bindings are cool
bind gg goto_top
bind "" move_left
bind "abcd" move_left
bind "q" move_left extra
    bind "w" move_right
"#;
        assert_eq!(
            parse_source(text),
            vec![
                SourceBinding {
                    sequence: "gg".into(),
                    action: Action::GotoTop
                },
                SourceBinding {
                    sequence: "x".into(),
                    action: Action::External("make_coffee".into())
                },
                SourceBinding {
                    sequence: "w".into(),
                    action: Action::MoveRight
                },
            ]
        );
    }

    #[test]
    fn later_lines_override_defaults() {
        let mut map = crate::Keymap::with_defaults();
        let n = map.apply_source("bind \"h\" move_right\nbind \"h\" line_end\n");
        assert_eq!(n, 2);
        assert_eq!(map.lookup("h"), Some(&Action::LineEnd));
    }
}
