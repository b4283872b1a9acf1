//! File IO boundary and the buffer manager's load/save operations.
//!
//! The core never touches the file system directly: it reads and writes whole
//! line sequences through a `Persistence` implementation. `FsPersistence` is
//! the production one; `MemoryPersistence` backs tests and scripted sessions.
//! Tab expansion happens in the core (`core_text::Buffer::replace_lines`), not
//! in the persistence layer.

use core_state::EditorState;
use core_text::Buffer;
use std::borrow::Cow;
use std::collections::{HashMap, HashSet};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("{} not found", .0.display())]
    NotFound(PathBuf),
    #[error("error loading file: {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("error saving file: {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("no file name")]
    NoPath,
}

/// Line-sequence persistence service.
pub trait Persistence {
    fn read(&self, path: &Path) -> Result<Vec<String>, PersistError>;
    fn write(&mut self, path: &Path, lines: &[String]) -> Result<(), PersistError>;
}

/// Split file content into lines on `\n` only. A `\r` before the newline
/// stays part of the line so CRLF files are written back unchanged; a final
/// newline does not start an extra line.
pub fn split_lines(content: &str) -> Vec<String> {
    content.split_terminator('\n').map(str::to_owned).collect()
}

/// Local file system persistence. Content is decoded as UTF-8 with invalid
/// sequences replaced, split with `split_lines`, and written back with each
/// line followed by `\n`.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsPersistence;

impl Persistence for FsPersistence {
    fn read(&self, path: &Path) -> Result<Vec<String>, PersistError> {
        match std::fs::read(path) {
            Ok(bytes) => {
                let content = String::from_utf8_lossy(&bytes);
                let lines = split_lines(&content);
                if matches!(content, Cow::Owned(_)) {
                    tracing::warn!(target: "io", file = %path.display(), "file_not_utf8_lossy_decode");
                }
                tracing::debug!(target: "io", file = %path.display(), size_bytes = bytes.len(), line_count = lines.len(), "file_read_ok");
                Ok(lines)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(PersistError::NotFound(path.to_path_buf()))
            }
            Err(source) => Err(PersistError::Read {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    fn write(&mut self, path: &Path, lines: &[String]) -> Result<(), PersistError> {
        let wrap = |source| PersistError::Write {
            path: path.to_path_buf(),
            source,
        };
        let file = std::fs::File::create(path).map_err(wrap)?;
        let mut out = BufWriter::new(file);
        for line in lines {
            out.write_all(line.as_bytes()).map_err(wrap)?;
            out.write_all(b"\n").map_err(wrap)?;
        }
        out.flush().map_err(wrap)?;
        tracing::debug!(target: "io", file = %path.display(), line_count = lines.len(), "file_write_ok");
        Ok(())
    }
}

/// In-memory persistence keyed by path. Paths listed in `read_only` refuse writes.
#[derive(Debug, Default, Clone)]
pub struct MemoryPersistence {
    pub files: HashMap<PathBuf, Vec<String>>,
    pub read_only: HashSet<PathBuf>,
}

impl MemoryPersistence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, path: impl Into<PathBuf>, content: &str) -> Self {
        self.files.insert(path.into(), split_lines(content));
        self
    }
}

impl Persistence for MemoryPersistence {
    fn read(&self, path: &Path) -> Result<Vec<String>, PersistError> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| PersistError::NotFound(path.to_path_buf()))
    }

    fn write(&mut self, path: &Path, lines: &[String]) -> Result<(), PersistError> {
        if self.read_only.contains(path) {
            return Err(PersistError::Write {
                path: path.to_path_buf(),
                source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
            });
        }
        self.files.insert(path.to_path_buf(), lines.to_vec());
        Ok(())
    }
}

/// Absolute form of `path` relative to the working directory; unchanged when
/// that cannot be determined.
pub fn absolutize(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}

/// Result of `load`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Active buffer content replaced.
    Loaded { lines: usize },
    /// Path does not exist; a fresh buffer named after it was created and activated.
    Created,
    /// Path exists but could not be read; nothing changed.
    Failed,
}

/// Load `path` into the active buffer. A path that does not exist opens as a
/// new, empty buffer named after it. Any other read failure is reported on
/// the status line and leaves every buffer untouched.
pub fn load(state: &mut EditorState, io: &dyn Persistence, path: &Path) -> LoadOutcome {
    let abs = absolutize(path);
    match io.read(&abs) {
        Ok(lines) => {
            let buffer = state.active_buffer_mut();
            buffer.replace_lines(lines);
            buffer.set_path(abs);
            let count = buffer.line_count();
            state.set_status(format!("\"{}\" {}L", path.display(), count));
            LoadOutcome::Loaded { lines: count }
        }
        Err(PersistError::NotFound(_)) => {
            let mut buffer = Buffer::new(path.display().to_string());
            buffer.set_path(abs);
            state.buffers.push_active(buffer);
            state.set_status(format!("\"{}\" [new]", path.display()));
            LoadOutcome::Created
        }
        Err(e) => {
            tracing::error!(target: "io", error = ?e, "file_open_error");
            state.set_status(format!("Error loading file: {}", path.display()));
            LoadOutcome::Failed
        }
    }
}

/// Write the active buffer to `target`, or to its own path when `target` is
/// `None`. A buffer without a path adopts an explicit target on success.
/// Failures leave the buffer untouched.
pub fn save(
    state: &mut EditorState,
    io: &mut dyn Persistence,
    target: Option<&Path>,
) -> Result<PathBuf, PersistError> {
    let path = match target {
        Some(p) => absolutize(p),
        None => state
            .active_buffer()
            .path()
            .map(Path::to_path_buf)
            .ok_or(PersistError::NoPath)?,
    };
    io.write(&path, state.active_buffer().lines())?;
    let buffer = state.active_buffer_mut();
    if buffer.path().is_none() {
        buffer.set_path(path.clone());
    }
    Ok(path)
}
