//! Configuration loading and parsing.
//!
//! `vellum.toml` is looked up in the working directory first, then in the
//! platform config directory (`<config_dir>/vellum/vellum.toml`). A missing
//! file or a parse error yields defaults; neither is fatal. Unknown fields are
//! ignored.
//!
//! ```toml
//! [keymap]
//! file = "vellum.keys"   # binding-definition source, relative to this file
//!
//! [log]
//! filter = "vellum=debug,keymap=trace"
//! ```

use anyhow::Result;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{info, warn};

pub const CONFIG_FILE_NAME: &str = "vellum.toml";
pub const KEYMAP_FILE_NAME: &str = "vellum.keys";

#[derive(Debug, Deserialize, Default, Clone)]
pub struct KeymapConfig {
    #[serde(default)]
    pub file: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct LogConfig {
    #[serde(default)]
    pub filter: Option<String>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct ConfigFile {
    #[serde(default)]
    pub keymap: KeymapConfig,
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Parsed data, or defaults.
    pub file: ConfigFile,
    /// Path the config was read from; `None` when defaults are in use.
    pub source: Option<PathBuf>,
}

/// Best-effort config path following platform conventions (XDG / AppData Roaming).
pub fn discover() -> PathBuf {
    let local = PathBuf::from(CONFIG_FILE_NAME);
    if local.exists() {
        return local;
    }
    if let Some(dir) = dirs::config_dir() {
        return dir.join("vellum").join(CONFIG_FILE_NAME);
    }
    local
}

pub fn load_from(path: Option<PathBuf>) -> Result<Config> {
    let path = path.unwrap_or_else(discover);
    let Ok(content) = fs::read_to_string(&path) else {
        info!(target: "config", path = %path.display(), "config_missing_using_defaults");
        return Ok(Config::default());
    };
    match toml::from_str::<ConfigFile>(&content) {
        Ok(file) => {
            info!(target: "config", path = %path.display(), "config_loaded");
            Ok(Config {
                file,
                source: Some(path),
            })
        }
        Err(e) => {
            warn!(target: "config", path = %path.display(), error = %e, "config_parse_error_using_defaults");
            Ok(Config::default())
        }
    }
}

impl Config {
    /// Binding-definition source location. A relative `[keymap] file` is
    /// resolved against the directory holding the config file; without one the
    /// default `vellum.keys` sits beside the config (or in the working directory).
    pub fn keymap_path(&self) -> PathBuf {
        let base = self
            .source
            .as_deref()
            .and_then(Path::parent)
            .map(Path::to_path_buf)
            .unwrap_or_default();
        match &self.file.keymap.file {
            Some(p) if p.is_absolute() => p.clone(),
            Some(p) => base.join(p),
            None => base.join(KEYMAP_FILE_NAME),
        }
    }

    pub fn log_filter(&self) -> Option<&str> {
        self.file.log.filter.as_deref()
    }
}
