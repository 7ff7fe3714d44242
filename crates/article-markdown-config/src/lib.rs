//! Parser settings stored in `~/.config/article-markdown/config.toml`.
//!
//! ```toml
//! max_depth = 32
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

const CONFIG_DIR: &str = "~/.config/article-markdown";
const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read settings from {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid settings in {path}: {source}")]
    Invalid {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("cannot encode settings: {0}")]
    Encode(#[from] toml::ser::Error),

    #[error("cannot write settings to {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Settings that shape how articles are parsed. Every field is optional;
/// an absent field falls back to the engine default.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Deepest nesting level that still gets parsed children.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_depth: Option<usize>,
}

impl Config {
    /// `~/.config/article-markdown/config.toml` with `~` expanded.
    pub fn default_path() -> PathBuf {
        PathBuf::from(shellexpand::tilde(CONFIG_DIR).as_ref()).join(CONFIG_FILE)
    }

    /// Reads settings from `path`. A file that does not exist yields `None`
    /// so callers can tell "no settings" apart from "empty settings".
    pub fn read(path: &Path) -> Result<Option<Self>, ConfigError> {
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };
        toml::from_str(&text)
            .map(Some)
            .map_err(|source| ConfigError::Invalid {
                path: path.to_path_buf(),
                source,
            })
    }

    /// Writes settings to `path`, creating its directory when needed.
    pub fn write(&self, path: &Path) -> Result<(), ConfigError> {
        let text = toml::to_string_pretty(self)?;
        let write_err = |source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        };
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir).map_err(write_err)?;
        }
        std::fs::write(path, text).map_err(write_err)
    }

    /// Resolves the depth limit: an explicit override wins over the file,
    /// which wins over `default`.
    pub fn max_depth_or(&self, override_depth: Option<usize>, default: usize) -> usize {
        override_depth.or(self.max_depth).unwrap_or(default)
    }
}
