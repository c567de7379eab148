//! Server configuration parsed from environment variables.

use std::path::{Path, PathBuf};

use boards::{BoardRegistry, RegistryError};

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT: {0}")]
    InvalidPort(String),
    #[error("failed to read board registry {path}: {source}")]
    ReadBoards {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid board registry {path}: {source}")]
    Registry {
        path: PathBuf,
        #[source]
        source: RegistryError,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Directory holding `index.html`, the selector bundle, and manifests.
    pub flasher_dir: PathBuf,
    /// JSON registry replacing the compiled-in board table.
    pub boards_file: Option<PathBuf>,
}

impl ServerConfig {
    /// Build typed config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `FLASHER_DIR`: default `<crate>/../flasher`
    /// - `BOARDS_FILE`: compiled-in table when absent
    ///
    /// # Errors
    ///
    /// Returns an error if `PORT` is not a valid port number.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns an error if `PORT` is not a valid port number.
    pub fn from_vars(get: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match get("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };
        let flasher_dir = get("FLASHER_DIR").map_or_else(default_flasher_dir, PathBuf::from);
        let boards_file = get("BOARDS_FILE").filter(|v| !v.trim().is_empty()).map(PathBuf::from);
        Ok(Self { port, flasher_dir, boards_file })
    }

    /// Load the board registry this server advertises.
    ///
    /// # Errors
    ///
    /// Returns an error if `boards_file` is set and cannot be read or parsed.
    pub fn load_registry(&self) -> Result<BoardRegistry, ConfigError> {
        match &self.boards_file {
            Some(path) => load_registry_file(path),
            None => Ok(BoardRegistry::builtin()),
        }
    }
}

fn default_flasher_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../flasher")
}

fn load_registry_file(path: &Path) -> Result<BoardRegistry, ConfigError> {
    let text = std::fs::read_to_string(path)
        .map_err(|source| ConfigError::ReadBoards { path: path.to_path_buf(), source })?;
    BoardRegistry::from_json(&text).map_err(|source| ConfigError::Registry { path: path.to_path_buf(), source })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
