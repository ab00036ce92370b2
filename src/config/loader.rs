use std::path::{Path, PathBuf};

use crate::error::{PaceIntervalsError, Result};

use super::Config;
use super::filesystem::{FileSystem, RealFileSystem};

pub const LOCAL_CONFIG_NAME: &str = ".pace-intervals.toml";
const USER_CONFIG_NAME: &str = "config.toml";

/// Trait for loading configuration from various sources.
pub trait ConfigLoader {
    /// Load configuration from the default location.
    ///
    /// # Errors
    /// Returns an error if the config file cannot be read or parsed.
    fn load(&self) -> Result<Config>;

    /// Load configuration from a specific path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    fn load_from_path(&self, path: &Path) -> Result<Config>;
}

/// Loads configuration from the filesystem.
///
/// Search order:
/// 1. `.pace-intervals.toml` in the current directory
/// 2. `config.toml` in the platform config directory
/// 3. `Config::default()` if neither exists
#[derive(Debug)]
pub struct FileConfigLoader<F: FileSystem = RealFileSystem> {
    fs: F,
}

impl Default for FileConfigLoader<RealFileSystem> {
    fn default() -> Self {
        Self::new()
    }
}

impl FileConfigLoader<RealFileSystem> {
    #[must_use]
    pub const fn new() -> Self {
        Self { fs: RealFileSystem }
    }
}

impl<F: FileSystem> FileConfigLoader<F> {
    #[must_use]
    pub const fn with_fs(fs: F) -> Self {
        Self { fs }
    }

    fn local_config_path(&self) -> Option<PathBuf> {
        self.fs
            .current_dir()
            .ok()
            .map(|dir| dir.join(LOCAL_CONFIG_NAME))
    }

    fn user_config_path(&self) -> Option<PathBuf> {
        self.fs.config_dir().map(|dir| dir.join(USER_CONFIG_NAME))
    }

    fn read_config(&self, path: &Path) -> Result<Config> {
        let content = self
            .fs
            .read_to_string(path)
            .map_err(|e| PaceIntervalsError::Config(format!("{}: {e}", path.display())))?;
        let config = toml::from_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }
}

impl<F: FileSystem> ConfigLoader for FileConfigLoader<F> {
    fn load(&self) -> Result<Config> {
        let candidates = [self.local_config_path(), self.user_config_path()];
        for path in candidates.into_iter().flatten() {
            if self.fs.exists(&path) {
                return self.read_config(&path);
            }
        }
        Ok(Config::default())
    }

    fn load_from_path(&self, path: &Path) -> Result<Config> {
        self.read_config(path)
    }
}

#[cfg(test)]
#[path = "loader_tests/mod.rs"]
mod tests;
