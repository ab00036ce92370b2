//! Filesystem access of the config loader, behind a trait for tests.

use std::path::{Path, PathBuf};

pub trait FileSystem {
    /// Read file contents as a string.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read.
    fn read_to_string(&self, path: &Path) -> std::io::Result<String>;

    fn exists(&self, path: &Path) -> bool;

    /// Get the current working directory.
    ///
    /// # Errors
    /// Returns an error if the current directory cannot be determined.
    fn current_dir(&self) -> std::io::Result<PathBuf>;

    /// The platform configuration directory of pace-intervals:
    /// - Windows: `%APPDATA%\pace-intervals`
    /// - macOS: `~/Library/Application Support/pace-intervals`
    /// - Linux: `~/.config/pace-intervals` (XDG)
    fn config_dir(&self) -> Option<PathBuf>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read_to_string(&self, path: &Path) -> std::io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn current_dir(&self) -> std::io::Result<PathBuf> {
        std::env::current_dir()
    }

    fn config_dir(&self) -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "pace-intervals")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }
}
