use std::env::consts::OS;
use std::env::var;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub const VENDOR_NAME: &str = "gtd";
pub const APP_NAME: &str = "gtd";

/// Resolves where gtd keeps its database and configuration.
///
/// - **Windows**: `%LOCALAPPDATA%\gtd\gtd`
/// - **macOS**: `~/Library/Application Support/gtd/gtd`
/// - **Linux**: `~/.local/share/gtd/gtd`
#[derive(Debug, Clone)]
pub struct DataStorage {
    base_path: PathBuf,
}

impl DataStorage {
    pub fn new() -> Self {
        let base_path = match OS {
            "windows" => var("LOCALAPPDATA").unwrap_or_else(|_| ".".into()),
            "macos" => var("HOME").unwrap_or_else(|_| ".".into()) + "/Library/Application Support",
            _ => var("HOME").unwrap_or_else(|_| ".".into()) + "/.local/share",
        };

        Self::with_base(Path::new(&base_path).join(VENDOR_NAME).join(APP_NAME))
    }

    pub fn with_base(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    /// Path of `file_name` inside the data directory, creating the directory
    /// if needed.
    pub fn get_path(&self, file_name: &str) -> io::Result<PathBuf> {
        if !self.base_path.exists() {
            fs::create_dir_all(&self.base_path)?;
        }
        Ok(self.base_path.join(file_name))
    }
}

impl Default for DataStorage {
    fn default() -> Self {
        Self::new()
    }
}
