use std::path::{Path, PathBuf};

/// Default data directory (relative to current working directory)
pub const DEFAULT_DATA_DIR: &str = "./data";

/// Subdirectory for session log files
pub const LOGS_DIR: &str = "logs";

/// Helper struct to manage data paths
#[derive(Clone, Debug)]
pub struct DataPaths {
    root: PathBuf,
}

impl DataPaths {
    /// Create a new DataPaths instance with the given root directory
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Get the root data directory
    pub fn root(&self) -> &PathBuf {
        &self.root
    }

    /// Get the logs directory
    pub fn logs(&self) -> PathBuf {
        self.root.join(LOGS_DIR)
    }

    /// Ensure all directories exist
    pub fn ensure_directories(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(&self.root)?;
        std::fs::create_dir_all(self.logs())?;
        Ok(())
    }
}
