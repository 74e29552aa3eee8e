//! Discovery configuration
//!
//! An explicit value passed in by the caller instead of process-wide
//! constants. It only affects which files are discovered, never the
//! matching or mutation behavior.

use std::path::PathBuf;

/// Where and what to look for when discovering metadata files
#[derive(Debug, Clone)]
pub struct DiscoverConfig {
    /// Root directory the search starts from
    pub document_root: PathBuf,
    /// File name to process inside matching folders
    pub target_filename: String,
    /// Glob pattern the immediate folder names must match
    pub folder_pattern: String,
}

impl Default for DiscoverConfig {
    fn default() -> Self {
        Self {
            document_root: PathBuf::from("."),
            target_filename: "metadata.json".to_string(),
            folder_pattern: "*".to_string(),
        }
    }
}
