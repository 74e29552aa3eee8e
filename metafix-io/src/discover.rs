//! Glob-based file discovery
//!
//! Finds the target filename inside folders matching the configured
//! pattern under the document root, searching each folder recursively.
//! Discovery is the only part of the system the configuration influences.

use crate::config::DiscoverConfig;
use crate::error::Result;
use glob::Pattern;
use std::path::PathBuf;

/// Find every matching document under the configured root.
///
/// Folder names directly under the root are matched against the folder
/// pattern; each matching folder is searched recursively for the target
/// filename. Results are sorted and de-duplicated so processing order is
/// deterministic.
pub fn discover(config: &DiscoverConfig) -> Result<Vec<PathBuf>> {
    let root = Pattern::escape(&config.document_root.to_string_lossy());
    let filename = Pattern::escape(&config.target_filename);
    collect(&[
        format!("{}/{}/{}", root, config.folder_pattern, filename),
        format!("{}/{}/**/{}", root, config.folder_pattern, filename),
    ])
}

/// Find every matching document under one device's folder
pub fn discover_device(config: &DiscoverConfig, device: &str) -> Result<Vec<PathBuf>> {
    let root = Pattern::escape(&config.document_root.to_string_lossy());
    let device = Pattern::escape(device.trim());
    let filename = Pattern::escape(&config.target_filename);
    collect(&[
        format!("{}/{}/{}", root, device, filename),
        format!("{}/{}/**/{}", root, device, filename),
    ])
}

fn collect(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for pattern in patterns {
        // unreadable entries are skipped, not fatal
        for path in glob::glob(pattern)?.flatten() {
            if path.is_file() {
                files.push(path);
            }
        }
    }
    files.sort();
    files.dedup();
    Ok(files)
}
