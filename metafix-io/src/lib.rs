//! Metafix I/O - File discovery, persistence, rules, and reporting
//!
//! This crate wraps the core engine with its external collaborators:
//!
//! - Glob-based discovery of metadata files
//! - Whole-document JSON read/write (key order preserved)
//! - Keyword/value rule loading (flat rules and per-device batches)
//! - Run reporting
//! - High-level per-file apply/check entry points

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod config;
pub mod discover;
pub mod error;
pub mod report;
pub mod rules;
pub mod store;

// Re-export commonly used types
pub use config::DiscoverConfig;
pub use discover::{discover, discover_device};
pub use error::{IoError, Result};
pub use report::Report;
pub use rules::{load_device_batches, load_keyword_rules, DeviceBatch};
pub use store::{read_document, write_document};

use metafix_engine::{apply_all, Correction};
use std::path::{Path, PathBuf};

/// The result of running one batch of pairs against one file
#[derive(Debug)]
pub struct FileOutcome {
    /// The file processed
    pub file: PathBuf,
    /// Per-keyword outcome records in input order
    pub corrections: Vec<Correction>,
    /// Whether any keyword mutated the document
    pub changed: bool,
    /// Whether the mutated document was written back
    pub written: bool,
}

/// Read a document, apply every pair, and persist it only when it changed.
///
/// With `dry_run` set the mutation still happens in memory and the
/// corrections describe what would have been done, but nothing is written.
pub fn apply_rules_to_file<K, V>(
    path: &Path,
    pairs: &[(K, V)],
    dry_run: bool,
) -> Result<FileOutcome>
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut doc = store::read_document(path)?;
    let (corrections, changed) = apply_all(&mut doc, pairs);
    let written = changed && !dry_run;
    if written {
        store::write_document(path, &doc)?;
    }
    Ok(FileOutcome {
        file: path.to_path_buf(),
        corrections,
        changed,
        written,
    })
}

/// Report what a batch of pairs would do to a file, without writing
pub fn check_file<K, V>(path: &Path, pairs: &[(K, V)]) -> Result<FileOutcome>
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    apply_rules_to_file(path, pairs, true)
}
