//! Whole-document persistence
//!
//! One document per file, read entirely, mutated in memory, written back
//! entirely. A parse failure is fatal for that file only. Writing uses
//! 2-space pretty printing and preserves key order.

use crate::error::{IoError, Result};
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Read and parse one JSON document
pub fn read_document(path: &Path) -> Result<Value> {
    let text = fs::read_to_string(path)?;
    serde_json::from_str(&text).map_err(|source| IoError::MalformedDocument {
        path: path.to_path_buf(),
        source,
    })
}

/// Write one JSON document back, pretty-printed
pub fn write_document(path: &Path, doc: &Value) -> Result<()> {
    let text = serde_json::to_string_pretty(doc)?;
    fs::write(path, text)?;
    Ok(())
}
