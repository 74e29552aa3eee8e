//! Keyword/value rule loading
//!
//! Rules are JSON files. A flat rules file maps keyword to expected value
//! and applies to every discovered document. A device batch file maps a
//! device name to its own keyword/value object, and each batch is applied
//! only to that device's files. JSON `null` and blank strings both mean
//! "remove this key"; other scalars are carried as their text form.

use crate::error::{IoError, Result};
use serde_json::Value;
use std::path::Path;

/// One device's ordered keyword/value pairs
#[derive(Debug, Clone, PartialEq)]
pub struct DeviceBatch {
    /// Device name, also the folder the batch applies to
    pub device: String,
    /// Keyword/value pairs in file order
    pub pairs: Vec<(String, String)>,
}

/// Load a flat rules file: a JSON object of keyword to scalar value
pub fn load_keyword_rules(path: &Path) -> Result<Vec<(String, String)>> {
    let doc = read_rules(path)?;
    let map = doc
        .as_object()
        .ok_or_else(|| invalid(path, "expected a top-level object of keyword: value"))?;
    map.iter()
        .map(|(keyword, value)| Ok((keyword.clone(), raw_text(path, keyword, value)?)))
        .collect()
}

/// Load a device batch file: a JSON object of device to keyword/value object
pub fn load_device_batches(path: &Path) -> Result<Vec<DeviceBatch>> {
    let doc = read_rules(path)?;
    let map = doc
        .as_object()
        .ok_or_else(|| invalid(path, "expected a top-level object of device: rules"))?;

    let mut batches = Vec::with_capacity(map.len());
    for (device, rules) in map {
        let device = device.trim();
        if device.is_empty() {
            continue;
        }
        let rules = rules
            .as_object()
            .ok_or_else(|| invalid(path, &format!("rules for '{}' are not an object", device)))?;
        let pairs = rules
            .iter()
            .map(|(keyword, value)| Ok((keyword.clone(), raw_text(path, keyword, value)?)))
            .collect::<Result<Vec<_>>>()?;
        batches.push(DeviceBatch {
            device: device.to_string(),
            pairs,
        });
    }
    Ok(batches)
}

fn read_rules(path: &Path) -> Result<Value> {
    if !path.exists() {
        return Err(IoError::RulesNotFound(path.to_path_buf()));
    }
    crate::store::read_document(path)
}

fn invalid(path: &Path, reason: &str) -> IoError {
    IoError::InvalidRules {
        path: path.to_path_buf(),
        reason: reason.to_string(),
    }
}

fn raw_text(path: &Path, keyword: &str, value: &Value) -> Result<String> {
    match value {
        Value::Null => Ok(String::new()),
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Array(_) | Value::Object(_) => Err(invalid(
            path,
            &format!("value for '{}' must be a scalar", keyword),
        )),
    }
}
