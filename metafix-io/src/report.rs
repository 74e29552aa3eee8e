//! Outcome reporting
//!
//! Accumulates human-readable lines describing what happened per file and
//! per keyword, written out once at the end of a run. Purely
//! observational: nothing here feeds back into processing.

use crate::error::Result;
use metafix_engine::{Action, Correction};
use serde_json::Value;
use std::fs;
use std::io::Write;
use std::path::Path;

/// An append-only run report
#[derive(Debug, Default)]
pub struct Report {
    lines: Vec<String>,
}

fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

impl Report {
    /// Start an empty report
    pub fn new() -> Self {
        Report::default()
    }

    /// Append one free-form line
    pub fn line(&mut self, text: impl Into<String>) {
        self.lines.push(text.into());
    }

    /// Append a header for the file about to be processed
    pub fn file_header(&mut self, path: &Path) {
        self.lines.push(format!("Processing file: {}", path.display()));
    }

    /// Append the outcome of one keyword
    pub fn correction(&mut self, record: &Correction) {
        let path = record
            .path
            .as_ref()
            .map(|p| p.to_string())
            .unwrap_or_default();
        let line = match record.action {
            Action::Updated => format!(
                "  Updated existing: {} -> {} ({})",
                record.keyword,
                record.new.as_ref().map(value_text).unwrap_or_default(),
                path
            ),
            Action::Created => format!(
                "  Created new nested path: {} -> {}",
                record.keyword,
                record.new.as_ref().map(value_text).unwrap_or_default()
            ),
            Action::Attached => format!(
                "  Added via ancestor match: {} -> {}",
                path,
                record.new.as_ref().map(value_text).unwrap_or_default()
            ),
            Action::Removed => format!("  Removed: {}", path),
            Action::Unchanged => format!("  Already correct: {}", record.keyword),
            Action::Skipped => {
                format!("  No suitable match found for '{}', skipped", record.keyword)
            }
        };
        self.lines.push(line);
    }

    /// All accumulated lines in order
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Write every line to `out`
    pub fn write_to(&self, out: &mut dyn Write) -> std::io::Result<()> {
        for line in &self.lines {
            writeln!(out, "{}", line)?;
        }
        Ok(())
    }

    /// Save the report to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        fs::write(path, self.lines.join("\n"))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use metafix_engine::{apply, Keyword};
    use serde_json::json;

    #[test]
    fn test_report_lines_describe_outcomes() {
        let mut doc = json!({"system": {"floor": "1"}});
        let record = apply(&mut doc, &Keyword::parse("floor").unwrap(), "2");

        let mut report = Report::new();
        report.file_header(Path::new("dev/metadata.json"));
        report.correction(&record);

        assert_eq!(report.lines().len(), 2);
        assert!(report.lines()[0].contains("dev/metadata.json"));
        assert!(report.lines()[1].contains("Updated existing: floor -> 2"));
        assert!(report.lines()[1].contains(".system.floor"));
    }

    #[test]
    fn test_report_saves_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.txt");
        let mut report = Report::new();
        report.line("first");
        report.line("second");
        report.save(&path).unwrap();
        let text = fs::read_to_string(&path).unwrap();
        assert_eq!(text, "first\nsecond");
    }
}
