//! Dotted keyword identifiers
//!
//! A keyword is caller-supplied text describing where a value conceptually
//! belongs, independent of the document's real shape. Its final segment is
//! the leaf name; everything before it is the ancestor hint used for fuzzy
//! scoring.

use crate::error::{EngineError, Result};

/// A parsed dotted keyword such as `system.location.panel`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keyword {
    raw: String,
    segments: Vec<String>,
}

impl Keyword {
    /// Parse keyword text, splitting on dots and dropping empty segments
    pub fn parse(raw: &str) -> Result<Keyword> {
        let raw = raw.trim();
        let segments: Vec<String> = raw
            .split('.')
            .filter(|s| !s.is_empty())
            .map(|s| s.to_string())
            .collect();
        if segments.is_empty() {
            return Err(EngineError::EmptyKeyword);
        }
        Ok(Keyword {
            raw: raw.to_string(),
            segments,
        })
    }

    /// The keyword exactly as supplied (trimmed)
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// All dot-separated segments in order
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// The final segment
    pub fn leaf(&self) -> &str {
        self.segments.last().expect("keyword has at least one segment")
    }

    /// Every segment except the leaf
    pub fn ancestor_hint(&self) -> &[String] {
        &self.segments[..self.segments.len() - 1]
    }

    /// True when the keyword spells out an explicit multi-segment path
    pub fn is_nested(&self) -> bool {
        self.segments.len() > 1
    }
}

impl std::fmt::Display for Keyword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.raw)
    }
}
