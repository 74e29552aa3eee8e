//! Document paths and their canonical rendering
//!
//! A [`Path`] addresses one location inside a JSON tree as an ordered list
//! of segments, each either a mapping field name or a zero-based sequence
//! index. The canonical string form uses `.field` for fields and `[i]` for
//! indices, always rooted at the document root (an empty path renders as
//! the empty string). Rendering and parsing are inverses for every path the
//! enumerator produces.

use crate::error::{EngineError, Result};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// One step within a document path
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    /// Mapping field name
    Field(String),
    /// Zero-based sequence index
    Index(usize),
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Field(name) => write!(f, ".{}", name),
            Segment::Index(i) => write!(f, "[{}]", i),
        }
    }
}

/// An ordered list of segments addressing a location in a JSON tree
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Path {
    segments: Vec<Segment>,
}

impl Path {
    /// The empty path, addressing the document root
    pub fn root() -> Self {
        Path::default()
    }

    /// Build a path from segments
    pub fn from_segments(segments: Vec<Segment>) -> Self {
        Path { segments }
    }

    /// Borrow the segments in order
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// True for the empty (root) path
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Return a copy of this path with one more segment appended
    pub fn child(&self, segment: Segment) -> Path {
        let mut segments = self.segments.clone();
        segments.push(segment);
        Path { segments }
    }

    /// Split into the parent path and the final segment.
    ///
    /// Returns `None` for the root path. A single-segment path yields the
    /// root as its parent.
    pub fn split_leaf(&self) -> Option<(Path, &Segment)> {
        let (leaf, parent) = self.segments.split_last()?;
        Some((Path::from_segments(parent.to_vec()), leaf))
    }

    /// Resolve this path against a document, if every segment exists
    pub fn resolve<'a>(&self, doc: &'a Value) -> Option<&'a Value> {
        let mut current = doc;
        for segment in &self.segments {
            current = match segment {
                Segment::Field(name) => current.as_object()?.get(name)?,
                Segment::Index(i) => current.as_array()?.get(*i)?,
            };
        }
        Some(current)
    }

    /// Resolve this path against a document for mutation
    pub fn resolve_mut<'a>(&self, doc: &'a mut Value) -> Option<&'a mut Value> {
        let mut current = doc;
        for segment in &self.segments {
            current = match segment {
                Segment::Field(name) => current.as_object_mut()?.get_mut(name)?,
                Segment::Index(i) => current.as_array_mut()?.get_mut(*i)?,
            };
        }
        Some(current)
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.segments {
            write!(f, "{}", segment)?;
        }
        Ok(())
    }
}

impl FromStr for Path {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Path> {
        let mut segments = Vec::new();
        let bytes = s.as_bytes();
        let mut pos = 0;

        while pos < bytes.len() {
            match bytes[pos] {
                b'.' => {
                    pos += 1;
                    let start = pos;
                    while pos < bytes.len() && bytes[pos] != b'.' && bytes[pos] != b'[' {
                        pos += 1;
                    }
                    if pos == start {
                        return Err(EngineError::InvalidPath(s.to_string()));
                    }
                    segments.push(Segment::Field(s[start..pos].to_string()));
                }
                b'[' => {
                    pos += 1;
                    let start = pos;
                    while pos < bytes.len() && bytes[pos] != b']' {
                        pos += 1;
                    }
                    if pos == bytes.len() {
                        return Err(EngineError::InvalidPath(s.to_string()));
                    }
                    let index = s[start..pos]
                        .parse::<usize>()
                        .map_err(|_| EngineError::InvalidPath(s.to_string()))?;
                    segments.push(Segment::Index(index));
                    pos += 1; // consume ']'
                }
                _ => return Err(EngineError::InvalidPath(s.to_string())),
            }
        }

        Ok(Path { segments })
    }
}
