//! Metafix Engine - Path resolution and mutation over JSON documents
//!
//! This crate locates a value inside an arbitrarily-shaped JSON document
//! using a dotted keyword that may not match the document's real structure,
//! and updates, creates, or removes that value accordingly. It includes:
//!
//! - Path type with canonical dotted/bracketed rendering
//! - Lazy path enumeration over a document tree
//! - Exact-suffix and best-ancestor keyword matching
//! - Nested-structure synthesis
//! - Case-insensitive key removal
//! - Value sanitization
//! - The per-keyword mutation orchestrator
//!
//! The crate is pure: it consumes and produces in-memory `serde_json`
//! values and performs no I/O.

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod apply;
pub mod error;
pub mod keyword;
pub mod matcher;
pub mod path;
pub mod remove;
pub mod sanitize;
pub mod synthesize;
pub mod walk;

// Re-export commonly used types
pub use apply::{apply, apply_all, Action, Correction};
pub use error::{EngineError, Result};
pub use keyword::Keyword;
pub use matcher::{best_ancestor, find_exact, resolve, MatchResult};
pub use path::{Path, Segment};
pub use remove::remove_key;
pub use sanitize::{is_blank, sanitize};
pub use synthesize::{attach_leaf, synthesize};
pub use walk::paths;
