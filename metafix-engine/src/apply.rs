//! Mutation orchestration
//!
//! [`apply`] runs the full per-keyword decision ladder against one
//! document: classify the raw value, try the exact match, then synthesis
//! or ancestor attachment, falling back to a recorded skip. Paths are
//! enumerated fresh for every keyword, so a keyword may resolve against
//! structure an earlier keyword in the same batch just created.
//!
//! All outcomes are reported as [`Correction`] records; per-keyword
//! failures never abort the rest of a batch.

use crate::keyword::Keyword;
use crate::matcher::{best_ancestor, find_exact};
use crate::path::{Path, Segment};
use crate::remove::remove_key;
use crate::sanitize::{is_blank, sanitize};
use crate::synthesize::{attach_leaf, synthesize};
use crate::walk::paths;
use serde_json::Value;
use std::fmt;

/// What happened to one keyword
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// An existing leaf was overwritten with a new value
    Updated,
    /// The document already held the incoming value (or there was nothing
    /// to remove); no mutation
    Unchanged,
    /// A new nested path was synthesized from the document root
    Created,
    /// The leaf was attached under a fuzzy ancestor match. [`apply`] only
    /// consults the ancestor fallback for single-segment keywords, whose
    /// empty hint never scores; this action is produced when callers drive
    /// [`best_ancestor`](crate::matcher::best_ancestor) and
    /// [`attach_leaf`](crate::synthesize::attach_leaf) directly
    Attached,
    /// A key was deleted because the incoming value was blank
    Removed,
    /// The keyword was unresolvable; no mutation
    Skipped,
}

impl Action {
    /// True when this action mutated the document
    pub fn changed(&self) -> bool {
        matches!(
            self,
            Action::Updated | Action::Created | Action::Attached | Action::Removed
        )
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Action::Updated => "updated",
            Action::Unchanged => "unchanged",
            Action::Created => "created",
            Action::Attached => "attached",
            Action::Removed => "removed",
            Action::Skipped => "skipped",
        };
        f.write_str(text)
    }
}

/// Observational record of one keyword's outcome
#[derive(Debug, Clone, PartialEq)]
pub struct Correction {
    /// The keyword as supplied by the caller
    pub keyword: String,
    /// The path acted on, when one was resolved or created
    pub path: Option<Path>,
    /// Previous leaf value, when one existed
    pub old: Option<Value>,
    /// Value written, when one was
    pub new: Option<Value>,
    /// What happened
    pub action: Action,
}

impl Correction {
    fn new(keyword: &Keyword, action: Action) -> Self {
        Correction {
            keyword: keyword.raw().to_string(),
            path: None,
            old: None,
            new: None,
            action,
        }
    }
}

fn holds_text(existing: &Value, text: &str) -> bool {
    match existing {
        Value::String(s) => s == text,
        other => other.to_string() == text,
    }
}

/// Apply one (keyword, raw value) pair to `doc`.
///
/// Blank raw values remove the exact-matched key, if any. Non-blank values
/// are sanitized and then: overwrite the exact match; else synthesize the
/// full dotted path for multi-segment keywords; else attach the leaf under
/// the best ancestor; else the keyword is recorded as skipped.
pub fn apply(doc: &mut Value, keyword: &Keyword, raw: &str) -> Correction {
    if is_blank(raw) {
        let Some(path) = find_exact(keyword, paths(doc)) else {
            return Correction::new(keyword, Action::Unchanged);
        };
        let old = path.resolve(doc).cloned();
        let removed = remove_key(doc, &path);
        let mut record = Correction::new(
            keyword,
            if removed {
                Action::Removed
            } else {
                Action::Unchanged
            },
        );
        record.path = Some(path);
        record.old = old;
        return record;
    }

    let value = sanitize(raw);

    if let Some(path) = find_exact(keyword, paths(doc)) {
        let mut record = Correction::new(keyword, Action::Unchanged);
        if let Some(leaf) = path.resolve_mut(doc) {
            if holds_text(leaf, &value) {
                record.old = Some(leaf.clone());
            } else {
                let written = Value::String(value);
                record.action = Action::Updated;
                record.old = Some(leaf.clone());
                *leaf = written.clone();
                record.new = Some(written);
            }
        } else {
            record.action = Action::Skipped;
        }
        record.path = Some(path);
        return record;
    }

    if keyword.is_nested() {
        let mut record = Correction::new(keyword, Action::Skipped);
        if synthesize(doc, keyword.segments(), Value::String(value.clone())).is_ok() {
            record.action = Action::Created;
            record.path = Some(Path::from_segments(
                keyword
                    .segments()
                    .iter()
                    .map(|s| Segment::Field(s.clone()))
                    .collect(),
            ));
            record.new = Some(Value::String(value));
        }
        return record;
    }

    if let Some((ancestor, _score)) = best_ancestor(keyword, paths(doc)) {
        let leaf = keyword.leaf().to_string();
        if attach_leaf(doc, &ancestor, &leaf, Value::String(value.clone())) {
            let mut record = Correction::new(keyword, Action::Attached);
            record.path = Some(ancestor.child(Segment::Field(leaf)));
            record.new = Some(Value::String(value));
            return record;
        }
    }

    Correction::new(keyword, Action::Skipped)
}

/// Apply a batch of (keyword, raw value) pairs in order.
///
/// Returns every correction plus the document's dirty flag: whether at
/// least one keyword caused a mutation. Unparseable keywords are recorded
/// as skips and do not abort the batch.
pub fn apply_all<K, V>(doc: &mut Value, pairs: &[(K, V)]) -> (Vec<Correction>, bool)
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut corrections = Vec::with_capacity(pairs.len());
    for (keyword_text, raw) in pairs {
        match Keyword::parse(keyword_text.as_ref()) {
            Ok(keyword) => corrections.push(apply(doc, &keyword, raw.as_ref())),
            Err(_) => corrections.push(Correction {
                keyword: keyword_text.as_ref().to_string(),
                path: None,
                old: None,
                new: None,
                action: Action::Skipped,
            }),
        }
    }
    let changed = corrections.iter().any(|c| c.action.changed());
    (corrections, changed)
}
