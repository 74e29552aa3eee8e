//! Keyword matching against enumerated paths
//!
//! Matching is a tri-state decision, never an exception: a keyword either
//! has an exact suffix match, a best partial-prefix ancestor, or no match
//! at all. Key comparison is case-insensitive throughout; stored case is
//! preserved everywhere else.

use crate::keyword::Keyword;
use crate::path::Path;
use crate::walk::paths;
use serde_json::Value;

/// Outcome of matching one keyword against a document's paths
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchResult {
    /// A path whose canonical rendering ends with `.` + the full keyword
    Exact(Path),
    /// The path sharing the most ancestor-hint segments, with its score
    Ancestor(Path, usize),
    /// Nothing matched
    NoMatch,
}

fn suffix_needle(keyword: &Keyword) -> String {
    format!(".{}", keyword.segments().join(".").to_lowercase())
}

/// Find the first path (in enumeration order) that exactly matches `keyword`.
///
/// A path matches when its canonical string, lowercased, ends with `.` plus
/// the full dotted keyword, so multi-segment keywords only match the dotted
/// suffix of equal length. The first hit is selected deterministically; it
/// is the first encountered, not necessarily the best.
pub fn find_exact<I>(keyword: &Keyword, candidates: I) -> Option<Path>
where
    I: IntoIterator<Item = Path>,
{
    let needle = suffix_needle(keyword);
    candidates
        .into_iter()
        .find(|path| path.to_string().to_lowercase().ends_with(&needle))
}

/// Find the path sharing the most ancestor-hint segments with `keyword`.
///
/// Only defined for keywords with at least two segments; the hint is the
/// keyword minus its leaf. Each candidate is segmented on its dot-separated
/// textual form and scored by how many hint segments occur anywhere among
/// its segments (membership, not position). The strictly highest score
/// wins; ties keep the first-seen candidate, which is an artifact of
/// enumeration order rather than a semantic preference. A zero score is no
/// match.
pub fn best_ancestor<I>(keyword: &Keyword, candidates: I) -> Option<(Path, usize)>
where
    I: IntoIterator<Item = Path>,
{
    if !keyword.is_nested() {
        return None;
    }
    let hint: Vec<String> = keyword
        .ancestor_hint()
        .iter()
        .map(|s| s.to_lowercase())
        .collect();

    let mut best: Option<(Path, usize)> = None;
    for path in candidates {
        let rendered = path.to_string().to_lowercase();
        let segments: Vec<&str> = rendered.split('.').filter(|s| !s.is_empty()).collect();
        let score = hint
            .iter()
            .filter(|h| segments.contains(&h.as_str()))
            .count();
        if score > best.as_ref().map_or(0, |(_, s)| *s) {
            best = Some((path, score));
        }
    }
    best
}

/// Match `keyword` against every path in `doc`: exact first, then ancestor
pub fn resolve(keyword: &Keyword, doc: &Value) -> MatchResult {
    if let Some(path) = find_exact(keyword, paths(doc)) {
        return MatchResult::Exact(path);
    }
    match best_ancestor(keyword, paths(doc)) {
        Some((path, score)) => MatchResult::Ancestor(path, score),
        None => MatchResult::NoMatch,
    }
}
