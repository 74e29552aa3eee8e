//! Key removal
//!
//! A blank incoming value means the matched leaf should be deleted from
//! its parent mapping. Removal is idempotent and safe to call when nothing
//! needs removing: an absent parent, a non-mapping parent, or an
//! already-missing key are all no-ops, not errors.

use crate::path::{Path, Segment};
use serde_json::Value;

/// Delete the key addressed by `path` from its parent mapping.
///
/// The lookup of the stored key is case-insensitive and the stored
/// spelling is what gets removed; surviving keys keep their order. Returns
/// whether the document changed. A root-level path resolves its parent to
/// the document root itself.
pub fn remove_key(doc: &mut Value, path: &Path) -> bool {
    let Some((parent, leaf)) = path.split_leaf() else {
        return false;
    };
    let Segment::Field(name) = leaf else {
        // sequence elements are never removed
        return false;
    };
    let Some(map) = parent.resolve_mut(doc).and_then(Value::as_object_mut) else {
        return false;
    };
    let lowered = name.to_lowercase();
    let stored = map
        .keys()
        .find(|k| k.to_lowercase() == lowered)
        .cloned();
    match stored {
        Some(real_key) => map.shift_remove(&real_key).is_some(),
        None => false,
    }
}
