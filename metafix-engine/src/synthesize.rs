//! Nested-structure synthesis
//!
//! When a keyword has no existing match, the missing chain of mappings is
//! built and the final value set. Any missing intermediate becomes a new
//! empty mapping; an intermediate holding a non-mapping value is
//! overwritten with one (destructive but deterministic). The operation is
//! idempotent.

use crate::error::{EngineError, Result};
use crate::path::Path;
use serde_json::{Map, Value};

/// Create the mapping chain `segments[..-1]` under the document root and
/// set `segments[-1]` to `value` on the final mapping.
pub fn synthesize(doc: &mut Value, segments: &[String], value: Value) -> Result<()> {
    let (leaf, parents) = segments.split_last().ok_or(EngineError::EmptyKeyword)?;
    let mut map = doc.as_object_mut().ok_or(EngineError::RootNotObject)?;
    for part in parents {
        let slot = map
            .entry(part.clone())
            .or_insert_with(|| Value::Object(Map::new()));
        if !slot.is_object() {
            *slot = Value::Object(Map::new());
        }
        map = slot.as_object_mut().ok_or(EngineError::RootNotObject)?;
    }
    map.insert(leaf.clone(), value);
    Ok(())
}

/// Attach `leaf` under an existing ancestor path.
///
/// The ancestor came from path enumeration, so it normally resolves; if it
/// does not, nothing happens and `false` is returned. An ancestor node that
/// is not a mapping is replaced by one holding only the new leaf, matching
/// the overwrite rule of [`synthesize`].
pub fn attach_leaf(doc: &mut Value, ancestor: &Path, leaf: &str, value: Value) -> bool {
    let Some(node) = ancestor.resolve_mut(doc) else {
        return false;
    };
    match node.as_object_mut() {
        Some(map) => {
            map.insert(leaf.to_string(), value);
        }
        None => {
            let mut map = Map::new();
            map.insert(leaf.to_string(), value);
            *node = Value::Object(map);
        }
    }
    true
}
