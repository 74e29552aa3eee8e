//! Path enumeration over a JSON document
//!
//! [`paths`] yields every path reachable from the document root, container
//! nodes included, depth-first: mapping entries in their natural iteration
//! order, sequence elements in index order. The iterator is lazy and
//! read-only; enumerating again just means calling [`paths`] again.

use crate::path::{Path, Segment};
use serde_json::Value;

enum Frame<'a> {
    Map(Path, serde_json::map::Iter<'a>),
    Seq(Path, std::iter::Enumerate<std::slice::Iter<'a, Value>>),
}

/// Depth-first iterator over every path in a document
pub struct PathIter<'a> {
    stack: Vec<Frame<'a>>,
}

/// Enumerate every path in `doc`, root excluded
pub fn paths(doc: &Value) -> PathIter<'_> {
    let mut stack = Vec::new();
    push_frame(&mut stack, Path::root(), doc);
    PathIter { stack }
}

fn push_frame<'a>(stack: &mut Vec<Frame<'a>>, prefix: Path, value: &'a Value) {
    match value {
        Value::Object(map) => stack.push(Frame::Map(prefix, map.iter())),
        Value::Array(seq) => stack.push(Frame::Seq(prefix, seq.iter().enumerate())),
        _ => {}
    }
}

impl<'a> Iterator for PathIter<'a> {
    type Item = Path;

    fn next(&mut self) -> Option<Path> {
        loop {
            let frame = self.stack.last_mut()?;
            let step = match frame {
                Frame::Map(prefix, entries) => entries
                    .next()
                    .map(|(key, value)| (prefix.child(Segment::Field(key.clone())), value)),
                Frame::Seq(prefix, elements) => elements
                    .next()
                    .map(|(i, value)| (prefix.child(Segment::Index(i)), value)),
            };
            match step {
                Some((path, value)) => {
                    push_frame(&mut self.stack, path.clone(), value);
                    return Some(path);
                }
                None => {
                    self.stack.pop();
                }
            }
        }
    }
}
