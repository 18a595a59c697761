use serde_json::{Map, Value};

use crate::session::error::InspectError;
use crate::tree::model::{Dialect, value_kind};

// ============================================================================
// Schema-normalizing tree walker
// ============================================================================

/// Lazy depth-first, pre-order iterator over the nodes of a source tree.
///
/// Yields each node's attribute mapping before any of its children.
/// Arrays encountered at any depth are flattened one level; empty mappings
/// terminate their branch without being yielded. Scalars where a node is
/// expected yield a `MalformedDocument` error.
pub struct NodeWalk<'a> {
    stack: Vec<&'a Value>,
    children_key: &'static str,
}

/// Start a walk over `root` using the given dialect's key bindings.
///
/// The walk never mutates the document and is restartable: calling `walk`
/// again on the same root produces an identical sequence.
pub fn walk<'a>(root: &'a Value, dialect: Dialect) -> NodeWalk<'a> {
    // The native hierarchy dump wraps the whole tree in a single
    // `hierarchy` key; unwrap it once before traversal begins.
    let start = match root {
        Value::Object(map)
            if dialect == Dialect::Android && map.len() == 1 && map.contains_key("hierarchy") =>
        {
            &map["hierarchy"]
        }
        _ => root,
    };

    NodeWalk {
        stack: vec![start],
        children_key: dialect.children_key(),
    }
}

impl<'a> Iterator for NodeWalk<'a> {
    type Item = Result<&'a Map<String, Value>, InspectError>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(value) = self.stack.pop() {
            match value {
                Value::Array(items) => {
                    // Flatten: recurse into each element, never yield the
                    // sequence itself. Reversed so the first element is
                    // visited first.
                    for item in items.iter().rev() {
                        self.stack.push(item);
                    }
                }
                Value::Object(map) => {
                    if map.is_empty() {
                        continue;
                    }
                    if let Some(children) = map.get(self.children_key) {
                        self.stack.push(children);
                    }
                    return Some(Ok(map));
                }
                other => {
                    return Some(Err(InspectError::MalformedDocument(format!(
                        "expected an object or array node, found {}",
                        value_kind(other)
                    ))));
                }
            }
        }
        None
    }
}
