use serde_json::{Map, Value};

use crate::element::element_model::ElementRecord;
use crate::tree::model::Dialect;

// ============================================================================
// Attribute extraction and filtering
// ============================================================================

/// Project one raw tree node into an `ElementRecord`, or `None` if the node
/// carries nothing worth reporting.
///
/// A node whose only attribute is its class is noise: the class is captured
/// only as a qualifier once at least one content attribute is present.
pub fn extract(node: &Map<String, Value>, dialect: Dialect) -> Option<ElementRecord> {
    match dialect {
        Dialect::Android => extract_android(node),
        Dialect::Selendroid => extract_selendroid(node),
    }
}

fn extract_android(node: &Map<String, Value>) -> Option<ElementRecord> {
    let text = non_empty_str(node, "@text");
    let name = non_empty_str(node, "@content-desc");
    let resource_id = non_empty_str(node, "@resource-id");

    let has_content = text.is_some() || name.is_some() || resource_id.is_some();
    if !has_content {
        return None;
    }

    Some(ElementRecord {
        id: None,
        text,
        name,
        resource_id,
        class: non_empty_str(node, "@class"),
        shown: None,
    })
}

fn extract_selendroid(node: &Map<String, Value>) -> Option<ElementRecord> {
    // Selendroid reuses web terminology: `name` is the element id,
    // `label` is the accessible name.
    let id = non_empty_str(node, "name");
    let text = non_empty_str(node, "value");
    let name = non_empty_str(node, "label");

    let has_content = id.is_some() || text.is_some() || name.is_some();
    let class = if has_content {
        non_empty_str(node, "type")
    } else {
        None
    };

    // Visibility is captured whenever the key exists, falsy values included.
    let shown = node.get("shown").map(truthy);

    if !has_content && shown.is_none() {
        return None;
    }

    Some(ElementRecord {
        id,
        text,
        name,
        resource_id: None,
        class,
        shown,
    })
}

/// Pull a string attribute, treating empty strings as absent.
fn non_empty_str(node: &Map<String, Value>, key: &str) -> Option<String> {
    node.get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

// Only false and null are falsy; any other value, strings included,
// counts as visible.
fn truthy(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::Null => false,
        _ => true,
    }
}
