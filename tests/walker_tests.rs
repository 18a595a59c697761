use droid_inspect::session::error::InspectError;
use droid_inspect::tree::model::Dialect;
use droid_inspect::tree::walker::walk;
use serde_json::json;

/// Collect the `@class` of every yielded node, in walk order.
fn classes(doc: &serde_json::Value, dialect: Dialect) -> Vec<String> {
    walk(doc, dialect)
        .map(|node| {
            node.expect("walk should not fail")
                .get("@class")
                .and_then(|v| v.as_str())
                .unwrap_or("")
                .to_string()
        })
        .collect()
}

// =========================================================================
// Pre-order traversal
// =========================================================================

#[test]
fn walk_yields_parent_before_children() {
    let doc = json!({
        "hierarchy": {
            "@class": "root",
            "node": [
                { "@class": "a", "node": { "@class": "a1" } },
                { "@class": "b" }
            ]
        }
    });

    assert_eq!(
        classes(&doc, Dialect::Android),
        vec!["root", "a", "a1", "b"],
        "Depth-first, parent before children, siblings in document order"
    );
}

#[test]
fn walk_flattens_nested_arrays() {
    // A children value that is a sequence is flattened, never yielded
    let doc = json!({
        "@class": "root",
        "node": [
            { "@class": "a" },
            { "@class": "b", "node": [ { "@class": "b1" }, { "@class": "b2" } ] }
        ]
    });

    assert_eq!(
        classes(&doc, Dialect::Android),
        vec!["root", "a", "b", "b1", "b2"]
    );
}

#[test]
fn walk_unwraps_hierarchy_root_once() {
    let wrapped = json!({ "hierarchy": { "@class": "root" } });
    let bare = json!({ "@class": "root" });

    assert_eq!(classes(&wrapped, Dialect::Android), vec!["root"]);
    assert_eq!(classes(&bare, Dialect::Android), vec!["root"]);
}

#[test]
fn walk_selendroid_descends_children_key() {
    let doc = json!({
        "type": "root",
        "children": [
            { "type": "a", "children": { "type": "a1" } },
            { "type": "b" }
        ]
    });

    let types: Vec<String> = walk(&doc, Dialect::Selendroid)
        .map(|node| {
            node.unwrap()
                .get("type")
                .and_then(|v| v.as_str())
                .unwrap()
                .to_string()
        })
        .collect();

    assert_eq!(types, vec!["root", "a", "a1", "b"]);
}

#[test]
fn walk_ignores_other_dialects_children_key() {
    // Under the native dialect, `children` is just another attribute
    let doc = json!({
        "@class": "root",
        "children": [ { "@class": "hidden" } ]
    });

    assert_eq!(classes(&doc, Dialect::Android), vec!["root"]);
}

// =========================================================================
// Edge cases
// =========================================================================

#[test]
fn walk_skips_empty_objects() {
    let doc = json!({
        "@class": "root",
        "node": [ {}, { "@class": "a" } ]
    });

    assert_eq!(
        classes(&doc, Dialect::Android),
        vec!["root", "a"],
        "Empty mapping terminates its branch without being yielded"
    );
}

#[test]
fn walk_is_restartable() {
    let doc = json!({
        "hierarchy": {
            "@class": "root",
            "node": [ { "@class": "a" }, { "@class": "b" } ]
        }
    });

    assert_eq!(
        classes(&doc, Dialect::Android),
        classes(&doc, Dialect::Android),
        "Walking the same root twice yields identical sequences"
    );
}

#[test]
fn walk_reports_scalar_nodes_as_malformed() {
    let doc = json!({
        "@class": "root",
        "node": "not a node"
    });

    let results: Vec<_> = walk(&doc, Dialect::Android).collect();
    assert!(results[0].is_ok(), "Root itself is fine");
    assert!(
        matches!(results[1], Err(InspectError::MalformedDocument(_))),
        "A scalar where a node is expected is a malformed document"
    );
}
