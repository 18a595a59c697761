use serde_json::Value;

use crate::element::element_model::ElementRecord;
use crate::element::extract::extract;
use crate::session::error::InspectError;
use crate::strings::resources::StringResourceTable;
use crate::tree::model::Dialect;
use crate::tree::walker::walk;

// ============================================================================
// Inspect report — interesting elements of the current screen
// ============================================================================

/// Render a full inspect report for a parsed source document: walk the
/// tree, keep the reportable nodes, format per dialect.
pub fn inspect_report(
    doc: &Value,
    dialect: Dialect,
    strings: &StringResourceTable,
) -> Result<String, InspectError> {
    // The selendroid dump wraps the tree in a root element whose own
    // attributes are not reportable; only its children are.
    let root = match dialect {
        Dialect::Selendroid => doc.get("children").unwrap_or(doc),
        Dialect::Android => doc,
    };

    let mut records = Vec::new();
    for node in walk(root, dialect) {
        if let Some(record) = extract(node?, dialect) {
            records.push(record);
        }
    }
    Ok(format_report(&records, dialect, strings))
}

/// Format extracted records in traversal order, one paragraph per element.
pub fn format_report(
    records: &[ElementRecord],
    dialect: Dialect,
    strings: &StringResourceTable,
) -> String {
    match dialect {
        Dialect::Android => format_android(records, strings),
        Dialect::Selendroid => format_selendroid(records),
    }
}

/// Native hierarchy layout.
///
/// ```text
/// Button
///   class: android.widget.Button
///   text, name: OK
///   resource_id: android:id/button1
///   id: ok_label
///       confirm_label
/// ```
fn format_android(records: &[ElementRecord], strings: &StringResourceTable) -> String {
    let mut out = String::new();

    for e in records {
        if let Some(class) = &e.class {
            out.push_str(short_class(class));
            out.push('\n');
            out.push_str(&format!("  class: {}\n", class));
        }

        match (&e.text, &e.name) {
            // text and content description agree, print them merged
            (Some(text), Some(name)) if text == name => {
                out.push_str(&format!("  text, name: {}\n", text));
            }
            (text, name) => {
                if let Some(text) = text {
                    out.push_str(&format!("  text: {}\n", text));
                }
                if let Some(name) = name {
                    out.push_str(&format!("  name: {}\n", name));
                }
            }
        }

        if let Some(resource_id) = &e.resource_id {
            out.push_str(&format!("  resource_id: {}\n", resource_id));
        }

        // There may be many resource ids with the same value; list every
        // exact match against the description and the text.
        let id_matches = strings.lookup_either(e.name.as_deref(), e.text.as_deref());
        if let Some((first, rest)) = id_matches.split_first() {
            out.push_str(&format!("  id: {}\n", first));
            for id in rest {
                out.push_str(&format!("      {}\n", id));
            }
        }
    }

    out
}

/// Selendroid layout. Invisible elements are never rendered, and neither
/// are elements carrying only an id: `label` defaults to the literal
/// `"null"` when unset.
///
/// ```text
/// EditText
///   class: android.widget.EditText
///   id: back_button
///   text: hello
///   name: Back
/// ```
fn format_selendroid(records: &[ElementRecord]) -> String {
    let mut out = String::new();

    for e in records {
        if !e.shown.unwrap_or(false) {
            continue;
        }

        let no_text = e.text.is_none();
        let no_name = e.name.as_deref().is_none_or(|name| name == "null");
        if no_text && no_name {
            continue;
        }

        if let Some(class) = &e.class {
            out.push_str(short_class(class));
            out.push('\n');
            out.push_str(&format!("  class: {}\n", class));
        }

        if let Some(id) = &e.id {
            // name is id under selendroid; drop the id/ path prefix
            let id = id.strip_prefix("id/").unwrap_or(id.as_str());
            out.push_str(&format!("  id: {}\n", id));
        }
        if let Some(text) = &e.text {
            out.push_str(&format!("  text: {}\n", text));
        }
        if !no_name {
            if let Some(name) = &e.name {
                out.push_str(&format!("  name: {}\n", name));
            }
        }
    }

    out
}

/// Last path segment of a fully-qualified class name.
fn short_class(class: &str) -> &str {
    class.rsplit('.').next().unwrap_or(class)
}
