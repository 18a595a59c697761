use std::collections::HashMap;

use serde_json::Value;

use crate::session::error::InspectError;
use crate::tree::model::Dialect;
use crate::tree::walker::walk;

// ============================================================================
// Class histogram — how many of each widget class is on screen
// ============================================================================

/// Count every `@class` occurrence in a native hierarchy dump and render
/// one line per distinct class, most frequent first.
///
/// Unlike the inspect report, nothing is filtered here: class-only nodes
/// count too. Ties sort by class name so the output is deterministic.
pub fn class_histogram(doc: &Value) -> Result<String, InspectError> {
    let mut counts: HashMap<String, usize> = HashMap::new();

    for node in walk(doc, Dialect::Android) {
        if let Some(class) = node?.get("@class").and_then(Value::as_str) {
            *counts.entry(class.to_string()).or_insert(0) += 1;
        }
    }

    let mut ranked: Vec<(String, usize)> = counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    let mut out = String::new();
    for (class, count) in ranked {
        out.push_str(&format!("{}x {}\n", count, class));
    }
    Ok(out)
}
