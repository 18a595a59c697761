use serde::Serialize;
use serde_json::{Value, json};

use crate::session::error::InspectError;
use crate::tags::classify::classify;

// ============================================================================
// Element-search request builder
// ============================================================================

/// Selector code for "match by class name" in the automation server's
/// find command.
const CLASS_NAME_SELECTOR: u32 = 4;

/// Upper bound on matches returned per class. Defensive, not a business
/// rule: any sufficiently large bound works.
pub const MAX_MATCHES_PER_CLASS: u32 = 100;

/// A disjunctive element search: match any of the class selectors.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FindRequest {
    /// Match strategy, always `"all"` (any selector may match)
    pub strategy: String,
    pub selectors: Vec<ClassSelector>,
}

/// One class-match clause of a `FindRequest`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassSelector {
    pub class_name: String,
    pub max_matches: u32,

    /// Secondary attribute the caller wants read from each match
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attribute: Option<String>,
}

/// Expand a tag alias into a search request covering every class the alias
/// maps to, each clause bounded at `MAX_MATCHES_PER_CLASS`.
pub fn build_find_request(
    tag_name: &str,
    attribute: Option<&str>,
) -> Result<FindRequest, InspectError> {
    let selectors = classify(tag_name)?
        .into_iter()
        .map(|class_name| ClassSelector {
            class_name,
            max_matches: MAX_MATCHES_PER_CLASS,
            attribute: attribute.map(str::to_string),
        })
        .collect();

    Ok(FindRequest {
        strategy: "all".to_string(),
        selectors,
    })
}

impl FindRequest {
    /// Encode the request as the argument array the automation server's
    /// `find` command expects: `["all", [[4, class], [100]], ...]`.
    pub fn to_args(&self) -> Value {
        let mut args = vec![Value::String(self.strategy.clone())];
        for sel in &self.selectors {
            args.push(json!([
                [CLASS_NAME_SELECTOR, &sel.class_name],
                [sel.max_matches]
            ]));
        }
        Value::Array(args)
    }
}
