use serde_json::Value;

/// The two source-document schemas produced by the inspection backends.
///
/// Both describe the same conceptual UI tree; they differ in key naming
/// and in where children nest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    /// Native Android hierarchy dump: `@`-prefixed attributes,
    /// children under `node`, root wrapped in `hierarchy`.
    Android,

    /// Selendroid inspector dump: unprefixed attributes,
    /// children under `children`.
    Selendroid,
}

impl Dialect {
    /// Key under which a node of this dialect nests its children.
    pub fn children_key(&self) -> &'static str {
        match self {
            Dialect::Android => "node",
            Dialect::Selendroid => "children",
        }
    }

    /// Pick the dialect from the automation device name.
    /// Anything that isn't Selendroid uses the native hierarchy dump.
    pub fn for_device(device: &str) -> Dialect {
        if device.eq_ignore_ascii_case("selendroid") {
            Dialect::Selendroid
        } else {
            Dialect::Android
        }
    }
}

/// Short human-readable name for a JSON value's shape, used in
/// malformed-document diagnostics.
pub fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
