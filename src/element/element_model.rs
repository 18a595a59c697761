/// Normalized projection of one UI tree node.
///
/// Field bindings per dialect:
/// - Android native: `text` ← `@text`, `name` ← `@content-desc`,
///   `resource_id` ← `@resource-id`, `class` ← `@class`.
/// - Selendroid: `id` ← `name`, `text` ← `value`, `name` ← `label`,
///   `class` ← `type`, `shown` ← `shown`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ElementRecord {
    pub id: Option<String>,
    pub text: Option<String>,
    pub name: Option<String>,
    pub resource_id: Option<String>,
    pub class: Option<String>,
    pub shown: Option<bool>,
}

/// Opaque handle to an element located by id, handed to the driver
/// that executes the actual lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementHandle {
    pub strategy: &'static str,
    pub value: String,
}

impl ElementHandle {
    pub fn by_id(id: &str) -> Self {
        ElementHandle {
            strategy: "id",
            value: id.to_string(),
        }
    }
}
