use serde_json::Value;

use crate::session::error::InspectError;
use crate::tree::model::value_kind;

// ============================================================================
// String-resource table and reverse index
// ============================================================================

/// Identifier → declared string mapping loaded from the app's string
/// resources. Immutable after load; an empty table is a legal, inert state.
///
/// Entries keep their load order so reverse lookups are deterministic.
#[derive(Debug, Clone, Default)]
pub struct StringResourceTable {
    entries: Vec<(String, String)>,
}

impl StringResourceTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from a parsed strings document (a flat JSON object).
    /// Non-string values are skipped.
    pub fn from_value(doc: &Value) -> Result<Self, InspectError> {
        let map = doc.as_object().ok_or_else(|| {
            InspectError::MalformedDocument(format!(
                "strings document must be an object, found {}",
                value_kind(doc)
            ))
        })?;

        let entries = map
            .iter()
            .filter_map(|(key, value)| {
                value.as_str().map(|s| (key.clone(), s.to_string()))
            })
            .collect();

        Ok(StringResourceTable { entries })
    }

    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        StringResourceTable {
            entries: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Declared string for an identifier, if present.
    pub fn get(&self, id: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| key == id)
            .map(|(_, value)| value.as_str())
    }

    /// Every identifier whose stored string equals `value`, in table order.
    /// Several ids may legitimately map to the same displayed string.
    pub fn lookup(&self, value: &str) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|(_, stored)| stored == value)
            .map(|(key, _)| key.as_str())
            .collect()
    }

    /// Union of exact matches against either candidate value, in table
    /// order, without deduplicating identifiers. Absent candidates match
    /// nothing.
    pub fn lookup_either(&self, first: Option<&str>, second: Option<&str>) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|(_, stored)| {
                first.is_some_and(|v| stored == v) || second.is_some_and(|v| stored == v)
            })
            .map(|(key, _)| key.as_str())
            .collect()
    }

    /// Check that an identifier can be used for an id lookup: it must be in
    /// the table, or be a namespaced resource id. Resource ids contain `:`
    /// and are never part of the string table.
    pub fn validate_id(&self, id: &str) -> Result<(), InspectError> {
        if self.get(id).is_some() || id.contains(':') {
            Ok(())
        } else {
            Err(InspectError::InvalidId(id.to_string()))
        }
    }
}
