use serde_json::Value;

use crate::element::element_model::ElementHandle;
use crate::report::histogram::class_histogram;
use crate::report::inspect::inspect_report;
use crate::session::error::InspectError;
use crate::strings::resources::StringResourceTable;
use crate::tags::find::{FindRequest, build_find_request};
use crate::tree::model::Dialect;

// ============================================================================
// Inspect session — owns the dialect and the memoized string table
// ============================================================================

/// Source of the app's string resources (file, automation server, or none).
pub trait StringsProvider {
    fn load(&self) -> Result<StringResourceTable, InspectError>;
}

/// Provider for apps with no loadable strings; lookups simply never match.
pub struct NoStrings;

impl StringsProvider for NoStrings {
    fn load(&self) -> Result<StringResourceTable, InspectError> {
        Ok(StringResourceTable::new())
    }
}

/// One inspection session against one device.
///
/// The string-resource table is loaded on first use and kept for the life
/// of the session; nothing else persists between calls.
pub struct InspectSession {
    pub dialect: Dialect,
    provider: Box<dyn StringsProvider>,
    strings: Option<StringResourceTable>,
}

impl InspectSession {
    pub fn new(dialect: Dialect, provider: Box<dyn StringsProvider>) -> Self {
        InspectSession {
            dialect,
            provider,
            strings: None,
        }
    }

    /// The session's string table, loading it on first access.
    pub fn strings(&mut self) -> Result<&StringResourceTable, InspectError> {
        if self.strings.is_none() {
            self.strings = Some(self.provider.load()?);
        }
        Ok(self.strings.as_ref().unwrap())
    }

    /// Render the inspect report for a parsed source document.
    pub fn inspect(&mut self, doc: &Value) -> Result<String, InspectError> {
        match self.dialect {
            // Only the native report resolves ids against app strings
            Dialect::Android => {
                let strings = self.strings()?;
                inspect_report(doc, Dialect::Android, strings)
            }
            Dialect::Selendroid => {
                inspect_report(doc, Dialect::Selendroid, &StringResourceTable::new())
            }
        }
    }

    /// Render the class histogram for a native hierarchy dump.
    pub fn class_histogram(&self, doc: &Value) -> Result<String, InspectError> {
        class_histogram(doc)
    }

    /// Build the search request for a tag alias.
    pub fn find_by_tag(
        &self,
        tag_name: &str,
        attribute: Option<&str>,
    ) -> Result<FindRequest, InspectError> {
        build_find_request(tag_name, attribute)
    }

    /// Resolve an identifier to an element handle. The identifier must be
    /// in the string table or be a namespaced resource id.
    pub fn element_by_id(&mut self, id: &str) -> Result<ElementHandle, InspectError> {
        self.strings()?.validate_id(id)?;
        Ok(ElementHandle::by_id(id))
    }
}
