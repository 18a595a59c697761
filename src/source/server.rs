use serde_json::Value;

use crate::session::context::StringsProvider;
use crate::session::error::InspectError;
use crate::strings::resources::StringResourceTable;

// ============================================================================
// Automation server client — fetches the UI tree and app strings
// ============================================================================

pub struct SourceClient {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl SourceClient {
    pub fn new(base_url: &str) -> Self {
        SourceClient {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::blocking::Client::new(),
        }
    }

    /// Fetch the current UI tree as a parsed document.
    pub fn fetch_source(&self) -> Result<Value, InspectError> {
        self.get_value("source")
    }

    /// Fetch the app's string resources as a parsed document.
    pub fn fetch_strings(&self) -> Result<Value, InspectError> {
        self.get_value("appium/app/strings")
    }

    fn get_value(&self, path: &str) -> Result<Value, InspectError> {
        let url = format!("{}/{}", self.base_url, path);

        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|e| InspectError::Http {
                context: format!("GET {}", url),
                source: e,
            })?;

        let body: Value = response.json().map_err(|e| InspectError::Http {
            context: format!("decoding response from {}", url),
            source: e,
        })?;

        // Server responses wrap the payload in a `value` field
        Ok(match body {
            Value::Object(mut map) if map.contains_key("value") => map.remove("value").unwrap(),
            other => other,
        })
    }
}

impl StringsProvider for SourceClient {
    fn load(&self) -> Result<StringResourceTable, InspectError> {
        StringResourceTable::from_value(&self.fetch_strings()?)
    }
}

// ============================================================================
// File-backed sources (dumps saved to disk)
// ============================================================================

/// Load a parsed document from a JSON file on disk.
pub fn load_document(path: &str) -> Result<Value, InspectError> {
    let content = std::fs::read_to_string(path).map_err(|e| InspectError::Io {
        context: format!("reading {}", path),
        source: e,
    })?;

    serde_json::from_str(&content).map_err(|e| InspectError::JsonParse {
        context: format!("parsing {}", path),
        source: e,
    })
}

/// Strings provider backed by a strings JSON file.
pub struct FileStrings {
    pub path: String,
}

impl StringsProvider for FileStrings {
    fn load(&self) -> Result<StringResourceTable, InspectError> {
        StringResourceTable::from_value(&load_document(&self.path)?)
    }
}
