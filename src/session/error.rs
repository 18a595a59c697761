use std::fmt;

#[derive(Debug)]
pub enum InspectError {
    /// Tag alias not present in the classification table
    InvalidTag(String),

    /// Identifier missing from the string-resource table and not a
    /// namespaced resource id (no ':' separator)
    InvalidId(String),

    /// A tree node was neither a mapping nor a sequence
    MalformedDocument(String),

    /// HTTP request to the automation server failed
    Http { context: String, source: reqwest::Error },

    /// JSON parsing failed (server response or loaded file)
    JsonParse { context: String, source: serde_json::Error },

    /// File I/O failed (source dump or strings file)
    Io { context: String, source: std::io::Error },
}

impl fmt::Display for InspectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InspectError::InvalidTag(tag) => {
                write!(f, "Invalid tag name `{}`", tag)
            }
            InspectError::InvalidId(id) => {
                write!(f, "Invalid id `{}`", id)
            }
            InspectError::MalformedDocument(msg) => {
                write!(f, "Malformed source document: {}", msg)
            }
            InspectError::Http { context, source } => {
                write!(f, "HTTP error ({}): {}", context, source)
            }
            InspectError::JsonParse { context, source } => {
                write!(f, "JSON parse error ({}): {}", context, source)
            }
            InspectError::Io { context, source } => {
                write!(f, "I/O error ({}): {}", context, source)
            }
        }
    }
}

impl std::error::Error for InspectError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InspectError::Http { source, .. } => Some(source),
            InspectError::JsonParse { source, .. } => Some(source),
            InspectError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}
