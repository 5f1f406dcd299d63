//! Message filter definitions, opaque beyond their type discriminator.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single subscription filter as understood by the management API.
///
/// The console only interprets the `type` discriminator; everything else is
/// carried as an opaque payload so unknown filter kinds survive a round trip
/// through the editor unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageFilter {
    #[serde(rename = "type")]
    pub filter_type: String,
    #[serde(flatten)]
    pub payload: Map<String, Value>,
}

impl MessageFilter {
    /// Create a filter with the given type and an empty payload.
    pub fn new(filter_type: impl Into<String>) -> Self {
        Self {
            filter_type: filter_type.into(),
            payload: Map::new(),
        }
    }

    /// Add a payload field, builder style.
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.payload.insert(key.into(), value.into());
        self
    }
}

/// Parse a filter list from the JSON text shown in the filter editor.
pub fn parse_filter_list(text: &str) -> Result<Vec<MessageFilter>, serde_json::Error> {
    serde_json::from_str(text)
}

/// Render a filter list as pretty-printed JSON for the filter editor.
pub fn format_filter_list(filters: &[MessageFilter]) -> String {
    serde_json::to_string_pretty(filters).unwrap_or_else(|_| "[]".to_string())
}
