use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A genomic annotation, already rendered to text by its producer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    /// Complete GFF3 line for the feature, without the trailing newline
    pub pretty: String,

    /// Annotation attributes; empty when the producer had nothing to report
    #[serde(default)]
    pub data: BTreeMap<String, serde_json::Value>,
}

impl Feature {
    pub fn new(pretty: impl Into<String>) -> Self {
        Self {
            pretty: pretty.into(),
            data: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn with_data(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    /// Whether this feature carries any annotation and should be emitted
    #[must_use]
    pub fn has_data(&self) -> bool {
        !self.data.is_empty()
    }
}
