use serde::{Deserialize, Serialize};

use crate::core::feature::Feature;
use crate::core::hit::Hit;

/// Classification of how a hit relates to a known feature
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonType {
    /// Short code, used to build the GFF3 feature type (`<code>-hit`)
    #[serde(rename = "match")]
    pub code: String,

    /// Display label
    pub pretty: String,
}

impl ComparisonType {
    pub fn new(code: impl Into<String>, pretty: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            pretty: pretty.into(),
        }
    }
}

/// A hit compared against a feature
///
/// Either side may be missing: a feature with no overlapping hit, or a hit
/// with no known feature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    #[serde(rename = "type")]
    pub kind: ComparisonType,

    #[serde(default)]
    pub hit: Option<Hit>,

    #[serde(default)]
    pub feature: Option<Feature>,
}

impl Comparison {
    /// The feature to emit alongside this comparison, if it carries data
    #[must_use]
    pub fn emitted_feature(&self) -> Option<&Feature> {
        self.feature.as_ref().filter(|f| f.has_data())
    }
}
