use serde::{Deserialize, Serialize};

use crate::core::comparison::Comparison;
use crate::core::feature::Feature;
use crate::core::hit::Hit;

/// Any record that can be written by a formatter
///
/// Serialized without a tag, so each record renders as its own fields only.
/// When deserializing, variants are tried in declaration order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Record {
    Hit(Hit),
    Feature(Feature),
    Comparison(Comparison),
}

impl Record {
    /// Short variant name, for logging
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Hit(_) => "hit",
            Self::Feature(_) => "feature",
            Self::Comparison(_) => "comparison",
        }
    }
}

impl From<Hit> for Record {
    fn from(hit: Hit) -> Self {
        Self::Hit(hit)
    }
}

impl From<Feature> for Record {
    fn from(feature: Feature) -> Self {
        Self::Feature(feature)
    }
}

impl From<Comparison> for Record {
    fn from(comparison: Comparison) -> Self {
        Self::Comparison(comparison)
    }
}
