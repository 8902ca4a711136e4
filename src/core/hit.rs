use serde::{Deserialize, Serialize};

use crate::core::stats::Stats;

/// Strand of the target sequence a hit aligned to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strand {
    Forward,
    Reverse,
}

impl std::fmt::Display for Strand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Forward => write!(f, "+"),
            Self::Reverse => write!(f, "-"),
        }
    }
}

/// The query sequence that produced a hit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputSequence {
    /// Identifier of the query (used as the GFF3 `Name`)
    pub uri: String,

    /// Free-text header line of the query
    pub header: String,
}

impl InputSequence {
    pub fn new(uri: impl Into<String>, header: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            header: header.into(),
        }
    }
}

/// One ungapped or locally gapped piece of a hit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fragment {
    /// 0-based start on the target
    pub start: u64,

    /// 0-based exclusive end on the target
    pub stop: u64,

    /// 0-based start on the query
    pub query_start: u64,

    /// 0-based exclusive end on the query
    pub query_stop: u64,

    pub stats: Stats,
}

/// An alignment of a query sequence against the genome
///
/// Coordinates are 0-based half-open on the target sequence. Hits are produced
/// upstream and only ever read here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hit {
    /// Target sequence id
    pub chromosome: String,

    pub start: u64,

    pub stop: u64,

    pub is_forward: bool,

    pub input_sequence: InputSequence,

    pub stats: Stats,

    #[serde(default)]
    pub fragments: Vec<Fragment>,
}

impl Hit {
    #[must_use]
    pub fn strand(&self) -> Strand {
        if self.is_forward {
            Strand::Forward
        } else {
            Strand::Reverse
        }
    }

    /// Sum of the query-side gaps over all fragments (0 when there are none)
    #[must_use]
    pub fn fragment_query_gaps(&self) -> u64 {
        self.fragments.iter().map(|f| f.stats.gaps.query).sum()
    }
}
