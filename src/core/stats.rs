use serde::{Deserialize, Serialize};

/// Aligned length on each side of a hit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LengthStats {
    /// Length of the aligned span on the target (genome) sequence
    pub hit: u64,

    /// Length of the aligned span on the query sequence
    pub query: u64,
}

/// Gap counts on each side of a hit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GapStats {
    /// Gaps opened in the target sequence
    pub hit: u64,

    /// Gaps opened in the query sequence
    pub query: u64,
}

/// Aggregate alignment statistics, computed upstream by the aligner
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Stats {
    pub length: LengthStats,

    pub gaps: GapStats,

    /// Total number of gaps across both sequences
    pub total_gaps: u64,

    /// Percent identity, 0-100
    pub identity: f64,
}

impl Stats {
    /// Stats for an ungapped alignment of `length` bases at the given identity
    #[must_use]
    pub fn ungapped(length: u64, identity: f64) -> Self {
        Self {
            length: LengthStats {
                hit: length,
                query: length,
            },
            gaps: GapStats::default(),
            total_gaps: 0,
            identity,
        }
    }
}
