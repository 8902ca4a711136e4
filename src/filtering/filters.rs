//! The built-in hit filters.
//!
//! Adding a filter means adding a type here and registering it in [`register`].

use crate::core::hit::Hit;
use crate::filtering::{FilterOptions, HitFilter};
use crate::registry::Registry;

/// Identity bound used when none is given
pub const DEFAULT_IDENTITY: f64 = 100.0;

/// Accepts only exact matches: the hit and query spans have the same length and
/// there are no gaps in either sequence, overall or in any fragment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExactMappingFilter;

impl ExactMappingFilter {
    pub const NAME: &'static str = "exact";
}

impl HitFilter for ExactMappingFilter {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn is_valid_hit(&self, hit: &Hit) -> bool {
        hit.stats.length.hit == hit.stats.length.query
            && hit.stats.total_gaps == 0
            && hit.fragment_query_gaps() == 0
    }
}

/// Accepts hits whose percent identity lies within `[min, max]`, inclusive.
///
/// The bounds are taken as given; with `min > max` nothing is accepted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PercentIdentityFilter {
    pub min: f64,
    pub max: f64,
}

impl PercentIdentityFilter {
    pub const NAME: &'static str = "identity";

    #[must_use]
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }
}

impl Default for PercentIdentityFilter {
    fn default() -> Self {
        Self::new(DEFAULT_IDENTITY, DEFAULT_IDENTITY)
    }
}

impl HitFilter for PercentIdentityFilter {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn is_valid_hit(&self, hit: &Hit) -> bool {
        hit.stats.identity >= self.min && hit.stats.identity <= self.max
    }
}

/// Accepts every hit
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PassThroughFilter;

impl PassThroughFilter {
    pub const NAME: &'static str = "passthrough";
}

impl HitFilter for PassThroughFilter {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn is_valid_hit(&self, _hit: &Hit) -> bool {
        true
    }
}

fn exact(_: &FilterOptions) -> Box<dyn HitFilter> {
    Box::new(ExactMappingFilter)
}

fn identity(options: &FilterOptions) -> Box<dyn HitFilter> {
    Box::new(PercentIdentityFilter::new(
        options.min.unwrap_or(DEFAULT_IDENTITY),
        options.max.unwrap_or(DEFAULT_IDENTITY),
    ))
}

fn passthrough(_: &FilterOptions) -> Box<dyn HitFilter> {
    Box::new(PassThroughFilter)
}

/// Register every built-in filter
pub fn register(registry: &mut Registry<dyn HitFilter, FilterOptions>) {
    registry
        .register(ExactMappingFilter::NAME, exact)
        .register(PercentIdentityFilter::NAME, identity)
        .register(PassThroughFilter::NAME, passthrough);
}
