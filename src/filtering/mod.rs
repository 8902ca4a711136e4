//! Selection of valid alignment hits.
//!
//! Every aligner reports some hit for a query, but what counts as a genuine match
//! depends on the organism and assay. Long human RNAs need to tolerate splicing
//! gaps, while bacterial RNAs should match the genome exactly. Each rule is a
//! [`HitFilter`], selected by name:
//!
//! | Name | Accepts |
//! |------|---------|
//! | `exact` | Equal hit and query length, no gaps anywhere |
//! | `identity` | Percent identity within `[min, max]` (default 100-100) |
//! | `passthrough` | Everything |
//!
//! ## Example
//!
//! ```rust,no_run
//! use genome_mapping::filtering::{fetch_filter, FilterOptions, HitFilter};
//! # let hits: Vec<genome_mapping::Hit> = Vec::new();
//!
//! let options = FilterOptions { min: Some(95.0), max: None };
//! let filter = fetch_filter("identity", &options).unwrap();
//!
//! for hit in filter.filter_matches(&hits) {
//!     println!("{}:{}-{}", hit.chromosome, hit.start, hit.stop);
//! }
//! ```

pub mod filters;

use std::borrow::Borrow;
use std::collections::BTreeSet;
use std::fmt;
use std::iter::FusedIterator;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::hit::Hit;
use crate::registry::{Registry, RegistryError};

/// A rule deciding whether a hit is a genuine match
pub trait HitFilter: fmt::Debug + Send + Sync {
    /// Name this filter is registered under
    fn name(&self) -> &'static str;

    /// Whether `hit` satisfies this filter. Must not have side effects.
    fn is_valid_hit(&self, hit: &Hit) -> bool;

    /// Lazily keep only the valid hits, in input order
    ///
    /// Accepts owned or borrowed hits. Nothing is pulled from `hits` until the
    /// returned iterator is advanced, and nothing is cached.
    fn filter_matches<I>(&self, hits: I) -> FilterMatches<'_, Self, I::IntoIter>
    where
        Self: Sized,
        I: IntoIterator,
        I::Item: Borrow<Hit>,
    {
        FilterMatches {
            filter: self,
            hits: hits.into_iter(),
        }
    }
}

impl<F: HitFilter + ?Sized> HitFilter for Box<F> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn is_valid_hit(&self, hit: &Hit) -> bool {
        (**self).is_valid_hit(hit)
    }
}

impl<F: HitFilter + ?Sized> HitFilter for &F {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn is_valid_hit(&self, hit: &Hit) -> bool {
        (**self).is_valid_hit(hit)
    }
}

/// Iterator returned by [`HitFilter::filter_matches`]
pub struct FilterMatches<'f, F: ?Sized, I> {
    filter: &'f F,
    hits: I,
}

impl<F, I> Iterator for FilterMatches<'_, F, I>
where
    F: HitFilter + ?Sized,
    I: Iterator,
    I::Item: Borrow<Hit>,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let filter = self.filter;
        self.hits
            .find(|hit| filter.is_valid_hit(<I::Item as Borrow<Hit>>::borrow(hit)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.hits.size_hint().1)
    }
}

impl<F, I> FusedIterator for FilterMatches<'_, F, I>
where
    F: HitFilter + ?Sized,
    I: FusedIterator,
    I::Item: Borrow<Hit>,
{
}

/// Construction parameters for filters
///
/// Filters ignore the parameters they do not use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterOptions {
    /// Lower identity bound (percent)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,

    /// Upper identity bound (percent)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
}

fn registry() -> &'static Registry<dyn HitFilter, FilterOptions> {
    static FILTERS: OnceLock<Registry<dyn HitFilter, FilterOptions>> = OnceLock::new();
    FILTERS.get_or_init(|| {
        let mut registry = Registry::new("filter");
        filters::register(&mut registry);
        registry
    })
}

/// Names of all available filters
#[must_use]
pub fn known_filters() -> BTreeSet<&'static str> {
    registry().known()
}

/// Construct the filter registered under `name`
///
/// # Errors
///
/// Returns `RegistryError::Unknown` if no filter has that name.
pub fn fetch_filter(
    name: &str,
    options: &FilterOptions,
) -> Result<Box<dyn HitFilter>, RegistryError> {
    let filter = registry().build(name, options)?;
    debug!("Using filter {:?}", filter);
    Ok(filter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::hit::InputSequence;
    use crate::core::stats::Stats;
    use std::cell::Cell;

    fn hit(start: u64, identity: f64) -> Hit {
        Hit {
            chromosome: "chr1".to_string(),
            start,
            stop: start + 10,
            is_forward: true,
            input_sequence: InputSequence::new(format!("q{start}"), ""),
            stats: Stats::ungapped(10, identity),
            fragments: Vec::new(),
        }
    }

    #[test]
    fn test_known_filters() {
        let known: Vec<_> = known_filters().into_iter().collect();
        assert_eq!(known, vec!["exact", "identity", "passthrough"]);
    }

    #[test]
    fn test_fetch_filter_names_match() {
        for name in known_filters() {
            let filter = fetch_filter(name, &FilterOptions::default()).unwrap();
            assert_eq!(filter.name(), name);
        }
    }

    #[test]
    fn test_fetch_unknown_filter() {
        let err = fetch_filter("nonexistent", &FilterOptions::default()).unwrap_err();
        assert!(matches!(err, RegistryError::Unknown { kind: "filter", .. }));
    }

    #[test]
    fn test_filter_matches_preserves_order() {
        let hits = vec![hit(0, 100.0), hit(10, 90.0), hit(20, 100.0), hit(30, 99.0)];
        let options = FilterOptions {
            min: Some(99.0),
            max: None,
        };
        let filter = fetch_filter("identity", &options).unwrap();

        let starts: Vec<u64> = filter.filter_matches(&hits).map(|h| h.start).collect();
        assert_eq!(starts, vec![0, 20, 30]);
    }

    #[test]
    fn test_filter_matches_owned_hits() {
        let hits = vec![hit(0, 100.0), hit(10, 50.0)];
        let filter = fetch_filter("identity", &FilterOptions::default()).unwrap();

        let kept: Vec<Hit> = filter.filter_matches(hits).collect();
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].start, 0);
    }

    #[test]
    fn test_filter_matches_is_lazy() {
        let pulled = Cell::new(0);
        let hits = (0..100).map(|i| {
            pulled.set(pulled.get() + 1);
            hit(i * 10, 100.0)
        });

        let filter = fetch_filter("passthrough", &FilterOptions::default()).unwrap();
        let mut matches = filter.filter_matches(hits);
        assert_eq!(pulled.get(), 0);

        let first = matches.next().unwrap();
        assert_eq!(first.start, 0);
        assert_eq!(pulled.get(), 1);
    }

    #[test]
    fn test_filter_matches_restarts_with_input() {
        let hits = vec![hit(0, 100.0), hit(10, 80.0)];
        let filter = filters::PercentIdentityFilter::default();

        assert_eq!(filter.filter_matches(&hits).count(), 1);
        assert_eq!(filter.filter_matches(&hits).count(), 1);
    }
}
