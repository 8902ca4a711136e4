//! # genome-mapping
//!
//! A library for deciding which sequence alignments are genuine matches against a
//! genome, and for writing alignment-derived records as JSON or GFF3.
//!
//! An external aligner produces [`Hit`]s for each query sequence. Whether a hit
//! counts as a real match depends on the organism and assay, so the rule is a
//! pluggable [`HitFilter`] chosen by name. Hits, annotation [`Feature`]s and
//! hit/feature [`Comparison`]s are then written by a pluggable [`Formatter`],
//! also chosen by name.
//!
//! ## Example
//!
//! ```rust,no_run
//! use genome_mapping::filtering::{fetch_filter, FilterOptions, HitFilter};
//! use genome_mapping::formatting::format;
//! use genome_mapping::{Hit, Record};
//! # let hits: Vec<Hit> = Vec::new();
//!
//! let filter = fetch_filter("exact", &FilterOptions::default()).unwrap();
//! let records = filter.filter_matches(hits).map(Record::from);
//!
//! let mut stdout = std::io::stdout().lock();
//! format(records, "gff3", &mut stdout).unwrap();
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Hit, feature, comparison and statistics records
//! - [`filtering`]: Hit filters and their registry
//! - [`formatting`]: JSON and GFF3 formatters and their registry
//! - [`registry`]: The name-to-constructor registry shared by both
//! - [`cli`]: Command-line interface implementation

pub mod cli;
pub mod core;
pub mod filtering;
pub mod formatting;
pub mod registry;

// Re-export commonly used types for convenience
pub use crate::core::comparison::{Comparison, ComparisonType};
pub use crate::core::feature::Feature;
pub use crate::core::hit::{Fragment, Hit, InputSequence, Strand};
pub use crate::core::record::Record;
pub use crate::core::stats::{GapStats, LengthStats, Stats};
pub use filtering::{fetch_filter, known_filters, FilterOptions, HitFilter};
pub use formatting::{fetch_formatter, format, known_formatters, FormatError, Formatter};
pub use registry::RegistryError;
