//! Core record types produced upstream of this crate.
//!
//! - [`Hit`]: One alignment of a query sequence against the genome, with its [`Fragment`]s
//! - [`Stats`]: Length, gap and identity statistics of a hit or fragment
//! - [`Feature`]: A pre-rendered genomic annotation
//! - [`Comparison`]: A hit classified against a feature
//! - [`Record`]: The closed set of records a formatter accepts
//!
//! ## Coordinates
//!
//! Hit and fragment coordinates are 0-based and half-open on the target
//! sequence, as reported by the aligner. Conversion to 1-based inclusive
//! coordinates happens only when writing GFF3.
//!
//! [`Hit`]: hit::Hit
//! [`Fragment`]: hit::Fragment
//! [`Stats`]: stats::Stats
//! [`Feature`]: feature::Feature
//! [`Comparison`]: comparison::Comparison
//! [`Record`]: record::Record

pub mod comparison;
pub mod feature;
pub mod hit;
pub mod record;
pub mod stats;
