//! Serialization of hits, features and comparisons.
//!
//! A [`Formatter`] writes a mixed sequence of [`Record`]s to any [`Write`] sink.
//! Formatters are selected by name:
//!
//! - **json**: One JSON array with an object per record
//! - **gff3**: A `##gff-version 3` header, then one feature line per emitted record
//!
//! The sink is borrowed and never closed. On error, lines already written stay
//! in the sink.
//!
//! ## Example
//!
//! ```rust,no_run
//! use genome_mapping::formatting::format;
//! use genome_mapping::Record;
//! # let records: Vec<Record> = Vec::new();
//!
//! let mut stdout = std::io::stdout().lock();
//! format(records, "gff3", &mut stdout).unwrap();
//! ```

pub mod gff3;
pub mod json;

use std::collections::BTreeSet;
use std::fmt;
use std::io::Write;
use std::sync::OnceLock;

use thiserror::Error;
use tracing::debug;

use crate::core::record::Record;
use crate::registry::{Registry, RegistryError};

#[derive(Error, Debug)]
pub enum FormatError {
    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error("Hit {start}..{stop} on {seqid} has no GFF3 position")]
    Coordinates { seqid: String, start: u64, stop: u64 },
}

/// Serializes records to an output sink
pub trait Formatter: fmt::Debug + Send + Sync {
    /// Name this formatter is registered under
    fn name(&self) -> &'static str;

    /// Write a complete document for `records` to `out`, in input order
    ///
    /// # Errors
    ///
    /// Returns `FormatError` if writing or serialization fails.
    fn write_records(
        &self,
        records: &mut dyn Iterator<Item = Record>,
        out: &mut dyn Write,
    ) -> Result<(), FormatError>;
}

fn new_gff3(_: &()) -> Box<dyn Formatter> {
    Box::new(gff3::Gff3Formatter)
}

fn new_json(_: &()) -> Box<dyn Formatter> {
    Box::new(json::JsonFormatter)
}

fn registry() -> &'static Registry<dyn Formatter> {
    static FORMATTERS: OnceLock<Registry<dyn Formatter>> = OnceLock::new();
    FORMATTERS.get_or_init(|| {
        let mut registry = Registry::new("formatter");
        registry
            .register(gff3::Gff3Formatter::NAME, new_gff3)
            .register(json::JsonFormatter::NAME, new_json);
        registry
    })
}

/// Names of all available formatters
#[must_use]
pub fn known_formatters() -> BTreeSet<&'static str> {
    registry().known()
}

/// Construct the formatter registered under `name`
///
/// # Errors
///
/// Returns `RegistryError::Unknown` if no formatter has that name.
pub fn fetch_formatter(name: &str) -> Result<Box<dyn Formatter>, RegistryError> {
    let formatter = registry().build(name, &())?;
    debug!("Using formatter {:?}", formatter);
    Ok(formatter)
}

/// Write `records` to `out` with the formatter named `name`
///
/// The formatter is resolved before anything is written, so an unknown name
/// leaves `out` untouched.
///
/// # Errors
///
/// Returns `FormatError::Registry` for an unknown formatter, or the
/// formatter's own error.
pub fn format<I>(records: I, name: &str, out: &mut dyn Write) -> Result<(), FormatError>
where
    I: IntoIterator<Item = Record>,
{
    let formatter = fetch_formatter(name)?;
    let mut records = records.into_iter();
    formatter.write_records(&mut records, out)
}
