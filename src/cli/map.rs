//! Map command - filter hits from a record file and write them out.
//!
//! Input is a JSON array of records. The filter applies to bare hits only;
//! features and comparisons pass through unchanged and keep their position.
//! Because the input mixes record kinds, this calls `HitFilter::is_valid_hit`
//! per record instead of `filter_matches`, which only yields `Borrow<Hit>` items.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Args;
use tracing::{debug, warn};

use crate::core::record::Record;
use crate::filtering::{fetch_filter, FilterOptions, HitFilter};
use crate::formatting::fetch_formatter;

/// Arguments for the map command
#[derive(Args)]
pub struct MapArgs {
    /// JSON file with an array of hits, features and comparisons.
    /// Use '-' for stdin
    #[arg(required = true)]
    pub input: PathBuf,

    /// Filter deciding which hits are valid (see `list`)
    #[arg(long, default_value = "passthrough")]
    pub filter: String,

    /// Minimum percent identity (identity filter)
    #[arg(long)]
    pub min: Option<f64>,

    /// Maximum percent identity (identity filter)
    #[arg(long)]
    pub max: Option<f64>,

    /// Output format (see `list`)
    #[arg(short, long, default_value = "gff3")]
    pub format: String,

    /// Output file (stdout if omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Execute the map command
///
/// # Errors
///
/// Returns an error if the filter or formatter is unknown, the input cannot be
/// read or parsed, or the output cannot be written.
#[allow(clippy::needless_pass_by_value)]
pub fn run(args: MapArgs, verbose: bool) -> anyhow::Result<()> {
    let options = FilterOptions {
        min: args.min,
        max: args.max,
    };

    // Resolve both names before touching any file
    let filter = fetch_filter(&args.filter, &options)?;
    let formatter = fetch_formatter(&args.format)?;

    let records = read_records(&args.input)?;
    let kept = filter_records(&*filter, records);

    if verbose {
        eprintln!(
            "Writing {} records as {} after '{}' filter",
            kept.len(),
            formatter.name(),
            filter.name()
        );
    }

    let mut out: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("Cannot create {}", path.display()))?,
        )),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };

    formatter.write_records(&mut kept.into_iter(), &mut out)?;
    out.flush()?;

    Ok(())
}

fn read_records(path: &Path) -> anyhow::Result<Vec<Record>> {
    let records: Vec<Record> = if path.to_string_lossy() == "-" {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        serde_json::from_str(&buffer).context("Invalid records on stdin")?
    } else {
        let file = File::open(path).with_context(|| format!("Cannot open {}", path.display()))?;
        serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("Invalid records in {}", path.display()))?
    };

    let mut kinds: BTreeMap<&str, usize> = BTreeMap::new();
    for record in &records {
        *kinds.entry(record.kind()).or_default() += 1;
    }
    debug!(
        "Read {} records from {} {:?}",
        records.len(),
        path.display(),
        kinds
    );
    Ok(records)
}

/// Drop the hits rejected by `filter`, keeping every other record in place
fn filter_records(filter: &dyn HitFilter, records: Vec<Record>) -> Vec<Record> {
    let mut total_hits = 0usize;
    let mut kept_hits = 0usize;

    let kept: Vec<Record> = records
        .into_iter()
        .filter(|record| match record {
            Record::Hit(hit) => {
                total_hits += 1;
                let valid = filter.is_valid_hit(hit);
                kept_hits += usize::from(valid);
                valid
            }
            Record::Feature(_) | Record::Comparison(_) => true,
        })
        .collect();

    debug!("Filter '{}' kept {kept_hits} of {total_hits} hits", filter.name());

    if total_hits > 0 && kept_hits == 0 {
        warn!("Filter '{}' rejected all {total_hits} hits", filter.name());
    }

    kept
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::comparison::{Comparison, ComparisonType};
    use crate::core::feature::Feature;
    use crate::core::hit::{Hit, InputSequence};
    use crate::core::stats::Stats;
    use crate::filtering::filters::{ExactMappingFilter, PercentIdentityFilter};
    use tempfile::NamedTempFile;

    fn hit(start: u64, identity: f64) -> Record {
        Record::Hit(Hit {
            chromosome: "chr1".to_string(),
            start,
            stop: start + 10,
            is_forward: true,
            input_sequence: InputSequence::new("q", ""),
            stats: Stats::ungapped(10, identity),
            fragments: Vec::new(),
        })
    }

    #[test]
    fn test_filter_records_keeps_non_hits_in_place() {
        let records = vec![
            hit(0, 90.0),
            Feature::new("f1").into(),
            hit(10, 100.0),
            Feature::new("f2").into(),
        ];

        let kept = filter_records(&PercentIdentityFilter::default(), records);
        let kinds: Vec<&str> = kept.iter().map(Record::kind).collect();
        assert_eq!(kinds, vec!["feature", "hit", "feature"]);
    }

    #[test]
    fn test_filter_records_rejecting_everything() {
        let mut gapped = hit(0, 100.0);
        if let Record::Hit(h) = &mut gapped {
            h.stats.total_gaps = 2;
        }
        let kept = filter_records(&ExactMappingFilter, vec![gapped]);
        assert!(kept.is_empty());
    }

    #[test]
    fn test_filter_records_keeps_comparison_hits() {
        let comparison = Comparison {
            kind: ComparisonType::new("novel", "Novel"),
            hit: Some(Hit {
                chromosome: "chr2".to_string(),
                start: 0,
                stop: 10,
                is_forward: false,
                input_sequence: InputSequence::new("c", ""),
                stats: Stats::ungapped(10, 50.0),
                fragments: Vec::new(),
            }),
            feature: None,
        };
        let records = vec![comparison.into(), hit(0, 50.0), hit(10, 100.0)];

        let kept = filter_records(&PercentIdentityFilter::default(), records);
        let kinds: Vec<&str> = kept.iter().map(Record::kind).collect();
        assert_eq!(kinds, vec!["comparison", "hit"]);
    }

    #[test]
    fn test_read_records_from_file() {
        let mut file = NamedTempFile::with_suffix(".json").unwrap();
        let records = vec![hit(0, 100.0), Feature::new("line").with_data("k", 1).into()];
        write!(file, "{}", serde_json::to_string(&records).unwrap()).unwrap();
        file.flush().unwrap();

        assert_eq!(read_records(file.path()).unwrap(), records);
    }

    #[test]
    fn test_read_records_invalid_json() {
        let mut file = NamedTempFile::with_suffix(".json").unwrap();
        write!(file, "{{\"not\": \"an array\"}}").unwrap();
        file.flush().unwrap();

        let err = read_records(file.path()).unwrap_err();
        assert!(err.to_string().starts_with("Invalid records in"));
    }
}
