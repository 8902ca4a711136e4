use std::io::Write;

use noodles::core::Position;
use noodles::gff;
use noodles::gff::feature::record::Strand as GffStrand;
use noodles::gff::feature::record_buf::attributes::field::Value;
use noodles::gff::feature::record_buf::Attributes;
use noodles::gff::feature::RecordBuf;

use crate::core::feature::Feature;
use crate::core::hit::{Hit, Strand};
use crate::core::record::Record;
use crate::formatting::{FormatError, Formatter};

/// Value of the GFF3 source column for every hit line
pub const SOURCE: &str = "genome-mapping";

/// First line of every GFF3 document
pub const HEADER: &str = "##gff-version 3";

/// Streams records as GFF3, one line per emitted feature
///
/// Hits become `hit` features (`<code>-hit` inside a comparison) and are
/// serialized by the noodles GFF writer, which handles column escaping.
/// Features are written from their pre-rendered text.
#[derive(Debug, Clone, Copy, Default)]
pub struct Gff3Formatter;

impl Gff3Formatter {
    pub const NAME: &'static str = "gff3";

    /// Build the GFF3 record for a hit
    ///
    /// Hit coordinates are 0-based half-open, so only the start moves.
    /// `extra` attributes follow the standard ones; a repeated key replaces the
    /// earlier value in place.
    ///
    /// # Errors
    ///
    /// Returns `FormatError::Coordinates` if the hit has no 1-based position
    /// (an empty hit ending at 0).
    pub fn hit_record(
        &self,
        hit: &Hit,
        hit_type: Option<&str>,
        extra: Vec<(&str, Value)>,
    ) -> Result<RecordBuf, FormatError> {
        let invalid = || FormatError::Coordinates {
            seqid: hit.chromosome.clone(),
            start: hit.start,
            stop: hit.stop,
        };
        let start = to_position(hit.start + 1).ok_or_else(invalid)?;
        let end = to_position(hit.stop).ok_or_else(invalid)?;

        let attributes: Attributes = [
            ("Name", Value::from(hit.input_sequence.uri.clone())),
            ("Header", Value::from(hit.input_sequence.header.clone())),
            ("HitSize", Value::from(hit.stats.length.hit.to_string())),
            ("QuerySize", Value::from(hit.stats.length.query.to_string())),
        ]
        .into_iter()
        .chain(extra)
        .map(|(key, value)| (key.into(), value))
        .collect();

        let feature_type = match hit_type {
            Some(hit_type) => format!("{hit_type}-hit"),
            None => "hit".to_string(),
        };

        let strand = match hit.strand() {
            Strand::Forward => GffStrand::Forward,
            Strand::Reverse => GffStrand::Reverse,
        };

        Ok(RecordBuf::builder()
            .set_reference_sequence_name(hit.chromosome.clone())
            .set_source(SOURCE.to_string())
            .set_type(feature_type)
            .set_start(start)
            .set_end(end)
            .set_strand(strand)
            .set_attributes(attributes)
            .build())
    }

    fn write_hit(
        &self,
        out: &mut dyn Write,
        hit: &Hit,
        hit_type: Option<&str>,
        extra: Vec<(&str, Value)>,
    ) -> Result<(), FormatError> {
        let record = self.hit_record(hit, hit_type, extra)?;
        gff::io::Writer::new(out).write_record(&record)?;
        Ok(())
    }

    fn write_feature(&self, out: &mut dyn Write, feature: &Feature) -> std::io::Result<()> {
        writeln!(out, "{}", feature.pretty)
    }
}

fn to_position(n: u64) -> Option<Position> {
    usize::try_from(n).ok().and_then(Position::new)
}

impl Formatter for Gff3Formatter {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn write_records(
        &self,
        records: &mut dyn Iterator<Item = Record>,
        out: &mut dyn Write,
    ) -> Result<(), FormatError> {
        writeln!(out, "{HEADER}")?;

        for record in records {
            match record {
                Record::Hit(hit) => self.write_hit(out, &hit, None, Vec::new())?,
                Record::Feature(feature) => self.write_feature(out, &feature)?,
                Record::Comparison(comparison) => {
                    if let Some(hit) = &comparison.hit {
                        let extra = vec![("type", Value::from(comparison.kind.pretty.clone()))];
                        self.write_hit(out, hit, Some(comparison.kind.code.as_str()), extra)?;
                    }
                    if let Some(feature) = comparison.emitted_feature() {
                        self.write_feature(out, feature)?;
                    }
                }
            }
        }

        Ok(())
    }
}
