use std::io::Write;

use crate::core::record::Record;
use crate::formatting::{FormatError, Formatter};

/// Writes all records as a single JSON array
///
/// Each element holds exactly the fields of its record. The array is built in
/// memory and written with one call.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFormatter;

impl JsonFormatter {
    pub const NAME: &'static str = "json";
}

impl Formatter for JsonFormatter {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn write_records(
        &self,
        records: &mut dyn Iterator<Item = Record>,
        out: &mut dyn Write,
    ) -> Result<(), FormatError> {
        let records: Vec<Record> = records.collect();
        let buffer = serde_json::to_vec(&records)?;
        out.write_all(&buffer)?;
        Ok(())
    }
}
