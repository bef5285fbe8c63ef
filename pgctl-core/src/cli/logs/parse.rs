use crate::cli::logs::types::{KNOWN_FIELDS, LogRecord};
use serde_json::{Map, Value};

/// Decode one input line into a normalized [`LogRecord`].
///
/// The line is decoded twice: once into the record shape and once into a
/// generic map, from which the modelled fields are removed so only the extras
/// survive in `additional_fields`.
pub fn parse_record(line: &[u8]) -> Result<LogRecord, serde_json::Error> {
    let mut fields: Map<String, Value> = serde_json::from_slice(line)?;
    let mut record: LogRecord = serde_json::from_slice(line)?;

    for name in KNOWN_FIELDS {
        fields.remove(*name);
    }
    record.additional_fields = fields;

    record.normalize();
    Ok(record)
}
