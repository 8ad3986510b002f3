//! Line parser for semicolon-delimited schema listings.
//!
//! Each line has the fixed layout
//! `kind;name;schema;parent_name;parent_type;data_type;is_nullable`.
//! Whitespace is not significant anywhere on the line.

use crate::record::FlatRecord;

/// Number of positional fields a line must carry.
pub const FIELD_COUNT: usize = 7;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("Expected 7 fields, found {found}")]
    MissingFields { found: usize },
}

/// Parse a single line into a record.
///
/// Fields past the seventh are ignored.
pub fn parse_line(line: &str) -> Result<FlatRecord, ParseError> {
    let compact: String = line.chars().filter(|c| !c.is_whitespace()).collect();
    let fields: Vec<&str> = compact.split(';').collect();

    if fields.len() < FIELD_COUNT {
        return Err(ParseError::MissingFields {
            found: fields.len(),
        });
    }

    Ok(FlatRecord {
        kind: fields[0].to_uppercase(),
        name: fields[1].to_string(),
        schema: fields[2].to_string(),
        parent_name: fields[3].to_string(),
        parent_type: fields[4].to_string(),
        data_type: fields[5].to_string(),
        is_nullable: fields[6].to_string(),
    })
}

/// Parse every line, dropping the ones that do not form a record.
///
/// Rejected lines never abort the batch.
pub fn parse_lines<I, S>(lines: I) -> Vec<FlatRecord>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut records = Vec::new();

    for (i, line) in lines.into_iter().enumerate() {
        match parse_line(line.as_ref()) {
            Ok(record) => records.push(record),
            Err(e) => tracing::debug!(line = i + 1, "skipping line: {}", e),
        }
    }

    records
}
