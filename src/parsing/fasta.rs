//! Parser for FASTA-style sequence inputs.
//!
//! The record rule is deliberately forgiving:
//!
//! - A line whose first non-whitespace character is `>` starts a new record;
//!   the rest of the line, trimmed, is the label (possibly empty).
//! - Every other line is trimmed, upper-cased, and appended to the current
//!   record's residues. Blank lines are skipped.
//! - A record is emitted only once it has at least one residue. A header
//!   followed immediately by another header, or a trailing header at end of
//!   input, is dropped.
//! - Residue lines before any header accumulate into a record with an empty
//!   label.
//!
//! Supports both uncompressed and gzip compressed files (`.gz`, `.bgz`).

use std::io::{BufRead, BufReader};
use std::path::Path;

use flate2::read::GzDecoder;
use thiserror::Error;
use tracing::warn;

use crate::core::record::{Database, Query, Record};
use crate::utils::validation::{
    check_record_limit, check_residue_limit, MAX_RECORDS, MAX_TOTAL_RESIDUES,
};

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("no records found in input")]
    NoRecords,

    #[error("too many records: {0} exceeds maximum allowed ({MAX_RECORDS})")]
    TooManyRecords(usize),

    #[error("too many residues: {0} exceeds maximum allowed ({MAX_TOTAL_RESIDUES})")]
    TooManyResidues(usize),
}

/// Check if the path is a gzipped file
#[must_use]
pub fn is_gzipped(path: &Path) -> bool {
    let path_str = path.to_string_lossy().to_lowercase();
    path_str.ends_with(".gz") || path_str.ends_with(".bgz")
}

/// Parse records from raw text (stdin, pasted, or uploaded content)
///
/// # Errors
///
/// Returns `ParseError::TooManyRecords` or `ParseError::TooManyResidues` if
/// the input exceeds the caps. An input with no records parses to an empty
/// vector, not an error.
pub fn parse_text(text: &str) -> Result<Vec<Record>, ParseError> {
    read_records(text.as_bytes())
}

/// Parse records from a buffered reader
///
/// # Errors
///
/// Returns `ParseError::Io` if reading fails, or `ParseError::TooManyRecords`
/// / `ParseError::TooManyResidues` if the input exceeds the caps.
pub fn read_records<R: BufRead>(reader: R) -> Result<Vec<Record>, ParseError> {
    let mut records: Vec<Record> = Vec::new();
    let mut label = String::new();
    let mut sequence = String::new();
    let mut total_residues = 0usize;
    let mut pending_header = false;

    for line in reader.lines() {
        let line = line?;
        let line = line.trim();

        if let Some(rest) = line.strip_prefix('>') {
            if sequence.is_empty() {
                if pending_header {
                    warn!(label = %label, "skipping record with no residues");
                }
            } else {
                if check_record_limit(records.len()).is_some() {
                    return Err(ParseError::TooManyRecords(records.len()));
                }
                records.push(Record::new(
                    std::mem::take(&mut label),
                    std::mem::take(&mut sequence),
                ));
            }
            label = rest.trim().to_string();
            pending_header = true;
        } else if !line.is_empty() {
            let upper = line.to_uppercase();
            total_residues += upper.len();
            if check_residue_limit(total_residues).is_some() {
                return Err(ParseError::TooManyResidues(total_residues));
            }
            sequence.push_str(&upper);
        }
    }

    if sequence.is_empty() {
        if pending_header {
            warn!(label = %label, "skipping record with no residues");
        }
    } else {
        if check_record_limit(records.len()).is_some() {
            return Err(ParseError::TooManyRecords(records.len()));
        }
        records.push(Record::new(label, sequence));
    }

    Ok(records)
}

/// Read a database of candidate records from a file.
///
/// The file may be plain text or gzip compressed (by extension).
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read,
/// `ParseError::NoRecords` if it contains no records, or the cap errors for
/// oversized inputs.
pub fn read_database_file(path: &Path) -> Result<Database, ParseError> {
    let records = read_records_from_path(path)?;
    if records.is_empty() {
        return Err(ParseError::NoRecords);
    }
    Ok(Database::new(records))
}

/// Read a query from a file, taking the first record and ignoring the rest.
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read,
/// `ParseError::NoRecords` if it contains no records, or the cap errors for
/// oversized inputs.
pub fn read_query_file(path: &Path) -> Result<Query, ParseError> {
    let records = read_records_from_path(path)?;
    query_from_records(records)
}

/// Take the first record as the query, ignoring the rest.
///
/// # Errors
///
/// Returns `ParseError::NoRecords` if the record list is empty.
pub fn query_from_records(records: Vec<Record>) -> Result<Query, ParseError> {
    let count = records.len();
    let first = records.into_iter().next().ok_or(ParseError::NoRecords)?;
    if count > 1 {
        warn!(
            ignored = count - 1,
            "query input has multiple records, using the first"
        );
    }
    Ok(Query::new(first))
}

fn read_records_from_path(path: &Path) -> Result<Vec<Record>, ParseError> {
    let file = std::fs::File::open(path)?;
    if is_gzipped(path) {
        read_records(BufReader::new(GzDecoder::new(file)))
    } else {
        read_records(BufReader::new(file))
    }
}
