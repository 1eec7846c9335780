use serde::{Deserialize, Serialize};

/// Residues shown before a record preview is truncated
const PREVIEW_RESIDUES: usize = 50;

/// A single named sequence parsed from a FASTA-style input.
///
/// The label is whatever followed the `>` marker (trimmed, possibly empty);
/// the sequence is the concatenation of the following lines, trimmed and
/// upper-cased. Parsed records always carry at least one residue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Text after the `>` marker, trimmed. Empty for residue lines that
    /// appeared before any header.
    pub label: String,

    /// Upper-cased residue string with per-line whitespace removed
    pub sequence: String,
}

impl Record {
    pub fn new(label: impl Into<String>, sequence: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            sequence: sequence.into(),
        }
    }

    /// Residues as bytes, the unit the scoring kernels compare
    #[must_use]
    pub fn residues(&self) -> &[u8] {
        self.sequence.as_bytes()
    }

    /// Number of residues
    #[must_use]
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    /// First 50 residues, with `...` appended when the sequence is longer
    #[must_use]
    pub fn preview(&self) -> String {
        if self.sequence.chars().count() <= PREVIEW_RESIDUES {
            self.sequence.clone()
        } else {
            let head: String = self.sequence.chars().take(PREVIEW_RESIDUES).collect();
            format!("{head}...")
        }
    }

    /// Label to show in output; placeholder for records that had none
    #[must_use]
    pub fn display_label(&self) -> &str {
        if self.label.is_empty() {
            "(unlabeled)"
        } else {
            &self.label
        }
    }
}

/// Ordered collection of candidate records.
///
/// Order is significant: the best-match scan visits records in input order
/// and resolves score ties in favor of the earliest record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Database {
    records: Vec<Record>,
}

impl Database {
    #[must_use]
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Total residues across all records
    #[must_use]
    pub fn total_residues(&self) -> usize {
        self.records.iter().map(Record::len).sum()
    }
}

/// The sequence being searched for.
///
/// Built from the first record of the query input; any further records in
/// that input are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Query {
    record: Record,
}

impl Query {
    #[must_use]
    pub fn new(record: Record) -> Self {
        Self { record }
    }

    #[must_use]
    pub fn record(&self) -> &Record {
        &self.record
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.record.label
    }

    #[must_use]
    pub fn residues(&self) -> &[u8] {
        self.record.residues()
    }
}
