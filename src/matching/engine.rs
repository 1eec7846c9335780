use rayon::prelude::*;
use thiserror::Error;
use tracing::debug;

use crate::core::record::{Database, Query, Record};
use crate::core::types::{Algorithm, ScoringScheme};
use crate::matching::grid::{to_cell, RowPair};
use crate::matching::{alignment, edit_distance, subsequence, substring};

/// Safely convert usize to f64 for ratio calculations
///
/// This function explicitly handles the precision loss that occurs when
/// converting usize to f64 on 64-bit platforms. Sequence lengths are well
/// within the safe range of f64 mantissa precision.
#[inline]
fn count_to_f64(count: usize) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    {
        count as f64
    }
}

/// Ways a best-match scan can fail
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatchError {
    #[error("database contains no records")]
    EmptyDatabase,

    #[error("query sequence has no residues")]
    EmptyQuery,

    #[error("unknown algorithm: {name}")]
    UnknownAlgorithm { name: String },

    #[error("no candidate scored above the starting bound")]
    DegenerateResult,

    #[error("winning candidate has no residues, length ratio is undefined")]
    ZeroLengthCandidate,
}

/// The winning candidate of a database scan
#[derive(Debug, Clone)]
pub struct BestMatch {
    /// Zero-based position of the winner in the database
    pub index: usize,

    /// The winning record
    pub record: Record,

    /// Algorithm that produced the score
    pub algorithm: Algorithm,

    /// The winning score, in the algorithm's own unit
    pub score: i64,

    /// Longest-run length over winning candidate length. Only present for
    /// the substring algorithm.
    pub ratio: Option<f64>,
}

/// Scans a database for the record that best matches a query.
///
/// Candidates are visited in database order and compared under the
/// algorithm's direction with strict inequality, so the earliest record
/// wins ties.
pub struct MatchEngine<'a> {
    database: &'a Database,
    scheme: ScoringScheme,
}

impl<'a> MatchEngine<'a> {
    /// Create an engine with default alignment weights
    pub fn new(database: &'a Database) -> Self {
        Self {
            database,
            scheme: ScoringScheme::default(),
        }
    }

    /// Create an engine with custom alignment weights
    pub fn with_scheme(database: &'a Database, scheme: ScoringScheme) -> Self {
        Self { database, scheme }
    }

    /// Find the best-matching record for a query.
    ///
    /// # Errors
    ///
    /// Returns `MatchError::EmptyDatabase` before any scoring if the
    /// database has no records, `MatchError::EmptyQuery` if the query has no
    /// residues, `MatchError::DegenerateResult` if no candidate beats the
    /// algorithm's starting bound, and `MatchError::ZeroLengthCandidate` if
    /// the substring ratio would divide by zero.
    pub fn best_match(&self, query: &Query, algorithm: Algorithm) -> Result<BestMatch, MatchError> {
        self.search(query, algorithm, false)
    }

    /// Like [`best_match`](Self::best_match), scoring candidates in parallel.
    ///
    /// Scores land in database order before selection, so the result is
    /// identical to the sequential scan, ties included.
    ///
    /// # Errors
    ///
    /// Same failures as [`best_match`](Self::best_match).
    pub fn best_match_parallel(
        &self,
        query: &Query,
        algorithm: Algorithm,
    ) -> Result<BestMatch, MatchError> {
        self.search(query, algorithm, true)
    }

    /// Resolve an algorithm by registry identifier, then scan.
    ///
    /// # Errors
    ///
    /// Returns `MatchError::UnknownAlgorithm` for an unrecognized name, plus
    /// the failures of [`best_match`](Self::best_match).
    pub fn best_match_by_name(&self, query: &Query, name: &str) -> Result<BestMatch, MatchError> {
        let algorithm = Algorithm::from_name(name).ok_or_else(|| MatchError::UnknownAlgorithm {
            name: name.to_string(),
        })?;
        self.best_match(query, algorithm)
    }

    fn search(
        &self,
        query: &Query,
        algorithm: Algorithm,
        parallel: bool,
    ) -> Result<BestMatch, MatchError> {
        if self.database.is_empty() {
            return Err(MatchError::EmptyDatabase);
        }
        if query.residues().is_empty() {
            return Err(MatchError::EmptyQuery);
        }

        debug!(
            algorithm = %algorithm,
            candidates = self.database.len(),
            parallel,
            "scanning database"
        );

        let residues = query.residues();
        let scores = if parallel {
            self.scores_parallel(residues, algorithm)
        } else {
            self.scores_sequential(residues, algorithm)
        };

        let (index, score) =
            select_best(&scores, algorithm).ok_or(MatchError::DegenerateResult)?;
        let record = self.database.records()[index].clone();

        let ratio = if algorithm == Algorithm::LongestCommonSubstring {
            if record.is_empty() {
                return Err(MatchError::ZeroLengthCandidate);
            }
            let run = usize::try_from(score).unwrap_or(0);
            Some(count_to_f64(run) / count_to_f64(record.len()))
        } else {
            None
        };

        debug!(index, score, "best match selected");

        Ok(BestMatch {
            index,
            record,
            algorithm,
            score,
            ratio,
        })
    }

    /// Score every candidate in database order, reusing one row buffer
    fn scores_sequential(&self, query: &[u8], algorithm: Algorithm) -> Vec<i64> {
        let records = self.database.records();
        match algorithm {
            Algorithm::EditDistance => {
                let mut rows = RowPair::new();
                records
                    .iter()
                    .map(|r| to_cell(edit_distance::distance_with_buf(query, r.residues(), &mut rows)))
                    .collect()
            }
            Algorithm::LongestCommonSubsequence => {
                let mut rows = RowPair::new();
                records
                    .iter()
                    .map(|r| {
                        to_cell(subsequence::subsequence_length_with_buf(
                            query,
                            r.residues(),
                            &mut rows,
                        ))
                    })
                    .collect()
            }
            Algorithm::LongestCommonSubstring => records
                .iter()
                .map(|r| to_cell(substring::longest_run(query, r.residues())))
                .collect(),
            Algorithm::NeedlemanWunsch => {
                let mut rows = RowPair::new();
                let scheme = self.scheme;
                records
                    .iter()
                    .map(|r| alignment::align_score_with_buf(query, r.residues(), scheme, &mut rows))
                    .collect()
            }
        }
    }

    /// Score candidates in parallel with per-thread row buffers. Collecting
    /// through an indexed iterator keeps the scores in database order.
    fn scores_parallel(&self, query: &[u8], algorithm: Algorithm) -> Vec<i64> {
        let records = self.database.records();
        match algorithm {
            Algorithm::EditDistance => records
                .par_iter()
                .map_init(RowPair::new, |rows, r| {
                    to_cell(edit_distance::distance_with_buf(query, r.residues(), rows))
                })
                .collect(),
            Algorithm::LongestCommonSubsequence => records
                .par_iter()
                .map_init(RowPair::new, |rows, r| {
                    to_cell(subsequence::subsequence_length_with_buf(
                        query,
                        r.residues(),
                        rows,
                    ))
                })
                .collect(),
            Algorithm::LongestCommonSubstring => records
                .par_iter()
                .map(|r| to_cell(substring::longest_run(query, r.residues())))
                .collect(),
            Algorithm::NeedlemanWunsch => {
                let scheme = self.scheme;
                records
                    .par_iter()
                    .map_init(RowPair::new, move |rows, r| {
                        alignment::align_score_with_buf(query, r.residues(), scheme, rows)
                    })
                    .collect()
            }
        }
    }
}

/// Apply the selection policy to scores listed in database order.
///
/// A candidate replaces the incumbent only by strictly beating the current
/// bound, which starts at the algorithm's initial bound. Returns None when
/// nothing ever beat the bound.
fn select_best(scores: &[i64], algorithm: Algorithm) -> Option<(usize, i64)> {
    let direction = algorithm.direction();
    let mut bound = algorithm.initial_bound();
    let mut best = None;

    for (index, &score) in scores.iter().enumerate() {
        if direction.improves(score, bound) {
            bound = score;
            best = Some((index, score));
        }
    }

    best
}
