//! Needleman-Wunsch global alignment, score only.

use crate::core::types::ScoringScheme;
use crate::matching::grid::{to_cell, RowPair};

/// Global alignment score between two residue strings.
///
/// Grid borders carry cumulative gap penalties, each cell takes the best of
/// diagonal (match or mismatch), up and left (gap) moves, and the score is
/// the final cell. No traceback is kept; only the score is returned.
#[must_use]
pub fn align_score(query: &[u8], candidate: &[u8], scheme: ScoringScheme) -> i64 {
    align_score_with_buf(query, candidate, scheme, &mut RowPair::new())
}

/// Alignment score using a caller-provided row buffer
#[must_use]
pub fn align_score_with_buf(
    query: &[u8],
    candidate: &[u8],
    scheme: ScoringScheme,
    rows: &mut RowPair<i64>,
) -> i64 {
    let cols = candidate.len() + 1;
    rows.reset(cols, |j| scheme.gap * to_cell(j));

    for (i, &q) in query.iter().enumerate() {
        rows.curr[0] = scheme.gap * to_cell(i + 1);
        for (j, &c) in candidate.iter().enumerate() {
            let diag = rows.prev[j]
                + if q == c {
                    scheme.match_score
                } else {
                    scheme.mismatch
                };
            let up = rows.prev[j + 1] + scheme.gap;
            let left = rows.curr[j] + scheme.gap;
            rows.curr[j + 1] = diag.max(up).max(left);
        }
        rows.advance();
    }

    rows.prev[candidate.len()]
}
