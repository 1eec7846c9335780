//! Longest common contiguous substring.

/// Length of the longest run of residues shared by both inputs.
///
/// Exhaustive by construction: every start-offset pair `(i, j)` is extended
/// while residues keep matching, and the longest extension wins. A run ends
/// at the first mismatch or when either input is exhausted. Worst-case cost
/// is `O(n * m * min(n, m))`; the input caps and the web layer's request
/// timeout keep that bounded in practice.
#[must_use]
pub fn longest_run(query: &[u8], candidate: &[u8]) -> usize {
    let mut longest = 0;

    for i in 0..query.len() {
        for j in 0..candidate.len() {
            let mut k = 0;
            while i + k < query.len()
                && j + k < candidate.len()
                && query[i + k] == candidate[j + k]
            {
                k += 1;
            }
            if k > longest {
                longest = k;
            }
        }
    }

    longest
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_sequences_full_length() {
        assert_eq!(longest_run(b"ACGT", b"ACGT"), 4);
    }

    #[test]
    fn test_empty_inputs() {
        assert_eq!(longest_run(b"", b"ACGT"), 0);
        assert_eq!(longest_run(b"ACGT", b""), 0);
        assert_eq!(longest_run(b"", b""), 0);
    }

    #[test]
    fn test_disjoint_alphabets_score_zero() {
        assert_eq!(longest_run(b"AAAA", b"TTTT"), 0);
    }

    #[test]
    fn test_internal_run() {
        assert_eq!(longest_run(b"GATTACA", b"TTAC"), 4);
        assert_eq!(longest_run(b"ACG", b"TTTACGTTT"), 3);
    }

    #[test]
    fn test_contiguity_required() {
        // Shares the subsequence ABC but no run longer than one
        assert_eq!(longest_run(b"AXBXC", b"ABC"), 1);
    }

    #[test]
    fn test_run_at_either_end() {
        assert_eq!(longest_run(b"CCCGG", b"GGTTT"), 2);
        assert_eq!(longest_run(b"GGCCC", b"TTTGG"), 2);
    }

    #[test]
    fn test_repeated_residues() {
        assert_eq!(longest_run(b"AAAA", b"AA"), 2);
        assert_eq!(longest_run(b"ABABAB", b"BABA"), 4);
    }
}
