use serde::{Deserialize, Serialize};

/// Comparison algorithm identifier.
///
/// The registry is fixed: these four identifiers are the only ones the CLI,
/// the web API, and [`Algorithm::from_name`] accept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    /// Levenshtein distance with unit costs
    #[value(name = "edit_distance")]
    EditDistance,
    /// Length of the longest common subsequence
    #[value(name = "longest_common_subsequence")]
    LongestCommonSubsequence,
    /// Length of the longest common contiguous substring
    #[value(name = "longest_common_substring")]
    LongestCommonSubstring,
    /// Needleman-Wunsch global alignment score
    #[value(name = "needleman_wunsch")]
    NeedlemanWunsch,
}

impl Algorithm {
    /// All registered algorithms, in presentation order
    #[must_use]
    pub const fn all() -> [Algorithm; 4] {
        [
            Self::EditDistance,
            Self::LongestCommonSubsequence,
            Self::LongestCommonSubstring,
            Self::NeedlemanWunsch,
        ]
    }

    /// Look up an algorithm by its registry identifier
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "edit_distance" => Some(Self::EditDistance),
            "longest_common_subsequence" => Some(Self::LongestCommonSubsequence),
            "longest_common_substring" => Some(Self::LongestCommonSubstring),
            "needleman_wunsch" => Some(Self::NeedlemanWunsch),
            _ => None,
        }
    }

    /// Registry identifier
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::EditDistance => "edit_distance",
            Self::LongestCommonSubsequence => "longest_common_subsequence",
            Self::LongestCommonSubstring => "longest_common_substring",
            Self::NeedlemanWunsch => "needleman_wunsch",
        }
    }

    /// Human-readable name for UI listings
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::EditDistance => "Edit Distance (Levenshtein)",
            Self::LongestCommonSubsequence => "Longest Common Subsequence",
            Self::LongestCommonSubstring => "Longest Common Substring",
            Self::NeedlemanWunsch => "Needleman-Wunsch Alignment",
        }
    }

    /// One-line summary for the `algorithms` listing
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::EditDistance => "minimum insertions, deletions and substitutions between sequences",
            Self::LongestCommonSubsequence => "longest shared subsequence, gaps allowed",
            Self::LongestCommonSubstring => "longest shared contiguous run, with length ratio",
            Self::NeedlemanWunsch => "global alignment score under configurable weights",
        }
    }

    /// Whether a better score is smaller or larger
    #[must_use]
    pub const fn direction(self) -> Direction {
        match self {
            Self::EditDistance => Direction::Minimize,
            Self::LongestCommonSubsequence
            | Self::LongestCommonSubstring
            | Self::NeedlemanWunsch => Direction::Maximize,
        }
    }

    /// Bound the best-match scan starts from.
    ///
    /// Edit distance starts at the maximum so the first candidate is always
    /// taken. Subsequence length starts at zero, so a database where every
    /// candidate scores zero produces no winner. Substring and alignment
    /// start at the minimum: their first candidate is taken even at zero or
    /// negative scores.
    #[must_use]
    pub const fn initial_bound(self) -> i64 {
        match self {
            Self::EditDistance => i64::MAX,
            Self::LongestCommonSubsequence => 0,
            Self::LongestCommonSubstring | Self::NeedlemanWunsch => i64::MIN,
        }
    }

    /// Noun used when printing the score
    #[must_use]
    pub const fn score_label(self) -> &'static str {
        match self {
            Self::EditDistance => "distance",
            Self::LongestCommonSubsequence | Self::LongestCommonSubstring => "length",
            Self::NeedlemanWunsch => "score",
        }
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Optimization direction of an algorithm's score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Minimize,
    Maximize,
}

impl Direction {
    /// Strict-inequality comparison: a candidate that merely equals the
    /// incumbent never replaces it, which is what keeps the earliest record
    /// on ties.
    #[must_use]
    pub fn improves(self, candidate: i64, incumbent: i64) -> bool {
        match self {
            Self::Minimize => candidate < incumbent,
            Self::Maximize => candidate > incumbent,
        }
    }
}

/// Weights for Needleman-Wunsch alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringScheme {
    /// Added when residues agree
    pub match_score: i64,
    /// Added when residues differ
    pub mismatch: i64,
    /// Added per gap position, also scales the grid borders
    pub gap: i64,
}

impl Default for ScoringScheme {
    fn default() -> Self {
        Self {
            match_score: 1,
            mismatch: -1,
            gap: -1,
        }
    }
}
