//! Core data types for best-match sequence search.
//!
//! This module provides the fundamental types used throughout the library:
//!
//! - [`Record`]: A single named sequence (label + upper-cased residues)
//! - [`Database`]: The ordered collection of candidate records
//! - [`Query`]: The sequence being searched for
//! - [`Algorithm`], [`Direction`]: The comparison registry and its score
//!   orderings
//! - [`ScoringScheme`]: Configurable Needleman-Wunsch weights
//!
//! ## Score orderings
//!
//! Each algorithm fixes a direction and a starting bound for the scan:
//!
//! | Algorithm                    | Direction | Starting bound |
//! |------------------------------|-----------|----------------|
//! | `edit_distance`              | minimize  | maximum        |
//! | `longest_common_subsequence` | maximize  | zero           |
//! | `longest_common_substring`   | maximize  | minimum        |
//! | `needleman_wunsch`           | maximize  | minimum        |
//!
//! The subsequence bound of zero is the one that can leave a scan with no
//! winner; the other three always accept some candidate.

pub mod record;
pub mod types;

pub use record::{Database, Query, Record};
pub use types::{Algorithm, Direction, ScoringScheme};
