//! # seqmatch
//!
//! A library for finding the best-matching DNA sequence in a database.
//!
//! Given a database of labeled sequences and a single query sequence,
//! `seqmatch` scores every database record against the query and reports the
//! one best match. Four comparison algorithms are available, each with its
//! own notion of "best":
//!
//! - **Edit distance**: fewest single-character edits (lower is better)
//! - **Longest common subsequence**: longest shared subsequence, gaps
//!   allowed (higher is better)
//! - **Longest common substring**: longest shared contiguous run, reported
//!   with a run/candidate length ratio (higher is better)
//! - **Needleman-Wunsch**: global alignment score under configurable
//!   match/mismatch/gap weights (higher is better)
//!
//! Candidates are scanned in database order and replaced only by a strictly
//! better score, so ties always resolve to the earliest record.
//!
//! ## Example
//!
//! ```rust
//! use seqmatch::{Algorithm, Database, MatchEngine, Query, Record};
//!
//! let database = Database::new(vec![
//!     Record::new("alpha", "ACGTACGT"),
//!     Record::new("beta", "TTTTTTTT"),
//! ]);
//! let query = Query::new(Record::new("sample", "ACGTACGA"));
//!
//! let engine = MatchEngine::new(&database);
//! let best = engine.best_match(&query, Algorithm::EditDistance).unwrap();
//!
//! assert_eq!(best.record.label, "alpha");
//! assert_eq!(best.score, 1);
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Records, databases, and the algorithm registry
//! - [`matching`]: Scoring kernels and the best-match engine
//! - [`parsing`]: The FASTA-style record reader
//! - [`cli`]: Command-line interface implementation
//! - [`web`]: Web server for browser-based searching

pub mod cli;
pub mod core;
pub mod matching;
pub mod parsing;
pub mod utils;
pub mod web;

// Re-export commonly used types for convenience
pub use crate::core::record::{Database, Query, Record};
pub use crate::core::types::{Algorithm, Direction, ScoringScheme};
pub use crate::matching::engine::{BestMatch, MatchEngine, MatchError};
