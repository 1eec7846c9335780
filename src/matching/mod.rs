//! Best-match scanning and the scoring algorithms behind it.
//!
//! This module provides the core matching functionality:
//!
//! - [`MatchEngine`]: Main entry point for scanning a database
//! - [`BestMatch`]: The winning record with its score
//! - [`MatchError`]: Typed failures of a scan
//!
//! ## Selection
//!
//! Every candidate in the database is scored against the query, then a
//! single pass keeps the best score under the algorithm's direction:
//!
//! - **Edit distance**: lower is better
//! - **Common subsequence / substring / alignment**: higher is better
//!
//! Replacement requires a strict improvement, so when two candidates score
//! the same the earlier record wins.
//!
//! ## Example
//!
//! ```rust
//! use seqmatch::core::{Algorithm, Database, Query, Record};
//! use seqmatch::matching::MatchEngine;
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

pub mod alignment;
pub mod edit_distance;
pub mod engine;
pub mod grid;
pub mod subsequence;
pub mod substring;

pub use engine::{BestMatch, MatchEngine, MatchError};
