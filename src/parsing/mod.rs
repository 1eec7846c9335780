//! Parsers for sequence inputs.
//!
//! A single FASTA-style parser covers every input surface: CLI file
//! arguments (plain or gzip compressed), stdin, and web uploads. The same
//! record rule applies everywhere, so a database that parses one way on the
//! command line parses identically when uploaded.
//!
//! ## Example
//!
//! ```rust,no_run
//! use seqmatch::parsing::fasta::{read_database_file, read_query_file};
//! use std::path::Path;
//!
//! let database = read_database_file(Path::new("database.fa")).unwrap();
//! let query = read_query_file(Path::new("query.fa")).unwrap();
//! println!("{} candidates, query {}", database.len(), query.label());
//! ```

pub mod fasta;
