//! Web server for browser-based sequence matching.
//!
//! This module provides an interactive web interface using Axum. Users
//! upload a database file and a query file, pick an algorithm, and get the
//! best-matching record back.
//!
//! ## Starting the Server
//!
//! ```text
//! # Start on default port 8080
//! seqmatch serve
//!
//! # Custom port and auto-open browser
//! seqmatch serve --port 3000 --open
//!
//! # Bind to all interfaces
//! seqmatch serve --address 0.0.0.0
//! ```
//!
//! ## API Endpoints
//!
//! - `GET /` - Main page with the upload form
//! - `POST /api/search` - Run a best-match search (multipart form)
//! - `GET /api/algorithms` - List the available algorithms

pub mod server;
