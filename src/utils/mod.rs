//! Shared helpers: input caps and upload validation.

pub mod validation;
