//! Shared utilities.

pub mod formatting;
