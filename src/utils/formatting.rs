//! Formatting utilities for human-readable output.
//!
//! This module provides consistent formatting for ratings and match
//! percentages across the UI.

/// Format a 0-10 rating for the query movie summary (e.g. "8.2/10").
pub fn format_rating(rating: f64) -> String {
    format!("{:.1}/10", rating)
}

/// Format a 0-100 similarity score as a match percentage (e.g. "91.5% Match").
///
/// Whole numbers drop the decimal so "87.0" displays as "87% Match".
pub fn format_similarity(similarity: f64) -> String {
    if (similarity - similarity.round()).abs() < f64::EPSILON {
        format!("{}% Match", similarity.round() as i64)
    } else {
        format!("{:.1}% Match", similarity)
    }
}
