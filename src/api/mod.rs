//! Outbound interface to the analysis service.
//!
//! One endpoint, one operation: `GET /analyze?movie_title=...` returning the
//! ranked similar movies. See [`client::analyze`] for the call itself and
//! [`types`] for the response shape.

pub mod client;
pub mod types;

pub use client::{analyze, analyze_url};
pub use types::{AnalysisResult, ErrorBody, QueryMovie, SimilarMovie};
