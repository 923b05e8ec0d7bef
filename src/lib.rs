//! CinemaMatch - Movie similarity client.
//!
//! A single-page client for the CinemaMatch analysis service. The user submits
//! a movie title, the client issues one request to the external `/analyze`
//! endpoint, and the ranked similar movies come back with match percentages,
//! shared genres, and medal badges for the top three positions.
//!
//! # Architecture
//!
//! - **State**: one exclusively-owned [`state::ViewState`] value with four
//!   mutually exclusive variants; transitions are pure functions of
//!   (current state, event)
//! - **Network**: exactly one outbound GET per user-initiated search, handled
//!   by [`api::analyze`]; all failures are converted to the error state at the
//!   call site
//! - **Rendering**: Dioxus components in [`components`], one view per state
//!
//! The similarity computation and ranking happen entirely on the analysis
//! service; this crate only displays what the server returns, in server order.
//!
//! # Platform Support
//!
//! - **Web (WASM)**: default target, runs in the browser
//! - **Desktop**: macOS/Windows/Linux via the `desktop` feature

// Enforce memory safety: forbid all unsafe code
#![forbid(unsafe_code)]

pub mod api;
pub mod components;
pub mod config;
pub mod error;
pub mod state;
pub mod utils;
