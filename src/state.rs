//! View state machine for the search-and-results view.
//!
//! The view owns exactly one [`ViewState`] value; the four variants are
//! mutually exclusive, so stale results can never bleed through a loading
//! overlay or an error banner. Transitions are pure functions of
//! (current state, event), which keeps them testable without any UI.

use crate::api::AnalysisResult;
use crate::error::ApiError;

/// The four mutually exclusive states of the search-and-results view.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ViewState {
    /// Nothing searched yet; show the prompt inviting input.
    #[default]
    Idle,
    /// A request is in flight; input and submission are disabled.
    Loading,
    /// The last search failed; holds the display message.
    Error(String),
    /// The last search succeeded; holds the full server response.
    Results(AnalysisResult),
}

/// Events that drive [`ViewState`] transitions.
#[derive(Debug)]
pub enum SearchEvent {
    /// A non-empty query was submitted; a request is about to be issued.
    Submitted,
    /// The in-flight request finished.
    Completed(Result<AnalysisResult, ApiError>),
}

impl ViewState {
    /// Advance the state machine by one event.
    ///
    /// Submission always moves to `Loading`, clearing any prior error or
    /// results. Completion replaces `Loading` with either the fresh results
    /// or the error's display message; nothing is ever merged or appended.
    pub fn apply(self, event: SearchEvent) -> ViewState {
        match event {
            SearchEvent::Submitted => ViewState::Loading,
            SearchEvent::Completed(Ok(result)) => ViewState::Results(result),
            SearchEvent::Completed(Err(err)) => ViewState::Error(err.user_message()),
        }
    }

    /// Whether a request is currently outstanding.
    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }
}

/// Validate and trim a raw input string into a submittable query.
///
/// Returns `None` for empty or whitespace-only input; submission is then a
/// silent no-op with no request issued and no state change.
pub fn normalize_query(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{QueryMovie, SimilarMovie};
    use crate::error::CONNECTION_ERROR_MESSAGE;

    fn sample_result() -> AnalysisResult {
        AnalysisResult {
            query_movie: QueryMovie {
                id: "603".to_string(),
                title: "The Matrix".to_string(),
                overview: String::new(),
                release_date: "1999-03-30".to_string(),
                runtime: "136min".to_string(),
                rating: 8.2,
                genres: "Action, Science Fiction".to_string(),
            },
            similar_movies: vec![SimilarMovie {
                title: "Inception".to_string(),
                similarity: 91.5,
                justification: "Both explore layered realities.".to_string(),
                shared_genres: vec!["Action".to_string()],
                genres: "Action, Science Fiction".to_string(),
            }],
        }
    }

    #[test]
    fn test_submit_moves_to_loading() {
        assert_eq!(ViewState::Idle.apply(SearchEvent::Submitted), ViewState::Loading);
    }

    #[test]
    fn test_submit_clears_previous_results() {
        // A new search must clear the previous result before the new one
        // arrives; Loading holds no result data at all.
        let state = ViewState::Results(sample_result()).apply(SearchEvent::Submitted);
        assert_eq!(state, ViewState::Loading);
    }

    #[test]
    fn test_resubmit_after_error_clears_the_error() {
        let state = ViewState::Error("Movie not found".to_string()).apply(SearchEvent::Submitted);
        assert_eq!(state, ViewState::Loading);
    }

    #[test]
    fn test_success_replaces_loading_with_results() {
        let result = sample_result();
        let state = ViewState::Loading.apply(SearchEvent::Completed(Ok(result.clone())));
        assert_eq!(state, ViewState::Results(result));
    }

    #[test]
    fn test_service_failure_surfaces_detail_text() {
        let err = ApiError::Service {
            status: 404,
            detail: "Movie not found".to_string(),
        };
        let state = ViewState::Loading.apply(SearchEvent::Completed(Err(err)));
        assert_eq!(state, ViewState::Error("Movie not found".to_string()));
    }

    #[test]
    fn test_transport_failure_surfaces_generic_message() {
        let err = ApiError::Transport("connection refused".to_string());
        let state = ViewState::Loading.apply(SearchEvent::Completed(Err(err)));
        assert_eq!(state, ViewState::Error(CONNECTION_ERROR_MESSAGE.to_string()));
    }

    #[test]
    fn test_normalize_query_trims() {
        assert_eq!(normalize_query("  Heat  "), Some("Heat".to_string()));
    }

    #[test]
    fn test_normalize_query_rejects_empty_and_whitespace() {
        assert_eq!(normalize_query(""), None);
        assert_eq!(normalize_query("   \t  "), None);
    }

    #[test]
    fn test_default_state_is_idle() {
        assert_eq!(ViewState::default(), ViewState::Idle);
        assert!(!ViewState::default().is_loading());
        assert!(ViewState::Loading.is_loading());
    }
}
