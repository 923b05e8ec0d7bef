use dioxus::logger::tracing::{error, info};
use dioxus::prelude::*;
use futures_channel::mpsc::UnboundedReceiver;
use futures_util::StreamExt;

use crate::api;
use crate::components::{use_viewport_width, COMPACT_BREAKPOINT};
use crate::config;
use crate::state::{normalize_query, SearchEvent, ViewState};

use super::{EmptyState, ErrorBanner, LoadingOverlay, QuerySummary, ResultCard, SearchCard};

// Messages for the analysis coroutine
enum SearchMessage {
    Analyze(String), // raw input text
}

/// Main search view: search card plus the state-dependent body.
///
/// Owns the input text and the single [`ViewState`] value. One submission
/// issues exactly one request to the analysis service; the coroutine is bound
/// to this component's scope, so an in-flight completion can never mutate
/// state after the view unmounts.
#[component]
pub fn SearchView() -> Element {
    let search_query = use_signal(String::new);
    let view_state = use_signal(|| ViewState::Idle);
    let viewport_width = use_viewport_width();

    // Analysis coroutine - one request per message, no retries
    let search_task = use_coroutine({
        let mut view_state = view_state;

        move |mut rx: UnboundedReceiver<SearchMessage>| async move {
            let base_url = config::api_base_url();

            while let Some(SearchMessage::Analyze(raw)) = rx.next().await {
                // Empty after trimming: silent no-op, no request, no transition
                let Some(query) = normalize_query(&raw) else {
                    continue;
                };

                info!("Analyzing movie: '{}'", query);
                let current = view_state.read().clone();
                view_state.set(current.apply(SearchEvent::Submitted));

                let outcome = api::analyze(&base_url, &query).await;
                match &outcome {
                    Ok(result) => info!(
                        "Analysis completed: {} similar movies for '{}'",
                        result.similar_movies.len(),
                        result.query_movie.title
                    ),
                    Err(e) => error!("Analysis failed for '{}': {}", query, e),
                }

                let current = view_state.read().clone();
                view_state.set(current.apply(SearchEvent::Completed(outcome)));
            }
        }
    });

    let handle_search = move |query: String| {
        search_task.send(SearchMessage::Analyze(query));
    };

    let searching = view_state.read().is_loading();
    let compact = viewport_width() <= COMPACT_BREAKPOINT;

    let body = {
        let state = view_state.read();
        match &*state {
            ViewState::Idle => rsx! {
                EmptyState {}
            },
            ViewState::Loading => rsx! {
                LoadingOverlay {}
            },
            ViewState::Error(message) => {
                let message = message.clone();
                rsx! {
                    ErrorBanner { message }
                }
            }
            ViewState::Results(result) => {
                let result = result.clone();
                rsx! {
                    ResultsSection { result }
                }
            }
        }
    };

    rsx! {
        section { class: "cm-view cm-view--search",
            SearchCard {
                search_query,
                on_search: handle_search,
                searching,
                compact,
            }

            {body}
        }
    }
}

/// Results body: query movie summary followed by the similar movies in
/// server-provided order.
#[component]
fn ResultsSection(result: api::AnalysisResult) -> Element {
    rsx! {
        section { class: "cm-results-section",
            QuerySummary { movie: result.query_movie.clone() }

            div { class: "cm-results-grid",
                for (idx, movie) in result.similar_movies.iter().enumerate() {
                    ResultCard {
                        key: "{movie.title}",
                        rank: idx,
                        movie: movie.clone(),
                    }
                }
            }
        }
    }
}
