use dioxus::prelude::*;

use crate::api::QueryMovie;
use crate::utils::formatting::format_rating;

/// Summary card for the movie the user searched for, as echoed back and
/// enriched by the analysis service.
#[component]
pub fn QuerySummary(movie: QueryMovie) -> Element {
    let rating = format_rating(movie.rating);

    rsx! {
        section { class: "cm-query-summary",
            h2 { class: "cm-query-title", "Analyzing: {movie.title}" }
            div { class: "cm-query-meta",
                span { "{movie.release_date}" }
                span { class: "cm-meta-dot", "•" }
                span { "{movie.runtime}" }
                span { class: "cm-meta-dot", "•" }
                span { "Rating: {rating}" }
            }
            if !movie.overview.is_empty() {
                p { class: "cm-query-overview", "{movie.overview}" }
            }
        }
    }
}
