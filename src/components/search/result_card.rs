use dioxus::prelude::*;

use crate::api::SimilarMovie;
use crate::utils::formatting::format_similarity;

use super::medal_badge::{MedalBadge, MedalTier};

/// One ranked similar-movie card.
///
/// `rank` is the zero-based position in the server-ordered list; the first
/// three positions additionally carry a medal badge. The card shows the match
/// percentage, the service's justification sentence, the genres shared with
/// the query movie, and the movie's full genre list.
#[component]
pub fn ResultCard(rank: usize, movie: SimilarMovie) -> Element {
    let similarity = format_similarity(movie.similarity);
    let all_genres: Vec<String> = movie.genre_list().iter().map(|g| g.to_string()).collect();

    let badge = MedalTier::for_rank(rank).map(|tier| {
        rsx! {
            MedalBadge { tier }
        }
    });

    rsx! {
        article { class: "cm-result-card",
            header { class: "cm-result-header",
                div { class: "cm-result-main",
                    h3 { class: "cm-result-title", "{movie.title}" }
                    {badge}
                }
                div { class: "cm-result-score", "{similarity}" }
            }

            div { class: "cm-result-justification",
                p { "{movie.justification}" }
            }

            GenreChips {
                heading: "Shared Genres",
                genres: movie.shared_genres.clone(),
                accent: false,
            }

            GenreChips {
                heading: "All Genres",
                genres: all_genres,
                accent: true,
            }
        }
    }
}

/// Labelled row of genre chips within a result card.
#[component]
fn GenreChips(heading: &'static str, genres: Vec<String>, accent: bool) -> Element {
    let chip_class = if accent {
        "cm-genre-chip cm-genre-chip--accent"
    } else {
        "cm-genre-chip"
    };

    rsx! {
        div { class: "cm-result-genres",
            h4 { class: "cm-genres-heading", "{heading}" }
            div { class: "cm-genre-chip-row",
                for genre in genres.iter() {
                    span { key: "{genre}", class: "{chip_class}", "{genre}" }
                }
            }
        }
    }
}
