//! Search-and-results view components.

mod empty_state;
mod error_banner;
mod loading_overlay;
mod medal_badge;
mod query_summary;
mod result_card;
mod search_card;
mod search_view;

pub use empty_state::EmptyState;
pub use error_banner::ErrorBanner;
pub use loading_overlay::LoadingOverlay;
pub use medal_badge::{MedalBadge, MedalTier};
pub use query_summary::QuerySummary;
pub use result_card::ResultCard;
pub use search_card::SearchCard;
pub use search_view::SearchView;
