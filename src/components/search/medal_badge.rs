use dioxus::prelude::*;

/// Visual tier marker for the top three result positions.
///
/// Ranks are zero-based indices into the server-ordered result list;
/// positions 3 and beyond carry no medal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MedalTier {
    Gold,
    Silver,
    Bronze,
}

impl MedalTier {
    /// Medal for a zero-based rank, if the rank earns one.
    pub fn for_rank(rank: usize) -> Option<Self> {
        match rank {
            0 => Some(MedalTier::Gold),
            1 => Some(MedalTier::Silver),
            2 => Some(MedalTier::Bronze),
            _ => None,
        }
    }

    /// Fixed label shown next to the medal dot.
    pub fn label(self) -> &'static str {
        match self {
            MedalTier::Gold => "Perfect Match",
            MedalTier::Silver => "Excellent Match",
            MedalTier::Bronze => "Great Match",
        }
    }

    /// CSS modifier class selecting the tier's color treatment.
    pub fn css_class(self) -> &'static str {
        match self {
            MedalTier::Gold => "cm-medal--gold",
            MedalTier::Silver => "cm-medal--silver",
            MedalTier::Bronze => "cm-medal--bronze",
        }
    }
}

/// Medal badge rendered on the top three result cards
#[component]
pub fn MedalBadge(tier: MedalTier) -> Element {
    let badge_class = format!("cm-medal {}", tier.css_class());
    let label = tier.label();

    rsx! {
        div { class: "{badge_class}",
            span { class: "cm-medal-dot" }
            span { class: "cm-medal-label", "{label}" }
        }
    }
}
