use dioxus::prelude::*;

/// Search card with title input and submit button.
///
/// While a request is outstanding both controls are disabled; that is the
/// only guard against overlapping submissions (the in-flight call is never
/// cancelled). An empty or whitespace-only title disables the button, so
/// submission of a blank query is a no-op.
#[component]
pub fn SearchCard(
    search_query: Signal<String>,
    on_search: EventHandler<String>,
    searching: bool,
    compact: bool,
) -> Element {
    let query_empty = search_query.read().trim().is_empty();

    let row_class = if compact {
        "cm-search-input-row cm-search-input-row--stacked"
    } else {
        "cm-search-input-row"
    };

    let handle_keypress = move |evt: KeyboardEvent| {
        if evt.key() == Key::Enter {
            let query = search_query.read().clone();
            if !query.trim().is_empty() {
                on_search.call(query);
            }
        }
    };

    rsx! {
        section { class: "cm-search-card",
            div { class: row_class,
                input {
                    class: "cm-search-input",
                    r#type: "text",
                    placeholder: "Enter a movie title to find similar films...",
                    value: "{search_query}",
                    disabled: searching,
                    oninput: move |evt| search_query.set(evt.value()),
                    onkeypress: handle_keypress,
                }
                button {
                    class: "cm-btn cm-btn--primary",
                    disabled: searching || query_empty,
                    onclick: move |_| {
                        let query = search_query.read().clone();
                        if !query.trim().is_empty() {
                            on_search.call(query);
                        }
                    },
                    if searching {
                        "Searching…"
                    } else {
                        "Discover Movies"
                    }
                }
            }
        }
    }
}
