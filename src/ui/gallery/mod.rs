//! Template gallery
//!
//! Toolbar (category, search, language, live count), the scrollable card
//! list, and the localized loading and empty states.

pub mod card;

use dioxus::prelude::*;

use crate::app::{apply_filter, AppState};
use crate::i18n::Language;
use crate::ui::components::loading::Spinner;
use card::{card_views, TemplateCard};

#[component]
pub fn Gallery() -> Element {
    let app_state = use_context::<AppState>();

    let language = *app_state.language.read();
    let strings = language.strings();
    let selected_category = app_state.category.read().clone();
    let query = app_state.query.read().clone();
    let is_loading = *app_state.is_loading.read();

    let store = app_state.store.read();
    let categories = store.categories();
    let shown = store.shown();
    let total = store.total();
    let cards = card_views(store.displayed(), strings);
    drop(store);

    let handle_category = {
        let state = app_state.clone();
        move |evt: Event<FormData>| {
            let mut category = state.category;
            category.set(evt.value());
            apply_filter(&state);
        }
    };

    let handle_search = {
        let state = app_state.clone();
        move |evt: Event<FormData>| {
            let mut search = state.query;
            search.set(evt.value());
            apply_filter(&state);
        }
    };

    let handle_language = {
        let state = app_state.clone();
        // Reload is driven by the language effect in `app`
        move |evt: Event<FormData>| {
            let mut language = state.language;
            language.set(Language::from_code(&evt.value()));
        }
    };

    rsx! {
        div {
            class: "gallery",

            div {
                class: "toolbar",
                select {
                    class: "select",
                    onchange: handle_category,
                    for category in categories {
                        option {
                            value: "{category}",
                            selected: category == selected_category,
                            "{category}"
                        }
                    }
                }
                input {
                    class: "search",
                    placeholder: "Search templates...",
                    value: "{query}",
                    oninput: handle_search,
                }
                select {
                    class: "select",
                    onchange: handle_language,
                    for lang in Language::ALL {
                        option {
                            value: "{lang.code()}",
                            selected: lang == language,
                            "{lang.label()}"
                        }
                    }
                }
                span { class: "count", "{shown} / {total}" }
            }

            if is_loading {
                div {
                    class: "state-row",
                    Spinner { size: 28 }
                    span { "{strings.loading}" }
                }
            } else if cards.is_empty() {
                div {
                    class: "state-row",
                    "{strings.no_results}"
                }
            } else {
                div {
                    class: "card-list",
                    for card in cards {
                        TemplateCard { key: "{card.index}", card: card.clone() }
                    }
                }
            }
        }
    }
}
