//! Preview cards
//!
//! Card rendering is split into a pure view-model builder over the displayed
//! list and a thin component consuming it, so the presentation layer stays
//! decoupled from the store.

use dioxus::prelude::*;

use crate::app::AppState;
use crate::email::compose_email;
use crate::i18n::UiStrings;
use crate::markup::preview_text;
use crate::templates::Template;
use crate::ui::clipboard::copy_with_feedback;

/// View model for one preview card
#[derive(Debug, Clone, PartialEq)]
pub struct CardView {
    /// Position in the displayed list; carried by the activation event
    pub index: usize,
    pub subject: String,
    pub category: String,
    pub greeting: &'static str,
    pub closing: &'static str,
    /// Body cut to the preview length
    pub preview: String,
    /// Composed email over the full body for the copy action
    pub email: String,
}

/// Build the card view models for the displayed list
pub fn card_views(displayed: &[Template], strings: &UiStrings) -> Vec<CardView> {
    displayed
        .iter()
        .enumerate()
        .map(|(index, template)| CardView {
            index,
            subject: template.subject.clone(),
            category: template.category_name().to_string(),
            greeting: strings.greeting,
            closing: strings.closing,
            preview: preview_text(&template.body),
            email: compose_email(&template.subject, &template.body, strings),
        })
        .collect()
}

/// One template preview card
#[component]
pub fn TemplateCard(card: CardView) -> Element {
    let app_state = use_context::<AppState>();
    let copied = use_signal(|| false);

    let index = card.index;
    let email = card.email.clone();
    let store = app_state.store;
    let mut modal = app_state.modal;

    rsx! {
        div {
            class: "card",
            onclick: move |_| {
                let shown = store.read().shown();
                modal.write().open(index, shown);
            },

            div {
                class: "card-head",
                h3 { class: "card-subject", "{card.subject}" }
                span { class: "badge", "{card.category}" }
            }

            p { class: "card-greeting", "{card.greeting}" }
            p { class: "card-preview", "{card.preview}" }
            p { class: "card-closing", "{card.closing}" }

            div {
                class: "card-actions",
                button {
                    class: "copy-btn",
                    title: "Copy email to clipboard",
                    // Copying must not activate the card
                    onclick: move |evt| {
                        evt.stop_propagation();
                        copy_with_feedback(email.clone(), copied);
                    },
                    if copied() {
                        svg { width: "14", height: "14", view_box: "0 0 24 24", fill: "none", stroke: "currentColor", stroke_width: "2", stroke_linecap: "round", stroke_linejoin: "round", path { d: "M20 6L9 17l-5-5" } }
                    } else {
                        svg { width: "14", height: "14", view_box: "0 0 24 24", fill: "none", stroke: "currentColor", stroke_width: "2", rect { x: "9", y: "9", width: "13", height: "13", rx: "2" }, path { d: "M5 15H4a2 2 0 0 1-2-2V4a2 2 0 0 1 2-2h9a2 2 0 0 1 2 2v1" } }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Language;
    use crate::markup::PREVIEW_CHARS;

    #[test]
    fn test_card_views_long_body_preview() {
        let displayed = vec![Template {
            subject: "Intro".to_string(),
            body: "x".repeat(200),
            category: Some("Sales".to_string()),
        }];
        let cards = card_views(&displayed, Language::En.strings());
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].preview.chars().count(), PREVIEW_CHARS + 1);
        // The copy payload always carries the full body, not the preview
        assert!(cards[0].email.contains(&"x".repeat(200)));
    }

    #[test]
    fn test_card_views_index_and_default_category() {
        let displayed = vec![
            Template {
                subject: "A".to_string(),
                body: "a".to_string(),
                category: Some("Sales".to_string()),
            },
            Template {
                subject: "B".to_string(),
                body: "b".to_string(),
                category: None,
            },
        ];
        let cards = card_views(&displayed, Language::En.strings());
        assert_eq!(cards[0].index, 0);
        assert_eq!(cards[1].index, 1);
        assert_eq!(cards[1].category, "General");
    }

    #[test]
    fn test_card_views_localized_pair() {
        let displayed = vec![Template {
            subject: "A".to_string(),
            body: "a".to_string(),
            category: None,
        }];
        let cards = card_views(&displayed, Language::De.strings());
        assert_eq!(cards[0].greeting, "Hallo,");
        assert!(cards[0].email.contains("Mit freundlichen Grüßen,"));
    }
}
