//! UI components for MailDeck
//!
//! This module contains all user interface components built with Dioxus.

pub mod clipboard;
pub mod components;
pub mod gallery;
pub mod modal;

use crate::ui::gallery::Gallery;
use crate::ui::modal::TemplateModal;
use dioxus::prelude::*;

#[derive(Clone, Copy, PartialEq)]
enum Theme {
    Light,
    Dark,
}

impl Theme {
    fn toggle(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

/// Main Application Layout
#[component]
pub fn Layout() -> Element {
    let mut theme = use_signal(|| Theme::Dark);

    rsx! {
        div {
            "data-theme": "{theme().as_str()}",
            class: "app-shell",

            link { rel: "stylesheet", href: "assets/styles.css" }

            header {
                class: "app-header",
                h1 { class: "app-title", "MailDeck" }
                button {
                    onclick: move |_| theme.set(theme().toggle()),
                    class: "icon-btn",
                    title: "Toggle Theme",

                    if theme() == Theme::Dark {
                        // Sun icon
                        svg { width: "18", height: "18", view_box: "0 0 24 24", fill: "none", stroke: "currentColor", stroke_width: "2", stroke_linecap: "round", stroke_linejoin: "round", circle { cx: "12", cy: "12", r: "5" }, path { d: "M12 1v2M12 21v2M4.22 4.22l1.42 1.42M18.36 18.36l1.42 1.42M1 12h2M21 12h2M4.22 19.78l1.42-1.42M18.36 5.64l1.42-1.42" } }
                    } else {
                        // Moon icon
                        svg { width: "18", height: "18", view_box: "0 0 24 24", fill: "none", stroke: "currentColor", stroke_width: "2", stroke_linecap: "round", stroke_linejoin: "round", path { d: "M21 12.79A9 9 0 1 1 11.21 3 7 7 0 0 0 21 12.79z" } }
                    }
                }
            }

            main {
                class: "app-main",
                Gallery {}
            }

            TemplateModal {}
        }
    }
}
