//! Root Dioxus application component
//!
//! Holds the shared application state and the reload orchestration that
//! translates the template set and rebuilds the derived views.

use dioxus::prelude::*;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::i18n::Language;
use crate::templates::{dataset, TemplateStore, ALL_CATEGORY};
use crate::translate::{translate_all, LibreTranslateClient, Translate};
use crate::ui::modal::ModalState;
use crate::ui::Layout;

/// Global application state shared across components
#[derive(Clone)]
pub struct AppState {
    pub store: Signal<TemplateStore>,
    pub category: Signal<String>,
    pub query: Signal<String>,
    pub language: Signal<Language>,
    pub modal: Signal<ModalState>,
    pub is_loading: Signal<bool>,
    pub translator: Arc<dyn Translate>,
    reload_generation: Arc<AtomicU64>,
}

impl AppState {
    pub fn new(translator: Arc<dyn Translate>) -> Self {
        tracing::info!("AppState initialized");
        Self {
            store: Signal::new(TemplateStore::new(dataset::load_templates())),
            category: Signal::new(ALL_CATEGORY.to_string()),
            query: Signal::new(String::new()),
            language: Signal::new(Language::default()),
            modal: Signal::new(ModalState::Closed),
            is_loading: Signal::new(false),
            translator,
            reload_generation: Arc::new(AtomicU64::new(0)),
        }
    }
}

/// Re-translate the whole template set and rebuild derived state.
///
/// Overlapping reloads are resolved by generation: each call claims the next
/// generation, and a batch that finishes after a newer reload has started is
/// discarded instead of overwriting newer state.
pub fn reload(state: &AppState, language: Language) {
    let generation = state.reload_generation.fetch_add(1, Ordering::SeqCst) + 1;
    tracing::info!(
        "Reloading templates in '{}' (generation {generation})",
        language.code()
    );

    let state = state.clone();
    let mut is_loading = state.is_loading;
    is_loading.set(true);

    spawn(async move {
        let source = state.store.read().source().to_vec();
        let translated =
            translate_all(Arc::clone(&state.translator), &source, language.code()).await;

        if state.reload_generation.load(Ordering::SeqCst) != generation {
            tracing::debug!("Discarding stale translation batch (generation {generation})");
            return;
        }

        let mut store = state.store;
        store.write().set_translated(translated);
        apply_filter(&state);
        is_loading.set(false);
    });
}

/// Rebuild the displayed list for the current category/query and keep the
/// modal index valid against the new list.
pub fn apply_filter(state: &AppState) {
    let category = state.category.read().clone();
    let query = state.query.read().clone();
    let mut store = state.store;
    let shown = {
        let mut store = store.write();
        store.filter(&category, &query);
        store.shown()
    };
    let mut modal = state.modal;
    modal.write().revalidate(shown);
}

#[component]
pub fn App() -> Element {
    let app_state = AppState::new(Arc::new(LibreTranslateClient::default()));
    use_context_provider(|| app_state.clone());

    // Runs once at startup with the default language and again whenever the
    // language selection changes; each run re-translates the full set.
    use_effect(move || {
        let language = *app_state.language.read();
        reload(&app_state, language);
    });

    rsx! {
        Layout {}
    }
}
