//! Template detail modal
//!
//! A small state machine showing one template at a time, with prev/next
//! navigation, keyboard shortcuts, and a copy action over the full body.
//! The machine persists for the component lifetime and is reusable across
//! repeated opens.

use dioxus::prelude::*;

use crate::app::AppState;
use crate::email::compose_email;
use crate::markup::body_html;
use crate::ui::clipboard::copy_with_feedback;

/// Modal navigation state
///
/// `Open(index)` holds a position into the currently displayed list; it is a
/// back-reference, not ownership, and must be revalidated whenever that list
/// is rebuilt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalState {
    #[default]
    Closed,
    Open(usize),
}

impl ModalState {
    /// The displayed-list index when open
    pub fn index(&self) -> Option<usize> {
        match self {
            ModalState::Closed => None,
            ModalState::Open(index) => Some(*index),
        }
    }

    /// Open at `index` into a list of `len` items; out-of-range is a no-op
    pub fn open(&mut self, index: usize, len: usize) {
        if index < len {
            *self = ModalState::Open(index);
        }
    }

    /// Advance to the next item; a no-op at the end of the list
    pub fn next(&mut self, len: usize) {
        if let ModalState::Open(index) = *self {
            if index + 1 < len {
                *self = ModalState::Open(index + 1);
            }
        }
    }

    /// Step back to the previous item; a no-op at index 0
    pub fn prev(&mut self) {
        if let ModalState::Open(index) = *self {
            if index > 0 {
                *self = ModalState::Open(index - 1);
            }
        }
    }

    pub fn close(&mut self) {
        *self = ModalState::Closed;
    }

    /// Keep the index valid after the displayed list was rebuilt: clamp to
    /// the last item while the list is non-empty, close when it is empty.
    pub fn revalidate(&mut self, len: usize) {
        if let ModalState::Open(index) = *self {
            if len == 0 {
                *self = ModalState::Closed;
            } else if index >= len {
                *self = ModalState::Open(len - 1);
            }
        }
    }
}

/// Full-detail template overlay
#[component]
pub fn TemplateModal() -> Element {
    let app_state = use_context::<AppState>();
    let copied = use_signal(|| false);

    let modal = *app_state.modal.read();
    let Some(index) = modal.index() else {
        return rsx! { div {} };
    };

    let language = *app_state.language.read();
    let strings = language.strings();

    let store = app_state.store.read();
    let shown = store.shown();
    let Some(template) = store.displayed().get(index).cloned() else {
        return rsx! { div {} };
    };
    drop(store);

    let category = template.category_name().to_string();
    let body_markup = body_html(&template.body);
    let email = compose_email(&template.subject, &template.body, strings);
    let has_prev = index > 0;
    let has_next = index + 1 < shown;

    let mut modal_signal = app_state.modal;
    let handle_keydown = move |evt: KeyboardEvent| match evt.key() {
        Key::Escape => modal_signal.write().close(),
        Key::ArrowRight => modal_signal.write().next(shown),
        Key::ArrowLeft => modal_signal.write().prev(),
        _ => {}
    };

    rsx! {
        // Backdrop: clicking outside the dialog closes; key bindings are
        // only live while the modal is mounted.
        div {
            class: "modal-backdrop",
            tabindex: "0",
            autofocus: true,
            onkeydown: handle_keydown,
            onclick: move |_| modal_signal.write().close(),

            div {
                class: "modal",
                onclick: move |evt| evt.stop_propagation(),

                div {
                    class: "modal-header",
                    div {
                        span { class: "badge", "{category}" }
                        h2 { class: "modal-subject", "{template.subject}" }
                    }
                    button {
                        class: "icon-btn",
                        title: "Close (Esc)",
                        onclick: move |_| modal_signal.write().close(),
                        svg { width: "18", height: "18", view_box: "0 0 24 24", fill: "none", stroke: "currentColor", stroke_width: "2", stroke_linecap: "round", path { d: "M18 6L6 18M6 6l12 12" } }
                    }
                }

                div {
                    class: "modal-body",
                    p { class: "greeting", "{strings.greeting}" }
                    div {
                        class: "body-text",
                        dangerous_inner_html: "{body_markup}",
                    }
                    p { class: "closing", "{strings.closing}" }
                    p { class: "signature", "[Your Name]" }
                }

                div {
                    class: "modal-footer",
                    button {
                        class: "nav-btn",
                        disabled: !has_prev,
                        title: "Previous template (←)",
                        onclick: move |_| modal_signal.write().prev(),
                        "← Prev"
                    }
                    CopyButton { email: email, copied: copied }
                    button {
                        class: "nav-btn",
                        disabled: !has_next,
                        title: "Next template (→)",
                        onclick: move |_| modal_signal.write().next(shown),
                        "Next →"
                    }
                }
            }
        }
    }
}

/// Copy control shared by the modal footer; shows a transient check mark
/// after a successful write and reverts after two seconds.
#[component]
fn CopyButton(email: String, copied: Signal<bool>) -> Element {
    rsx! {
        button {
            class: "copy-btn",
            title: "Copy email to clipboard",
            onclick: move |_| copy_with_feedback(email.clone(), copied),
            if copied() {
                svg { width: "16", height: "16", view_box: "0 0 24 24", fill: "none", stroke: "currentColor", stroke_width: "2", stroke_linecap: "round", stroke_linejoin: "round", path { d: "M20 6L9 17l-5-5" } }
                span { "Copied" }
            } else {
                svg { width: "16", height: "16", view_box: "0 0 24 24", fill: "none", stroke: "currentColor", stroke_width: "2", rect { x: "9", y: "9", width: "13", height: "13", rx: "2" }, path { d: "M5 15H4a2 2 0 0 1-2-2V4a2 2 0 0 1 2-2h9a2 2 0 0 1 2 2v1" } }
                span { "Copy" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_requires_valid_index() {
        let mut state = ModalState::Closed;
        state.open(3, 3);
        assert_eq!(state, ModalState::Closed);
        state.open(2, 3);
        assert_eq!(state, ModalState::Open(2));
    }

    #[test]
    fn test_next_stops_at_last_index() {
        let mut state = ModalState::Open(1);
        state.next(3);
        assert_eq!(state, ModalState::Open(2));
        state.next(3);
        assert_eq!(state, ModalState::Open(2));
    }

    #[test]
    fn test_prev_stops_at_zero() {
        let mut state = ModalState::Open(1);
        state.prev();
        assert_eq!(state, ModalState::Open(0));
        state.prev();
        assert_eq!(state, ModalState::Open(0));
    }

    #[test]
    fn test_navigation_ignored_while_closed() {
        let mut state = ModalState::Closed;
        state.next(5);
        state.prev();
        assert_eq!(state, ModalState::Closed);
    }

    #[test]
    fn test_close_and_reopen() {
        let mut state = ModalState::Open(2);
        state.close();
        assert_eq!(state, ModalState::Closed);
        state.open(0, 1);
        assert_eq!(state, ModalState::Open(0));
    }

    #[test]
    fn test_revalidate_clamps_to_last_item() {
        let mut state = ModalState::Open(5);
        state.revalidate(3);
        assert_eq!(state, ModalState::Open(2));
    }

    #[test]
    fn test_revalidate_keeps_valid_index() {
        let mut state = ModalState::Open(1);
        state.revalidate(3);
        assert_eq!(state, ModalState::Open(1));
    }

    #[test]
    fn test_revalidate_closes_on_empty_list() {
        let mut state = ModalState::Open(0);
        state.revalidate(0);
        assert_eq!(state, ModalState::Closed);
    }
}
