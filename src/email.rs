//! Clipboard email composition
//!
//! Builds the plain-text email written to the clipboard from a template and
//! the localized greeting/closing pair. Cards and the modal share this layout;
//! both always compose over the full body, never the preview.

use crate::i18n::UiStrings;

/// Compose the fixed-format plain-text email for a template
pub fn compose_email(subject: &str, body: &str, strings: &UiStrings) -> String {
    format!(
        "Subject: {subject}\n\n{greeting}\n\n{body}\n\n{closing}\n[Your Name]",
        greeting = strings.greeting,
        closing = strings.closing,
    )
}
