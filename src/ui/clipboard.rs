//! Webview clipboard access
//!
//! The desktop renderer has no native clipboard handle of its own; writes go
//! through the webview's `navigator.clipboard` bridge. Failures are surfaced
//! to the user with a blocking notification, never swallowed.

use dioxus::prelude::*;
use std::time::Duration;
use thiserror::Error;

/// Clipboard-related errors
#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("Clipboard bridge failed: {0}")]
    Bridge(String),
    #[error("Clipboard write rejected: {0}")]
    Rejected(String),
}

/// Write plain text to the system clipboard
pub async fn copy_text(text: &str) -> Result<(), ClipboardError> {
    let payload = serde_json::to_string(text).map_err(|e| ClipboardError::Bridge(e.to_string()))?;
    let js = format!(
        "try {{ await navigator.clipboard.writeText({payload}); return true; }} catch (err) {{ return String(err); }}"
    );
    match document::eval(&js).await {
        Ok(value) if value == serde_json::Value::Bool(true) => Ok(()),
        Ok(value) => Err(ClipboardError::Rejected(
            value.as_str().unwrap_or("unknown error").to_string(),
        )),
        Err(e) => Err(ClipboardError::Bridge(format!("{e:?}"))),
    }
}

/// Blocking user-facing notification
pub async fn notify_blocking(message: &str) {
    let payload = serde_json::to_string(message).unwrap_or_else(|_| "\"error\"".to_string());
    if let Err(e) = document::eval(&format!("alert({payload});")).await {
        tracing::error!("Failed to show notification: {e:?}");
    }
}

/// Copy `text` and drive the triggering control's feedback signal: flash
/// `copied` for two seconds on success; on failure report the error with a
/// blocking notification and leave the control unchanged.
pub fn copy_with_feedback(text: String, mut copied: Signal<bool>) {
    spawn(async move {
        match copy_text(&text).await {
            Ok(()) => {
                copied.set(true);
                tokio::time::sleep(Duration::from_secs(2)).await;
                copied.set(false);
            }
            Err(e) => {
                tracing::error!("Clipboard write failed: {e}");
                notify_blocking(&format!("Could not copy to clipboard: {e}")).await;
            }
        }
    });
}
