//! Remote translation
//!
//! The translation service is an opaque async function behind the
//! [`Translate`] trait: text in, translated text out, degrading to the
//! original text on any failure. Batch fan-out across the template set lives
//! here; the wire client lives in [`libre`].

use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

use crate::templates::Template;

pub mod libre;

pub use libre::{LibreTranslateClient, LibreTranslateConfig};

/// Translation-related errors
#[derive(Debug, Error)]
pub enum TranslateError {
    #[error("Translation request failed: {0}")]
    RequestError(#[from] reqwest::Error),
    #[error("Translation endpoint returned status {0}")]
    EndpointError(reqwest::StatusCode),
    #[error("Translation response had no translated text")]
    MissingTranslation,
}

/// A remote text translation service.
///
/// `translate` never fails: empty input returns empty without a network
/// call, and any request failure returns the original text unchanged after
/// logging. Errors are diagnostics, not UI state.
#[async_trait]
pub trait Translate: Send + Sync {
    async fn translate(&self, text: &str, target: &str) -> String;
}

/// Translate every template's subject and body into `target`.
///
/// One task per template, all issued concurrently; within a task the
/// subject/body pair is awaited together so a template's translated record is
/// only assembled once both fields settled. Order and cardinality of the
/// input are preserved. If any task fails to join, the whole batch falls back
/// to the untranslated input set.
pub async fn translate_all(
    client: Arc<dyn Translate>,
    templates: &[Template],
    target: &str,
) -> Vec<Template> {
    let mut tasks = Vec::with_capacity(templates.len());
    for template in templates {
        let client = Arc::clone(&client);
        let template = template.clone();
        let target = target.to_string();
        tasks.push(tokio::spawn(async move {
            let (subject, body) = tokio::join!(
                client.translate(&template.subject, &target),
                client.translate(&template.body, &target),
            );
            Template {
                subject,
                body,
                category: template.category,
            }
        }));
    }

    let mut translated = Vec::with_capacity(tasks.len());
    for task in tasks {
        match task.await {
            Ok(template) => translated.push(template),
            Err(e) => {
                tracing::error!("Translation batch failed, using untranslated templates: {e}");
                return templates.to_vec();
            }
        }
    }
    translated
}
