//! Template data
//!
//! This module holds the template record type, the source dataset, and the
//! store that derives the translated and displayed views.

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod dataset;
pub mod store;

pub use store::TemplateStore;

/// Synthetic category that matches every template, always listed first
pub const ALL_CATEGORY: &str = "All";

/// Category shown for templates that do not declare one
pub const DEFAULT_CATEGORY: &str = "General";

/// Dataset-related errors
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("Failed to read dataset file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Failed to parse dataset JSON: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// One reusable email template
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    /// Email subject line
    pub subject: String,
    /// Full email body
    pub body: String,
    /// Optional category; templates without one are shown as "General"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl Template {
    /// The category this template is filed under
    pub fn category_name(&self) -> &str {
        self.category.as_deref().unwrap_or(DEFAULT_CATEGORY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_name_defaults_to_general() {
        let template = Template {
            subject: "S".to_string(),
            body: "B".to_string(),
            category: None,
        };
        assert_eq!(template.category_name(), DEFAULT_CATEGORY);
    }

    #[test]
    fn test_template_deserializes_without_category() {
        let template: Template =
            serde_json::from_str(r#"{"subject": "Hi", "body": "There"}"#).unwrap();
        assert_eq!(template.subject, "Hi");
        assert!(template.category.is_none());
    }
}
