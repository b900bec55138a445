//! Template store
//!
//! Owns the immutable source set, the translated set, and the displayed
//! (filtered) view. The displayed list is always rebuilt from the translated
//! set, never mutated in place; source and translated sets are never touched
//! by filtering.

use super::{Template, ALL_CATEGORY};

/// Application-owned template state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TemplateStore {
    source: Vec<Template>,
    translated: Vec<Template>,
    displayed: Vec<Template>,
}

impl TemplateStore {
    /// Create a store over a source dataset; translated and displayed start
    /// as the untranslated set.
    pub fn new(source: Vec<Template>) -> Self {
        let translated = source.clone();
        let displayed = translated.clone();
        Self {
            source,
            translated,
            displayed,
        }
    }

    /// The immutable source dataset
    pub fn source(&self) -> &[Template] {
        &self.source
    }

    /// The translated set for the current language
    pub fn translated(&self) -> &[Template] {
        &self.translated
    }

    /// The filtered view currently shown
    pub fn displayed(&self) -> &[Template] {
        &self.displayed
    }

    /// Number of templates currently shown
    pub fn shown(&self) -> usize {
        self.displayed.len()
    }

    /// Total number of templates
    pub fn total(&self) -> usize {
        self.translated.len()
    }

    /// Replace the translated set. Callers re-run `filter` afterwards to
    /// rebuild the displayed view.
    pub fn set_translated(&mut self, translated: Vec<Template>) {
        self.translated = translated;
    }

    /// Distinct categories in first-occurrence order, "All" first
    pub fn categories(&self) -> Vec<String> {
        let mut categories = vec![ALL_CATEGORY.to_string()];
        for template in &self.translated {
            let name = template.category_name();
            if !categories.iter().any(|c| c == name) {
                categories.push(name.to_string());
            }
        }
        categories
    }

    /// Rebuild the displayed list from the translated set.
    ///
    /// A template is shown when its category matches the selection ("All"
    /// matches everything) and, for a non-empty query, the case-insensitive
    /// concatenation of subject, body, and category contains the query.
    pub fn filter(&mut self, category: &str, query: &str) {
        let query = query.to_lowercase();
        self.displayed = self
            .translated
            .iter()
            .filter(|template| {
                if category != ALL_CATEGORY && template.category_name() != category {
                    return false;
                }
                if query.is_empty() {
                    return true;
                }
                let haystack = format!(
                    "{} {} {}",
                    template.subject,
                    template.body,
                    template.category_name()
                )
                .to_lowercase();
                haystack.contains(&query)
            })
            .cloned()
            .collect();
    }
}
