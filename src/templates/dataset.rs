//! Source dataset loading
//!
//! The built-in template set is embedded at compile time. A user-supplied
//! `templates.json` in the platform data directory replaces it when present;
//! any failure to read or parse that file falls back to the built-in set.

use once_cell::sync::Lazy;
use std::path::{Path, PathBuf};

use super::{DatasetError, Template};

const BUILTIN_JSON: &str = include_str!("../../assets/templates.json");

static BUILTIN: Lazy<Vec<Template>> = Lazy::new(|| match serde_json::from_str(BUILTIN_JSON) {
    Ok(templates) => templates,
    Err(e) => {
        tracing::error!("Built-in template dataset is invalid: {e}");
        Vec::new()
    }
});

/// Location of the optional user dataset override
///
/// - Windows: `C:\Users\{user}\AppData\Roaming\MailDeck\MailDeck\templates.json`
/// - macOS: `/Users/{user}/Library/Application Support/com.MailDeck.MailDeck/templates.json`
/// - Linux: `/home/{user}/.local/share/maildeck/templates.json`
pub fn override_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("com", "MailDeck", "MailDeck")
        .map(|dirs| dirs.data_dir().join("templates.json"))
}

/// Load the source template set
pub fn load_templates() -> Vec<Template> {
    if let Some(path) = override_path() {
        if path.exists() {
            match load_from_file(&path) {
                Ok(templates) => {
                    tracing::info!(
                        "Loaded {} templates from {}",
                        templates.len(),
                        path.display()
                    );
                    return templates;
                }
                Err(e) => {
                    tracing::warn!(
                        "Failed to load {}, using built-in templates: {e}",
                        path.display()
                    );
                }
            }
        }
    }
    BUILTIN.clone()
}

/// Load a template set from a JSON file
pub fn load_from_file(path: &Path) -> Result<Vec<Template>, DatasetError> {
    let json = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&json)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_builtin_dataset_parses() {
        assert!(!BUILTIN.is_empty());
        for template in BUILTIN.iter() {
            assert!(!template.subject.is_empty());
            assert!(!template.body.is_empty());
        }
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"subject": "Ping", "body": "Pong", "category": "Sales"}}]"#
        )
        .unwrap();
        let templates = load_from_file(file.path()).unwrap();
        assert_eq!(templates.len(), 1);
        assert_eq!(templates[0].subject, "Ping");
        assert_eq!(templates[0].category.as_deref(), Some("Sales"));
    }

    #[test]
    fn test_load_from_file_rejects_invalid_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        assert!(matches!(
            load_from_file(file.path()),
            Err(DatasetError::JsonError(_))
        ));
    }

    #[test]
    fn test_load_from_missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("templates.json");
        assert!(matches!(
            load_from_file(&missing),
            Err(DatasetError::ReadError(_))
        ));
    }
}
