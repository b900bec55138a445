//! UI language table
//!
//! Fixed localized strings for the gallery chrome and the composed email.
//! Template subjects and bodies are translated remotely; these are not.

/// Localized fixed strings for one UI language
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiStrings {
    /// Salutation line placed above the template body
    pub greeting: &'static str,
    /// Sign-off line placed below the template body
    pub closing: &'static str,
    /// Message shown when no template matches the active filter
    pub no_results: &'static str,
    /// Message shown while a translation batch is in flight
    pub loading: &'static str,
}

const EN: UiStrings = UiStrings {
    greeting: "Hello,",
    closing: "Best regards,",
    no_results: "No templates match your filter.",
    loading: "Translating templates…",
};

const DE: UiStrings = UiStrings {
    greeting: "Hallo,",
    closing: "Mit freundlichen Grüßen,",
    no_results: "Keine Vorlagen gefunden.",
    loading: "Vorlagen werden übersetzt…",
};

/// Supported UI languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    En,
    De,
}

impl Language {
    /// All languages, in selector order
    pub const ALL: [Language; 2] = [Language::En, Language::De];

    /// Two-letter code sent to the translation endpoint
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::De => "de",
        }
    }

    /// Human-readable selector label
    pub fn label(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::De => "Deutsch",
        }
    }

    /// Parse a language code, falling back to English for unknown codes
    pub fn from_code(code: &str) -> Self {
        match code {
            "de" => Language::De,
            "en" => Language::En,
            other => {
                tracing::debug!("Unknown language code '{other}', falling back to en");
                Language::En
            }
        }
    }

    /// The fixed UI strings for this language
    pub fn strings(&self) -> &'static UiStrings {
        match self {
            Language::En => &EN,
            Language::De => &DE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code_roundtrip() {
        for lang in Language::ALL {
            assert_eq!(Language::from_code(lang.code()), lang);
        }
    }

    #[test]
    fn test_from_code_falls_back_to_english() {
        assert_eq!(Language::from_code("fr"), Language::En);
        assert_eq!(Language::from_code(""), Language::En);
    }

    #[test]
    fn test_strings_differ_per_language() {
        assert_ne!(Language::En.strings().greeting, Language::De.strings().greeting);
        assert_ne!(Language::En.strings().closing, Language::De.strings().closing);
    }
}
