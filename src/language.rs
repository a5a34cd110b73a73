//! Target languages offered by the translate action.

use serde::{Deserialize, Serialize};

/// ISO 639-1 languages the MyMemory API is asked to translate into.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Es,
    En,
    Fr,
    De,
    It,
    Pt,
    Ru,
    Zh,
    Ja,
    Ar,
    Ko,
    Nl,
    Sv,
    Pl,
    Tr,
    Hi,
    He,
    Vi,
}

impl Language {
    /// Display order of the language selector.
    pub const ALL: [Language; 18] = [
        Language::Es,
        Language::En,
        Language::Fr,
        Language::De,
        Language::It,
        Language::Pt,
        Language::Ru,
        Language::Zh,
        Language::Ja,
        Language::Ar,
        Language::Ko,
        Language::Nl,
        Language::Sv,
        Language::Pl,
        Language::Tr,
        Language::Hi,
        Language::He,
        Language::Vi,
    ];

    /// Catalog text is always authored in Spanish.
    pub const SOURCE: Language = Language::Es;

    pub fn code(self) -> &'static str {
        match self {
            Language::Es => "es",
            Language::En => "en",
            Language::Fr => "fr",
            Language::De => "de",
            Language::It => "it",
            Language::Pt => "pt",
            Language::Ru => "ru",
            Language::Zh => "zh",
            Language::Ja => "ja",
            Language::Ar => "ar",
            Language::Ko => "ko",
            Language::Nl => "nl",
            Language::Sv => "sv",
            Language::Pl => "pl",
            Language::Tr => "tr",
            Language::Hi => "hi",
            Language::He => "he",
            Language::Vi => "vi",
        }
    }

    /// Name of the language, in Spanish.
    pub fn label(self) -> &'static str {
        match self {
            Language::Es => "Español",
            Language::En => "Inglés",
            Language::Fr => "Francés",
            Language::De => "Alemán",
            Language::It => "Italiano",
            Language::Pt => "Portugués",
            Language::Ru => "Ruso",
            Language::Zh => "Chino",
            Language::Ja => "Japonés",
            Language::Ar => "Árabe",
            Language::Ko => "Coreano",
            Language::Nl => "Neerlandés",
            Language::Sv => "Sueco",
            Language::Pl => "Polaco",
            Language::Tr => "Turco",
            Language::Hi => "Hindi",
            Language::He => "Hebreo",
            Language::Vi => "Vietnamita",
        }
    }

    /// Parse a language code, ignoring case and surrounding whitespace.
    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim().to_ascii_lowercase();
        Self::ALL.into_iter().find(|lang| lang.code() == code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_codes_unique_and_roundtrip() {
        let mut seen = std::collections::HashSet::new();
        for lang in Language::ALL {
            assert!(seen.insert(lang.code()), "duplicate code {}", lang.code());
            assert_eq!(Language::from_code(lang.code()), Some(lang));
        }
        assert_eq!(seen.len(), 18);
    }

    #[test]
    fn test_from_code_is_lenient() {
        assert_eq!(Language::from_code(" EN "), Some(Language::En));
        assert_eq!(Language::from_code("xx"), None);
        assert_eq!(Language::from_code(""), None);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Language::Es.label(), "Español");
        assert_eq!(Language::Vi.label(), "Vietnamita");
    }

    #[test]
    fn test_serde_uses_code() {
        assert_eq!(serde_json::to_string(&Language::Zh).unwrap(), "\"zh\"");
        let lang: Language = serde_json::from_str("\"he\"").unwrap();
        assert_eq!(lang, Language::He);
    }
}
