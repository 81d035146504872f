//! Localization module for IslamWeb-RS
//!
//! Holds the fixed registry of supported UI locales, their Quran
//! translation-edition mapping, RTL detection, and the UI string resolver.

mod translations;

pub use translations::{Translations, UI_KEYS};

use serde::Serialize;

/// Supported locales: code, English name, native name, flag, Quran edition.
///
/// The set is fixed at build time; the edition identifiers are the
/// alquran.cloud text editions served for each language.
pub const SUPPORTED_LOCALES: &[(&str, &str, &str, &str, &str)] = &[
    ("ar", "Arabic", "العربية", "\u{1F1F8}\u{1F1E6}", "quran-uthmani"),
    ("en", "English", "English", "\u{1F1FA}\u{1F1F8}", "en.sahih"),
    ("fr", "French", "Français", "\u{1F1EB}\u{1F1F7}", "fr.hamidullah"),
    ("es", "Spanish", "Español", "\u{1F1EA}\u{1F1F8}", "es.cortes"),
    ("hi", "Hindi", "हिन्दी", "\u{1F1EE}\u{1F1F3}", "hi.hindi"),
    ("zh", "Chinese", "中文", "\u{1F1E8}\u{1F1F3}", "zh.chinese"),
    ("ru", "Russian", "Русский", "\u{1F1F7}\u{1F1FA}", "ru.kuliev"),
    ("bn", "Bengali", "বাংলা", "\u{1F1E7}\u{1F1E9}", "bn.bengali"),
    ("pt", "Portuguese", "Português", "\u{1F1F5}\u{1F1F9}", "pt.elhayek"),
    ("ur", "Urdu", "اردو", "\u{1F1F5}\u{1F1F0}", "ur.jalandhry"),
];

/// Right-to-left locales
pub const RTL_LOCALES: &[&str] = &["ar", "ur"];

/// Default UI locale (the resolver's fallback table)
pub const DEFAULT_LOCALE: &str = "fr";

/// Translation edition used when a locale has no mapping of its own
pub const DEFAULT_TRANSLATION_EDITION: &str = "en.sahih";

/// Edition identifier for the canonical Arabic text
pub const ARABIC_EDITION: &str = "quran-uthmani";

/// Name under which the chosen locale is persisted client-side (cookie)
pub const LOCALE_COOKIE: &str = "islamweb-language";

/// Text direction for a locale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextDirection {
    Ltr,
    Rtl,
}

impl TextDirection {
    /// The value for an HTML `dir` attribute
    pub fn as_str(&self) -> &'static str {
        match self {
            TextDirection::Ltr => "ltr",
            TextDirection::Rtl => "rtl",
        }
    }
}

/// Locale display metadata and edition mapping
#[derive(Debug, Clone, Serialize)]
pub struct Locale {
    pub code: String,
    pub name: String,
    pub native_name: String,
    pub flag: String,
    pub quran_edition: String,
    pub direction: TextDirection,
}

impl Locale {
    fn from_entry(entry: &(&str, &str, &str, &str, &str)) -> Self {
        let (code, name, native_name, flag, edition) = *entry;
        Self {
            code: code.to_string(),
            name: name.to_string(),
            native_name: native_name.to_string(),
            flag: flag.to_string(),
            quran_edition: edition.to_string(),
            direction: if RTL_LOCALES.contains(&code) {
                TextDirection::Rtl
            } else {
                TextDirection::Ltr
            },
        }
    }
}

/// Get locale metadata from a language code (region subtags stripped)
pub fn get_locale(code: &str) -> Option<Locale> {
    let base_code = code.split('-').next().unwrap_or(code);

    SUPPORTED_LOCALES
        .iter()
        .find(|(c, ..)| *c == base_code)
        .map(Locale::from_entry)
}

/// All supported locales in display order
pub fn list_locales() -> Vec<Locale> {
    SUPPORTED_LOCALES.iter().map(Locale::from_entry).collect()
}

/// Check if a language is right-to-left
pub fn is_rtl(lang: &str) -> bool {
    let base = lang.split('-').next().unwrap_or(lang);
    RTL_LOCALES.contains(&base)
}

/// Quran translation edition for a locale, `en.sahih` when unsupported
pub fn translation_edition(lang: &str) -> &'static str {
    let base = lang.split('-').next().unwrap_or(lang);
    SUPPORTED_LOCALES
        .iter()
        .find(|(c, ..)| *c == base)
        .map(|(_, _, _, _, edition)| *edition)
        .unwrap_or(DEFAULT_TRANSLATION_EDITION)
}

/// Parse Accept-Language header and return best matching locale
pub fn parse_accept_language(header: &str) -> Option<String> {
    // Parse header like "fr-FR,fr;q=0.9,en;q=0.8"
    let mut locales: Vec<(String, f32)> = header
        .split(',')
        .filter_map(|part| {
            let mut parts = part.trim().split(';');
            let lang = parts.next()?.trim().to_string();

            let quality = parts
                .next()
                .and_then(|q| {
                    q.trim()
                        .strip_prefix("q=")
                        .and_then(|v| v.parse().ok())
                })
                .unwrap_or(1.0);

            Some((lang, quality))
        })
        .collect();

    // Sort by quality descending
    locales.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap());

    // Find first supported locale
    for (lang, _) in locales {
        let base = lang.split('-').next().unwrap_or(&lang);
        if SUPPORTED_LOCALES.iter().any(|(c, ..)| *c == base) {
            return Some(base.to_string());
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_is_complete() {
        let locales = list_locales();
        assert_eq!(locales.len(), 10);
        for code in ["ar", "en", "fr", "es", "hi", "zh", "ru", "bn", "pt", "ur"] {
            assert!(get_locale(code).is_some(), "missing locale {}", code);
        }
    }

    #[test]
    fn test_rtl() {
        assert!(is_rtl("ar"));
        assert!(is_rtl("ur"));
        assert!(is_rtl("ar-SA"));
        for code in ["en", "fr", "es", "hi", "zh", "ru", "bn", "pt"] {
            assert!(!is_rtl(code), "{} should be LTR", code);
        }
    }

    #[test]
    fn test_translation_editions() {
        assert_eq!(translation_edition("fr"), "fr.hamidullah");
        assert_eq!(translation_edition("ar"), "quran-uthmani");
        assert_eq!(translation_edition("fr-CA"), "fr.hamidullah");
        // Unsupported locales fall back to the English edition
        assert_eq!(translation_edition("de"), "en.sahih");
    }

    #[test]
    fn test_parse_accept_language() {
        let result = parse_accept_language("fr-FR,fr;q=0.9,en;q=0.8");
        assert_eq!(result, Some("fr".to_string()));

        let result = parse_accept_language("ur-PK,ur;q=0.9");
        assert_eq!(result, Some("ur".to_string()));

        // Unsupported languages skip to the next candidate
        let result = parse_accept_language("de-DE,de;q=0.9,ru;q=0.5");
        assert_eq!(result, Some("ru".to_string()));

        assert_eq!(parse_accept_language("de,ja;q=0.4"), None);
    }

    #[test]
    fn test_direction_attribute() {
        assert_eq!(get_locale("ar").unwrap().direction.as_str(), "rtl");
        assert_eq!(get_locale("pt").unwrap().direction.as_str(), "ltr");
    }
}
