//! Quran content module
//!
//! Data model for surahs, ayahs and search matches, mirroring the shapes
//! served by the alquran.cloud REST API, plus the content service that
//! fetches and caches them.

mod service;

pub use service::QuranService;

use serde::{Deserialize, Deserializer, Serialize};

/// A chapter of the Quran (114 total)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Surah {
    /// 1..=114, unique
    pub number: u32,
    /// Arabic name
    pub name: String,
    pub english_name: String,
    pub english_name_translation: String,
    pub number_of_ayahs: u32,
    /// "Meccan" or "Medinan"
    pub revelation_type: String,
    /// Empty in listings; populated when a single surah is fetched
    #[serde(default)]
    pub ayahs: Vec<Ayah>,
}

/// A verse within a surah
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ayah {
    /// Global ayah number across the whole Quran
    pub number: u64,
    /// Position within the surah; canonical reading order
    pub number_in_surah: u32,
    /// Text in the fetched edition (Arabic for the canonical edition)
    pub text: String,
    /// Translated text when merged bilingually
    #[serde(default)]
    pub translation: Option<String>,
    pub juz: u32,
    pub page: u32,
    /// The API serves either `false` or a prostration descriptor object
    #[serde(default, deserialize_with = "sajda_flag")]
    pub sajda: bool,
}

fn sajda_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value.as_bool().unwrap_or_else(|| value.is_object()))
}

/// A surah with ayahs carrying both Arabic text and a translation.
///
/// `untranslated` is set when the translation fetch failed and the content
/// degraded to Arabic only; the UI labels such content.
#[derive(Debug, Clone, Serialize)]
pub struct BilingualSurah {
    #[serde(flatten)]
    pub surah: Surah,
    pub untranslated: bool,
}

/// Reference to the surah a search match belongs to
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurahRef {
    pub number: u32,
    pub name: String,
    pub english_name: String,
}

/// One full-text search match
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchMatch {
    pub surah: SurahRef,
    pub number_in_surah: u32,
    pub text: String,
}

/// A text/translation variant of the Quran as served by the remote API
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Edition {
    pub identifier: String,
    pub language: String,
    pub name: String,
    pub english_name: String,
    pub format: String,
    #[serde(rename = "type")]
    pub kind: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ayah_sajda_variants() {
        let plain: Ayah = serde_json::from_str(
            r#"{"number":1,"text":"بِسْمِ اللَّهِ","numberInSurah":1,"juz":1,"page":1,"sajda":false}"#,
        )
        .unwrap();
        assert!(!plain.sajda);

        let prostration: Ayah = serde_json::from_str(
            r#"{"number":1160,"text":"...","numberInSurah":15,"juz":13,"page":251,"sajda":{"id":2,"recommended":true,"obligatory":false}}"#,
        )
        .unwrap();
        assert!(prostration.sajda);
    }

    #[test]
    fn test_surah_listing_has_no_ayahs() {
        let surah: Surah = serde_json::from_str(
            r#"{"number":1,"name":"سُورَةُ ٱلْفَاتِحَةِ","englishName":"Al-Faatiha","englishNameTranslation":"The Opening","numberOfAyahs":7,"revelationType":"Meccan"}"#,
        )
        .unwrap();
        assert_eq!(surah.number, 1);
        assert!(surah.ayahs.is_empty());
    }
}
