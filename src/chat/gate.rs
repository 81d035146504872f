//! Topic gate for the chat assistant
//!
//! A heuristic pre-filter, not a security boundary: questions must mention
//! at least one domain keyword or match one of the question patterns before
//! anything is sent to the completion endpoint.

use once_cell::sync::Lazy;
use regex::Regex;

/// Keywords marking a question as on-topic (French, English loans, and
/// transliterated Arabic)
const ISLAMIC_KEYWORDS: &[&str] = &[
    // Français
    "islam", "musulman", "coran", "quran", "allah", "prophète", "muhammad", "hadith", "sunna",
    "sunnah", "prière", "salat", "ramadan", "jeûne", "hajj", "pèlerinage", "zakat", "charité",
    "mosquée", "imam", "sourate", "verset", "ayah", "bukhari", "muslim", "tirmidhi", "abu dawud",
    "halal", "haram", "makruh", "mustahab", "fiqh", "aqida", "tawhid", "shirk",
    "dua", "dhikr", "invocation", "ablution", "wudu", "ghusl", "tahara", "pureté",
    "jihad", "hijab", "nikah", "mariage", "divorce", "héritage", "usure", "riba",
    "paradis", "enfer", "jannah", "jahannam", "akhirah", "jugement", "résurrection",
    "ange", "jinn", "shaytan", "satan", "prophètes", "messagers", "livre",
    // Arabe (translittéré)
    "bismillah", "alhamdulillah", "subhanallah", "astaghfirullah", "inshallah", "mashallah",
    "salallahu alayhi wasallam", "radiallahu anhu", "alayhis salam",
    "la ilaha illa allah", "allahu akbar", "barakallahu feek",
    // Termes spécifiques
    "sahaba", "compagnons", "califes", "omar", "abu bakr", "othman", "ali",
    "aisha", "fatima", "khadija", "mecque", "médine", "kaaba", "qibla",
    "eid", "aïd", "fitr", "adha", "sacrifice", "omra", "umrah",
];

/// Question shapes accepted even without a keyword hit
static ISLAMIC_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?i)que dit (le coran|l'islam|la sunna)",
        r"(?i)selon (l'islam|le coran|la sunna)",
        r"(?i)dans (l'islam|le coran)",
        r"(?i)prophète.*dit",
        r"(?i)allah.*dit",
        r"(?i)comment.*islam",
        r"(?i)pourquoi.*islam",
        r"(?i)est-ce que.*halal",
        r"(?i)est-ce que.*haram",
        r"(?i)comment.*prier",
        r"(?i)comment.*jeûner",
        r"(?i)piliers.*islam",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

/// Whether a question looks like it is about Islam
pub fn is_islamic_question(question: &str) -> bool {
    let question_lower = question.to_lowercase();

    let has_keyword = ISLAMIC_KEYWORDS
        .iter()
        .any(|keyword| question_lower.contains(keyword));

    has_keyword || ISLAMIC_PATTERNS.iter().any(|p| p.is_match(&question_lower))
}
