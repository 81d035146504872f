//! Sahih al-Bukhari hadith module
//!
//! Data model and content service for the hadith collection, read from
//! static JSON data in one of two on-disk layouts.

mod service;
mod source;
mod titles;

pub use service::{HadithService, HadithStatistics, SEARCH_RESULT_CAP};
pub use source::{AggregateSource, HadithSource, ShardedSource};
pub use titles::{chapter_arabic_title, chapter_title};

use serde::{Deserialize, Serialize};

/// A single hadith
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hadith {
    /// Unique id across the whole collection
    pub id: u32,
    /// Chapter this hadith belongs to
    pub chapter_id: u32,
    /// Position within the book; canonical ordering inside a chapter
    pub id_in_book: u32,
    /// Arabic text
    pub arabic: String,
    pub english: HadithText,
}

/// Narrator attribution and translated text
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HadithText {
    #[serde(default)]
    pub narrator: String,
    #[serde(default)]
    pub text: String,
}

/// A chapter of the collection
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HadithChapter {
    pub id: u32,
    pub title: String,
    pub arabic_title: String,
    pub hadith_count: u32,
}
