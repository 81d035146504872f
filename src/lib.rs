//! IslamWeb-RS: a multilingual Quran and Sahih al-Bukhari reading web
//! application written in Rust.
//!
//! Serves the Quran (from the alquran.cloud REST API) and the Sahih
//! al-Bukhari hadith collection (from static JSON data), with a
//! ten-language UI, full-text search, and an optional LLM-backed
//! assistant restricted to Islamic topics.

pub mod cache;
pub mod chat;
pub mod config;
pub mod errors;
pub mod hadith;
pub mod locales;
pub mod metrics;
pub mod network;
pub mod quran;
pub mod web;

pub use config::Settings;
pub use errors::ContentError;
pub use hadith::HadithService;
pub use quran::QuranService;

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default timeout for upstream requests in seconds
pub const DEFAULT_TIMEOUT: u64 = 10;

/// Number of surahs in the Quran
pub const SURAH_COUNT: u32 = 114;
