//! Error taxonomy shared by the content services
//!
//! Every service-boundary failure maps onto one of these variants; the web
//! layer converts them to status codes and user-facing messages. None of
//! them is ever fatal to the process.

use thiserror::Error;

/// Errors surfaced by the Quran and hadith content services.
#[derive(Debug, Error)]
pub enum ContentError {
    /// Input rejected before any I/O (empty query, unsupported locale, ...).
    #[error("invalid request: {0}")]
    Validation(String),

    /// The requested surah/chapter/hadith does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// Transport-level failure talking to an upstream or reading data files.
    #[error("fetch failed: {0}")]
    Fetch(#[from] reqwest::Error),

    /// The upstream answered, but not with a usable payload.
    #[error("upstream error: status {status}")]
    Upstream { status: u16 },

    /// A data file was present but not in the expected shape.
    #[error("malformed data: {0}")]
    Malformed(String),

    /// Local file I/O failure (hadith data directory).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl ContentError {
    /// Whether the caller should offer a retry affordance.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ContentError::Fetch(_) | ContentError::Upstream { .. })
    }
}
