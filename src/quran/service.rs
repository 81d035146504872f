//! Quran content service over the remote REST API

use super::{BilingualSurah, Edition, SearchMatch, Surah};
use crate::cache::{self, ContentCache};
use crate::errors::ContentError;
use crate::locales::{self, ARABIC_EDITION};
use crate::metrics::Metrics;
use crate::network::HttpClient;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, warn};

const SERVICE: &str = "quran";

/// Content service for surah listings, single surahs, bilingual merges and
/// full-text search, all backed by the remote REST API and memoized.
pub struct QuranService {
    client: HttpClient,
    api_base: String,
    cors_proxy: Option<String>,
    cache: ContentCache<Arc<Value>>,
    metrics: Arc<Metrics>,
}

impl QuranService {
    pub fn new(
        client: HttpClient,
        api_base: String,
        cors_proxy: Option<String>,
        metrics: Arc<Metrics>,
    ) -> Self {
        Self {
            client,
            api_base: api_base.trim_end_matches('/').to_string(),
            cors_proxy,
            cache: ContentCache::default(),
            metrics,
        }
    }

    /// All 114 surahs, without ayahs
    pub async fn list_surahs(&self) -> Result<Vec<Surah>, ContentError> {
        let url = format!("{}/meta", self.api_base);
        let data = self.fetch_data(cache::meta_key(), &url).await?;

        let references = data
            .get("surahs")
            .and_then(|s| s.get("references"))
            .cloned()
            .ok_or_else(|| ContentError::Malformed("meta response without surah references".into()))?;

        let surahs: Vec<Surah> = serde_json::from_value(references)
            .map_err(|e| ContentError::Malformed(format!("surah references: {}", e)))?;

        if surahs.len() != crate::SURAH_COUNT as usize {
            warn!("metadata endpoint returned {} surahs", surahs.len());
        }

        Ok(surahs)
    }

    /// A single surah with its ayahs, in the given edition
    pub async fn get_surah(&self, number: u32, edition: &str) -> Result<Surah, ContentError> {
        let url = format!("{}/surah/{}/{}", self.api_base, number, edition);
        let data = self.fetch_data(cache::surah_key(number, edition), &url).await?;

        let surah: Surah = serde_json::from_value(data.as_ref().clone())
            .map_err(|e| ContentError::Malformed(format!("surah payload: {}", e)))?;

        Ok(surah)
    }

    /// A surah with ayahs carrying both the Arabic text and the locale's
    /// translation, zipped by index.
    ///
    /// A failed translation fetch degrades to the Arabic text alone, with
    /// the result marked `untranslated` so the UI can label it.
    pub async fn get_surah_bilingual(
        &self,
        number: u32,
        locale: &str,
    ) -> Result<BilingualSurah, ContentError> {
        let edition = locales::translation_edition(locale);

        if edition == ARABIC_EDITION {
            let surah = self.get_surah(number, ARABIC_EDITION).await?;
            return Ok(BilingualSurah { surah, untranslated: false });
        }

        let (arabic, translation) = futures::join!(
            self.get_surah(number, ARABIC_EDITION),
            self.get_surah(number, edition),
        );

        let mut surah = arabic?;
        match translation {
            Ok(translated) => {
                // Zip by index; extra Arabic ayahs keep a null translation
                for (index, ayah) in surah.ayahs.iter_mut().enumerate() {
                    ayah.translation = translated.ayahs.get(index).map(|t| t.text.clone());
                }
                Ok(BilingualSurah { surah, untranslated: false })
            }
            Err(err) => {
                warn!(
                    "translation edition {} failed for surah {}: {}, serving Arabic only",
                    edition, number, err
                );
                Ok(BilingualSurah { surah, untranslated: true })
            }
        }
    }

    /// Full-text search in the locale's edition, delegated to the remote API.
    ///
    /// Queries shorter than two characters return empty without a network
    /// call.
    pub async fn search(&self, query: &str, locale: &str) -> Result<Vec<SearchMatch>, ContentError> {
        let query = query.trim();
        if query.chars().count() < 2 {
            return Ok(Vec::new());
        }

        let edition = locales::translation_edition(locale);
        let url = format!(
            "{}/search/{}/{}",
            self.api_base,
            urlencoding::encode(query),
            edition
        );

        let data = match self.fetch_data(cache::search_key(query, edition), &url).await {
            Ok(data) => data,
            // The API answers 404 for queries with no matches
            Err(ContentError::NotFound(_)) => return Ok(Vec::new()),
            Err(err) => return Err(err),
        };

        let matches = data
            .get("matches")
            .cloned()
            .ok_or_else(|| ContentError::Malformed("search response without matches".into()))?;

        let matches: Vec<SearchMatch> = serde_json::from_value(matches)
            .map_err(|e| ContentError::Malformed(format!("search matches: {}", e)))?;

        Ok(matches)
    }

    /// Text editions available for a language
    pub async fn editions_for_language(&self, lang: &str) -> Result<Vec<Edition>, ContentError> {
        let url = format!("{}/edition/language/{}", self.api_base, lang);
        let data = self.fetch_data(cache::editions_key(lang), &url).await?;

        let editions: Vec<Edition> = serde_json::from_value(data.as_ref().clone())
            .map_err(|e| ContentError::Malformed(format!("edition list: {}", e)))?;

        Ok(editions.into_iter().filter(|e| e.format == "text").collect())
    }

    /// Number of cached payloads
    pub fn cache_size(&self) -> u64 {
        self.cache.size()
    }

    /// Fetch the `data` payload of an API envelope, through the cache.
    async fn fetch_data(&self, cache_key: String, url: &str) -> Result<Arc<Value>, ContentError> {
        if let Some(hit) = self.cache.get(&cache_key).await {
            self.metrics.record_cache_hit(SERVICE);
            debug!("cache hit for {}", cache_key);
            return Ok(hit);
        }
        self.metrics.record_cache_miss(SERVICE);

        let response = self
            .client
            .get_with_fallback(url, self.cors_proxy.as_deref())
            .await
            .map_err(|err| {
                self.metrics.record_upstream_error(SERVICE);
                ContentError::from(err)
            })?;

        let body: Value = match serde_json::from_str(&response.text) {
            Ok(body) => body,
            Err(_) if !response.is_success() => {
                self.metrics.record_upstream_error(SERVICE);
                return Err(ContentError::Upstream { status: response.status });
            }
            Err(err) => {
                return Err(ContentError::Malformed(format!("response body: {}", err)));
            }
        };

        // The API mirrors the HTTP status into a numeric `code` field
        let code = body
            .get("code")
            .and_then(|c| c.as_u64())
            .unwrap_or(response.status as u64);

        match code {
            200 => {
                let data = body
                    .get("data")
                    .cloned()
                    .ok_or_else(|| ContentError::Malformed("envelope without data".into()))?;
                let data = Arc::new(data);
                self.cache.insert(cache_key, data.clone()).await;
                Ok(data)
            }
            404 => Err(ContentError::NotFound(url.to_string())),
            status => {
                self.metrics.record_upstream_error(SERVICE);
                Err(ContentError::Upstream { status: status as u16 })
            }
        }
    }
}
