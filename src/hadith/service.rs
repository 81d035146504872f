//! Hadith content service

use super::source::HadithSource;
use super::{chapter_arabic_title, chapter_title, Hadith, HadithChapter};
use crate::cache::{self, ContentCache};
use crate::errors::ContentError;
use crate::metrics::Metrics;
use rand::seq::SliceRandom;
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, warn};

const SERVICE: &str = "hadith";
const CHAPTERS_KEY: &str = "all_chapters";

/// Search results are capped to bound the response size
pub const SEARCH_RESULT_CAP: usize = 100;

/// Totals shown on the stats page
#[derive(Debug, Clone, Serialize)]
pub struct HadithStatistics {
    pub total_chapters: usize,
    pub total_hadiths: u32,
}

/// Content service over a [`HadithSource`], with per-chapter caching,
/// substring search, and an availability-first chapter listing.
pub struct HadithService {
    source: Arc<dyn HadithSource>,
    chapters: ContentCache<Arc<Vec<HadithChapter>>>,
    hadiths: ContentCache<Arc<Vec<Hadith>>>,
    metrics: Arc<Metrics>,
}

impl HadithService {
    pub fn new(source: Arc<dyn HadithSource>, metrics: Arc<Metrics>) -> Self {
        Self {
            source,
            chapters: ContentCache::default(),
            hadiths: ContentCache::default(),
            metrics,
        }
    }

    /// All chapters, ascending by id, titles from the fixed lookup tables.
    ///
    /// Never fails: a load failure degrades to a fixed fallback list so the
    /// chapter sidebar is never empty. The fallback is not cached, letting a
    /// later call recover.
    pub async fn list_chapters(&self) -> Arc<Vec<HadithChapter>> {
        if let Some(hit) = self.chapters.get(CHAPTERS_KEY).await {
            self.metrics.record_cache_hit(SERVICE);
            return hit;
        }
        self.metrics.record_cache_miss(SERVICE);

        match self.source.chapter_counts().await {
            Ok(counts) => {
                let chapters: Vec<HadithChapter> = counts
                    .into_iter()
                    .map(|(id, hadith_count)| HadithChapter {
                        id,
                        title: chapter_title(id),
                        arabic_title: chapter_arabic_title(id),
                        hadith_count,
                    })
                    .collect();
                debug!("built {} chapters from {} source", chapters.len(), self.source.name());

                let chapters = Arc::new(chapters);
                self.chapters
                    .insert(CHAPTERS_KEY.to_string(), chapters.clone())
                    .await;
                chapters
            }
            Err(err) => {
                warn!("chapter listing failed ({}), serving fallback list", err);
                self.metrics.record_upstream_error(SERVICE);
                Arc::new(fallback_chapters())
            }
        }
    }

    /// A single chapter's metadata
    pub async fn get_chapter(&self, chapter_id: u32) -> Option<HadithChapter> {
        self.list_chapters()
            .await
            .iter()
            .find(|c| c.id == chapter_id)
            .cloned()
    }

    /// Hadiths of a chapter, ascending by in-book id, cached per chapter
    pub async fn get_chapter_hadiths(
        &self,
        chapter_id: u32,
    ) -> Result<Arc<Vec<Hadith>>, ContentError> {
        let key = cache::chapter_key(chapter_id);
        if let Some(hit) = self.hadiths.get(&key).await {
            self.metrics.record_cache_hit(SERVICE);
            return Ok(hit);
        }
        self.metrics.record_cache_miss(SERVICE);

        let hadiths = Arc::new(self.source.chapter_hadiths(chapter_id).await?);
        self.hadiths.insert(key, hadiths.clone()).await;
        Ok(hadiths)
    }

    /// Case-insensitive substring search over narrator and translated text,
    /// raw substring over the Arabic text (Arabic has no case folding).
    ///
    /// Scans every chapter regardless of source layout; the result count is
    /// capped at [`SEARCH_RESULT_CAP`]. Queries shorter than two characters
    /// return empty without touching the source.
    pub async fn search(&self, query: &str) -> Result<Vec<Hadith>, ContentError> {
        let query = query.trim();
        if query.chars().count() < 2 {
            return Ok(Vec::new());
        }
        let query_lower = query.to_lowercase();

        let mut results = Vec::new();
        'chapters: for chapter in self.list_chapters().await.iter() {
            let hadiths = match self.get_chapter_hadiths(chapter.id).await {
                Ok(hadiths) => hadiths,
                Err(err) => {
                    // A missing shard should not sink the whole search
                    warn!("skipping chapter {} during search: {}", chapter.id, err);
                    continue;
                }
            };

            for hadith in hadiths.iter() {
                if hadith_matches(hadith, query, &query_lower) {
                    results.push(hadith.clone());
                    if results.len() >= SEARCH_RESULT_CAP {
                        break 'chapters;
                    }
                }
            }
        }

        debug!("search '{}' matched {} hadiths", query, results.len());
        Ok(results)
    }

    /// One hadith by its collection-wide id
    pub async fn get_hadith(&self, hadith_id: u32) -> Result<Hadith, ContentError> {
        for chapter in self.list_chapters().await.iter() {
            if let Ok(hadiths) = self.get_chapter_hadiths(chapter.id).await {
                if let Some(hadith) = hadiths.iter().find(|h| h.id == hadith_id) {
                    return Ok(hadith.clone());
                }
            }
        }
        Err(ContentError::NotFound(format!("hadith {}", hadith_id)))
    }

    /// A random sample of hadiths across the whole collection
    pub async fn random_hadiths(&self, count: usize) -> Result<Vec<Hadith>, ContentError> {
        let mut all = Vec::new();
        for chapter in self.list_chapters().await.iter() {
            if let Ok(hadiths) = self.get_chapter_hadiths(chapter.id).await {
                all.extend(hadiths.iter().cloned());
            }
        }

        let mut rng = rand::thread_rng();
        Ok(all.choose_multiple(&mut rng, count).cloned().collect())
    }

    /// Collection totals
    pub async fn statistics(&self) -> HadithStatistics {
        let chapters = self.list_chapters().await;
        HadithStatistics {
            total_chapters: chapters.len(),
            total_hadiths: chapters.iter().map(|c| c.hadith_count).sum(),
        }
    }
}

fn hadith_matches(hadith: &Hadith, query: &str, query_lower: &str) -> bool {
    hadith.arabic.contains(query)
        || hadith.english.text.to_lowercase().contains(query_lower)
        || hadith.english.narrator.to_lowercase().contains(query_lower)
}

/// Minimal chapter list served when the data source cannot be read
fn fallback_chapters() -> Vec<HadithChapter> {
    const COUNTS: &[(u32, u32)] = &[
        (1, 7),
        (2, 53),
        (3, 76),
        (4, 113),
        (5, 31),
        (6, 33),
        (7, 23),
        (8, 172),
        (9, 38),
        (10, 166),
    ];

    COUNTS
        .iter()
        .map(|&(id, hadith_count)| HadithChapter {
            id,
            title: chapter_title(id),
            arabic_title: chapter_arabic_title(id),
            hadith_count,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hadith::source::tests::{temp_data_dir, write_aggregate_fixture, write_sharded_fixture};
    use crate::hadith::source::{AggregateSource, ShardedSource};
    use serde_json::json;

    fn service_over(source: Arc<dyn HadithSource>) -> HadithService {
        HadithService::new(source, Arc::new(Metrics::new()))
    }

    fn aggregate_service(dir: &std::path::Path) -> HadithService {
        service_over(Arc::new(AggregateSource::new(dir)))
    }

    #[tokio::test]
    async fn test_list_chapters_sorted_with_titles() {
        let dir = temp_data_dir("svc-chapters");
        write_aggregate_fixture(&dir, true);

        let chapters = aggregate_service(&dir).list_chapters().await;

        let ids: Vec<u32> = chapters.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(chapters[0].title, "Révélation");
        assert_eq!(chapters[0].arabic_title, "بدء الوحي");
        assert_eq!(chapters[0].hadith_count, 3);
    }

    #[tokio::test]
    async fn test_list_chapters_falls_back_on_load_failure() {
        let dir = temp_data_dir("svc-fallback"); // no data written
        let chapters = aggregate_service(&dir).list_chapters().await;

        assert_eq!(chapters.len(), 10);
        assert_eq!(chapters[0].title, "Révélation");
        assert_eq!(chapters[7].hadith_count, 172);
    }

    #[tokio::test]
    async fn test_chapter_hadiths_sorted_and_owned() {
        let dir = temp_data_dir("svc-order");
        write_aggregate_fixture(&dir, true);
        let service = aggregate_service(&dir);

        let hadiths = service.get_chapter_hadiths(1).await.unwrap();

        let ids: Vec<u32> = hadiths.iter().map(|h| h.id_in_book).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert!(hadiths.iter().all(|h| h.chapter_id == 1));
    }

    #[tokio::test]
    async fn test_search_matches_all_text_fields() {
        let dir = temp_data_dir("svc-search");
        write_aggregate_fixture(&dir, true);
        let service = aggregate_service(&dir);

        // Case-insensitive over the translated text
        let results = service.search("REVELATION").await.unwrap();
        assert_eq!(results.len(), 2);

        // Narrator field
        let results = service.search("aisha").await.unwrap();
        assert_eq!(results.len(), 2);

        // Raw substring over the Arabic text
        let results = service.search("الوحي").await.unwrap();
        assert_eq!(results.len(), 2);
    }

    #[tokio::test]
    async fn test_search_short_queries_are_empty_without_io() {
        let dir = temp_data_dir("svc-short"); // no data: any read would fall back
        let service = aggregate_service(&dir);

        assert!(service.search("").await.unwrap().is_empty());
        assert!(service.search("a").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_search_is_exhaustive_over_sharded_chapters() {
        let dir = temp_data_dir("svc-sharded-search");
        write_sharded_fixture(&dir);
        let service = service_over(Arc::new(ShardedSource::new(&dir)));

        // The only match lives in the last chapter
        let results = service.search("knowledge").await.unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].chapter_id, 3);
    }

    #[tokio::test]
    async fn test_search_result_cap() {
        let dir = temp_data_dir("svc-cap");
        let hadiths: Vec<serde_json::Value> = (1..=120)
            .map(|i| {
                json!({"id": i, "chapterId": 1, "idInBook": i, "arabic": "نص",
                       "english": {"narrator": "Narrated:", "text": "About prayer."}})
            })
            .collect();
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("bukhari.json"), json!({"hadiths": hadiths}).to_string()).unwrap();

        let results = aggregate_service(&dir).search("prayer").await.unwrap();
        assert_eq!(results.len(), SEARCH_RESULT_CAP);
    }

    #[tokio::test]
    async fn test_get_hadith() {
        let dir = temp_data_dir("svc-single");
        write_aggregate_fixture(&dir, true);
        let service = aggregate_service(&dir);

        let hadith = service.get_hadith(8).await.unwrap();
        assert_eq!(hadith.chapter_id, 2);

        assert!(matches!(
            service.get_hadith(999).await,
            Err(ContentError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_random_sample_is_bounded() {
        let dir = temp_data_dir("svc-random");
        write_aggregate_fixture(&dir, true);
        let service = aggregate_service(&dir);

        assert_eq!(service.random_hadiths(2).await.unwrap().len(), 2);
        // Asking for more than the corpus holds returns the whole corpus
        assert_eq!(service.random_hadiths(50).await.unwrap().len(), 5);
    }

    #[tokio::test]
    async fn test_statistics() {
        let dir = temp_data_dir("svc-stats");
        write_aggregate_fixture(&dir, true);

        let stats = aggregate_service(&dir).statistics().await;
        assert_eq!(stats.total_chapters, 3);
        assert_eq!(stats.total_hadiths, 5);
    }
}
