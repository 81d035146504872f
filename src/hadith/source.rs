//! Hadith data sources
//!
//! Two on-disk layouts produce the same shapes: one aggregate
//! `bukhari.json` holding every hadith, or a prebuilt chapter index plus
//! one file per chapter. Either layout may wrap its array in a
//! `{"hadiths": [...]}` object or serve the bare array.

use super::Hadith;
use crate::errors::ContentError;
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;

/// A provider of hadith chapters
#[async_trait]
pub trait HadithSource: Send + Sync {
    /// Source label for logs
    fn name(&self) -> &str;

    /// `(chapter id, hadith count)` pairs, ascending by id
    async fn chapter_counts(&self) -> Result<Vec<(u32, u32)>, ContentError>;

    /// Hadiths of one chapter, ascending by `idInBook`
    async fn chapter_hadiths(&self, chapter_id: u32) -> Result<Vec<Hadith>, ContentError>;
}

fn parse_hadith_array(body: &str, origin: &Path) -> Result<Vec<Hadith>, ContentError> {
    let value: Value = serde_json::from_str(body)
        .map_err(|e| ContentError::Malformed(format!("{}: {}", origin.display(), e)))?;

    // Accept either the enveloped or the bare-array layout
    let array = match value.get("hadiths") {
        Some(hadiths) => hadiths.clone(),
        None if value.is_array() => value,
        None => {
            return Err(ContentError::Malformed(format!(
                "{}: expected a hadiths array",
                origin.display()
            )))
        }
    };

    serde_json::from_value(array)
        .map_err(|e| ContentError::Malformed(format!("{}: {}", origin.display(), e)))
}

/// One `bukhari.json` with every hadith, loaded once and memoized
pub struct AggregateSource {
    path: PathBuf,
    data: tokio::sync::OnceCell<Arc<Vec<Hadith>>>,
}

impl AggregateSource {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join("bukhari.json"),
            data: tokio::sync::OnceCell::new(),
        }
    }

    async fn load(&self) -> Result<&Arc<Vec<Hadith>>, ContentError> {
        self.data
            .get_or_try_init(|| async {
                let body = tokio::fs::read_to_string(&self.path).await?;
                let hadiths = parse_hadith_array(&body, &self.path)?;
                info!("loaded {} hadiths from {}", hadiths.len(), self.path.display());
                Ok(Arc::new(hadiths))
            })
            .await
    }
}

#[async_trait]
impl HadithSource for AggregateSource {
    fn name(&self) -> &str {
        "aggregate"
    }

    async fn chapter_counts(&self) -> Result<Vec<(u32, u32)>, ContentError> {
        let data = self.load().await?;

        let mut counts: Vec<(u32, u32)> = Vec::new();
        for hadith in data.iter() {
            match counts.iter_mut().find(|(id, _)| *id == hadith.chapter_id) {
                Some((_, count)) => *count += 1,
                None => counts.push((hadith.chapter_id, 1)),
            }
        }
        counts.sort_by_key(|(id, _)| *id);

        Ok(counts)
    }

    async fn chapter_hadiths(&self, chapter_id: u32) -> Result<Vec<Hadith>, ContentError> {
        let data = self.load().await?;

        let mut hadiths: Vec<Hadith> = data
            .iter()
            .filter(|h| h.chapter_id == chapter_id)
            .cloned()
            .collect();
        hadiths.sort_by_key(|h| h.id_in_book);

        Ok(hadiths)
    }
}

/// One entry of `chapters/index.json`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ChapterIndexEntry {
    id: u32,
    hadith_count: u32,
}

/// Chapter-sharded layout: `chapters/index.json` plus `chapters/{id}.json`
pub struct ShardedSource {
    data_dir: PathBuf,
}

impl ShardedSource {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            data_dir: data_dir.to_path_buf(),
        }
    }

    fn index_path(&self) -> PathBuf {
        self.data_dir.join("chapters").join("index.json")
    }

    fn chapter_path(&self, chapter_id: u32) -> PathBuf {
        self.data_dir
            .join("chapters")
            .join(format!("{}.json", chapter_id))
    }
}

#[async_trait]
impl HadithSource for ShardedSource {
    fn name(&self) -> &str {
        "sharded"
    }

    async fn chapter_counts(&self) -> Result<Vec<(u32, u32)>, ContentError> {
        let path = self.index_path();
        let body = tokio::fs::read_to_string(&path).await?;
        let mut entries: Vec<ChapterIndexEntry> = serde_json::from_str(&body)
            .map_err(|e| ContentError::Malformed(format!("{}: {}", path.display(), e)))?;
        entries.sort_by_key(|e| e.id);

        Ok(entries.into_iter().map(|e| (e.id, e.hadith_count)).collect())
    }

    async fn chapter_hadiths(&self, chapter_id: u32) -> Result<Vec<Hadith>, ContentError> {
        let path = self.chapter_path(chapter_id);
        let body = match tokio::fs::read_to_string(&path).await {
            Ok(body) => body,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Err(ContentError::NotFound(format!("chapter {}", chapter_id)))
            }
            Err(err) => return Err(err.into()),
        };

        let mut hadiths = parse_hadith_array(&body, &path)?;
        hadiths.sort_by_key(|h| h.id_in_book);

        Ok(hadiths)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use serde_json::json;

    /// Small fixture corpus: three chapters, out-of-order ids
    pub(crate) fn fixture_hadiths() -> Value {
        json!([
            {"id": 3, "chapterId": 1, "idInBook": 3, "arabic": "الأعمال بالنيات",
             "english": {"narrator": "Narrated 'Umar:", "text": "Deeds depend upon intentions."}},
            {"id": 1, "chapterId": 1, "idInBook": 1, "arabic": "بدء الوحي",
             "english": {"narrator": "Narrated Aisha:", "text": "The commencement of the revelation."}},
            {"id": 2, "chapterId": 1, "idInBook": 2, "arabic": "الوحي",
             "english": {"narrator": "Narrated Aisha:", "text": "Revelation came like the ringing of a bell."}},
            {"id": 8, "chapterId": 2, "idInBook": 8, "arabic": "بني الإسلام على خمس",
             "english": {"narrator": "Narrated Ibn 'Umar:", "text": "Islam is based on five principles."}},
            {"id": 9, "chapterId": 3, "idInBook": 9, "arabic": "طلب العلم",
             "english": {"narrator": "Narrated Anas:", "text": "Seeking knowledge is an obligation."}}
        ])
    }

    pub(crate) fn write_aggregate_fixture(dir: &Path, wrapped: bool) {
        let hadiths = fixture_hadiths();
        let body = if wrapped {
            json!({"hadiths": hadiths, "metadata": {"length": 5}})
        } else {
            hadiths
        };
        std::fs::create_dir_all(dir).unwrap();
        std::fs::write(dir.join("bukhari.json"), body.to_string()).unwrap();
    }

    pub(crate) fn write_sharded_fixture(dir: &Path) {
        let chapters_dir = dir.join("chapters");
        std::fs::create_dir_all(&chapters_dir).unwrap();

        let all: Vec<Value> = fixture_hadiths().as_array().unwrap().clone();
        let mut index = Vec::new();
        for chapter_id in [1u32, 2, 3] {
            let chapter: Vec<&Value> = all
                .iter()
                .filter(|h| h["chapterId"] == chapter_id)
                .collect();
            index.push(json!({"id": chapter_id, "hadithCount": chapter.len()}));
            std::fs::write(
                chapters_dir.join(format!("{}.json", chapter_id)),
                json!({ "hadiths": chapter }).to_string(),
            )
            .unwrap();
        }
        std::fs::write(chapters_dir.join("index.json"), json!(index).to_string()).unwrap();
    }

    pub(crate) fn temp_data_dir(label: &str) -> PathBuf {
        let dir = std::env::temp_dir()
            .join("islamweb-rs-tests")
            .join(format!("{}-{}", label, uuid::Uuid::new_v4()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[tokio::test]
    async fn test_aggregate_counts_and_ordering() {
        let dir = temp_data_dir("aggregate");
        write_aggregate_fixture(&dir, true);

        let source = AggregateSource::new(&dir);
        let counts = source.chapter_counts().await.unwrap();
        assert_eq!(counts, vec![(1, 3), (2, 1), (3, 1)]);

        let chapter = source.chapter_hadiths(1).await.unwrap();
        let ids: Vec<u32> = chapter.iter().map(|h| h.id_in_book).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert!(chapter.iter().all(|h| h.chapter_id == 1));
    }

    #[tokio::test]
    async fn test_aggregate_accepts_bare_array() {
        let dir = temp_data_dir("aggregate-bare");
        write_aggregate_fixture(&dir, false);

        let source = AggregateSource::new(&dir);
        assert_eq!(source.chapter_counts().await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_sharded_matches_aggregate_shape() {
        let dir = temp_data_dir("sharded");
        write_sharded_fixture(&dir);

        let source = ShardedSource::new(&dir);
        let counts = source.chapter_counts().await.unwrap();
        assert_eq!(counts, vec![(1, 3), (2, 1), (3, 1)]);

        let chapter = source.chapter_hadiths(1).await.unwrap();
        let ids: Vec<u32> = chapter.iter().map(|h| h.id_in_book).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_sharded_missing_chapter_is_not_found() {
        let dir = temp_data_dir("sharded-missing");
        write_sharded_fixture(&dir);

        let source = ShardedSource::new(&dir);
        let result = source.chapter_hadiths(42).await;
        assert!(matches!(result, Err(ContentError::NotFound(_))));
    }
}
