//! Application state shared across handlers

use crate::chat::ChatService;
use crate::config::{HadithSourceKind, Settings};
use crate::hadith::{AggregateSource, HadithService, HadithSource, ShardedSource};
use crate::locales::Translations;
use crate::metrics::Metrics;
use crate::network::HttpClient;
use crate::quran::QuranService;
use anyhow::Context;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Global settings
    pub settings: Arc<Settings>,
    /// Quran content service
    pub quran: Arc<QuranService>,
    /// Hadith content service
    pub hadith: Arc<HadithService>,
    /// Chat assistant service
    pub chat: Arc<ChatService>,
    /// UI string resolver
    pub translations: Arc<Translations>,
    /// Request/cache counters
    pub metrics: Arc<Metrics>,
    /// Template renderer
    pub templates: Arc<super::Templates>,
}

impl AppState {
    /// Create new application state
    pub fn new(settings: Settings, client: HttpClient) -> anyhow::Result<Self> {
        // Fail fast on an unusable API base rather than on the first request
        url::Url::parse(&settings.quran.api_base).context("invalid quran.api_base")?;

        let metrics = Arc::new(Metrics::new());

        let quran = Arc::new(QuranService::new(
            client.clone(),
            settings.quran.api_base.clone(),
            settings.quran.cors_proxy.clone(),
            metrics.clone(),
        ));

        let source: Arc<dyn HadithSource> = match settings.hadith.source {
            HadithSourceKind::Aggregate => Arc::new(AggregateSource::new(&settings.hadith.data_dir)),
            HadithSourceKind::Sharded => Arc::new(ShardedSource::new(&settings.hadith.data_dir)),
        };
        let hadith = Arc::new(HadithService::new(source, metrics.clone()));

        let chat = Arc::new(ChatService::new(
            client,
            settings.chat.clone(),
            metrics.clone(),
        ));

        let templates = Arc::new(super::Templates::new()?);

        Ok(Self {
            settings: Arc::new(settings),
            quran,
            hadith,
            chat,
            translations: Arc::new(Translations::new()),
            metrics,
            templates,
        })
    }

    /// Get instance name
    pub fn instance_name(&self) -> &str {
        &self.settings.general.instance_name
    }

    /// Check if instance is public
    pub fn is_public(&self) -> bool {
        self.settings.server.public_instance
    }
}
