//! Settings structures for IslamWeb-RS configuration

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main settings structure matching settings.yml
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub general: GeneralSettings,
    pub server: ServerSettings,
    pub quran: QuranSettings,
    pub hadith: HadithSettings,
    pub chat: ChatSettings,
    pub outgoing: OutgoingSettings,
    pub ui: UiSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            general: GeneralSettings::default(),
            server: ServerSettings::default(),
            quran: QuranSettings::default(),
            hadith: HadithSettings::default(),
            chat: ChatSettings::default(),
            outgoing: OutgoingSettings::default(),
            ui: UiSettings::default(),
        }
    }
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let settings: Settings = serde_yaml::from_str(&content)?;
        Ok(settings)
    }

    /// Merge with environment variables (ISLAMWEB_* prefix).
    ///
    /// The chat credential is env-only; it never comes from the file.
    pub fn merge_env(&mut self) {
        if let Ok(val) = std::env::var("ISLAMWEB_DEBUG") {
            self.general.debug = val.parse().unwrap_or(false);
        }
        if let Ok(val) = std::env::var("ISLAMWEB_PORT") {
            if let Ok(port) = val.parse() {
                self.server.port = port;
            }
        }
        if let Ok(val) = std::env::var("ISLAMWEB_BIND_ADDRESS") {
            self.server.bind_address = val;
        }
        if let Ok(val) = std::env::var("ISLAMWEB_BASE_URL") {
            self.server.base_url = Some(val);
        }
        if let Ok(val) = std::env::var("ISLAMWEB_QURAN_API_BASE") {
            self.quran.api_base = val;
        }
        if let Ok(val) = std::env::var("ISLAMWEB_DATA_DIR") {
            self.hadith.data_dir = PathBuf::from(val);
        }
        if let Ok(val) = std::env::var("ISLAMWEB_CHAT_API_BASE") {
            self.chat.api_base = val;
        }
        if let Ok(val) = std::env::var("ISLAMWEB_DEFAULT_LOCALE") {
            self.ui.default_locale = val;
        }

        if let Ok(val) = std::env::var("ISLAMWEB_CHAT_API_KEY") {
            self.chat.api_key = Some(val);
        } else if let Ok(val) = std::env::var("OPENAI_API_KEY") {
            self.chat.api_key = Some(val);
        }
    }
}

/// General settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralSettings {
    /// Enable debug mode
    pub debug: bool,
    /// Instance name displayed in UI
    pub instance_name: String,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            debug: false,
            instance_name: "Islam Web".to_string(),
        }
    }
}

/// Server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    /// Server port
    pub port: u16,
    /// Bind address
    pub bind_address: String,
    /// Base URL for the instance
    pub base_url: Option<String>,
    /// Public instance mode (affects robots.txt)
    pub public_instance: bool,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            port: 8080,
            bind_address: "127.0.0.1".to_string(),
            base_url: None,
            public_instance: false,
        }
    }
}

/// Quran REST API settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct QuranSettings {
    /// REST API base, e.g. https://api.alquran.cloud/v1
    pub api_base: String,
    /// CORS fallback proxy prefix; the encoded target URL is appended
    pub cors_proxy: Option<String>,
}

impl Default for QuranSettings {
    fn default() -> Self {
        Self {
            api_base: "https://api.alquran.cloud/v1".to_string(),
            cors_proxy: Some("https://corsproxy.io/?".to_string()),
        }
    }
}

/// How the hadith corpus is laid out on disk
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HadithSourceKind {
    /// One bukhari.json with every hadith
    #[default]
    Aggregate,
    /// chapters/index.json plus one file per chapter
    Sharded,
}

/// Hadith data settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HadithSettings {
    /// Which on-disk layout to read
    pub source: HadithSourceKind,
    /// Directory holding the JSON data files
    pub data_dir: PathBuf,
}

impl Default for HadithSettings {
    fn default() -> Self {
        Self {
            source: HadithSourceKind::Aggregate,
            data_dir: PathBuf::from("data"),
        }
    }
}

/// Chat assistant settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatSettings {
    /// Whether the assistant is exposed at all
    pub enabled: bool,
    /// OpenAI-compatible API base
    pub api_base: String,
    /// Model name
    pub model: String,
    /// Output length bound
    pub max_tokens: u32,
    /// Sampling temperature (low favors factual-sounding answers)
    pub temperature: f32,
    pub top_p: f32,
    pub frequency_penalty: f32,
    pub presence_penalty: f32,
    /// Bearer credential; environment-only, never read from the file
    #[serde(skip)]
    pub api_key: Option<String>,
}

impl Default for ChatSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            api_base: "https://api.openai.com/v1".to_string(),
            model: "gpt-4.1-mini".to_string(),
            max_tokens: 1000,
            temperature: 0.3,
            top_p: 0.9,
            frequency_penalty: 0.1,
            presence_penalty: 0.1,
            api_key: None,
        }
    }
}

/// Outgoing request settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutgoingSettings {
    /// Default request timeout in seconds
    pub request_timeout: f64,
    /// Connection pool max size
    pub pool_maxsize: usize,
}

impl Default for OutgoingSettings {
    fn default() -> Self {
        Self {
            request_timeout: crate::DEFAULT_TIMEOUT as f64,
            pool_maxsize: 20,
        }
    }
}

/// UI settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// Default UI locale
    pub default_locale: String,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            default_locale: crate::locales::DEFAULT_LOCALE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.server.port, 8080);
        assert!(!settings.general.debug);
        assert_eq!(settings.quran.api_base, "https://api.alquran.cloud/v1");
        assert_eq!(settings.hadith.source, HadithSourceKind::Aggregate);
        assert_eq!(settings.ui.default_locale, "fr");
        assert!(settings.chat.api_key.is_none());
    }

    #[test]
    fn test_yaml_roundtrip() {
        let yaml = r#"
server:
  port: 9000
quran:
  cors_proxy: null
hadith:
  source: sharded
  data_dir: /srv/bukhari
"#;
        let settings: Settings = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(settings.server.port, 9000);
        assert!(settings.quran.cors_proxy.is_none());
        assert_eq!(settings.hadith.source, HadithSourceKind::Sharded);
        assert_eq!(settings.hadith.data_dir, PathBuf::from("/srv/bukhari"));
        // Untouched sections keep their defaults
        assert_eq!(settings.chat.model, "gpt-4.1-mini");
    }

    #[test]
    fn test_merge_env() {
        std::env::set_var("ISLAMWEB_PORT", "8181");
        std::env::set_var("ISLAMWEB_CHAT_API_KEY", "test-token");

        let mut settings = Settings::default();
        settings.merge_env();

        assert_eq!(settings.server.port, 8181);
        assert_eq!(settings.chat.api_key.as_deref(), Some("test-token"));

        std::env::remove_var("ISLAMWEB_PORT");
        std::env::remove_var("ISLAMWEB_CHAT_API_KEY");
    }
}
