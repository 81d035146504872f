//! Chat assistant service
//!
//! Per question: validate locally, dispatch to the completion endpoint,
//! cache the answer, and map failures to fixed apology strings. The caller
//! always gets displayable text; nothing here is fatal.

use super::gate;
use crate::cache::BoundedResponseCache;
use crate::config::ChatSettings;
use crate::metrics::Metrics;
use crate::network::HttpClient;
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, warn};
use uuid::Uuid;

const SERVICE: &str = "chat";

/// Fixed instruction specializing the model in authentic Islamic sources
const SYSTEM_PROMPT: &str = "Tu es un assistant islamique spécialisé dans le Coran et la Sunna authentique. Tes réponses doivent UNIQUEMENT se baser sur :

1. Le Coran (القرآن الكريم)
2. Les hadiths authentiques (صحيح) du Prophète Muhammad (ﷺ)
3. Les enseignements des Salaf as-Salih (les pieux prédécesseurs)

RÈGLES STRICTES :
- Ne réponds QUE aux questions liées à l'Islam
- Cite toujours tes sources (sourate/verset, hadith avec référence)
- Si tu n'es pas sûr d'une information, dis-le clairement
- Pour les questions non-islamiques, redirige poliment vers les sources islamiques
- Utilise un ton respectueux et bienveillant

FORMAT DE RÉPONSE :
- Réponse claire et concise
- Citations coraniques en arabe avec traduction
- Références précises (ex: Sahih al-Bukhari, hadith n°...)

Réponds en français principalement, avec des citations arabes quand nécessaire.";

/// Reply when the question is too short to work with
const TOO_SHORT_REPLY: &str =
    "Veuillez poser une question plus détaillée sur l'Islam, le Coran ou la Sunna.";

/// Reply when the topic gate rejects the question
const REDIRECT_REPLY: &str = "Je suis spécialisé uniquement dans les questions sur l'Islam, le Coran et la Sunna authentique.

Votre question ne semble pas porter sur ces sujets. Je peux vous aider avec :
• Les enseignements du Coran
• Les hadiths du Prophète (ﷺ)
• Les pratiques islamiques
• La croyance musulmane
• L'histoire islamique

Pourriez-vous reformuler votre question en lien avec l'Islam ?";

const AUTH_APOLOGY: &str =
    "Erreur d'authentification. Veuillez vérifier la configuration de l'API.";
const RATE_LIMIT_APOLOGY: &str =
    "Trop de requêtes. Veuillez patienter un moment avant de poser une nouvelle question.";
const TECHNICAL_APOLOGY: &str =
    "Une erreur technique s'est produite. Veuillez réessayer dans quelques instants.";
const NETWORK_APOLOGY: &str =
    "Erreur de connexion. Vérifiez votre connexion internet et réessayez.";
const INVALID_APOLOGY: &str = "Réponse invalide de l'IA. Veuillez réessayer.";

/// Failures talking to the completion endpoint
#[derive(Debug, Error)]
pub enum ChatError {
    #[error("authentication rejected by the completion endpoint")]
    Auth,
    #[error("rate limited by the completion endpoint")]
    RateLimited,
    #[error("completion endpoint error: status {status}")]
    Upstream { status: u16 },
    #[error("network failure: {0}")]
    Network(#[from] reqwest::Error),
    #[error("unusable completion response")]
    Invalid,
}

impl ChatError {
    /// The fixed user-facing apology for this failure class
    pub fn apology(&self) -> &'static str {
        match self {
            ChatError::Auth => AUTH_APOLOGY,
            ChatError::RateLimited => RATE_LIMIT_APOLOGY,
            ChatError::Upstream { .. } => TECHNICAL_APOLOGY,
            ChatError::Network(_) => NETWORK_APOLOGY,
            ChatError::Invalid => INVALID_APOLOGY,
        }
    }
}

/// One assistant reply
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatAnswer {
    pub id: Uuid,
    pub text: String,
    pub timestamp: DateTime<Utc>,
    /// Served from the response cache without a dispatch
    pub cached: bool,
    /// Rejected locally by validation; nothing was dispatched
    pub rejected: bool,
}

impl ChatAnswer {
    fn new(text: String, cached: bool, rejected: bool) -> Self {
        Self {
            id: Uuid::new_v4(),
            text,
            timestamp: Utc::now(),
            cached,
            rejected,
        }
    }
}

/// The assistant service. Stateless across questions apart from the bounded
/// response cache.
pub struct ChatService {
    client: HttpClient,
    settings: ChatSettings,
    cache: BoundedResponseCache,
    metrics: Arc<Metrics>,
}

impl ChatService {
    pub fn new(client: HttpClient, settings: ChatSettings, metrics: Arc<Metrics>) -> Self {
        Self {
            client,
            settings,
            cache: BoundedResponseCache::default(),
            metrics,
        }
    }

    /// Whether the assistant should be exposed in the UI
    pub fn is_enabled(&self) -> bool {
        self.settings.enabled
    }

    /// Answer one question. Always returns displayable text: local
    /// rejections and upstream failures become fixed messages rather than
    /// errors.
    pub async fn ask(&self, question: &str) -> ChatAnswer {
        let question = question.trim();

        // Validating
        if question.chars().count() < 3 {
            return ChatAnswer::new(TOO_SHORT_REPLY.to_string(), false, true);
        }
        if !gate::is_islamic_question(question) {
            debug!("question rejected by topic gate");
            return ChatAnswer::new(REDIRECT_REPLY.to_string(), false, true);
        }

        let cache_key = question.to_lowercase();
        if let Some(hit) = self.cache.get(&cache_key) {
            self.metrics.record_cache_hit(SERVICE);
            return ChatAnswer::new(hit, true, false);
        }
        self.metrics.record_cache_miss(SERVICE);

        // Dispatched
        match self.dispatch(question).await {
            Ok(text) => {
                self.cache.put(cache_key, text.clone());
                ChatAnswer::new(text, false, false)
            }
            Err(err) => {
                warn!("chat dispatch failed: {}", err);
                self.metrics.record_upstream_error(SERVICE);
                ChatAnswer::new(err.apology().to_string(), false, false)
            }
        }
    }

    async fn dispatch(&self, question: &str) -> Result<String, ChatError> {
        let api_key = self.settings.api_key.as_deref().ok_or(ChatError::Auth)?;

        let body = json!({
            "model": self.settings.model,
            "messages": [
                {"role": "system", "content": SYSTEM_PROMPT},
                {"role": "user", "content": question}
            ],
            "max_tokens": self.settings.max_tokens,
            "temperature": self.settings.temperature,
            "top_p": self.settings.top_p,
            "frequency_penalty": self.settings.frequency_penalty,
            "presence_penalty": self.settings.presence_penalty,
        });

        let url = format!(
            "{}/chat/completions",
            self.settings.api_base.trim_end_matches('/')
        );
        let response = self.client.post_json(&url, &body, Some(api_key)).await?;

        match response.status {
            401 | 403 => return Err(ChatError::Auth),
            429 => return Err(ChatError::RateLimited),
            status if !(200..300).contains(&status) => {
                return Err(ChatError::Upstream { status })
            }
            _ => {}
        }

        let payload: serde_json::Value =
            response.json().map_err(|_| ChatError::Invalid)?;
        let content = payload
            .get("choices")
            .and_then(|c| c.get(0))
            .and_then(|c| c.get("message"))
            .and_then(|m| m.get("content"))
            .and_then(|c| c.as_str())
            .ok_or(ChatError::Invalid)?
            .trim()
            .to_string();

        // Degenerate one-word completions are treated as failures
        if content.chars().count() < 10 {
            return Err(ChatError::Invalid);
        }

        Ok(content)
    }

    /// Number of cached answers
    pub fn cached_answers(&self) -> usize {
        self.cache.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn settings_for(server: &MockServer) -> ChatSettings {
        ChatSettings {
            api_base: server.uri(),
            api_key: Some("test-token".to_string()),
            ..ChatSettings::default()
        }
    }

    fn service_for(server: &MockServer) -> ChatService {
        ChatService::new(
            HttpClient::new().unwrap(),
            settings_for(server),
            Arc::new(Metrics::new()),
        )
    }

    fn completion_body(text: &str) -> serde_json::Value {
        json!({"choices": [{"message": {"role": "assistant", "content": text}}]})
    }

    #[tokio::test]
    async fn test_off_topic_question_is_rejected_without_dispatch() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(completion_body("...")))
            .expect(0)
            .mount(&server)
            .await;

        let answer = service_for(&server).ask("Quel temps fait-il ?").await;

        assert!(answer.rejected);
        assert!(answer.text.contains("reformuler votre question"));
    }

    #[tokio::test]
    async fn test_too_short_question_is_rejected() {
        let server = MockServer::start().await;
        let answer = service_for(&server).ask("Ok").await;

        assert!(answer.rejected);
        assert_eq!(answer.text, TOO_SHORT_REPLY);
    }

    #[tokio::test]
    async fn test_accepted_question_is_dispatched_then_cached() {
        let server = MockServer::start().await;
        let reply = "Les cinq piliers de l'Islam sont l'attestation de foi, la prière, la zakat, le jeûne du Ramadan et le pèlerinage.";
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(completion_body(reply)))
            .expect(1)
            .mount(&server)
            .await;

        let service = service_for(&server);

        let first = service.ask("Quels sont les piliers de l'Islam ?").await;
        assert!(!first.rejected);
        assert!(!first.cached);
        assert_eq!(first.text, reply);

        // Same question again, differing only in surrounding whitespace
        let second = service.ask("  Quels sont les piliers de l'Islam ?  ").await;
        assert!(second.cached);
        assert_eq!(second.text, reply);
        assert_eq!(service.cached_answers(), 1);
    }

    #[tokio::test]
    async fn test_auth_failure_apology() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let answer = service_for(&server).ask("Que dit le Coran sur la patience ?").await;
        assert_eq!(answer.text, AUTH_APOLOGY);
    }

    #[tokio::test]
    async fn test_rate_limit_apology() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(429))
            .mount(&server)
            .await;

        let answer = service_for(&server).ask("Comment faire les ablutions ?").await;
        assert_eq!(answer.text, RATE_LIMIT_APOLOGY);
    }

    #[tokio::test]
    async fn test_missing_credential_short_circuits_to_auth_apology() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(completion_body("...")))
            .expect(0)
            .mount(&server)
            .await;

        let mut settings = settings_for(&server);
        settings.api_key = None;
        let service = ChatService::new(
            HttpClient::new().unwrap(),
            settings,
            Arc::new(Metrics::new()),
        );

        let answer = service.ask("Que dit le Coran sur la justice ?").await;
        assert_eq!(answer.text, AUTH_APOLOGY);
    }

    #[tokio::test]
    async fn test_degenerate_completion_is_invalid() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(completion_body("Oui.")))
            .mount(&server)
            .await;

        let service = service_for(&server);
        let answer = service.ask("Est-ce que le miel est halal ?").await;
        assert_eq!(answer.text, INVALID_APOLOGY);
        // Failures are never cached
        assert_eq!(service.cached_answers(), 0);
    }
}
