//! LLM Integration Module
//!
//! Supports two hosted backends over plain HTTPS:
//! - Google Gemini (`generateContent`)
//! - OpenAI-compatible chat completions APIs
//!
//! Providers are blocking; the async adapter in [`crate::ai`] moves calls
//! onto the blocking pool.

use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

use crate::config::{AiConfig, ProviderKind};
use crate::error::{AiError, AiResult};

/// LLM provider trait
pub trait LlmProvider: Send + Sync {
    /// Generate a response for a prompt
    fn generate(&self, prompt: &str, max_tokens: usize) -> AiResult<String>;

    /// Get provider name
    fn name(&self) -> &str;
}

fn map_ureq_error(err: ureq::Error) -> AiError {
    match err {
        ureq::Error::Status(code, response) => {
            let body = response.into_string().unwrap_or_default();
            let snippet: String = body.chars().take(200).collect();
            AiError::Request(format!("HTTP {}: {}", code, snippet))
        }
        ureq::Error::Transport(t) => AiError::Request(t.to_string()),
    }
}

fn agent(config: &AiConfig) -> ureq::Agent {
    ureq::AgentBuilder::new().timeout(config.timeout).build()
}

// ============ Gemini ============

#[derive(Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
}

#[derive(Deserialize)]
struct GeminiCandidate {
    content: Option<GeminiContent>,
}

#[derive(Deserialize)]
struct GeminiContent {
    #[serde(default)]
    parts: Vec<GeminiPart>,
}

#[derive(Deserialize)]
struct GeminiPart {
    #[serde(default)]
    text: Option<String>,
}

/// Google Gemini provider
pub struct GeminiProvider {
    model: String,
    api_key: String,
    base_url: String,
    agent: ureq::Agent,
}

impl GeminiProvider {
    pub const DEFAULT_BASE_URL: &'static str = "https://generativelanguage.googleapis.com/v1beta";

    pub fn new(config: &AiConfig, api_key: &str) -> Self {
        Self {
            model: config.model.clone(),
            api_key: api_key.to_string(),
            base_url: config
                .base_url
                .clone()
                .unwrap_or_else(|| Self::DEFAULT_BASE_URL.to_string()),
            agent: agent(config),
        }
    }
}

impl LlmProvider for GeminiProvider {
    fn generate(&self, prompt: &str, max_tokens: usize) -> AiResult<String> {
        let url = format!(
            "{}/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        );
        let body = json!({
            "contents": [{"role": "user", "parts": [{"text": prompt}]}],
            "generationConfig": {
                "maxOutputTokens": max_tokens,
                "temperature": 0.7
            }
        });

        let response: GeminiResponse = self
            .agent
            .post(&url)
            .set("x-goog-api-key", &self.api_key)
            .send_json(body)
            .map_err(map_ureq_error)?
            .into_json()
            .map_err(|e| AiError::Request(format!("Failed to parse response: {}", e)))?;

        let text: String = response
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect())
            .unwrap_or_default();

        if text.trim().is_empty() {
            Err(AiError::EmptyResponse)
        } else {
            Ok(text)
        }
    }

    fn name(&self) -> &str {
        "gemini"
    }
}

// ============ OpenAI-compatible ============

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Deserialize)]
struct ChatMessage {
    #[serde(default)]
    content: Option<String>,
}

/// OpenAI-compatible API provider
pub struct OpenAIProvider {
    model: String,
    api_key: String,
    base_url: String,
    agent: ureq::Agent,
}

impl OpenAIProvider {
    pub const DEFAULT_BASE_URL: &'static str = "https://api.openai.com/v1";

    pub fn new(config: &AiConfig, api_key: &str) -> Self {
        Self {
            model: config.model.clone(),
            api_key: api_key.to_string(),
            base_url: config
                .base_url
                .clone()
                .unwrap_or_else(|| Self::DEFAULT_BASE_URL.to_string()),
            agent: agent(config),
        }
    }
}

impl LlmProvider for OpenAIProvider {
    fn generate(&self, prompt: &str, max_tokens: usize) -> AiResult<String> {
        let url = format!("{}/chat/completions", self.base_url.trim_end_matches('/'));
        let body = json!({
            "model": self.model,
            "messages": [{"role": "user", "content": prompt}],
            "max_tokens": max_tokens
        });

        let response: ChatResponse = self
            .agent
            .post(&url)
            .set("Authorization", &format!("Bearer {}", self.api_key))
            .send_json(body)
            .map_err(map_ureq_error)?
            .into_json()
            .map_err(|e| AiError::Request(format!("Failed to parse response: {}", e)))?;

        let content = response
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .unwrap_or_default();

        if content.trim().is_empty() {
            Err(AiError::EmptyResponse)
        } else {
            Ok(content)
        }
    }

    fn name(&self) -> &str {
        "openai"
    }
}

/// Build the configured provider.
///
/// Returns `None` when the provider is disabled or no usable credential is
/// present; the adapter then runs in fallback mode.
pub fn provider_from_config(config: &AiConfig) -> Option<Arc<dyn LlmProvider>> {
    if config.provider == ProviderKind::None {
        tracing::info!("AI provider disabled, using fallback mode");
        return None;
    }

    let Some(key) = config.api_key() else {
        tracing::warn!(
            provider = ?config.provider,
            env = config.provider.api_key_env().unwrap_or_default(),
            "⚠️ No API key configured, using fallback mode"
        );
        return None;
    };

    let provider: Arc<dyn LlmProvider> = match config.provider {
        ProviderKind::Gemini => Arc::new(GeminiProvider::new(config, key)),
        ProviderKind::Openai => Arc::new(OpenAIProvider::new(config, key)),
        ProviderKind::None => return None,
    };
    tracing::info!(provider = provider.name(), model = %config.model, "✅ AI provider initialized");
    Some(provider)
}
