//! Server and AI provider configuration

use std::path::PathBuf;
use std::time::Duration;

/// Which LLM backend to talk to
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ProviderKind {
    /// Google Gemini `generateContent`
    Gemini,
    /// Any OpenAI-compatible chat completions endpoint
    Openai,
    /// Always use fallback content
    None,
}

impl ProviderKind {
    pub fn default_model(&self) -> &'static str {
        match self {
            ProviderKind::Gemini => "gemini-1.5-flash",
            ProviderKind::Openai => "gpt-4o-mini",
            ProviderKind::None => "",
        }
    }

    /// Provider-specific credential variable, consulted when no explicit key is given
    pub fn api_key_env(&self) -> Option<&'static str> {
        match self {
            ProviderKind::Gemini => Some("GEMINI_API_KEY"),
            ProviderKind::Openai => Some("OPENAI_API_KEY"),
            ProviderKind::None => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AiConfig {
    pub provider: ProviderKind,
    pub model: String,
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub timeout: Duration,
    pub max_tokens: usize,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            provider: ProviderKind::Gemini,
            model: ProviderKind::Gemini.default_model().to_string(),
            api_key: None,
            base_url: None,
            timeout: Duration::from_secs(60),
            max_tokens: 8192,
        }
    }
}

impl AiConfig {
    /// Fill a missing key from the provider's own environment variable
    pub fn with_env_credentials(mut self) -> Self {
        if self.api_key().is_none() {
            self.api_key = self
                .provider
                .api_key_env()
                .and_then(|var| std::env::var(var).ok());
        }
        self
    }

    /// The credential, if present and non-blank
    pub fn api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
    }
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Where uploads are staged while a request is handled
    pub upload_dir: PathBuf,
    pub max_upload_bytes: usize,
    /// Document text beyond this many characters is cut before prompting
    pub document_char_limit: usize,
    pub ai: AiConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
            upload_dir: default_upload_dir(),
            max_upload_bytes: 10 * 1024 * 1024, // 10MB
            document_char_limit: 15_000,
            ai: AiConfig::default(),
        }
    }
}

impl ServerConfig {
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

pub fn default_upload_dir() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("mindmap-ai")
        .join("uploads")
}
