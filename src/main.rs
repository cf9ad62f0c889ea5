//! Mind Map AI server

use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

use mindmap_ai::config::{default_upload_dir, AiConfig, ProviderKind, ServerConfig};

/// AI-powered mind map generator
#[derive(Parser, Debug)]
#[command(name = "mindmap-ai", version, about, long_about = None)]
struct Args {
    /// Server bind address
    #[arg(long, env = "MINDMAP_HOST", default_value = "127.0.0.1")]
    host: String,

    /// Server port
    #[arg(short, long, env = "PORT", default_value_t = 5000)]
    port: u16,

    /// Directory for staged uploads
    #[arg(long, env = "MINDMAP_UPLOAD_DIR")]
    upload_dir: Option<PathBuf>,

    /// Maximum upload size in megabytes
    #[arg(long, env = "MINDMAP_MAX_UPLOAD_MB", default_value_t = 10)]
    max_upload_mb: usize,

    /// Document characters kept in the prompt
    #[arg(long, env = "MINDMAP_DOCUMENT_CHAR_LIMIT", default_value_t = 15_000)]
    document_char_limit: usize,

    /// LLM backend
    #[arg(long, env = "MINDMAP_AI_PROVIDER", value_enum, default_value_t = ProviderKind::Gemini)]
    provider: ProviderKind,

    /// Model name (defaults per provider)
    #[arg(long, env = "MINDMAP_AI_MODEL")]
    model: Option<String>,

    /// API key; falls back to GEMINI_API_KEY / OPENAI_API_KEY
    #[arg(long, env = "MINDMAP_AI_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Override the provider base URL
    #[arg(long, env = "MINDMAP_AI_BASE_URL")]
    ai_base_url: Option<String>,

    /// Per-request timeout for the model call
    #[arg(long, env = "MINDMAP_AI_TIMEOUT_SECS", default_value_t = 60)]
    ai_timeout_secs: u64,

    /// Log level, used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    log_level: String,
}

impl Args {
    fn into_config(self) -> ServerConfig {
        let ai = AiConfig {
            provider: self.provider,
            model: self
                .model
                .unwrap_or_else(|| self.provider.default_model().to_string()),
            api_key: self.api_key,
            base_url: self.ai_base_url,
            timeout: Duration::from_secs(self.ai_timeout_secs),
            ..AiConfig::default()
        }
        .with_env_credentials();

        ServerConfig {
            host: self.host,
            port: self.port,
            upload_dir: self.upload_dir.unwrap_or_else(default_upload_dir),
            max_upload_bytes: self.max_upload_mb * 1024 * 1024,
            document_char_limit: self.document_char_limit,
            ai,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("mindmap_ai={0},tower_http={0}", args.log_level)));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = args.into_config();
    tracing::info!(
        "Starting mindmap-ai v{} (uploads in {:?})",
        env!("CARGO_PKG_VERSION"),
        config.upload_dir
    );

    mindmap_ai::start_server(config).await
}
