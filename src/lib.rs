//! # Mind Map AI
//!
//! Turns a text prompt or an uploaded document into a mind map: a tree of
//! labeled nodes with descriptions.
//!
//! ## Architecture
//! - **AI Client**: prompt building, one model call, JSON extraction and checks
//! - **Mock Generator**: deterministic content used whenever the AI fails
//! - **Handlers**: validate input, attempt AI, fall back, reply with JSON
//!
//! A missing credential never stops the server; every AI-backed endpoint
//! simply answers from the mock generator.

pub mod ai;
pub mod config;
pub mod content;
pub mod error;
pub mod extract;
pub mod fallback;
pub mod identity;
pub mod llm;
pub mod mindmap;
pub mod mock;
pub mod prompts;
pub mod server;
pub mod types;
pub mod upload;

pub use ai::AiClient;
pub use config::{AiConfig, ProviderKind, ServerConfig};
pub use error::{AiError, ApiError};
pub use fallback::{with_fallback, Generated, Source};
pub use identity::{IdentityProvider, MockIdentity};
pub use llm::{provider_from_config, GeminiProvider, LlmProvider, OpenAIProvider};
pub use mindmap::{apply_layout, ChartType, MindMap, MindMapNode, MindMapRecord, TreeError};
pub use server::{create_router, start_server, AppState};
pub use types::*;
