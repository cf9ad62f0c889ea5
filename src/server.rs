//! Mind Map HTTP Server
//!
//! JSON API for mind map generation. Every AI-backed endpoint tries the
//! configured model once and falls back to deterministic content.
//!
//! ## Endpoints
//! - POST /api/generate-mindmap - Mind map from a text prompt
//! - POST /api/generate-mindmap-file - Mind map from an uploaded document (multipart)
//! - POST /api/node-details - Expanded content for one node
//! - GET /api/health - Liveness and AI status
//! - GET /api/faq - Static FAQ
//! - GET /api/use-cases - Static use cases

use axum::{
    extract::{
        multipart::MultipartRejection, rejection::JsonRejection, DefaultBodyLimit, Multipart,
        State,
    },
    http::Method,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;

use crate::ai::AiClient;
use crate::config::ServerConfig;
use crate::content::{FAQS, USE_CASES};
use crate::error::ApiError;
use crate::fallback::{with_fallback, Generated};
use crate::llm::provider_from_config;
use crate::mindmap::{apply_layout, ChartType, MindMap};
use crate::mock;
use crate::types::{Faq, HealthReport, NodeDetails, UseCase};
use crate::upload::TempUpload;

/// Response header naming the branch that produced the body (`ai` or `fallback`)
pub const SOURCE_HEADER: &str = "x-mindmap-source";

/// Room for multipart boundaries and the non-file fields
const MULTIPART_OVERHEAD: usize = 64 * 1024;

const FILE_ERROR: &str = "Failed to generate mindmap from file";

/// Server state
pub struct AppState {
    pub ai: AiClient,
    pub config: ServerConfig,
}

impl AppState {
    pub fn new(config: ServerConfig, ai: AiClient) -> Self {
        Self { ai, config }
    }

    /// State with the provider described by `config.ai`
    pub fn from_config(config: ServerConfig) -> Self {
        let provider = provider_from_config(&config.ai);
        let ai = AiClient::new(provider, config.ai.max_tokens, config.document_char_limit);
        Self::new(config, ai)
    }
}

/// Prompt generation request
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    prompt: Option<String>,
    chart_type: Option<String>,
}

/// Node detail request
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeDetailsRequest {
    node_text: Option<String>,
    parent_context: Option<String>,
    document_context: Option<String>,
}

/// Create the router
pub fn create_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any);

    let body_limit = state.config.max_upload_bytes + MULTIPART_OVERHEAD;

    let api = Router::new()
        .route("/generate-mindmap", post(generate_mindmap_handler))
        .route("/generate-mindmap-file", post(generate_mindmap_file_handler))
        .route("/node-details", post(node_details_handler))
        .route("/health", get(health_handler))
        .route("/faq", get(faq_handler))
        .route("/use-cases", get(use_cases_handler))
        .layer(DefaultBodyLimit::max(body_limit));

    Router::new()
        .nest("/api", api)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Trimmed, non-empty value or a 400 with `message`
fn required<'a>(value: Option<&'a str>, message: &str) -> Result<&'a str, ApiError> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .ok_or_else(|| ApiError::bad_request(message))
}

/// Optional context: blank counts as absent
fn optional(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn generated_response<T: Serialize>(generated: Generated<T>) -> Response {
    (
        [(SOURCE_HEADER, generated.source.as_str())],
        Json(generated.value),
    )
        .into_response()
}

/// Mind map from a text prompt
async fn generate_mindmap_handler(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<GenerateRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(req) = payload?;
    let prompt = required(req.prompt.as_deref(), "Prompt is required")?;
    let chart_type = ChartType::from_hint(req.chart_type.as_deref());

    info!(prompt, chart_type = %chart_type, "🔄 Generating mindmap");

    let mut generated = with_fallback(
        "generate-mindmap",
        state.ai.mind_map(prompt, chart_type),
        || mock::mind_map(prompt, chart_type),
    )
    .await;
    apply_layout(&mut generated.value);

    Ok(generated_response(generated))
}

/// Mind map from an uploaded document
async fn generate_mindmap_file_handler(
    State(state): State<Arc<AppState>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Response, ApiError> {
    let mut multipart = multipart
        .map_err(|e| ApiError::bad_request("File is required").with_details(e.body_text()))?;

    let mut file = None;
    let mut chart_hint = None;
    while let Some(field) = multipart.next_field().await? {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("file") => {
                let file_name = field
                    .file_name()
                    .map(str::to_string)
                    .unwrap_or_else(|| "upload.txt".to_string());
                let data = field.bytes().await?;
                if data.len() > state.config.max_upload_bytes {
                    return Err(ApiError::payload_too_large(format!(
                        "File exceeds the {} byte upload limit",
                        state.config.max_upload_bytes
                    )));
                }
                file = Some((file_name, data));
            }
            Some("chartType") => chart_hint = Some(field.text().await?),
            _ => {}
        }
    }

    let Some((file_name, data)) = file else {
        return Err(ApiError::bad_request("File is required"));
    };
    let chart_type = ChartType::from_hint(chart_hint.as_deref());

    info!(file = %file_name, bytes = data.len(), chart_type = %chart_type, "🔄 Generating mindmap from file");

    let upload = TempUpload::write(&state.config.upload_dir, &file_name, &data)
        .await
        .map_err(|e| ApiError::internal(FILE_ERROR, e))?;

    let outcome = mind_map_from_upload(&state, &upload, chart_type).await;
    upload
        .remove()
        .await
        .map_err(|e| ApiError::internal(FILE_ERROR, e))?;

    let mut generated = outcome?;
    apply_layout(&mut generated.value);
    Ok(generated_response(generated))
}

async fn mind_map_from_upload(
    state: &AppState,
    upload: &TempUpload,
    chart_type: ChartType,
) -> Result<Generated<MindMap>, ApiError> {
    let text = upload
        .read_text()
        .await
        .map_err(|e| ApiError::internal(FILE_ERROR, e))?;
    let file_name = upload.original_name();

    Ok(with_fallback(
        "generate-mindmap-file",
        state.ai.document_mind_map(file_name, &text, chart_type),
        || mock::document_mind_map(file_name, chart_type),
    )
    .await)
}

/// Detail content for a single node
async fn node_details_handler(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<NodeDetailsRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(req) = payload?;
    let node_text = required(req.node_text.as_deref(), "Node text is required")?;
    let parent_context = optional(req.parent_context.as_deref());
    let document_context = optional(req.document_context.as_deref());

    info!(node = node_text, "🔄 Generating node details");

    let generated: Generated<NodeDetails> = with_fallback(
        "node-details",
        state.ai.node_details(node_text, parent_context, document_context),
        || mock::node_details(node_text),
    )
    .await;

    Ok(generated_response(generated))
}

/// Health check
async fn health_handler(State(state): State<Arc<AppState>>) -> Json<HealthReport> {
    let ai_status = if state.ai.is_configured() {
        "connected"
    } else {
        "fallback mode"
    };

    Json(HealthReport::new(ai_status, state.ai.provider_name()))
}

async fn faq_handler() -> Json<&'static [Faq]> {
    Json(FAQS)
}

async fn use_cases_handler() -> Json<&'static [UseCase]> {
    Json(USE_CASES)
}

/// Start the server
pub async fn start_server(config: ServerConfig) -> anyhow::Result<()> {
    tokio::fs::create_dir_all(&config.upload_dir).await?;

    let addr = config.addr();
    let state = Arc::new(AppState::from_config(config));
    let ai_status = if state.ai.is_configured() {
        "AI provider ready"
    } else {
        "fallback mode"
    };

    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("🚀 Mind map server running on http://{}", addr);
    info!("🤖 AI status: {}", ai_status);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("Shutdown signal received");
        })
        .await?;

    Ok(())
}
