//! Integration tests for the mind map API
//!
//! Drives the full router in-process with a scripted LLM provider, so every
//! path (AI success, AI failure, AI disabled) is exercised without network.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::response::Response;
use axum::Router;
use mindmap_ai::{
    create_router, AiClient, AiError, AppState, LlmProvider, ServerConfig,
};
use serde_json::{json, Value};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tempfile::TempDir;
use tower::ServiceExt;

const BOUNDARY: &str = "mindmap-test-boundary";

/// Provider that replays a fixed answer (or fails) and counts calls
struct ScriptedProvider {
    reply: Option<String>,
    calls: AtomicUsize,
    /// Upload dir to inspect while "generating"
    watch_dir: Option<PathBuf>,
    staged_seen: Mutex<Vec<usize>>,
}

impl ScriptedProvider {
    fn replying(text: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Some(text.to_string()),
            calls: AtomicUsize::new(0),
            watch_dir: None,
            staged_seen: Mutex::new(Vec::new()),
        })
    }

    fn failing() -> Arc<Self> {
        Arc::new(Self {
            reply: None,
            calls: AtomicUsize::new(0),
            watch_dir: None,
            staged_seen: Mutex::new(Vec::new()),
        })
    }

    fn watching(mut self: Arc<Self>, dir: &Path) -> Arc<Self> {
        Arc::get_mut(&mut self).unwrap().watch_dir = Some(dir.to_path_buf());
        self
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl LlmProvider for ScriptedProvider {
    fn generate(&self, _prompt: &str, _max_tokens: usize) -> Result<String, AiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(dir) = &self.watch_dir {
            self.staged_seen.lock().unwrap().push(count_files(dir));
        }
        match &self.reply {
            Some(text) => Ok(text.clone()),
            None => Err(AiError::Request("simulated network failure".to_string())),
        }
    }

    fn name(&self) -> &str {
        "scripted"
    }
}

/// Test context that keeps the upload dir alive
struct TestContext {
    app: Router,
    upload_dir: PathBuf,
    _dir: TempDir,
}

impl TestContext {
    fn new(provider: Option<Arc<ScriptedProvider>>) -> Self {
        let dir = TempDir::new().unwrap();
        Self::in_dir(dir, provider)
    }

    fn in_dir(dir: TempDir, provider: Option<Arc<ScriptedProvider>>) -> Self {
        let upload_dir = dir.path().join("uploads");
        let config = ServerConfig {
            upload_dir: upload_dir.clone(),
            ..ServerConfig::default()
        };
        let provider = provider.map(|p| p as Arc<dyn LlmProvider>);
        let ai = AiClient::new(provider, 1024, config.document_char_limit);
        let app = create_router(Arc::new(AppState::new(config, ai)));
        Self {
            app,
            upload_dir,
            _dir: dir,
        }
    }

    async fn post_json(&self, uri: &str, body: Value) -> Response {
        self.app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header("content-type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    async fn post_file(&self, file_name: &str, content: &[u8], chart_type: Option<&str>) -> Response {
        self.app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/generate-mindmap-file")
                    .header(
                        "content-type",
                        format!("multipart/form-data; boundary={}", BOUNDARY),
                    )
                    .body(Body::from(multipart_body(file_name, content, chart_type)))
                    .unwrap(),
            )
            .await
            .unwrap()
    }
}

fn multipart_body(file_name: &str, content: &[u8], chart_type: Option<&str>) -> Vec<u8> {
    let mut body = Vec::new();
    body.extend_from_slice(
        format!(
            "--{b}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"{f}\"\r\nContent-Type: text/plain\r\n\r\n",
            b = BOUNDARY,
            f = file_name
        )
        .as_bytes(),
    );
    body.extend_from_slice(content);
    body.extend_from_slice(b"\r\n");
    if let Some(chart) = chart_type {
        body.extend_from_slice(
            format!(
                "--{b}\r\nContent-Disposition: form-data; name=\"chartType\"\r\n\r\n{c}\r\n",
                b = BOUNDARY,
                c = chart
            )
            .as_bytes(),
        );
    }
    body.extend_from_slice(format!("--{}--\r\n", BOUNDARY).as_bytes());
    body
}

fn count_files(dir: &Path) -> usize {
    std::fs::read_dir(dir).map(|d| d.count()).unwrap_or(0)
}

async fn json_body(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn source(response: &Response) -> String {
    response.headers()["x-mindmap-source"]
        .to_str()
        .unwrap()
        .to_string()
}

/// One root without parent; every other parent resolves
fn assert_tree(map: &Value) {
    let nodes = map["nodes"].as_array().expect("nodes array");
    let roots: Vec<&Value> = nodes
        .iter()
        .filter(|n| n["level"] == 0 && n.get("parentId").is_none())
        .collect();
    assert_eq!(roots.len(), 1, "exactly one root");

    let ids: HashSet<&str> = nodes.iter().map(|n| n["id"].as_str().unwrap()).collect();
    for node in nodes.iter().filter(|n| n["level"] != 0) {
        let parent = node["parentId"].as_str().expect("parentId on non-root");
        assert!(ids.contains(parent), "parent {} resolves", parent);
    }
}

const AI_MAP: &str = r#"Here you go:
```json
{
  "title": "Photosynthesis Explained",
  "chartType": "radial",
  "nodes": [
    {"id": "1", "text": "Photosynthesis", "level": 0, "description": "How plants make food"},
    {"id": "2", "text": "Light Reactions", "level": 1, "parentId": "1", "description": "Thylakoid stage"},
    {"id": "3", "text": "Calvin Cycle", "level": 1, "parentId": "1", "description": "Carbon fixation {stroma}"},
    {"id": "4", "text": "ATP", "level": 2, "parentId": "2", "description": "Energy carrier"}
  ]
}
```"#;

const AI_DETAILS: &str = r#"{
  "summary": "Backpropagation computes gradients layer by layer.",
  "keyPoints": ["Uses the chain rule", "Runs after the forward pass"],
  "detailedInfo": {
    "definition": "An algorithm for computing gradients",
    "applications": ["Training neural networks"],
    "benefits": ["Efficient"],
    "challenges": ["Vanishing gradients"],
    "examples": ["MLP training"],
    "relatedConcepts": ["Gradient descent"]
  },
  "learningPath": {
    "prerequisites": ["Calculus"],
    "nextSteps": ["Optimizers"],
    "timeEstimate": "1 week",
    "difficulty": "advanced",
    "resources": ["Deep Learning book"]
  },
  "practicalInfo": {
    "howToImplement": ["Use autograd"],
    "commonMistakes": ["Wrong shapes"],
    "bestPractices": ["Gradient checking"],
    "tools": ["PyTorch"]
  }
}"#;

// ============ generate-mindmap ============

#[tokio::test]
async fn test_prompt_fallback_scenario() {
    let ctx = TestContext::new(None);
    let response = ctx
        .post_json(
            "/api/generate-mindmap",
            json!({"prompt": "machine learning basics", "chartType": "hierarchical"}),
        )
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(source(&response), "fallback");
    let map = json_body(response).await;
    assert_eq!(map["chartType"], "hierarchical");
    let count = map["nodes"].as_array().unwrap().len();
    assert!((13..=25).contains(&count), "node count {}", count);
    assert_eq!(map["nodes"][0]["text"], "machine learning basics");
    assert_tree(&map);
}

#[tokio::test]
async fn test_missing_prompt_is_rejected_without_ai_call() {
    let provider = ScriptedProvider::replying(AI_MAP);
    let ctx = TestContext::new(Some(provider.clone()));

    let response = ctx.post_json("/api/generate-mindmap", json!({})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(response).await, json!({"error": "Prompt is required"}));

    let response = ctx
        .post_json("/api/generate-mindmap", json!({"prompt": "  ", "chartType": "radial"}))
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    assert_eq!(provider.calls(), 0);
}

#[tokio::test]
async fn test_prompt_uses_ai_result() {
    let provider = ScriptedProvider::replying(AI_MAP);
    let ctx = TestContext::new(Some(provider.clone()));

    let response = ctx
        .post_json(
            "/api/generate-mindmap",
            json!({"prompt": "photosynthesis", "chartType": "network"}),
        )
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(source(&response), "ai");
    let map = json_body(response).await;
    assert_eq!(map["title"], "Photosynthesis Explained");
    // Requested chart type wins over the model's echo
    assert_eq!(map["chartType"], "network");
    assert_eq!(map["nodes"].as_array().unwrap().len(), 4);
    assert_eq!(map["nodes"][0]["x"], 50.0);
    assert!(map["nodes"][3]["y"].is_number());
    assert_tree(&map);
    assert_eq!(provider.calls(), 1);
}

#[tokio::test]
async fn test_ai_failure_falls_back_once() {
    let provider = ScriptedProvider::failing();
    let ctx = TestContext::new(Some(provider.clone()));

    let response = ctx
        .post_json("/api/generate-mindmap", json!({"prompt": "ocean currents"}))
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(source(&response), "fallback");
    let map = json_body(response).await;
    assert_eq!(map["chartType"], "hierarchical");
    assert_tree(&map);
    // Single attempt, no retry
    assert_eq!(provider.calls(), 1);
}

#[tokio::test]
async fn test_unparseable_and_malformed_ai_output_fall_back() {
    for reply in [
        "I cannot help with that.",
        "{\"title\": \"broken\", \"nodes\": [",
        r#"{"title": "T", "nodes": [{"id": "1", "text": "A", "level": 0}, {"id": "2", "text": "B", "level": 1, "parentId": "7"}]}"#,
    ] {
        let ctx = TestContext::new(Some(ScriptedProvider::replying(reply)));
        let response = ctx
            .post_json("/api/generate-mindmap", json!({"prompt": "volcanoes"}))
            .await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(source(&response), "fallback");
        let map = json_body(response).await;
        assert_eq!(map["nodes"][0]["text"], "volcanoes");
        assert_tree(&map);
    }
}

// ============ node-details ============

#[tokio::test]
async fn test_node_details_fallback_scenario() {
    let ctx = TestContext::new(None);
    let response = ctx
        .post_json("/api/node-details", json!({"nodeText": "Neural Networks"}))
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    let details = json_body(response).await;
    assert!(details["summary"].as_str().unwrap().contains("Neural Networks"));
    assert!(details["detailedInfo"]["applications"].as_array().unwrap().len() >= 5);
    assert!(!details["keyPoints"].as_array().unwrap().is_empty());
    assert_eq!(details["learningPath"]["difficulty"], "Intermediate");
}

#[tokio::test]
async fn test_node_details_from_ai() {
    let provider = ScriptedProvider::replying(AI_DETAILS);
    let ctx = TestContext::new(Some(provider.clone()));
    let response = ctx
        .post_json(
            "/api/node-details",
            json!({"nodeText": "Backpropagation", "parentContext": "Neural Networks"}),
        )
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(source(&response), "ai");
    let details = json_body(response).await;
    assert_eq!(details["learningPath"]["difficulty"], "Advanced");
    assert_eq!(details["keyPoints"].as_array().unwrap().len(), 2);
    assert_eq!(provider.calls(), 1);
}

#[tokio::test]
async fn test_node_details_invalid_difficulty_falls_back() {
    let reply = AI_DETAILS.replace("\"advanced\"", "\"Expert\"");
    let ctx = TestContext::new(Some(ScriptedProvider::replying(&reply)));
    let response = ctx
        .post_json("/api/node-details", json!({"nodeText": "Backpropagation"}))
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(source(&response), "fallback");
    let details = json_body(response).await;
    let difficulty = details["learningPath"]["difficulty"].as_str().unwrap();
    assert!(["Beginner", "Intermediate", "Advanced"].contains(&difficulty));
}

#[tokio::test]
async fn test_missing_node_text_is_rejected_without_ai_call() {
    let provider = ScriptedProvider::replying(AI_DETAILS);
    let ctx = TestContext::new(Some(provider.clone()));

    let response = ctx
        .post_json("/api/node-details", json!({"parentContext": "Biology"}))
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(response).await["error"], "Node text is required");
    assert_eq!(provider.calls(), 0);
}

// ============ generate-mindmap-file ============

#[tokio::test]
async fn test_file_fallback_removes_upload() {
    let dir = TempDir::new().unwrap();
    let provider = ScriptedProvider::failing().watching(&dir.path().join("uploads"));
    let ctx = TestContext::in_dir(dir, Some(provider.clone()));

    let response = ctx
        .post_file("lecture-notes.txt", b"Cells are the basic unit of life.", Some("radial"))
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(source(&response), "fallback");
    let map = json_body(response).await;
    assert_eq!(map["title"], "Analysis of lecture-notes.txt");
    assert_eq!(map["chartType"], "radial");
    assert_eq!(map["nodes"][0]["text"], "lecture-notes");
    assert_eq!(map["nodes"].as_array().unwrap().len(), 6);
    assert_tree(&map);

    // The file was staged while the model ran, and is gone afterwards
    assert_eq!(*provider.staged_seen.lock().unwrap(), vec![1]);
    assert_eq!(count_files(&ctx.upload_dir), 0);
}

#[tokio::test]
async fn test_file_ai_success_removes_upload() {
    let dir = TempDir::new().unwrap();
    let provider = ScriptedProvider::replying(AI_MAP).watching(&dir.path().join("uploads"));
    let ctx = TestContext::in_dir(dir, Some(provider.clone()));

    let response = ctx.post_file("biology.md", "Chloroplasts … 🌱".as_bytes(), None).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(source(&response), "ai");
    let map = json_body(response).await;
    assert_eq!(map["chartType"], "hierarchical");
    assert_tree(&map);

    assert_eq!(*provider.staged_seen.lock().unwrap(), vec![1]);
    assert_eq!(count_files(&ctx.upload_dir), 0);
}

#[tokio::test]
async fn test_file_without_ai_reads_binary_as_text() {
    let ctx = TestContext::new(None);
    let response = ctx
        .post_file("scan.pdf", &[0x25, 0x50, 0x44, 0x46, 0xff, 0xfe, 0x00], None)
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    let map = json_body(response).await;
    assert_eq!(map["nodes"][0]["text"], "scan");
    assert_eq!(count_files(&ctx.upload_dir), 0);
}

#[tokio::test]
async fn test_missing_file_is_rejected_without_ai_call() {
    let provider = ScriptedProvider::replying(AI_MAP);
    let ctx = TestContext::new(Some(provider.clone()));

    let body = format!(
        "--{b}\r\nContent-Disposition: form-data; name=\"chartType\"\r\n\r\nradial\r\n--{b}--\r\n",
        b = BOUNDARY
    );
    let response = ctx
        .app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/generate-mindmap-file")
                .header(
                    "content-type",
                    format!("multipart/form-data; boundary={}", BOUNDARY),
                )
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(response).await["error"], "File is required");
    assert_eq!(provider.calls(), 0);
}

#[tokio::test]
async fn test_oversized_upload_is_rejected() {
    let provider = ScriptedProvider::replying(AI_MAP);
    let ctx = TestContext::new(Some(provider.clone()));

    let content = vec![b'a'; 10 * 1024 * 1024 + 1];
    let response = ctx.post_file("big.txt", &content, None).await;

    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(provider.calls(), 0);
    assert_eq!(count_files(&ctx.upload_dir), 0);
}

// ============ health ============

#[tokio::test]
async fn test_health_reports_configured_provider() {
    let ctx = TestContext::new(Some(ScriptedProvider::replying(AI_MAP)));
    let response = ctx
        .app
        .clone()
        .oneshot(Request::builder().uri("/api/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let health = json_body(response).await;
    assert_eq!(health["aiStatus"], "connected");
    assert_eq!(health["aiProvider"], "scripted");
}
