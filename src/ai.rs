//! AI client adapter
//!
//! One attempt per call: build the prompt, run the provider on the blocking
//! pool, extract the JSON object, decode it into the expected type and check
//! its invariants. Any failure along the way is an [`AiError`]; the adapter
//! never retries and never returns partial results.

use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Instant;

use crate::error::{AiError, AiResult};
use crate::extract::extract_json_object;
use crate::llm::LlmProvider;
use crate::mindmap::{ChartType, MindMap};
use crate::prompts;
use crate::types::NodeDetails;

#[derive(Clone)]
pub struct AiClient {
    provider: Option<Arc<dyn LlmProvider>>,
    max_tokens: usize,
    document_char_limit: usize,
}

impl AiClient {
    pub fn new(
        provider: Option<Arc<dyn LlmProvider>>,
        max_tokens: usize,
        document_char_limit: usize,
    ) -> Self {
        Self {
            provider,
            max_tokens,
            document_char_limit,
        }
    }

    /// Client that always fails with [`AiError::NotConfigured`]
    pub fn disabled() -> Self {
        Self::new(None, 0, 0)
    }

    pub fn is_configured(&self) -> bool {
        self.provider.is_some()
    }

    pub fn provider_name(&self) -> Option<&str> {
        self.provider.as_deref().map(|p| p.name())
    }

    /// Raw model text for a prompt
    pub async fn complete(&self, prompt: String) -> AiResult<String> {
        let provider = self.provider.clone().ok_or(AiError::NotConfigured)?;
        let max_tokens = self.max_tokens;
        let started = Instant::now();
        let prompt_chars = prompt.chars().count();

        let text = tokio::task::spawn_blocking(move || provider.generate(&prompt, max_tokens))
            .await
            .map_err(|e| AiError::Request(format!("generation task failed: {}", e)))??;

        tracing::debug!(
            prompt_chars,
            response_chars = text.chars().count(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "model call finished"
        );
        Ok(text)
    }

    /// Run a prompt and decode the first JSON object of the answer as `T`
    pub async fn generate_json<T: DeserializeOwned>(&self, prompt: String) -> AiResult<T> {
        let text = self.complete(prompt).await?;
        let value = extract_json_object(&text)?;
        serde_json::from_value(value).map_err(|e| AiError::Schema(e.to_string()))
    }

    pub async fn mind_map(&self, topic: &str, chart_type: ChartType) -> AiResult<MindMap> {
        let prompt = prompts::mind_map_prompt(topic, chart_type);
        self.checked_map(prompt, chart_type).await
    }

    pub async fn document_mind_map(
        &self,
        file_name: &str,
        content: &str,
        chart_type: ChartType,
    ) -> AiResult<MindMap> {
        let prompt =
            prompts::document_prompt(file_name, content, chart_type, self.document_char_limit);
        self.checked_map(prompt, chart_type).await
    }

    pub async fn node_details(
        &self,
        node_text: &str,
        parent_context: Option<&str>,
        document_context: Option<&str>,
    ) -> AiResult<NodeDetails> {
        let prompt = prompts::node_details_prompt(node_text, parent_context, document_context);
        let details: NodeDetails = self.generate_json(prompt).await?;
        details.validate().map_err(AiError::Invalid)?;
        Ok(details)
    }

    async fn checked_map(&self, prompt: String, chart_type: ChartType) -> AiResult<MindMap> {
        let mut map: MindMap = self.generate_json(prompt).await?;
        map.validate().map_err(|e| AiError::Invalid(e.to_string()))?;
        // The requested chart type wins over whatever the model echoed
        map.chart_type = chart_type;
        Ok(map)
    }
}
