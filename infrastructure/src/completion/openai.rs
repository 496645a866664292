//! OpenAI-compatible chat-completion gateway.
//!
//! ```text
//! POST {base_url}/v1/chat/completions
//! Authorization: Bearer <key from api_key_env>
//! { "model": ..., "messages": [{system}, {user}], "stream": false }
//! ```
//!
//! One HTTP request per call, no retries. The coarse-grained fallback in the
//! orchestrator is the only retry-like behavior.

use crate::config::FileProviderConfig;
use async_trait::async_trait;
use rutobot_application::{CompletionGateway, CompletionRequest, GatewayError};
use rutobot_domain::PromptTemplate;
use std::time::Duration;
use tracing::debug;

const CHAT_PATH: &str = "/v1/chat/completions";

/// Longest error body echoed back in `ProviderError`
const MAX_ERROR_BODY: usize = 500;

pub struct OpenAiCompletionGateway {
    client: reqwest::Client,
    endpoint: String,
    api_key: Option<String>,
}

impl OpenAiCompletionGateway {
    pub fn new(
        base_url: &str,
        api_key: Option<String>,
        request_timeout: Duration,
    ) -> Result<Self, GatewayError> {
        let client = reqwest::Client::builder()
            .timeout(request_timeout)
            .build()
            .map_err(|e| GatewayError::Other(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint: format!("{}{}", base_url.trim_end_matches('/'), CHAT_PATH),
            api_key,
        })
    }

    pub fn from_config(config: &FileProviderConfig) -> Result<Self, GatewayError> {
        Self::new(&config.base_url, config.api_key(), config.request_timeout())
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl CompletionGateway for OpenAiCompletionGateway {
    async fn complete(&self, request: CompletionRequest) -> Result<String, GatewayError> {
        let body = build_request_body(&request);
        debug!("POST {} model={}", self.endpoint, request.model);

        let mut http = self.client.post(&self.endpoint).json(&body);
        if let Some(key) = &self.api_key {
            http = http.bearer_auth(key);
        }

        let response = http.send().await.map_err(map_transport_error)?;
        let status = response.status();
        let text = response.text().await.map_err(map_transport_error)?;

        if !status.is_success() {
            return Err(GatewayError::ProviderError(format!(
                "HTTP {}: {}",
                status.as_u16(),
                truncate(&text, MAX_ERROR_BODY)
            )));
        }

        parse_response(&text)
    }
}

/// Chat-completion body; the toolset is declared in the system message
pub(crate) fn build_request_body(request: &CompletionRequest) -> serde_json::Value {
    let system = match PromptTemplate::toolset_section(request.toolset) {
        Some(tools) => format!("{}\n\n{}", request.system_prompt, tools),
        None => request.system_prompt.clone(),
    };

    serde_json::json!({
        "model": request.model.as_str(),
        "messages": [
            { "role": "system", "content": system },
            { "role": "user", "content": request.prompt },
        ],
        "stream": false,
    })
}

/// Extract `choices[0].message.content`
pub(crate) fn parse_response(body: &str) -> Result<String, GatewayError> {
    let value: serde_json::Value = serde_json::from_str(body)
        .map_err(|e| GatewayError::InvalidResponse(format!("not JSON: {}", e)))?;

    value
        .pointer("/choices/0/message/content")
        .and_then(|c| c.as_str())
        .map(str::to_string)
        .ok_or_else(|| {
            GatewayError::InvalidResponse("missing choices[0].message.content".to_string())
        })
}

fn map_transport_error(e: reqwest::Error) -> GatewayError {
    if e.is_timeout() {
        GatewayError::Timeout
    } else if e.is_connect() {
        GatewayError::ConnectionError(e.to_string())
    } else {
        GatewayError::Other(e.to_string())
    }
}

fn truncate(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
