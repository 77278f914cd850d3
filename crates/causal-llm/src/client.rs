//! Chat-completions HTTP client with retry and exponential backoff.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use causal_core::config::LlmConfig;
use causal_core::errors::CollaboratorError;

/// One message in a chat exchange.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// A completion request before the model name is attached.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatRequest {
    pub messages: Vec<ChatMessage>,
    /// Ask the endpoint for a JSON object response.
    pub json_mode: bool,
}

impl ChatRequest {
    pub fn new(system: impl Into<String>, user: impl Into<String>) -> Self {
        Self {
            messages: vec![ChatMessage::system(system), ChatMessage::user(user)],
            json_mode: false,
        }
    }

    pub fn json(mut self) -> Self {
        self.json_mode = true;
        self
    }
}

/// Anything that can turn a chat request into the assistant's reply text.
pub trait ChatBackend: Send + Sync {
    /// `collaborator` names the caller in any error returned.
    fn complete(&self, collaborator: &str, request: &ChatRequest)
        -> Result<String, CollaboratorError>;
}

#[derive(Serialize)]
struct CompletionBody<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    #[serde(skip_serializing_if = "Option::is_none")]
    response_format: Option<ResponseFormat>,
}

#[derive(Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
}

#[derive(Deserialize)]
struct CompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ReplyMessage,
}

#[derive(Deserialize)]
struct ReplyMessage {
    #[serde(default)]
    content: Option<String>,
}

/// Blocking client for an OpenAI-compatible `/chat/completions` endpoint.
pub struct ChatClient {
    endpoint: String,
    model: String,
    api_key: String,
    max_retries: u32,
    request_timeout: Duration,
}

impl ChatClient {
    pub fn new(
        endpoint: impl Into<String>,
        model: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            endpoint: endpoint.into(),
            model: model.into(),
            api_key: api_key.into(),
            max_retries: 0,
            request_timeout: Duration::from_secs(60),
        }
    }

    /// Build from configuration, reading the API key from the named environment variable.
    pub fn from_config(config: &LlmConfig) -> Result<Self, CollaboratorError> {
        let api_key = std::env::var(&config.api_key_env).map_err(|_| {
            CollaboratorError::failed(
                "chat_client",
                format!("environment variable {} is not set", config.api_key_env),
            )
        })?;
        Ok(Self::new(&config.endpoint, &config.model, api_key)
            .with_max_retries(config.max_retries)
            .with_timeout(Duration::from_secs(config.request_timeout_secs)))
    }

    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Send one HTTP request on a current-thread runtime.
    fn send_request(&self, collaborator: &str, body: &str) -> Result<String, CollaboratorError> {
        let failed = |reason: String| CollaboratorError::failed(collaborator, reason);

        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| failed(format!("runtime error: {e}")))?;

        let client = reqwest::Client::builder()
            .timeout(self.request_timeout)
            .build()
            .map_err(|e| failed(format!("client error: {e}")))?;

        rt.block_on(async {
            let response = client
                .post(&self.endpoint)
                .header("Authorization", format!("Bearer {}", self.api_key))
                .header("Content-Type", "application/json")
                .body(body.to_string())
                .send()
                .await
                .map_err(|e| failed(format!("HTTP error: {e}")))?;

            if !response.status().is_success() {
                let status = response.status();
                let text = response.text().await.unwrap_or_default();
                return Err(failed(format!("API returned {status}: {text}")));
            }

            let parsed: CompletionResponse = response.json().await.map_err(|e| {
                CollaboratorError::malformed(collaborator, format!("JSON parse error: {e}"))
            })?;

            parsed
                .choices
                .into_iter()
                .next()
                .and_then(|choice| choice.message.content)
                .ok_or_else(|| CollaboratorError::malformed(collaborator, "no completion choices"))
        })
    }
}

impl ChatBackend for ChatClient {
    fn complete(
        &self,
        collaborator: &str,
        request: &ChatRequest,
    ) -> Result<String, CollaboratorError> {
        let body = serde_json::to_string(&CompletionBody {
            model: &self.model,
            messages: &request.messages,
            response_format: request.json_mode.then_some(ResponseFormat {
                kind: "json_object",
            }),
        })
        .map_err(|e| CollaboratorError::failed(collaborator, format!("serialize request: {e}")))?;

        let mut last_err = None;
        for attempt in 0..=self.max_retries {
            if attempt > 0 {
                let delay = Duration::from_millis(100 * 2u64.pow(attempt - 1));
                std::thread::sleep(delay);
                debug!(attempt, collaborator, "retrying chat completion");
            }

            match self.send_request(collaborator, &body) {
                Ok(content) => return Ok(content),
                // A well-formed HTTP exchange with an unusable body will not improve on retry.
                Err(e @ CollaboratorError::Malformed { .. }) => return Err(e),
                Err(e) => {
                    warn!(attempt, collaborator, error = %e, "chat completion failed");
                    last_err = Some(e);
                }
            }
        }

        Err(last_err
            .unwrap_or_else(|| CollaboratorError::failed(collaborator, "all retries exhausted")))
    }
}
