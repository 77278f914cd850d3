use serde::{Deserialize, Serialize};

use super::defaults;

/// Chat-completion collaborator configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    /// OpenAI-compatible chat completions endpoint.
    pub endpoint: String,
    pub model: String,
    /// Name of the environment variable holding the API key. The key itself is never stored in config.
    pub api_key_env: String,
    pub max_retries: u32,
    pub request_timeout_secs: u64,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            endpoint: defaults::DEFAULT_LLM_ENDPOINT.to_string(),
            model: defaults::DEFAULT_LLM_MODEL.to_string(),
            api_key_env: defaults::DEFAULT_LLM_API_KEY_ENV.to_string(),
            max_retries: defaults::DEFAULT_LLM_MAX_RETRIES,
            request_timeout_secs: defaults::DEFAULT_LLM_REQUEST_TIMEOUT_SECS,
        }
    }
}
