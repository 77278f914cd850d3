// Single source of truth for all default values.

// --- Search ---
pub const DEFAULT_TRUST_THRESHOLD: f64 = 0.5;
pub const DEFAULT_VERIFY_MAX_HOPS: usize = 5;
pub const DEFAULT_INNOVATE_MAX_HOPS: usize = 7;
pub const DEFAULT_INNOVATE_MIN_EDGE_WEIGHT: f64 = 0.1;

// --- Learning ---
pub const DEFAULT_LEARNING_RATE: f64 = 0.1;
pub const DEFAULT_INITIAL_CONFIDENCE: f64 = 0.5;
pub const DEFAULT_CONFIDENCE_SUCCESS_DELTA: f64 = 0.1;
pub const DEFAULT_CONFIDENCE_FAILURE_DELTA: f64 = -0.2;
pub const DEFAULT_WEIGHT_PRECISION: u32 = 4;
pub const DEFAULT_LINK_WEIGHT: f64 = 0.5;

// --- Policy ---
pub const DEFAULT_RISK_REJECT_THRESHOLD: f64 = 0.7;
pub const DEFAULT_COLLABORATOR_TIMEOUT_MS: u64 = 30_000;
pub const DEFAULT_QUESTION_FALLBACK: &str =
    "Sorry, I cannot formulate an exploratory question right now";
pub const DEFAULT_RISK_FALLBACK_NARRATIVE: &str = "assessment failed";

// --- Storage ---
pub const DEFAULT_DB_FILENAME: &str = "causal_memory.db";
pub const DEFAULT_READ_POOL_SIZE: usize = 4;
pub const DEFAULT_BUSY_TIMEOUT_MS: u32 = 5_000;

// --- LLM ---
pub const DEFAULT_LLM_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";
pub const DEFAULT_LLM_MODEL: &str = "gpt-4-turbo";
pub const DEFAULT_LLM_API_KEY_ENV: &str = "OPENAI_API_KEY";
pub const DEFAULT_LLM_MAX_RETRIES: u32 = 2;
pub const DEFAULT_LLM_REQUEST_TIMEOUT_SECS: u64 = 60;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;
