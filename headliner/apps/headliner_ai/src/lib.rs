//! Headline rewriting: per-style prompts, the hosted text-generation client,
//! the deterministic fallback and the `/rewrite` view that ties them together.

pub mod fallback;
pub mod inference;
pub mod pipeline;
pub mod serializers;
pub mod style;
pub mod urls;
pub mod views;

use std::sync::Arc;
use std::time::Duration;

pub use pipeline::Rewriter;
pub use style::Style;

pub const DEFAULT_API_URL: &str =
    "https://api-inference.huggingface.co/models/microsoft/DialoGPT-large";

#[derive(Clone, Debug)]
pub struct InferenceCfg {
    /// Bearer token for the inference API. `None` runs in fallback-only mode.
    pub api_key: Option<String>,
    /// Full model endpoint. Override with HUGGINGFACE_API_URL.
    pub api_url: String,
    /// Per-call network timeout (default 60s).
    pub timeout: Duration,
    /// Wait before the single retry on a "model loading" 503 (default 10s).
    pub loading_retry: Duration,
}

impl Default for InferenceCfg {
    fn default() -> Self {
        Self {
            api_key: None,
            api_url: DEFAULT_API_URL.into(),
            timeout: Duration::from_secs(60),
            loading_retry: Duration::from_secs(10),
        }
    }
}

impl InferenceCfg {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let api_key = std::env::var("HUGGINGFACE_API_KEY")
            .ok()
            .filter(|k| !k.trim().is_empty());
        let api_url = std::env::var("HUGGINGFACE_API_URL").unwrap_or(defaults.api_url);

        let timeout = std::env::var("HUGGINGFACE_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(defaults.timeout);

        let loading_retry = std::env::var("HUGGINGFACE_LOADING_RETRY_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(defaults.loading_retry);

        Self { api_key, api_url, timeout, loading_retry }
    }
}

#[derive(Clone)]
pub struct AiState {
    pub rewriter: Arc<Rewriter>,
}

impl AiState {
    pub fn new(rewriter: Rewriter) -> Self {
        Self { rewriter: Arc::new(rewriter) }
    }
}
