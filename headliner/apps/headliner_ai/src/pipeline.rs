use tracing::warn;

use crate::fallback::fallback_rewrite;
use crate::inference::{InferenceClient, InferenceError};
use crate::serializers::headline_rewrite::RewriteResults;
use crate::style::Style;
use crate::InferenceCfg;

/// Produces one rewrite per style, from the model when it answers and from
/// the templates when it doesn't. Never fails.
pub struct Rewriter {
    client: Option<InferenceClient>,
}

impl Rewriter {
    /// Remote generation when `cfg` carries an API key, templates otherwise.
    pub fn new(cfg: &InferenceCfg) -> Result<Self, InferenceError> {
        let client = match &cfg.api_key {
            Some(key) => Some(InferenceClient::new(key.clone(), cfg)?),
            None => None,
        };
        Ok(Self { client })
    }

    pub fn fallback_only() -> Self {
        Self { client: None }
    }

    pub fn is_remote(&self) -> bool {
        self.client.is_some()
    }

    pub async fn rewrite(&self, text: &str, style: Style) -> String {
        let Some(client) = &self.client else {
            return fallback_rewrite(text, style);
        };
        match client.generate(style, text).await {
            Ok(out) => out,
            Err(e) => {
                warn!(%style, error = %e, "generation failed, using fallback");
                fallback_rewrite(text, style)
            }
        }
    }

    /// All three styles, one after another.
    pub async fn rewrite_all(&self, text: &str) -> RewriteResults {
        RewriteResults {
            formal: self.rewrite(text, Style::Formal).await,
            casual: self.rewrite(text, Style::Casual).await,
            concise: self.rewrite(text, Style::Concise).await,
        }
    }
}
