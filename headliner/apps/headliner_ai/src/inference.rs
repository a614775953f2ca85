//! Client for the hosted text-generation endpoint.
//!
//! One POST per style. A 503 means the model is still loading: the client
//! waits `loading_retry` and tries exactly once more. Everything else that is
//! not a 200 with a usable generation comes back as an [`InferenceError`].

use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, info};

use crate::style::Style;
use crate::InferenceCfg;

/// Returned as-is when the model answers with an empty generation.
pub const EMPTY_GENERATION: &str = "Unable to generate rewrite";

#[derive(Error, Debug)]
pub enum InferenceError {
    #[error("inference request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("model still loading after retry")]
    ModelLoading,

    #[error("API request failed with status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("no response generated")]
    NoGeneration,
}

#[derive(Serialize)]
struct GenerationRequest {
    inputs: String,
    parameters: GenerationParams,
}

#[derive(Serialize)]
struct GenerationParams {
    max_new_tokens: u32,
    temperature: f64,
    do_sample: bool,
    return_full_text: bool,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            max_new_tokens: 50,
            temperature: 0.7,
            do_sample: true,
            return_full_text: false,
        }
    }
}

pub struct InferenceClient {
    http: Client,
    api_url: String,
    api_key: String,
    loading_retry: Duration,
}

impl InferenceClient {
    pub fn new(api_key: impl Into<String>, cfg: &InferenceCfg) -> Result<Self, InferenceError> {
        let http = Client::builder().timeout(cfg.timeout).build()?;
        Ok(Self {
            http,
            api_url: cfg.api_url.clone(),
            api_key: api_key.into(),
            loading_retry: cfg.loading_retry,
        })
    }

    /// Ask the model for a `style` rewrite of `text`.
    pub async fn generate(&self, style: Style, text: &str) -> Result<String, InferenceError> {
        let payload = GenerationRequest {
            inputs: style.prompt(text),
            parameters: GenerationParams::default(),
        };

        let mut retried = false;
        loop {
            let resp = self
                .http
                .post(&self.api_url)
                .bearer_auth(&self.api_key)
                .json(&payload)
                .send()
                .await?;

            match resp.status() {
                StatusCode::OK => {
                    let body: Value = resp.json().await?;
                    debug!(%style, "generation received");
                    return parse_generation(&body);
                }
                StatusCode::SERVICE_UNAVAILABLE if !retried => {
                    info!(%style, wait = ?self.loading_retry, "model loading, retrying once");
                    tokio::time::sleep(self.loading_retry).await;
                    retried = true;
                }
                StatusCode::SERVICE_UNAVAILABLE => return Err(InferenceError::ModelLoading),
                status => {
                    let body = resp.text().await.unwrap_or_default();
                    return Err(InferenceError::Status { status: status.as_u16(), body });
                }
            }
        }
    }
}

/// Pull the rewrite out of a `[{"generated_text": ...}]` response.
pub fn parse_generation(body: &Value) -> Result<String, InferenceError> {
    let first = body
        .as_array()
        .and_then(|items| items.first())
        .ok_or(InferenceError::NoGeneration)?;

    let item = first.as_object().ok_or(InferenceError::NoGeneration)?;
    let generated = match item.get("generated_text") {
        None | Some(Value::Null) => "",
        Some(Value::String(s)) => s.trim(),
        Some(_) => return Err(InferenceError::NoGeneration),
    };

    if generated.is_empty() {
        return Ok(EMPTY_GENERATION.into());
    }
    Ok(first_usable_line(generated).unwrap_or(generated).to_string())
}

/// First non-blank line that isn't the model echoing a prompt label.
fn first_usable_line(generated: &str) -> Option<&str> {
    generated
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty() && !is_label_echo(line))
}

fn is_label_echo(line: &str) -> bool {
    line.starts_with("Original:") || Style::ALL.iter().any(|s| line.starts_with(s.label()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> InferenceClient {
        let cfg = InferenceCfg {
            api_url: format!("{}/models/test", server.uri()),
            loading_retry: Duration::ZERO,
            ..InferenceCfg::default()
        };
        InferenceClient::new("test-key", &cfg).expect("client")
    }

    #[test]
    fn skips_label_echo_lines() {
        let body = json!([{ "generated_text": "Formal: x\n\n  Markets Surge Upon Rate Reduction  \nmore" }]);
        assert_eq!(parse_generation(&body).unwrap(), "Markets Surge Upon Rate Reduction");
    }

    #[test]
    fn all_lines_echoed_returns_whole_text() {
        let body = json!([{ "generated_text": "Original: a\nConcise: b" }]);
        assert_eq!(parse_generation(&body).unwrap(), "Original: a\nConcise: b");
    }

    #[test]
    fn empty_generation_is_placeholder() {
        let body = json!([{ "generated_text": "   " }]);
        assert_eq!(parse_generation(&body).unwrap(), EMPTY_GENERATION);
        let body = json!([{}]);
        assert_eq!(parse_generation(&body).unwrap(), EMPTY_GENERATION);
    }

    #[test]
    fn malformed_items_are_errors() {
        assert!(matches!(
            parse_generation(&json!([{ "generated_text": 42 }])),
            Err(InferenceError::NoGeneration)
        ));
        assert!(matches!(parse_generation(&json!(["hello"])), Err(InferenceError::NoGeneration)));
    }

    #[test]
    fn non_list_or_empty_list_is_error() {
        assert!(matches!(parse_generation(&json!([])), Err(InferenceError::NoGeneration)));
        assert!(matches!(
            parse_generation(&json!({ "error": "bad" })),
            Err(InferenceError::NoGeneration)
        ));
    }

    #[tokio::test]
    async fn posts_prompt_with_fixed_sampling() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/models/test"))
            .and(header("authorization", "Bearer test-key"))
            .and(body_partial_json(json!({
                "parameters": { "max_new_tokens": 50, "do_sample": true, "return_full_text": false }
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                { "generated_text": " \"Equities Advance Following Monetary Easing\"" }
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let out = client_for(&server)
            .generate(Style::Formal, "Stocks go up after rate cut")
            .await
            .expect("generation");
        assert_eq!(out, "\"Equities Advance Following Monetary Easing\"");
    }

    #[tokio::test]
    async fn retries_once_while_model_loads() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(503))
            .up_to_n_times(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!([{ "generated_text": "Rates cut!" }])),
            )
            .mount(&server)
            .await;

        let out = client_for(&server).generate(Style::Casual, "Rates were cut today").await;
        assert_eq!(out.unwrap(), "Rates cut!");
    }

    #[tokio::test]
    async fn second_loading_response_gives_up() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(503))
            .expect(2)
            .mount(&server)
            .await;

        let err = client_for(&server)
            .generate(Style::Concise, "Rates were cut today")
            .await
            .unwrap_err();
        assert!(matches!(err, InferenceError::ModelLoading));
    }

    #[tokio::test]
    async fn other_status_carries_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(401).set_body_string("invalid token"))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .generate(Style::Formal, "Rates were cut today")
            .await
            .unwrap_err();
        match err {
            InferenceError::Status { status, body } => {
                assert_eq!(status, 401);
                assert_eq!(body, "invalid token");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
