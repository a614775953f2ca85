use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    http::StatusCode,
    Json,
};
use headliner_core::serializers::api_error::{bad, internal, ApiFailure};
use serde_json::Value;
use tracing::debug;

use crate::serializers::headline_rewrite::{RewriteIn, RewriteOut};
use crate::AiState;

pub const MIN_CHARS: usize = 5;
pub const MAX_CHARS: usize = 500;

const NO_TEXT: &str = "No text provided";
const TOO_LONG: &str = "Text must be less than 500 characters";

pub async fn rewrite(
    State(state): State<AiState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<RewriteOut>, ApiFailure> {
    let body = body.map_err(|rejection| {
        // bodies over the gateway limit can only hold an over-long headline
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            bad(TOO_LONG)
        } else {
            internal(rejection.body_text())
        }
    })?;
    let text = headline_from_body(&body)?;
    debug!(chars = text.chars().count(), "rewriting headline");

    let results = state.rewriter.rewrite_all(&text).await;
    Ok(Json(RewriteOut { success: true, original: text, results }))
}

/// Trimmed headline from a `{"text": ...}` body, or the error to answer with.
fn headline_from_body(body: &[u8]) -> Result<String, ApiFailure> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(bad(NO_TEXT));
    }
    let data: Value = serde_json::from_slice(body).map_err(internal)?;
    if matches!(data.get("text"), None | Some(Value::Null)) {
        return Err(bad(NO_TEXT));
    }
    let RewriteIn { text } = serde_json::from_value(data).map_err(internal)?;

    let text = text.trim();
    let chars = text.chars().count();
    if chars < MIN_CHARS {
        return Err(bad("Text must be at least 5 characters long"));
    }
    if chars > MAX_CHARS {
        return Err(bad(TOO_LONG));
    }
    Ok(text.to_string())
}
