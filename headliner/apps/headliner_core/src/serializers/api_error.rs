use axum::{http::StatusCode, Json};
use serde::{Deserialize, Serialize};

/// Body of every non-2xx answer: `{"success": false, "error": "..."}`.
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiError {
    pub success: bool,
    pub error: String,
}

impl ApiError {
    pub fn new(error: impl Into<String>) -> Self {
        Self { success: false, error: error.into() }
    }
}

pub type ApiFailure = (StatusCode, Json<ApiError>);

// ---------- small helpers ----------
pub fn bad(msg: &str) -> ApiFailure {
    (StatusCode::BAD_REQUEST, Json(ApiError::new(msg)))
}

pub fn internal<E: std::fmt::Display>(e: E) -> ApiFailure {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ApiError::new(format!("An error occurred: {e}"))),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bad_is_400_with_message() {
        let (code, Json(body)) = bad("No text provided");
        assert_eq!(code, StatusCode::BAD_REQUEST);
        assert!(!body.success);
        assert_eq!(body.error, "No text provided");
    }

    #[test]
    fn internal_prefixes_detail() {
        let (code, Json(body)) = internal("boom");
        assert_eq!(code, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.error, "An error occurred: boom");
    }

    #[test]
    fn serializes_success_false() {
        let v = serde_json::to_value(ApiError::new("x")).unwrap();
        assert_eq!(v, serde_json::json!({ "success": false, "error": "x" }));
    }
}
