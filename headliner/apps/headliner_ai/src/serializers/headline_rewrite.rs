use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct RewriteIn { pub text: String }

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewriteResults {
    pub formal: String,
    pub casual: String,
    pub concise: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RewriteOut {
    pub success: bool,
    /// trimmed input headline
    pub original: String,
    pub results: RewriteResults,
}
