//! Service-level views shared by every headliner deployment: metadata, health
//! and the JSON error envelope the other apps answer with.

pub mod serializers;
pub mod urls;
pub mod views;

/// Name of the text-generation backend, reported by the metadata and health views.
pub const PROVIDER: &str = "Hugging Face";
