//! Source realizations for mapping pipelines.
//!
//! Currently, the crate provides a [JsonSource] that evaluates JSONPath (RFC 9535) selectors
//! against an in-memory JSON document.

mod json;

pub use json::JsonSource;
pub use serde_json_path::JsonPath;
