//! Error types for the boundary operations of sticky-forms
//!
//! Tag rendering itself is total and never fails. Errors only surface where
//! untyped input enters the crate: JSON attribute bags, settings files and
//! url-encoded parameter snapshots.

#[derive(Debug, thiserror::Error)]
pub enum TagError {
	#[error("Unsupported value for attribute `{key}`: {kind}")]
	UnsupportedValue { key: String, kind: &'static str },
	#[error("Attribute mapping must be a JSON object, got {0}")]
	InvalidRoot(&'static str),
	#[error("Invalid render settings: {0}")]
	Settings(#[from] toml::de::Error),
	#[error("Invalid submitted parameters: {0}")]
	Query(#[from] serde_urlencoded::de::Error),
}

pub type TagResult<T> = Result<T, TagError>;

/// Human-readable JSON kind used in error messages.
pub(crate) fn json_kind(value: &serde_json::Value) -> &'static str {
	match value {
		serde_json::Value::Null => "null",
		serde_json::Value::Bool(_) => "boolean",
		serde_json::Value::Number(_) => "number",
		serde_json::Value::String(_) => "string",
		serde_json::Value::Array(_) => "array",
		serde_json::Value::Object(_) => "object",
	}
}
