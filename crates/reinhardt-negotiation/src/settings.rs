//! Negotiation settings
//!
//! Settings are plain data loaded from TOML, usually from a `[negotiation]`
//! table of the project settings file.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Default maximum length of an `Accept*` header: 8 KB
const DEFAULT_MAX_HEADER_LENGTH: usize = 8 * 1024;

/// Settings for request-level negotiation
///
/// # Examples
///
/// ```
/// use reinhardt_negotiation::NegotiationSettings;
///
/// let settings = NegotiationSettings::from_toml_str(r#"
/// max_header_length = 1024
///
/// [mime_types]
/// md = "text/markdown"
/// "#).unwrap();
///
/// assert_eq!(settings.max_header_length, Some(1024));
/// assert_eq!(settings.mime_types.get("md").map(String::as_str), Some("text/markdown"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NegotiationSettings {
	/// Headers longer than this many bytes are ignored (treated as absent)
	pub max_header_length: Option<usize>,
	/// Extension → media type mappings checked before the MIME database
	pub mime_types: BTreeMap<String, String>,
}

impl Default for NegotiationSettings {
	fn default() -> Self {
		Self {
			max_header_length: Some(DEFAULT_MAX_HEADER_LENGTH),
			mime_types: BTreeMap::new(),
		}
	}
}

impl NegotiationSettings {
	/// Parses settings from a TOML document; missing keys keep their defaults.
	pub fn from_toml_str(source: &str) -> Result<Self> {
		Ok(toml::from_str(source)?)
	}

	/// Settings without a header length limit
	pub fn unlimited() -> Self {
		Self {
			max_header_length: None,
			..Self::default()
		}
	}

	/// Set the maximum accepted header length in bytes.
	pub fn with_max_header_length(mut self, length: usize) -> Self {
		self.max_header_length = Some(length);
		self
	}

	/// Add an extension → media type mapping.
	pub fn with_mime_type(mut self, extension: impl Into<String>, media_type: impl Into<String>) -> Self {
		self.mime_types.insert(extension.into(), media_type.into());
		self
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::error::NegotiationError;
	use rstest::rstest;

	#[rstest]
	fn test_defaults() {
		let settings = NegotiationSettings::default();
		assert_eq!(settings.max_header_length, Some(8 * 1024));
		assert!(settings.mime_types.is_empty());
	}

	#[rstest]
	fn test_empty_document_gives_defaults() {
		let settings = NegotiationSettings::from_toml_str("").unwrap();
		assert_eq!(settings, NegotiationSettings::default());
	}

	#[rstest]
	fn test_invalid_document_is_reported() {
		let result = NegotiationSettings::from_toml_str("max_header_length = \"big\"");
		assert!(matches!(result, Err(NegotiationError::InvalidSettings(_))));
	}

	#[rstest]
	fn test_builders() {
		let settings = NegotiationSettings::unlimited()
			.with_mime_type("md", "text/markdown")
			.with_max_header_length(64);
		assert_eq!(settings.max_header_length, Some(64));
		assert_eq!(settings.mime_types.len(), 1);
	}
}
