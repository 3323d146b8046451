//! Resolution of short type names (file extensions) to media types

use std::collections::BTreeMap;

/// Maps a short name such as `"json"`, `".html"` or `"report.pdf"` to its
/// canonical `type/subtype` string.
pub trait MimeLookup: Send + Sync {
	/// Returns the media type for `name`, or `None` when there is no mapping.
	fn lookup(&self, name: &str) -> Option<String>;
}

impl<F> MimeLookup for F
where
	F: Fn(&str) -> Option<String> + Send + Sync,
{
	fn lookup(&self, name: &str) -> Option<String> {
		self(name)
	}
}

/// Extension part of a short name, lower-cased (`"HTML"`, `".html"` and
/// `"index.html"` all give `"html"`).
pub fn extension_of(name: &str) -> Option<String> {
	let extension = name.rsplit('.').next().unwrap_or(name).trim();
	if extension.is_empty() {
		None
	} else {
		Some(extension.to_ascii_lowercase())
	}
}

/// Lookup that never resolves anything
#[derive(Debug, Clone, Copy, Default)]
pub struct NoMimeLookup;

impl MimeLookup for NoMimeLookup {
	fn lookup(&self, _name: &str) -> Option<String> {
		None
	}
}

/// Lookup backed by the `mime_guess` extension database
///
/// # Examples
///
/// ```
/// use reinhardt_negotiation::mime::{MimeGuess, MimeLookup};
///
/// assert_eq!(MimeGuess.lookup("json").as_deref(), Some("application/json"));
/// assert_eq!(MimeGuess.lookup("index.html").as_deref(), Some("text/html"));
/// assert_eq!(MimeGuess.lookup("definitely-not-an-extension"), None);
/// ```
#[cfg(feature = "mime-guess")]
#[derive(Debug, Clone, Copy, Default)]
pub struct MimeGuess;

#[cfg(feature = "mime-guess")]
impl MimeLookup for MimeGuess {
	fn lookup(&self, name: &str) -> Option<String> {
		let extension = extension_of(name)?;
		mime_guess::from_ext(&extension)
			.first()
			.map(|mime| mime.essence_str().to_string())
	}
}

/// Explicit extension mappings consulted before a fallback lookup
#[derive(Debug, Clone, Default)]
pub struct Overrides<L> {
	types: BTreeMap<String, String>,
	fallback: L,
}

impl<L: MimeLookup> Overrides<L> {
	/// Wraps `fallback` with no overrides yet
	pub fn new(fallback: L) -> Self {
		Self {
			types: BTreeMap::new(),
			fallback,
		}
	}

	/// Adds one extension → media type mapping
	pub fn with_type(mut self, extension: impl AsRef<str>, media_type: impl Into<String>) -> Self {
		if let Some(extension) = extension_of(extension.as_ref()) {
			self.types.insert(extension, media_type.into());
		}
		self
	}
}

impl<L: MimeLookup> MimeLookup for Overrides<L> {
	fn lookup(&self, name: &str) -> Option<String> {
		extension_of(name)
			.and_then(|extension| self.types.get(&extension).cloned())
			.or_else(|| self.fallback.lookup(name))
	}
}
