//! Request-level content negotiation
//!
//! [`Accepts`] answers the questions a handler asks before rendering: which of
//! the representations it can produce does the client want, and in which
//! charset, encoding and language.

use std::fmt;
use std::sync::Arc;

use http::HeaderMap;
use tracing::debug;

use crate::error::{NegotiationError, Result};
use crate::header::HeaderKind;
use crate::media_type::MediaTypeSpec;
use crate::mime::{MimeLookup, Overrides};
use crate::negotiator::Negotiator;
use crate::settings::NegotiationSettings;

#[derive(Clone)]
struct SharedLookup(Arc<dyn MimeLookup>);

impl MimeLookup for SharedLookup {
	fn lookup(&self, name: &str) -> Option<String> {
		self.0.lookup(name)
	}
}

fn default_lookup() -> Arc<dyn MimeLookup> {
	#[cfg(feature = "mime-guess")]
	{
		Arc::new(crate::mime::MimeGuess)
	}
	#[cfg(not(feature = "mime-guess"))]
	{
		Arc::new(crate::mime::NoMimeLookup)
	}
}

/// Content negotiation for one request
///
/// # Examples
///
/// ```
/// use http::{HeaderMap, HeaderValue, header::ACCEPT};
/// use reinhardt_negotiation::Accepts;
///
/// let mut headers = HeaderMap::new();
/// headers.insert(ACCEPT, HeaderValue::from_static("application/json, text/*;q=0.5"));
///
/// let accepts = Accepts::from_headers(&headers);
/// assert_eq!(accepts.media_type(&["html", "json"]).unwrap(), "json");
/// assert_eq!(accepts.media_type(&["text/plain", "png"]).unwrap(), "text/plain");
/// assert!(accepts.media_type(&["png"]).is_err());
/// ```
#[derive(Clone)]
pub struct Accepts {
	raw: Negotiator,
	negotiator: Negotiator,
	lookup: Arc<dyn MimeLookup>,
}

impl Accepts {
	/// Creates the request-level API over already collected header values.
	///
	/// [`NegotiationSettings::default`] applies, so headers longer than 8 KB
	/// are ignored until [`with_settings`](Self::with_settings) says otherwise.
	pub fn new(negotiator: Negotiator) -> Self {
		let accepts = Self {
			raw: negotiator.clone(),
			negotiator,
			lookup: default_lookup(),
		};
		accepts.limited_to(NegotiationSettings::default().max_header_length)
	}

	fn limited_to(mut self, max_length: Option<usize>) -> Self {
		self.negotiator = match max_length {
			Some(max_length) => self.raw.clone().limit_header_length(max_length),
			None => self.raw.clone(),
		};
		self
	}

	/// Reads the `Accept*` headers of a request
	pub fn from_headers(headers: &HeaderMap) -> Self {
		Self::new(Negotiator::from_headers(headers))
	}

	/// Replaces the MIME lookup used to resolve short type names
	pub fn with_lookup(mut self, lookup: impl MimeLookup + 'static) -> Self {
		self.lookup = Arc::new(lookup);
		self
	}

	/// Applies the header length limit and MIME overrides from settings.
	///
	/// The limit replaces the previous one, so a larger or absent limit brings
	/// back headers an earlier limit ignored.
	pub fn with_settings(mut self, settings: &NegotiationSettings) -> Self {
		self = self.limited_to(settings.max_header_length);

		if !settings.mime_types.is_empty() {
			let overrides = settings.mime_types.iter().fold(
				Overrides::new(SharedLookup(self.lookup)),
				|overrides, (extension, media_type)| overrides.with_type(extension, media_type.clone()),
			);
			self.lookup = Arc::new(overrides);
		}

		self
	}

	/// The underlying header negotiator
	pub fn negotiator(&self) -> &Negotiator {
		&self.negotiator
	}

	/// All media ranges the client accepts, best first
	pub fn media_types(&self) -> Vec<String> {
		self.negotiator.media_types()
	}

	/// Picks the best of `types` for this request.
	///
	/// Entries may be full media types (`"text/html"`) or short names resolved
	/// through the MIME lookup (`"html"`, `".json"`). Entries that do not
	/// resolve are skipped. The original entry is returned, not its media type.
	///
	/// When the request has no (or an empty) `Accept` header the first entry is
	/// returned without negotiating.
	///
	/// # Errors
	///
	/// [`NegotiationError::NoCandidates`] when `types` is empty and
	/// [`NegotiationError::NotAcceptable`] when nothing in `types` is acceptable.
	pub fn media_type<'a, S: AsRef<str>>(&self, types: &'a [S]) -> Result<&'a str> {
		let Some(first) = types.first() else {
			return Err(NegotiationError::NoCandidates);
		};

		if self
			.negotiator
			.header(HeaderKind::Accept)
			.is_none_or(str::is_empty)
		{
			return Ok(first.as_ref());
		}

		let resolved: Vec<(usize, String)> = types
			.iter()
			.enumerate()
			.filter_map(|(index, name)| {
				let name = name.as_ref();
				if name.contains('/') {
					Some((index, name.to_string()))
				} else {
					self.lookup.lookup(name).map(|media_type| (index, media_type))
				}
			})
			.collect();
		let media_types: Vec<&str> = resolved.iter().map(|(_, media_type)| media_type.as_str()).collect();

		match self
			.negotiator
			.preferred_positions::<MediaTypeSpec, _>(&media_types)
			.first()
		{
			Some(&best) => {
				let chosen = types[resolved[best].0].as_ref();
				debug!(chosen, media_type = media_types[best], "negotiated media type");
				Ok(chosen)
			}
			None => {
				debug!(offered = types.len(), resolved = resolved.len(), "no acceptable media type");
				Err(NegotiationError::NotAcceptable {
					header: HeaderKind::Accept,
				})
			}
		}
	}

	/// All charsets the client accepts, best first
	pub fn charsets(&self) -> Vec<String> {
		self.negotiator.charsets()
	}

	/// Best of `charsets` for this request
	pub fn charset<'a, S: AsRef<str>>(&self, charsets: &'a [S]) -> Option<&'a str> {
		self.negotiator.charset(charsets)
	}

	/// All encodings the client accepts, best first
	pub fn encodings(&self) -> Vec<String> {
		self.negotiator.encodings()
	}

	/// Best of `encodings` for this request
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_negotiation::{Accepts, Negotiator};
	///
	/// let accepts = Accepts::new(Negotiator::new().with_accept_encoding("br;q=0"));
	/// assert_eq!(accepts.encoding(&["br", "identity"]), Some("identity"));
	/// assert_eq!(accepts.encoding(&["br"]), None);
	/// ```
	pub fn encoding<'a, S: AsRef<str>>(&self, encodings: &'a [S]) -> Option<&'a str> {
		self.negotiator.encoding(encodings)
	}

	/// All languages the client accepts, best first
	pub fn languages(&self) -> Vec<String> {
		self.negotiator.languages()
	}

	/// Best of `languages` for this request
	pub fn language<'a, S: AsRef<str>>(&self, languages: &'a [S]) -> Option<&'a str> {
		self.negotiator.language(languages)
	}
}

impl fmt::Debug for Accepts {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Accepts")
			.field("negotiator", &self.negotiator)
			.finish_non_exhaustive()
	}
}
