//! Per-request negotiation over the raw `Accept*` header values

use http::HeaderMap;
use tracing::{debug, warn};

use crate::charset::CharsetSpec;
use crate::encoding::EncodingSpec;
use crate::header::HeaderKind;
use crate::language::LanguageSpec;
use crate::media_type::MediaTypeSpec;
use crate::ranker::{rank_candidates, rank_positions, rank_specs};
use crate::spec::{AcceptSpec, parse_header};

/// Negotiator for the `Accept*` headers of one request
///
/// Each header is either absent or carries a raw value. An absent header falls
/// back to [`HeaderKind::absent_default`]; an empty value is kept as is and
/// accepts nothing (except `identity` for `Accept-Encoding`).
///
/// # Examples
///
/// ```
/// use reinhardt_negotiation::Negotiator;
///
/// let negotiator = Negotiator::new()
///     .with_accept("text/html, application/*;q=0.2, image/jpeg;q=0.8")
///     .with_accept_language("en;q=0.8, es, pt");
///
/// assert_eq!(
///     negotiator.media_types(),
///     vec!["text/html", "image/jpeg", "application/*"]
/// );
/// assert_eq!(negotiator.language(&["en", "pt"]), Some("pt"));
/// assert_eq!(negotiator.charsets(), vec!["*"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Negotiator {
	accept: Option<String>,
	accept_charset: Option<String>,
	accept_encoding: Option<String>,
	accept_language: Option<String>,
}

impl Negotiator {
	/// Creates a negotiator for a request without any `Accept*` header
	pub fn new() -> Self {
		Self::default()
	}

	/// Reads the `Accept*` headers from a header map.
	///
	/// Repeated header lines are joined with `", "`. A value that is not
	/// visible ASCII is treated as empty.
	pub fn from_headers(headers: &HeaderMap) -> Self {
		let mut negotiator = Self::new();

		for kind in HeaderKind::ALL {
			let values: Vec<&str> = headers
				.get_all(kind.header_name())
				.iter()
				.map(|value| {
					value.to_str().unwrap_or_else(|_| {
						debug!(header = %kind, "ignoring non-ASCII header value");
						""
					})
				})
				.collect();

			if !values.is_empty() {
				*negotiator.slot_mut(kind) = Some(values.join(", "));
			}
		}

		negotiator
	}

	/// Sets the raw value of one header
	pub fn with_header(mut self, kind: HeaderKind, value: impl Into<String>) -> Self {
		*self.slot_mut(kind) = Some(value.into());
		self
	}

	/// Sets the raw `Accept` value
	pub fn with_accept(self, value: impl Into<String>) -> Self {
		self.with_header(HeaderKind::Accept, value)
	}

	/// Sets the raw `Accept-Charset` value
	pub fn with_accept_charset(self, value: impl Into<String>) -> Self {
		self.with_header(HeaderKind::AcceptCharset, value)
	}

	/// Sets the raw `Accept-Encoding` value
	pub fn with_accept_encoding(self, value: impl Into<String>) -> Self {
		self.with_header(HeaderKind::AcceptEncoding, value)
	}

	/// Sets the raw `Accept-Language` value
	pub fn with_accept_language(self, value: impl Into<String>) -> Self {
		self.with_header(HeaderKind::AcceptLanguage, value)
	}

	/// Drops every header longer than `max_length` bytes, so it counts as absent.
	pub fn limit_header_length(mut self, max_length: usize) -> Self {
		for kind in HeaderKind::ALL {
			let slot = self.slot_mut(kind);
			if slot.as_ref().is_some_and(|value| value.len() > max_length) {
				warn!(header = %kind, max_length, "ignoring oversized header");
				*slot = None;
			}
		}
		self
	}

	/// Raw value of a header, `None` when the request does not carry it
	pub fn header(&self, kind: HeaderKind) -> Option<&str> {
		match kind {
			HeaderKind::Accept => self.accept.as_deref(),
			HeaderKind::AcceptCharset => self.accept_charset.as_deref(),
			HeaderKind::AcceptEncoding => self.accept_encoding.as_deref(),
			HeaderKind::AcceptLanguage => self.accept_language.as_deref(),
		}
	}

	fn slot_mut(&mut self, kind: HeaderKind) -> &mut Option<String> {
		match kind {
			HeaderKind::Accept => &mut self.accept,
			HeaderKind::AcceptCharset => &mut self.accept_charset,
			HeaderKind::AcceptEncoding => &mut self.accept_encoding,
			HeaderKind::AcceptLanguage => &mut self.accept_language,
		}
	}

	/// Value negotiation runs against: the raw value or the absent default
	pub fn effective_header(&self, kind: HeaderKind) -> &str {
		self.header(kind).unwrap_or(kind.absent_default())
	}

	/// Parsed specs of the header `S` is read from
	pub fn specs<S: AcceptSpec>(&self) -> Vec<S> {
		parse_header(self.effective_header(S::HEADER))
	}

	/// Everything the client accepts for `S`'s header, best first
	pub fn preferred<S: AcceptSpec>(&self) -> Vec<String> {
		rank_specs(&self.specs::<S>())
	}

	/// The acceptable values of `provided`, best first
	pub fn preferred_from<'a, S: AcceptSpec, C: AsRef<str>>(
		&self,
		provided: &'a [C],
	) -> Vec<&'a str> {
		rank_candidates(&self.specs::<S>(), provided)
	}

	/// Positions of the acceptable values of `provided`, best first
	pub fn preferred_positions<S: AcceptSpec, C: AsRef<str>>(
		&self,
		provided: &[C],
	) -> Vec<usize> {
		rank_positions(&self.specs::<S>(), provided)
	}

	/// The single best value of `provided`, if any is acceptable
	pub fn best<'a, S: AcceptSpec, C: AsRef<str>>(&self, provided: &'a [C]) -> Option<&'a str> {
		self.preferred_from::<S, C>(provided).into_iter().next()
	}

	/// Accepted charsets, best first
	pub fn charsets(&self) -> Vec<String> {
		self.preferred::<CharsetSpec>()
	}

	/// Acceptable charsets among `provided`, best first
	pub fn preferred_charsets<'a, C: AsRef<str>>(&self, provided: &'a [C]) -> Vec<&'a str> {
		self.preferred_from::<CharsetSpec, C>(provided)
	}

	/// Best charset among `provided`
	pub fn charset<'a, C: AsRef<str>>(&self, provided: &'a [C]) -> Option<&'a str> {
		self.best::<CharsetSpec, C>(provided)
	}

	/// Accepted encodings, best first
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_negotiation::Negotiator;
	///
	/// assert_eq!(Negotiator::new().encodings(), vec!["identity"]);
	///
	/// let negotiator = Negotiator::new().with_accept_encoding("gzip;q=0.5");
	/// assert_eq!(negotiator.encodings(), vec!["gzip", "identity"]);
	/// ```
	pub fn encodings(&self) -> Vec<String> {
		self.preferred::<EncodingSpec>()
	}

	/// Acceptable encodings among `provided`, best first
	pub fn preferred_encodings<'a, C: AsRef<str>>(&self, provided: &'a [C]) -> Vec<&'a str> {
		self.preferred_from::<EncodingSpec, C>(provided)
	}

	/// Best encoding among `provided`
	pub fn encoding<'a, C: AsRef<str>>(&self, provided: &'a [C]) -> Option<&'a str> {
		self.best::<EncodingSpec, C>(provided)
	}

	/// Accepted languages, best first
	pub fn languages(&self) -> Vec<String> {
		self.preferred::<LanguageSpec>()
	}

	/// Acceptable languages among `provided`, best first
	pub fn preferred_languages<'a, C: AsRef<str>>(&self, provided: &'a [C]) -> Vec<&'a str> {
		self.preferred_from::<LanguageSpec, C>(provided)
	}

	/// Best language among `provided`
	pub fn language<'a, C: AsRef<str>>(&self, provided: &'a [C]) -> Option<&'a str> {
		self.best::<LanguageSpec, C>(provided)
	}

	/// Accepted media ranges (`type/subtype`), best first
	pub fn media_types(&self) -> Vec<String> {
		self.preferred::<MediaTypeSpec>()
	}

	/// Acceptable media types among `provided`, best first
	pub fn preferred_media_types<'a, C: AsRef<str>>(&self, provided: &'a [C]) -> Vec<&'a str> {
		self.preferred_from::<MediaTypeSpec, C>(provided)
	}

	/// Best media type among `provided`
	pub fn media_type<'a, C: AsRef<str>>(&self, provided: &'a [C]) -> Option<&'a str> {
		self.best::<MediaTypeSpec, C>(provided)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use http::HeaderValue;
	use http::header::{ACCEPT, ACCEPT_ENCODING, ACCEPT_LANGUAGE};
	use rstest::rstest;

	#[rstest]
	fn test_absent_headers_use_defaults() {
		let negotiator = Negotiator::new();
		assert_eq!(negotiator.media_types(), vec!["*/*"]);
		assert_eq!(negotiator.charsets(), vec!["*"]);
		assert_eq!(negotiator.languages(), vec!["*"]);
		assert_eq!(negotiator.encodings(), vec!["identity"]);
	}

	#[rstest]
	fn test_empty_headers_accept_nothing_but_identity() {
		let negotiator = Negotiator::new()
			.with_accept("")
			.with_accept_charset("")
			.with_accept_encoding("")
			.with_accept_language("");
		assert!(negotiator.media_types().is_empty());
		assert!(negotiator.charsets().is_empty());
		assert!(negotiator.languages().is_empty());
		assert_eq!(negotiator.encodings(), vec!["identity"]);
		assert_eq!(negotiator.media_type(&["text/html"]), None);
	}

	#[rstest]
	fn test_from_headers_joins_repeated_lines() {
		// Arrange
		let mut headers = HeaderMap::new();
		headers.append(ACCEPT_LANGUAGE, HeaderValue::from_static("fr;q=0.5"));
		headers.append(ACCEPT_LANGUAGE, HeaderValue::from_static("de"));
		headers.insert(ACCEPT, HeaderValue::from_static("text/plain"));

		// Act
		let negotiator = Negotiator::from_headers(&headers);

		// Assert
		assert_eq!(negotiator.header(HeaderKind::AcceptLanguage), Some("fr;q=0.5, de"));
		assert_eq!(negotiator.languages(), vec!["de", "fr"]);
		assert_eq!(negotiator.header(HeaderKind::AcceptCharset), None);
		assert_eq!(negotiator.media_type(&["text/html", "text/plain"]), Some("text/plain"));
	}

	#[rstest]
	fn test_from_headers_treats_opaque_value_as_empty() {
		let mut headers = HeaderMap::new();
		headers.insert(ACCEPT_ENCODING, HeaderValue::from_bytes(b"gzip\xff").unwrap());

		let negotiator = Negotiator::from_headers(&headers);

		assert_eq!(negotiator.header(HeaderKind::AcceptEncoding), Some(""));
		assert_eq!(negotiator.encodings(), vec!["identity"]);
	}

	#[rstest]
	fn test_limit_header_length_drops_oversized_headers() {
		let negotiator = Negotiator::new()
			.with_accept("text/html, application/json")
			.with_accept_language("en")
			.limit_header_length(10);
		assert_eq!(negotiator.header(HeaderKind::Accept), None);
		assert_eq!(negotiator.header(HeaderKind::AcceptLanguage), Some("en"));
		assert_eq!(negotiator.media_types(), vec!["*/*"]);
	}

	#[rstest]
	fn test_best_returns_first_ranked() {
		let negotiator = Negotiator::new().with_accept_charset("utf-8;q=0.5, iso-8859-1");
		assert_eq!(negotiator.charset(&["utf-8", "iso-8859-1"]), Some("iso-8859-1"));
		assert_eq!(negotiator.charset(&["koi8-r"]), None);
		assert_eq!(negotiator.charset::<&str>(&[]), None);
	}

	#[rstest]
	fn test_preferred_positions() {
		let negotiator = Negotiator::new().with_accept_encoding("br, gzip;q=0.8");
		let positions =
			negotiator.preferred_positions::<EncodingSpec, _>(&["gzip", "zstd", "br"]);
		assert_eq!(positions, vec![2, 0]);
	}
}
