//! Language negotiation based on the Accept-Language header

use std::borrow::Cow;

use crate::header::HeaderKind;
use crate::quality::{DEFAULT_QUALITY, quality_from_parameters};
use crate::spec::AcceptSpec;
use crate::tokenizer::{is_token_end, parameter_tail, take_until};

/// One clause of an `Accept-Language` header
#[derive(Debug, Clone, PartialEq)]
pub struct LanguageSpec {
	/// Primary tag (e.g., "en", "fr", or "*")
	pub primary: String,
	/// Everything after the first `-` (e.g., "US", "Hant-TW")
	pub sub: Option<String>,
	/// `primary` or `primary-sub`
	pub full: String,
	/// Quality factor
	pub quality: f64,
	/// Position among the parsed clauses
	pub order: usize,
}

impl LanguageSpec {
	/// Creates a language range with quality 1.0
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_negotiation::language::LanguageSpec;
	///
	/// let en = LanguageSpec::new("en");
	/// assert_eq!(en.full, "en");
	/// assert_eq!(en.quality, 1.0);
	/// assert_eq!(en.sub, None);
	/// ```
	pub fn new(primary: impl Into<String>) -> Self {
		let primary = primary.into();
		Self {
			full: primary.clone(),
			primary,
			sub: None,
			quality: DEFAULT_QUALITY,
			order: 0,
		}
	}

	/// Creates a language range with a sub-tag
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_negotiation::language::LanguageSpec;
	///
	/// let en_us = LanguageSpec::with_subtag("en", "US");
	/// assert_eq!(en_us.full, "en-US");
	/// assert_eq!(en_us.sub.as_deref(), Some("US"));
	/// ```
	pub fn with_subtag(primary: impl Into<String>, sub: impl Into<String>) -> Self {
		let primary = primary.into();
		let sub = sub.into();
		Self {
			full: format!("{primary}-{sub}"),
			primary,
			sub: Some(sub),
			quality: DEFAULT_QUALITY,
			order: 0,
		}
	}

	/// Parses a language clause (e.g., "en-US;q=0.9")
	///
	/// Tags keep the case the client sent; matching is case-insensitive.
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_negotiation::language::LanguageSpec;
	///
	/// let lang = LanguageSpec::parse("en-US;q=0.9", 0).unwrap();
	/// assert_eq!(lang.primary, "en");
	/// assert_eq!(lang.sub.as_deref(), Some("US"));
	/// assert_eq!(lang.quality, 0.9);
	///
	/// let script = LanguageSpec::parse("zh-Hant-TW", 1).unwrap();
	/// assert_eq!(script.primary, "zh");
	/// assert_eq!(script.sub.as_deref(), Some("Hant-TW"));
	///
	/// assert!(LanguageSpec::parse("en-", 0).is_none());
	/// ```
	pub fn parse(clause: &str, order: usize) -> Option<Self> {
		let (primary, rest) = take_until(clause.trim(), |ch| is_token_end(ch) || ch == '-');
		if primary.is_empty() {
			return None;
		}

		let (sub, rest) = match rest.strip_prefix('-') {
			Some(after) => {
				let (sub, rest) = take_until(after, is_token_end);
				if sub.is_empty() {
					return None;
				}
				(Some(sub), rest)
			}
			None => (None, rest),
		};
		let tail = parameter_tail(rest)?;

		let full = match sub {
			Some(sub) => format!("{primary}-{sub}"),
			None => primary.to_string(),
		};

		Some(Self {
			primary: primary.to_string(),
			sub: sub.map(str::to_string),
			full,
			quality: quality_from_parameters(tail),
			order,
		})
	}
}

impl AcceptSpec for LanguageSpec {
	const HEADER: HeaderKind = HeaderKind::AcceptLanguage;
	type Candidate = LanguageSpec;

	fn parse(clause: &str, order: usize) -> Option<Self> {
		LanguageSpec::parse(clause, order)
	}

	fn candidate(value: &str) -> Option<LanguageSpec> {
		LanguageSpec::parse(value, 0)
	}

	/// Exact tag → 4, this range is the candidate's prefix → 2, the candidate
	/// is this range's prefix → 1, `*` → 0.
	fn specificity(&self, candidate: &LanguageSpec) -> Option<u8> {
		if self.full.eq_ignore_ascii_case(&candidate.full) {
			Some(4)
		} else if self.primary.eq_ignore_ascii_case(&candidate.full) {
			Some(2)
		} else if self.full.eq_ignore_ascii_case(&candidate.primary) {
			Some(1)
		} else if self.full == "*" {
			Some(0)
		} else {
			None
		}
	}

	fn quality(&self) -> f64 {
		self.quality
	}

	fn order(&self) -> usize {
		self.order
	}

	fn canonical(&self) -> Cow<'_, str> {
		Cow::Borrowed(&self.full)
	}
}
