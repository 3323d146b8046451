//! Media type negotiation based on the Accept header

use std::borrow::Cow;

use indexmap::IndexMap;

use crate::header::HeaderKind;
use crate::quality::{DEFAULT_QUALITY, parse_quality};
use crate::spec::AcceptSpec;
use crate::tokenizer::{
	is_token_end, parameter_tail, split_key_value, split_parameters, take_until, unquote,
};

/// One media range of an `Accept` header
#[derive(Debug, Clone, PartialEq)]
pub struct MediaTypeSpec {
	/// Top-level type or `*`
	pub type_: String,
	/// Subtype or `*`
	pub subtype: String,
	/// Parameters that precede `q`, by lower-cased name, values unquoted
	pub params: IndexMap<String, Option<String>>,
	/// Quality factor
	pub quality: f64,
	/// Position among the parsed clauses
	pub order: usize,
}

impl MediaTypeSpec {
	/// Creates a media range without parameters and with quality 1.0
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_negotiation::media_type::MediaTypeSpec;
	///
	/// let json = MediaTypeSpec::new("application", "json");
	/// assert_eq!(json.essence(), "application/json");
	/// assert_eq!(json.quality, 1.0);
	/// ```
	pub fn new(type_: impl Into<String>, subtype: impl Into<String>) -> Self {
		Self {
			type_: type_.into(),
			subtype: subtype.into(),
			params: IndexMap::new(),
			quality: DEFAULT_QUALITY,
			order: 0,
		}
	}

	/// Parses a media range (e.g., `text/html;level=1;q=0.5`)
	///
	/// Parameters are collected in order until `q` is reached; `q` sets the
	/// quality and everything after it is ignored.
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_negotiation::media_type::MediaTypeSpec;
	///
	/// let spec = MediaTypeSpec::parse(r#"text/html; Level="1"; q=0.5; x=y"#, 0).unwrap();
	/// assert_eq!(spec.type_, "text");
	/// assert_eq!(spec.subtype, "html");
	/// assert_eq!(spec.params.get("level"), Some(&Some("1".to_string())));
	/// assert!(!spec.params.contains_key("x"));
	/// assert_eq!(spec.quality, 0.5);
	///
	/// assert!(MediaTypeSpec::parse("text", 0).is_none());
	/// ```
	pub fn parse(clause: &str, order: usize) -> Option<Self> {
		let (type_, rest) = take_until(clause.trim(), |ch| is_token_end(ch) || ch == '/');
		if type_.is_empty() {
			return None;
		}
		let (subtype, rest) = take_until(rest.strip_prefix('/')?, is_token_end);
		if subtype.is_empty() {
			return None;
		}
		let tail = parameter_tail(rest)?;

		let mut params = IndexMap::new();
		let mut quality = DEFAULT_QUALITY;
		for parameter in tail.map(split_parameters).unwrap_or_default() {
			let (name, value) = split_key_value(parameter);
			let name = name.to_ascii_lowercase();
			let value = value.map(unquote);

			if name == "q" {
				quality = parse_quality(value.unwrap_or_default());
				break;
			}
			if !name.is_empty() {
				params.insert(name, value.map(str::to_string));
			}
		}

		Some(Self {
			type_: type_.to_string(),
			subtype: subtype.to_string(),
			params,
			quality,
			order,
		})
	}

	/// `type/subtype`, without parameters
	pub fn essence(&self) -> String {
		format!("{}/{}", self.type_, self.subtype)
	}

	fn params_satisfied_by(&self, candidate: &MediaTypeSpec) -> bool {
		self.params.iter().all(|(name, value)| {
			let value = value.as_deref().unwrap_or_default();
			let offered = candidate
				.params
				.get(name)
				.and_then(|v| v.as_deref())
				.unwrap_or_default();
			value == "*" || value.eq_ignore_ascii_case(offered)
		})
	}
}

impl AcceptSpec for MediaTypeSpec {
	const HEADER: HeaderKind = HeaderKind::Accept;
	type Candidate = MediaTypeSpec;

	fn parse(clause: &str, order: usize) -> Option<Self> {
		MediaTypeSpec::parse(clause, order)
	}

	fn candidate(value: &str) -> Option<MediaTypeSpec> {
		MediaTypeSpec::parse(value, 0)
	}

	fn specificity(&self, candidate: &MediaTypeSpec) -> Option<u8> {
		let mut specificity = 0;

		if self.type_.eq_ignore_ascii_case(&candidate.type_) {
			specificity |= 4;
		} else if self.type_ != "*" {
			return None;
		}

		if self.subtype.eq_ignore_ascii_case(&candidate.subtype) {
			specificity |= 2;
		} else if self.subtype != "*" {
			return None;
		}

		if !self.params.is_empty() {
			if !self.params_satisfied_by(candidate) {
				return None;
			}
			specificity |= 1;
		}

		Some(specificity)
	}

	fn quality(&self) -> f64 {
		self.quality
	}

	fn order(&self) -> usize {
		self.order
	}

	fn canonical(&self) -> Cow<'_, str> {
		Cow::Owned(self.essence())
	}
}
