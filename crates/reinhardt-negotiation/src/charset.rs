//! Charset negotiation based on the Accept-Charset header

use std::borrow::Cow;

use crate::header::HeaderKind;
use crate::quality::quality_from_parameters;
use crate::spec::AcceptSpec;
use crate::tokenizer::{is_token_end, parameter_tail, take_until};

/// One clause of an `Accept-Charset` header
#[derive(Debug, Clone, PartialEq)]
pub struct CharsetSpec {
	/// Charset name or `*`, as written by the client
	pub value: String,
	/// Quality factor
	pub quality: f64,
	/// Position among the parsed clauses
	pub order: usize,
}

impl CharsetSpec {
	/// Parses a charset clause (e.g. `"utf-8;q=0.9"`).
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_negotiation::charset::CharsetSpec;
	///
	/// let spec = CharsetSpec::parse("iso-8859-5;q=0.4", 0).unwrap();
	/// assert_eq!(spec.value, "iso-8859-5");
	/// assert_eq!(spec.quality, 0.4);
	///
	/// assert!(CharsetSpec::parse("utf 8", 0).is_none());
	/// ```
	pub fn parse(clause: &str, order: usize) -> Option<Self> {
		let (value, tail) = parse_flat_clause(clause)?;
		Some(Self {
			value: value.to_string(),
			quality: quality_from_parameters(tail),
			order,
		})
	}
}

/// Splits a `value [ ";" params ]` clause, shared by charsets and encodings.
pub(crate) fn parse_flat_clause(clause: &str) -> Option<(&str, Option<&str>)> {
	let (value, rest) = take_until(clause.trim(), is_token_end);
	if value.is_empty() {
		return None;
	}
	Some((value, parameter_tail(rest)?))
}

/// Specificity of a flat (charset or encoding) clause for a candidate.
pub(crate) fn flat_specificity(value: &str, candidate: &str) -> Option<u8> {
	if value.eq_ignore_ascii_case(candidate) {
		Some(1)
	} else if value == "*" {
		Some(0)
	} else {
		None
	}
}

impl AcceptSpec for CharsetSpec {
	const HEADER: HeaderKind = HeaderKind::AcceptCharset;
	type Candidate = String;

	fn parse(clause: &str, order: usize) -> Option<Self> {
		CharsetSpec::parse(clause, order)
	}

	fn candidate(value: &str) -> Option<String> {
		Some(value.to_string())
	}

	fn specificity(&self, candidate: &String) -> Option<u8> {
		flat_specificity(&self.value, candidate)
	}

	fn quality(&self) -> f64 {
		self.quality
	}

	fn order(&self) -> usize {
		self.order
	}

	fn canonical(&self) -> Cow<'_, str> {
		Cow::Borrowed(&self.value)
	}
}
