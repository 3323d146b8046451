//! Content-coding negotiation based on the Accept-Encoding header
//!
//! Unlike the other headers, `identity` is acceptable unless the client says
//! otherwise: when no clause names it (directly or through `*`), an `identity`
//! clause is appended with the lowest quality found in the header.

use std::borrow::Cow;

use tracing::trace;

use crate::charset::{flat_specificity, parse_flat_clause};
use crate::header::HeaderKind;
use crate::quality::{DEFAULT_QUALITY, quality_from_parameters};
use crate::spec::AcceptSpec;

/// The content coding that is always implicitly available.
pub const IDENTITY: &str = "identity";

/// One clause of an `Accept-Encoding` header
#[derive(Debug, Clone, PartialEq)]
pub struct EncodingSpec {
	/// Content coding or `*`
	pub value: String,
	/// Quality factor
	pub quality: f64,
	/// Position among the parsed clauses
	pub order: usize,
}

impl EncodingSpec {
	/// Parses an encoding clause (e.g. `"gzip;q=0.8"`).
	pub fn parse(clause: &str, order: usize) -> Option<Self> {
		let (value, tail) = parse_flat_clause(clause)?;
		Some(Self {
			value: value.to_string(),
			quality: quality_from_parameters(tail),
			order,
		})
	}

	fn covers(&self, coding: &str) -> bool {
		flat_specificity(&self.value, coding).is_some()
	}
}

impl AcceptSpec for EncodingSpec {
	const HEADER: HeaderKind = HeaderKind::AcceptEncoding;
	type Candidate = String;

	fn parse(clause: &str, order: usize) -> Option<Self> {
		EncodingSpec::parse(clause, order)
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

	fn complete(specs: &mut Vec<Self>) {
		if specs.iter().any(|spec| spec.covers(IDENTITY)) {
			return;
		}

		// Zero and NaN count as the default so that refusing one coding does
		// not also refuse identity.
		let quality = specs
			.iter()
			.map(|spec| {
				if spec.quality == 0.0 || spec.quality.is_nan() {
					DEFAULT_QUALITY
				} else {
					spec.quality
				}
			})
			.fold(DEFAULT_QUALITY, f64::min);

		trace!(quality, "adding implicit identity encoding");
		specs.push(EncodingSpec {
			value: IDENTITY.to_string(),
			quality,
			order: specs.len(),
		});
	}
}
