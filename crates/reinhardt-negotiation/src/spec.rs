//! Accepted specs: the parsed clauses of an `Accept*` header
//!
//! Each header kind provides an [`AcceptSpec`] implementation acting as both
//! its parser and its specificity matcher. Everything downstream (priority
//! resolution and ranking) is generic over this trait.

use std::borrow::Cow;

use tracing::trace;

use crate::header::HeaderKind;
use crate::tokenizer::split_clauses;

/// A single parsed clause of a negotiation header.
pub trait AcceptSpec: Sized {
	/// Header this kind of clause is parsed from.
	const HEADER: HeaderKind;

	/// A provided value, prepared once for matching against every clause.
	type Candidate;

	/// Parses one trimmed clause; `None` drops the clause.
	///
	/// `order` is the number of clauses of the same header parsed so far.
	fn parse(clause: &str, order: usize) -> Option<Self>;

	/// Prepares a provided value for matching; `None` means it can never match.
	fn candidate(value: &str) -> Option<Self::Candidate>;

	/// Specificity bitmask with which this clause covers `candidate`, or
	/// `None` when it does not cover it at all.
	fn specificity(&self, candidate: &Self::Candidate) -> Option<u8>;

	/// Client-assigned quality (may be `NaN`).
	fn quality(&self) -> f64;

	/// Position among the successfully parsed clauses of the header.
	fn order(&self) -> usize;

	/// Canonical string form reported when no candidates are supplied.
	fn canonical(&self) -> Cow<'_, str>;

	/// Hook run once after all clauses of a header are parsed.
	fn complete(_specs: &mut Vec<Self>) {}
}

/// Parses a whole header value into its accepted specs.
///
/// Clauses that do not fit the header grammar are dropped.
///
/// # Examples
///
/// ```
/// use reinhardt_negotiation::charset::CharsetSpec;
/// use reinhardt_negotiation::spec::parse_header;
///
/// let specs = parse_header::<CharsetSpec>("utf-8, ;q=1, iso-8859-1;q=0.5");
/// assert_eq!(specs.len(), 2);
/// assert_eq!(specs[1].value, "iso-8859-1");
/// assert_eq!(specs[1].order, 1);
/// ```
pub fn parse_header<S: AcceptSpec>(header: &str) -> Vec<S> {
	let mut specs = Vec::new();

	for clause in split_clauses(header) {
		match S::parse(clause, specs.len()) {
			Some(spec) => specs.push(spec),
			None if clause.is_empty() => {}
			None => trace!(header = %S::HEADER, clause, "dropping malformed clause"),
		}
	}

	S::complete(&mut specs);
	specs
}
