//! Ranking of accepted specs and candidates

use tracing::trace;

use crate::priority::{MatchScore, rank_order, resolve};
use crate::spec::AcceptSpec;

/// Ranks the specs of a header by themselves, best first, as canonical strings.
///
/// Specs whose quality is not positive are left out.
///
/// # Examples
///
/// ```
/// use reinhardt_negotiation::charset::CharsetSpec;
/// use reinhardt_negotiation::ranker::rank_specs;
/// use reinhardt_negotiation::spec::parse_header;
///
/// let specs = parse_header::<CharsetSpec>("utf-8, iso-8859-1;q=0.2, utf-7;q=0.5, ascii;q=0");
/// assert_eq!(rank_specs(&specs), vec!["utf-8", "utf-7", "iso-8859-1"]);
/// ```
pub fn rank_specs<S: AcceptSpec>(specs: &[S]) -> Vec<String> {
	let mut scored: Vec<(MatchScore, &S)> = specs
		.iter()
		.map(|spec| (MatchScore::of_spec(spec), spec))
		.filter(|(score, _)| score.is_acceptable())
		.collect();
	scored.sort_by(|(a, _), (b, _)| rank_order(a, b));

	scored
		.into_iter()
		.map(|(_, spec)| spec.canonical().into_owned())
		.collect()
}

/// Ranks provided values against the specs of a header, best first.
///
/// Returns positions into `provided`. Values no spec accepts with a positive
/// quality are left out.
pub fn rank_positions<S: AcceptSpec, C: AsRef<str>>(specs: &[S], provided: &[C]) -> Vec<usize> {
	let mut scores: Vec<MatchScore> = provided
		.iter()
		.enumerate()
		.map(|(index, candidate)| resolve(specs, candidate.as_ref(), index))
		.filter(MatchScore::is_acceptable)
		.collect();
	scores.sort_by(rank_order);

	trace!(
		header = %S::HEADER,
		provided = provided.len(),
		acceptable = scores.len(),
		"ranked candidates"
	);

	scores.into_iter().map(|score| score.candidate_order).collect()
}

/// Ranks provided values against the specs of a header, returning the values
/// themselves, best first.
///
/// # Examples
///
/// ```
/// use reinhardt_negotiation::media_type::MediaTypeSpec;
/// use reinhardt_negotiation::ranker::rank_candidates;
/// use reinhardt_negotiation::spec::parse_header;
///
/// let specs = parse_header::<MediaTypeSpec>("text/html, text/*;q=0.9, */*;q=0.8");
/// let provided = ["text/plain", "text/html", "application/json"];
/// assert_eq!(
///     rank_candidates(&specs, &provided),
///     vec!["text/html", "text/plain", "application/json"]
/// );
/// ```
pub fn rank_candidates<'a, S: AcceptSpec, C: AsRef<str>>(
	specs: &[S],
	provided: &'a [C],
) -> Vec<&'a str> {
	rank_positions(specs, provided)
		.into_iter()
		.map(|index| provided[index].as_ref())
		.collect()
}
