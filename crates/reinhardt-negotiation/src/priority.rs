//! Match scores and the priority resolver
//!
//! A [`MatchScore`] records how one accepted spec covers one candidate. The
//! resolver keeps, per candidate, the score of the spec that describes it
//! best; the ranker then orders candidates by those scores.

use std::cmp::Ordering;

use crate::quality::{compare_quality, is_acceptable};
use crate::spec::AcceptSpec;

/// Score of a candidate against the accepted spec that matched it best
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchScore {
	/// Specificity bitmask of the match; meaning depends on the header kind
	pub specificity: u8,
	/// Quality copied from the matching spec
	pub quality: f64,
	/// Order of the matching spec; `None` when nothing matched
	pub spec_order: Option<usize>,
	/// Position of the candidate in the caller's list
	pub candidate_order: usize,
}

impl MatchScore {
	/// The "no match" sentinel for the candidate at `candidate_order`.
	pub fn none(candidate_order: usize) -> Self {
		Self {
			specificity: 0,
			quality: 0.0,
			spec_order: None,
			candidate_order,
		}
	}

	/// Score of a spec ranked on its own, without any candidate.
	pub fn of_spec<S: AcceptSpec>(spec: &S) -> Self {
		Self {
			specificity: 0,
			quality: spec.quality(),
			spec_order: Some(spec.order()),
			candidate_order: spec.order(),
		}
	}

	/// Whether this score survives the quality filter.
	pub fn is_acceptable(&self) -> bool {
		is_acceptable(self.quality)
	}

	/// Whether `self` describes its candidate strictly better than `other`.
	///
	/// Higher specificity wins, then higher quality, then the spec that came
	/// first in the header.
	pub fn is_preferred_to(&self, other: &MatchScore) -> bool {
		self.specificity
			.cmp(&other.specificity)
			.then_with(|| compare_quality(self.quality, other.quality))
			.then_with(|| other.spec_order.cmp(&self.spec_order))
			== Ordering::Greater
	}
}

/// Total order used to rank scores, best first.
///
/// Quality (descending, `NaN` last), specificity (descending), spec order
/// (ascending), candidate order (ascending).
pub fn rank_order(a: &MatchScore, b: &MatchScore) -> Ordering {
	compare_quality(b.quality, a.quality)
		.then_with(|| b.specificity.cmp(&a.specificity))
		.then_with(|| a.spec_order.cmp(&b.spec_order))
		.then_with(|| a.candidate_order.cmp(&b.candidate_order))
}

/// Scores one prepared candidate against a single spec.
pub fn score<S: AcceptSpec>(
	spec: &S,
	candidate: &S::Candidate,
	candidate_order: usize,
) -> Option<MatchScore> {
	spec.specificity(candidate).map(|specificity| MatchScore {
		specificity,
		quality: spec.quality(),
		spec_order: Some(spec.order()),
		candidate_order,
	})
}

/// Finds the best score for `candidate` among all `specs`.
///
/// Returns the sentinel when no spec matches or the candidate cannot be
/// interpreted for this header kind.
///
/// # Examples
///
/// ```
/// use reinhardt_negotiation::language::LanguageSpec;
/// use reinhardt_negotiation::priority::resolve;
/// use reinhardt_negotiation::spec::parse_header;
///
/// let specs = parse_header::<LanguageSpec>("en;q=0.8, en-GB, *;q=0.1");
///
/// let score = resolve(&specs, "en-GB", 0);
/// assert_eq!(score.specificity, 4);
/// assert_eq!(score.spec_order, Some(1));
///
/// let score = resolve(&specs, "en-US", 1);
/// assert_eq!(score.specificity, 1);
/// assert_eq!(score.quality, 0.8);
/// ```
pub fn resolve<S: AcceptSpec>(specs: &[S], candidate: &str, candidate_order: usize) -> MatchScore {
	let mut best = MatchScore::none(candidate_order);
	let Some(prepared) = S::candidate(candidate) else {
		return best;
	};

	for spec in specs {
		if let Some(found) = score(spec, &prepared, candidate_order)
			&& found.is_preferred_to(&best)
		{
			best = found;
		}
	}

	best
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::charset::CharsetSpec;
	use crate::media_type::MediaTypeSpec;
	use crate::spec::parse_header;
	use rstest::rstest;

	fn scored(specificity: u8, quality: f64, spec_order: usize, candidate_order: usize) -> MatchScore {
		MatchScore {
			specificity,
			quality,
			spec_order: Some(spec_order),
			candidate_order,
		}
	}

	#[rstest]
	fn test_preference_specificity_beats_quality() {
		let specific = scored(2, 0.1, 3, 0);
		let loose = scored(0, 1.0, 0, 0);
		assert!(specific.is_preferred_to(&loose));
		assert!(!loose.is_preferred_to(&specific));
	}

	#[rstest]
	fn test_preference_earlier_spec_wins_ties() {
		let first = scored(1, 0.5, 0, 0);
		let second = scored(1, 0.5, 1, 0);
		assert!(first.is_preferred_to(&second));
		assert!(!second.is_preferred_to(&first));
		assert!(!first.is_preferred_to(&first));
	}

	#[rstest]
	fn test_preference_nan_quality_is_lowest() {
		let nan = scored(0, f64::NAN, 0, 0);
		assert!(!nan.is_preferred_to(&MatchScore::none(0)));
		assert!(MatchScore::none(0).is_preferred_to(&nan));
	}

	#[rstest]
	fn test_rank_order_is_quality_then_specificity_then_orders() {
		// Arrange
		let mut scores = vec![
			scored(1, 0.5, 0, 0),
			scored(0, 0.9, 2, 1),
			scored(2, 0.5, 1, 2),
			scored(2, 0.5, 1, 3),
			scored(2, 0.5, 0, 4),
			scored(0, f64::NAN, 0, 5),
		];

		// Act
		scores.sort_by(rank_order);

		// Assert
		let order: Vec<usize> = scores.iter().map(|s| s.candidate_order).collect();
		assert_eq!(order, vec![1, 4, 2, 3, 0, 5]);
	}

	#[rstest]
	fn test_resolve_picks_most_specific_spec() {
		let specs = parse_header::<MediaTypeSpec>("*/*;q=0.1, text/*;q=0.5, text/html;q=0.2");
		let best = resolve(&specs, "text/html", 7);
		assert_eq!(best, scored(6, 0.2, 2, 7));
	}

	#[rstest]
	fn test_resolve_prefers_first_of_equal_specs() {
		let specs = parse_header::<CharsetSpec>("utf-8;q=0.5, UTF-8;q=0.5");
		assert_eq!(resolve(&specs, "utf-8", 0).spec_order, Some(0));
	}

	#[rstest]
	fn test_resolve_without_match_returns_sentinel() {
		let specs = parse_header::<CharsetSpec>("utf-8");
		assert_eq!(resolve(&specs, "latin1", 3), MatchScore::none(3));
	}
}
