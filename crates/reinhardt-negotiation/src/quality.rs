//! Quality (q-value) handling

use std::cmp::Ordering;

use crate::tokenizer::{split_key_value, split_parameters};

/// Quality assigned to a clause without a `q` parameter.
pub const DEFAULT_QUALITY: f64 = 1.0;

/// Parses a q-value the way browsers parse numbers in headers.
///
/// Leading whitespace is skipped and the longest numeric prefix (sign, digits,
/// fraction, exponent) is converted; trailing characters are ignored. A signed
/// or bare `Infinity` prefix is infinite. Input without any digits yields
/// `NaN`, which never passes [`is_acceptable`].
///
/// # Examples
///
/// ```
/// use reinhardt_negotiation::quality::parse_quality;
///
/// assert_eq!(parse_quality("0.8"), 0.8);
/// assert_eq!(parse_quality(" .5"), 0.5);
/// assert_eq!(parse_quality("1e-1"), 0.1);
/// assert_eq!(parse_quality("0.7xyz"), 0.7);
/// assert!(parse_quality("abc").is_nan());
/// assert!(parse_quality("").is_nan());
/// ```
pub fn parse_quality(raw: &str) -> f64 {
	let text = raw.trim_start();
	let bytes = text.as_bytes();
	let digits_from = |start: usize| {
		bytes[start..]
			.iter()
			.take_while(|b| b.is_ascii_digit())
			.count()
	};

	let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
	if text[end..].starts_with("Infinity") {
		return if bytes.first() == Some(&b'-') {
			f64::NEG_INFINITY
		} else {
			f64::INFINITY
		};
	}

	let integer_digits = digits_from(end);
	end += integer_digits;

	let mut fraction_digits = 0;
	if bytes.get(end) == Some(&b'.') {
		fraction_digits = digits_from(end + 1);
		if integer_digits + fraction_digits > 0 {
			end += 1 + fraction_digits;
		}
	}

	if integer_digits + fraction_digits == 0 {
		return f64::NAN;
	}

	if matches!(bytes.get(end), Some(b'e' | b'E')) {
		let mut exponent_end = end + 1;
		if matches!(bytes.get(exponent_end), Some(b'+' | b'-')) {
			exponent_end += 1;
		}
		let exponent_digits = digits_from(exponent_end);
		if exponent_digits > 0 {
			end = exponent_end + exponent_digits;
		}
	}

	text[..end].parse().unwrap_or(f64::NAN)
}

/// Whether a clause with this quality may appear in a negotiation result.
///
/// Zero, negative and `NaN` qualities are all rejected.
pub fn is_acceptable(quality: f64) -> bool {
	quality > 0.0
}

/// Orders two qualities ascending, with `NaN` below every number.
pub fn compare_quality(a: f64, b: f64) -> Ordering {
	match (a.is_nan(), b.is_nan()) {
		(true, true) => Ordering::Equal,
		(true, false) => Ordering::Less,
		(false, true) => Ordering::Greater,
		(false, false) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
	}
}

/// Extracts the quality from a charset, encoding or language parameter tail.
///
/// The first parameter named exactly `q` wins and stops the scan.
pub(crate) fn quality_from_parameters(tail: Option<&str>) -> f64 {
	let Some(tail) = tail else {
		return DEFAULT_QUALITY;
	};

	for parameter in split_parameters(tail) {
		let (key, value) = split_key_value(parameter);
		if key == "q" {
			return parse_quality(value.unwrap_or_default());
		}
	}

	DEFAULT_QUALITY
}
