//! Header value tokenizer
//!
//! Splits `Accept*` header values into clauses and parameters without breaking
//! apart double-quoted parameter values.

/// Splits a header value into its top-level comma-separated clauses.
///
/// A comma inside a double-quoted parameter value does not split. Every clause
/// is trimmed; empty clauses are kept so callers can decide what to do with them.
///
/// # Examples
///
/// ```
/// use reinhardt_negotiation::tokenizer::split_clauses;
///
/// let clauses = split_clauses(r#"text/html;foo="a,b", text/plain"#);
/// assert_eq!(clauses, vec![r#"text/html;foo="a,b""#, "text/plain"]);
/// ```
pub fn split_clauses(header: &str) -> Vec<&str> {
	split_outside_quotes(header, ',')
}

/// Splits the parameter tail of a clause (everything after the first `;`) into
/// its semicolon-separated parameters.
///
/// # Examples
///
/// ```
/// use reinhardt_negotiation::tokenizer::split_parameters;
///
/// let params = split_parameters(r#" level=1 ; title="a;b"; q=0.5"#);
/// assert_eq!(params, vec!["level=1", r#"title="a;b""#, "q=0.5"]);
/// ```
pub fn split_parameters(tail: &str) -> Vec<&str> {
	split_outside_quotes(tail, ';')
}

fn split_outside_quotes(input: &str, delimiter: char) -> Vec<&str> {
	let mut pieces = Vec::new();
	let mut start = 0;
	let mut quotes = 0usize;

	for (index, ch) in input.char_indices() {
		if ch == '"' {
			quotes += 1;
		} else if ch == delimiter && quotes % 2 == 0 {
			pieces.push(input[start..index].trim());
			start = index + ch.len_utf8();
			quotes = 0;
		}
	}
	pieces.push(input[start..].trim());

	pieces
}

/// Splits a `name=value` parameter at its first `=`.
///
/// Both halves are trimmed. A parameter without `=` has no value.
pub fn split_key_value(parameter: &str) -> (&str, Option<&str>) {
	match parameter.split_once('=') {
		Some((key, value)) => (key.trim(), Some(value.trim())),
		None => (parameter.trim(), None),
	}
}

/// Removes one pair of surrounding double quotes, if present.
pub fn unquote(value: &str) -> &str {
	if value.len() >= 2 && value.starts_with('"') && value.ends_with('"') {
		&value[1..value.len() - 1]
	} else {
		value
	}
}

/// Takes the longest prefix of `input` made of characters rejected by `stop`.
///
/// Returns the prefix and the remainder.
pub(crate) fn take_until(input: &str, stop: impl Fn(char) -> bool) -> (&str, &str) {
	let end = input.find(stop).unwrap_or(input.len());
	input.split_at(end)
}

/// Interprets what follows the leading token(s) of a clause.
///
/// Optional whitespace followed by end of input yields `Some(None)`; optional
/// whitespace followed by `;` yields the parameter tail; anything else means
/// the clause is malformed.
pub(crate) fn parameter_tail(rest: &str) -> Option<Option<&str>> {
	let rest = rest.trim_start();
	if rest.is_empty() {
		Some(None)
	} else {
		rest.strip_prefix(';').map(Some)
	}
}

/// Characters that end a token in every `Accept*` grammar.
pub(crate) fn is_token_end(ch: char) -> bool {
	ch.is_whitespace() || ch == ';'
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("gzip, deflate", vec!["gzip", "deflate"])]
	#[case("  en-US ,fr;q=0.5 ", vec!["en-US", "fr;q=0.5"])]
	#[case("", vec![""])]
	#[case("a,,b", vec!["a", "", "b"])]
	fn test_split_clauses(#[case] header: &str, #[case] expected: Vec<&str>) {
		assert_eq!(split_clauses(header), expected);
	}

	#[rstest]
	fn test_split_clauses_keeps_quoted_commas_together() {
		// Arrange
		let header = r#"text/html;foo="a,b", text/plain"#;

		// Act
		let clauses = split_clauses(header);

		// Assert
		assert_eq!(clauses.len(), 2);
		assert_eq!(clauses[0], r#"text/html;foo="a,b""#);
		assert_eq!(clauses[1], "text/plain");
	}

	#[rstest]
	fn test_split_clauses_with_unbalanced_quote_swallows_rest() {
		let clauses = split_clauses(r#"text/html;foo="a, text/plain, */*"#);
		assert_eq!(clauses.len(), 1);
	}

	#[rstest]
	fn test_split_parameters_respects_quotes() {
		let params = split_parameters(r#"a="x;y";b=2"#);
		assert_eq!(params, vec![r#"a="x;y""#, "b=2"]);
	}

	#[rstest]
	#[case("q=0.5", ("q", Some("0.5")))]
	#[case(" level = 1 ", ("level", Some("1")))]
	#[case("flag", ("flag", None))]
	#[case("a=b=c", ("a", Some("b=c")))]
	fn test_split_key_value(#[case] parameter: &str, #[case] expected: (&str, Option<&str>)) {
		assert_eq!(split_key_value(parameter), expected);
	}

	#[rstest]
	#[case(r#""utf-8""#, "utf-8")]
	#[case(r#""""#, "")]
	#[case(r#"""#, r#"""#)]
	#[case("plain", "plain")]
	#[case(r#""half"#, r#""half"#)]
	fn test_unquote(#[case] value: &str, #[case] expected: &str) {
		assert_eq!(unquote(value), expected);
	}

	#[rstest]
	fn test_parameter_tail() {
		assert_eq!(parameter_tail(""), Some(None));
		assert_eq!(parameter_tail("   "), Some(None));
		assert_eq!(parameter_tail(" ;q=1"), Some(Some("q=1")));
		assert_eq!(parameter_tail(" junk"), None);
	}
}
