use http::header::{ACCEPT, ACCEPT_ENCODING};
use http::{HeaderMap, HeaderValue};
use reinhardt_accepts::negotiation::encoding::IDENTITY;
use reinhardt_accepts::prelude::*;
use rstest::rstest;

#[rstest]
fn test_facade_negotiates_request_headers() {
	// Arrange
	let mut headers = HeaderMap::new();
	headers.insert(ACCEPT, HeaderValue::from_static("application/json, */*;q=0.1"));
	headers.insert(ACCEPT_ENCODING, HeaderValue::from_static("br;q=0.5"));

	// Act
	let accepts = Accepts::from_headers(&headers).with_lookup(NoMimeLookup);

	// Assert
	assert_eq!(
		accepts.media_type(&["text/csv", "application/json"]).unwrap(),
		"application/json"
	);
	assert_eq!(accepts.encodings(), vec!["br", IDENTITY]);
}

#[rstest]
fn test_facade_settings_round_trip() {
	let settings = NegotiationSettings::from_toml_str("max_header_length = 16").unwrap();
	let accepts = Accepts::new(Negotiator::new().with_accept("application/vnd.example+json"))
		.with_settings(&settings);

	assert_eq!(accepts.negotiator().header(HeaderKind::Accept), None);
	assert_eq!(accepts.media_types(), vec!["*/*"]);
}
