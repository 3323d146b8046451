use http::header::{ACCEPT, ACCEPT_CHARSET, ACCEPT_ENCODING, ACCEPT_LANGUAGE};
use http::{HeaderMap, HeaderValue, StatusCode};
use reinhardt_negotiation::mime::Overrides;
use reinhardt_negotiation::{
	Accepts, HeaderKind, NegotiationError, NegotiationSettings, Negotiator, NoMimeLookup,
};
use rstest::{fixture, rstest};

#[fixture]
fn headers() -> HeaderMap {
	let mut headers = HeaderMap::new();
	headers.insert(
		ACCEPT,
		HeaderValue::from_static("text/html, application/xhtml+xml, application/xml;q=0.9, */*;q=0.8"),
	);
	headers.insert(ACCEPT_CHARSET, HeaderValue::from_static("utf-8, iso-8859-1;q=0.5"));
	headers.insert(ACCEPT_ENCODING, HeaderValue::from_static("gzip, deflate, br"));
	headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("de-DE, de;q=0.9, en;q=0.5"));
	headers
}

#[rstest]
fn test_browser_request(headers: HeaderMap) {
	// Arrange
	let accepts = Accepts::from_headers(&headers).with_lookup(NoMimeLookup);

	// Act & Assert
	assert_eq!(
		accepts.media_types(),
		vec!["text/html", "application/xhtml+xml", "application/xml", "*/*"]
	);
	assert_eq!(
		accepts
			.media_type(&["application/json", "application/xml"])
			.unwrap(),
		"application/xml"
	);
	assert_eq!(accepts.charset(&["iso-8859-1", "utf-8"]), Some("utf-8"));
	assert_eq!(accepts.encodings(), vec!["gzip", "deflate", "br", "identity"]);
	assert_eq!(accepts.language(&["en", "de"]), Some("de"));
}

#[rstest]
fn test_short_names_with_overrides(headers: HeaderMap) {
	let lookup = Overrides::new(NoMimeLookup)
		.with_type("html", "text/html")
		.with_type("json", "application/json");
	let accepts = Accepts::from_headers(&headers).with_lookup(lookup);

	assert_eq!(accepts.media_type(&["json", "html"]).unwrap(), "html");
	assert_eq!(accepts.media_type(&[".json", "nope"]).unwrap(), ".json");
}

#[rstest]
fn test_not_acceptable_is_distinct_from_no_candidates() {
	let accepts = Accepts::new(Negotiator::new().with_accept("image/*")).with_lookup(NoMimeLookup);

	let not_acceptable = accepts.media_type(&["text/html", "unresolvable"]).unwrap_err();
	assert!(matches!(
		not_acceptable,
		NegotiationError::NotAcceptable {
			header: HeaderKind::Accept
		}
	));
	assert_eq!(not_acceptable.status_code(), StatusCode::NOT_ACCEPTABLE);

	let no_candidates = accepts.media_type::<&str>(&[]).unwrap_err();
	assert!(matches!(no_candidates, NegotiationError::NoCandidates));
	assert_eq!(no_candidates.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[rstest]
fn test_missing_accept_returns_first_type() {
	let accepts = Accepts::new(Negotiator::new()).with_lookup(NoMimeLookup);
	assert_eq!(accepts.media_type(&["unresolvable", "text/html"]).unwrap(), "unresolvable");
}

#[rstest]
fn test_settings_from_toml() {
	// Arrange
	let settings = NegotiationSettings::from_toml_str(
		r#"
max_header_length = 48

[mime_types]
feed = "application/atom+xml"
"#,
	)
	.unwrap();
	let mut headers = HeaderMap::new();
	headers.insert(ACCEPT, HeaderValue::from_static("application/atom+xml, text/html;q=0.5"));
	headers.insert(
		ACCEPT_LANGUAGE,
		HeaderValue::from_static("en-US, en;q=0.9, fr;q=0.8, de;q=0.7, it;q=0.6, es;q=0.5, ja;q=0.4"),
	);

	// Act
	let accepts = Accepts::from_headers(&headers)
		.with_lookup(NoMimeLookup)
		.with_settings(&settings);

	// Assert
	assert_eq!(accepts.media_type(&["text/html", "feed"]).unwrap(), "feed");
	assert_eq!(accepts.negotiator().header(HeaderKind::AcceptLanguage), None);
	assert_eq!(accepts.language(&["ja"]), Some("ja"));
}

#[cfg(feature = "mime-guess")]
#[rstest]
fn test_default_lookup_resolves_extensions(headers: HeaderMap) {
	let accepts = Accepts::from_headers(&headers);
	assert_eq!(accepts.media_type(&["json", "html"]).unwrap(), "html");
	assert_eq!(accepts.media_type(&["png"]).unwrap(), "png");
}
