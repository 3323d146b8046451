//! The request headers that take part in negotiation

use std::fmt;

use http::HeaderName;
use http::header::{ACCEPT, ACCEPT_CHARSET, ACCEPT_ENCODING, ACCEPT_LANGUAGE};

/// One of the four proactive-negotiation request headers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeaderKind {
	/// `Accept`
	Accept,
	/// `Accept-Charset`
	AcceptCharset,
	/// `Accept-Encoding`
	AcceptEncoding,
	/// `Accept-Language`
	AcceptLanguage,
}

impl HeaderKind {
	/// All header kinds, in a fixed order.
	pub const ALL: [HeaderKind; 4] = [
		HeaderKind::Accept,
		HeaderKind::AcceptCharset,
		HeaderKind::AcceptEncoding,
		HeaderKind::AcceptLanguage,
	];

	/// The `http` header name.
	pub fn header_name(self) -> HeaderName {
		match self {
			HeaderKind::Accept => ACCEPT,
			HeaderKind::AcceptCharset => ACCEPT_CHARSET,
			HeaderKind::AcceptEncoding => ACCEPT_ENCODING,
			HeaderKind::AcceptLanguage => ACCEPT_LANGUAGE,
		}
	}

	/// The lower-case header name.
	pub fn as_str(self) -> &'static str {
		match self {
			HeaderKind::Accept => "accept",
			HeaderKind::AcceptCharset => "accept-charset",
			HeaderKind::AcceptEncoding => "accept-encoding",
			HeaderKind::AcceptLanguage => "accept-language",
		}
	}

	/// Value assumed when the request does not carry the header at all.
	///
	/// A missing `Accept`, `Accept-Charset` or `Accept-Language` means "anything"
	/// (RFC 7231 §5.3.2, §5.3.3, §5.3.5). A missing `Accept-Encoding` is treated
	/// like an empty one, which still leaves `identity` acceptable.
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_negotiation::HeaderKind;
	///
	/// assert_eq!(HeaderKind::Accept.absent_default(), "*/*");
	/// assert_eq!(HeaderKind::AcceptLanguage.absent_default(), "*");
	/// assert_eq!(HeaderKind::AcceptEncoding.absent_default(), "");
	/// ```
	pub fn absent_default(self) -> &'static str {
		match self {
			HeaderKind::Accept => "*/*",
			HeaderKind::AcceptCharset | HeaderKind::AcceptLanguage => "*",
			HeaderKind::AcceptEncoding => "",
		}
	}
}

impl fmt::Display for HeaderKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}
