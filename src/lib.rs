//! # Reinhardt Accepts
//!
//! HTTP content negotiation for Reinhardt applications.
//!
//! This facade re-exports [`reinhardt_negotiation`], which decides between the
//! representations a handler can produce using the request's `Accept`,
//! `Accept-Charset`, `Accept-Encoding` and `Accept-Language` headers.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `mime-guess` - Resolve short type names (`"json"`, `".html"`) through the
//!   `mime_guess` extension database
//!
//! ## Quick Example
//!
//! ```rust
//! use reinhardt_accepts::prelude::*;
//!
//! let accepts = Accepts::new(
//!     Negotiator::new()
//!         .with_accept("application/json;q=0.9, text/html")
//!         .with_accept_language("da, en-GB;q=0.8, en;q=0.7"),
//! )
//! .with_lookup(NoMimeLookup);
//!
//! assert_eq!(accepts.media_type(&["application/json", "text/html"]).unwrap(), "text/html");
//! assert_eq!(accepts.language(&["en-US", "en-GB"]), Some("en-GB"));
//!
//! match accepts.media_type(&["image/png"]) {
//!     Err(err) => assert_eq!(err.status_code(), http::StatusCode::NOT_ACCEPTABLE),
//!     Ok(chosen) => unreachable!("{chosen} should not be acceptable"),
//! }
//! ```

pub use reinhardt_negotiation as negotiation;

pub use reinhardt_negotiation::{
	Accepts, HeaderKind, NegotiationError, NegotiationSettings, Negotiator, Result,
};

/// Commonly used types
pub mod prelude {
	#[cfg(feature = "mime-guess")]
	pub use reinhardt_negotiation::MimeGuess;
	pub use reinhardt_negotiation::{
		AcceptSpec, Accepts, HeaderKind, MimeLookup, NegotiationError, NegotiationSettings,
		Negotiator, NoMimeLookup,
	};
}
