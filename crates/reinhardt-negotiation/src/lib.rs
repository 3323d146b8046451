//! # Reinhardt Negotiation
//!
//! HTTP content negotiation for the `Accept`, `Accept-Charset`,
//! `Accept-Encoding` and `Accept-Language` request headers.
//!
//! Given the raw header values of a request and the representations a handler
//! can produce, this crate answers two questions:
//!
//! - What does the client accept, best first?
//! - Which of the values I can produce does the client prefer?
//!
//! ## Features
//!
//! - **Lenient parsing**: malformed clauses are skipped, quoted parameter values
//!   may contain `,` and `;`, bad `q` values never match
//! - **RFC 7231 precedence**: the most specific matching range decides a
//!   candidate's quality; ties keep header and candidate order
//! - **Implicit `identity`**: `Accept-Encoding` always allows `identity` unless
//!   the header says otherwise
//! - **Short type names**: [`Accepts::media_type`] resolves `"json"` or
//!   `".html"` through a pluggable [`MimeLookup`]
//!
//! ## Quick Start
//!
//! ```rust
//! use reinhardt_negotiation::Negotiator;
//!
//! let negotiator = Negotiator::new()
//!     .with_accept("text/html;level=1, text/*;q=0.5, */*;q=0.1")
//!     .with_accept_encoding("gzip, br;q=0.9")
//!     .with_accept_language("fr-CH, fr;q=0.9, en;q=0.8");
//!
//! assert_eq!(negotiator.media_type(&["application/json", "text/plain"]), Some("text/plain"));
//! assert_eq!(negotiator.encoding(&["br", "identity"]), Some("br"));
//! assert_eq!(negotiator.languages(), vec!["fr-CH", "fr", "en"]);
//! ```
//!
//! ## Module Organization
//!
//! - [`tokenizer`]: quote-aware splitting of header values
//! - [`quality`]: `q` parameter parsing and ordering
//! - [`spec`], [`charset`], [`encoding`], [`language`], [`media_type`]: parsed
//!   header clauses and how they match candidates
//! - [`priority`], [`ranker`]: precedence and ranking
//! - [`negotiator`]: per-request negotiation over raw header values
//! - [`accepts`]: request-level API with MIME lookup and settings

pub mod accepts;
pub mod charset;
pub mod encoding;
pub mod error;
pub mod header;
pub mod language;
pub mod media_type;
pub mod mime;
pub mod negotiator;
pub mod priority;
pub mod quality;
pub mod ranker;
pub mod settings;
pub mod spec;
pub mod tokenizer;

pub use accepts::Accepts;
pub use charset::CharsetSpec;
pub use encoding::EncodingSpec;
pub use error::{NegotiationError, Result};
pub use header::HeaderKind;
pub use language::LanguageSpec;
pub use media_type::MediaTypeSpec;
#[cfg(feature = "mime-guess")]
pub use mime::MimeGuess;
pub use mime::{MimeLookup, NoMimeLookup};
pub use negotiator::Negotiator;
pub use priority::MatchScore;
pub use settings::NegotiationSettings;
pub use spec::AcceptSpec;
