//! Negotiation errors

use http::StatusCode;
use thiserror::Error;

use crate::header::HeaderKind;

/// Result type for negotiation operations
pub type Result<T> = std::result::Result<T, NegotiationError>;

/// Errors surfaced by the request-level negotiation API.
///
/// Header parsing itself never fails: malformed clauses are skipped. These
/// errors only describe outcomes a caller has to turn into a response.
#[derive(Debug, Error)]
pub enum NegotiationError {
	/// The caller asked for a selection but offered nothing to select from
	#[error("No candidate values were supplied for negotiation")]
	NoCandidates,

	/// None of the offered values satisfies the request header
	#[error("None of the offered values is acceptable for the {header} header")]
	NotAcceptable { header: HeaderKind },

	/// Settings could not be loaded
	#[error("Invalid negotiation settings: {0}")]
	InvalidSettings(#[from] toml::de::Error),
}

impl NegotiationError {
	/// HTTP status a server should answer with for this error.
	///
	/// # Examples
	///
	/// ```
	/// use http::StatusCode;
	/// use reinhardt_negotiation::{HeaderKind, NegotiationError};
	///
	/// let err = NegotiationError::NotAcceptable { header: HeaderKind::Accept };
	/// assert_eq!(err.status_code(), StatusCode::NOT_ACCEPTABLE);
	/// ```
	pub fn status_code(&self) -> StatusCode {
		match self {
			NegotiationError::NotAcceptable { .. } => StatusCode::NOT_ACCEPTABLE,
			NegotiationError::NoCandidates | NegotiationError::InvalidSettings(_) => {
				StatusCode::INTERNAL_SERVER_ERROR
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_not_acceptable_message_names_header() {
		let err = NegotiationError::NotAcceptable {
			header: HeaderKind::AcceptLanguage,
		};
		assert_eq!(
			err.to_string(),
			"None of the offered values is acceptable for the accept-language header"
		);
	}

	#[rstest]
	fn test_no_candidates_is_server_error() {
		assert_eq!(
			NegotiationError::NoCandidates.status_code(),
			StatusCode::INTERNAL_SERVER_ERROR
		);
	}
}
