//! Error types for route recognition.

use thiserror::Error;

/// Errors raised while registering patterns or generating URLs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecognizerError {
	/// The pattern string could not be compiled.
	#[error("invalid route pattern '{pattern}': {reason}")]
	InvalidPattern {
		/// The offending pattern.
		pattern: String,
		/// Why it was rejected.
		reason: String,
	},

	/// An identical pattern is already registered.
	#[error("route pattern already registered: {0}")]
	DuplicateRoute(String),

	/// No route is registered under the requested name.
	#[error("no route registered under name: {0}")]
	UnknownRouteName(String),

	/// A capture required to generate a URL was not supplied.
	#[error("missing parameter: {0}")]
	MissingParameter(String),
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_error_display() {
		let err = RecognizerError::InvalidPattern {
			pattern: "users/:".to_string(),
			reason: "dynamic segment without a name".to_string(),
		};
		assert!(err.to_string().contains("users/:"));
		assert!(err.to_string().contains("without a name"));

		assert_eq!(
			RecognizerError::UnknownRouteName("home".to_string()).to_string(),
			"no route registered under name: home"
		);
	}
}
