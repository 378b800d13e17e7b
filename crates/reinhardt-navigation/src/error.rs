//! Error types for navigation routing.

use reinhardt_route_recognizer::RecognizerError;
use thiserror::Error;

/// Errors produced by the router.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouterError {
	/// Neither matcher nor the catch-all handler produced a result.
	#[error("Route Not Found: {0}")]
	NotFound(String),

	/// A route with an identical pattern is already registered.
	#[error("duplicate route: {0}")]
	DuplicateRoute(String),

	/// Failure reported by the pattern matcher, passed through as-is.
	#[error(transparent)]
	Recognizer(RecognizerError),

	/// A viewport's router-aware setup step failed.
	#[error("viewport setup failed: {0}")]
	ViewPortSetup(String),

	/// The history collaborator rejected a navigation.
	#[error("navigation failed: {0}")]
	NavigationFailed(String),

	/// A router configuration document could not be loaded.
	#[error("invalid router configuration: {0}")]
	Configuration(String),
}

impl From<RecognizerError> for RouterError {
	fn from(err: RecognizerError) -> Self {
		match err {
			RecognizerError::DuplicateRoute(pattern) => Self::DuplicateRoute(pattern),
			other => Self::Recognizer(other),
		}
	}
}

impl From<serde_json::Error> for RouterError {
	fn from(err: serde_json::Error) -> Self {
		Self::Configuration(err.to_string())
	}
}

#[cfg(feature = "toml-config")]
impl From<toml::de::Error> for RouterError {
	fn from(err: toml::de::Error) -> Self {
		Self::Configuration(err.to_string())
	}
}

/// Result type for router operations.
pub type RouterResult<T> = Result<T, RouterError>;
