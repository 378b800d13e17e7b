//! Route pattern recognizer for client-side navigation.
//!
//! [`RouteRecognizer`] holds an ordered set of compiled patterns, each bound
//! to a caller-defined handler value. It exposes three operations:
//!
//! - [`RouteRecognizer::add`] registers patterns
//! - [`RouteRecognizer::recognize`] matches a URL and returns every matching
//!   handler, most specific first
//! - [`RouteRecognizer::generate`] rebuilds a URL for a named route
//!
//! # Example
//!
//! ```rust
//! use reinhardt_route_recognizer::{RouteEntry, RouteRecognizer};
//!
//! let mut recognizer = RouteRecognizer::new();
//! recognizer
//!     .add([RouteEntry::new("users/:id", "user-detail").with_name("user")])
//!     .unwrap();
//!
//! let results = recognizer.recognize("users/42?tab=info").unwrap();
//! assert_eq!(results[0].handler, "user-detail");
//! assert_eq!(results[0].params["id"], "42");
//! assert_eq!(results[0].query_params["tab"], "info");
//! ```

pub mod error;
pub mod pattern;
pub mod query;

pub use error::RecognizerError;
pub use pattern::{PathMatch, RoutePattern, Segment, Specificity};
pub use query::{parse_query_string, split_query};

use std::collections::HashMap;

/// A pattern/handler pair to register.
#[derive(Debug, Clone)]
pub struct RouteEntry<H> {
	/// The route pattern.
	pub path: String,
	/// The value returned when the pattern matches.
	pub handler: H,
	/// Optional name for URL generation.
	pub name: Option<String>,
}

impl<H> RouteEntry<H> {
	/// Creates an unnamed entry.
	pub fn new(path: impl Into<String>, handler: H) -> Self {
		Self {
			path: path.into(),
			handler,
			name: None,
		}
	}

	/// Sets the name used by [`RouteRecognizer::generate`].
	pub fn with_name(mut self, name: impl Into<String>) -> Self {
		self.name = Some(name.into());
		self
	}
}

/// A single match produced by [`RouteRecognizer::recognize`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecognizedRoute<H> {
	/// The handler registered with the matching pattern.
	pub handler: H,
	/// Captured path parameters.
	pub params: HashMap<String, String>,
	/// Captured path parameters before percent-decoding.
	pub raw_params: HashMap<String, String>,
	/// Parsed query string parameters.
	pub query_params: HashMap<String, String>,
	/// Whether the pattern contains dynamic or star segments.
	pub is_dynamic: bool,
}

#[derive(Debug, Clone)]
struct CompiledRoute<H> {
	pattern: RoutePattern,
	handler: H,
}

/// Ordered collection of compiled route patterns.
#[derive(Debug, Clone)]
pub struct RouteRecognizer<H> {
	routes: Vec<CompiledRoute<H>>,
	names: HashMap<String, usize>,
}

impl<H> Default for RouteRecognizer<H> {
	fn default() -> Self {
		Self {
			routes: Vec::new(),
			names: HashMap::new(),
		}
	}
}

impl<H: Clone> RouteRecognizer<H> {
	/// Creates an empty recognizer.
	pub fn new() -> Self {
		Self::default()
	}

	/// Registers entries in order.
	///
	/// Entries before a failing one stay registered. A name already taken
	/// keeps pointing at its first pattern, so [`generate`](Self::generate)
	/// resolves to the earliest registration.
	///
	/// # Errors
	///
	/// Returns [`RecognizerError::InvalidPattern`] for a pattern that does not
	/// compile and [`RecognizerError::DuplicateRoute`] for a pattern already
	/// registered with the same segments.
	pub fn add(
		&mut self,
		entries: impl IntoIterator<Item = RouteEntry<H>>,
	) -> Result<(), RecognizerError> {
		for entry in entries {
			let pattern = RoutePattern::new(&entry.path)?;

			if self.contains(&pattern) {
				return Err(RecognizerError::DuplicateRoute(entry.path));
			}

			let index = self.routes.len();
			if let Some(name) = entry.name {
				self.names.entry(name).or_insert(index);
			}
			self.routes.push(CompiledRoute {
				pattern,
				handler: entry.handler,
			});
		}
		Ok(())
	}

	/// Matches `url` against every registered pattern.
	///
	/// The query string is split off at the first `?` and parsed into
	/// `query_params` of every result. Results are ordered by
	/// [`Specificity::precedence`], then by registration order. Returns
	/// `None` when nothing matches.
	pub fn recognize(&self, url: &str) -> Option<Vec<RecognizedRoute<H>>> {
		let (path, query) = split_query(url);
		let query_params = query.map(parse_query_string).unwrap_or_default();

		let mut matched: Vec<(&CompiledRoute<H>, PathMatch)> = self
			.routes
			.iter()
			.filter_map(|route| route.pattern.match_path(path).map(|found| (route, found)))
			.collect();

		if matched.is_empty() {
			return None;
		}

		// Stable sort keeps registration order among equal specificities.
		matched.sort_by(|(a, _), (b, _)| {
			a.pattern
				.specificity()
				.precedence(&b.pattern.specificity())
		});

		Some(
			matched
				.into_iter()
				.map(|(route, found)| RecognizedRoute {
					handler: route.handler.clone(),
					is_dynamic: !route.pattern.param_names().is_empty(),
					params: found.params,
					raw_params: found.raw_params,
					query_params: query_params.clone(),
				})
				.collect(),
		)
	}

	/// Generates a URL for the route registered under `name`.
	///
	/// # Errors
	///
	/// Returns [`RecognizerError::UnknownRouteName`] if no route has that name
	/// and [`RecognizerError::MissingParameter`] if a capture is not supplied.
	pub fn generate(
		&self,
		name: &str,
		params: &HashMap<String, String>,
	) -> Result<String, RecognizerError> {
		let index = self
			.names
			.get(name)
			.ok_or_else(|| RecognizerError::UnknownRouteName(name.to_string()))?;

		self.routes[*index].pattern.reverse(params)
	}

	/// Checks if a pattern with the same segments is registered.
	pub fn contains(&self, pattern: &RoutePattern) -> bool {
		self.routes.iter().any(|route| route.pattern == *pattern)
	}

	/// Checks if a route name exists.
	pub fn has_route(&self, name: &str) -> bool {
		self.names.contains_key(name)
	}

	/// Returns the number of registered patterns.
	pub fn len(&self) -> usize {
		self.routes.len()
	}

	/// Returns whether no pattern is registered.
	pub fn is_empty(&self) -> bool {
		self.routes.is_empty()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_recognize_none_when_empty() {
		let recognizer: RouteRecognizer<&str> = RouteRecognizer::new();
		assert!(recognizer.recognize("anything").is_none());
		assert!(recognizer.is_empty());
	}

	#[rstest]
	fn test_duplicate_pattern_rejected() {
		let mut recognizer = RouteRecognizer::new();
		recognizer.add([RouteEntry::new("users", 1)]).unwrap();

		let result = recognizer.add([RouteEntry::new("/users/", 2)]);

		assert_eq!(
			result,
			Err(RecognizerError::DuplicateRoute("/users/".to_string()))
		);
		assert_eq!(recognizer.len(), 1);
	}

	#[rstest]
	fn test_contains_compares_segments() {
		let mut recognizer = RouteRecognizer::new();
		recognizer.add([RouteEntry::new("users/:id", 1)]).unwrap();

		assert!(recognizer.contains(&RoutePattern::new("/users/:id/").unwrap()));
		assert!(!recognizer.contains(&RoutePattern::new("users").unwrap()));
	}

	#[rstest]
	fn test_registration_order_breaks_ties() {
		let mut recognizer = RouteRecognizer::new();
		recognizer
			.add([
				RouteEntry::new("a/:x", "first"),
				RouteEntry::new(":y/b", "second"),
			])
			.unwrap();

		let results = recognizer.recognize("a/b").unwrap();
		let handlers: Vec<_> = results.iter().map(|r| r.handler).collect();
		assert_eq!(handlers, vec!["first", "second"]);
	}

	#[rstest]
	fn test_generate_named_route() {
		let mut recognizer = RouteRecognizer::new();
		recognizer
			.add([RouteEntry::new("users/:id", ()).with_name("user")])
			.unwrap();

		let mut params = HashMap::new();
		params.insert("id".to_string(), "42".to_string());

		assert!(recognizer.has_route("user"));
		assert_eq!(recognizer.generate("user", &params).unwrap(), "/users/42");
		assert_eq!(
			recognizer.generate("missing", &params),
			Err(RecognizerError::UnknownRouteName("missing".to_string()))
		);
	}
}
