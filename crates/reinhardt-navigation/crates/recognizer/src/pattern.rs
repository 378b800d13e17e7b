//! Route pattern compilation.
//!
//! A pattern is split into `/`-separated segments:
//! - `users` - static segment, matched literally
//! - `:id` or `{id}` - dynamic segment, captures one path segment
//! - `*rest` or `{rest:*}` - star segment, captures the remainder (may contain `/`)
//!
//! The empty pattern `""` matches the root (`""` or `"/"`).

use crate::error::RecognizerError;
use std::collections::HashMap;

/// Maximum allowed length for a route pattern string in bytes.
const MAX_PATTERN_LENGTH: usize = 1024;

/// Maximum allowed number of segments in a route pattern.
const MAX_PATTERN_SEGMENTS: usize = 32;

/// Maximum allowed size for a compiled pattern regex (in bytes).
const MAX_REGEX_SIZE: usize = 1 << 20; // 1 MiB

/// One segment of a compiled pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
	/// Literal text.
	Static(String),
	/// Named capture of a single path segment.
	Dynamic(String),
	/// Named capture of the rest of the path.
	Star(String),
}

impl Segment {
	fn parse(raw: &str) -> Self {
		if let Some(name) = raw.strip_prefix(':') {
			return Self::Dynamic(name.to_string());
		}
		if let Some(name) = raw.strip_prefix('*') {
			return Self::Star(name.to_string());
		}
		if let Some(inner) = raw.strip_prefix('{').and_then(|s| s.strip_suffix('}')) {
			return match inner.strip_suffix(":*") {
				Some(name) => Self::Star(name.to_string()),
				None => Self::Dynamic(inner.to_string()),
			};
		}
		Self::Static(raw.to_string())
	}
}

/// Segment counts used to order competing matches.
///
/// Routes without star segments beat routes with them. Among star routes the
/// one with more static, then more dynamic, segments wins. Otherwise fewer
/// dynamic segments win, then more static segments.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Specificity {
	/// Number of static segments.
	pub statics: usize,
	/// Number of dynamic segments.
	pub dynamics: usize,
	/// Number of star segments.
	pub stars: usize,
}

impl Specificity {
	/// Compares two specificities; `Less` means `self` takes precedence.
	pub fn precedence(&self, other: &Self) -> std::cmp::Ordering {
		use std::cmp::Ordering;

		if self.stars != other.stars {
			return self.stars.cmp(&other.stars);
		}
		if self.stars > 0 {
			if self.statics != other.statics {
				return other.statics.cmp(&self.statics);
			}
			if self.dynamics != other.dynamics {
				return other.dynamics.cmp(&self.dynamics);
			}
		}
		if self.dynamics != other.dynamics {
			return self.dynamics.cmp(&other.dynamics);
		}
		if self.statics != other.statics {
			return other.statics.cmp(&self.statics);
		}
		Ordering::Equal
	}
}

/// A compiled route pattern.
#[derive(Debug, Clone)]
pub struct RoutePattern {
	/// The original pattern string.
	pattern: String,
	/// Parsed segments, without leading or trailing separators.
	segments: Vec<Segment>,
	/// Compiled regex matching a normalized path.
	regex: regex::Regex,
	/// Capture names in pattern order.
	param_names: Vec<String>,
	specificity: Specificity,
}

impl RoutePattern {
	/// Compiles a pattern string.
	///
	/// # Errors
	///
	/// Returns [`RecognizerError::InvalidPattern`] if:
	/// - Pattern exceeds maximum length (1024 bytes)
	/// - Pattern has too many segments (>32)
	/// - A dynamic or star segment has no name
	/// - Pattern compiles to an invalid regex
	pub fn new(pattern: &str) -> Result<Self, RecognizerError> {
		let invalid = |reason: String| RecognizerError::InvalidPattern {
			pattern: pattern.to_string(),
			reason,
		};

		if pattern.len() > MAX_PATTERN_LENGTH {
			return Err(invalid(format!(
				"length {} exceeds maximum allowed length of {} bytes",
				pattern.len(),
				MAX_PATTERN_LENGTH
			)));
		}

		let trimmed = normalize_path(pattern);
		let segments: Vec<Segment> = if trimmed.is_empty() {
			Vec::new()
		} else {
			trimmed.split('/').map(Segment::parse).collect()
		};

		if segments.len() > MAX_PATTERN_SEGMENTS {
			return Err(invalid(format!(
				"{} segments, exceeding maximum of {}",
				segments.len(),
				MAX_PATTERN_SEGMENTS
			)));
		}

		let mut regex_str = String::from("^");
		let mut param_names = Vec::new();
		let mut specificity = Specificity::default();

		for (index, segment) in segments.iter().enumerate() {
			if index > 0 {
				regex_str.push('/');
			}
			match segment {
				Segment::Static(text) => {
					specificity.statics += 1;
					regex_str.push_str(&regex::escape(text));
				}
				Segment::Dynamic(name) => {
					if name.is_empty() {
						return Err(invalid("dynamic segment without a name".to_string()));
					}
					specificity.dynamics += 1;
					param_names.push(name.clone());
					regex_str.push_str("([^/]+)");
				}
				Segment::Star(name) => {
					if name.is_empty() {
						return Err(invalid("star segment without a name".to_string()));
					}
					specificity.stars += 1;
					param_names.push(name.clone());
					regex_str.push_str("(.+)");
				}
			}
		}
		regex_str.push('$');

		let regex = regex::RegexBuilder::new(&regex_str)
			.size_limit(MAX_REGEX_SIZE)
			.build()
			.map_err(|e| invalid(format!("failed to compile regex: {}", e)))?;

		Ok(Self {
			pattern: pattern.to_string(),
			segments,
			regex,
			param_names,
			specificity,
		})
	}

	/// Returns the original pattern string.
	pub fn pattern(&self) -> &str {
		&self.pattern
	}

	/// Returns the parsed segments.
	pub fn segments(&self) -> &[Segment] {
		&self.segments
	}

	/// Returns the capture names in pattern order.
	pub fn param_names(&self) -> &[String] {
		&self.param_names
	}

	/// Returns the segment counts of this pattern.
	pub fn specificity(&self) -> Specificity {
		self.specificity
	}

	/// Matches a path (without query string) against this pattern.
	///
	/// Captured values are percent-decoded; a value that is not valid
	/// percent-encoding is kept verbatim.
	pub fn matches(&self, path: &str) -> Option<HashMap<String, String>> {
		self.match_path(path).map(|m| m.params)
	}

	/// Matches a path and keeps both decoded and raw captures.
	pub fn match_path(&self, path: &str) -> Option<PathMatch> {
		let caps = self.regex.captures(normalize_path(path))?;

		let mut found = PathMatch::default();
		for (index, name) in self.param_names.iter().enumerate() {
			let Some(m) = caps.get(index + 1) else {
				continue;
			};
			let value = urlencoding::decode(m.as_str())
				.map(|v| v.into_owned())
				.unwrap_or_else(|_| m.as_str().to_string());
			found.params.insert(name.clone(), value);
			found.raw_params.insert(name.clone(), m.as_str().to_string());
		}
		Some(found)
	}

	/// Checks if this pattern would match the given path.
	pub fn is_match(&self, path: &str) -> bool {
		self.regex.is_match(normalize_path(path))
	}

	/// Builds a path from this pattern, always with a leading `/`.
	///
	/// # Errors
	///
	/// Returns [`RecognizerError::MissingParameter`] if a capture has no value.
	pub fn reverse(&self, params: &HashMap<String, String>) -> Result<String, RecognizerError> {
		let mut parts = Vec::with_capacity(self.segments.len());

		for segment in &self.segments {
			match segment {
				Segment::Static(text) => parts.push(text.clone()),
				Segment::Dynamic(name) | Segment::Star(name) => {
					let value = params
						.get(name)
						.ok_or_else(|| RecognizerError::MissingParameter(name.clone()))?;
					parts.push(value.clone());
				}
			}
		}

		Ok(format!("/{}", parts.join("/")))
	}
}

/// Captures of one successful match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathMatch {
	/// Percent-decoded captures.
	pub params: HashMap<String, String>,
	/// Captures exactly as they appear in the path.
	pub raw_params: HashMap<String, String>,
}

impl PartialEq for RoutePattern {
	fn eq(&self, other: &Self) -> bool {
		self.segments == other.segments
	}
}

impl Eq for RoutePattern {}

impl std::fmt::Display for RoutePattern {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.pattern)
	}
}

/// Strips one leading `/` and one trailing `/`.
pub(crate) fn normalize_path(path: &str) -> &str {
	let path = path.strip_prefix('/').unwrap_or(path);
	path.strip_suffix('/').unwrap_or(path)
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_static_pattern() {
		let pattern = RoutePattern::new("users").unwrap();
		assert!(pattern.is_match("users"));
		assert!(pattern.is_match("/users/"));
		assert!(!pattern.is_match("users/42"));
		assert_eq!(
			pattern.specificity(),
			Specificity {
				statics: 1,
				dynamics: 0,
				stars: 0
			}
		);
	}

	#[rstest]
	#[case("users/:id")]
	#[case("/users/{id}")]
	fn test_dynamic_segment(#[case] raw: &str) {
		let pattern = RoutePattern::new(raw).unwrap();

		let params = pattern.matches("users/42").unwrap();

		assert_eq!(params.get("id"), Some(&"42".to_string()));
		assert_eq!(pattern.param_names(), &["id"]);
		assert!(!pattern.is_match("users"));
	}

	#[rstest]
	#[case("files/*path")]
	#[case("files/{path:*}")]
	fn test_star_segment_spans_separators(#[case] raw: &str) {
		let pattern = RoutePattern::new(raw).unwrap();

		let params = pattern.matches("/files/a/b/c.txt").unwrap();

		assert_eq!(params.get("path"), Some(&"a/b/c.txt".to_string()));
		assert!(!pattern.is_match("files"));
	}

	#[rstest]
	fn test_empty_pattern_matches_root() {
		let pattern = RoutePattern::new("").unwrap();
		assert!(pattern.is_match(""));
		assert!(pattern.is_match("/"));
		assert!(!pattern.is_match("home"));
	}

	#[rstest]
	fn test_params_are_percent_decoded() {
		let pattern = RoutePattern::new("tags/:tag").unwrap();
		let params = pattern.matches("tags/rust%20lang").unwrap();
		assert_eq!(params.get("tag"), Some(&"rust lang".to_string()));
	}

	#[rstest]
	fn test_raw_captures_keep_encoding() {
		let pattern = RoutePattern::new("docs/*rest").unwrap();

		let found = pattern.match_path("docs/guide/a%20b").unwrap();

		assert_eq!(found.params["rest"], "guide/a b");
		assert_eq!(found.raw_params["rest"], "guide/a%20b");
	}

	#[rstest]
	fn test_regex_characters_are_literal() {
		let pattern = RoutePattern::new("api/v1.0").unwrap();
		assert!(pattern.is_match("api/v1.0"));
		assert!(!pattern.is_match("api/v1X0"));
	}

	#[rstest]
	fn test_reverse() {
		let pattern = RoutePattern::new("users/:id/*rest").unwrap();
		let mut params = HashMap::new();
		params.insert("id".to_string(), "7".to_string());
		params.insert("rest".to_string(), "posts/1".to_string());

		assert_eq!(pattern.reverse(&params).unwrap(), "/users/7/posts/1");
	}

	#[rstest]
	fn test_reverse_missing_param() {
		let pattern = RoutePattern::new("users/:id").unwrap();
		let result = pattern.reverse(&HashMap::new());
		assert_eq!(
			result,
			Err(RecognizerError::MissingParameter("id".to_string()))
		);
	}

	#[rstest]
	fn test_rejects_excessive_length() {
		// Arrange
		let long_pattern = "a".repeat(1025);

		// Act
		let result = RoutePattern::new(&long_pattern);

		// Assert
		assert!(matches!(
			result,
			Err(RecognizerError::InvalidPattern { .. })
		));
	}

	#[rstest]
	fn test_rejects_excessive_segments() {
		let pattern = vec!["seg"; 33].join("/");
		assert!(RoutePattern::new(&pattern).is_err());
	}

	#[rstest]
	fn test_rejects_unnamed_capture() {
		assert!(RoutePattern::new("users/:").is_err());
		assert!(RoutePattern::new("files/*").is_err());
	}

	#[rstest]
	#[case("users/new", "users/:id")]
	#[case("users/:id", "users/*rest")]
	#[case("users/:id/*rest", "users/*rest")]
	#[case("a/b/*rest", "a/:x/*rest")]
	fn test_precedence(#[case] winner: &str, #[case] loser: &str) {
		let winner = RoutePattern::new(winner).unwrap().specificity();
		let loser = RoutePattern::new(loser).unwrap().specificity();
		assert_eq!(winner.precedence(&loser), std::cmp::Ordering::Less);
	}
}
