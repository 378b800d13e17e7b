//! URL path joining.

/// Joins `fragment` onto `base`.
///
/// Empty sides are ignored, separators are collapsed, and `.` / `..`
/// segments of the fragment are resolved against the base. A leading `/` on
/// the base is kept.
pub fn join(base: &str, fragment: &str) -> String {
	if base.is_empty() {
		return fragment.to_string();
	}
	if fragment.is_empty() {
		return base.to_string();
	}

	let absolute = base.starts_with('/');
	let trailing = fragment.ends_with('/');
	let mut segments: Vec<&str> = base.split('/').filter(|s| !s.is_empty()).collect();

	for segment in fragment.split('/') {
		match segment {
			"" | "." => {}
			".." => {
				segments.pop();
			}
			other => segments.push(other),
		}
	}

	let mut joined = segments.join("/");
	if absolute {
		joined.insert(0, '/');
	}
	if trailing && !joined.ends_with('/') {
		joined.push('/');
	}
	joined
}
