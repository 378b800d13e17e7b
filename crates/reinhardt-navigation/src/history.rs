//! History collaborator.
//!
//! The router never touches the URL bar itself; it forwards fragments to a
//! [`History`] implementation. [`MemoryHistory`] keeps entries in memory for
//! tests and headless hosts.

use crate::error::RouterResult;
use parking_lot::Mutex;

/// Options for a single navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationOptions {
	/// Whether listeners should be notified of the change.
	pub trigger: bool,
	/// Replace the current entry instead of pushing a new one.
	pub replace: bool,
}

impl Default for NavigationOptions {
	fn default() -> Self {
		Self {
			trigger: true,
			replace: false,
		}
	}
}

/// Persists and restores URL fragments.
pub trait History: Send + Sync {
	/// Navigates to `fragment`.
	///
	/// # Errors
	///
	/// Returns [`RouterError::NavigationFailed`](crate::RouterError::NavigationFailed)
	/// if the fragment cannot be applied.
	fn navigate(&self, fragment: &str, options: NavigationOptions) -> RouterResult<()>;

	/// Goes back one entry.
	fn navigate_back(&self);
}

/// In-memory history stack.
#[derive(Debug, Default)]
pub struct MemoryHistory {
	entries: Mutex<Vec<String>>,
}

impl MemoryHistory {
	/// Creates an empty history.
	pub fn new() -> Self {
		Self::default()
	}

	/// Returns the current fragment.
	pub fn current(&self) -> Option<String> {
		self.entries.lock().last().cloned()
	}

	/// Returns every entry, oldest first.
	pub fn entries(&self) -> Vec<String> {
		self.entries.lock().clone()
	}
}

impl History for MemoryHistory {
	fn navigate(&self, fragment: &str, options: NavigationOptions) -> RouterResult<()> {
		let mut entries = self.entries.lock();
		if options.replace {
			entries.pop();
		}
		entries.push(fragment.to_string());
		tracing::debug!(fragment = %fragment, replace = options.replace, "history navigate");
		Ok(())
	}

	fn navigate_back(&self) {
		self.entries.lock().pop();
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_push_and_back() {
		let history = MemoryHistory::new();

		history.navigate("a", NavigationOptions::default()).unwrap();
		history.navigate("b", NavigationOptions::default()).unwrap();
		history.navigate_back();

		assert_eq!(history.current().as_deref(), Some("a"));
	}

	#[rstest]
	fn test_replace() {
		let history = MemoryHistory::new();

		history.navigate("a", NavigationOptions::default()).unwrap();
		history
			.navigate(
				"b",
				NavigationOptions {
					replace: true,
					..NavigationOptions::default()
				},
			)
			.unwrap();

		assert_eq!(history.entries(), vec!["b".to_string()]);
	}
}
