//! Navigation menu model.
//!
//! Routes that opt into the menu get a [`NavModel`] entry. The registry keeps
//! entries sorted by `order` and recomputes their absolute `href` whenever the
//! router's base URL changes.

use crate::config::RouteConfig;
use parking_lot::RwLock;
use serde::Serialize;
use std::sync::Arc;

/// First value handed out minus one when a route has no explicit order.
pub const FALLBACK_ORDER_START: i64 = 100;

/// Menu entry data.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavModelEntry {
	/// Display title.
	pub title: Option<String>,
	/// Sort key; assigned at registration when the entry joins the menu.
	pub order: Option<i64>,
	/// Absolute link.
	pub href: String,
	/// Link relative to the router's base URL.
	pub relative_href: Option<String>,
	/// Whether the route is the active one.
	pub is_active: bool,
	/// The route this entry belongs to.
	#[serde(skip)]
	pub config: Option<Arc<RouteConfig>>,
}

/// Shared handle to a menu entry.
///
/// Clones refer to the same entry.
#[derive(Debug, Clone, Default)]
pub struct NavModel {
	inner: Arc<RwLock<NavModelEntry>>,
}

impl NavModel {
	/// Creates an empty seed.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a seed with an explicit order.
	pub fn with_order(order: i64) -> Self {
		let model = Self::new();
		model.inner.write().order = Some(order);
		model
	}

	/// Sets an explicit title on the seed.
	pub fn title_override(self, title: impl Into<String>) -> Self {
		self.inner.write().title = Some(title.into());
		self
	}

	/// Sets an explicit link on the seed.
	pub fn href_override(self, href: impl Into<String>) -> Self {
		self.inner.write().href = href.into();
		self
	}

	/// Returns a copy of the entry data.
	pub fn snapshot(&self) -> NavModelEntry {
		self.inner.read().clone()
	}

	/// Returns the title.
	pub fn title(&self) -> Option<String> {
		self.inner.read().title.clone()
	}

	/// Returns the sort order.
	pub fn order(&self) -> Option<i64> {
		self.inner.read().order
	}

	/// Returns the absolute link.
	pub fn href(&self) -> String {
		self.inner.read().href.clone()
	}

	/// Returns the link relative to the base URL.
	pub fn relative_href(&self) -> Option<String> {
		self.inner.read().relative_href.clone()
	}

	/// Returns whether the entry is marked active.
	pub fn is_active(&self) -> bool {
		self.inner.read().is_active
	}

	/// Marks the entry active or inactive.
	pub fn set_active(&self, active: bool) {
		self.inner.write().is_active = active;
	}

	/// Returns the route definition the entry belongs to.
	pub fn config(&self) -> Option<Arc<RouteConfig>> {
		self.inner.read().config.clone()
	}

	/// Returns whether both handles refer to the same entry.
	pub fn ptr_eq(&self, other: &Self) -> bool {
		Arc::ptr_eq(&self.inner, &other.inner)
	}

	/// Fills the title from the route unless the seed has one.
	pub(crate) fn seed_title(&self, config: &RouteConfig) {
		let mut entry = self.inner.write();
		if entry.title.is_none() {
			entry.title = config.title.clone();
		}
	}

	fn write(&self) -> parking_lot::RwLockWriteGuard<'_, NavModelEntry> {
		self.inner.write()
	}
}

/// Ordered list of menu entries.
#[derive(Debug, Clone)]
pub struct NavigationModel {
	entries: Vec<NavModel>,
	fallback_order: i64,
}

impl Default for NavigationModel {
	fn default() -> Self {
		Self {
			entries: Vec::new(),
			fallback_order: FALLBACK_ORDER_START,
		}
	}
}

impl NavigationModel {
	/// Creates an empty registry.
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds `model` for `config` when the route opts into the menu.
	///
	/// A route opts in with an enabled `nav` flag or when the seed carries an
	/// explicit order. A seed already in the menu is not added twice. Returns
	/// whether the entry was added.
	pub fn register(&mut self, config: &Arc<RouteConfig>, model: &NavModel) -> bool {
		let nav_enabled = config.nav.is_some_and(|nav| nav.is_enabled());
		if !(nav_enabled || model.order().is_some())
			|| self.entries.iter().any(|entry| entry.ptr_eq(model))
		{
			return false;
		}

		{
			let mut entry = model.write();
			entry.is_active = false;
			entry.config = Some(Arc::clone(config));

			let explicit_href = if entry.href.is_empty() {
				config.href.clone()
			} else {
				Some(entry.href.clone())
			};
			match explicit_href {
				Some(href) => {
					entry.href = href;
					entry.relative_href = None;
				}
				None => {
					entry.href = String::new();
					entry.relative_href = Some(config.route.clone());
				}
			}

			if entry.order.is_none() {
				entry.order = config.nav.and_then(|nav| nav.order());
			}
			if entry.order.is_none() {
				self.fallback_order += 1;
				entry.order = Some(self.fallback_order);
			}
		}

		self.entries.push(model.clone());
		// Stable: equal orders keep insertion order.
		self.entries.sort_by_key(|entry| entry.order());
		true
	}

	/// Recomputes every relative entry's `href` against `base_url`.
	///
	/// The result is `#` followed by the base URL with exactly one leading and
	/// one trailing `/`, then the relative link. Entries with an explicit link
	/// are left unchanged.
	pub fn refresh(&self, base_url: &str) {
		let prefix = href_prefix(base_url);

		for model in &self.entries {
			let mut entry = model.write();
			if let Some(relative) = entry.relative_href.clone() {
				entry.href = format!("{}{}", prefix, relative);
			}
		}
	}

	/// Returns the entries in display order.
	pub fn entries(&self) -> &[NavModel] {
		&self.entries
	}

	/// Returns the number of entries.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Returns whether the menu is empty.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}

fn href_prefix(base_url: &str) -> String {
	let mut prefix = String::from("#");
	if !base_url.starts_with('/') {
		prefix.push('/');
	}
	prefix.push_str(base_url);
	if !prefix.ends_with('/') {
		prefix.push('/');
	}
	prefix
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	fn route(pattern: &str) -> Arc<RouteConfig> {
		Arc::new(RouteConfig::new(pattern).with_nav(true))
	}

	#[rstest]
	#[case("", "#/")]
	#[case("/", "#/")]
	#[case("admin", "#/admin/")]
	#[case("/admin/", "#/admin/")]
	fn test_href_prefix(#[case] base_url: &str, #[case] expected: &str) {
		assert_eq!(href_prefix(base_url), expected);
	}

	#[rstest]
	fn test_route_without_nav_is_skipped() {
		let mut navigation = NavigationModel::new();
		let config = Arc::new(RouteConfig::new("hidden"));

		assert!(!navigation.register(&config, &NavModel::new()));
		assert!(navigation.is_empty());
	}

	#[rstest]
	fn test_nav_false_is_skipped() {
		let mut navigation = NavigationModel::new();
		let config = Arc::new(RouteConfig::new("hidden").with_nav(false));

		assert!(!navigation.register(&config, &NavModel::new()));
	}

	#[rstest]
	fn test_seed_order_opts_in_without_nav_flag() {
		let mut navigation = NavigationModel::new();
		let config = Arc::new(RouteConfig::new("about"));

		assert!(navigation.register(&config, &NavModel::with_order(3)));
		assert_eq!(navigation.entries()[0].order(), Some(3));
	}

	#[rstest]
	fn test_fallback_order_and_sorting() {
		// Arrange
		let mut navigation = NavigationModel::new();
		let first = route("first");
		let second = Arc::new(RouteConfig::new("second").with_nav_order(5));
		let third = route("third");

		// Act
		for config in [&first, &second, &third] {
			navigation.register(config, &NavModel::new());
		}

		// Assert
		let orders: Vec<_> = navigation.entries().iter().map(|e| e.order()).collect();
		assert_eq!(orders, vec![Some(5), Some(101), Some(102)]);
		let routes: Vec<_> = navigation
			.entries()
			.iter()
			.filter_map(|e| e.relative_href())
			.collect();
		assert_eq!(routes, vec!["second", "first", "third"]);
	}

	#[rstest]
	fn test_equal_orders_keep_insertion_order() {
		let mut navigation = NavigationModel::new();
		navigation.register(&Arc::new(RouteConfig::new("a").with_nav_order(1)), &NavModel::new());
		navigation.register(&Arc::new(RouteConfig::new("b").with_nav_order(1)), &NavModel::new());
		navigation.register(&Arc::new(RouteConfig::new("c").with_nav_order(0)), &NavModel::new());

		let routes: Vec<_> = navigation
			.entries()
			.iter()
			.filter_map(|e| e.relative_href())
			.collect();
		assert_eq!(routes, vec!["c", "a", "b"]);
	}

	#[rstest]
	fn test_explicit_href_has_no_relative_href() {
		let mut navigation = NavigationModel::new();
		let config = Arc::new(
			RouteConfig::new("docs")
				.with_nav(true)
				.with_href("https://docs.example.com"),
		);
		let model = NavModel::new();

		navigation.register(&config, &model);
		navigation.refresh("app");

		assert_eq!(model.relative_href(), None);
		assert_eq!(model.href(), "https://docs.example.com");
	}

	#[rstest]
	fn test_same_seed_registered_once() {
		let mut navigation = NavigationModel::new();
		let model = NavModel::new();

		assert!(navigation.register(&route("home"), &model));
		assert!(!navigation.register(&route(""), &model));
		assert_eq!(navigation.len(), 1);
	}

	#[rstest]
	fn test_refresh_is_idempotent() {
		let mut navigation = NavigationModel::new();
		let model = NavModel::new();
		navigation.register(&route("users"), &model);

		navigation.refresh("admin");
		let first = model.href();
		navigation.refresh("admin");

		assert_eq!(first, "#/admin/users");
		assert_eq!(model.href(), first);
	}
}
