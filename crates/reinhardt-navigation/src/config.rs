//! Route definitions.

use crate::error::RouterResult;
use crate::instruction::NavigationInstruction;
use crate::potential::Potential;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

/// Name of the outlet used when a route does not list its viewports.
pub const DEFAULT_VIEW_PORT: &str = "default";

/// Dynamic route handler.
///
/// Receives the instruction built for the matched route and returns the
/// instruction to navigate to, possibly after asynchronous work.
pub type RouteHandler =
	Arc<dyn Fn(NavigationInstruction) -> Potential<RouterResult<NavigationInstruction>> + Send + Sync>;

/// Navigation menu flag of a route: either shown/hidden or an explicit order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NavSetting {
	/// Include (`true`) or exclude (`false`) the route from the menu.
	Show(bool),
	/// Include the route with this sort order.
	Order(i64),
}

impl NavSetting {
	/// Returns whether the route opts into the navigation menu.
	pub fn is_enabled(&self) -> bool {
		match self {
			Self::Show(show) => *show,
			Self::Order(_) => true,
		}
	}

	/// Returns the explicit order, if any.
	pub fn order(&self) -> Option<i64> {
		match self {
			Self::Order(order) => Some(*order),
			Self::Show(_) => None,
		}
	}
}

/// Module assignment for a single outlet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewPortConfig {
	/// Module rendered into the outlet.
	pub module_id: Option<String>,
}

/// A route definition.
///
/// Immutable once registered with a router.
#[derive(Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteConfig {
	/// The route pattern.
	#[serde(default)]
	pub route: String,
	/// Module rendered into the default outlet.
	#[serde(default)]
	pub module_id: Option<String>,
	/// Name used for URL generation.
	#[serde(default)]
	pub name: Option<String>,
	/// Display title.
	#[serde(default)]
	pub title: Option<String>,
	/// Navigation menu flag.
	#[serde(default)]
	pub nav: Option<NavSetting>,
	/// Explicit menu link.
	#[serde(default)]
	pub href: Option<String>,
	/// Outlet assignments. `None` means the route did not specify any.
	#[serde(default)]
	pub view_ports: Option<HashMap<String, ViewPortConfig>>,
	/// Arbitrary data attached by the application.
	#[serde(default)]
	pub settings: Option<serde_json::Value>,
	/// Set on the copy registered with the child matcher.
	#[serde(skip)]
	pub has_child_router: bool,
	/// Dynamic handler invoked instead of returning the instruction directly.
	#[serde(skip)]
	pub handler: Option<RouteHandler>,
}

impl RouteConfig {
	/// Creates a route definition for `route`.
	pub fn new(route: impl Into<String>) -> Self {
		Self {
			route: route.into(),
			..Self::default()
		}
	}

	/// Sets the module rendered into the default outlet.
	pub fn with_module_id(mut self, module_id: impl Into<String>) -> Self {
		self.module_id = Some(module_id.into());
		self
	}

	/// Sets the route name.
	pub fn with_name(mut self, name: impl Into<String>) -> Self {
		self.name = Some(name.into());
		self
	}

	/// Sets the title.
	pub fn with_title(mut self, title: impl Into<String>) -> Self {
		self.title = Some(title.into());
		self
	}

	/// Shows or hides the route in the navigation menu.
	pub fn with_nav(mut self, show: bool) -> Self {
		self.nav = Some(NavSetting::Show(show));
		self
	}

	/// Shows the route in the navigation menu with an explicit order.
	pub fn with_nav_order(mut self, order: i64) -> Self {
		self.nav = Some(NavSetting::Order(order));
		self
	}

	/// Sets an explicit menu link.
	pub fn with_href(mut self, href: impl Into<String>) -> Self {
		self.href = Some(href.into());
		self
	}

	/// Assigns a module to a named outlet.
	pub fn with_view_port(mut self, name: impl Into<String>, module_id: impl Into<String>) -> Self {
		self.view_ports.get_or_insert_with(HashMap::new).insert(
			name.into(),
			ViewPortConfig {
				module_id: Some(module_id.into()),
			},
		);
		self
	}

	/// Attaches application data.
	pub fn with_settings(mut self, settings: serde_json::Value) -> Self {
		self.settings = Some(settings);
		self
	}

	/// Attaches a dynamic handler.
	pub fn with_handler<F>(mut self, handler: F) -> Self
	where
		F: Fn(NavigationInstruction) -> Potential<RouterResult<NavigationInstruction>>
			+ Send
			+ Sync
			+ 'static,
	{
		self.handler = Some(Arc::new(handler));
		self
	}

	/// Fills in a single default outlet when none is specified.
	pub(crate) fn ensure_view_ports(&mut self) {
		if self.view_ports.is_none() {
			let mut view_ports = HashMap::new();
			view_ports.insert(
				DEFAULT_VIEW_PORT.to_string(),
				ViewPortConfig {
					module_id: self.module_id.clone(),
				},
			);
			self.view_ports = Some(view_ports);
		}
	}

	/// Returns the outlet assignments, empty when none are set.
	pub fn view_ports(&self) -> impl Iterator<Item = (&str, &ViewPortConfig)> {
		self.view_ports
			.iter()
			.flatten()
			.map(|(name, config)| (name.as_str(), config))
	}
}

impl std::fmt::Debug for RouteConfig {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("RouteConfig")
			.field("route", &self.route)
			.field("module_id", &self.module_id)
			.field("name", &self.name)
			.field("title", &self.title)
			.field("nav", &self.nav)
			.field("href", &self.href)
			.field("view_ports", &self.view_ports)
			.field("has_child_router", &self.has_child_router)
			.field("has_handler", &self.handler.is_some())
			.finish()
	}
}
