//! Navigation instructions.

use crate::config::RouteConfig;
use crate::nav_model::NavModel;
use std::collections::HashMap;
use std::sync::{Arc, Weak};

/// Capture name appended to every route registered with the child matcher.
pub const CHILD_ROUTE_PARAM: &str = "childRoute";

/// The resolved result of matching one URL.
///
/// The parent link is non-owning: it stays valid while whoever owns the parent
/// instruction (normally the parent router, as its current instruction) keeps
/// it alive.
#[derive(Debug, Clone)]
pub struct NavigationInstruction {
	fragment: String,
	query_string: Option<String>,
	params: HashMap<String, String>,
	query_params: HashMap<String, String>,
	config: Arc<RouteConfig>,
	nav_model: Option<NavModel>,
	/// Child-route remainder exactly as it appears in `fragment`.
	raw_child_route: Option<String>,
	parent: Option<Weak<NavigationInstruction>>,
}

impl NavigationInstruction {
	/// Creates an instruction.
	pub fn new(
		fragment: impl Into<String>,
		query_string: Option<String>,
		params: HashMap<String, String>,
		query_params: HashMap<String, String>,
		config: Arc<RouteConfig>,
		parent: Option<&Arc<NavigationInstruction>>,
	) -> Self {
		Self {
			fragment: fragment.into(),
			query_string,
			params,
			query_params,
			config,
			nav_model: None,
			raw_child_route: None,
			parent: parent.map(Arc::downgrade),
		}
	}

	/// Attaches the menu entry of the matched route.
	pub fn with_nav_model(mut self, nav_model: Option<NavModel>) -> Self {
		self.nav_model = nav_model;
		self
	}

	/// Records the undecoded child-route remainder matched in the fragment.
	pub fn with_raw_child_route(mut self, raw_child_route: Option<String>) -> Self {
		self.raw_child_route = raw_child_route;
		self
	}

	/// Returns a copy of this instruction targeting `config`.
	pub fn with_config(mut self, config: RouteConfig) -> Self {
		self.config = Arc::new(config);
		self
	}

	/// The URL part before the first `?`.
	pub fn fragment(&self) -> &str {
		&self.fragment
	}

	/// The URL part after the first `?`, if any.
	pub fn query_string(&self) -> Option<&str> {
		self.query_string.as_deref()
	}

	/// Captured route parameters.
	pub fn params(&self) -> &HashMap<String, String> {
		&self.params
	}

	/// Parsed query parameters.
	pub fn query_params(&self) -> &HashMap<String, String> {
		&self.query_params
	}

	/// The matched route definition.
	pub fn config(&self) -> &Arc<RouteConfig> {
		&self.config
	}

	/// The matched route's menu entry.
	pub fn nav_model(&self) -> Option<&NavModel> {
		self.nav_model.as_ref()
	}

	/// The parent router's instruction, if it is still alive.
	pub fn parent_instruction(&self) -> Option<Arc<NavigationInstruction>> {
		self.parent.as_ref().and_then(Weak::upgrade)
	}

	/// The part of the fragment consumed by this router.
	///
	/// When the route captured a child-route remainder, that remainder is cut
	/// from the end of the fragment; otherwise the whole fragment is returned.
	pub fn base_url(&self) -> String {
		let Some(tail) = self.raw_child_route.as_deref().filter(|t| !t.is_empty()) else {
			return self.fragment.clone();
		};

		let path = self.fragment.strip_suffix('/').unwrap_or(&self.fragment);
		path.strip_suffix(tail)
			.map(str::to_string)
			.unwrap_or_else(|| self.fragment.clone())
	}
}
