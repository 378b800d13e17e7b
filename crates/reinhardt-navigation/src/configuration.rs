//! Router configuration.
//!
//! A [`RouterConfiguration`] collects route mappings, a title, options and a
//! catch-all, then applies them to a router in one step. It can be built in
//! code or loaded from a JSON or TOML document:
//!
//! ```toml
//! title = "Admin"
//! unknown_route = "not-found"
//!
//! [options]
//! push_state = true
//!
//! [[routes]]
//! route = ["", "home"]
//! moduleId = "home"
//! nav = true
//!
//! [[routes]]
//! route = "users/:id"
//! moduleId = "users/detail"
//! ```

use crate::config::RouteConfig;
use crate::error::RouterResult;
use crate::nav_model::NavModel;
use crate::router::Router;
use crate::unknown_routes::UnknownRoutes;
use serde::{Deserialize, Serialize};

/// History-related options recorded on the router.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouterOptions {
	/// Use the history API instead of hash fragments.
	#[serde(default)]
	pub push_state: bool,
	/// Listen for hash changes.
	#[serde(default = "default_hash_change")]
	pub hash_change: bool,
	/// Application root for push-state URLs.
	#[serde(default = "default_root")]
	pub root: String,
}

fn default_hash_change() -> bool {
	true
}

fn default_root() -> String {
	"/".to_string()
}

impl Default for RouterOptions {
	fn default() -> Self {
		Self {
			push_state: false,
			hash_change: default_hash_change(),
			root: default_root(),
		}
	}
}

/// One pattern or several patterns sharing a definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RoutePatterns {
	/// A single pattern.
	One(String),
	/// Several patterns; the first one joins the navigation menu.
	Many(Vec<String>),
}

impl RoutePatterns {
	fn into_vec(self) -> Vec<String> {
		match self {
			Self::One(pattern) => vec![pattern],
			Self::Many(patterns) => patterns,
		}
	}
}

/// A route definition as written in a configuration document.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RouteMapping {
	/// Pattern(s) of the route. Missing patterns are derived.
	#[serde(default)]
	pub route: Option<RoutePatterns>,
	/// The rest of the definition.
	#[serde(flatten)]
	pub config: RouteConfig,
}

/// Collected router setup.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RouterConfiguration {
	/// Router title, appended to document titles.
	#[serde(default)]
	pub title: Option<String>,
	/// History options.
	#[serde(default)]
	pub options: RouterOptions,
	/// Route mappings, in registration order.
	#[serde(default)]
	pub routes: Vec<RouteMapping>,
	/// Module rendered for unmatched URLs.
	#[serde(default)]
	pub unknown_route: Option<String>,
	#[serde(skip)]
	unknown_routes: Option<UnknownRoutes>,
}

impl RouterConfiguration {
	/// Creates an empty configuration.
	pub fn new() -> Self {
		Self::default()
	}

	/// Loads a configuration from JSON.
	///
	/// # Errors
	///
	/// Returns [`RouterError::Configuration`](crate::RouterError::Configuration)
	/// if the document is malformed.
	pub fn from_json_str(json: &str) -> RouterResult<Self> {
		Ok(serde_json::from_str(json)?)
	}

	/// Loads a configuration from TOML.
	///
	/// # Errors
	///
	/// Returns [`RouterError::Configuration`](crate::RouterError::Configuration)
	/// if the document is malformed.
	#[cfg(feature = "toml-config")]
	pub fn from_toml_str(source: &str) -> RouterResult<Self> {
		Ok(toml::from_str(source)?)
	}

	/// Sets the router title.
	pub fn title(&mut self, title: impl Into<String>) -> &mut Self {
		self.title = Some(title.into());
		self
	}

	/// Sets the history options.
	pub fn options(&mut self, options: RouterOptions) -> &mut Self {
		self.options = options;
		self
	}

	/// Maps a route definition using its own pattern.
	pub fn map(&mut self, config: RouteConfig) -> &mut Self {
		self.routes.push(RouteMapping {
			route: Some(RoutePatterns::One(config.route.clone())),
			config,
		});
		self
	}

	/// Maps a route definition to `pattern`.
	pub fn map_route(&mut self, pattern: impl Into<String>, config: RouteConfig) -> &mut Self {
		self.routes.push(RouteMapping {
			route: Some(RoutePatterns::One(pattern.into())),
			config,
		});
		self
	}

	/// Maps one definition to several patterns sharing a menu entry.
	pub fn map_routes<I, S>(&mut self, patterns: I, config: RouteConfig) -> &mut Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.routes.push(RouteMapping {
			route: Some(RoutePatterns::Many(
				patterns.into_iter().map(Into::into).collect(),
			)),
			config,
		});
		self
	}

	/// Sets what unmatched URLs render.
	pub fn map_unknown_routes(&mut self, unknown: impl Into<UnknownRoutes>) -> &mut Self {
		self.unknown_routes = Some(unknown.into());
		self
	}

	/// Applies routes, title, catch-all and options to `router`.
	///
	/// # Errors
	///
	/// Stops at the first route the router rejects.
	pub fn export_to_router(self, router: &Router) -> RouterResult<()> {
		for mapping in self.routes {
			let Some(patterns) = mapping.route.map(RoutePatterns::into_vec) else {
				router.add_route(ensure_defaults(mapping.config, false), None)?;
				continue;
			};
			// Patterns of one mapping share a menu entry; only the first joins
			// the navigation model.
			let nav_model = NavModel::new();
			for pattern in patterns {
				let mut config = mapping.config.clone();
				config.route = pattern;
				router.add_route(ensure_defaults(config, true), Some(nav_model.clone()))?;
			}
		}

		if let Some(title) = self.title {
			router.set_title(title);
		}

		let unknown = self
			.unknown_routes
			.or_else(|| self.unknown_route.map(UnknownRoutes::ModuleId));
		if let Some(unknown) = unknown {
			router.handle_unknown_routes(unknown);
		}

		router.set_options(self.options);
		Ok(())
	}
}

/// Derives missing name, route, title and module id.
///
/// `has_pattern` is false when the mapping gave no pattern at all, in which
/// case the route falls back to the module id or name.
pub(crate) fn ensure_defaults(mut config: RouteConfig, has_pattern: bool) -> RouteConfig {
	if config.name.is_none() {
		config.name = config
			.title
			.clone()
			.or_else(|| {
				let stripped = strip_parameters(&config.route);
				(!stripped.is_empty()).then(|| stripped.to_string())
			})
			.or_else(|| config.module_id.clone());
	}

	if !has_pattern && config.route.is_empty() {
		config.route = config
			.module_id
			.clone()
			.or_else(|| config.name.clone())
			.unwrap_or_default();
	}

	if config.title.is_none() {
		config.title = config.name.as_deref().map(capitalize);
	}

	if config.module_id.is_none() {
		let stripped = strip_parameters(&config.route);
		if !stripped.is_empty() {
			config.module_id = Some(stripped.to_string());
		}
	}

	config
}

/// Cuts a pattern before its first dynamic or star segment.
fn strip_parameters(route: &str) -> &str {
	route
		.find([':', '*', '{'])
		.map(|index| &route[..index])
		.unwrap_or(route)
		.trim_end_matches('/')
}

fn capitalize(value: &str) -> String {
	let mut chars = value.chars();
	match chars.next() {
		Some(first) => first.to_uppercase().chain(chars).collect(),
		None => String::new(),
	}
}
