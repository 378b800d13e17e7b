//! Route table with primary and child matchers.
//!
//! Every route registered with the primary matcher is also registered with
//! the child matcher, suffixed with `/*childRoute`, so a URL carrying a
//! remainder for a nested router still resolves to its parent route.

use crate::config::RouteConfig;
use crate::error::{RouterError, RouterResult};
use crate::instruction::CHILD_ROUTE_PARAM;
use crate::nav_model::NavModel;
use reinhardt_route_recognizer::{RecognizedRoute, RouteEntry, RoutePattern, RouteRecognizer};
use std::collections::HashMap;
use std::sync::Arc;

/// Handler value stored in both matchers.
#[derive(Debug, Clone)]
pub struct RouteTarget {
	/// The registered definition.
	pub config: Arc<RouteConfig>,
	/// The definition's menu entry.
	pub nav_model: NavModel,
}

/// Ordered route definitions and the matchers built from them.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
	routes: Vec<RouteTarget>,
	recognizer: RouteRecognizer<RouteTarget>,
	child_recognizer: RouteRecognizer<RouteTarget>,
}

impl RouteTable {
	/// Creates an empty table.
	pub fn new() -> Self {
		Self::default()
	}

	/// Normalizes and registers `config`.
	///
	/// The default outlet is filled in when the route lists none. A route with
	/// a non-empty pattern is also registered with the child matcher, flagged
	/// with `has_child_router`. Both patterns are checked before either
	/// matcher changes, so a rejected route leaves the table untouched.
	///
	/// # Errors
	///
	/// Propagates matcher failures, including duplicate patterns.
	pub fn add(&mut self, mut config: RouteConfig, nav_model: NavModel) -> RouterResult<RouteTarget> {
		config.ensure_view_ports();

		let child_config = if config.route.is_empty() {
			None
		} else {
			let mut with_child = config.clone();
			with_child.route = format!(
				"{}/*{}",
				with_child.route.trim_end_matches('/'),
				CHILD_ROUTE_PARAM
			);
			with_child.has_child_router = true;

			let pattern = RoutePattern::new(&with_child.route)?;
			if self.child_recognizer.contains(&pattern) {
				return Err(RouterError::DuplicateRoute(config.route));
			}
			Some(with_child)
		};

		let target = RouteTarget {
			config: Arc::new(config),
			nav_model,
		};

		let mut entry = RouteEntry::new(target.config.route.clone(), target.clone());
		if let Some(name) = &target.config.name {
			entry = entry.with_name(name.clone());
		}
		self.recognizer.add([entry])?;
		target.nav_model.seed_title(&target.config);

		if let Some(with_child) = child_config {
			let child_target = RouteTarget {
				config: Arc::new(with_child),
				nav_model: target.nav_model.clone(),
			};
			self.child_recognizer.add([RouteEntry::new(
				child_target.config.route.clone(),
				child_target,
			)])?;
		}

		self.routes.push(target.clone());
		Ok(target)
	}

	/// Matches `url`, trying the primary matcher before the child matcher.
	///
	/// Returns an empty list when neither matches.
	pub fn recognize(&self, url: &str) -> Vec<RecognizedRoute<RouteTarget>> {
		if let Some(results) = self.recognizer.recognize(url).filter(|r| !r.is_empty()) {
			return results;
		}
		tracing::trace!(url = %url, "no primary match, trying child routes");
		self.child_recognizer.recognize(url).unwrap_or_default()
	}

	/// Generates a URL for a named route.
	///
	/// # Errors
	///
	/// Propagates matcher failures for unknown names or missing parameters.
	pub fn generate(&self, name: &str, params: &HashMap<String, String>) -> RouterResult<String> {
		Ok(self.recognizer.generate(name, params)?)
	}

	/// Checks if a route name exists.
	pub fn has_route(&self, name: &str) -> bool {
		self.recognizer.has_route(name)
	}

	/// Registered definitions in registration order.
	pub fn routes(&self) -> &[RouteTarget] {
		&self.routes
	}
}
