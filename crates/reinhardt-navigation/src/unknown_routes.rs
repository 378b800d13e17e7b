//! Catch-all handling for URLs no route matches.

use crate::config::{RouteConfig, RouteHandler};
use crate::error::RouterResult;
use crate::instruction::NavigationInstruction;
use crate::potential::Potential;
use std::sync::Arc;

/// Parameter carrying the unmatched fragment in catch-all instructions.
pub const UNKNOWN_PATH_PARAM: &str = "path";

/// Computes the route definition for an unmatched URL.
pub type UnknownRouteResolver =
	Arc<dyn Fn(&NavigationInstruction) -> Potential<RouterResult<RouteConfig>> + Send + Sync>;

/// What to render when no route matches.
#[derive(Clone, Default)]
pub enum UnknownRoutes {
	/// Use the unmatched fragment as the module id.
	#[default]
	Fragment,
	/// Render this module.
	ModuleId(String),
	/// Use this route definition.
	Config(RouteConfig),
	/// Compute the route definition, now or later.
	Resolver(UnknownRouteResolver),
}

impl UnknownRoutes {
	/// Wraps a resolver function.
	pub fn resolver<F>(resolver: F) -> Self
	where
		F: Fn(&NavigationInstruction) -> Potential<RouterResult<RouteConfig>> + Send + Sync + 'static,
	{
		Self::Resolver(Arc::new(resolver))
	}

	/// Builds the catch-all handler.
	///
	/// Whatever the variant, the resulting instruction's `route` is set to
	/// the originally requested path.
	pub(crate) fn into_handler(self) -> RouteHandler {
		Arc::new(move |instruction: NavigationInstruction| {
			let config = match &self {
				Self::Fragment => {
					let mut config = (**instruction.config()).clone();
					config.module_id = Some(instruction.fragment().to_string());
					Potential::ready(Ok(config))
				}
				Self::ModuleId(module_id) => {
					let mut config = (**instruction.config()).clone();
					config.module_id = Some(module_id.clone());
					Potential::ready(Ok(config))
				}
				Self::Config(config) => Potential::ready(Ok(config.clone())),
				Self::Resolver(resolver) => resolver(&instruction),
			};

			config.map(move |result| {
				result.map(|mut config| {
					config.route = instruction
						.params()
						.get(UNKNOWN_PATH_PARAM)
						.cloned()
						.unwrap_or_default();
					config.ensure_view_ports();
					instruction.with_config(config)
				})
			})
		})
	}
}

impl From<&str> for UnknownRoutes {
	fn from(module_id: &str) -> Self {
		Self::ModuleId(module_id.to_string())
	}
}

impl From<String> for UnknownRoutes {
	fn from(module_id: String) -> Self {
		Self::ModuleId(module_id)
	}
}

impl From<RouteConfig> for UnknownRoutes {
	fn from(config: RouteConfig) -> Self {
		Self::Config(config)
	}
}

impl std::fmt::Debug for UnknownRoutes {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Fragment => f.write_str("Fragment"),
			Self::ModuleId(module_id) => f.debug_tuple("ModuleId").field(module_id).finish(),
			Self::Config(config) => f.debug_tuple("Config").field(config).finish(),
			Self::Resolver(_) => f.write_str("Resolver(..)"),
		}
	}
}
