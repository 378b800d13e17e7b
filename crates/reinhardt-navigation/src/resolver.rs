//! Builds navigation instructions from URLs.

use crate::config::{RouteConfig, RouteHandler};
use crate::error::{RouterError, RouterResult};
use crate::instruction::{CHILD_ROUTE_PARAM, NavigationInstruction};
use crate::nav_model::NavModel;
use crate::potential::Potential;
use crate::route_table::RouteTable;
use crate::unknown_routes::UNKNOWN_PATH_PARAM;
use reinhardt_route_recognizer::split_query;
use std::collections::HashMap;
use std::sync::Arc;

struct ResolvedMatch {
	config: Arc<RouteConfig>,
	nav_model: Option<NavModel>,
	handler: Option<RouteHandler>,
	params: HashMap<String, String>,
	raw_child_route: Option<String>,
	query_params: HashMap<String, String>,
}

/// An instruction built from a match, with the handler still to run.
pub(crate) struct Resolution {
	instruction: NavigationInstruction,
	handler: Option<RouteHandler>,
}

impl Resolution {
	/// Runs the dynamic handler, if any.
	///
	/// Without a handler the instruction is returned already completed.
	pub(crate) fn run(self) -> Potential<RouterResult<NavigationInstruction>> {
		match self.handler {
			Some(handler) => handler(self.instruction),
			None => Potential::ready(Ok(self.instruction)),
		}
	}
}

/// Resolves `url` against `table`.
///
/// The primary matcher is tried first, then the child matcher, then the
/// catch-all handler. Only the first match is used. The table is only read;
/// the handler runs later through [`Resolution::run`].
pub(crate) fn resolve(
	table: &RouteTable,
	catch_all: Option<&RouteHandler>,
	url: &str,
	parent: Option<&Arc<NavigationInstruction>>,
) -> RouterResult<Resolution> {
	let (fragment, query_string) = split_query(url);

	let first = table
		.recognize(url)
		.into_iter()
		.next()
		.map(|mut found| ResolvedMatch {
			handler: found.handler.config.handler.clone(),
			raw_child_route: found.raw_params.remove(CHILD_ROUTE_PARAM),
			config: found.handler.config,
			nav_model: Some(found.handler.nav_model),
			params: found.params,
			query_params: found.query_params,
		})
		.or_else(|| {
			catch_all.map(|handler| {
				tracing::debug!(url = %url, "no route matched, using catch-all handler");
				let mut params = HashMap::new();
				params.insert(UNKNOWN_PATH_PARAM.to_string(), fragment.to_string());
				ResolvedMatch {
					config: Arc::new(RouteConfig::default()),
					nav_model: None,
					handler: Some(Arc::clone(handler)),
					params,
					raw_child_route: None,
					query_params: HashMap::new(),
				}
			})
		});

	let Some(first) = first else {
		tracing::debug!(url = %url, "route not found");
		return Err(RouterError::NotFound(url.to_string()));
	};

	let instruction = NavigationInstruction::new(
		fragment,
		query_string.map(str::to_string),
		first.params,
		first.query_params,
		first.config,
		parent,
	)
	.with_nav_model(first.nav_model)
	.with_raw_child_route(first.raw_child_route);

	tracing::debug!(
		url = %url,
		route = %instruction.config().route,
		dynamic = first.handler.is_some(),
		"resolved navigation instruction"
	);

	Ok(Resolution {
		instruction,
		handler: first.handler,
	})
}
