//! The router aggregate.
//!
//! A [`Router`] owns a route table, the navigation menu built from it, the
//! registration state of its outlets and its place in the router hierarchy.
//! Child routers hold a non-owning link to their parent; whoever creates a
//! child keeps it alive.

use crate::config::{DEFAULT_VIEW_PORT, RouteConfig, RouteHandler};
use crate::configuration::{RouterConfiguration, RouterOptions};
use crate::error::RouterResult;
use crate::history::{History, NavigationOptions};
use crate::instruction::NavigationInstruction;
use crate::nav_model::{NavModel, NavigationModel};
use crate::navigation_context::NavigationContext;
use crate::path::join;
use crate::potential::Potential;
use crate::resolver;
use crate::route_table::RouteTable;
use crate::unknown_routes::UnknownRoutes;
use crate::view_port::{
	ViewPort, ViewPortCallback, ViewPortSlot, ViewPortState, configure_for_view_port,
};
use parking_lot::{Mutex, MutexGuard};
use std::collections::HashMap;
use std::sync::{Arc, Weak};

/// Something that can set up a router.
///
/// Implemented for [`RouterConfiguration`] and for closures receiving a fresh
/// configuration builder.
pub trait RouterConfigurator {
	/// Applies the configuration to `router`.
	///
	/// # Errors
	///
	/// Returns the first error reported while registering routes.
	fn apply(self, router: &Router) -> RouterResult<()>;
}

impl RouterConfigurator for RouterConfiguration {
	fn apply(self, router: &Router) -> RouterResult<()> {
		self.export_to_router(router)
	}
}

impl<F> RouterConfigurator for F
where
	F: FnOnce(&mut RouterConfiguration),
{
	fn apply(self, router: &Router) -> RouterResult<()> {
		let mut config = RouterConfiguration::new();
		self(&mut config);
		config.export_to_router(router)
	}
}

struct RouterState {
	table: RouteTable,
	navigation: NavigationModel,
	view_ports: HashMap<String, ViewPortSlot>,
	base_url: String,
	is_navigating: bool,
	current_instruction: Option<Arc<NavigationInstruction>>,
	catch_all: Option<RouteHandler>,
	title: Option<String>,
	options: RouterOptions,
}

impl RouterState {
	fn new() -> Self {
		Self {
			table: RouteTable::new(),
			navigation: NavigationModel::new(),
			view_ports: HashMap::new(),
			base_url: String::new(),
			is_navigating: false,
			current_instruction: None,
			catch_all: None,
			title: None,
			options: RouterOptions::default(),
		}
	}
}

struct RouterInner {
	history: Arc<dyn History>,
	parent: Option<Weak<RouterInner>>,
	state: Mutex<RouterState>,
}

impl RouterInner {
	/// Binds `view_port` to `name` once its setup step has finished.
	///
	/// A callback that arrived in the meantime is run with the viewport.
	fn bind_view_port(&self, name: String, view_port: Arc<dyn ViewPort>) {
		let previous = self
			.state
			.lock()
			.view_ports
			.insert(name.clone(), ViewPortSlot::Bound(Arc::clone(&view_port)));

		tracing::debug!(view_port = %name, "viewport bound");
		if let Some(ViewPortSlot::PendingCallback(callback)) = previous {
			callback(view_port);
		}
	}
}

/// Client-side navigation router.
///
/// Cloning a `Router` yields another handle to the same router.
#[derive(Clone)]
pub struct Router {
	inner: Arc<RouterInner>,
}

impl Router {
	/// Creates a root router forwarding navigations to `history`.
	pub fn new(history: Arc<dyn History>) -> Self {
		Self {
			inner: Arc::new(RouterInner {
				history,
				parent: None,
				state: Mutex::new(RouterState::new()),
			}),
		}
	}

	fn state(&self) -> MutexGuard<'_, RouterState> {
		self.inner.state.lock()
	}

	/// Registers a viewport for the outlet `name` (`"default"` when `None`).
	///
	/// The returned computation completes once the outlet is bound. When the
	/// owning component has a router-aware setup step, binding waits for it;
	/// otherwise it happens before this method returns.
	///
	/// # Errors
	///
	/// The computation fails with the setup step's error, in which case a
	/// viewport that arrived first is never bound.
	pub fn register_view_port(
		&self,
		view_port: Arc<dyn ViewPort>,
		name: Option<&str>,
	) -> Potential<RouterResult<()>> {
		let name = name.unwrap_or(DEFAULT_VIEW_PORT).to_string();

		let pending = {
			let mut state = self.state();
			match state.view_ports.remove(&name) {
				Some(ViewPortSlot::PendingCallback(callback)) => {
					state
						.view_ports
						.insert(name.clone(), ViewPortSlot::Bound(Arc::clone(&view_port)));
					Some(callback)
				}
				Some(bound @ ViewPortSlot::Bound(_)) => {
					// Keep the old viewport until the new one is configured.
					state.view_ports.insert(name.clone(), bound);
					None
				}
				None => None,
			}
		};

		let setup = configure_for_view_port(&view_port);
		match pending {
			Some(callback) => {
				tracing::debug!(view_port = %name, "viewport bound to pending callback");
				setup.map(move |result| result.map(|()| callback(view_port)))
			}
			None => {
				let inner = Arc::clone(&self.inner);
				setup.map(move |result| result.map(|()| inner.bind_view_port(name, view_port)))
			}
		}
	}

	/// Registers the configuration callback of the outlet `name`.
	///
	/// The callback runs immediately when a viewport is already bound;
	/// otherwise it waits for [`Router::register_view_port`]. A callback that
	/// is still waiting is replaced.
	pub fn on_view_port<F>(&self, name: &str, callback: F)
	where
		F: FnOnce(Arc<dyn ViewPort>) + Send + 'static,
	{
		let mut state = self.state();
		if let Some(ViewPortSlot::Bound(view_port)) = state.view_ports.get(name) {
			let view_port = Arc::clone(view_port);
			drop(state);
			callback(view_port);
			return;
		}

		let callback: ViewPortCallback = Box::new(callback);
		let previous = state
			.view_ports
			.insert(name.to_string(), ViewPortSlot::PendingCallback(callback));
		if previous.is_some() {
			tracing::warn!(view_port = %name, "replacing pending viewport callback");
		}
	}

	/// Returns the viewport bound to `name`.
	pub fn view_port(&self, name: &str) -> Option<Arc<dyn ViewPort>> {
		match self.state().view_ports.get(name) {
			Some(ViewPortSlot::Bound(view_port)) => Some(Arc::clone(view_port)),
			_ => None,
		}
	}

	/// Returns the registration state of the outlet `name`.
	pub fn view_port_state(&self, name: &str) -> ViewPortState {
		ViewPortSlot::state(self.state().view_ports.get(name))
	}

	/// Registers a route.
	///
	/// `nav_model` is the seed of the route's menu entry; a fresh one is used
	/// when `None`. Pass the same seed to several routes to share one entry.
	///
	/// # Errors
	///
	/// Propagates pattern errors and rejects duplicate patterns.
	pub fn add_route(&self, config: RouteConfig, nav_model: Option<NavModel>) -> RouterResult<()> {
		let mut state = self.state();
		let target = state
			.table
			.add(config, nav_model.unwrap_or_else(NavModel::new))?;
		let in_menu = state.navigation.register(&target.config, &target.nav_model);

		tracing::debug!(
			route = %target.config.route,
			module_id = ?target.config.module_id,
			in_menu,
			"route added"
		);
		Ok(())
	}

	/// Sets what unmatched URLs resolve to.
	pub fn handle_unknown_routes(&self, unknown: impl Into<UnknownRoutes>) {
		let unknown = unknown.into();
		tracing::debug!(unknown = ?unknown, "catch-all handler registered");
		self.state().catch_all = Some(unknown.into_handler());
	}

	/// Resolves `url` into a navigation instruction.
	///
	/// The result is ready unless a dynamic route handler defers it.
	///
	/// # Errors
	///
	/// Fails with [`RouterError::NotFound`] when no route matches and no
	/// catch-all handler is registered.
	pub fn create_navigation_instruction(
		&self,
		url: &str,
		parent: Option<&Arc<NavigationInstruction>>,
	) -> Potential<RouterResult<NavigationInstruction>> {
		let resolution = {
			let state = self.state();
			resolver::resolve(&state.table, state.catch_all.as_ref(), url, parent)
		};

		match resolution {
			Ok(resolution) => resolution.run(),
			Err(err) => Potential::ready(Err(err)),
		}
	}

	/// Creates the context that commits `instruction` to this router.
	pub fn create_navigation_context(&self, instruction: NavigationInstruction) -> NavigationContext {
		NavigationContext::new(self.clone(), instruction)
	}

	/// Generates the URL of the route named `name`.
	///
	/// # Errors
	///
	/// Fails for unknown names and missing parameters.
	pub fn generate(&self, name: &str, params: &HashMap<String, String>) -> RouterResult<String> {
		self.state().table.generate(name, params)
	}

	/// Navigates to `fragment`, relative to this router's base URL.
	///
	/// # Errors
	///
	/// Propagates the history's failure.
	pub fn navigate(&self, fragment: &str, options: NavigationOptions) -> RouterResult<()> {
		let fragment = join(&self.base_url(), fragment);
		tracing::debug!(fragment = %fragment, "navigate");
		self.inner.history.navigate(&fragment, options)
	}

	/// Goes back one history entry.
	pub fn navigate_back(&self) {
		self.inner.history.navigate_back();
	}

	/// Creates a child router sharing this router's history.
	pub fn create_child(&self) -> Router {
		Self {
			inner: Arc::new(RouterInner {
				history: Arc::clone(&self.inner.history),
				parent: Some(Arc::downgrade(&self.inner)),
				state: Mutex::new(RouterState::new()),
			}),
		}
	}

	/// Recomputes the base URL from the parent's current instruction.
	///
	/// Does nothing for a root router. Must be called after the parent's
	/// current instruction changes.
	pub fn refresh_base_url(&self) {
		let Some(parent) = self.parent() else {
			return;
		};
		let Some(instruction) = parent.current_instruction() else {
			tracing::warn!("parent router has no current instruction, base url unchanged");
			return;
		};

		let base_url = format!("{}{}", parent.base_url(), instruction.base_url());
		tracing::trace!(base_url = %base_url, "base url refreshed");
		self.state().base_url = base_url;
	}

	/// Recomputes the menu links against the current base URL.
	pub fn refresh_navigation(&self) {
		let state = self.state();
		state.navigation.refresh(&state.base_url);
	}

	/// Applies a configuration object or setup closure.
	///
	/// ```
	/// # use reinhardt_navigation::{MemoryHistory, RouteConfig, Router};
	/// # use std::sync::Arc;
	/// let router = Router::new(Arc::new(MemoryHistory::new()));
	/// router
	///     .configure(|config: &mut reinhardt_navigation::RouterConfiguration| {
	///         config.title("Admin");
	///         config.map(RouteConfig::new("users").with_module_id("users"));
	///     })
	///     .unwrap();
	/// assert_eq!(router.title().as_deref(), Some("Admin"));
	/// ```
	///
	/// # Errors
	///
	/// Returns the first error reported while registering routes.
	pub fn configure(&self, configurator: impl RouterConfigurator) -> RouterResult<&Self> {
		configurator.apply(self)?;
		Ok(self)
	}

	/// Clears routes, the menu and the navigating flag.
	///
	/// Viewports, the catch-all handler, the base URL and the parent link are
	/// kept.
	pub fn reset(&self) {
		let mut state = self.state();
		state.table = RouteTable::new();
		state.navigation = NavigationModel::new();
		state.is_navigating = false;
	}

	/// The prefix every navigation of this router is joined onto.
	pub fn base_url(&self) -> String {
		self.state().base_url.clone()
	}

	/// Whether a navigation is in progress. Advisory only.
	pub fn is_navigating(&self) -> bool {
		self.state().is_navigating
	}

	pub fn set_navigating(&self, navigating: bool) {
		self.state().is_navigating = navigating;
	}

	/// The last committed instruction.
	pub fn current_instruction(&self) -> Option<Arc<NavigationInstruction>> {
		self.state().current_instruction.clone()
	}

	pub fn set_current_instruction(&self, instruction: Arc<NavigationInstruction>) {
		self.state().current_instruction = Some(instruction);
	}

	/// The router's title, appended to document titles.
	pub fn title(&self) -> Option<String> {
		self.state().title.clone()
	}

	pub fn set_title(&self, title: impl Into<String>) {
		self.state().title = Some(title.into());
	}

	pub fn options(&self) -> RouterOptions {
		self.state().options.clone()
	}

	pub fn set_options(&self, options: RouterOptions) {
		self.state().options = options;
	}

	/// Registered route definitions, in registration order.
	pub fn routes(&self) -> Vec<Arc<RouteConfig>> {
		self.state()
			.table
			.routes()
			.iter()
			.map(|target| Arc::clone(&target.config))
			.collect()
	}

	/// Menu entries, in display order.
	pub fn navigation(&self) -> Vec<NavModel> {
		self.state().navigation.entries().to_vec()
	}

	/// The parent router, if this is a child that is still attached.
	pub fn parent(&self) -> Option<Router> {
		self.inner
			.parent
			.as_ref()
			.and_then(Weak::upgrade)
			.map(|inner| Router { inner })
	}

	/// Checks if a route named `name` is registered.
	pub fn has_route(&self, name: &str) -> bool {
		self.state().table.has_route(name)
	}

	/// The history collaborator.
	pub fn history(&self) -> Arc<dyn History> {
		Arc::clone(&self.inner.history)
	}

	/// Returns whether both handles refer to the same router.
	pub fn ptr_eq(&self, other: &Router) -> bool {
		Arc::ptr_eq(&self.inner, &other.inner)
	}
}

impl std::fmt::Debug for Router {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let state = self.state();
		f.debug_struct("Router")
			.field("base_url", &state.base_url)
			.field("routes", &state.table.routes().len())
			.field("navigation", &state.navigation.len())
			.field("view_ports", &state.view_ports.len())
			.field("is_navigating", &state.is_navigating)
			.field("has_parent", &self.inner.parent.is_some())
			.finish()
	}
}
