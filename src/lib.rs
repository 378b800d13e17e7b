//! # Reinhardt Nav
//!
//! Client-side navigation routing for single-page applications.
//!
//! Reinhardt Nav resolves URL fragments into navigation instructions, drives a
//! tree of nested routers, binds named outlets ("viewports") regardless of
//! arrival order, and maintains navigation menus derived from the route table.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `navigation` - The router core
//! - `toml-config` - Loading router configuration from TOML
//!
//! The route pattern recognizer is always available as [`recognizer`].
//!
//! ## Quick Example
//!
//! ```rust
//! use reinhardt_nav::prelude::*;
//! use std::sync::Arc;
//!
//! # futures::executor::block_on(async {
//! let router = Router::new(Arc::new(MemoryHistory::new()));
//! router
//!     .configure(|config: &mut RouterConfiguration| {
//!         config.title("Shop");
//!         config.map(RouteConfig::new("").with_module_id("home").with_nav(true));
//!         config.map(RouteConfig::new("products/:id").with_module_id("products/detail"));
//!         config.map_unknown_routes("not-found");
//!     })
//!     .unwrap();
//!
//! let instruction = router
//!     .create_navigation_instruction("products/7", None)
//!     .await
//!     .unwrap();
//! assert_eq!(instruction.params()["id"], "7");
//!
//! let missing = router
//!     .create_navigation_instruction("nowhere", None)
//!     .await
//!     .unwrap();
//! assert_eq!(missing.config().module_id.as_deref(), Some("not-found"));
//! # });
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(feature = "navigation")]
#[cfg_attr(docsrs, doc(cfg(feature = "navigation")))]
pub mod navigation;

pub use reinhardt_route_recognizer as recognizer;

#[cfg(feature = "navigation")]
#[cfg_attr(docsrs, doc(cfg(feature = "navigation")))]
pub use navigation::{
	History, MemoryHistory, NavModel, NavigationContext, NavigationInstruction,
	NavigationOptions, Potential, RouteConfig, Router, RouterConfiguration, RouterError,
	RouterResult, UnknownRoutes, ViewPort,
};

/// Commonly used types.
#[cfg(feature = "navigation")]
#[cfg_attr(docsrs, doc(cfg(feature = "navigation")))]
pub mod prelude {
	pub use crate::navigation::{
		ExecutionContext, History, MemoryHistory, NavModel, NavSetting, NavigationContext,
		NavigationInstruction, NavigationOptions, Potential, RouteConfig, Router,
		RouterConfiguration, RouterError, RouterOptions, RouterResult, RouterSetup,
		UnknownRoutes, ViewPort, ViewPortState,
	};
}
