//! Client-side navigation routing for Reinhardt.
//!
//! This crate resolves URL fragments into navigation instructions and keeps a
//! tree of nested routers consistent:
//!
//! - **Route table**: route definitions registered with a primary matcher and
//!   a child matcher that accepts an extra remainder for nested routers
//! - **Navigation model**: ordered menu entries derived from routes that opt in
//! - **Instruction builder**: URL + optional parent instruction into a
//!   [`NavigationInstruction`], with catch-all and dynamic handler fallback
//! - **Viewport coordination**: binds named outlets whichever of the viewport
//!   and its configuration callback arrives first
//! - **Router hierarchy**: child routers, inherited base URLs and history
//!   forwarding
//!
//! # Quick Start
//!
//! ```rust
//! use reinhardt_navigation::{MemoryHistory, RouteConfig, Router};
//! use std::sync::Arc;
//!
//! # futures::executor::block_on(async {
//! let router = Router::new(Arc::new(MemoryHistory::new()));
//! router
//!     .add_route(RouteConfig::new("users/:id").with_module_id("users/detail"), None)
//!     .unwrap();
//!
//! let instruction = router
//!     .create_navigation_instruction("users/42?tab=info", None)
//!     .await
//!     .unwrap();
//!
//! assert_eq!(instruction.fragment(), "users/42");
//! assert_eq!(instruction.query_string(), Some("tab=info"));
//! assert_eq!(instruction.params()["id"], "42");
//! # });
//! ```
//!
//! # Nested routers
//!
//! ```rust
//! use reinhardt_navigation::{MemoryHistory, RouteConfig, Router};
//! use std::sync::Arc;
//!
//! # futures::executor::block_on(async {
//! let root = Router::new(Arc::new(MemoryHistory::new()));
//! root.add_route(RouteConfig::new("admin").with_module_id("admin"), None)
//!     .unwrap();
//!
//! // "admin/users" is not a root route, so the child matcher resolves it
//! // and leaves "users" for the nested router.
//! let instruction = root
//!     .create_navigation_instruction("admin/users", None)
//!     .await
//!     .unwrap();
//! root.create_navigation_context(instruction).commit_changes();
//!
//! let child = root.create_child();
//! child.refresh_base_url();
//! assert_eq!(child.base_url(), "admin/");
//! # });
//! ```

pub mod config;
pub mod configuration;
pub mod error;
pub mod history;
pub mod instruction;
pub mod nav_model;
pub mod navigation_context;
pub mod path;
pub mod potential;
pub mod route_table;
pub mod router;
pub mod unknown_routes;
pub mod view_port;

mod resolver;

pub use config::{DEFAULT_VIEW_PORT, NavSetting, RouteConfig, RouteHandler, ViewPortConfig};
pub use configuration::{RouteMapping, RoutePatterns, RouterConfiguration, RouterOptions};
pub use error::{RouterError, RouterResult};
pub use history::{History, MemoryHistory, NavigationOptions};
pub use instruction::{CHILD_ROUTE_PARAM, NavigationInstruction};
pub use nav_model::{FALLBACK_ORDER_START, NavModel, NavModelEntry, NavigationModel};
pub use navigation_context::{DEFAULT_TITLE_SEPARATOR, NavigationContext};
pub use path::join;
pub use potential::Potential;
pub use route_table::{RouteTable, RouteTarget};
pub use router::{Router, RouterConfigurator};
pub use unknown_routes::{UNKNOWN_PATH_PARAM, UnknownRouteResolver, UnknownRoutes};
pub use view_port::{ExecutionContext, RouterSetup, ViewPort, ViewPortCallback, ViewPortState};

pub use reinhardt_route_recognizer as recognizer;
