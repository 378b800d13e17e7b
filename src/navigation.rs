//! Navigation router module.
//!
//! This module provides the client-side router: route tables, navigation
//! menus, nested routers and viewport coordination.
//!
//! # Examples
//!
//! ```rust,no_run
//! use reinhardt_nav::navigation::{MemoryHistory, Router};
//! ```

#[cfg(feature = "navigation")]
pub use reinhardt_navigation::*;
