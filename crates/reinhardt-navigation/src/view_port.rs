//! Viewports (named outlets) and their registration state.
//!
//! A viewport appearing for an outlet and the owning component's request to
//! be told about it arrive independently and in either order. Each outlet
//! moves through `Unregistered -> PendingCallback -> Bound` (or straight to
//! `Bound` when the viewport arrives first).

use crate::error::RouterResult;
use crate::potential::Potential;
use std::sync::Arc;

/// Optional router-aware setup step of a viewport's owning component.
pub trait RouterSetup: Send + Sync {
	/// Configures the component's router before the outlet is bound.
	fn configure_router(&self) -> Potential<RouterResult<()>>;
}

/// The component instance that owns a viewport.
pub trait ExecutionContext: Send + Sync {
	/// Returns the router-aware setup step, if the component has one.
	fn router_setup(&self) -> Option<&dyn RouterSetup> {
		None
	}
}

/// A named placeholder where resolved views are rendered.
pub trait ViewPort: Send + Sync {
	/// The component that owns this viewport.
	fn execution_context(&self) -> &dyn ExecutionContext;
}

/// Callback waiting for an outlet's viewport.
pub type ViewPortCallback = Box<dyn FnOnce(Arc<dyn ViewPort>) + Send>;

/// Registration state of one outlet, stored by the router.
pub(crate) enum ViewPortSlot {
	PendingCallback(ViewPortCallback),
	Bound(Arc<dyn ViewPort>),
}

/// Observable registration state of an outlet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewPortState {
	/// Nothing has been registered for the outlet.
	Unregistered,
	/// A callback waits for the outlet's viewport.
	PendingCallback,
	/// A viewport is bound to the outlet.
	Bound,
}

impl ViewPortSlot {
	pub(crate) fn state(slot: Option<&Self>) -> ViewPortState {
		match slot {
			None => ViewPortState::Unregistered,
			Some(Self::PendingCallback(_)) => ViewPortState::PendingCallback,
			Some(Self::Bound(_)) => ViewPortState::Bound,
		}
	}
}

/// Runs the viewport's router-aware setup step, if any.
///
/// Without a setup step the result is ready immediately.
pub(crate) fn configure_for_view_port(view_port: &Arc<dyn ViewPort>) -> Potential<RouterResult<()>> {
	match view_port.execution_context().router_setup() {
		Some(setup) => setup.configure_router(),
		None => Potential::ready(Ok(())),
	}
}
